//! Scan configuration

use std::path::PathBuf;

/// Default schema file extension
pub const SCHEMA_EXTENSION: &str = "xsd";

/// How the duplicate detector reacts to a file it cannot read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Abort the whole run on the first unreadable file
    #[default]
    FailFast,
    /// Warn, record the file as skipped and keep going
    Skip,
}

/// Which `schemaLocation` values count as unencoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpaceRule {
    /// A literal space is a violation unless `%20` appears anywhere in the value
    #[default]
    Legacy,
    /// Any literal space is a violation
    Strict,
}

/// Settings for a single scan
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub root: PathBuf,
    pub extension: String,
    pub failure_policy: FailurePolicy,
    pub space_rule: SpaceRule,
}

impl ScanConfig {
    /// Create a configuration rooted at `root` with default policies
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: SCHEMA_EXTENSION.to_string(),
            failure_policy: FailurePolicy::default(),
            space_rule: SpaceRule::default(),
        }
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn with_space_rule(mut self, rule: SpaceRule) -> Self {
        self.space_rule = rule;
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new(".")
    }
}
