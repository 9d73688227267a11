//! Aggregated results of a full scan

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use crate::config::ScanConfig;
use crate::checks::filename_version::{find_versioned_files, VersionFinding};
use crate::checks::schema_location::{find_unencoded_spaces, WhitespaceViolation};
use crate::scanner::duplicate_detector::{find_duplicates, DuplicateGroup};
use crate::scanner::file_scanner::{collect_schema_files, SkippedFile};

/// Findings of all three checks over one discovered file set
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanReport {
    pub total_files: usize,
    pub duplicates: Vec<DuplicateGroup>,
    pub versioned: Vec<VersionFinding>,
    pub unencoded_spaces: Vec<WhitespaceViolation>,
    /// Files a check could not read; these never affect the exit status
    pub skipped: Vec<SkippedFile>,
}

impl ScanReport {
    pub fn issue_count(&self) -> usize {
        self.duplicates.len() + self.versioned.len() + self.unencoded_spaces.len()
    }

    pub fn has_issues(&self) -> bool {
        self.issue_count() > 0
    }

    /// Process exit status: 0 when every category is empty, 1 otherwise
    pub fn exit_code(&self) -> u8 {
        if self.has_issues() {
            1
        } else {
            0
        }
    }
}

/// Discover schema files under `config.root` and run every check
///
/// Under `FailurePolicy::FailFast` an unreadable file during hashing aborts
/// the scan and no report is produced.
pub fn run_scan(config: &ScanConfig) -> Result<ScanReport> {
    let files = collect_schema_files(&config.root, &config.extension)?;
    info!("Found {} schema file(s) under {}", files.len(), config.root.display());

    let duplicates = find_duplicates(&files, config.failure_policy)?;
    info!("Found {} group(s) of duplicate files", duplicates.groups.len());

    let versioned = find_versioned_files(&files);
    info!("Found {} versioned filename(s)", versioned.len());

    let whitespace = find_unencoded_spaces(&files, config.space_rule);
    info!("Found {} unencoded schemaLocation value(s)", whitespace.violations.len());

    let mut skipped = duplicates.skipped;
    skipped.extend(whitespace.skipped);

    Ok(ScanReport {
        total_files: files.len(),
        duplicates: duplicates.groups,
        versioned,
        unencoded_spaces: whitespace.violations,
        skipped,
    })
}
