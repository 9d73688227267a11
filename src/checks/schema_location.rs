//! Unencoded spaces in `schemaLocation` attributes

use anyhow::{Context, Result};
use regex::Regex;
use serde::Serialize;
use std::fs;
use tracing::warn;

use crate::config::SpaceRule;
use crate::scanner::file_scanner::{SchemaFile, SkippedFile};

lazy_static::lazy_static! {
    static ref SCHEMA_LOCATION: Regex =
        Regex::new(r#"schemaLocation\s*=\s*["']([^"']*)["']"#).unwrap();
}

const ENCODED_SPACE: &str = "%20";

/// A `schemaLocation` value containing an unencoded space
#[derive(Debug, Clone, Serialize)]
pub struct WhitespaceViolation {
    pub file: SchemaFile,
    /// 1-based line number
    pub line: usize,
    pub location: String,
}

/// Outcome of the whitespace check
#[derive(Debug, Clone, Default)]
pub struct WhitespaceScan {
    pub violations: Vec<WhitespaceViolation>,
    pub skipped: Vec<SkippedFile>,
}

/// Whether a `schemaLocation` value counts as unencoded under `rule`
pub fn is_unencoded(location: &str, rule: SpaceRule) -> bool {
    if !location.contains(' ') {
        return false;
    }
    match rule {
        SpaceRule::Legacy => !location.contains(ENCODED_SPACE),
        SpaceRule::Strict => true,
    }
}

/// Scan text for offending `schemaLocation` values
///
/// # Returns
/// `(line, value)` pairs, lines numbered from 1
pub fn scan_text(text: &str, rule: SpaceRule) -> Vec<(usize, String)> {
    let mut hits = Vec::new();

    // `\r\n`, `\n` and a lone `\r` all end a line
    let normalized = text.replace("\r\n", "\n");
    for (idx, line) in normalized.split(|c: char| c == '\n' || c == '\r').enumerate() {
        for caps in SCHEMA_LOCATION.captures_iter(line) {
            let location = &caps[1];
            if is_unencoded(location, rule) {
                hits.push((idx + 1, location.to_string()));
            }
        }
    }

    hits
}

fn scan_file(file: &SchemaFile, rule: SpaceRule) -> Result<Vec<WhitespaceViolation>> {
    let text = fs::read_to_string(&file.path)
        .with_context(|| format!("Could not read {}", file.relative.display()))?;

    Ok(scan_text(&text, rule)
        .into_iter()
        .map(|(line, location)| WhitespaceViolation {
            file: file.clone(),
            line,
            location,
        })
        .collect())
}

/// Find `schemaLocation` attributes with unencoded spaces
///
/// Files that cannot be read as UTF-8 text are logged, recorded as skipped
/// and contribute no violations.
pub fn find_unencoded_spaces(files: &[SchemaFile], rule: SpaceRule) -> WhitespaceScan {
    let mut scan = WhitespaceScan::default();

    for file in files {
        match scan_file(file, rule) {
            Ok(violations) => scan.violations.extend(violations),
            Err(e) => {
                warn!("{:#}", e);
                scan.skipped.push(SkippedFile {
                    file: file.clone(),
                    reason: format!("{:#}", e),
                });
            }
        }
    }

    scan
}
