//! Report writing functionality

use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use crate::reporting::scan_report::ScanReport;

/// Items listed per section before the rest are summarised
pub const DISPLAY_LIMIT: usize = 10;

const RULE_WIDTH: usize = 80;

fn heavy_rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn light_rule() -> String {
    "-".repeat(RULE_WIDTH)
}

fn write_overflow<W: Write>(out: &mut W, total: usize) -> Result<()> {
    if total > DISPLAY_LIMIT {
        writeln!(out, "  ... and {} more", total - DISPLAY_LIMIT)?;
    }
    Ok(())
}

fn short_hash(hash: &str) -> &str {
    hash.get(..12).unwrap_or(hash)
}

/// Write the human-readable report
///
/// # Arguments
/// * `out` - Destination, normally stdout
/// * `report` - Findings of a completed scan
///
/// # Returns
/// Result indicating success or failure
pub fn write_report<W: Write>(out: &mut W, report: &ScanReport) -> Result<()> {
    writeln!(out, "{}", heavy_rule())?;
    writeln!(out, "XSD REPOSITORY VALIDATION REPORT")?;
    writeln!(out, "{}", heavy_rule())?;
    writeln!(out)?;

    // Duplicates
    writeln!(out, "Duplicate XSD Files")?;
    writeln!(out, "{}", light_rule())?;
    if report.duplicates.is_empty() {
        writeln!(out, "✓ No duplicate files found")?;
    } else {
        writeln!(out, "Found {} sets of duplicate files:", report.duplicates.len())?;
        writeln!(out)?;
        for (idx, group) in report.duplicates.iter().take(DISPLAY_LIMIT).enumerate() {
            writeln!(
                out,
                "{}. {} identical files (hash: {}...):",
                idx + 1,
                group.files.len(),
                short_hash(&group.hash)
            )?;
            if let Some(ns) = &group.target_namespace {
                writeln!(out, "   Target Namespace: {}", ns)?;
            }
            for file in &group.files {
                writeln!(out, "   - {}", file.relative.display())?;
            }
            writeln!(out)?;
        }
        write_overflow(out, report.duplicates.len())?;
    }
    writeln!(out)?;

    // Versions
    writeln!(out, "Version Numbers in Filenames")?;
    writeln!(out, "{}", light_rule())?;
    if report.versioned.is_empty() {
        writeln!(out, "✓ No version numbers in filenames")?;
    } else {
        writeln!(out, "Found {} files with version numbers in names:", report.versioned.len())?;
        writeln!(out)?;
        for finding in report.versioned.iter().take(DISPLAY_LIMIT) {
            writeln!(
                out,
                "  - {} (contains '{}')",
                finding.file.relative.display(),
                finding.version
            )?;
        }
        write_overflow(out, report.versioned.len())?;
    }
    writeln!(out)?;

    // Unencoded spaces
    writeln!(out, "Unencoded Spaces in schemaLocation")?;
    writeln!(out, "{}", light_rule())?;
    if report.unencoded_spaces.is_empty() {
        writeln!(out, "✓ No unencoded spaces in schemaLocation attributes")?;
    } else {
        writeln!(
            out,
            "Found {} schemaLocation attributes with unencoded spaces:",
            report.unencoded_spaces.len()
        )?;
        writeln!(out)?;
        for violation in report.unencoded_spaces.iter().take(DISPLAY_LIMIT) {
            writeln!(out, "  - {}:{}", violation.file.relative.display(), violation.line)?;
            writeln!(out, "    schemaLocation=\"{}\"", violation.location)?;
        }
        write_overflow(out, report.unencoded_spaces.len())?;
    }
    writeln!(out)?;

    if !report.skipped.is_empty() {
        writeln!(out, "Unreadable Files")?;
        writeln!(out, "{}", light_rule())?;
        for skipped in report.skipped.iter().take(DISPLAY_LIMIT) {
            writeln!(out, "  - {}: {}", skipped.file.relative.display(), skipped.reason)?;
        }
        write_overflow(out, report.skipped.len())?;
        writeln!(out)?;
    }

    // Summary
    writeln!(out, "{}", heavy_rule())?;
    writeln!(out, "SUMMARY")?;
    writeln!(out, "{}", heavy_rule())?;
    writeln!(out, "Total XSD files scanned: {}", report.total_files)?;
    writeln!(out, "Duplicates: {} duplicate sets found", report.duplicates.len())?;
    writeln!(out, "Versions in filenames: {} files", report.versioned.len())?;
    writeln!(out, "Unencoded spaces: {} violations", report.unencoded_spaces.len())?;
    if !report.skipped.is_empty() {
        writeln!(out, "Unreadable files: {}", report.skipped.len())?;
    }
    writeln!(out)?;

    if report.has_issues() {
        writeln!(out, "❌ VALIDATION FAILED - Issues detected")?;
    } else {
        writeln!(out, "✓ VALIDATION PASSED - No issues detected")?;
    }

    Ok(())
}

#[derive(Serialize)]
struct Summary {
    total_files: usize,
    duplicate_sets: usize,
    versioned_files: usize,
    unencoded_spaces: usize,
    unreadable_files: usize,
    passed: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: Summary,
    #[serde(flatten)]
    findings: &'a ScanReport,
}

/// Write the full, untruncated report as pretty-printed JSON
pub fn write_json_report<W: Write>(out: &mut W, report: &ScanReport) -> Result<()> {
    let json = JsonReport {
        summary: Summary {
            total_files: report.total_files,
            duplicate_sets: report.duplicates.len(),
            versioned_files: report.versioned.len(),
            unencoded_spaces: report.unencoded_spaces.len(),
            unreadable_files: report.skipped.len(),
            passed: !report.has_issues(),
        },
        findings: report,
    };
    serde_json::to_writer_pretty(&mut *out, &json)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::filename_version::VersionFinding;
    use crate::checks::schema_location::WhitespaceViolation;
    use crate::scanner::duplicate_detector::DuplicateGroup;
    use crate::scanner::file_scanner::SchemaFile;
    use std::path::{Path, PathBuf};

    fn schema_file(name: &str) -> SchemaFile {
        SchemaFile::new(Path::new("/repo"), PathBuf::from("/repo").join(name))
    }

    fn render(report: &ScanReport) -> String {
        let mut buf = Vec::new();
        write_report(&mut buf, report).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_report_clean() {
        let report = ScanReport {
            total_files: 4,
            ..Default::default()
        };

        let content = render(&report);
        assert!(content.contains("✓ No duplicate files found"));
        assert!(content.contains("✓ No version numbers in filenames"));
        assert!(content.contains("✓ No unencoded spaces in schemaLocation attributes"));
        assert!(content.contains("Total XSD files scanned: 4"));
        assert!(content.contains("✓ VALIDATION PASSED - No issues detected"));
        assert!(!content.contains("Unreadable Files"));
    }

    #[test]
    fn test_write_report_duplicates() {
        let report = ScanReport {
            total_files: 2,
            duplicates: vec![DuplicateGroup {
                hash: "6ae8a75555209fd6c44157c0aed8016e763ff435a19cf186f76863140143ff72"
                    .to_string(),
                files: vec![schema_file("a.xsd"), schema_file("nested/b.xsd")],
                target_namespace: Some("urn:example".to_string()),
            }],
            ..Default::default()
        };

        let content = render(&report);
        assert!(content.contains("1. 2 identical files (hash: 6ae8a7555520...):"));
        assert!(content.contains("   Target Namespace: urn:example"));
        assert!(content.contains("   - a.xsd"));
        assert!(content.contains("   - nested/b.xsd"));
        assert!(content.contains("❌ VALIDATION FAILED - Issues detected"));
    }

    #[test]
    fn test_truncation_keeps_full_counts() {
        let versioned: Vec<_> = (0..13)
            .map(|i| VersionFinding {
                file: schema_file(&format!("s{}_1.{}.xsd", i, i)),
                version: format!("_1.{}", i),
            })
            .collect();
        let unencoded_spaces: Vec<_> = (0..11)
            .map(|i| WhitespaceViolation {
                file: schema_file("refs.xsd"),
                line: i + 1,
                location: format!("dir {}.xsd", i),
            })
            .collect();
        let report = ScanReport {
            total_files: 14,
            versioned,
            unencoded_spaces,
            ..Default::default()
        };

        let content = render(&report);
        assert!(content.contains("s9_1.9.xsd (contains '_1.9')"));
        assert!(!content.contains("s10_1.10.xsd"));
        assert!(content.contains("  ... and 3 more"));
        assert!(content.contains("  ... and 1 more"));
        assert!(content.contains("Versions in filenames: 13 files"));
        assert!(content.contains("Unencoded spaces: 11 violations"));
    }

    #[test]
    fn test_write_report_whitespace() {
        let report = ScanReport {
            total_files: 1,
            unencoded_spaces: vec![WhitespaceViolation {
                file: schema_file("c_2.0.xsd"),
                line: 3,
                location: "x y.xsd".to_string(),
            }],
            ..Default::default()
        };

        let content = render(&report);
        assert!(content.contains("  - c_2.0.xsd:3"));
        assert!(content.contains("    schemaLocation=\"x y.xsd\""));
    }

    #[test]
    fn test_write_json_report() {
        let report = ScanReport {
            total_files: 2,
            versioned: vec![VersionFinding {
                file: schema_file("types-v3.10.xsd"),
                version: "-v3.10".to_string(),
            }],
            ..Default::default()
        };

        let mut buf = Vec::new();
        write_json_report(&mut buf, &report).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["summary"]["total_files"], 2);
        assert_eq!(value["summary"]["versioned_files"], 1);
        assert_eq!(value["summary"]["passed"], false);
        assert_eq!(value["versioned"][0]["file"]["path"], "types-v3.10.xsd");
        assert_eq!(value["versioned"][0]["version"], "-v3.10");
    }

    #[cfg(unix)]
    #[test]
    fn test_json_report_with_non_utf8_path() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let name = OsStr::from_bytes(b"caf\xe9_1.0.xsd");
        let report = ScanReport {
            total_files: 1,
            versioned: vec![VersionFinding {
                file: SchemaFile::new(Path::new("/repo"), Path::new("/repo").join(name)),
                version: "_1.0".to_string(),
            }],
            ..Default::default()
        };

        let mut buf = Vec::new();
        write_json_report(&mut buf, &report).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["versioned"][0]["file"]["path"], "caf\u{FFFD}_1.0.xsd");
    }
}
