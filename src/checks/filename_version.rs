//! Version numbers embedded in schema filenames

use regex::Regex;
use serde::Serialize;

use crate::scanner::file_scanner::SchemaFile;

lazy_static::lazy_static! {
    // optional separator, optional "v", then dotted digits: "_1.2", "-v2.0", "3.10"
    static ref VERSION_PATTERN: Regex = Regex::new(r"(?i)[_\-]?v?\d+\.\d+").unwrap();
}

/// A filename containing a version marker
#[derive(Debug, Clone, Serialize)]
pub struct VersionFinding {
    pub file: SchemaFile,
    /// Exact substring matched in the file name
    pub version: String,
}

/// Return the first version marker in a file name, if any
pub fn match_version(file_name: &str) -> Option<&str> {
    VERSION_PATTERN.find(file_name).map(|m| m.as_str())
}

/// Flag schema files whose base name embeds a version number
pub fn find_versioned_files(files: &[SchemaFile]) -> Vec<VersionFinding> {
    files
        .iter()
        .filter_map(|file| {
            let name = file.file_name();
            match_version(&name).map(|version| VersionFinding {
                file: file.clone(),
                version: version.to_string(),
            })
        })
        .collect()
}
