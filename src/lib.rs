//! XSD Hygiene Library
//!
//! Scans a tree of XML Schema files for duplicate documents, version numbers
//! in filenames and unencoded spaces in `schemaLocation` references.

pub mod config;
pub mod checks;
pub mod scanner;
pub mod reporting;

pub use reporting::report_writer;
pub use scanner::file_scanner;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{FailurePolicy, ScanConfig, SpaceRule};
    pub use crate::checks::filename_version::{find_versioned_files, match_version, VersionFinding};
    pub use crate::checks::schema_location::{
        find_unencoded_spaces, scan_text, WhitespaceScan, WhitespaceViolation,
    };
    pub use crate::checks::target_namespace::read_target_namespace;
    pub use crate::scanner::file_scanner::{collect_schema_files, SchemaFile, SkippedFile};
    pub use crate::scanner::duplicate_detector::{
        compute_file_hash, find_duplicates, DuplicateGroup, DuplicateScan,
    };
    pub use crate::reporting::scan_report::{run_scan, ScanReport};
    pub use crate::reporting::report_writer::{write_json_report, write_report};
}
