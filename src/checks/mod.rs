//! Content and filename checks for schema files

pub mod filename_version;
pub mod schema_location;
pub mod target_namespace;

pub use filename_version::{find_versioned_files, match_version, VersionFinding};
pub use schema_location::{
    find_unencoded_spaces, is_unencoded, scan_text, WhitespaceScan, WhitespaceViolation,
};
pub use target_namespace::read_target_namespace;
