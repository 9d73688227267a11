//! File scanning and duplicate detection

pub mod file_scanner;
pub mod duplicate_detector;

pub use file_scanner::{collect_schema_files, SchemaFile, SkippedFile};
pub use duplicate_detector::{compute_file_hash, find_duplicates, DuplicateGroup, DuplicateScan};
