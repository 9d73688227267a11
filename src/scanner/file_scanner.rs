//! Schema file discovery

use anyhow::{Context, Result};
use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// A discovered schema file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaFile {
    /// Path used to open the file
    #[serde(skip)]
    pub path: PathBuf,
    /// Path relative to the scan root, used for display
    #[serde(rename = "path", serialize_with = "serialize_lossy")]
    pub relative: PathBuf,
}

fn serialize_lossy<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

impl SchemaFile {
    pub fn new(root: &Path, path: PathBuf) -> Self {
        let relative = path
            .strip_prefix(root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.clone());
        Self { path, relative }
    }

    /// Base name of the file, without any directory components
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// A file a check could not read
#[derive(Debug, Clone, Serialize)]
pub struct SkippedFile {
    pub file: SchemaFile,
    pub reason: String,
}

/// Collect all schema files below a directory
///
/// # Arguments
/// * `root` - Directory to scan, recursively
/// * `extension` - File extension to match, without the leading dot
///
/// # Returns
/// Schema files in traversal order, including symlinks that resolve to a
/// file. Unreadable subdirectories are skipped.
pub fn collect_schema_files(root: &Path, extension: &str) -> Result<Vec<SchemaFile>> {
    let metadata = std::fs::metadata(root)
        .with_context(|| format!("Cannot access scan root {}", root.display()))?;
    if !metadata.is_dir() {
        anyhow::bail!("Scan root is not a directory: {}", root.display());
    }

    let suffix = format!(".{}", extension);
    let mut schema_files = Vec::new();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Skipping unreadable entry: {}", e);
                continue;
            }
        };
        // symlinked directories are not descended, symlinked files are kept
        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if !is_file {
            continue;
        }
        if entry.file_name().to_string_lossy().ends_with(&suffix) {
            schema_files.push(SchemaFile::new(root, entry.into_path()));
        }
    }

    debug!(count = schema_files.len(), root = %root.display(), "discovered schema files");
    Ok(schema_files)
}
