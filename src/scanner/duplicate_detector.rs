//! Duplicate schema detection using SHA-256 hashing

use anyhow::Result;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

use crate::config::FailurePolicy;
use crate::checks::target_namespace::read_target_namespace;
use crate::scanner::file_scanner::{SchemaFile, SkippedFile};

/// A set of byte-identical schema files
#[derive(Debug, Clone, Serialize)]
pub struct DuplicateGroup {
    pub hash: String,
    /// Members in discovery order
    pub files: Vec<SchemaFile>,
    /// `targetNamespace` of the first member, if it has one
    pub target_namespace: Option<String>,
}

/// Outcome of the duplicate check
#[derive(Debug, Clone, Default)]
pub struct DuplicateScan {
    pub groups: Vec<DuplicateGroup>,
    pub skipped: Vec<SkippedFile>,
}

const CHUNK_SIZE: usize = 8192;

/// SHA-256 digest of a schema file's bytes, lowercase hex
///
/// The file is streamed in fixed-size chunks so memory stays bounded for
/// large schemas. Symlinks are followed.
pub fn compute_file_hash(path: &Path) -> Result<String> {
    let mut reader = File::open(path)?;
    let mut digest = Sha256::new();
    let mut chunk = [0u8; CHUNK_SIZE];

    loop {
        match reader.read(&mut chunk)? {
            0 => break,
            n => digest.update(&chunk[..n]),
        }
    }

    Ok(format!("{:x}", digest.finalize()))
}

/// Find byte-identical schema files
///
/// # Arguments
/// * `files` - Discovered schema files
/// * `policy` - Whether an unreadable file aborts the check or is skipped
///
/// # Returns
/// Groups of two or more identical files, ordered by first appearance
pub fn find_duplicates(files: &[SchemaFile], policy: FailurePolicy) -> Result<DuplicateScan> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut buckets: Vec<(String, Vec<SchemaFile>)> = Vec::new();
    let mut skipped = Vec::new();

    for file in files {
        let hash = match compute_file_hash(&file.path) {
            Ok(hash) => hash,
            Err(e) => match policy {
                FailurePolicy::FailFast => {
                    return Err(e.context(format!(
                        "Failed to hash {}",
                        file.relative.display()
                    )));
                }
                FailurePolicy::Skip => {
                    warn!("Could not hash {}: {}", file.relative.display(), e);
                    skipped.push(SkippedFile {
                        file: file.clone(),
                        reason: e.to_string(),
                    });
                    continue;
                }
            },
        };
        debug!(file = %file.relative.display(), %hash, "hashed");

        match index.get(&hash) {
            Some(&slot) => buckets[slot].1.push(file.clone()),
            None => {
                index.insert(hash.clone(), buckets.len());
                buckets.push((hash, vec![file.clone()]));
            }
        }
    }

    let groups = buckets
        .into_iter()
        .filter(|(_, files)| files.len() > 1)
        .map(|(hash, files)| {
            let target_namespace = read_target_namespace(&files[0].path);
            DuplicateGroup {
                hash,
                files,
                target_namespace,
            }
        })
        .collect();

    Ok(DuplicateScan { groups, skipped })
}
