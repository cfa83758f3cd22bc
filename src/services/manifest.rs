//! Manifest assembly and JSON persistence.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::models::{Manifest, ManifestEntry, GENERATED_BY, MANIFEST_VERSION};

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed manifest {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode manifest: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Collects entries in generation order and produces the final inventory.
#[derive(Debug, Default)]
pub struct ManifestAssembler {
    documents: Vec<ManifestEntry>,
    counts: BTreeMap<String, usize>,
}

impl ManifestAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a category so it is reported even when it produces nothing.
    pub fn declare(&mut self, category: &str) {
        self.counts.entry(category.to_string()).or_insert(0);
    }

    pub fn record(&mut self, category: &str, entry: ManifestEntry) {
        *self.counts.entry(category.to_string()).or_insert(0) += 1;
        self.documents.push(entry);
    }

    pub fn finish(self, generated_at: DateTime<Utc>) -> Manifest {
        Manifest {
            version: MANIFEST_VERSION.to_string(),
            generated_by: GENERATED_BY.to_string(),
            generated_at,
            total_documents: self.documents.len(),
            document_counts: self.counts,
            documents: self.documents,
        }
    }
}

/// Serialize `value` as pretty JSON at `path`, creating parent directories.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), ManifestError> {
    let json = serde_json::to_string_pretty(value)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ManifestError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, json).map_err(|source| ManifestError::Write {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ManifestError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_manifest(path: &Path) -> Result<Manifest, ManifestError> {
    load_json(path)
}
