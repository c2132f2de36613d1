//! The persisted change summary (`changes-summary.json`).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const SUMMARY_FILE: &str = "changes-summary.json";

/// One logged selector substitution at a specific file and line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDiffRecord {
    pub file: String,
    /// 1-based line number.
    pub line: usize,
    pub old_class: String,
    pub new_class: String,
}

/// The durable report of all changes made in one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_changes: usize,
    /// Distinct modified paths, in first-modification order.
    pub modified_files: Vec<String>,
    pub changes: Vec<FileDiffRecord>,
}

impl Summary {
    pub fn new(changes: Vec<FileDiffRecord>, modified_files: Vec<String>) -> Self {
        Self {
            total_changes: changes.len(),
            modified_files,
            changes,
        }
    }

    pub fn has_changes(&self) -> bool {
        self.total_changes > 0
    }
}

pub fn summary_path(dir: &Path) -> PathBuf {
    dir.join(SUMMARY_FILE)
}

/// Writes the summary when changes exist; otherwise removes any stale
/// artifact from a prior run so callers never see an outdated report.
pub fn persist(summary: &Summary, dir: &Path) -> Result<()> {
    let path = summary_path(dir);

    if !summary.has_changes() {
        if path.exists() {
            std::fs::remove_file(&path).map_err(|e| {
                Error::internal_io(e.to_string(), Some(format!("remove {}", path.display())))
            })?;
        }
        return Ok(());
    }

    let payload = serde_json::to_string_pretty(summary)
        .map_err(|e| Error::internal_json(e.to_string(), Some("serialize summary".to_string())))?;

    std::fs::write(&path, payload)
        .map_err(|e| Error::internal_io(e.to_string(), Some(format!("write {}", path.display()))))
}
