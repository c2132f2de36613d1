//! Pipeline orchestration: fetch → pair/filter/index → resolve →
//! rewrite → summarize.
//!
//! All filesystem reads and writes happen here; the stages themselves
//! are pure. Files are processed strictly in order, and any read or
//! write failure aborts the whole run.

use std::path::Path;

use crate::changes;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::http;
use crate::log_status;
use crate::resolve;
use crate::rewrite::Rewriter;
use crate::summary::{self, Summary};

/// Runs the full pipeline against the working directory.
pub fn run(config: &Config) -> Result<Summary> {
    log_status!("fetch", "Fetching changes from: {}", config.changes_url);
    let raw = http::fetch_text(&config.changes_url)?;

    run_with_change_list(&raw, &config.files_input, Path::new("."))
}

/// Runs everything below the network fetch. `summary_dir` receives the
/// `changes-summary.json` artifact (or loses a stale one).
pub fn run_with_change_list(
    raw_change_list: &str,
    files_input: &str,
    summary_dir: &Path,
) -> Result<Summary> {
    let entries = changes::parse_entries(raw_change_list);
    log_status!("changes", "Found {} change entries", entries.len());

    let pairs = changes::pair_entries(&entries);
    log_status!("changes", "Combined into {} change pairs", pairs.len());

    let relevant = changes::filter_relevant(pairs);
    log_status!("changes", "Filtered to {} relevant changes", relevant.len());

    let index = changes::build_selector_index(&relevant);

    let files = resolve::resolve_patterns(files_input)?;
    log_status!("files", "Found {} files to check", files.len());

    let rewriter = Rewriter::new(&index);
    let mut all_diffs = Vec::new();
    let mut modified_files: Vec<String> = Vec::new();

    for path in &files {
        let label = path.display().to_string();

        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::internal_io(e.to_string(), Some(format!("read {}", label))))?;

        let outcome = rewriter.rewrite(&label, &content);

        if let Some(new_content) = outcome.new_content {
            std::fs::write(path, new_content).map_err(|e| {
                Error::internal_io(e.to_string(), Some(format!("write {}", label)))
            })?;

            log_status!("rewrite", "Modified: {}", label);
            if !modified_files.contains(&label) {
                modified_files.push(label);
            }
        }

        all_diffs.extend(outcome.diffs);
    }

    let summary = Summary::new(all_diffs, modified_files);
    log_status!("summary", "Total changes: {}", summary.total_changes);
    log_status!("summary", "Modified files: {}", summary.modified_files.len());

    summary::persist(&summary, summary_dir)?;

    Ok(summary)
}
