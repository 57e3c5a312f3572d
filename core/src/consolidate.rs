//! # Result Consolidation
//!
//! Merges the per-mode report files into one deduplicated, sorted report.
//!
//! The dedup key is the (status, length) pair with the first occurrence
//! winning in mode order. Two genuinely distinct hosts that share a status
//! and response size therefore collapse into one record; that is a known
//! precision limit of the key and the defined behavior.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, error, warn};

/// Suffix appended to the output base for the consolidated report.
pub const FINAL_REPORT_SUFFIX: &str = "_final.json";

/// Shape of one per-mode executor report. Unknown record fields ride along
/// untouched inside each [`Value`].
#[derive(Debug, Deserialize)]
struct ProbeReport {
    #[serde(default)]
    results: Vec<Value>,
}

/// Merges `reports` (in the order the modes produced them) into
/// `<output_base>_final.json`.
///
/// Returns the written path, or `None` when there were zero usable records
/// (no file is created at all) or the write failed (logged, not fatal: the
/// probes already ran and their output was streamed).
pub fn merge_reports(reports: &[PathBuf], output_base: &str) -> Option<PathBuf> {
    let mut seen: HashSet<(u64, u64)> = HashSet::new();
    let mut merged: Vec<Value> = Vec::new();

    for path in reports {
        let records = match read_report(path) {
            Ok(records) => records,
            Err(e) => {
                warn!("skipping malformed report {}: {e:#}", path.display());
                continue;
            }
        };

        for record in records {
            // A record without both integers cannot be deduplicated safely.
            let Some(key) = dedup_key(&record) else { continue };
            if seen.insert(key) {
                merged.push(record);
            }
        }
    }

    if merged.is_empty() {
        debug!("no records to consolidate");
        return None;
    }

    merged.sort_by(|a, b| {
        status_of(a)
            .cmp(&status_of(b))
            .then_with(|| host_of(a).cmp(host_of(b)))
    });

    let path = PathBuf::from(format!("{output_base}{FINAL_REPORT_SUFFIX}"));
    let document = json!({ "results": merged });
    let rendered = match serde_json::to_string_pretty(&document) {
        Ok(rendered) => rendered,
        Err(e) => {
            error!("could not render consolidated report: {e}");
            return None;
        }
    };

    if let Err(e) = fs::write(&path, rendered) {
        error!("could not write {}: {e}", path.display());
        return None;
    }
    Some(path)
}

fn read_report(path: &Path) -> anyhow::Result<Vec<Value>> {
    let raw = fs::read_to_string(path)?;
    let report: ProbeReport = serde_json::from_str(&raw)?;
    Ok(report.results)
}

fn dedup_key(record: &Value) -> Option<(u64, u64)> {
    let status = record.get("status")?.as_u64()?;
    let length = record.get("length")?.as_u64()?;
    Some((status, length))
}

fn status_of(record: &Value) -> u64 {
    record.get("status").and_then(Value::as_u64).unwrap_or(0)
}

/// Missing hosts compare as the empty string.
fn host_of(record: &Value) -> &str {
    record.get("host").and_then(Value::as_str).unwrap_or("")
}

/// Tracks the per-mode report files and removes them best-effort on drop,
/// whatever exit path the run takes.
#[derive(Debug, Default)]
pub struct ReportSet {
    files: Vec<PathBuf>,
}

impl ReportSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&mut self, path: PathBuf) {
        self.files.push(path);
    }

    /// Report files in the order the modes produced them.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }
}

impl Drop for ReportSet {
    fn drop(&mut self) {
        for path in &self.files {
            if let Err(e) = fs::remove_file(path) {
                debug!("could not remove {}: {e}", path.display());
            }
        }
    }
}
