//! Detection pipeline: prioritized signature scan over a batch of logs.
//!
//! For each log line the pipeline walks the catalog in priority order.
//! A case-insensitive substring check is tried first; only when it fails
//! does the selected matcher run on the original-case line and pattern.
//! The first signature that produces any match wins the line, so each
//! line yields at most one [`DetectionRecord`].
//!
//! Log lines are independent units of work, so batches can optionally be
//! processed in parallel; input order and per-line semantics are
//! preserved either way.

use crate::catalog::{AttackCategory, PatternCatalog};
use crate::config::DetectionConfig;
use crate::error::Result;
use crate::matcher::{self, Algorithm};
use crate::prefilter::SignaturePrefilter;
use crate::trace::TraceFrame;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One detected intrusion: a log line, the signature that matched, and
/// the evidence of how it matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionRecord {
    /// The log line, unmodified.
    pub log: String,
    /// The signature that matched, in catalog casing.
    pub pattern: String,
    /// The signature's attack category.
    pub category: AttackCategory,
    /// The trace: a single note for the substring fast path, or the
    /// matcher's frames for the fallback.
    pub steps: Vec<TraceFrame>,
    /// 0-based character offsets of every occurrence.
    pub indices: Vec<usize>,
    /// Occurrence count; always `indices.len()`.
    pub count: usize,
}

/// Scan a batch of log lines sequentially, with no prefilter. The
/// returned records are in input-line order.
pub fn detect(
    logs: &[String],
    catalog: &PatternCatalog,
    algorithm: Algorithm,
) -> Vec<DetectionRecord> {
    logs.iter()
        .filter_map(|log| scan_line(log, catalog, algorithm))
        .collect()
}

/// Scan a batch of log lines honoring the detection configuration:
/// an optional catalog prefilter, and an optional parallel path for
/// large batches. Output is identical to [`detect`] for any input.
pub fn detect_with_config(
    logs: &[String],
    catalog: &PatternCatalog,
    algorithm: Algorithm,
    config: &DetectionConfig,
) -> Result<Vec<DetectionRecord>> {
    let prefilter = if config.enable_prefilter {
        Some(SignaturePrefilter::from_catalog(catalog)?)
    } else {
        None
    };

    let scan = |log: &String| -> Option<DetectionRecord> {
        if let Some(filter) = &prefilter {
            if !filter.matches(log) {
                return None;
            }
        }
        scan_line(log, catalog, algorithm)
    };

    let records: Vec<DetectionRecord> =
        if config.enable_parallel && logs.len() >= config.min_logs_for_parallelism {
            logs.par_iter().filter_map(scan).collect()
        } else {
            logs.iter().filter_map(scan).collect()
        };

    tracing::debug!(
        lines = logs.len(),
        detections = records.len(),
        algorithm = %algorithm,
        "detection batch complete"
    );
    Ok(records)
}

/// Read log lines from a file, trimming whitespace and dropping blanks.
pub fn read_log_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

/// Scan one log line against the catalog in priority order; the first
/// signature with any occurrence wins.
fn scan_line(log: &str, catalog: &PatternCatalog, algorithm: Algorithm) -> Option<DetectionRecord> {
    let log_lower = log.to_lowercase();
    let log_lower_chars: Vec<char> = log_lower.chars().collect();

    for pattern in catalog.signatures() {
        let pattern_lower = pattern.to_lowercase();

        let (steps, indices) = if log_lower.contains(&pattern_lower) {
            let pattern_lower_chars: Vec<char> = pattern_lower.chars().collect();
            let indices = find_all(&log_lower_chars, &pattern_lower_chars);
            let steps = vec![TraceFrame::Note {
                message: format!("Pattern '{pattern}' found as substring in log."),
            }];
            (steps, indices)
        } else {
            let outcome = matcher::search(algorithm, log, pattern, true);
            (outcome.frames, outcome.matches)
        };

        if !indices.is_empty() {
            let count = indices.len();
            return Some(DetectionRecord {
                log: log.to_string(),
                pattern: pattern.to_string(),
                category: catalog.category_for(pattern),
                steps,
                indices,
                count,
            });
        }
    }
    None
}

/// Every occurrence offset of `needle` in `haystack`, found by repeated
/// forward search restarting one past each hit, so overlapping
/// occurrences are all reported.
fn find_all(haystack: &[char], needle: &[char]) -> Vec<usize> {
    let mut indices = Vec::new();
    let mut start = 0;
    while let Some(offset) = find_from(haystack, needle, start) {
        indices.push(offset);
        start = offset + 1;
    }
    indices
}

fn find_from(haystack: &[char], needle: &[char], start: usize) -> Option<usize> {
    if needle.is_empty() || start + needle.len() > haystack.len() {
        return None;
    }
    (start..=haystack.len() - needle.len())
        .find(|&i| haystack[i..i + needle.len()] == needle[..])
}
