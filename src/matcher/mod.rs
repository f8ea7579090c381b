//! Exact string-search algorithms behind one contract.
//!
//! Four algorithms locate every occurrence of a pattern inside a text:
//! a naive scan, Knuth-Morris-Pratt, Boyer-Moore (bad-character rule
//! only), and Horspool. They share the contract
//! `(text, pattern, trace) -> (matches, frames)`: sorted 0-based start
//! offsets plus an ordered trace of decision frames. All four return
//! set-identical offsets for any input; they differ only in comparison
//! order and shift strategy, which is exactly what the trace makes
//! visible.
//!
//! Matching is leftmost-first and overlapping occurrences are reported.
//! An empty pattern, or a pattern longer than the text, yields no matches
//! and no frames.
//!
//! # Example
//!
//! ```rust,ignore
//! use sentinel_engine::matcher::{search, Algorithm};
//!
//! let outcome = search(Algorithm::Horspool, "aaaa", "aa", true);
//! assert_eq!(outcome.matches, vec![0, 1, 2]);
//! ```

pub mod boyer_moore;
pub mod horspool;
pub mod kmp;
pub mod naive;

use crate::error::{Result, SentinelError};
use crate::trace::{TraceFrame, TraceRecorder};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Selector for the closed set of search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Naive,
    Kmp,
    BoyerMoore,
    Horspool,
}

impl Algorithm {
    /// Every algorithm, in presentation order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Naive,
        Algorithm::Kmp,
        Algorithm::BoyerMoore,
        Algorithm::Horspool,
    ];

    /// The lowercase wire name of the algorithm.
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Naive => "naive",
            Algorithm::Kmp => "kmp",
            Algorithm::BoyerMoore => "boyer_moore",
            Algorithm::Horspool => "horspool",
        }
    }

    /// Resolve a wire name, e.g. from an external request.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "naive" => Ok(Algorithm::Naive),
            "kmp" => Ok(Algorithm::Kmp),
            "boyer_moore" => Ok(Algorithm::BoyerMoore),
            "horspool" => Ok(Algorithm::Horspool),
            other => Err(SentinelError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Match offsets plus the trace that produced them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOutcome {
    /// 0-based character offsets where the pattern starts, ascending.
    pub matches: Vec<usize>,
    /// Ordered decision frames; empty when tracing was disabled.
    pub frames: Vec<TraceFrame>,
}

/// Run the selected algorithm over `text` looking for `pattern`.
pub fn search(algorithm: Algorithm, text: &str, pattern: &str, trace_enabled: bool) -> SearchOutcome {
    let mut recorder = TraceRecorder::new(trace_enabled);
    let matches = match algorithm {
        Algorithm::Naive => naive::search(text, pattern, &mut recorder),
        Algorithm::Kmp => kmp::search(text, pattern, &mut recorder),
        Algorithm::BoyerMoore => boyer_moore::search(text, pattern, &mut recorder),
        Algorithm::Horspool => horspool::search(text, pattern, &mut recorder),
    };
    SearchOutcome {
        matches,
        frames: recorder.into_frames(),
    }
}

/// Render the aligned text window starting at `start`, clamped to the
/// text length.
pub(crate) fn window(text: &[char], start: usize, len: usize) -> String {
    let end = (start + len).min(text.len());
    text[start..end].iter().collect()
}
