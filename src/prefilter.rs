//! Catalog-level prefilter for fast log-line elimination.
//!
//! Builds one AhoCorasick automaton over every catalog signature and
//! rejects log lines with no hit before the per-signature scan runs.
//! The automaton is ASCII-case-insensitive; since a case-sensitive
//! occurrence of a signature implies a case-insensitive one, a rejected
//! line can match under neither the pipeline's substring fast path nor
//! its fallback matchers, so filtering never changes detection output.

use crate::catalog::PatternCatalog;
use crate::error::{Result, SentinelError};
use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};

/// Multi-signature automaton answering "could any catalog signature
/// occur in this line?".
#[derive(Debug, Clone)]
pub struct SignaturePrefilter {
    automaton: AhoCorasick,
    pattern_count: usize,
}

impl SignaturePrefilter {
    /// Build the automaton over every signature in the catalog.
    pub fn from_catalog(catalog: &PatternCatalog) -> Result<Self> {
        let patterns: Vec<&str> = catalog.signatures().collect();
        let automaton = AhoCorasickBuilder::new()
            .match_kind(MatchKind::LeftmostFirst)
            .ascii_case_insensitive(true)
            .build(&patterns)
            .map_err(|e| {
                SentinelError::PrefilterBuild(format!("failed to build signature automaton: {e}"))
            })?;

        Ok(Self {
            automaton,
            pattern_count: patterns.len(),
        })
    }

    /// True if at least one signature occurs in `line`
    /// (ASCII-case-insensitively). An empty catalog matches nothing.
    pub fn matches(&self, line: &str) -> bool {
        self.automaton.is_match(line)
    }

    /// Number of signatures compiled into the automaton.
    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }
}
