//! Replayable execution traces for the string matchers.
//!
//! Every matcher reports its internal decisions as a sequence of
//! [`TraceFrame`] values collected by a [`TraceRecorder`]. Frames are
//! append-only and ordered, so replaying them reconstructs the algorithm's
//! execution exactly as it happened.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One structured record of a matcher's internal state at a single
/// decision point.
///
/// Frames are a tagged union with one variant per decision kind; each
/// variant carries only the fields that kind needs. Indices are 0-based
/// character positions into the unmodified input text. Scanning frames
/// carry a snapshot of the matches recorded so far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TraceFrame {
    /// The pattern was aligned at a new text position.
    Alignment {
        text_idx: usize,
        pattern_idx: usize,
        current_window: String,
        message: String,
        matches: Vec<usize>,
    },
    /// A single character comparison.
    Comparison {
        text_idx: usize,
        pattern_idx: usize,
        match_status: bool,
        current_window: String,
        message: String,
        matches: Vec<usize>,
    },
    /// A comparison failed and the alignment advances by one.
    Mismatch {
        text_idx: usize,
        pattern_idx: usize,
        current_window: String,
        message: String,
        matches: Vec<usize>,
    },
    /// A comparison failed and the bad-character rule chose the shift.
    MismatchShift {
        text_idx: usize,
        pattern_idx: usize,
        shift_amount: usize,
        message: String,
        matches: Vec<usize>,
    },
    /// A full occurrence of the pattern was recorded.
    Match {
        text_idx: usize,
        current_window: String,
        message: String,
        matches: Vec<usize>,
    },
    /// The alignment advanced by a table-driven amount (Horspool).
    Shift {
        text_idx: usize,
        shift_amount: usize,
        message: String,
        matches: Vec<usize>,
    },
    /// The Boyer-Moore bad-character table was built.
    BadCharTable {
        table: BTreeMap<char, isize>,
        message: String,
    },
    /// The Horspool shift table was built. Only entries that differ from
    /// the pattern-length default are listed.
    ShiftTable {
        table: BTreeMap<char, usize>,
        message: String,
    },
    /// A free-form note, e.g. the detection pipeline's substring fast path.
    Note { message: String },
}

impl TraceFrame {
    /// The frame kind as its wire tag.
    pub fn kind(&self) -> &'static str {
        match self {
            TraceFrame::Alignment { .. } => "alignment",
            TraceFrame::Comparison { .. } => "comparison",
            TraceFrame::Mismatch { .. } => "mismatch",
            TraceFrame::MismatchShift { .. } => "mismatch_shift",
            TraceFrame::Match { .. } => "match",
            TraceFrame::Shift { .. } => "shift",
            TraceFrame::BadCharTable { .. } => "bad_char_table",
            TraceFrame::ShiftTable { .. } => "shift_table",
            TraceFrame::Note { .. } => "note",
        }
    }

    /// The human-readable message carried by every frame kind.
    pub fn message(&self) -> &str {
        match self {
            TraceFrame::Alignment { message, .. }
            | TraceFrame::Comparison { message, .. }
            | TraceFrame::Mismatch { message, .. }
            | TraceFrame::MismatchShift { message, .. }
            | TraceFrame::Match { message, .. }
            | TraceFrame::Shift { message, .. }
            | TraceFrame::BadCharTable { message, .. }
            | TraceFrame::ShiftTable { message, .. }
            | TraceFrame::Note { message } => message,
        }
    }

    /// True for frames that record a full pattern occurrence.
    pub fn is_match(&self) -> bool {
        matches!(self, TraceFrame::Match { .. })
    }
}

/// Validated, append-only sink for trace frames.
///
/// A disabled recorder discards everything. An enabled recorder accepts a
/// frame only if its message is non-empty; frames failing validation are
/// dropped with a warning rather than aborting the caller.
#[derive(Debug, Default)]
pub struct TraceRecorder {
    enabled: bool,
    frames: Vec<TraceFrame>,
}

impl TraceRecorder {
    /// Create a recorder; `enabled = false` makes every record a no-op.
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            frames: Vec::new(),
        }
    }

    /// A recorder that discards all frames.
    pub fn disabled() -> Self {
        Self::new(false)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Append a frame if tracing is enabled and the frame is valid.
    pub fn record(&mut self, frame: TraceFrame) {
        if !self.enabled {
            return;
        }
        if frame.message().trim().is_empty() {
            tracing::warn!(kind = frame.kind(), "dropping trace frame without a message");
            return;
        }
        self.frames.push(frame);
    }

    /// Append a lazily built frame; the closure only runs when tracing is
    /// enabled, keeping disabled runs allocation-free.
    pub fn record_with<F>(&mut self, make: F)
    where
        F: FnOnce() -> TraceFrame,
    {
        if self.enabled {
            self.record(make());
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[TraceFrame] {
        &self.frames
    }

    /// Consume the recorder and yield the ordered frame log.
    pub fn into_frames(self) -> Vec<TraceFrame> {
        self.frames
    }
}
