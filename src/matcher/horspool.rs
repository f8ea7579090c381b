//! Horspool: Boyer-Moore simplified to a single rightmost-character shift.

use super::window;
use crate::trace::{TraceFrame, TraceRecorder};
use std::collections::HashMap;

/// Shift distances for characters occurring in the pattern, excluding the
/// final character: `m - 1 - i` for position `i`, last occurrence winning
/// on duplicates. Every other character shifts by the full pattern
/// length, which is the lookup default rather than a stored entry.
fn build_shift_table(pattern: &[char]) -> HashMap<char, usize> {
    let m = pattern.len();
    let mut table: HashMap<char, usize> = HashMap::new();
    for (i, &c) in pattern.iter().take(m - 1).enumerate() {
        table.insert(c, m - 1 - i);
    }
    table
}

/// Search `text` right-to-left per alignment. The shift is looked up on a
/// single text character: after a mismatch, the character aligned with
/// the pattern's last position; after a match, the character just past
/// the matched window (or the full pattern length at end of text).
pub fn search(text: &str, pattern: &str, recorder: &mut TraceRecorder) -> Vec<usize> {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    let n = text.len();
    let m = pattern.len();
    let mut matches: Vec<usize> = Vec::new();

    if m == 0 || n < m {
        return matches;
    }

    let table = build_shift_table(&pattern);
    recorder.record_with(|| TraceFrame::ShiftTable {
        table: table.iter().map(|(&c, &v)| (c, v)).collect(),
        message: "Built Shift Table (similar to Bad Character Rule but simpler).".to_string(),
    });

    let mut s = 0usize;
    while s <= n - m {
        recorder.record_with(|| TraceFrame::Alignment {
            text_idx: s,
            pattern_idx: 0,
            current_window: window(&text, s, m),
            message: format!("Aligning pattern at text index {s}. Starting comparison from right."),
            matches: matches.clone(),
        });

        let mut j = m as isize - 1;
        while j >= 0 {
            let ju = j as usize;
            recorder.record_with(|| TraceFrame::Comparison {
                text_idx: s + ju,
                pattern_idx: ju,
                match_status: text[s + ju] == pattern[ju],
                current_window: window(&text, s, m),
                message: format!(
                    "Comparing text[{}] ('{}') with pattern[{}] ('{}')",
                    s + ju,
                    text[s + ju],
                    ju,
                    pattern[ju]
                ),
                matches: matches.clone(),
            });
            if pattern[ju] != text[s + ju] {
                break;
            }
            j -= 1;
        }

        if j < 0 {
            matches.push(s);
            recorder.record_with(|| TraceFrame::Match {
                text_idx: s,
                current_window: window(&text, s, m),
                message: format!("Match found at index {s}!"),
                matches: matches.clone(),
            });

            // Shift on the character immediately after the matched window.
            let shift_amount = if s + m < n {
                table.get(&text[s + m]).copied().unwrap_or(m)
            } else {
                m
            };
            recorder.record_with(|| TraceFrame::Shift {
                text_idx: s,
                shift_amount,
                message: format!(
                    "Match. Shifting pattern by {shift_amount} based on char '{}'",
                    if s + m < n {
                        text[s + m].to_string()
                    } else {
                        "End of Text".to_string()
                    }
                ),
                matches: matches.clone(),
            });
            s += shift_amount;
        } else {
            // Shift on the text character aligned with the pattern's last
            // position, regardless of where the mismatch happened.
            let mismatched_char = text[s + m - 1];
            let shift_amount = table.get(&mismatched_char).copied().unwrap_or(m);
            let ju = j as usize;
            recorder.record_with(|| TraceFrame::Shift {
                text_idx: s,
                shift_amount,
                message: format!(
                    "Mismatch at text[{}] ('{}'). Shifting pattern by {shift_amount} based on '{}'.",
                    s + ju,
                    text[s + ju],
                    mismatched_char
                ),
                matches: matches.clone(),
            });
            s += shift_amount;
        }
    }

    matches
}
