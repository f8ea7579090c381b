//! Boyer-Moore restricted to the bad-character rule.

use super::window;
use crate::trace::{TraceFrame, TraceRecorder};
use std::collections::HashMap;

/// Highest index at which each character occurs in the pattern, excluding
/// the final character. Characters absent from the table shift as if
/// their last occurrence were -1.
fn build_bad_char_table(pattern: &[char], recorder: &mut TraceRecorder) -> HashMap<char, isize> {
    let m = pattern.len();
    let mut table: HashMap<char, isize> = HashMap::new();
    for (i, &c) in pattern.iter().take(m - 1).enumerate() {
        table.insert(c, i as isize);
    }

    recorder.record_with(|| TraceFrame::BadCharTable {
        table: table.iter().map(|(&c, &i)| (c, i)).collect(),
        message: "Built Bad Character Table: stores last occurrence of each char in pattern \
                  (excluding last char)."
            .to_string(),
    });
    table
}

/// Search `text` right-to-left per alignment, shifting by
/// `max(1, j - last_occurrence(c))` on a mismatch at pattern index `j`
/// against text character `c`. A full match advances the alignment by one
/// so overlapping occurrences are reported.
pub fn search(text: &str, pattern: &str, recorder: &mut TraceRecorder) -> Vec<usize> {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    let n = text.len();
    let m = pattern.len();
    let mut matches: Vec<usize> = Vec::new();

    if m == 0 || n < m {
        return matches;
    }

    let table = build_bad_char_table(&pattern, recorder);

    let mut s = 0usize;
    while s <= n - m {
        recorder.record_with(|| TraceFrame::Alignment {
            text_idx: s,
            pattern_idx: 0,
            current_window: window(&text, s, m),
            message: format!("Aligning pattern at text index {s}"),
            matches: matches.clone(),
        });

        let mut j = m as isize - 1;
        while j >= 0 {
            let ju = j as usize;
            recorder.record_with(|| TraceFrame::Comparison {
                text_idx: s + ju,
                pattern_idx: ju,
                match_status: pattern[ju] == text[s + ju],
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
                let last = table.get(&text[s + ju]).copied().unwrap_or(-1);
                // max(1, ..) guarantees forward progress even when the
                // mismatched character never occurs in the pattern.
                let shift_amount = (j - last).max(1) as usize;
                recorder.record_with(|| TraceFrame::MismatchShift {
                    text_idx: s + ju,
                    pattern_idx: ju,
                    shift_amount,
                    message: format!(
                        "Mismatch! Shifting pattern by {shift_amount} using bad character rule"
                    ),
                    matches: matches.clone(),
                });
                s += shift_amount;
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
            s += 1;
        }
    }

    matches
}
