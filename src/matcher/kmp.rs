//! Knuth-Morris-Pratt: linear scan driven by the failure function.

use super::window;
use crate::trace::{TraceFrame, TraceRecorder};

/// Longest proper prefix that is also a suffix, for every prefix of the
/// pattern. Standard linear-time construction.
fn compute_lps(pattern: &[char]) -> Vec<usize> {
    let mut lps = vec![0usize; pattern.len()];
    let mut len = 0usize;
    let mut i = 1usize;
    while i < pattern.len() {
        if pattern[i] == pattern[len] {
            len += 1;
            lps[i] = len;
            i += 1;
        } else if len != 0 {
            len = lps[len - 1];
        } else {
            lps[i] = 0;
            i += 1;
        }
    }
    lps
}

/// Search `text` for every occurrence of `pattern` without re-scanning
/// consumed text. After a full match the pattern cursor falls back to
/// `lps[m - 1]`, so overlapping occurrences are still found.
pub fn search(text: &str, pattern: &str, recorder: &mut TraceRecorder) -> Vec<usize> {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    let n = text.len();
    let m = pattern.len();
    let mut matches: Vec<usize> = Vec::new();

    if m == 0 || n < m {
        return matches;
    }

    let lps = compute_lps(&pattern);
    let mut i = 0usize;
    let mut j = 0usize;
    while i < n {
        recorder.record_with(|| TraceFrame::Comparison {
            text_idx: i,
            pattern_idx: j,
            match_status: text[i] == pattern[j],
            current_window: window(&text, i - j, m),
            message: format!(
                "Comparing text[{}] ('{}') with pattern[{}] ('{}')",
                i, text[i], j, pattern[j]
            ),
            matches: matches.clone(),
        });

        if pattern[j] == text[i] {
            i += 1;
            j += 1;
        }

        if j == m {
            let at = i - j;
            matches.push(at);
            recorder.record_with(|| TraceFrame::Match {
                text_idx: at,
                current_window: window(&text, at, m),
                message: format!("Match found at index {at}!"),
                matches: matches.clone(),
            });
            j = lps[j - 1];
        } else if i < n && pattern[j] != text[i] {
            if j != 0 {
                j = lps[j - 1];
            } else {
                i += 1;
            }
        }
    }

    matches
}
