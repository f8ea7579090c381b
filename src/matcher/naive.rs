//! Naive scan: try every alignment, compare left to right, shift by one.

use super::window;
use crate::trace::{TraceFrame, TraceRecorder};

/// Search `text` for every occurrence of `pattern`, one alignment at a
/// time. Overlapping occurrences are reported because the alignment
/// always advances by one, even after a full match.
pub fn search(text: &str, pattern: &str, recorder: &mut TraceRecorder) -> Vec<usize> {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    let n = text.len();
    let m = pattern.len();
    let mut matches: Vec<usize> = Vec::new();

    if m == 0 || n < m {
        return matches;
    }

    for i in 0..=n - m {
        recorder.record_with(|| TraceFrame::Alignment {
            text_idx: i,
            pattern_idx: 0,
            current_window: window(&text, i, m),
            message: format!("Aligning pattern at text index {i}"),
            matches: matches.clone(),
        });

        let mut j = 0;
        while j < m {
            recorder.record_with(|| TraceFrame::Comparison {
                text_idx: i,
                pattern_idx: j,
                match_status: text[i + j] == pattern[j],
                current_window: window(&text, i, m),
                message: format!(
                    "Comparing text[{}] ('{}') with pattern[{}] ('{}')",
                    i + j,
                    text[i + j],
                    j,
                    pattern[j]
                ),
                matches: matches.clone(),
            });
            if text[i + j] != pattern[j] {
                recorder.record_with(|| TraceFrame::Mismatch {
                    text_idx: i,
                    pattern_idx: j,
                    current_window: window(&text, i, m),
                    message: "Mismatch! Shifting pattern by 1.".to_string(),
                    matches: matches.clone(),
                });
                break;
            }
            j += 1;
        }

        if j == m {
            matches.push(i);
            recorder.record_with(|| TraceFrame::Match {
                text_idx: i,
                current_window: window(&text, i, m),
                message: format!("Match found at index {i}!"),
                matches: matches.clone(),
            });
        }
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str, pattern: &str) -> (Vec<usize>, Vec<crate::trace::TraceFrame>) {
        let mut recorder = TraceRecorder::new(true);
        let matches = search(text, pattern, &mut recorder);
        (matches, recorder.into_frames())
    }

    #[test]
    fn test_single_match() {
        let (matches, _) = run("hello world", "world");
        assert_eq!(matches, vec![6]);
    }

    #[test]
    fn test_overlapping_matches() {
        let (matches, _) = run("aaaa", "aa");
        assert_eq!(matches, vec![0, 1, 2]);
    }

    #[test]
    fn test_no_match() {
        let (matches, frames) = run("abcdef", "xyz");
        assert!(matches.is_empty());
        assert!(frames.iter().all(|f| !f.is_match()));
    }

    #[test]
    fn test_empty_pattern() {
        let (matches, frames) = run("abc", "");
        assert!(matches.is_empty());
        assert!(frames.is_empty());
    }

    #[test]
    fn test_pattern_longer_than_text() {
        let (matches, frames) = run("ab", "abc");
        assert!(matches.is_empty());
        assert!(frames.is_empty());
    }

    #[test]
    fn test_match_at_both_ends() {
        let (matches, _) = run("abxxab", "ab");
        assert_eq!(matches, vec![0, 4]);
    }

    #[test]
    fn test_whole_text_match() {
        let (matches, _) = run("abc", "abc");
        assert_eq!(matches, vec![0]);
    }

    #[test]
    fn test_frame_sequence_for_immediate_mismatch() {
        let (_, frames) = run("ab", "c");
        // Per alignment: one alignment frame, one comparison, one mismatch.
        assert_eq!(frames[0].kind(), "alignment");
        assert_eq!(frames[1].kind(), "comparison");
        assert_eq!(frames[2].kind(), "mismatch");
    }

    #[test]
    fn test_one_match_frame_per_occurrence() {
        let (matches, frames) = run("aaaa", "aa");
        let match_frames = frames.iter().filter(|f| f.is_match()).count();
        assert_eq!(match_frames, matches.len());
    }

    #[test]
    fn test_match_snapshot_includes_new_offset() {
        let (_, frames) = run("aba", "a");
        let snapshots: Vec<&Vec<usize>> = frames
            .iter()
            .filter_map(|f| match f {
                TraceFrame::Match { matches, .. } => Some(matches),
                _ => None,
            })
            .collect();
        assert_eq!(snapshots, vec![&vec![0], &vec![0, 2]]);
    }

    #[test]
    fn test_unicode_offsets_are_char_positions() {
        let (matches, _) = run("héllo héllo", "héllo");
        assert_eq!(matches, vec![0, 6]);
    }
}
