// Rescue Search Highlight Formatter
// Splits a title into matched and unmatched display segments

use crate::pattern::query_words;
use crate::types::Segment;
use regex::Regex;
use std::sync::OnceLock;

/// A whitespace-delimited word
const WORD_PATTERN: &str = r"\S+";

fn word_regex() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(WORD_PATTERN).expect("word pattern is a valid regex"))
}

/// Split `title` into segments, marking words that start with a query word
///
/// Matching is case-insensitive and word-prefix only: a query word found in
/// the middle of a title word is not highlighted. Whitespace and unmatched
/// words between matches are merged into unmatched segments, so the segment
/// texts always concatenate back to `title`. With no matching word the whole
/// title comes back as one unmatched segment.
///
/// # Example
/// ```
/// # use rescue_search::highlight::highlight;
/// # use rescue_search::Segment;
/// let segments = highlight("라이를 찾아주세요", "라이");
/// assert_eq!(
///     segments,
///     vec![Segment::matched("라이를"), Segment::unmatched(" 찾아주세요")]
/// );
/// ```
pub fn highlight(title: &str, query: &str) -> Vec<Segment> {
    let words = query_words(query);
    if words.is_empty() {
        return vec![Segment::unmatched(title)];
    }

    let mut segments = Vec::new();
    // Byte offset where the current unmatched run begins
    let mut unmatched_from = 0;

    for found in word_regex().find_iter(title) {
        let word = found.as_str().to_lowercase();
        if !words.iter().any(|q| word.starts_with(q.as_str())) {
            continue;
        }
        if found.start() > unmatched_from {
            segments.push(Segment::unmatched(&title[unmatched_from..found.start()]));
        }
        segments.push(Segment::matched(found.as_str()));
        unmatched_from = found.end();
    }

    if segments.is_empty() {
        return vec![Segment::unmatched(title)];
    }
    if unmatched_from < title.len() {
        segments.push(Segment::unmatched(&title[unmatched_from..]));
    }

    segments
}

/// Texts of the matched segments, in order
pub fn matched_words(segments: &[Segment]) -> Vec<&str> {
    segments
        .iter()
        .filter(|s| s.is_match)
        .map(|s| s.text.as_str())
        .collect()
}

/// Render segments as plain text, wrapping matched spans in `open`/`close`
///
/// # Example
/// ```
/// # use rescue_search::highlight::{highlight, mark};
/// assert_eq!(mark(&highlight("강아지 실종", "실종"), "[", "]"), "강아지 [실종]");
/// ```
pub fn mark(segments: &[Segment], open: &str, close: &str) -> String {
    let mut out = String::new();
    for segment in segments {
        if segment.is_match {
            out.push_str(open);
            out.push_str(&segment.text);
            out.push_str(close);
        } else {
            out.push_str(&segment.text);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(segments: &[Segment]) -> String {
        segments.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_prefix_match_marks_whole_word() {
        let segments = highlight("라이를 찾아주세요", "라이");
        assert_eq!(matched_words(&segments), vec!["라이를"]);
        assert_eq!(joined(&segments), "라이를 찾아주세요");
    }

    #[test]
    fn test_no_match_single_segment() {
        let segments = highlight("강아지 실종", "고양이");
        assert_eq!(segments, vec![Segment::unmatched("강아지 실종")]);
    }

    #[test]
    fn test_empty_query_single_segment() {
        assert_eq!(highlight("푸들", "  "), vec![Segment::unmatched("푸들")]);
    }

    #[test]
    fn test_empty_title() {
        assert_eq!(highlight("", "cat"), vec![Segment::unmatched("")]);
    }

    #[test]
    fn test_mid_word_not_highlighted() {
        // "양이" sits inside "고양이", not at its start
        let segments = highlight("고양이 실종", "양이");
        assert_eq!(segments, vec![Segment::unmatched("고양이 실종")]);
    }

    #[test]
    fn test_case_insensitive() {
        let segments = highlight("Lost Golden Retriever", "golden");
        assert_eq!(
            segments,
            vec![
                Segment::unmatched("Lost "),
                Segment::matched("Golden"),
                Segment::unmatched(" Retriever"),
            ]
        );
    }

    #[test]
    fn test_adjacent_matches_keep_whitespace() {
        let segments = highlight("lost  golden dog", "lost golden");
        assert_eq!(
            segments,
            vec![
                Segment::matched("lost"),
                Segment::unmatched("  "),
                Segment::matched("golden"),
                Segment::unmatched(" dog"),
            ]
        );
    }

    #[test]
    fn test_unmatched_words_coalesce() {
        let segments = highlight("  강아지 산책 중 실종  ", "실종");
        assert_eq!(
            segments,
            vec![
                Segment::unmatched("  강아지 산책 중 "),
                Segment::matched("실종"),
                Segment::unmatched("  "),
            ]
        );
    }

    #[test]
    fn test_mark() {
        let segments = highlight("Found tabby cat", "tab cat");
        assert_eq!(mark(&segments, "<", ">"), "Found <tabby> <cat>");
    }
}
