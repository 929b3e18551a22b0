// Rescue Search Index and Fuzzy Matcher
// Typo-tolerant substring matching of queries against indexed titles

use crate::config::SearchConfig;
use crate::pattern::{normalize_query, to_match_chars};
use crate::types::{MatchResult, SearchError, SearchItem};
use rustc_hash::FxHashMap;
use tracing::{debug, info, warn};

/// Best approximate occurrence of a pattern inside a text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alignment {
    /// Edits (insertions, deletions, substitutions) needed at this occurrence
    pub errors: usize,

    /// Char offset in the text where the occurrence starts
    pub start: usize,
}

/// Find the cheapest occurrence of `pattern` anywhere in `text`
///
/// Sellers' variant of the Levenshtein DP: the first row is all zeros so an
/// occurrence may begin at any text offset, and the answer is the minimum of
/// the last row. Each cell carries the start offset of its alignment; among
/// equally cheap occurrences the earliest start wins.
///
/// # Example
/// ```
/// # use rescue_search::matcher::best_alignment;
/// let text: Vec<char> = "고양이 실종".chars().collect();
/// let pattern: Vec<char> = "실종".chars().collect();
/// let found = best_alignment(&pattern, &text);
/// assert_eq!((found.errors, found.start), (0, 4));
/// ```
pub fn best_alignment(pattern: &[char], text: &[char]) -> Alignment {
    if pattern.is_empty() {
        return Alignment { errors: 0, start: 0 };
    }

    // (errors, start) per text position for the previous pattern row
    let mut prev: Vec<(usize, usize)> = (0..=text.len()).map(|j| (0, j)).collect();
    let mut cur: Vec<(usize, usize)> = vec![(0, 0); text.len() + 1];

    for (i, &pc) in pattern.iter().enumerate() {
        cur[0] = (i + 1, 0);
        for (j, &tc) in text.iter().enumerate() {
            let diagonal = prev[j];
            let substitute = (diagonal.0 + usize::from(pc != tc), diagonal.1);
            let skip_pattern = (prev[j + 1].0 + 1, prev[j + 1].1);
            let skip_text = (cur[j].0 + 1, cur[j].1);
            cur[j + 1] = substitute.min(skip_pattern).min(skip_text);
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    let (errors, start) = prev.into_iter().min().unwrap_or((pattern.len(), 0));
    Alignment { errors, start }
}

/// Score an alignment in [0.0, 1.0], lower is better
///
/// The error ratio is offset by how far into the title the occurrence starts,
/// so prefix matches rank ahead of the same match deeper in a title.
#[inline]
pub fn alignment_score(alignment: Alignment, pattern_len: usize, distance: usize) -> f64 {
    let accuracy = alignment.errors as f64 / pattern_len.max(1) as f64;
    let proximity = alignment.start as f64 / distance.max(1) as f64;
    (accuracy + proximity).min(1.0)
}

/// Read-only fuzzy index over a fixed corpus
///
/// Built once and shared across queries. Titles are lower-cased into char
/// vectors up front so each query only pays for the DP.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    /// Items in corpus order
    items: Vec<SearchItem>,

    /// Lower-cased title chars, parallel to `items`
    match_chars: Vec<Vec<char>>,

    /// id → position in `items`
    by_id: FxHashMap<String, usize>,
}

impl SearchIndex {
    /// Build an index, rejecting empty or duplicate ids
    ///
    /// # Example
    /// ```
    /// # use rescue_search::{SearchIndex, SearchItem};
    /// let index = SearchIndex::build(vec![SearchItem::new("1", "강아지 실종")]).unwrap();
    /// assert_eq!(index.len(), 1);
    /// ```
    pub fn build(items: Vec<SearchItem>) -> Result<Self, SearchError> {
        let mut by_id = FxHashMap::default();
        by_id.reserve(items.len());

        for (position, item) in items.iter().enumerate() {
            if item.id.is_empty() {
                warn!(position, "rejecting corpus item with empty id");
                return Err(SearchError::EmptyId { position });
            }
            if by_id.insert(item.id.clone(), position).is_some() {
                warn!(id = %item.id, "rejecting corpus with duplicate id");
                return Err(SearchError::DuplicateId {
                    id: item.id.clone(),
                });
            }
        }

        let match_chars = items.iter().map(|item| to_match_chars(&item.title)).collect();

        info!(items = items.len(), "search index built");

        Ok(Self {
            items,
            match_chars,
            by_id,
        })
    }

    /// Replace the indexed corpus
    ///
    /// On error the current index is left untouched.
    pub fn rebuild(&mut self, items: Vec<SearchItem>) -> Result<(), SearchError> {
        *self = Self::build(items)?;
        Ok(())
    }

    /// Run a query against the index
    ///
    /// Empty or whitespace-only queries return nothing. A title is included
    /// when its best occurrence needs at most `threshold * query length` edits,
    /// wherever in the title it starts. Results are sorted by ascending score;
    /// ties keep corpus order.
    pub fn search(&self, query: &str, config: &SearchConfig) -> Vec<MatchResult> {
        let Some(normalized) = normalize_query(query) else {
            return Vec::new();
        };

        let pattern: Vec<char> = normalized.chars().collect();
        if pattern.len() < config.min_query_chars {
            return Vec::new();
        }

        let max_errors = (pattern.len() as f64 * config.threshold).floor() as usize;

        let mut scored: Vec<(usize, f64)> = Vec::new();
        for (position, title) in self.match_chars.iter().enumerate() {
            let alignment = best_alignment(&pattern, title);
            if alignment.errors > max_errors {
                continue;
            }
            // The start offset ranks, it never excludes
            let score = alignment_score(alignment, pattern.len(), config.distance);
            scored.push((position, score));
        }

        // sort_by is stable, so equal scores stay in corpus order
        scored.sort_by(|a, b| a.1.total_cmp(&b.1));
        if let Some(limit) = config.limit {
            scored.truncate(limit);
        }

        debug!(query = %normalized, results = scored.len(), "query executed");

        scored
            .into_iter()
            .map(|(position, score)| MatchResult {
                item: self.items[position].clone(),
                score,
            })
            .collect()
    }

    /// Look up an item by id
    pub fn get(&self, id: &str) -> Option<&SearchItem> {
        self.by_id.get(id).map(|&position| &self.items[position])
    }

    /// Indexed items in corpus order
    pub fn items(&self) -> &[SearchItem] {
        &self.items
    }

    /// Number of indexed items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn sample_index() -> SearchIndex {
        SearchIndex::build(vec![
            SearchItem::new("1", "강아지 실종"),
            SearchItem::new("2", "고양이 실종"),
            SearchItem::new("3", "Lost golden retriever"),
        ])
        .unwrap()
    }

    #[test]
    fn test_alignment_exact_prefix() {
        let found = best_alignment(&chars("lost"), &chars("lost golden retriever"));
        assert_eq!(found, Alignment { errors: 0, start: 0 });
    }

    #[test]
    fn test_alignment_substitution() {
        let found = best_alignment(&chars("goldan"), &chars("lost golden retriever"));
        assert_eq!(found.errors, 1);
        assert_eq!(found.start, 5);
    }

    #[test]
    fn test_alignment_insertion_and_deletion() {
        assert_eq!(best_alignment(&chars("retreiver"), &chars("retriever")).errors, 2);
        assert_eq!(best_alignment(&chars("retriver"), &chars("retriever")).errors, 1);
        assert_eq!(best_alignment(&chars("retrieever"), &chars("retriever")).errors, 1);
    }

    #[test]
    fn test_alignment_empty_text() {
        let found = best_alignment(&chars("cat"), &[]);
        assert_eq!(found.errors, 3);
    }

    #[test]
    fn test_alignment_prefers_earliest_start() {
        let found = best_alignment(&chars("ab"), &chars("xab ab"));
        assert_eq!(found, Alignment { errors: 0, start: 1 });
    }

    #[test]
    fn test_score_bounds() {
        let perfect = alignment_score(Alignment { errors: 0, start: 0 }, 4, 100);
        assert_eq!(perfect, 0.0);

        let worst = alignment_score(Alignment { errors: 4, start: 90 }, 4, 100);
        assert_eq!(worst, 1.0);
    }

    #[test]
    fn test_build_rejects_duplicate_id() {
        let result = SearchIndex::build(vec![
            SearchItem::new("1", "a"),
            SearchItem::new("1", "b"),
        ]);
        assert!(matches!(result, Err(SearchError::DuplicateId { id }) if id == "1"));
    }

    #[test]
    fn test_build_rejects_empty_id() {
        let result = SearchIndex::build(vec![SearchItem::new("", "a")]);
        assert!(matches!(result, Err(SearchError::EmptyId { position: 0 })));
    }

    #[test]
    fn test_get_by_id() {
        let index = sample_index();
        assert_eq!(index.get("2").unwrap().title, "고양이 실종");
        assert!(index.get("99").is_none());
    }

    #[test]
    fn test_search_tie_keeps_corpus_order() {
        let index = sample_index();
        let results = index.search("실종", &SearchConfig::default());
        let ids: Vec<&str> = results.iter().map(|r| r.item.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(results[0].score, results[1].score);
    }

    #[test]
    fn test_search_tolerates_typo() {
        let index = sample_index();
        let results = index.search("retreiver", &SearchConfig::default());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].item.id, "3");
        assert!(results[0].score > 0.0);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let index = sample_index();
        let results = index.search("  LOST ", &SearchConfig::default());
        assert_eq!(results[0].item.id, "3");
        assert_eq!(results[0].score, 0.0);
    }

    #[test]
    fn test_search_whitespace_query() {
        let index = sample_index();
        assert!(index.search("   ", &SearchConfig::default()).is_empty());
    }

    #[test]
    fn test_search_no_match() {
        let index = sample_index();
        assert!(index.search("xyzzy", &SearchConfig::default()).is_empty());
    }

    #[test]
    fn test_search_respects_limit() {
        let index = sample_index();
        let config = SearchConfig::default().with_limit(1);
        assert_eq!(index.search("실종", &config).len(), 1);
    }

    #[test]
    fn test_search_min_query_chars() {
        let index = sample_index();
        let config = SearchConfig {
            min_query_chars: 3,
            ..SearchConfig::default()
        };
        assert!(index.search("실종", &config).is_empty());
    }

    #[test]
    fn test_exact_match_deep_in_long_title() {
        let title = format!("{} 실종", "가".repeat(70));
        let index = SearchIndex::build(vec![
            SearchItem::new("1", title),
            SearchItem::new("2", "고양이 실종"),
        ])
        .unwrap();

        let results = index.search("실종", &SearchConfig::default());
        let ids: Vec<&str> = results.iter().map(|r| r.item.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
        assert!((results[1].score - 0.71).abs() < 1e-9);
    }

    #[test]
    fn test_offset_past_distance_clamps_score() {
        let title = format!("{}실종", "가".repeat(150));
        let index = SearchIndex::build(vec![SearchItem::new("1", title)]).unwrap();

        let results = index.search("실종", &SearchConfig::default());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].score, 1.0);
    }

    #[test]
    fn test_zero_threshold_is_exact_only() {
        let index = sample_index();
        let config = SearchConfig::default().with_threshold(0.0);
        assert!(index.search("retreiver", &config).is_empty());
    }

    #[test]
    fn test_rebuild_keeps_old_index_on_error() {
        let mut index = sample_index();
        let result = index.rebuild(vec![SearchItem::new("", "bad")]);
        assert!(result.is_err());
        assert_eq!(index.len(), 3);

        index.rebuild(vec![SearchItem::new("9", "푸들")]).unwrap();
        assert_eq!(index.len(), 1);
        assert!(index.get("1").is_none());
    }

    #[test]
    fn test_empty_index() {
        let index = SearchIndex::build(Vec::new()).unwrap();
        assert!(index.is_empty());
        assert!(index.search("cat", &SearchConfig::default()).is_empty());
    }
}
