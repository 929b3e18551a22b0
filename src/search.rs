// Rescue Search Engine
// Main API that ties the index, highlighter and input state together

use crate::config::SearchConfig;
use crate::data::DataLoader;
use crate::highlight::highlight;
use crate::input::{InputPhase, InputState};
use crate::matcher::SearchIndex;
use crate::pattern::char_len;
use crate::types::{CorpusStats, MatchResult, SearchError, SearchItem, Suggestion};
use tracing::info;

/// Main search engine
///
/// Owns the read-only index and the matching config. Build it once per
/// screen lifetime and pass it to whatever needs to query; call
/// [`RescueSearch::rebuild`] when the corpus changes.
#[derive(Debug, Clone)]
pub struct RescueSearch {
    index: SearchIndex,
    config: SearchConfig,
}

impl RescueSearch {
    /// Create an engine over `items`
    pub fn new(items: Vec<SearchItem>, config: SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        let index = SearchIndex::build(items)?;
        Ok(Self { index, config })
    }

    /// Create an engine over the embedded corpus with the default config
    pub fn from_default_corpus() -> Result<Self, SearchError> {
        Self::new(DataLoader::default_corpus()?, SearchConfig::default())
    }

    /// Ranked matches for `query`, best first
    ///
    /// Blank queries and queries with no match both return an empty list.
    pub fn search(&self, query: &str) -> Vec<MatchResult> {
        self.index.search(query, &self.config)
    }

    /// Ranked matches, truncated to `limit`
    pub fn search_limit(&self, query: &str, limit: usize) -> Vec<MatchResult> {
        let mut results = self.search(query);
        results.truncate(limit);
        results
    }

    /// Ranked matches with highlight segments, ready for display
    pub fn suggestions(&self, query: &str) -> Vec<Suggestion> {
        self.search(query)
            .into_iter()
            .map(|result| Suggestion {
                segments: highlight(&result.item.title, query),
                id: result.item.id,
                title: result.item.title,
                score: result.score,
            })
            .collect()
    }

    /// Replace the corpus; the old index stays in place on error
    pub fn rebuild(&mut self, items: Vec<SearchItem>) -> Result<(), SearchError> {
        self.index.rebuild(items)?;
        info!(items = self.index.len(), "search index rebuilt");
        Ok(())
    }

    /// Statistics about the indexed corpus
    pub fn stats(&self) -> CorpusStats {
        let items = self.index.items();
        CorpusStats {
            items: items.len(),
            words: items.iter().map(|i| i.title.split_whitespace().count()).sum(),
            longest_title: items.iter().map(|i| char_len(&i.title)).max().unwrap_or(0),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }
}

/// One search field bound to an engine
///
/// Every transition re-runs the query, so the result list is always a
/// function of the current text.
pub struct SearchSession<'a> {
    engine: &'a RescueSearch,
    input: InputState,
    suggestions: Vec<Suggestion>,
}

impl<'a> SearchSession<'a> {
    pub fn new(engine: &'a RescueSearch) -> Self {
        Self {
            engine,
            input: InputState::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn on_change_text(&mut self, text: &str) {
        self.input.on_change_text(text);
        self.refresh();
    }

    pub fn on_clear(&mut self) {
        self.input.on_clear();
        self.refresh();
    }

    /// Submit the field; returns the normalized query, if any
    pub fn on_submit(&mut self) -> Option<String> {
        self.input.on_submit()
    }

    /// Pick a suggestion; returns its title for the hosting screen
    pub fn on_suggestion_press(&mut self, title: &str) -> String {
        let picked = self.input.on_suggestion_press(title);
        self.refresh();
        picked
    }

    /// Current suggestions for the field's text
    pub fn recommendations(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn show_recommendations(&self) -> bool {
        self.input.show_recommendations(self.suggestions.len())
    }

    pub fn phase(&self) -> InputPhase {
        self.input.phase()
    }

    pub fn query(&self) -> &str {
        self.input.query()
    }

    fn refresh(&mut self) {
        self.suggestions = self.engine.suggestions(self.input.query());
    }
}
