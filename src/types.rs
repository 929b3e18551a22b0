// Rescue Search Type Definitions
// Core types for the corpus, ranked matches and highlight segments

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// A searchable post title from the static corpus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchItem {
    /// Unique identifier (e.g., "1")
    pub id: String,

    /// Display text, also the match corpus
    pub title: String,
}

impl SearchItem {
    /// Create a new search item
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// A corpus item matched by a query
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    /// The matched item
    pub item: SearchItem,

    /// Match score [0.0, 1.0], lower is better (0.0 = exact match at the start)
    pub score: f64,
}

/// A contiguous span of a title, marked matched or unmatched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Exact slice of the title this span covers
    pub text: String,

    /// Whether this span is a word that starts with a query word
    #[serde(rename = "isMatch")]
    pub is_match: bool,
}

impl Segment {
    /// Create a highlighted segment
    ///
    /// # Example
    /// ```
    /// # use rescue_search::Segment;
    /// let segment = Segment::matched("라이를");
    /// assert!(segment.is_match);
    /// assert_eq!(segment.text, "라이를");
    /// ```
    pub fn matched(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_match: true,
        }
    }

    /// Create a plain (unhighlighted) segment
    ///
    /// # Example
    /// ```
    /// # use rescue_search::Segment;
    /// assert!(!Segment::unmatched(" 찾아주세요").is_match);
    /// ```
    pub fn unmatched(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_match: false,
        }
    }
}

/// A ranked match together with its display segments
///
/// This is what a list renderer receives: `id` for keying rows, `segments`
/// for styled text, and `title` for the selection callback.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    /// Id of the matched item
    pub id: String,

    /// Full title, handed back when the suggestion is picked
    pub title: String,

    /// Match score [0.0, 1.0], lower is better
    pub score: f64,

    /// Title split into highlighted and plain spans, in order
    pub segments: Vec<Segment>,
}

/// Statistics about the indexed corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CorpusStats {
    /// Number of indexed items
    pub items: usize,

    /// Total whitespace-delimited words across all titles
    pub words: usize,

    /// Length of the longest title in chars
    pub longest_title: usize,
}

/// Corpus, index and configuration errors
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Duplicate item id '{id}' in corpus")]
    DuplicateId { id: String },

    #[error("Item at position {position} has an empty id")]
    EmptyId { position: usize },

    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
