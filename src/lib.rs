//! # Rescue Search: Typo-Tolerant Post Search
//!
//! Incremental search over pet rescue post titles, with per-word highlighting
//! for the suggestion list.
//!
//! ## Pipeline
//!
//! 1. **Index** - built once over a fixed corpus of `{ id, title }` items
//! 2. **Query** - approximate substring matching (insertions, deletions and
//!    substitutions), scored in `[0, 1]` with lower being better
//! 3. **Highlight** - each title split into matched/unmatched segments by
//!    word-prefix comparison against the query words
//! 4. **Input state** - typing/idle tracking that decides whether the
//!    recommendation list is visible
//!
//! ## Example Usage
//!
//! ```
//! use rescue_search::{RescueSearch, SearchConfig, SearchItem};
//!
//! let search = RescueSearch::new(
//!     vec![
//!         SearchItem::new("1", "강아지 실종"),
//!         SearchItem::new("2", "고양이 실종"),
//!     ],
//!     SearchConfig::default(),
//! )?;
//!
//! let results = search.search("실종");
//! assert_eq!(results[0].item.id, "1");
//! assert_eq!(results[1].item.id, "2");
//!
//! let suggestions = search.suggestions("고양");
//! assert_eq!(suggestions[0].segments[0].text, "고양이");
//! # Ok::<(), rescue_search::SearchError>(())
//! ```

pub mod config;
pub mod data;
pub mod highlight;
pub mod input;
pub mod logging;
pub mod matcher;
pub mod pattern;
pub mod search;
pub mod types;

// Re-export main types and functions for convenience
pub use config::SearchConfig;
pub use data::DataLoader;
pub use highlight::highlight;
pub use input::{InputPhase, InputState};
pub use matcher::SearchIndex;
pub use pattern::normalize_query;
pub use search::{RescueSearch, SearchSession};
pub use types::{CorpusStats, MatchResult, SearchError, SearchItem, Segment, Suggestion};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
