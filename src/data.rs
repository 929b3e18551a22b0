// Data loader for the searchable corpus
// Embeds the default post list at compile time and parses external corpus files

use crate::types::{SearchError, SearchItem};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Embedded default corpus (lost/found pet post titles)
pub const POSTS_DATA: &str = include_str!("../data/posts.json");

/// Accepted corpus layouts
#[derive(Deserialize)]
#[serde(untagged)]
enum CorpusFile {
    /// `[{ "id": "1", "title": "..." }, ...]`, kept in file order
    List(Vec<SearchItem>),
    /// `{ "1": "...", ... }`, kept in file order
    Map(IndexMap<String, String>),
}

impl From<CorpusFile> for Vec<SearchItem> {
    fn from(file: CorpusFile) -> Self {
        match file {
            CorpusFile::List(items) => items,
            CorpusFile::Map(map) => map
                .into_iter()
                .map(|(id, title)| SearchItem { id, title })
                .collect(),
        }
    }
}

/// Corpus loader utility
pub struct DataLoader;

impl DataLoader {
    /// Parse the embedded default corpus
    pub fn default_corpus() -> Result<Vec<SearchItem>, SearchError> {
        Self::from_json(POSTS_DATA)
    }

    /// Parse a corpus from JSON text (list of items or id → title object)
    pub fn from_json(json: &str) -> Result<Vec<SearchItem>, SearchError> {
        let file: CorpusFile = serde_json::from_str(json)?;
        let items: Vec<SearchItem> = file.into();
        debug!(items = items.len(), "corpus parsed");
        Ok(items)
    }

    /// Read and parse a corpus file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Vec<SearchItem>, SearchError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|source| SearchError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&data)
    }
}
