// Rescue Search Query Normalization
// Turns raw text-field input into the form the matcher and highlighter compare

/// Normalize a raw query: trim and lower-case
///
/// Returns `None` for empty or whitespace-only input, which callers treat as
/// "no search" rather than an error.
///
/// # Example
/// ```
/// # use rescue_search::pattern::normalize_query;
/// assert_eq!(normalize_query("  Lost Dog "), Some("lost dog".to_string()));
/// assert_eq!(normalize_query(" \t "), None);
/// ```
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Split a query into lower-cased, whitespace-delimited words
///
/// # Example
/// ```
/// # use rescue_search::pattern::query_words;
/// assert_eq!(query_words(" 강아지  Lost "), vec!["강아지", "lost"]);
/// ```
pub fn query_words(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_lowercase).collect()
}

/// Lower-case text into a char vector for edit-distance scoring
#[inline]
pub fn to_match_chars(text: &str) -> Vec<char> {
    text.to_lowercase().chars().collect()
}

/// Length of a string in chars (not bytes)
#[inline]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
