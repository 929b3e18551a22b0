// Rescue Search Input State
// Query text field state and the transitions driven by UI events

use crate::pattern::normalize_query;

/// Observable phase of the search field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPhase {
    /// Nothing to search for, or the user finished (clear, submit, pick)
    Idle,
    /// Non-blank text is being edited
    Typing,
}

impl std::fmt::Display for InputPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputPhase::Idle => write!(f, "Idle"),
            InputPhase::Typing => write!(f, "Typing"),
        }
    }
}

/// Search field state
///
/// Only the raw text and the typing flag are stored. Whether the
/// recommendation list is visible is derived on demand from the flag and the
/// current result count, so the two can never disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    query: String,
    is_typing: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keystroke: store the text, typing while it has non-blank content
    pub fn on_change_text(&mut self, text: &str) {
        self.query = text.to_string();
        self.is_typing = !text.trim().is_empty();
    }

    /// Clear button: empty the field
    pub fn on_clear(&mut self) {
        self.query.clear();
        self.is_typing = false;
    }

    /// Submit: stop typing and hand back the normalized query, if any
    ///
    /// The text stays in the field.
    pub fn on_submit(&mut self) -> Option<String> {
        self.is_typing = false;
        normalize_query(&self.query)
    }

    /// Suggestion picked: fill the field with its title and stop typing
    ///
    /// Returns the title for the hosting screen's selection callback.
    pub fn on_suggestion_press(&mut self, title: &str) -> String {
        self.query = title.to_string();
        self.is_typing = false;
        self.query.clone()
    }

    /// Current raw text
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_typing(&self) -> bool {
        self.is_typing
    }

    pub fn phase(&self) -> InputPhase {
        if self.is_typing {
            InputPhase::Typing
        } else {
            InputPhase::Idle
        }
    }

    /// Whether the recommendation list should be shown for `result_count` results
    pub fn show_recommendations(&self, result_count: usize) -> bool {
        self.is_typing && result_count > 0
    }
}
