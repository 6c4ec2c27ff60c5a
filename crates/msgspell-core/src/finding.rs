// Finding: a single word the dictionary rejected.

use serde::Serialize;

/// A word rejected by the dictionary, with the replacements it proposed.
///
/// `word` keeps the casing it had in the checked text. Suggestions are kept
/// in the order the dictionary returned them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// The rejected word, as it appeared in the text.
    pub word: String,

    /// Suggested replacements, best first when the dictionary ranks them.
    pub suggestions: Vec<String>,
}

impl Finding {
    /// Create a new finding.
    pub fn new(word: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self {
            word: word.into(),
            suggestions,
        }
    }

    /// Returns `true` if the dictionary proposed at least one replacement.
    pub fn has_suggestions(&self) -> bool {
        !self.suggestions.is_empty()
    }
}
