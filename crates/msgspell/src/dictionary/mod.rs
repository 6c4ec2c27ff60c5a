// Dictionary backends.
//
// The checker never looks at spelling rules itself. It asks a `Dictionary`
// whether a word is valid and, if not, what it could be replaced with.
// A `DictionaryProvider` opens the dictionary for a language tag.

#[cfg(feature = "hunspell")]
pub mod hunspell;
pub mod word_list;

use crate::error::DictionaryError;

#[cfg(feature = "hunspell")]
pub use hunspell::{HunspellDictionary, HunspellProvider};
pub use word_list::{WordListDictionary, WordListProvider};

/// Default language used when none is configured.
pub const DEFAULT_LANGUAGE: &str = "en_US";

/// Trait for spelling backends.
///
/// Implementations receive words exactly as they appear in the text (not
/// lowercased), so they can apply their own capitalization rules.
pub trait Dictionary {
    /// Returns `true` if the dictionary accepts `word`.
    fn is_valid(&self, word: &str) -> bool;

    /// Suggested replacements for a rejected word, best first if the
    /// backend ranks them. May be empty.
    fn suggest(&self, word: &str) -> Vec<String>;
}

impl<D: Dictionary + ?Sized> Dictionary for Box<D> {
    fn is_valid(&self, word: &str) -> bool {
        (**self).is_valid(word)
    }

    fn suggest(&self, word: &str) -> Vec<String> {
        (**self).suggest(word)
    }
}

/// Trait for opening a dictionary by language tag.
pub trait DictionaryProvider {
    /// Open the dictionary for `language`.
    ///
    /// Fails if the tag is malformed or the backend has no data for it.
    fn open(&self, language: &str) -> Result<Box<dyn Dictionary>, DictionaryError>;
}

/// Check that `tag` looks like a language tag: a 2-3 letter lowercase
/// language code, optionally followed by subtags joined with `_` or `-`
/// (`en`, `en_US`, `pt-BR`, `sr_Latn_RS`, `de_DE_frami`, `ca_ES-valencia`).
///
/// Each subtag is 1-8 ASCII letters or digits, so tags can never name a
/// path outside a dictionary directory. Only the shape is checked; whether
/// a backend has data for the language is up to the provider.
pub fn validate_language(tag: &str) -> Result<(), DictionaryError> {
    let mut subtags = tag.split(['_', '-']);
    let lang_ok = subtags.next().is_some_and(|lang| {
        (2..=3).contains(&lang.len()) && lang.bytes().all(|b| b.is_ascii_lowercase())
    });
    let rest_ok = subtags.all(|sub| {
        (1..=8).contains(&sub.len()) && sub.bytes().all(|b| b.is_ascii_alphanumeric())
    });

    if lang_ok && rest_ok {
        Ok(())
    } else {
        Err(DictionaryError::InvalidLanguage(tag.to_string()))
    }
}
