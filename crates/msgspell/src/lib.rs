//! Spell checking for extracted UI strings.
//!
//! Strings are split into words, words on the built-in jargon allow-list or
//! already seen are skipped, and the rest go to a [`Dictionary`] backend.
//! Results are cached per word and per whole string, and the cache can be
//! persisted between runs.
//!
//! # Architecture
//!
//! - [`tokenizer`] -- Splitting strings into checkable words
//! - [`exceptions`] -- Compiled-in allow-list of jargon and abbreviations
//! - [`cache`] -- Learned words and clean strings, with JSON persistence
//! - [`dictionary`] -- Backend traits, Hunspell and word-list backends
//! - [`settings`] -- TOML-loadable configuration
//! - [`checker`] -- [`SpellChecker`], tying the pieces together
//!
//! # Example
//!
//! ```
//! use msgspell::{Settings, SpellChecker, WordListDictionary};
//!
//! let dict = WordListDictionary::from_words(["the", "count", "is", "high"]);
//! let mut checker = SpellChecker::with_dictionary(Box::new(dict), &Settings::default())?;
//! assert!(checker.check("The vertices count is high.").is_empty());
//! checker.close()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cache;
pub mod checker;
pub mod dictionary;
pub mod error;
pub mod exceptions;
pub mod settings;
pub mod tokenizer;

pub use cache::WordCache;
pub use checker::{CheckStats, PersistOutcome, SkipReason, SpellChecker};
#[cfg(feature = "hunspell")]
pub use dictionary::HunspellProvider;
pub use dictionary::{Dictionary, DictionaryProvider, WordListDictionary, WordListProvider};
pub use error::{CacheError, DictionaryError, SettingsError, SpellError};
pub use msgspell_core::Finding;
pub use settings::{CacheMode, Settings};
pub use tokenizer::split_words;
