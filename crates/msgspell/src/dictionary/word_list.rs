// Plain word-list dictionary.
//
// Accepts exactly the listed words (and their capitalized forms) and answers
// suggestions only from an explicit table. Used with project word lists that
// have no affix data, and as a predictable backend in tests.

use std::path::{Path, PathBuf};

use hashbrown::{HashMap, HashSet};

use super::{Dictionary, DictionaryProvider, validate_language};
use crate::error::DictionaryError;

/// Dictionary backed by an in-memory word set.
#[derive(Debug, Clone, Default)]
pub struct WordListDictionary {
    words: HashSet<String>,
    suggestions: HashMap<String, Vec<String>>,
}

impl WordListDictionary {
    /// Create an empty dictionary that rejects every word.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dictionary accepting the given words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            suggestions: HashMap::new(),
        }
    }

    /// Parse a word list: one word per line, blank lines and lines starting
    /// with `#` are skipped.
    pub fn parse(text: &str) -> Self {
        Self::from_words(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// Read a word list file.
    pub fn load(path: &Path) -> Result<Self, DictionaryError> {
        let text = std::fs::read_to_string(path).map_err(|source| DictionaryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    /// Register the suggestions returned for a rejected `word`.
    pub fn with_suggestions<I, S>(mut self, word: impl Into<String>, suggestions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suggestions.insert(
            word.into(),
            suggestions.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Add a word to the accepted set.
    pub fn insert(&mut self, word: impl Into<String>) {
        self.words.insert(word.into());
    }

    /// Number of accepted words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordListDictionary {
    fn is_valid(&self, word: &str) -> bool {
        if self.words.contains(word) {
            return true;
        }
        // Sentence-initial and all-caps forms of listed lowercase words.
        let lower = word.to_lowercase();
        lower != word && self.words.contains(&lower)
    }

    fn suggest(&self, word: &str) -> Vec<String> {
        self.suggestions.get(word).cloned().unwrap_or_default()
    }
}

/// Opens `<dir>/<language>.txt` word lists.
#[derive(Debug, Clone)]
pub struct WordListProvider {
    dir: PathBuf,
}

impl WordListProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the word list for `language`.
    pub fn path_for(&self, language: &str) -> PathBuf {
        self.dir.join(format!("{language}.txt"))
    }
}

impl DictionaryProvider for WordListProvider {
    fn open(&self, language: &str) -> Result<Box<dyn Dictionary>, DictionaryError> {
        validate_language(language)?;
        let path = self.path_for(language);
        if !path.is_file() {
            return Err(DictionaryError::NotFound {
                language: language.to_string(),
                searched: vec![path],
            });
        }
        let dict = WordListDictionary::load(&path)?;
        log::debug!("loaded {} words from {}", dict.len(), path.display());
        Ok(Box::new(dict))
    }
}
