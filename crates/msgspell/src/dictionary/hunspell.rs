// Hunspell-format dictionaries (`<lang>.aff` + `<lang>.dic`) via spellbook.

use std::path::{Path, PathBuf};

use super::{Dictionary, DictionaryProvider, validate_language};
use crate::error::DictionaryError;
use crate::settings::Settings;

/// Default cap on the number of suggestions returned for one word.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Environment variable naming an extra dictionary directory.
pub const DICT_PATH_ENV: &str = "MSGSPELL_DICT_PATH";

/// A loaded Hunspell dictionary.
pub struct HunspellDictionary {
    inner: spellbook::Dictionary,
    max_suggestions: usize,
}

impl HunspellDictionary {
    /// Build a dictionary from the contents of an affix file and a word file.
    pub fn from_strings(language: &str, aff: &str, dic: &str) -> Result<Self, DictionaryError> {
        let inner = spellbook::Dictionary::new(aff, dic).map_err(|e| DictionaryError::Parse {
            language: language.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            inner,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        })
    }

    /// Read `<dir>/<language>.aff` and `<dir>/<language>.dic`.
    pub fn load(dir: &Path, language: &str) -> Result<Self, DictionaryError> {
        let aff = read_file(&dir.join(format!("{language}.aff")))?;
        let dic = read_file(&dir.join(format!("{language}.dic")))?;
        Self::from_strings(language, &aff, &dic)
    }

    /// Set the maximum number of suggestions returned by [`Dictionary::suggest`].
    pub fn set_max_suggestions(&mut self, value: usize) {
        self.max_suggestions = value;
    }
}

impl Dictionary for HunspellDictionary {
    fn is_valid(&self, word: &str) -> bool {
        self.inner.check(word)
    }

    fn suggest(&self, word: &str) -> Vec<String> {
        let mut out = Vec::new();
        self.inner.suggest(word, &mut out);
        out.truncate(self.max_suggestions);
        out
    }
}

/// Finds Hunspell dictionaries on disk.
///
/// Search order:
/// 1. the explicit directory (if any)
/// 2. `MSGSPELL_DICT_PATH`
/// 3. `~/.local/share/hunspell`
/// 4. `/usr/share/hunspell`, `/usr/share/myspell`, `/usr/share/myspell/dicts`
/// 5. the current working directory
#[derive(Debug, Clone)]
pub struct HunspellProvider {
    search_paths: Vec<PathBuf>,
    max_suggestions: usize,
}

impl HunspellProvider {
    /// Provider using the default search order, with `dict_dir` first.
    pub fn new(dict_dir: Option<&Path>) -> Self {
        Self {
            search_paths: build_search_paths(dict_dir),
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }

    /// Provider configured from `settings.dictionary_dir` and
    /// `settings.max_suggestions`.
    pub fn from_settings(settings: &Settings) -> Self {
        let mut provider = Self::new(settings.dictionary_dir.as_deref());
        provider.set_max_suggestions(settings.max_suggestions);
        provider
    }

    /// Provider that only looks in the given directories.
    pub fn with_search_paths(search_paths: Vec<PathBuf>) -> Self {
        Self {
            search_paths,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }

    pub fn set_max_suggestions(&mut self, value: usize) {
        self.max_suggestions = value;
    }

    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// First directory holding both files for `language`.
    pub fn find(&self, language: &str) -> Option<&Path> {
        self.search_paths
            .iter()
            .find(|dir| {
                dir.join(format!("{language}.aff")).is_file()
                    && dir.join(format!("{language}.dic")).is_file()
            })
            .map(PathBuf::as_path)
    }
}

impl DictionaryProvider for HunspellProvider {
    fn open(&self, language: &str) -> Result<Box<dyn Dictionary>, DictionaryError> {
        validate_language(language)?;
        let dir = self.find(language).ok_or_else(|| DictionaryError::NotFound {
            language: language.to_string(),
            searched: self.search_paths.clone(),
        })?;

        log::debug!("loading {language} dictionary from {}", dir.display());
        let mut dict = HunspellDictionary::load(dir, language)?;
        dict.set_max_suggestions(self.max_suggestions);
        Ok(Box::new(dict))
    }
}

fn read_file(path: &Path) -> Result<String, DictionaryError> {
    std::fs::read_to_string(path).map_err(|source| DictionaryError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn build_search_paths(dict_dir: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(dir) = dict_dir {
        paths.push(dir.to_path_buf());
    }

    if let Ok(env_path) = std::env::var(DICT_PATH_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    if let Ok(home) = std::env::var("HOME") {
        paths.push(PathBuf::from(home).join(".local/share/hunspell"));
    }

    paths.push(PathBuf::from("/usr/share/hunspell"));
    paths.push(PathBuf::from("/usr/share/myspell"));
    paths.push(PathBuf::from("/usr/share/myspell/dicts"));

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}
