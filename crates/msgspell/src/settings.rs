// Checker configuration.
//
// Loaded from TOML, e.g.:
//
//   spell_cache = "build/spell_cache.json"
//   cache_mode = "existing-only"
//   language = "en_US"
//   dictionary_dir = "/usr/share/hunspell"
//   max_suggestions = 5

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dictionary::DEFAULT_LANGUAGE;
use crate::error::SettingsError;

/// Environment variable overriding [`Settings::spell_cache`].
pub const CACHE_PATH_ENV: &str = "MSGSPELL_CACHE";

/// When the persisted cache is read and written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CacheMode {
    /// Read the cache if the file exists; write it back on close only if
    /// the file exists at that point. A missing file is never created.
    #[default]
    ExistingOnly,
    /// Read the cache if present; always write it on close, creating the
    /// file if needed.
    Create,
    /// Read the cache if present; never write it.
    ReadOnly,
}

/// Settings for a [`SpellChecker`](crate::checker::SpellChecker).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Location of the persisted cache. `None` disables persistence.
    pub spell_cache: Option<PathBuf>,
    pub cache_mode: CacheMode,
    /// Language tag handed to the dictionary provider.
    pub language: String,
    /// Extra directory searched first for dictionary files.
    ///
    /// Read by [`HunspellProvider::from_settings`]; a provider built any
    /// other way ignores it.
    ///
    /// [`HunspellProvider::from_settings`]: crate::dictionary::hunspell::HunspellProvider::from_settings
    pub dictionary_dir: Option<PathBuf>,
    /// Maximum suggestions per rejected word. Like `dictionary_dir`, this
    /// is applied by the provider, not by the checker.
    pub max_suggestions: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            spell_cache: None,
            cache_mode: CacheMode::default(),
            language: DEFAULT_LANGUAGE.to_string(),
            dictionary_dir: None,
            max_suggestions: 5,
        }
    }
}

impl Settings {
    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(text)?)
    }

    /// Read settings from a TOML file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Apply `MSGSPELL_CACHE` if set and non-empty.
    pub fn with_env(mut self) -> Self {
        if let Some(path) = std::env::var_os(CACHE_PATH_ENV).filter(|p| !p.is_empty()) {
            self.spell_cache = Some(PathBuf::from(path));
        }
        self
    }

    pub fn with_spell_cache(mut self, path: impl Into<PathBuf>) -> Self {
        self.spell_cache = Some(path.into());
        self
    }

    pub fn with_cache_mode(mut self, mode: CacheMode) -> Self {
        self.cache_mode = mode;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_dictionary_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dictionary_dir = Some(dir.into());
        self
    }

    pub fn with_max_suggestions(mut self, value: usize) -> Self {
        self.max_suggestions = value;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.spell_cache, None);
        assert_eq!(settings.cache_mode, CacheMode::ExistingOnly);
        assert_eq!(settings.language, "en_US");
        assert_eq!(settings.max_suggestions, 5);
    }

    #[test]
    fn empty_toml_gives_defaults() {
        assert_eq!(Settings::from_toml_str("").unwrap(), Settings::default());
    }

    #[test]
    fn parses_all_fields() {
        let settings = Settings::from_toml_str(
            r#"
            spell_cache = "build/cache.json"
            cache_mode = "read-only"
            language = "en_GB"
            dictionary_dir = "/opt/dicts"
            max_suggestions = 3
            "#,
        )
        .unwrap();
        assert_eq!(settings.spell_cache, Some(PathBuf::from("build/cache.json")));
        assert_eq!(settings.cache_mode, CacheMode::ReadOnly);
        assert_eq!(settings.language, "en_GB");
        assert_eq!(settings.dictionary_dir, Some(PathBuf::from("/opt/dicts")));
        assert_eq!(settings.max_suggestions, 3);
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(matches!(
            Settings::from_toml_str("spellcache = \"x\""),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn rejects_unknown_cache_mode() {
        assert!(Settings::from_toml_str("cache_mode = \"sometimes\"").is_err());
    }

    #[test]
    fn builder_setters() {
        let settings = Settings::default()
            .with_spell_cache("c.json")
            .with_cache_mode(CacheMode::Create)
            .with_language("fi")
            .with_dictionary_dir("/d")
            .with_max_suggestions(1);
        assert_eq!(settings.spell_cache, Some(PathBuf::from("c.json")));
        assert_eq!(settings.cache_mode, CacheMode::Create);
        assert_eq!(settings.language, "fi");
        assert_eq!(settings.dictionary_dir, Some(PathBuf::from("/d")));
        assert_eq!(settings.max_suggestions, 1);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        match Settings::load(&path) {
            Err(SettingsError::Read { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected Read error, got {other:?}"),
        }
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("msgspell.toml");
        std::fs::write(&path, "language = \"de_DE\"\n").unwrap();
        assert_eq!(Settings::load(&path).unwrap().language, "de_DE");
    }
}
