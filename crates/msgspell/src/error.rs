// Error types for dictionary, cache and settings handling.

use std::path::PathBuf;

/// Error type for opening a dictionary backend.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// The language tag is not of the form `ll`, `lll` or `ll_RR`.
    #[error("invalid language tag: {0:?}")]
    InvalidLanguage(String),

    /// No dictionary files were found for the language.
    #[error("no dictionary for {language} in any of: {}", display_paths(.searched))]
    NotFound {
        language: String,
        searched: Vec<PathBuf>,
    },

    /// A dictionary file exists but could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backend rejected the dictionary data.
    #[error("failed to load {language} dictionary: {message}")]
    Parse { language: String, message: String },
}

/// Error type for loading and saving the persisted word cache.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("failed to read cache {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cache {} is larger than {limit} bytes", .path.display())]
    TooLarge { path: PathBuf, limit: u64 },

    #[error("failed to parse cache {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize cache: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write cache {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error type for reading a settings file.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Error type for [`SpellChecker`](crate::checker::SpellChecker) construction.
#[derive(Debug, thiserror::Error)]
pub enum SpellError {
    /// The dictionary backend could not be initialized.
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    /// The persisted cache exists but could not be loaded.
    #[error(transparent)]
    Cache(#[from] CacheError),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_lists_searched_paths() {
        let err = DictionaryError::NotFound {
            language: "en_US".into(),
            searched: vec![PathBuf::from("/a"), PathBuf::from("/b")],
        };
        assert_eq!(err.to_string(), "no dictionary for en_US in any of: /a, /b");
    }

    #[test]
    fn spell_error_is_transparent() {
        let err: SpellError = DictionaryError::InvalidLanguage("??".into()).into();
        assert_eq!(err.to_string(), "invalid language tag: \"??\"");
    }

    #[test]
    fn too_large_mentions_limit() {
        let err = CacheError::TooLarge {
            path: PathBuf::from("cache.json"),
            limit: 10,
        };
        assert_eq!(err.to_string(), "cache cache.json is larger than 10 bytes");
    }
}
