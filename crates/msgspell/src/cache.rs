// Word cache: words and whole strings already known to need no checking.
//
// Two sets are kept apart. `words` holds lowercased tokens the dictionary
// accepted; `strings` holds verbatim texts in which every token was valid.
// The static exception list is checked by the caller and never copied into
// `words`, so it is never written to disk either.
//
// Saving goes through a temporary file in the target directory that is then
// renamed over the old cache, so an interrupted run leaves the previous file
// intact.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::error::CacheError;

/// Largest cache file that will be read or written.
pub const MAX_CACHE_FILE_BYTES: u64 = 64 * 1024 * 1024;

/// Current on-disk format version.
const CACHE_FORMAT_VERSION: u32 = 1;

/// On-disk cache layout.
///
/// The flat form is a plain list of strings with no word/string split; its
/// entries are sorted into the two sets on load.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum CacheFile {
    Split {
        version: u32,
        #[serde(default)]
        words: Vec<String>,
        #[serde(default)]
        strings: Vec<String>,
    },
    Flat(Vec<String>),
}

/// Set of known-good words and strings for one checker.
///
/// Only ever grows: there is no removal API.
#[derive(Debug, Clone, Default)]
pub struct WordCache {
    words: HashSet<String>,
    strings: HashSet<String>,
}

impl WordCache {
    /// Create an empty cache (the exception list is still consulted).
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a cache file written by [`WordCache::save`] or a flat JSON list
    /// of strings.
    pub fn load(path: &Path) -> Result<Self, CacheError> {
        let file = File::open(path).map_err(|source| CacheError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut data = Vec::new();
        file.take(MAX_CACHE_FILE_BYTES + 1)
            .read_to_end(&mut data)
            .map_err(|source| CacheError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        if data.len() as u64 > MAX_CACHE_FILE_BYTES {
            return Err(CacheError::TooLarge {
                path: path.to_path_buf(),
                limit: MAX_CACHE_FILE_BYTES,
            });
        }

        let parsed: CacheFile =
            serde_json::from_slice(&data).map_err(|source| CacheError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let mut cache = Self::new();
        match parsed {
            CacheFile::Split { words, strings, .. } => {
                cache.words.extend(words);
                cache.strings.extend(strings);
            }
            CacheFile::Flat(entries) => {
                for entry in entries {
                    if is_plain_word(&entry) {
                        cache.words.insert(entry);
                    } else {
                        cache.strings.insert(entry);
                    }
                }
            }
        }

        log::debug!(
            "loaded cache {}: {} words, {} strings",
            path.display(),
            cache.words.len(),
            cache.strings.len()
        );
        Ok(cache)
    }

    /// Write the learned words and strings to `path`, replacing its contents.
    ///
    /// Entries are sorted so that unchanged caches produce identical files.
    /// A cache that would serialize to more than [`MAX_CACHE_FILE_BYTES`]
    /// is not written, since [`WordCache::load`] would refuse it.
    /// Returns the number of entries written.
    pub fn save(&self, path: &Path) -> Result<usize, CacheError> {
        self.save_capped(path, MAX_CACHE_FILE_BYTES)
    }

    fn save_capped(&self, path: &Path, limit: u64) -> Result<usize, CacheError> {
        let mut words: Vec<String> = self.words.iter().cloned().collect();
        let mut strings: Vec<String> = self.strings.iter().cloned().collect();
        words.sort_unstable();
        strings.sort_unstable();
        let entries = words.len() + strings.len();

        let file = CacheFile::Split {
            version: CACHE_FORMAT_VERSION,
            words,
            strings,
        };
        let data = serde_json::to_vec_pretty(&file).map_err(CacheError::Serialize)?;
        if data.len() as u64 > limit {
            return Err(CacheError::TooLarge {
                path: path.to_path_buf(),
                limit,
            });
        }
        write_replacing(path, &data)?;

        log::debug!("saved {entries} cache entries to {}", path.display());
        Ok(entries)
    }

    /// Returns `true` if `lower` was accepted earlier. Exceptions are not
    /// included.
    pub fn contains_word(&self, lower: &str) -> bool {
        self.words.contains(lower)
    }

    /// Returns `true` if `text` was previously found free of misspellings.
    pub fn contains_string(&self, text: &str) -> bool {
        self.strings.contains(text)
    }

    /// Remember a lowercased word as valid. Returns `true` if it was new.
    pub fn insert_word(&mut self, lower: impl Into<String>) -> bool {
        self.words.insert(lower.into())
    }

    /// Remember a whole string as free of misspellings. Returns `true` if
    /// it was new.
    pub fn insert_string(&mut self, text: impl Into<String>) -> bool {
        self.strings.insert(text.into())
    }

    /// Number of learned words (exceptions not included).
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of learned whole strings.
    pub fn string_count(&self) -> usize {
        self.strings.len()
    }

    /// Total number of learned entries.
    pub fn len(&self) -> usize {
        self.words.len() + self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Write `data` to a temporary file next to `path`, then rename it over
/// `path`.
fn write_replacing(path: &Path, data: &[u8]) -> Result<(), CacheError> {
    let write_err = |source: std::io::Error| CacheError::Write {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(data).map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}

/// A flat-cache entry that can only have come from the word side.
fn is_plain_word(entry: &str) -> bool {
    !entry.is_empty() && entry.bytes().all(|b| b.is_ascii_lowercase())
}
