// SpellChecker: tokenizes strings, filters tokens through the exception list
// and the word cache, and asks the dictionary about the rest.
//
// Lifecycle:
// - construction opens the dictionary and loads the persisted cache (if the
//   configured file exists); both failures are fatal
// - `check` grows the cache as words and strings are found valid
// - `close` writes the cache back according to the cache mode; if the
//   checker is dropped without `close`, the same write happens in `Drop`
//   and a failure is only logged

use std::path::{Path, PathBuf};

use msgspell_core::Finding;

use crate::cache::WordCache;
use crate::dictionary::{Dictionary, DictionaryProvider, validate_language};
use crate::error::{CacheError, SpellError};
use crate::exceptions;
use crate::settings::{CacheMode, Settings};
use crate::tokenizer;

/// Counters collected while checking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckStats {
    /// Calls to [`SpellChecker::check`].
    pub strings_checked: usize,
    /// Strings answered from the string cache without tokenizing.
    pub string_cache_hits: usize,
    /// Tokens examined.
    pub words_checked: usize,
    /// Tokens accepted by the exception list.
    pub exception_hits: usize,
    /// Tokens accepted from the word cache.
    pub word_cache_hits: usize,
    /// Tokens sent to the dictionary.
    pub dictionary_lookups: usize,
    /// Tokens the dictionary rejected.
    pub findings: usize,
}

/// Why the cache was not written on close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No cache path is configured.
    NoCachePath,
    /// The cache mode is [`CacheMode::ReadOnly`].
    ReadOnly,
    /// The cache mode is [`CacheMode::ExistingOnly`] and the file is absent.
    MissingFile,
    /// The cache was already written by an earlier call.
    AlreadyPersisted,
}

/// Result of writing the cache back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistOutcome {
    Written { path: PathBuf, entries: usize },
    Skipped(SkipReason),
}

/// Spell checker for UI strings.
///
/// Not synchronized: share it between threads only behind a lock.
pub struct SpellChecker {
    dictionary: Box<dyn Dictionary>,
    cache: WordCache,
    cache_path: Option<PathBuf>,
    cache_mode: CacheMode,
    language: String,
    stats: CheckStats,
    /// Set once the cache has been written (or skipped); guards the `Drop`
    /// fallback.
    persisted: bool,
}

impl SpellChecker {
    /// Open the dictionary for `settings.language` and load the cache.
    ///
    /// Fails if the provider cannot open the dictionary, or if the cache
    /// file exists but cannot be read or parsed.
    pub fn new(settings: &Settings, provider: &dyn DictionaryProvider) -> Result<Self, SpellError> {
        validate_language(&settings.language)?;
        let dictionary = provider.open(&settings.language)?;
        Self::with_dictionary(dictionary, settings)
    }

    /// Use an already opened dictionary.
    pub fn with_dictionary(
        dictionary: Box<dyn Dictionary>,
        settings: &Settings,
    ) -> Result<Self, SpellError> {
        let cache = match settings.spell_cache.as_deref() {
            Some(path) if path.exists() => WordCache::load(path)?,
            _ => WordCache::new(),
        };

        Ok(Self {
            dictionary,
            cache,
            cache_path: settings.spell_cache.clone(),
            cache_mode: settings.cache_mode,
            language: settings.language.clone(),
            stats: CheckStats::default(),
            persisted: false,
        })
    }

    /// Check one string and return the rejected words in order of
    /// appearance. An empty result means no issues were found.
    ///
    /// A string that was found clean before is answered from the cache
    /// without tokenizing. Accepted words are remembered in lowercase;
    /// rejected words are never cached, so they are reported again on
    /// every occurrence.
    pub fn check(&mut self, text: &str) -> Vec<Finding> {
        self.stats.strings_checked += 1;
        let mut findings = Vec::new();

        if self.cache.contains_string(text) {
            self.stats.string_cache_hits += 1;
            return findings;
        }

        for word in tokenizer::words(text) {
            self.stats.words_checked += 1;
            let lower = word.to_ascii_lowercase();

            if exceptions::is_exception(&lower) {
                self.stats.exception_hits += 1;
                continue;
            }
            if self.cache.contains_word(&lower) {
                self.stats.word_cache_hits += 1;
                continue;
            }

            self.stats.dictionary_lookups += 1;
            if self.dictionary.is_valid(word) {
                self.cache.insert_word(lower);
            } else {
                findings.push(Finding::new(word, self.dictionary.suggest(word)));
            }
        }

        if findings.is_empty() {
            self.cache.insert_string(text);
        } else {
            self.stats.findings += findings.len();
        }
        findings
    }

    /// Check many strings. Returns `(index, findings)` for each string with
    /// at least one finding.
    pub fn check_all<'a, I>(&mut self, texts: I) -> Vec<(usize, Vec<Finding>)>
    where
        I: IntoIterator<Item = &'a str>,
    {
        texts
            .into_iter()
            .enumerate()
            .filter_map(|(i, text)| {
                let findings = self.check(text);
                (!findings.is_empty()).then_some((i, findings))
            })
            .collect()
    }

    pub fn cache(&self) -> &WordCache {
        &self.cache
    }

    pub fn stats(&self) -> CheckStats {
        self.stats
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn cache_path(&self) -> Option<&Path> {
        self.cache_path.as_deref()
    }

    /// Finish checking and write the cache back.
    ///
    /// With [`CacheMode::ExistingOnly`] the file is only rewritten if it
    /// exists now; [`CacheMode::Create`] creates it; [`CacheMode::ReadOnly`]
    /// never writes.
    pub fn close(mut self) -> Result<PersistOutcome, CacheError> {
        log::debug!("spell check stats: {:?}", self.stats);
        self.persist()
    }

    fn persist(&mut self) -> Result<PersistOutcome, CacheError> {
        if self.persisted {
            return Ok(PersistOutcome::Skipped(SkipReason::AlreadyPersisted));
        }
        self.persisted = true;

        let Some(path) = self.cache_path.as_deref() else {
            return Ok(PersistOutcome::Skipped(SkipReason::NoCachePath));
        };
        match self.cache_mode {
            CacheMode::ReadOnly => Ok(PersistOutcome::Skipped(SkipReason::ReadOnly)),
            CacheMode::ExistingOnly if !path.exists() => {
                log::debug!("not creating spell cache {}", path.display());
                Ok(PersistOutcome::Skipped(SkipReason::MissingFile))
            }
            CacheMode::ExistingOnly | CacheMode::Create => {
                let entries = self.cache.save(path)?;
                Ok(PersistOutcome::Written {
                    path: path.to_path_buf(),
                    entries,
                })
            }
        }
    }
}

impl Drop for SpellChecker {
    fn drop(&mut self) {
        if self.persisted {
            return;
        }
        if let Err(e) = self.persist() {
            log::warn!("spell cache not saved: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::dictionary::WordListDictionary;

    /// Dictionary double that records every word it is asked about.
    struct RecordingDictionary {
        inner: WordListDictionary,
        queried: Rc<RefCell<Vec<String>>>,
    }

    impl Dictionary for RecordingDictionary {
        fn is_valid(&self, word: &str) -> bool {
            self.queried.borrow_mut().push(word.to_string());
            self.inner.is_valid(word)
        }

        fn suggest(&self, word: &str) -> Vec<String> {
            self.inner.suggest(word)
        }
    }

    fn checker(words: &[&str]) -> (SpellChecker, Rc<RefCell<Vec<String>>>) {
        let queried = Rc::new(RefCell::new(Vec::new()));
        let dict = RecordingDictionary {
            inner: WordListDictionary::from_words(words.iter().copied())
                .with_suggestions("wrnogly", ["wrongly"]),
            queried: Rc::clone(&queried),
        };
        let checker = SpellChecker::with_dictionary(Box::new(dict), &Settings::default()).unwrap();
        (checker, queried)
    }

    #[test]
    fn reports_misspelling_with_suggestions() {
        let (mut sc, _) = checker(&["this", "is", "spelled"]);
        assert_eq!(
            sc.check("This is wrnogly spelled."),
            vec![Finding::new("wrnogly", vec!["wrongly".to_string()])]
        );
    }

    #[test]
    fn empty_text_is_clean_and_cached() {
        let (mut sc, queried) = checker(&[]);
        assert!(sc.check("").is_empty());
        assert!(sc.cache().contains_string(""));
        assert!(queried.borrow().is_empty());
    }

    #[test]
    fn exception_words_never_reach_dictionary() {
        let (mut sc, queried) = checker(&["the", "count", "is", "high"]);
        assert!(sc.check("The vertices count is high.").is_empty());
        assert!(!queried.borrow().iter().any(|w| w.eq_ignore_ascii_case("vertices")));
        assert!(sc.cache().contains_string("The vertices count is high."));
        assert_eq!(sc.stats().exception_hits, 1);
    }

    #[test]
    fn exception_wins_over_rejecting_dictionary() {
        let (mut sc, queried) = checker(&[]);
        assert_eq!(sc.check("Backface culling off").len(), 2);
        assert_eq!(*queried.borrow(), vec!["culling", "off"]);
        assert!(sc.check("Backface").is_empty());
        assert_eq!(queried.borrow().len(), 2);
    }

    #[test]
    fn valid_words_are_cached_lowercase() {
        let (mut sc, queried) = checker(&["House"]);
        assert!(sc.check("House").is_empty());
        assert!(sc.cache().contains_word("house"));
        assert!(!sc.cache().contains_word("House"));
        assert_eq!(queried.borrow().len(), 1);

        // Different string, same word: answered from the word cache.
        assert!(sc.check("HOUSE").is_empty());
        assert_eq!(queried.borrow().len(), 1);
        assert_eq!(sc.stats().word_cache_hits, 1);
    }

    #[test]
    fn invalid_words_are_not_cached() {
        let (mut sc, queried) = checker(&[]);
        assert_eq!(sc.check("xyzzy").len(), 1);
        assert_eq!(sc.check("xyzzy").len(), 1);
        assert_eq!(queried.borrow().len(), 2);
        assert!(!sc.cache().contains_word("xyzzy"));
        assert!(!sc.cache().contains_string("xyzzy"));
    }

    #[test]
    fn repeated_misspelling_is_reported_each_time() {
        let (mut sc, _) = checker(&[]);
        let findings = sc.check("xyzzy xyzzy");
        assert_eq!(findings.len(), 2);
        assert_eq!(sc.stats().findings, 2);
    }

    #[test]
    fn clean_string_short_circuits() {
        let (mut sc, queried) = checker(&["all", "good", "here"]);
        assert!(sc.check("All good here.").is_empty());
        let lookups = queried.borrow().len();

        assert!(sc.check("All good here.").is_empty());
        assert_eq!(queried.borrow().len(), lookups);
        assert_eq!(sc.stats().string_cache_hits, 1);
        assert_eq!(sc.stats().words_checked, 3);
    }

    #[test]
    fn partially_valid_string_caches_valid_words_only() {
        let (mut sc, _) = checker(&["good"]);
        assert_eq!(sc.check("good xyzzy").len(), 1);
        assert!(sc.cache().contains_word("good"));
        assert!(!sc.cache().contains_string("good xyzzy"));
    }

    #[test]
    fn findings_keep_order_and_case() {
        let (mut sc, _) = checker(&["and"]);
        let findings = sc.check("Qwrt and Zxcv");
        let words: Vec<&str> = findings.iter().map(|f| f.word.as_str()).collect();
        assert_eq!(words, vec!["Qwrt", "Zxcv"]);
    }

    #[test]
    fn cache_never_shrinks() {
        let (mut sc, _) = checker(&["one", "two"]);
        let mut last = sc.cache().len();
        for text in ["one", "two three", "one two", "four", ""] {
            sc.check(text);
            assert!(sc.cache().len() >= last);
            last = sc.cache().len();
        }
    }

    #[test]
    fn check_all_reports_indices_with_findings() {
        let (mut sc, _) = checker(&["fine"]);
        let report = sc.check_all(["fine", "xyzzy", "fine fine", "qwrt"]);
        let indices: Vec<usize> = report.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![1, 3]);
    }

    #[test]
    fn close_without_cache_path_skips() {
        let (sc, _) = checker(&[]);
        assert_eq!(
            sc.close().unwrap(),
            PersistOutcome::Skipped(SkipReason::NoCachePath)
        );
    }

    #[test]
    fn persist_runs_once() {
        let (mut sc, _) = checker(&[]);
        assert_eq!(
            sc.persist().unwrap(),
            PersistOutcome::Skipped(SkipReason::NoCachePath)
        );
        assert_eq!(
            sc.persist().unwrap(),
            PersistOutcome::Skipped(SkipReason::AlreadyPersisted)
        );
    }

    #[test]
    fn new_rejects_malformed_language() {
        let settings = Settings::default().with_language("english");
        let provider = crate::dictionary::WordListProvider::new("/nonexistent");
        assert!(matches!(
            SpellChecker::new(&settings, &provider),
            Err(SpellError::Dictionary(crate::error::DictionaryError::InvalidLanguage(_)))
        ));
    }
}
