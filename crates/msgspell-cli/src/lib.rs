// msgspell-cli: shared utilities for the command-line tools.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use msgspell::{
    CacheMode, DictionaryProvider, HunspellProvider, Settings, SpellChecker, WordListDictionary,
};

/// Cache mode as accepted on the command line.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CacheModeArg {
    /// Only rewrite a cache file that already exists
    ExistingOnly,
    /// Create the cache file if needed
    Create,
    /// Never write the cache file
    ReadOnly,
}

impl From<CacheModeArg> for CacheMode {
    fn from(arg: CacheModeArg) -> Self {
        match arg {
            CacheModeArg::ExistingOnly => CacheMode::ExistingOnly,
            CacheModeArg::Create => CacheMode::Create,
            CacheModeArg::ReadOnly => CacheMode::ReadOnly,
        }
    }
}

/// Command-line values that override the settings file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub cache: Option<PathBuf>,
    pub cache_mode: Option<CacheMode>,
    pub language: Option<String>,
    pub dict_path: Option<PathBuf>,
    pub max_suggestions: Option<usize>,
}

/// Build settings: defaults, then the config file, then `MSGSPELL_CACHE`,
/// then command-line overrides.
pub fn build_settings(config: Option<&Path>, overrides: Overrides) -> Result<Settings> {
    let mut settings = match config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    }
    .with_env();

    if let Some(cache) = overrides.cache {
        settings.spell_cache = Some(cache);
    }
    if let Some(mode) = overrides.cache_mode {
        settings.cache_mode = mode;
    }
    if let Some(language) = overrides.language {
        settings.language = language;
    }
    if let Some(dir) = overrides.dict_path {
        settings.dictionary_dir = Some(dir);
    }
    if let Some(n) = overrides.max_suggestions {
        settings.max_suggestions = n;
    }
    Ok(settings)
}

/// Create a checker, either from a plain word list or from Hunspell
/// dictionaries found via the settings.
pub fn open_checker(settings: &Settings, word_list: Option<&Path>) -> Result<SpellChecker> {
    if let Some(path) = word_list {
        let dict = WordListDictionary::load(path)?;
        log::info!("using word list {} ({} words)", path.display(), dict.len());
        return Ok(SpellChecker::with_dictionary(Box::new(dict), settings)?);
    }

    let provider = HunspellProvider::from_settings(settings);
    open_with_provider(settings, &provider)
}

fn open_with_provider(settings: &Settings, provider: &dyn DictionaryProvider) -> Result<SpellChecker> {
    SpellChecker::new(settings, provider)
        .with_context(|| format!("failed to set up {} spell checker", settings.language))
}

/// Initialize `env_logger`; `-v` raises the level from warn to info, `-vv`
/// to debug. `RUST_LOG` still takes precedence.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}

/// One input source: a file name (or `-` for stdin) and its lines.
pub struct Input {
    pub name: String,
    pub lines: Vec<String>,
}

/// Read the given files, or stdin when `files` is empty.
pub fn read_inputs(files: &[PathBuf]) -> Result<Vec<Input>> {
    if files.is_empty() {
        let lines = io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .context("error reading stdin")?;
        return Ok(vec![Input {
            name: "-".to_string(),
            lines,
        }]);
    }

    files
        .iter()
        .map(|path| {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok(Input {
                name: path.display().to_string(),
                lines: text.lines().map(str::to_string).collect(),
            })
        })
        .collect()
}
