// msgspell-check: flag likely-misspelled words in extracted UI strings.
//
// Checks every line of the given files (or stdin) as one UI string and
// prints one line per rejected word:
//   FILE:LINE: W: word -> suggestion, suggestion
//
// With --json, prints one JSON object per string with findings instead.
//
// Exit status: 0 if nothing was flagged, 1 if any word was flagged,
// 2 on setup errors (missing dictionary, unreadable cache, ...).

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use msgspell::{Finding, PersistOutcome};
use msgspell_cli::{CacheModeArg, Overrides};
use serde::Serialize;

/// Flag likely-misspelled words in UI strings, one string per line.
#[derive(Debug, Parser)]
#[command(name = "msgspell-check", version)]
struct Args {
    /// Input files (default: stdin)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Directory searched first for <LANG>.aff / <LANG>.dic
    #[arg(short = 'd', long, value_name = "DIR")]
    dict_path: Option<PathBuf>,

    /// Plain word list to use instead of a Hunspell dictionary
    #[arg(short = 'w', long, value_name = "FILE")]
    word_list: Option<PathBuf>,

    /// Dictionary language
    #[arg(short, long, value_name = "LANG")]
    language: Option<String>,

    /// Persisted cache file
    #[arg(short, long, value_name = "FILE")]
    cache: Option<PathBuf>,

    /// When to write the cache file
    #[arg(long, value_enum)]
    cache_mode: Option<CacheModeArg>,

    /// Settings file (TOML)
    #[arg(long, value_name = "FILE", env = "MSGSPELL_CONFIG")]
    config: Option<PathBuf>,

    /// Maximum suggestions per word
    #[arg(short = 'n', long, value_name = "N")]
    max_suggestions: Option<usize>,

    /// Print JSON lines instead of text
    #[arg(long)]
    json: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct Report<'a> {
    source: &'a str,
    line: usize,
    text: &'a str,
    findings: &'a [Finding],
}

fn main() -> ExitCode {
    let args = Args::parse();
    msgspell_cli::init_logging(args.verbose);

    match run(args) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

/// Returns the number of flagged words.
fn run(args: Args) -> Result<usize> {
    let settings = msgspell_cli::build_settings(
        args.config.as_deref(),
        Overrides {
            cache: args.cache,
            cache_mode: args.cache_mode.map(Into::into),
            language: args.language,
            dict_path: args.dict_path,
            max_suggestions: args.max_suggestions,
        },
    )?;
    let inputs = msgspell_cli::read_inputs(&args.files)?;
    let mut checker = msgspell_cli::open_checker(&settings, args.word_list.as_deref())?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut flagged = 0;

    for input in &inputs {
        for (i, text) in input.lines.iter().enumerate() {
            let findings = checker.check(text);
            if findings.is_empty() {
                continue;
            }
            flagged += findings.len();

            if args.json {
                let report = Report {
                    source: &input.name,
                    line: i + 1,
                    text: text.as_str(),
                    findings: &findings,
                };
                serde_json::to_writer(&mut out, &report)?;
                writeln!(out)?;
            } else {
                for finding in &findings {
                    writeln!(out, "{}:{}: W: {}", input.name, i + 1, format_finding(finding))?;
                }
            }
        }
    }
    out.flush()?;

    let stats = checker.stats();
    log::info!(
        "{} strings, {} dictionary lookups, {} flagged",
        stats.strings_checked,
        stats.dictionary_lookups,
        stats.findings
    );
    match checker.close()? {
        PersistOutcome::Written { path, entries } => {
            log::info!("wrote {entries} cache entries to {}", path.display());
        }
        PersistOutcome::Skipped(reason) => log::info!("cache not written: {reason:?}"),
    }

    Ok(flagged)
}

fn format_finding(finding: &Finding) -> String {
    if finding.has_suggestions() {
        format!("{} -> {}", finding.word, finding.suggestions.join(", "))
    } else {
        format!("{} (no suggestions)", finding.word)
    }
}
