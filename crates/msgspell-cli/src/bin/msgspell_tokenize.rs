// msgspell-tokenize: print the words msgspell would check.
//
// Reads lines from the given files (or stdin) and prints each checkable
// word on its own line. With --lines, prints the words of each input line
// tab-separated on one output line instead.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

/// Print the words msgspell would check, one per line.
#[derive(Debug, Parser)]
#[command(name = "msgspell-tokenize", version)]
struct Args {
    /// Input files (default: stdin)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Keep input lines together, words separated by tabs
    #[arg(long)]
    lines: bool,
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(args: Args) -> Result<()> {
    let inputs = msgspell_cli::read_inputs(&args.files)?;
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for input in &inputs {
        for line in &input.lines {
            let words = msgspell::split_words(line);
            if args.lines {
                writeln!(out, "{}", words.join("\t"))?;
            } else {
                for word in words {
                    writeln!(out, "{word}")?;
                }
            }
        }
    }
    out.flush()?;
    Ok(())
}
