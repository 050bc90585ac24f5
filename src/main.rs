//! Match Words CLI
//!
//! Prints every dictionary word that can be built from the letters of a word.

use anyhow::Context;
use clap::Parser;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use match_words::{run, Config};

/// List dictionary words spelled from the letters of WORD
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Source word [default: ростелеком]
    word: Option<String>,

    /// Dictionary file, one word per line [default: sociation_org.txt]
    dictionary: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::from_env(args.word, args.dictionary);
    tracing::debug!(?config, "resolved configuration");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run(&config, &mut out)
        .with_context(|| format!("matching {:?} against {}", config.word, config.dictionary.display()))?;
    out.flush()?;
    Ok(())
}
