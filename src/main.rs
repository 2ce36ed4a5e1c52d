//! parrot - print every user's timeline from a follows feed and a posts feed.
//!
//! Usage:
//!   parrot -u user.txt -t tweet.txt              # report on stdout
//!   parrot -u user.txt -t tweet.txt -o out.txt   # report to a file
//!
//! The report on stdout is followed by one extra newline, so the last user
//! block ends with an empty line on the terminal. The `-o` file gets the
//! report exactly.
//!
//! Diagnostics go to stderr; set `RUST_LOG` to change their verbosity.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use parrot_feed::config::{Config, DEFAULT_MAX_MESSAGE_LEN};
use parrot_feed::error::Error;
use parrot_feed::events::TracingSink;

/// A twitter-like feed parser.
#[derive(Parser, Debug)]
#[command(name = "parrot", about = "A twitter-like feed parser")]
#[command(version)]
struct Args {
    /// File containing a list of users and followers
    #[arg(short, long, value_name = "FILE")]
    users: PathBuf,

    /// File containing a list of tweets
    #[arg(short, long, value_name = "FILE")]
    tweets: PathBuf,

    /// File to write output to. If omitted, STDOUT will be used.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Longest message kept, in characters
    #[arg(long, default_value_t = DEFAULT_MAX_MESSAGE_LEN)]
    max_length: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::new(args.max_length);

    let report = parrot_feed::generate_report_from_paths(
        &args.users,
        &args.tweets,
        &config,
        &TracingSink,
    )
    .context("failed to build report")?;

    match args.output {
        Some(path) => {
            fs::write(&path, &report)
                .map_err(|source| Error::Write { path, source })
                .context("failed to save report")?;
        }
        None => println!("{report}"),
    }

    Ok(())
}
