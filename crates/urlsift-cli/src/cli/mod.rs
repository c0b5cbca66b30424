//! CLI for the urlsift filter.
//!
//! Flag-based, no subcommands: the binary is a single stdin→stdout filter.
//! Default-on behaviors (static filtering, dedupe) are exposed as inverse
//! switches since a boolean flag can only turn things on.

use std::io;

use anyhow::Result;
use clap::Parser;
use urlsift_core::config::{OutputFormat, SiftConfig};
use urlsift_core::pipeline;

/// Filter a stream of URLs down to the ones worth probing.
#[derive(Debug, Parser)]
#[command(name = "urlsift")]
#[command(about = "Read URLs on stdin, emit the interesting ones", long_about = None)]
pub struct Cli {
    /// Show why each URL is interesting (matched rule names).
    #[arg(short, long)]
    pub verbose: bool,

    /// Prefix each URL with its interestingness score.
    #[arg(long)]
    pub score: bool,

    /// Minimum interestingness score required for output.
    #[arg(long, default_value_t = 1, value_name = "N")]
    pub min_score: u32,

    /// Keep boring static files instead of filtering them out.
    #[arg(long)]
    pub include_static: bool,

    /// Include JavaScript files (also disables static filtering).
    #[arg(long = "js")]
    pub include_scripts: bool,

    /// Emit every occurrence instead of deduplicating by host+path+params.
    #[arg(long)]
    pub no_dedupe: bool,

    /// Emit one JSON object per URL instead of annotated lines.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Translate the flag surface into pipeline options.
    pub fn to_config(&self) -> SiftConfig {
        SiftConfig {
            verbose: self.verbose,
            show_score: self.score,
            min_score: self.min_score,
            exclude_static: !self.include_static,
            include_scripts: self.include_scripts,
            dedupe: !self.no_dedupe,
            output: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
        }
    }

    /// Run the pipeline over stdin/stdout.
    pub fn run(&self) -> Result<()> {
        let cfg = self.to_config();
        tracing::debug!("config: {:?}", cfg);

        let stdin = io::stdin();
        let stdout = io::stdout();
        let stats = pipeline::sift(stdin.lock(), stdout.lock(), &cfg)?;

        tracing::debug!("run complete: {:?}", stats);
        Ok(())
    }
}

#[cfg(test)]
mod tests;
