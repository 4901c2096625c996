//! Command line argument parsing for the nhamlan CLI using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Nhamlan - confusion set builder for Vietnamese syllables
#[derive(Parser, Debug, Clone)]
#[command(name = "nhamlan")]
#[command(about = "Build confusion sets for Vietnamese syllables")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct NhamlanArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl NhamlanArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build a confusion set from a vocabulary file
    Build(BuildArgs),

    /// Show statistics of a saved confusion set
    Stats(StatsArgs),
}

/// Arguments for building a confusion set
#[derive(Parser, Debug, Clone)]
pub struct BuildArgs {
    /// Path to the vocabulary file (one syllable per line)
    #[arg(long, value_name = "VOCAB_FILE")]
    pub vocab: PathBuf,

    /// Optional common-syllable list; when given, only these words get
    /// confusion entries (candidates still come from the full vocabulary)
    #[arg(long, value_name = "COMMON_VOCAB_FILE")]
    pub common_vocab: Option<PathBuf>,

    /// Destination for the serialized confusion set (.json or binary)
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    pub output: PathBuf,

    /// Maximum total edit distance for two words to be confusable
    #[arg(short, long, default_value = "1")]
    pub threshold: usize,

    /// Cap each confusion list at the N closest entries
    #[arg(long, value_name = "N")]
    pub max_set: Option<usize>,

    /// Number of worker threads (default: all logical cores)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,
}

/// Arguments for showing confusion-set statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to a saved confusion set
    #[arg(value_name = "CONFUSION_SET_FILE")]
    pub input: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build_command() {
        let args = NhamlanArgs::parse_from([
            "nhamlan", "build", "--vocab", "syllables.txt", "--output", "confusion.json",
            "--threshold", "2", "--max-set", "50",
        ]);

        match args.command {
            Command::Build(build) => {
                assert_eq!(build.vocab, PathBuf::from("syllables.txt"));
                assert_eq!(build.output, PathBuf::from("confusion.json"));
                assert_eq!(build.threshold, 2);
                assert_eq!(build.max_set, Some(50));
                assert_eq!(build.common_vocab, None);
                assert_eq!(build.threads, None);
            }
            _ => panic!("expected build command"),
        }
    }

    #[test]
    fn test_threshold_defaults_to_one() {
        let args = NhamlanArgs::parse_from([
            "nhamlan", "build", "--vocab", "syllables.txt", "--output", "confusion.bin",
        ]);

        match args.command {
            Command::Build(build) => assert_eq!(build.threshold, 1),
            _ => panic!("expected build command"),
        }
    }

    #[test]
    fn test_verbosity() {
        let args = NhamlanArgs::parse_from(["nhamlan", "-vv", "stats", "confusion.json"]);
        assert_eq!(args.verbosity(), 2);

        let args = NhamlanArgs::parse_from(["nhamlan", "-q", "stats", "confusion.json"]);
        assert_eq!(args.verbosity(), 0);
    }
}
