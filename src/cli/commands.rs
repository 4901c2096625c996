//! Command implementations for the nhamlan CLI.

use std::time::Instant;

use log::info;

use crate::cli::args::*;
use crate::confusion::ConfusionSetBuilder;
use crate::error::Result;
use crate::persist::{load_confusion_set, save_confusion_set};
use crate::similarity::EditDistanceHeuristic;
use crate::vocab::{DecomposedVocab, Vocabulary};

/// Execute a CLI command.
pub fn execute_command(args: NhamlanArgs) -> Result<()> {
    match &args.command {
        Command::Build(build_args) => build_confusion_set(build_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Build a confusion set from a vocabulary file and persist it.
fn build_confusion_set(args: BuildArgs, cli_args: &NhamlanArgs) -> Result<()> {
    let start = Instant::now();

    let vocab = Vocabulary::load_from_file(&args.vocab)?;
    if cli_args.verbosity() > 0 {
        println!(
            "Loaded {} syllable(s) from {}",
            vocab.len(),
            args.vocab.display()
        );
    }

    let mut builder = ConfusionSetBuilder::new();
    if let Some(common_path) = &args.common_vocab {
        let common = Vocabulary::load_from_file(common_path)?;
        if cli_args.verbosity() > 0 {
            println!(
                "Restricting to {} common syllable(s) from {}",
                common.len(),
                common_path.display()
            );
        }
        builder = builder.restrict_to(common.iter());
    }
    if let Some(max_set) = args.max_set {
        builder = builder.max_set(max_set);
    }
    if let Some(threads) = args.threads {
        builder = builder.num_threads(threads);
    }

    let decomposed = DecomposedVocab::from_vocabulary(&vocab);
    info!("decomposed {} syllable(s)", decomposed.len());

    let heuristic = EditDistanceHeuristic::new(args.threshold);
    let set = builder.build(&decomposed, &heuristic)?;

    save_confusion_set(&set, &args.output)?;

    if cli_args.verbosity() > 0 {
        println!(
            "Wrote {} entries to {} in {:.2?}",
            set.len(),
            args.output.display(),
            start.elapsed()
        );
    }

    Ok(())
}

/// Print statistics of a saved confusion set.
fn show_stats(args: StatsArgs, _cli_args: &NhamlanArgs) -> Result<()> {
    let set = load_confusion_set(&args.input)?;

    let empty = set.iter().filter(|(_, confusable)| confusable.is_empty()).count();

    println!("Confusion set: {}", args.input.display());
    println!("  entries:          {}", set.len());
    println!("  empty lists:      {empty}");
    println!("  mean list length: {:.2}", set.mean_list_len());
    println!("  max list length:  {}", set.max_list_len());

    Ok(())
}
