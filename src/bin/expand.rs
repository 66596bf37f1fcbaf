//! Expands joined hand arrays into batched training examples.
//!
//! Every hand becomes one `.jsonl` file with a line per action. Hands whose
//! turn order or context cannot be rebuilt are skipped whole.

use clap::Parser;
use irchands::expand;
use irchands::save;
use irchands::save::Batches;
use irchands::save::Tally;
use rayon::prelude::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Expand joined hands into training examples")]
struct Args {
    /// JSON arrays written by `extract`
    #[arg(required = true, value_name = "FILE")]
    hands: Vec<PathBuf>,
    /// Root directory for batch folders
    #[arg(long, short, value_name = "DIR", default_value = "examples")]
    output: PathBuf,
    /// Hands per batch folder
    #[arg(long, value_name = "N", default_value_t = irchands::BATCH_SIZE)]
    batch: usize,
}

fn main() -> anyhow::Result<()> {
    irchands::log();
    let args = Args::parse();
    let mut batches = Batches::new(args.output.clone(), args.batch)?;
    let mut total = Tally::default();
    for path in args.hands.iter() {
        let hands = match save::hands::read(path) {
            Ok(hands) => hands,
            Err(e) => {
                log::error!("{:#}", e);
                continue;
            }
        };
        let expanded = hands
            .par_iter()
            .map(|hand| (hand, expand::expand(hand)))
            .collect::<Vec<_>>();
        total += batches.absorb(expanded)?;
        log::info!("{}: {} hands read", path.display(), hands.len());
    }
    if total.skipped > 0 {
        log::warn!("{} hands skipped during expansion", total.skipped);
    }
    log::info!(
        "wrote {} examples from {} hands to {}",
        total.examples,
        total.hands,
        args.output.display()
    );
    Ok(())
}
