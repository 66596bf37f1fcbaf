//! Joins unpacked IRC session directories into per-session hand arrays.
//!
//! Each `<game>/<session>/` directory must hold `hdb`, `hroster`, and the
//! `pdb.<user>` action logs. Output lands at `<output>/<game>_<session>.json`.

use clap::Parser;
use irchands::join::Session;
use irchands::save;
use rayon::prelude::*;
use std::path::Path;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Join IRC hand databases, rosters, and action logs")]
struct Args {
    /// Unpacked session directories, laid out as <game>/<session>/
    #[arg(required = true, value_name = "DIR")]
    sessions: Vec<PathBuf>,
    /// Directory for the per-session JSON arrays
    #[arg(long, short, value_name = "DIR", default_value = "hands")]
    output: PathBuf,
    /// Replace '|' with '_' in roster usernames
    #[arg(long)]
    sanitize: bool,
}

fn main() {
    irchands::log();
    let args = Args::parse();
    let written = args
        .sessions
        .par_iter()
        .filter_map(|dir| match extract(dir, &args) {
            Ok(n) => Some(n),
            Err(e) => {
                log::error!("{}: {:#}", dir.display(), e);
                None
            }
        })
        .sum::<usize>();
    log::info!("extracted {} hands from {} sessions", written, args.sessions.len());
}

fn extract(dir: &Path, args: &Args) -> anyhow::Result<usize> {
    let session = Session::locate(dir, args.sanitize)?;
    let label = session.label();
    let joined = session.join()?;
    joined.report(&label);
    for hand in joined.hands.values().take(1) {
        log::debug!("{}: first hand\n{}", label, hand);
    }
    match joined.hands.is_empty() {
        true => Ok(0),
        false => save::hands::write(
            &args.output.join(format!("{}.json", label)),
            joined.hands.values(),
        ),
    }
}
