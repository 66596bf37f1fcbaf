//! IRC poker hand-history extraction.
//!
//! Each archived session ships three companion flat files: a hand database
//! (`hdb`), a player roster (`hroster`), and one action log per player
//! (`pdb/pdb.<user>`). This crate joins them into one [`records::HandRecord`]
//! per hand, then re-expands every hand into a sequence of
//! (context, history, next action) training examples.
//!
//! ## Pipeline
//!
//! - [`join`]: parse and merge the three formats, tracking invalid hands
//! - [`expand`]: rebuild the turn order, observe context, emit examples
//! - [`save`]: write hand arrays and batched example files to disk
pub mod cards;
pub mod expand;
pub mod join;
pub mod records;
pub mod save;

/// Stack sizes, pot sizes, and winnings as logged by the IRC dealer.
pub type Chips = i64;
/// Seat index around the table, starting from 1.
pub type Position = usize;

/// Hands per batch folder when writing training examples.
pub const BATCH_SIZE: usize = 10_000;

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
