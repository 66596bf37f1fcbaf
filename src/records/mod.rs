pub mod bets;
pub use bets::*;

pub mod code;
pub use code::*;

pub mod hand;
pub use hand::*;

pub mod id;
pub use id::*;

pub mod player;
pub use player::*;

pub mod pot;
pub use pot::*;
