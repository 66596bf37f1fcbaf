pub mod failure;
pub use failure::*;

pub mod hdb;

pub mod joiner;
pub use joiner::*;

pub mod layout;
pub use layout::*;

pub mod line;

pub mod pdb;

pub mod roster;

pub mod session;
pub use session::*;
