pub mod context;
pub use context::*;

pub mod event;
pub use event::*;

pub mod example;
pub use example::*;

pub mod role;
pub use role::*;

pub mod sequence;
pub use sequence::*;
