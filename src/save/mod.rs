pub mod batches;
pub use batches::*;

pub mod hands;
