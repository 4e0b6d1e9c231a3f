mod capacity;
mod header;

pub use capacity::*;
pub use header::*;
