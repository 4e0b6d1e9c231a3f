//! Builder style entry points, one module per use case.

pub mod analyze;
pub mod hide;
pub mod inspect;
pub mod unveil;
mod shared;

pub use shared::*;
