mod analyze;
mod hide;
mod inspect;
mod unveil;

pub use analyze::analyze;
pub use hide::hide;
pub use inspect::inspect;
pub use unveil::unveil;
