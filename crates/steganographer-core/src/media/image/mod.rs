pub mod cursor;
pub mod lsb_codec;
pub mod permutation;

pub use cursor::{BitAddressCursor, BitLocation};
pub use lsb_codec::LsbCodec;
pub use permutation::{password_seed, Lcg48, Permutation};
