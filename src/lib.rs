mod errors;
mod nucleotide;

mod sequence;
pub use sequence::*;

mod to_array;
pub use to_array::*;

mod snippet;
pub use snippet::*;

#[cfg(feature = "quickcheck")]
mod quickcheck;

#[cfg(feature = "serde")]
mod serde_utils;
