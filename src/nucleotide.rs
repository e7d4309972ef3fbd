use std::fmt::{self, Write};

use crate::errors::SequenceError;

/// A DNA nucleotide.
///
/// Sorts in ATCG order, not alphabetical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, std::hash::Hash)]
#[repr(u8)]
pub enum Nucleotide {
    A = 0,
    T = 1,
    C = 2,
    G = 3,
}

const fn ascii_to_nucleotide_table() -> [Option<Nucleotide>; 256] {
    // PERF: 256 elements instead of 128 plus a high-byte check, so Rust
    // can index with any u8-cast-to-usize without a bounds check.
    let mut pack_table = [None; 256];

    macro_rules! insert {
        ($chr:literal, $variant:expr) => {
            pack_table[$chr.to_ascii_uppercase() as usize] = Some($variant);
            pack_table[$chr.to_ascii_lowercase() as usize] = Some($variant);
        };
    }

    insert!(b'a', Nucleotide::A);
    insert!(b't', Nucleotide::T);
    insert!(b'c', Nucleotide::C);
    insert!(b'g', Nucleotide::G);

    pack_table
}

const ASCII_TO_NUCLEOTIDE: [Option<Nucleotide>; 256] = ascii_to_nucleotide_table();

impl Nucleotide {
    pub const ALL: [Self; 4] = [Self::A, Self::T, Self::C, Self::G];

    /// The Watson-Crick complement: A<->T, C<->G.
    pub fn complement(self) -> Self {
        match self {
            Self::A => Self::T,
            Self::T => Self::A,
            Self::C => Self::G,
            Self::G => Self::C,
        }
    }

    pub fn to_ascii(self) -> u8 {
        match self {
            Self::A => b'A',
            Self::T => b'T',
            Self::C => b'C',
            Self::G => b'G',
        }
    }
}

impl TryFrom<u8> for Nucleotide {
    type Error = SequenceError;

    #[inline(always)]
    fn try_from(u: u8) -> Result<Self, Self::Error> {
        if u >= 128 {
            return Err(SequenceError::NonAsciiByte(u));
        }

        match ASCII_TO_NUCLEOTIDE[u as usize] {
            Some(n) => Ok(n),
            None => Err(SequenceError::BadNucleotide(u.into())),
        }
    }
}

impl From<Nucleotide> for u8 {
    fn from(n: Nucleotide) -> Self {
        n.to_ascii()
    }
}

impl From<Nucleotide> for char {
    fn from(n: Nucleotide) -> Self {
        n.to_ascii() as char
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char((*self).into())
    }
}
