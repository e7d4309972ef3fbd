use core::fmt;
use std::fmt::Write;
use std::str::FromStr;

use smallvec::SmallVec;

pub use crate::errors::SequenceError;
pub use crate::nucleotide::Nucleotide;

/// One line of validated DNA, normalized to uppercase.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, std::hash::Hash)]
pub struct DnaLine {
    bases: Vec<Nucleotide>,
}

impl DnaLine {
    /// Construct a new DnaLine from a Vec of nucleotides
    pub fn new(bases: Vec<Nucleotide>) -> Self {
        Self { bases }
    }

    pub fn as_slice(&self) -> &[Nucleotide] {
        &self.bases
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Nucleotide> + '_ {
        self.bases.iter().copied()
    }

    /// Takes the reverse complement of this line.
    pub fn reverse_complement(&self) -> Self {
        Self {
            bases: self.bases.iter().rev().map(|n| n.complement()).collect(),
        }
    }
}

impl fmt::Display for DnaLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &n in &self.bases {
            let u: u8 = n.into();
            f.write_char(u.into())?;
        }
        Ok(())
    }
}

impl TryFrom<&[u8]> for DnaLine {
    type Error = SequenceError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let mut bases = Vec::with_capacity(value.len());
        for &b in value {
            bases.push(Nucleotide::try_from(b)?);
        }
        Ok(Self::new(bases))
    }
}

impl FromStr for DnaLine {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.as_bytes())
    }
}

/// A whole newline-separated input, validated all-or-nothing: either
/// every character of every line is a valid base, or parsing fails and
/// nothing is transformed.
///
/// Lines are kept separate so that per-line operations never cross a
/// line boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceText {
    lines: SmallVec<[DnaLine; 1]>,
}

impl SequenceText {
    pub fn from_lines(lines: impl IntoIterator<Item = DnaLine>) -> Self {
        Self {
            lines: lines.into_iter().collect(),
        }
    }

    pub fn lines(&self) -> &[DnaLine] {
        &self.lines
    }

    /// Reverse-complements every line independently, preserving line
    /// order.
    pub fn reverse_complement(&self) -> Self {
        Self {
            lines: self
                .lines
                .iter()
                .map(DnaLine::reverse_complement)
                .collect(),
        }
    }
}

impl fmt::Display for SequenceText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl FromStr for SequenceText {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(SequenceError::EmptyInput);
        }

        let lines = s
            .split('\n')
            .map(|line| DnaLine::try_from(line.as_bytes()))
            .collect::<Result<SmallVec<[DnaLine; 1]>, _>>()?;
        Ok(Self { lines })
    }
}

/// Reverse-complements a newline-separated DNA text, one sequence per
/// line.
///
/// The complete input is validated before any line is transformed; one
/// bad character anywhere rejects the whole request and no output is
/// produced.
pub fn reverse_complement(text: &str) -> Result<String, SequenceError> {
    let parsed: SequenceText = text.parse()?;
    Ok(parsed.reverse_complement().to_string())
}
