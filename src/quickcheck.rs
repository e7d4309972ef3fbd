use quickcheck::{Arbitrary, Gen};

use crate::{DnaLine, Nucleotide, SequenceText};

impl Arbitrary for Nucleotide {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&Nucleotide::ALL)
            .expect("Gen should be able to choose a Nucleotide")
    }
}

impl Arbitrary for DnaLine {
    fn arbitrary(g: &mut Gen) -> Self {
        Self::new(Arbitrary::arbitrary(g))
    }
}

impl Arbitrary for SequenceText {
    fn arbitrary(g: &mut Gen) -> Self {
        let lines: Vec<DnaLine> = Arbitrary::arbitrary(g);
        Self::from_lines(lines)
    }
}
