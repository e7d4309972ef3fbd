use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum SequenceError {
    #[error("no sequence provided")]
    EmptyInput,
    #[error("non-ascii byte: {:x?}", .0)]
    NonAsciiByte(u8),
    #[error("bad nucleotide: {:?}", .0)]
    BadNucleotide(char),
}
