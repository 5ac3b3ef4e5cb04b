use thiserror::Error;

/// Errors produced by the codec and its adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Dimension mismatch: expected {expected:?}, found {found:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("Symbol {value:#x} does not fit in {bits} bits")]
    SymbolOutOfRange { value: u64, bits: usize },

    #[error("Uncorrectable error pattern in block {block}")]
    Uncorrectable { block: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
