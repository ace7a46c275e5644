//! Error types.
//!
//! Only two things can go wrong: a packed table is malformed, or reference
//! data is unusable (unparsable, duplicated, or missing an entry generation
//! needs). Unknown identifiers are expressed through
//! sentinel values and an unexplained entity is an empty result; neither is
//! an error.

use thiserror::Error;

/// A packed binary table is corrupt. Fatal for the whole table load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A read of `len` bytes at `offset` ran past the end of the buffer.
    #[error("read of {len} bytes at offset {offset:#x} exceeds buffer of {size} bytes")]
    OutOfRange { offset: usize, len: usize, size: usize },
    /// A sentinel-terminated run never hit its terminator.
    #[error("run starting at offset {offset:#x} has no terminator")]
    MissingTerminator { offset: usize },
    /// A run of 16-bit values has an odd byte length.
    #[error("entry {index} has odd byte length {len}")]
    OddLength { index: usize, len: usize },
    /// A container carries the wrong identifier.
    #[error("expected container magic {expected:?}, found {found:?}")]
    BadMagic { expected: [u8; 2], found: [u8; 2] },
    /// An offset table entry points before the data it indexes.
    #[error("entry {index} points before the table base")]
    BadOffset { index: usize },
}

/// Reference data could not be loaded.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to parse reference data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed table: {0}")]
    Table(#[from] TableError),
    #[error("duplicate definition for {0}")]
    Duplicate(String),
    #[error("no personal data for species {species} form {form}")]
    MissingPersonal { species: u16, form: u8 },
}

pub type TableResult<T> = Result<T, TableError>;
