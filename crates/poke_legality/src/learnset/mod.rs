//! Packed per-species learnset tables.
//!
//! Each era ships its egg move data in its own binary layout. All layouts
//! decode into a species-indexed array where index 0 is the shared empty
//! record.

pub mod bin_linker;
pub mod egg_moves;
pub mod lazy;
pub mod reader;

pub use bin_linker::BinLinker;
pub use egg_moves::{
    form_egg_moves, EggMoves, EggMoves7, Gen2EggMoves, Gen6EggMoves, Gen7EggMoves, Gen9EggMoves,
};
pub use lazy::LazyTable;

use crate::error::TableResult;

/// One packed table layout.
pub trait TableDecoder {
    type Record;

    /// Decode a whole buffer. Any out-of-bounds read fails the entire
    /// table.
    fn decode(&self, data: &[u8]) -> TableResult<Vec<Self::Record>>;
}
