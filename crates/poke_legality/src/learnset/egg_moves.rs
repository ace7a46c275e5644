//! Egg move tables.
//!
//! Four historically distinct packings, one decoder each. Every decoder
//! produces a species-indexed array where index 0 is the shared empty
//! record; every zero-length entry reuses that same instance.

use std::sync::Arc;

use tracing::debug;

use crate::error::{TableError, TableResult};

use super::bin_linker::BinLinker;
use super::reader::{read_u16_le, read_u16_run, slice_at, Cursor};
use super::TableDecoder;

/// Terminator of a generation 2 move run.
const GEN2_TERMINATOR: u8 = 0xFF;

/// Move IDs an entry can be obtained with as egg moves.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct EggMoves {
    moves: Box<[u16]>,
}

impl EggMoves {
    pub fn new(moves: impl Into<Box<[u16]>>) -> Self {
        Self { moves: moves.into() }
    }

    pub fn moves(&self) -> &[u16] {
        &self.moves
    }

    pub fn has_egg_move(&self, move_id: u16) -> bool {
        self.moves.contains(&move_id)
    }
}

/// Generation 7-8 egg moves. Carries the index of the species' first
/// alternate-form entry within the same table.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct EggMoves7 {
    moves: Box<[u16]>,
    form_table_index: u16,
}

impl EggMoves7 {
    pub fn new(moves: impl Into<Box<[u16]>>, form_table_index: u16) -> Self {
        Self {
            moves: moves.into(),
            form_table_index,
        }
    }

    pub fn moves(&self) -> &[u16] {
        &self.moves
    }

    pub fn form_table_index(&self) -> u16 {
        self.form_table_index
    }

    pub fn has_egg_move(&self, move_id: u16) -> bool {
        self.moves.contains(&move_id)
    }
}

// ============================================================================
// Variant A: Generation 2 pointer table
// ============================================================================

/// Generation 2 layout: `species_count` little-endian pointers (cartridge
/// addresses), followed by 0xFF-terminated runs of single-byte move IDs. The
/// first pointer addresses the byte just past the pointer table, which fixes
/// the base address.
#[derive(Clone, Copy, Debug)]
pub struct Gen2EggMoves {
    pub species_count: u16,
}

impl TableDecoder for Gen2EggMoves {
    type Record = Arc<EggMoves>;

    fn decode(&self, data: &[u8]) -> TableResult<Vec<Self::Record>> {
        let count = self.species_count as usize;
        let empty = Arc::new(EggMoves::default());
        let mut entries = Vec::with_capacity(count + 1);
        entries.push(Arc::clone(&empty));

        let base = read_u16_le(data, 0)? as i64 - (count * 2) as i64;
        for i in 1..=count {
            let pointer = read_u16_le(data, (i - 1) * 2)? as i64;
            let start = usize::try_from(pointer - base).map_err(|_| TableError::BadOffset { index: i })?;
            let run = slice_at(data, start, data.len().saturating_sub(start))?;
            let length = run
                .iter()
                .position(|b| *b == GEN2_TERMINATOR)
                .ok_or(TableError::MissingTerminator { offset: start })?;

            if length == 0 {
                entries.push(Arc::clone(&empty));
                continue;
            }
            let moves: Box<[u16]> = run[..length].iter().map(|m| *m as u16).collect();
            entries.push(Arc::new(EggMoves::new(moves)));
        }

        debug!(target: "poke_legality::learnset", entries = entries.len(), "decoded gen2 egg moves");
        Ok(entries)
    }
}

// ============================================================================
// Variant B: Generation 3-6 count-prefixed entries
// ============================================================================

/// Generation 3-6 layout: each entry is a u16 count followed by that many
/// u16 move IDs.
#[derive(Clone, Copy, Debug, Default)]
pub struct Gen6EggMoves;

impl Gen6EggMoves {
    fn parse_entry(cursor: &mut Cursor<'_>, empty: &Arc<EggMoves>) -> TableResult<Arc<EggMoves>> {
        let count = cursor.read_u16()? as usize;
        if count == 0 {
            return Ok(Arc::clone(empty));
        }
        Ok(Arc::new(EggMoves::new(cursor.read_u16_run(count)?)))
    }

    /// Decode entries already split out of a container. Entry `i` is
    /// species `i`; entry 0 is replaced by the shared empty record.
    pub fn decode_entries<'a>(
        &self,
        entries: impl IntoIterator<Item = &'a [u8]>,
    ) -> TableResult<Vec<Arc<EggMoves>>> {
        let empty = Arc::new(EggMoves::default());
        let mut result = vec![Arc::clone(&empty)];
        for entry in entries.into_iter().skip(1) {
            result.push(Self::parse_entry(&mut Cursor::new(entry), &empty)?);
        }
        Ok(result)
    }
}

impl TableDecoder for Gen6EggMoves {
    type Record = Arc<EggMoves>;

    /// Decode a back-to-back stream of entries.
    fn decode(&self, data: &[u8]) -> TableResult<Vec<Self::Record>> {
        let empty = Arc::new(EggMoves::default());
        let mut entries = vec![Arc::clone(&empty)];
        let mut cursor = Cursor::new(data);
        while !cursor.is_empty() {
            entries.push(Self::parse_entry(&mut cursor, &empty)?);
        }

        debug!(target: "poke_legality::learnset", entries = entries.len(), "decoded gen6 egg moves");
        Ok(entries)
    }
}

// ============================================================================
// Variant C: Generation 7-8 form-indexed entries
// ============================================================================

/// Generation 7-8 layout: each entry is a u16 form-table index, a u16 count,
/// then that many u16 move IDs.
#[derive(Clone, Copy, Debug, Default)]
pub struct Gen7EggMoves;

impl Gen7EggMoves {
    fn parse_entry(cursor: &mut Cursor<'_>, empty: &Arc<EggMoves7>) -> TableResult<Arc<EggMoves7>> {
        let form_index = cursor.read_u16()?;
        let count = cursor.read_u16()? as usize;
        if count == 0 {
            // Forms without data of their own still point at their siblings.
            if form_index != 0 {
                return Ok(Arc::new(EggMoves7::new(Vec::new(), form_index)));
            }
            return Ok(Arc::clone(empty));
        }
        Ok(Arc::new(EggMoves7::new(cursor.read_u16_run(count)?, form_index)))
    }

    /// Decode entries already split out of a container. Entry `i` is table
    /// index `i`; entry 0 is replaced by the shared empty record.
    pub fn decode_entries<'a>(
        &self,
        entries: impl IntoIterator<Item = &'a [u8]>,
    ) -> TableResult<Vec<Arc<EggMoves7>>> {
        let empty = Arc::new(EggMoves7::default());
        let mut result = vec![Arc::clone(&empty)];
        for entry in entries.into_iter().skip(1) {
            result.push(Self::parse_entry(&mut Cursor::new(entry), &empty)?);
        }
        Ok(result)
    }
}

impl TableDecoder for Gen7EggMoves {
    type Record = Arc<EggMoves7>;

    fn decode(&self, data: &[u8]) -> TableResult<Vec<Self::Record>> {
        let empty = Arc::new(EggMoves7::default());
        let mut entries = vec![Arc::clone(&empty)];
        let mut cursor = Cursor::new(data);
        while !cursor.is_empty() {
            entries.push(Self::parse_entry(&mut cursor, &empty)?);
        }

        debug!(target: "poke_legality::learnset", entries = entries.len(), "decoded gen7 egg moves");
        Ok(entries)
    }
}

/// Egg moves for a species' form, following the form-table indirection.
///
/// Form 0, or a species without alternate-form entries, reads the species'
/// own entry. Otherwise the form's entry lives at
/// `form_table_index + form - 1`, and it must point back at the same
/// `form_table_index`; an index past the table or an entry belonging to a
/// different species yields no moves.
pub fn form_egg_moves(table: &[Arc<EggMoves7>], species: u16, form: u8) -> &[u16] {
    let Some(entry) = table.get(species as usize) else {
        return &[];
    };
    let base_index = entry.form_table_index;
    if form == 0 || species >= base_index {
        return entry.moves();
    }

    let index = base_index as usize + form as usize - 1;
    match table.get(index) {
        Some(form_entry) if form_entry.form_table_index == base_index => form_entry.moves(),
        _ => &[],
    }
}

// ============================================================================
// Variant D: Generation 9 raw runs
// ============================================================================

/// Generation 9 layout: a container whose entries are bare runs of u16 move
/// IDs. Entry `i` is species `i`, and entry 0 is always the shared empty
/// record.
#[derive(Clone, Copy, Debug, Default)]
pub struct Gen9EggMoves {
    /// Container identifier to require, if any.
    pub magic: Option<[u8; 2]>,
}

impl Gen9EggMoves {
    pub fn decode_entries<'a>(
        &self,
        entries: impl IntoIterator<Item = TableResult<&'a [u8]>>,
    ) -> TableResult<Vec<Arc<[u16]>>> {
        let empty: Arc<[u16]> = Arc::from(Vec::new());
        let mut result = Vec::new();
        for (index, entry) in entries.into_iter().enumerate() {
            let entry = entry?;
            if index == 0 {
                result.push(Arc::clone(&empty));
                continue;
            }
            if entry.len() % 2 != 0 {
                return Err(TableError::OddLength {
                    index,
                    len: entry.len(),
                });
            }
            if entry.is_empty() {
                result.push(Arc::clone(&empty));
                continue;
            }
            result.push(Arc::from(read_u16_run(entry, 0, entry.len() / 2)?));
        }
        if result.is_empty() {
            result.push(empty);
        }
        Ok(result)
    }
}

impl TableDecoder for Gen9EggMoves {
    type Record = Arc<[u16]>;

    fn decode(&self, data: &[u8]) -> TableResult<Vec<Self::Record>> {
        let linker = match self.magic {
            Some(magic) => BinLinker::with_magic(data, magic)?,
            None => BinLinker::new(data)?,
        };
        let entries = self.decode_entries(linker.entries())?;

        debug!(target: "poke_legality::learnset", entries = entries.len(), "decoded gen9 egg moves");
        Ok(entries)
    }
}
