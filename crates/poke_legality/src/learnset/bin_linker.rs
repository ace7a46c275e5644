//! Reader for the "mini" packed container that newer data assets ship in.
//!
//! Layout (all little-endian):
//! - `[0..2]` two ASCII identifier bytes
//! - `[2..4]` entry count `n`
//! - `[4..]` `n + 1` u32 absolute offsets; entry `i` spans
//!   `offset[i]..offset[i + 1]`

use crate::error::{TableError, TableResult};

use super::reader::{read_u16_le, read_u32_le, slice_at};

const HEADER_SIZE: usize = 4;

#[derive(Clone, Copy, Debug)]
pub struct BinLinker<'a> {
    data: &'a [u8],
    magic: [u8; 2],
    count: usize,
}

impl<'a> BinLinker<'a> {
    /// Parse the header. The offset table must fit in the buffer.
    pub fn new(data: &'a [u8]) -> TableResult<Self> {
        let header = slice_at(data, 0, 2)?;
        let magic = [header[0], header[1]];
        let count = read_u16_le(data, 2)? as usize;
        slice_at(data, HEADER_SIZE, (count + 1) * 4)?;
        Ok(Self { data, magic, count })
    }

    /// Parse the header and require a specific identifier.
    pub fn with_magic(data: &'a [u8], expected: [u8; 2]) -> TableResult<Self> {
        let linker = Self::new(data)?;
        if linker.magic != expected {
            return Err(TableError::BadMagic {
                expected,
                found: linker.magic,
            });
        }
        Ok(linker)
    }

    pub fn magic(&self) -> [u8; 2] {
        self.magic
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Borrow entry `index`.
    pub fn get(&self, index: usize) -> TableResult<&'a [u8]> {
        let start = read_u32_le(self.data, HEADER_SIZE + index * 4)? as usize;
        let end = read_u32_le(self.data, HEADER_SIZE + (index + 1) * 4)? as usize;
        if end < start {
            return Err(TableError::BadOffset { index });
        }
        slice_at(self.data, start, end - start)
    }

    /// All entries in order; stops at the first malformed one.
    pub fn entries(&self) -> impl Iterator<Item = TableResult<&'a [u8]>> + '_ {
        (0..self.count).map(move |i| self.get(i))
    }

    /// Pack entries into a container. Used to build assets and fixtures.
    pub fn pack(magic: [u8; 2], entries: &[&[u8]]) -> Vec<u8> {
        let table_end = HEADER_SIZE + (entries.len() + 1) * 4;
        let mut out = Vec::with_capacity(table_end + entries.iter().map(|e| e.len()).sum::<usize>());
        out.extend_from_slice(&magic);
        out.extend_from_slice(&(entries.len() as u16).to_le_bytes());

        let mut offset = table_end as u32;
        out.extend_from_slice(&offset.to_le_bytes());
        for entry in entries {
            offset += entry.len() as u32;
            out.extend_from_slice(&offset.to_le_bytes());
        }
        for entry in entries {
            out.extend_from_slice(entry);
        }
        out
    }
}
