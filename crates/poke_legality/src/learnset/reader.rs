//! Bounds-checked little-endian reads over borrowed buffers.
//!
//! Every read names the offset it failed at, so a truncated asset is
//! reported at the first offending access.

use crate::error::{TableError, TableResult};

/// Borrow `len` bytes at `offset`.
pub fn slice_at(data: &[u8], offset: usize, len: usize) -> TableResult<&[u8]> {
    offset
        .checked_add(len)
        .and_then(|end| data.get(offset..end))
        .ok_or(TableError::OutOfRange {
            offset,
            len,
            size: data.len(),
        })
}

pub fn read_u16_le(data: &[u8], offset: usize) -> TableResult<u16> {
    let bytes = slice_at(data, offset, 2)?;
    Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
}

pub fn read_u32_le(data: &[u8], offset: usize) -> TableResult<u32> {
    let bytes = slice_at(data, offset, 4)?;
    Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

/// Read `count` consecutive u16 values starting at `offset`.
pub fn read_u16_run(data: &[u8], offset: usize, count: usize) -> TableResult<Box<[u16]>> {
    let bytes = slice_at(data, offset, count * 2)?;
    Ok(bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect())
}

/// Forward-only cursor for self-delimiting streams.
#[derive(Debug)]
pub struct Cursor<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_empty(&self) -> bool {
        self.position >= self.data.len()
    }

    pub fn read_u16(&mut self) -> TableResult<u16> {
        let value = read_u16_le(self.data, self.position)?;
        self.position += 2;
        Ok(value)
    }

    pub fn read_u16_run(&mut self, count: usize) -> TableResult<Box<[u16]>> {
        let values = read_u16_run(self.data, self.position, count)?;
        self.position += count * 2;
        Ok(values)
    }
}
