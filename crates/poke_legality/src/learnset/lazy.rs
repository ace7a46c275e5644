//! Decode-once table cache.

use std::sync::OnceLock;

use tracing::warn;

use crate::error::TableResult;

use super::TableDecoder;

/// A packed buffer plus its decoder; decoded on first access and kept for
/// the life of the value. Usable as a `static` when the buffer is.
pub struct LazyTable<'a, D: TableDecoder> {
    data: &'a [u8],
    decoder: D,
    table: OnceLock<TableResult<Vec<D::Record>>>,
}

impl<'a, D: TableDecoder> LazyTable<'a, D> {
    pub const fn new(data: &'a [u8], decoder: D) -> Self {
        Self {
            data,
            decoder,
            table: OnceLock::new(),
        }
    }

    /// The decoded table. A corrupt buffer fails every call with the same
    /// error; no partial table is ever exposed.
    pub fn get(&self) -> TableResult<&[D::Record]> {
        let decoded = self.table.get_or_init(|| {
            let result = self.decoder.decode(self.data);
            if let Err(err) = &result {
                warn!(target: "poke_legality::learnset", error = %err, "table decode failed");
            }
            result
        });
        match decoded {
            Ok(records) => Ok(records),
            Err(err) => Err(err.clone()),
        }
    }

    /// Record for `species`, if the table decoded and holds that index.
    pub fn entry(&self, species: u16) -> Option<&D::Record> {
        self.get().ok()?.get(species as usize)
    }

    pub fn is_decoded(&self) -> bool {
        self.table.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TableError;
    use crate::learnset::Gen6EggMoves;

    static TABLE: LazyTable<'static, Gen6EggMoves> =
        LazyTable::new(&[0x01, 0x00, 0x2A, 0x00], Gen6EggMoves);

    #[test]
    fn test_decodes_once() {
        let first = TABLE.get().unwrap();
        let second = TABLE.get().unwrap();
        assert!(std::ptr::eq(first, second));
        assert!(TABLE.is_decoded());
        assert_eq!(TABLE.entry(1).unwrap().moves(), &[42]);
        assert!(TABLE.entry(2).is_none());
    }

    #[test]
    fn test_corrupt_table_keeps_failing() {
        let table = LazyTable::new(&[0x05, 0x00, 0x01], Gen6EggMoves);
        let err = table.get().unwrap_err();
        assert!(matches!(err, TableError::OutOfRange { .. }));
        assert_eq!(table.get().unwrap_err(), err);
        assert!(table.entry(0).is_none());
    }
}
