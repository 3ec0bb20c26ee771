//! Sparse per-span tables
//!
//! A table shows `num_spans` rows no matter how many it has stored. Rows that
//! were never edited are synthesised from defaults when read, and are only
//! written into the table on their first edit. The row index is the position;
//! the ordinal stored in a row is recomputed from the index on every write.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{PurlinError, PurlinResult};

/// A row type that knows its own defaults
pub trait TableRow: Clone {
    /// Default row shown at `index` before it is edited
    fn synthesize(index: usize) -> Self;

    /// Store the 1-based display ordinal
    fn set_ordinal(&mut self, ordinal: usize);
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowTable<T> {
    rows: BTreeMap<usize, T>,
}

impl<T> Default for RowTable<T> {
    fn default() -> Self {
        RowTable { rows: BTreeMap::new() }
    }
}

impl<T: TableRow> RowTable<T> {
    /// Row at `index`, stored or synthesised
    pub fn row(&self, index: usize) -> T {
        let mut row = self
            .rows
            .get(&index)
            .cloned()
            .unwrap_or_else(|| T::synthesize(index));
        row.set_ordinal(index + 1);
        row
    }

    /// The `count` rows a table of that size displays
    pub fn rows(&self, count: usize) -> Vec<T> {
        (0..count).map(|i| self.row(i)).collect()
    }

    /// Number of rows that have been materialised by an edit
    pub fn stored_len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_stored(&self, index: usize) -> bool {
        self.rows.contains_key(&index)
    }

    /// Apply `edit` to the row at `index` of a table showing `count` rows.
    ///
    /// The edit works on a copy; nothing is stored unless it succeeds.
    pub fn edit<F>(&mut self, index: usize, count: usize, edit: F) -> PurlinResult<()>
    where
        F: FnOnce(&mut T) -> PurlinResult<()>,
    {
        if index >= count {
            return Err(PurlinError::invalid_input(
                "row",
                (index + 1).to_string(),
                format!("table shows {} rows", count),
            ));
        }
        let mut row = self.row(index);
        edit(&mut row)?;
        row.set_ordinal(index + 1);
        self.rows.insert(index, row);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        ordinal: usize,
        value: i32,
    }

    impl TableRow for Row {
        fn synthesize(index: usize) -> Self {
            Row { ordinal: index + 1, value: 0 }
        }

        fn set_ordinal(&mut self, ordinal: usize) {
            self.ordinal = ordinal;
        }
    }

    #[test]
    fn test_rows_are_synthesised() {
        let table: RowTable<Row> = RowTable::default();
        let rows = table.rows(3);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], Row { ordinal: 3, value: 0 });
        assert_eq!(table.stored_len(), 0);
    }

    #[test]
    fn test_edit_materialises_single_row() {
        let mut table: RowTable<Row> = RowTable::default();
        table
            .edit(4, 5, |row| {
                row.value = 7;
                row.ordinal = 99;
                Ok(())
            })
            .unwrap();
        assert_eq!(table.stored_len(), 1);
        assert!(table.is_stored(4));
        assert_eq!(table.row(4), Row { ordinal: 5, value: 7 });
    }

    #[test]
    fn test_failed_edit_stores_nothing() {
        let mut table: RowTable<Row> = RowTable::default();
        let result = table.edit(0, 2, |row| {
            row.value = 1;
            Err(PurlinError::field_disabled("value", "test"))
        });
        assert!(result.is_err());
        assert_eq!(table.stored_len(), 0);
        assert!(table.edit(2, 2, |_| Ok(())).is_err());
    }
}
