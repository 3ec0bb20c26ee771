//! Span configuration table

use std::fmt;

use serde::{Deserialize, Serialize};

use super::table::{RowTable, TableRow};
use super::{PurlinSizeMode, SpanCount};
use crate::errors::{PurlinError, PurlinResult};
use crate::input::parse_int_or;

/// Entry of the purlin size catalogue, `Size 1` through `Size 10`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PurlinSize(u8);

impl PurlinSize {
    pub const COUNT: u8 = 10;

    pub fn new(number: u8) -> PurlinResult<Self> {
        if (1..=Self::COUNT).contains(&number) {
            Ok(PurlinSize(number))
        } else {
            Err(PurlinError::invalid_input(
                "purlin_size",
                number.to_string(),
                "not in the purlin size catalogue",
            ))
        }
    }

    /// The whole catalogue in display order
    pub fn catalogue() -> Vec<PurlinSize> {
        (1..=Self::COUNT).map(PurlinSize).collect()
    }

    pub fn number(&self) -> u8 {
        self.0
    }
}

impl Default for PurlinSize {
    fn default() -> Self {
        PurlinSize(1)
    }
}

impl fmt::Display for PurlinSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Size {}", self.0)
    }
}

impl TryFrom<String> for PurlinSize {
    type Error = PurlinError;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        label
            .strip_prefix("Size ")
            .and_then(|n| n.parse::<u8>().ok())
            .ok_or_else(|| PurlinError::invalid_input("purlin_size", label.as_str(), "expected 'Size <n>'"))
            .and_then(PurlinSize::new)
    }
}

impl From<PurlinSize> for String {
    fn from(size: PurlinSize) -> String {
        size.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanInfo {
    /// 1-based span number (display only)
    pub span: usize,
    pub length_mm: u32,
    pub purlin_size: PurlinSize,
}

impl TableRow for SpanInfo {
    fn synthesize(index: usize) -> Self {
        SpanInfo {
            span: index + 1,
            length_mm: 0,
            purlin_size: PurlinSize::default(),
        }
    }

    fn set_ordinal(&mut self, ordinal: usize) {
        self.span = ordinal;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SpanMessage {
    LengthChanged(usize, String),
    PurlinSizeSelected(usize, PurlinSize),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpanTable {
    rows: RowTable<SpanInfo>,
}

impl SpanTable {
    pub fn rows(&self, num_spans: SpanCount) -> Vec<SpanInfo> {
        self.rows.rows(num_spans.get())
    }

    pub fn row(&self, index: usize) -> SpanInfo {
        self.rows.row(index)
    }

    pub fn update(&mut self, message: SpanMessage, num_spans: SpanCount, mode: PurlinSizeMode) -> PurlinResult<()> {
        match message {
            SpanMessage::LengthChanged(index, text) => {
                let length = parse_int_or(&text, 0);
                if length <= 0 {
                    return Err(PurlinError::invalid_input("length_mm", text, "span length must be greater than 0"));
                }
                let length = u32::try_from(length)
                    .map_err(|_| PurlinError::invalid_input("length_mm", length.to_string(), "span length is too large"))?;
                self.rows.edit(index, num_spans.get(), |row| {
                    row.length_mm = length;
                    Ok(())
                })
            }
            SpanMessage::PurlinSizeSelected(index, size) => {
                if !mode.sizes_editable() {
                    return Err(PurlinError::field_disabled("purlin_size", "sizes are found by the design"));
                }
                self.rows.edit(index, num_spans.get(), |row| {
                    row.purlin_size = size;
                    Ok(())
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(n: u8) -> SpanCount {
        SpanCount::new(n).unwrap()
    }

    #[test]
    fn test_catalogue() {
        let labels: Vec<String> = PurlinSize::catalogue().iter().map(|s| s.to_string()).collect();
        assert_eq!(labels.len(), 10);
        assert_eq!(labels[0], "Size 1");
        assert_eq!(labels[9], "Size 10");
        assert_eq!(serde_json::to_string(&PurlinSize::default()).unwrap(), "\"Size 1\"");
        assert!(serde_json::from_str::<PurlinSize>("\"Size 11\"").is_err());
    }

    #[test]
    fn test_rows_follow_span_count() {
        let table = SpanTable::default();
        let rows = table.rows(spans(3));
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].span, 3);
        assert_eq!(rows[2].length_mm, 0);
        assert_eq!(rows[2].purlin_size, PurlinSize::default());
    }

    #[test]
    fn test_length_must_be_positive() {
        let mut table = SpanTable::default();
        let mode = PurlinSizeMode::CheckPurlinSize;
        table.update(SpanMessage::LengthChanged(0, "6000".into()), spans(2), mode).unwrap();
        assert_eq!(table.row(0).length_mm, 6000);

        assert!(table.update(SpanMessage::LengthChanged(0, "0".into()), spans(2), mode).is_err());
        assert!(table.update(SpanMessage::LengthChanged(0, "-10".into()), spans(2), mode).is_err());
        assert!(table.update(SpanMessage::LengthChanged(0, "long".into()), spans(2), mode).is_err());
        assert_eq!(table.row(0).length_mm, 6000);

        table.update(SpanMessage::LengthChanged(1, "4500.9".into()), spans(2), mode).unwrap();
        assert_eq!(table.row(1).length_mm, 4500);
    }

    #[test]
    fn test_purlin_size_locked_in_find_mode() {
        let mut table = SpanTable::default();
        let size = PurlinSize::new(4).unwrap();
        let err = table
            .update(SpanMessage::PurlinSizeSelected(0, size), spans(1), PurlinSizeMode::FindPurlinSize)
            .unwrap_err();
        assert_eq!(err.error_code(), "FIELD_DISABLED");
        assert_eq!(table.row(0).purlin_size, PurlinSize::default());

        table
            .update(SpanMessage::PurlinSizeSelected(0, size), spans(1), PurlinSizeMode::CheckPurlinSize)
            .unwrap();
        assert_eq!(table.row(0).purlin_size, size);
    }

    #[test]
    fn test_row_outside_count_rejected() {
        let mut table = SpanTable::default();
        assert!(table
            .update(SpanMessage::LengthChanged(3, "100".into()), spans(3), PurlinSizeMode::CheckPurlinSize)
            .is_err());
    }
}
