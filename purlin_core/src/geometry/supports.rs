//! Support configuration table
//!
//! Row 0 is the fixed end support and never laps. Other supports may lap, in
//! which case the lap length either side is given as a percentage of the
//! adjacent span.

use serde::{Deserialize, Serialize};

use super::table::{RowTable, TableRow};
use super::SpanCount;
use crate::errors::{PurlinError, PurlinResult};
use crate::input::parse_float_or;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportInfo {
    /// 1-based support number (display only)
    pub support: usize,
    pub lap: bool,
    pub left_percentage: f64,
    pub right_percentage: f64,
}

impl TableRow for SupportInfo {
    fn synthesize(index: usize) -> Self {
        SupportInfo {
            support: index + 1,
            lap: false,
            left_percentage: 0.0,
            right_percentage: 0.0,
        }
    }

    fn set_ordinal(&mut self, ordinal: usize) {
        self.support = ordinal;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SupportMessage {
    LapToggled(usize, bool),
    LeftPercentageChanged(usize, String),
    RightPercentageChanged(usize, String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupportTable {
    rows: RowTable<SupportInfo>,
}

impl SupportTable {
    pub fn rows(&self, num_spans: SpanCount) -> Vec<SupportInfo> {
        self.rows.rows(num_spans.get())
    }

    pub fn row(&self, index: usize) -> SupportInfo {
        self.rows.row(index)
    }

    /// The fixed support (row 0) cannot lap
    pub fn lap_enabled(index: usize) -> bool {
        index != 0
    }

    pub fn percentages_enabled(&self, index: usize) -> bool {
        Self::lap_enabled(index) && self.row(index).lap
    }

    pub fn update(&mut self, message: SupportMessage, num_spans: SpanCount) -> PurlinResult<()> {
        let count = num_spans.get();
        match message {
            SupportMessage::LapToggled(index, lap) => {
                if !Self::lap_enabled(index) {
                    return Err(PurlinError::field_disabled("lap", "the first support is fixed"));
                }
                self.rows.edit(index, count, |row| {
                    row.lap = lap;
                    if !lap {
                        row.left_percentage = 0.0;
                        row.right_percentage = 0.0;
                    }
                    Ok(())
                })
            }
            SupportMessage::LeftPercentageChanged(index, text) => {
                let value = self.checked_percentage(index, "left_percentage", &text)?;
                self.rows.edit(index, count, |row| {
                    row.left_percentage = value;
                    Ok(())
                })
            }
            SupportMessage::RightPercentageChanged(index, text) => {
                let value = self.checked_percentage(index, "right_percentage", &text)?;
                self.rows.edit(index, count, |row| {
                    row.right_percentage = value;
                    Ok(())
                })
            }
        }
    }

    fn checked_percentage(&self, index: usize, field: &str, text: &str) -> PurlinResult<f64> {
        if !self.percentages_enabled(index) {
            return Err(PurlinError::field_disabled(field, "lap is off for this support"));
        }
        let value = parse_float_or(text, 0.0);
        if !(0.0..=100.0).contains(&value) {
            return Err(PurlinError::invalid_input(field, text, "Percentage must be between 0 and 100"));
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(n: u8) -> SpanCount {
        SpanCount::new(n).unwrap()
    }

    #[test]
    fn test_first_support_never_laps() {
        for n in 1..=SpanCount::MAX {
            let mut table = SupportTable::default();
            assert!(!SupportTable::lap_enabled(0));
            assert!(table.update(SupportMessage::LapToggled(0, true), spans(n)).is_err());
            assert!(!table.row(0).lap);
        }
    }

    #[test]
    fn test_percentage_out_of_range_rejected() {
        let mut table = SupportTable::default();
        table.update(SupportMessage::LapToggled(1, true), spans(3)).unwrap();
        table
            .update(SupportMessage::LeftPercentageChanged(1, "15".into()), spans(3))
            .unwrap();

        let err = table
            .update(SupportMessage::LeftPercentageChanged(1, "150".into()), spans(3))
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(table
            .update(SupportMessage::RightPercentageChanged(1, "-1".into()), spans(3))
            .is_err());
        assert_eq!(table.row(1).left_percentage, 15.0);
        assert_eq!(table.row(1).right_percentage, 0.0);
    }

    #[test]
    fn test_lap_off_zeroes_percentages() {
        let mut table = SupportTable::default();
        table.update(SupportMessage::LapToggled(2, true), spans(3)).unwrap();
        table
            .update(SupportMessage::LeftPercentageChanged(2, "10".into()), spans(3))
            .unwrap();
        table
            .update(SupportMessage::RightPercentageChanged(2, "12.5".into()), spans(3))
            .unwrap();

        table.update(SupportMessage::LapToggled(2, false), spans(3)).unwrap();
        let row = table.row(2);
        assert!(!row.lap);
        assert_eq!(row.left_percentage, 0.0);
        assert_eq!(row.right_percentage, 0.0);
    }

    #[test]
    fn test_percentages_need_lap() {
        let mut table = SupportTable::default();
        assert!(!table.percentages_enabled(1));
        let err = table
            .update(SupportMessage::LeftPercentageChanged(1, "20".into()), spans(2))
            .unwrap_err();
        assert_eq!(err.error_code(), "FIELD_DISABLED");
    }

    #[test]
    fn test_rows_follow_span_count() {
        let table = SupportTable::default();
        let rows = table.rows(spans(4));
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[3].support, 4);
    }
}
