//! Bridging spacing table
//!
//! Each span carries up to three rows of bridging, positioned by
//! `field1..field3`. Only the first `bridgings` fields apply; reducing the
//! count zeroes the fields that dropped out. With default spacing switched on
//! the table is read-only.

use serde::{Deserialize, Serialize};

use super::table::{RowTable, TableRow};
use super::SpanCount;
use crate::errors::{PurlinError, PurlinResult};
use crate::input::parse_float_or;

pub const MAX_BRIDGINGS: u8 = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgingSpacingInfo {
    /// 1-based span number (display only)
    pub span: usize,
    pub bridgings: u8,
    pub field1: f64,
    pub field2: f64,
    pub field3: f64,
}

impl BridgingSpacingInfo {
    pub fn field(&self, field: BridgingField) -> f64 {
        match field {
            BridgingField::Field1 => self.field1,
            BridgingField::Field2 => self.field2,
            BridgingField::Field3 => self.field3,
        }
    }

    fn field_mut(&mut self, field: BridgingField) -> &mut f64 {
        match field {
            BridgingField::Field1 => &mut self.field1,
            BridgingField::Field2 => &mut self.field2,
            BridgingField::Field3 => &mut self.field3,
        }
    }

    /// Fields shown for the current bridging count
    pub fn visible_fields(&self) -> impl Iterator<Item = BridgingField> + '_ {
        BridgingField::ALL.into_iter().filter(|f| f.number() <= self.bridgings)
    }
}

impl TableRow for BridgingSpacingInfo {
    fn synthesize(index: usize) -> Self {
        BridgingSpacingInfo {
            span: index + 1,
            bridgings: 0,
            field1: 0.0,
            field2: 0.0,
            field3: 0.0,
        }
    }

    fn set_ordinal(&mut self, ordinal: usize) {
        self.span = ordinal;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BridgingField {
    Field1,
    Field2,
    Field3,
}

impl BridgingField {
    pub const ALL: [BridgingField; 3] = [BridgingField::Field1, BridgingField::Field2, BridgingField::Field3];

    /// 1-based field number
    pub fn number(&self) -> u8 {
        match self {
            BridgingField::Field1 => 1,
            BridgingField::Field2 => 2,
            BridgingField::Field3 => 3,
        }
    }

    fn key(&self) -> &'static str {
        match self {
            BridgingField::Field1 => "field1",
            BridgingField::Field2 => "field2",
            BridgingField::Field3 => "field3",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BridgingMessage {
    DefaultSpacingToggled(bool),
    BridgingsSelected(usize, u8),
    FieldChanged(usize, BridgingField, String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgingTable {
    /// Use the standard bridging layout instead of the per-span rows
    pub default_spacing: bool,
    rows: RowTable<BridgingSpacingInfo>,
}

impl Default for BridgingTable {
    fn default() -> Self {
        BridgingTable {
            default_spacing: true,
            rows: RowTable::default(),
        }
    }
}

impl BridgingTable {
    pub fn rows(&self, num_spans: SpanCount) -> Vec<BridgingSpacingInfo> {
        self.rows.rows(num_spans.get())
    }

    pub fn row(&self, index: usize) -> BridgingSpacingInfo {
        self.rows.row(index)
    }

    pub fn rows_editable(&self) -> bool {
        !self.default_spacing
    }

    pub fn update(&mut self, message: BridgingMessage, num_spans: SpanCount) -> PurlinResult<()> {
        let count = num_spans.get();
        match message {
            BridgingMessage::DefaultSpacingToggled(on) => {
                self.default_spacing = on;
                Ok(())
            }
            BridgingMessage::BridgingsSelected(index, bridgings) => {
                self.require_editable("bridgings")?;
                if bridgings > MAX_BRIDGINGS {
                    return Err(PurlinError::invalid_input(
                        "bridgings",
                        bridgings.to_string(),
                        format!("at most {} rows of bridging per span", MAX_BRIDGINGS),
                    ));
                }
                self.rows.edit(index, count, |row| {
                    row.bridgings = bridgings;
                    for field in BridgingField::ALL {
                        if field.number() > bridgings {
                            *row.field_mut(field) = 0.0;
                        }
                    }
                    Ok(())
                })
            }
            BridgingMessage::FieldChanged(index, field, text) => {
                self.require_editable(field.key())?;
                let value = parse_float_or(&text, 0.0);
                self.rows.edit(index, count, |row| {
                    if field.number() > row.bridgings {
                        return Err(PurlinError::field_disabled(
                            field.key(),
                            format!("span has {} bridging rows", row.bridgings),
                        ));
                    }
                    *row.field_mut(field) = value;
                    Ok(())
                })
            }
        }
    }

    fn require_editable(&self, field: &str) -> PurlinResult<()> {
        if self.default_spacing {
            Err(PurlinError::field_disabled(field, "default bridging spacing is selected"))
        } else {
            Ok(())
        }
    }
}
