//! # Purlin Geometry
//!
//! Layout choices made on the project page: purlin profile, span
//! configuration, how the purlin size is chosen, and the per-span tables for
//! spans, supports and bridging.
//!
//! The tables always show [`SpanCount`] rows, however many rows have actually
//! been edited; see [`table::RowTable`].

pub mod bridging;
pub mod spans;
pub mod supports;
pub mod table;

pub use bridging::{BridgingField, BridgingMessage, BridgingSpacingInfo, BridgingTable, MAX_BRIDGINGS};
pub use spans::{PurlinSize, SpanInfo, SpanMessage, SpanTable};
pub use supports::{SupportInfo, SupportMessage, SupportTable};
pub use table::{RowTable, TableRow};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{PurlinError, PurlinResult};
use crate::input::int_prefix;

/// Purlin profile family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PurlinType {
    #[default]
    #[serde(rename = "typeC")]
    TypeC,
    #[serde(rename = "typeZ")]
    TypeZ,
}

impl PurlinType {
    pub const ALL: [PurlinType; 2] = [PurlinType::TypeC, PurlinType::TypeZ];

    pub fn label(&self) -> &'static str {
        match self {
            PurlinType::TypeC => "Exacta®-C",
            PurlinType::TypeZ => "Exacta®-Z",
        }
    }
}

impl fmt::Display for PurlinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One of the nine standard span/lap arrangements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpanType {
    #[default]
    SpanType1,
    SpanType2,
    SpanType3,
    SpanType4,
    SpanType5,
    SpanType6,
    SpanType7,
    SpanType8,
    SpanType9,
}

impl SpanType {
    pub const ALL: [SpanType; 9] = [
        SpanType::SpanType1,
        SpanType::SpanType2,
        SpanType::SpanType3,
        SpanType::SpanType4,
        SpanType::SpanType5,
        SpanType::SpanType6,
        SpanType::SpanType7,
        SpanType::SpanType8,
        SpanType::SpanType9,
    ];

    /// 1-based number shown on the selector tile
    pub fn number(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).map(|i| i + 1).unwrap_or(1)
    }
}

impl fmt::Display for SpanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Span {}", self.number())
    }
}

/// Check a chosen purlin size, or let the design find one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PurlinSizeMode {
    #[default]
    CheckPurlinSize,
    FindPurlinSize,
}

impl PurlinSizeMode {
    pub const ALL: [PurlinSizeMode; 2] = [PurlinSizeMode::CheckPurlinSize, PurlinSizeMode::FindPurlinSize];

    pub fn label(&self) -> &'static str {
        match self {
            PurlinSizeMode::CheckPurlinSize => "Check Purlin Size",
            PurlinSizeMode::FindPurlinSize => "Find Purlin Size",
        }
    }

    /// Whether per-span purlin sizes are chosen by the user
    pub fn sizes_editable(&self) -> bool {
        matches!(self, PurlinSizeMode::CheckPurlinSize)
    }
}

impl fmt::Display for PurlinSizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Number of spans, 1 through 10
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SpanCount(u8);

impl SpanCount {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(count: u8) -> PurlinResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&count) {
            Ok(SpanCount(count))
        } else {
            Err(PurlinError::invalid_input(
                "num_spans",
                count.to_string(),
                format!("number of spans must be between {} and {}", Self::MIN, Self::MAX),
            ))
        }
    }

    /// Parse the spans field; anything that is not a whole number in range is rejected
    pub fn parse(text: &str) -> PurlinResult<Self> {
        let count = int_prefix(text)
            .and_then(|n| u8::try_from(n).ok())
            .ok_or_else(|| PurlinError::invalid_input("num_spans", text, "not a number of spans"))?;
        Self::new(count)
    }

    pub fn get(&self) -> usize {
        self.0 as usize
    }
}

impl Default for SpanCount {
    fn default() -> Self {
        SpanCount(1)
    }
}

impl TryFrom<u8> for SpanCount {
    type Error = PurlinError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        SpanCount::new(value)
    }
}

impl From<SpanCount> for u8 {
    fn from(count: SpanCount) -> u8 {
        count.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_count_bounds() {
        assert!(SpanCount::new(0).is_err());
        assert!(SpanCount::new(11).is_err());
        assert_eq!(SpanCount::new(10).unwrap().get(), 10);
        assert_eq!(SpanCount::parse("4").unwrap().get(), 4);
        assert!(SpanCount::parse("").is_err());
        assert!(SpanCount::parse("-2").is_err());
        assert!(SpanCount::parse("300").is_err());
    }

    #[test]
    fn test_span_count_deserialize_checks_range() {
        assert!(serde_json::from_str::<SpanCount>("12").is_err());
        assert_eq!(serde_json::from_str::<SpanCount>("3").unwrap().get(), 3);
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(serde_json::to_string(&PurlinType::TypeZ).unwrap(), "\"typeZ\"");
        assert_eq!(serde_json::to_string(&SpanType::SpanType7).unwrap(), "\"spanType7\"");
        assert_eq!(
            serde_json::to_string(&PurlinSizeMode::FindPurlinSize).unwrap(),
            "\"findPurlinSize\""
        );
    }

    #[test]
    fn test_span_type_numbers() {
        assert_eq!(SpanType::SpanType1.number(), 1);
        assert_eq!(SpanType::SpanType9.to_string(), "Span 9");
    }
}
