//! Moving load editor
//!
//! A moving load travels between two bounds along the structure. In `kN/m`
//! mode it is a line load; in `kPa` mode it is a pressure over a strip of given
//! width, which is when the width and pressure fields unlock. Switching back to
//! `kN/m` locks them again without clearing what was entered.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{PurlinError, PurlinResult};
use crate::input::{parse_float_or, parse_int_or};

/// Test positions used when the field is blank or not a positive number
pub const DEFAULT_TEST_POSITIONS: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PointOfReference {
    #[default]
    #[serde(rename = "leftEnd")]
    LeftEnd,
    #[serde(rename = "rightEnd")]
    RightEnd,
}

impl PointOfReference {
    pub const ALL: [PointOfReference; 2] = [PointOfReference::LeftEnd, PointOfReference::RightEnd];

    pub fn label(&self) -> &'static str {
        match self {
            PointOfReference::LeftEnd => "Left End of Structure",
            PointOfReference::RightEnd => "Right End of Structure",
        }
    }
}

impl fmt::Display for PointOfReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Whether a location is an absolute distance or a fraction of the length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthType {
    #[default]
    Mm,
    Length,
}

impl LengthType {
    pub const ALL: [LengthType; 2] = [LengthType::Mm, LengthType::Length];

    pub fn label(&self) -> &'static str {
        match self {
            LengthType::Mm => "Absolute",
            LengthType::Length => "Fraction of Length",
        }
    }

    /// Suffix shown after the length input
    pub fn suffix(&self) -> &'static str {
        match self {
            LengthType::Mm => "mm",
            LengthType::Length => "Length",
        }
    }
}

impl fmt::Display for LengthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One end of a moving load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadLocation {
    pub title: String,
    pub point_of_reference: PointOfReference,
    pub length_type: LengthType,
    pub length: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LocationMessage {
    ReferenceSelected(PointOfReference),
    LengthTypeSelected(LengthType),
    LengthChanged(String),
}

impl LoadLocation {
    pub fn new(title: impl Into<String>, point_of_reference: PointOfReference) -> Self {
        LoadLocation {
            title: title.into(),
            point_of_reference,
            length_type: LengthType::Mm,
            length: 0.0,
        }
    }

    pub fn apply(&mut self, message: LocationMessage) {
        match message {
            LocationMessage::ReferenceSelected(reference) => self.point_of_reference = reference,
            LocationMessage::LengthTypeSelected(length_type) => self.length_type = length_type,
            LocationMessage::LengthChanged(text) => self.length = parse_float_or(&text, 0.0),
        }
    }
}

/// Units of a moving load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MovingUnits {
    #[default]
    #[serde(rename = "kN/m")]
    KnPerM,
    #[serde(rename = "kPa")]
    Kpa,
}

impl MovingUnits {
    pub const ALL: [MovingUnits; 2] = [MovingUnits::KnPerM, MovingUnits::Kpa];

    pub fn symbol(&self) -> &'static str {
        match self {
            MovingUnits::KnPerM => "kN/m",
            MovingUnits::Kpa => "kPa",
        }
    }
}

impl fmt::Display for MovingUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovingLoad {
    pub left_bound: LoadLocation,
    pub right_bound: LoadLocation,
    pub width_mm: f64,
    pub units: MovingUnits,
    pub pressure_kpa: f64,
    pub purlin_spacing_mm: u32,
    pub num_test_positions: u32,
}

impl Default for MovingLoad {
    fn default() -> Self {
        MovingLoad {
            left_bound: LoadLocation::new("Left Bound", PointOfReference::LeftEnd),
            right_bound: LoadLocation::new("Right Bound", PointOfReference::RightEnd),
            width_mm: 0.0,
            units: MovingUnits::KnPerM,
            pressure_kpa: 0.0,
            purlin_spacing_mm: 0,
            num_test_positions: DEFAULT_TEST_POSITIONS,
        }
    }
}

/// Which bound a location edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MovingLoadMessage {
    Location(Bound, LocationMessage),
    UnitsSelected(MovingUnits),
    WidthChanged(String),
    PressureChanged(String),
    PurlinSpacingChanged(String),
    TestPositionsChanged(String),
}

impl MovingLoad {
    /// Width and pressure only apply to pressure loads
    pub fn pressure_mode(&self) -> bool {
        self.units == MovingUnits::Kpa
    }

    pub fn bound_mut(&mut self, bound: Bound) -> &mut LoadLocation {
        match bound {
            Bound::Left => &mut self.left_bound,
            Bound::Right => &mut self.right_bound,
        }
    }

    pub fn apply(&mut self, message: MovingLoadMessage) -> PurlinResult<()> {
        match message {
            MovingLoadMessage::Location(bound, edit) => self.bound_mut(bound).apply(edit),
            MovingLoadMessage::UnitsSelected(units) => self.units = units,
            MovingLoadMessage::WidthChanged(text) => {
                self.require_pressure_mode("width_mm")?;
                self.width_mm = parse_float_or(&text, 0.0);
            }
            MovingLoadMessage::PressureChanged(text) => {
                self.require_pressure_mode("pressure_kpa")?;
                self.pressure_kpa = parse_float_or(&text, 0.0);
            }
            MovingLoadMessage::PurlinSpacingChanged(text) => {
                self.purlin_spacing_mm = u32::try_from(parse_int_or(&text, 0)).unwrap_or(0);
            }
            MovingLoadMessage::TestPositionsChanged(text) => {
                self.num_test_positions = u32::try_from(parse_int_or(&text, DEFAULT_TEST_POSITIONS as i64))
                    .ok()
                    .filter(|&n| n > 0)
                    .unwrap_or(DEFAULT_TEST_POSITIONS);
            }
        }
        Ok(())
    }

    fn require_pressure_mode(&self, field: &str) -> PurlinResult<()> {
        if self.pressure_mode() {
            Ok(())
        } else {
            Err(PurlinError::field_disabled(field, "only editable for kPa moving loads"))
        }
    }
}
