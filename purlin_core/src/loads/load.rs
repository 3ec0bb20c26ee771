//! Load detail records and the load type state machine
//!
//! Which fields of a [`Load`] apply depends on its [`LoadType`]:
//!
//! | Load type | Direction | Application | Unit options |
//! |---|---|---|---|
//! | UDL | - | yes | kN/m, kPa |
//! | Point | - | - | kN |
//! | Line | yes | yes | kN/m |
//!
//! Changing the load type always clears the units and clears whatever the new
//! type does not use; everything else is kept.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{PurlinError, PurlinResult};
use crate::input::parse_float_or;

/// Shape of an individual load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LoadType {
    /// Uniformly distributed load
    #[default]
    #[serde(rename = "UDL")]
    Udl,
    Point,
    Line,
}

impl LoadType {
    pub const ALL: [LoadType; 3] = [LoadType::Udl, LoadType::Point, LoadType::Line];

    pub fn code(&self) -> &'static str {
        match self {
            LoadType::Udl => "UDL",
            LoadType::Point => "Point",
            LoadType::Line => "Line",
        }
    }

    /// Units a load of this type may be expressed in
    pub fn unit_options(&self) -> &'static [LoadUnits] {
        match self {
            LoadType::Udl => &[LoadUnits::KnPerM, LoadUnits::Kpa],
            LoadType::Point => &[LoadUnits::Kn],
            LoadType::Line => &[LoadUnits::KnPerM],
        }
    }

    pub fn uses_direction(&self) -> bool {
        matches!(self, LoadType::Line)
    }

    pub fn uses_application(&self) -> bool {
        !matches!(self, LoadType::Point)
    }
}

impl fmt::Display for LoadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Direction of a line load relative to the span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadDirection {
    Parallel,
    Perpendicular,
}

impl LoadDirection {
    pub const ALL: [LoadDirection; 2] = [LoadDirection::Parallel, LoadDirection::Perpendicular];

    pub fn label(&self) -> &'static str {
        match self {
            LoadDirection::Parallel => "Parallel to Span",
            LoadDirection::Perpendicular => "Perpendicular to Span",
        }
    }
}

impl fmt::Display for LoadDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How much of the structure a load covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadApplication {
    Part,
    One,
    Multiple,
    All,
}

impl LoadApplication {
    pub const ALL: [LoadApplication; 4] = [
        LoadApplication::Part,
        LoadApplication::One,
        LoadApplication::Multiple,
        LoadApplication::All,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LoadApplication::Part => "Part of Span",
            LoadApplication::One => "One Span",
            LoadApplication::Multiple => "Multiple Spans",
            LoadApplication::All => "All Spans",
        }
    }
}

impl fmt::Display for LoadApplication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Force units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadUnits {
    #[serde(rename = "kN/m")]
    KnPerM,
    #[serde(rename = "kN")]
    Kn,
    #[serde(rename = "kPa")]
    Kpa,
}

impl LoadUnits {
    pub const ALL: [LoadUnits; 3] = [LoadUnits::KnPerM, LoadUnits::Kn, LoadUnits::Kpa];

    pub fn symbol(&self) -> &'static str {
        match self {
            LoadUnits::KnPerM => "kN/m",
            LoadUnits::Kn => "kN",
            LoadUnits::Kpa => "kPa",
        }
    }
}

impl fmt::Display for LoadUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Detail of one load in a primary load case.
///
/// `None` stands for a field that is blank: either not applicable to the load
/// type or not chosen yet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Load {
    pub load_type: LoadType,
    pub direction: Option<LoadDirection>,
    pub application: Option<LoadApplication>,
    pub units: Option<LoadUnits>,
    pub force: f64,
}

/// Edits coming from the load detail form
#[derive(Debug, Clone, PartialEq)]
pub enum LoadMessage {
    LoadTypeSelected(LoadType),
    DirectionSelected(LoadDirection),
    ApplicationSelected(LoadApplication),
    UnitsSelected(LoadUnits),
    ForceChanged(String),
}

impl Load {
    /// Switch load type, clearing units and any field the new type ignores.
    pub fn set_load_type(&mut self, load_type: LoadType) {
        if !load_type.uses_direction() {
            self.direction = None;
        }
        if !load_type.uses_application() {
            self.application = None;
        }
        self.units = None;
        self.load_type = load_type;
    }

    pub fn set_direction(&mut self, direction: LoadDirection) -> PurlinResult<()> {
        if !self.load_type.uses_direction() {
            return Err(PurlinError::field_disabled(
                "direction",
                format!("{} loads have no direction", self.load_type),
            ));
        }
        self.direction = Some(direction);
        Ok(())
    }

    pub fn set_application(&mut self, application: LoadApplication) -> PurlinResult<()> {
        if !self.load_type.uses_application() {
            return Err(PurlinError::field_disabled(
                "application",
                format!("{} loads have no application", self.load_type),
            ));
        }
        self.application = Some(application);
        Ok(())
    }

    /// Choose units; only the options of the current load type are accepted.
    pub fn set_units(&mut self, units: LoadUnits) -> PurlinResult<()> {
        if !self.load_type.unit_options().contains(&units) {
            return Err(PurlinError::invalid_input(
                "units",
                units.symbol(),
                format!("not offered for {} loads", self.load_type),
            ));
        }
        self.units = Some(units);
        Ok(())
    }

    pub fn set_force(&mut self, text: &str) {
        self.force = parse_float_or(text, 0.0);
    }

    pub fn apply(&mut self, message: LoadMessage) -> PurlinResult<()> {
        let result = match message {
            LoadMessage::LoadTypeSelected(load_type) => {
                self.set_load_type(load_type);
                Ok(())
            }
            LoadMessage::DirectionSelected(direction) => self.set_direction(direction),
            LoadMessage::ApplicationSelected(application) => self.set_application(application),
            LoadMessage::UnitsSelected(units) => self.set_units(units),
            LoadMessage::ForceChanged(text) => {
                self.set_force(&text);
                Ok(())
            }
        };
        if let Err(ref e) = result {
            debug!(error = %e, "load edit rejected");
        }
        result
    }

    /// Units label shown beside the force field
    pub fn units_label(&self) -> &'static str {
        self.units.map(|u| u.symbol()).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_load() -> Load {
        let mut load = Load::default();
        load.set_load_type(LoadType::Line);
        load.set_direction(LoadDirection::Parallel).unwrap();
        load.set_application(LoadApplication::All).unwrap();
        load.set_units(LoadUnits::KnPerM).unwrap();
        load
    }

    #[test]
    fn test_default_load() {
        let load = Load::default();
        assert_eq!(load.load_type, LoadType::Udl);
        assert_eq!(load.direction, None);
        assert_eq!(load.application, None);
        assert_eq!(load.units, None);
        assert_eq!(load.force, 0.0);
    }

    #[test]
    fn test_line_to_udl_clears_direction_and_units() {
        let mut load = line_load();
        load.apply(LoadMessage::LoadTypeSelected(LoadType::Udl)).unwrap();
        assert_eq!(load.direction, None);
        assert_eq!(load.application, Some(LoadApplication::All));
        assert_eq!(load.units, None);
    }

    #[test]
    fn test_udl_to_point_clears_application() {
        let mut load = Load::default();
        load.set_application(LoadApplication::One).unwrap();
        load.set_units(LoadUnits::Kpa).unwrap();

        load.set_load_type(LoadType::Point);
        assert_eq!(load.application, None);
        assert_eq!(load.units, None);

        load.set_load_type(LoadType::Line);
        assert_eq!(load.application, None);
        assert_eq!(load.direction, None);
    }

    #[test]
    fn test_line_keeps_application() {
        let mut load = Load::default();
        load.set_application(LoadApplication::Multiple).unwrap();
        load.set_load_type(LoadType::Line);
        assert_eq!(load.application, Some(LoadApplication::Multiple));
    }

    #[test]
    fn test_unit_options_per_type() {
        assert_eq!(LoadType::Udl.unit_options(), &[LoadUnits::KnPerM, LoadUnits::Kpa]);
        assert_eq!(LoadType::Point.unit_options(), &[LoadUnits::Kn]);
        assert_eq!(LoadType::Line.unit_options(), &[LoadUnits::KnPerM]);
    }

    #[test]
    fn test_only_offered_units_are_accepted() {
        let all = [LoadUnits::KnPerM, LoadUnits::Kn, LoadUnits::Kpa];
        for load_type in LoadType::ALL {
            for units in all {
                let mut load = Load::default();
                load.set_load_type(load_type);
                let accepted = load.set_units(units).is_ok();
                assert_eq!(accepted, load_type.unit_options().contains(&units));
                if !accepted {
                    assert_eq!(load.units, None);
                }
            }
        }
    }

    #[test]
    fn test_direction_and_application_gating() {
        let mut load = Load::default();
        assert!(load.set_direction(LoadDirection::Perpendicular).is_err());
        assert_eq!(load.direction, None);

        load.set_load_type(LoadType::Point);
        assert!(load.set_application(LoadApplication::Part).is_err());
        assert_eq!(load.application, None);
    }

    #[test]
    fn test_force_parsing() {
        let mut load = Load::default();
        load.apply(LoadMessage::ForceChanged("2.5".into())).unwrap();
        assert_eq!(load.force, 2.5);
        load.apply(LoadMessage::ForceChanged("heavy".into())).unwrap();
        assert_eq!(load.force, 0.0);
    }

    #[test]
    fn test_wire_names() {
        let load = line_load();
        let json = serde_json::to_value(&load).unwrap();
        assert_eq!(json["load_type"], "Line");
        assert_eq!(json["direction"], "parallel");
        assert_eq!(json["application"], "all");
        assert_eq!(json["units"], "kN/m");
        assert_eq!(serde_json::to_string(&LoadType::Udl).unwrap(), "\"UDL\"");
    }
}
