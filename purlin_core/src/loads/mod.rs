//! Load case definitions and their editors
//!
//! This module holds the load case editing state machine: the lists of
//! primary and combined load cases, the loads inside a primary load case, and
//! the nested load / axial / moving-load editors.
//!
//! # Overview
//!
//! - [`LoadCaseList`] - PLC or CLC list with add, delete and edit of the selected group
//! - [`CaseListEditor`] - loads inside the selected PLC
//! - [`CombinationBuilder`] - factored PLC references inside the selected CLC
//! - [`Load`], [`AxialLoad`], [`MovingLoad`] - per-load detail records
//!
//! # Example
//!
//! ```
//! use purlin_core::loads::{LoadCaseKind, LoadCaseList, ListMessage, ListEvent};
//!
//! let mut plcs = LoadCaseList::new(LoadCaseKind::Primary);
//! let event = plcs.update(ListMessage::Add).unwrap();
//!
//! assert_eq!(event, ListEvent::Created(0));
//! assert_eq!(plcs.groups()[0].name, "P. Load Case 1");
//! ```

pub mod axial;
pub mod case_list;
pub mod combinations;
pub mod group_list;
pub mod load;
pub mod load_case;
pub mod moving;

pub use axial::{AxialKind, AxialLoad, AxialMessage};
pub use case_list::{CaseEvent, CaseListEditor, CaseMessage};
pub use combinations::{BuilderEvent, BuilderMessage, CombinationBuilder, Multiplier};
pub use group_list::{ListEvent, ListMessage, LoadCaseList};
pub use load::{Load, LoadApplication, LoadDirection, LoadMessage, LoadType, LoadUnits};
pub use load_case::{GroupEdit, LoadCase, LoadCaseGroup, LoadId, MAX_CASES, MAX_GROUPS, MAX_NAME_LEN};
pub use moving::{
    Bound, LengthType, LoadLocation, LocationMessage, MovingLoad, MovingLoadMessage, MovingUnits,
    PointOfReference,
};

use serde::{Deserialize, Serialize};

/// Design check a load case group is evaluated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LimitState {
    #[default]
    Strength,
    Serviceability,
}

impl LimitState {
    pub const ALL: [LimitState; 2] = [LimitState::Strength, LimitState::Serviceability];

    pub fn label(&self) -> &'static str {
        match self {
            LimitState::Strength => "Strength Only",
            LimitState::Serviceability => "Serviceability",
        }
    }
}

impl std::fmt::Display for LimitState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Primary or combined load cases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LoadCaseKind {
    #[default]
    #[serde(rename = "PLC")]
    Primary,
    #[serde(rename = "CLC")]
    Combined,
}

impl LoadCaseKind {
    pub const ALL: [LoadCaseKind; 2] = [LoadCaseKind::Primary, LoadCaseKind::Combined];

    /// Short code (PLC, CLC)
    pub fn code(&self) -> &'static str {
        match self {
            LoadCaseKind::Primary => "PLC",
            LoadCaseKind::Combined => "CLC",
        }
    }

    /// Selector label
    pub fn label(&self) -> &'static str {
        match self {
            LoadCaseKind::Primary => "Primary Load Cases (PLCs)",
            LoadCaseKind::Combined => "Combined Load Cases (CLCs)",
        }
    }

    /// Help text shown under the selector
    pub fn description(&self) -> &'static str {
        match self {
            LoadCaseKind::Primary => "Recommend 0.1kPa for dead load due to metal roofing and purlins",
            LoadCaseKind::Combined => "Factored combinations of PLCs",
        }
    }

    /// Prefix of auto-generated group names
    pub fn name_prefix(&self) -> &'static str {
        match self {
            LoadCaseKind::Primary => "P. Load Case",
            LoadCaseKind::Combined => "C. Load Case",
        }
    }

    /// Heading of the group list
    pub fn list_title(&self) -> &'static str {
        match self {
            LoadCaseKind::Primary => "Primary Load Cases",
            LoadCaseKind::Combined => "Combined Load Cases",
        }
    }
}

impl std::fmt::Display for LoadCaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels() {
        assert_eq!(LoadCaseKind::Primary.name_prefix(), "P. Load Case");
        assert_eq!(LoadCaseKind::Combined.label(), "Combined Load Cases (CLCs)");
        assert_eq!(serde_json::to_string(&LoadCaseKind::Combined).unwrap(), "\"CLC\"");
    }

    #[test]
    fn test_limit_state_default() {
        assert_eq!(LimitState::default(), LimitState::Strength);
    }
}
