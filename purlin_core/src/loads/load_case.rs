//! Load case records
//!
//! A [`LoadCaseGroup`] is either a primary load case (PLC, a named set of
//! individual loads) or a combined load case (CLC, a named set of factored
//! references to PLCs). Both share the same shape; which one a group is comes
//! from the list that owns it.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use super::LimitState;
use crate::errors::{PurlinError, PurlinResult};
use crate::input::parse_float_or;

/// Longest name a load case group may carry
pub const MAX_NAME_LEN: usize = 15;

/// Entries per group (loads in a PLC, factored cases in a CLC)
pub const MAX_CASES: usize = 10;

/// Groups per list (PLCs or CLCs)
pub const MAX_GROUPS: usize = 20;

// ============================================================================
// Identity
// ============================================================================

/// Opaque identifier assigned to each case when it is created.
///
/// Position in the list is still the display identity; the id only keys the
/// auxiliary load, axial and moving-load records so they follow the entry
/// through deletions of its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoadId(Uuid);

impl LoadId {
    pub fn new() -> Self {
        LoadId(Uuid::new_v4())
    }
}

impl Default for LoadId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LoadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One named entry of a load case group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCase {
    pub id: LoadId,
    pub name: String,
}

impl LoadCase {
    pub fn new(name: impl Into<String>) -> Self {
        LoadCase {
            id: LoadId::new(),
            name: name.into(),
        }
    }
}

// ============================================================================
// Groups
// ============================================================================

/// A primary or combined load case.
///
/// # JSON Format
/// ```json
/// {
///   "name": "P. Load Case 1",
///   "cases": [{ "id": "4f0c...", "name": "Load 1" }],
///   "limit_state": "Strength",
///   "deflection_limit": 0.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCaseGroup {
    pub name: String,
    pub cases: Vec<LoadCase>,
    pub limit_state: LimitState,
    /// Span/deflection ratio; only meaningful for serviceability groups
    pub deflection_limit: f64,
}

/// Edits applied to the selected group of a list
#[derive(Debug, Clone, PartialEq)]
pub enum GroupEdit {
    Rename(String),
    SetLimitState(LimitState),
    /// Raw text of the deflection limit field
    SetDeflectionLimit(String),
}

impl LoadCaseGroup {
    /// Fresh group: strength, no deflection limit, no cases
    pub fn new(name: impl Into<String>) -> Self {
        LoadCaseGroup {
            name: truncate_name(&name.into()),
            cases: Vec::new(),
            limit_state: LimitState::Strength,
            deflection_limit: 0.0,
        }
    }

    /// Rename, keeping at most [`MAX_NAME_LEN`] characters
    pub fn rename(&mut self, name: &str) {
        self.name = truncate_name(name);
    }

    /// Switch limit state. Leaving serviceability clears the deflection limit.
    pub fn set_limit_state(&mut self, limit_state: LimitState) {
        if self.limit_state == LimitState::Serviceability && limit_state != LimitState::Serviceability {
            self.deflection_limit = 0.0;
        }
        self.limit_state = limit_state;
    }

    /// Whether the deflection limit field accepts input
    pub fn deflection_limit_enabled(&self) -> bool {
        self.limit_state == LimitState::Serviceability
    }

    /// Set the deflection limit from raw field text (invalid text reads as 0).
    pub fn set_deflection_limit(&mut self, text: &str) -> PurlinResult<()> {
        if !self.deflection_limit_enabled() {
            debug!(group = %self.name, "deflection limit edit ignored for strength case");
            return Err(PurlinError::field_disabled(
                "deflection_limit",
                "only serviceability load cases carry a deflection limit",
            ));
        }
        self.deflection_limit = parse_float_or(text, 0.0);
        Ok(())
    }

    pub fn apply(&mut self, edit: GroupEdit) -> PurlinResult<()> {
        match edit {
            GroupEdit::Rename(name) => {
                self.rename(&name);
                Ok(())
            }
            GroupEdit::SetLimitState(limit_state) => {
                self.set_limit_state(limit_state);
                Ok(())
            }
            GroupEdit::SetDeflectionLimit(text) => self.set_deflection_limit(&text),
        }
    }

    pub fn is_full(&self) -> bool {
        self.cases.len() >= MAX_CASES
    }

    pub fn case_names(&self) -> impl Iterator<Item = &str> {
        self.cases.iter().map(|c| c.name.as_str())
    }
}

fn truncate_name(name: &str) -> String {
    name.chars().take(MAX_NAME_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_group_defaults() {
        let group = LoadCaseGroup::new("P. Load Case 1");
        assert_eq!(group.name, "P. Load Case 1");
        assert_eq!(group.limit_state, LimitState::Strength);
        assert_eq!(group.deflection_limit, 0.0);
        assert!(group.cases.is_empty());
    }

    #[test]
    fn test_rename_truncates() {
        let mut group = LoadCaseGroup::new("x");
        group.rename("Roof dead load plus services");
        assert_eq!(group.name, "Roof dead load ");
        assert_eq!(group.name.chars().count(), MAX_NAME_LEN);
    }

    #[test]
    fn test_deflection_limit_disabled_for_strength() {
        let mut group = LoadCaseGroup::new("C. Load Case 1");
        let err = group.set_deflection_limit("250").unwrap_err();
        assert_eq!(err.error_code(), "FIELD_DISABLED");
        assert_eq!(group.deflection_limit, 0.0);
    }

    #[test]
    fn test_deflection_limit_reset_when_leaving_serviceability() {
        let mut group = LoadCaseGroup::new("P. Load Case 1");
        group.set_limit_state(LimitState::Serviceability);
        group.set_deflection_limit("250").unwrap();
        assert_eq!(group.deflection_limit, 250.0);

        group.set_limit_state(LimitState::Serviceability);
        assert_eq!(group.deflection_limit, 250.0);

        group.set_limit_state(LimitState::Strength);
        assert_eq!(group.deflection_limit, 0.0);

        group.set_limit_state(LimitState::Serviceability);
        assert_eq!(group.deflection_limit, 0.0);
    }

    #[test]
    fn test_deflection_limit_invalid_text_is_zero() {
        let mut group = LoadCaseGroup::new("P. Load Case 1");
        group.apply(GroupEdit::SetLimitState(LimitState::Serviceability)).unwrap();
        group.apply(GroupEdit::SetDeflectionLimit("L/".into())).unwrap();
        assert_eq!(group.deflection_limit, 0.0);
    }

    #[test]
    fn test_load_ids_are_unique() {
        let a = LoadCase::new("Load 1");
        let b = LoadCase::new("Load 1");
        assert_ne!(a.id, b.id);
    }
}
