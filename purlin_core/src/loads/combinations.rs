//! Combined load case builder
//!
//! A combined load case (CLC) is assembled from factored primary load cases.
//! The builder shows two lists side by side: the cases already in the CLC
//! (single selection) and the available PLCs (multi-selection, in click
//! order), plus a multiplier.
//!
//! # Example
//!
//! ```
//! use purlin_core::loads::{CombinationBuilder, BuilderMessage, LoadCaseGroup, Multiplier};
//!
//! let primaries = vec![LoadCaseGroup::new("Dead"), LoadCaseGroup::new("Live")];
//! let mut clc = LoadCaseGroup::new("C. Load Case 1");
//! let mut builder = CombinationBuilder::default();
//!
//! builder.update(&mut clc, &primaries, BuilderMessage::MultiplierSelected(Multiplier::X1_2)).unwrap();
//! builder.update(&mut clc, &primaries, BuilderMessage::ToggleAvailable(0)).unwrap();
//! builder.update(&mut clc, &primaries, BuilderMessage::Add).unwrap();
//!
//! assert_eq!(clc.cases[0].name, "1.2 * Dead");
//! ```

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::case_list::remove_selected_case;
use super::load_case::{LoadCase, LoadCaseGroup, LoadId, MAX_CASES};
use crate::errors::{PurlinError, PurlinResult};
use crate::selection::{MultiSelection, Selection};

/// Load factor applied to a primary load case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Multiplier {
    #[serde(rename = "0.8")]
    X0_8,
    #[serde(rename = "0.9")]
    X0_9,
    #[default]
    #[serde(rename = "1.0")]
    X1_0,
    #[serde(rename = "1.2")]
    X1_2,
    #[serde(rename = "1.25")]
    X1_25,
    #[serde(rename = "1.5")]
    X1_5,
}

impl Multiplier {
    pub const ALL: [Multiplier; 6] = [
        Multiplier::X0_8,
        Multiplier::X0_9,
        Multiplier::X1_0,
        Multiplier::X1_2,
        Multiplier::X1_25,
        Multiplier::X1_5,
    ];

    /// Text used in the dropdown and in generated case names
    pub fn label(&self) -> &'static str {
        match self {
            Multiplier::X0_8 => "0.8",
            Multiplier::X0_9 => "0.9",
            Multiplier::X1_0 => "1.0",
            Multiplier::X1_2 => "1.2",
            Multiplier::X1_25 => "1.25",
            Multiplier::X1_5 => "1.5",
        }
    }

    pub fn factor(&self) -> f64 {
        match self {
            Multiplier::X0_8 => 0.8,
            Multiplier::X0_9 => 0.9,
            Multiplier::X1_0 => 1.0,
            Multiplier::X1_2 => 1.2,
            Multiplier::X1_25 => 1.25,
            Multiplier::X1_5 => 1.5,
        }
    }

    /// Name of the factored case, e.g. `"1.2 * Dead"`
    pub fn case_name(&self, primary: &str) -> String {
        format!("{} * {}", self.label(), primary)
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BuilderMessage {
    SelectTarget(Option<usize>),
    ToggleAvailable(usize),
    MultiplierSelected(Multiplier),
    Add,
    DeleteSelected,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BuilderEvent {
    /// Cases appended by an Add; empty when every name was already present
    Added(Vec<LoadId>),
    Deleted(LoadCase),
    TargetSelected(Option<usize>),
    AvailableToggled(usize),
    MultiplierChanged(Multiplier),
}

/// Selection state of the combined load case builder
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombinationBuilder {
    target: Selection,
    available: MultiSelection,
    multiplier: Multiplier,
}

impl CombinationBuilder {
    pub fn target_selected(&self) -> Option<usize> {
        self.target.index()
    }

    pub fn available_selected(&self) -> &[usize] {
        self.available.indices()
    }

    pub fn is_available_selected(&self, index: usize) -> bool {
        self.available.contains(index)
    }

    pub fn multiplier(&self) -> Multiplier {
        self.multiplier
    }

    /// Re-validate both selections after the target or the PLC list changed
    pub fn sync(&mut self, target: Option<&LoadCaseGroup>, primaries: &[LoadCaseGroup]) {
        let len = target.map(|t| t.cases.len()).unwrap_or(0);
        self.target = self.target.on_list_changed(len);
        self.available.retain_below(primaries.len());
    }

    pub fn update(
        &mut self,
        target: &mut LoadCaseGroup,
        primaries: &[LoadCaseGroup],
        message: BuilderMessage,
    ) -> PurlinResult<BuilderEvent> {
        match message {
            BuilderMessage::SelectTarget(index) => {
                if matches!(index, Some(i) if i >= target.cases.len()) {
                    return Err(PurlinError::invalid_input(
                        "combined case selection",
                        format!("{:?}", index),
                        "no such case",
                    ));
                }
                self.target = index.into();
                Ok(BuilderEvent::TargetSelected(index))
            }
            BuilderMessage::ToggleAvailable(index) => {
                if index >= primaries.len() {
                    return Err(PurlinError::invalid_input(
                        "primary load case",
                        index.to_string(),
                        "no such primary load case",
                    ));
                }
                self.available.toggle(index);
                Ok(BuilderEvent::AvailableToggled(index))
            }
            BuilderMessage::MultiplierSelected(multiplier) => {
                self.multiplier = multiplier;
                Ok(BuilderEvent::MultiplierChanged(multiplier))
            }
            BuilderMessage::Add => self.add(target, primaries).map(BuilderEvent::Added),
            BuilderMessage::DeleteSelected => {
                remove_selected_case(target, &mut self.target).map(BuilderEvent::Deleted)
            }
        }
    }

    fn add(&mut self, target: &mut LoadCaseGroup, primaries: &[LoadCaseGroup]) -> PurlinResult<Vec<LoadId>> {
        if self.available.is_empty() {
            return Err(PurlinError::no_selection("Primary Load Cases"));
        }
        if target.is_full() {
            return Err(PurlinError::capacity_reached("Cases in this Combined Load Case", MAX_CASES));
        }

        let mut existing: HashSet<String> = target.case_names().map(str::to_owned).collect();
        let mut added = Vec::new();

        for &index in self.available.indices() {
            let Some(primary) = primaries.get(index) else {
                continue;
            };
            let name = self.multiplier.case_name(&primary.name);
            if existing.contains(&name) {
                debug!(%name, "combined case already present, skipped");
                continue;
            }
            existing.insert(name.clone());
            added.push(LoadCase::new(name));
            if target.cases.len() + added.len() >= MAX_CASES {
                break;
            }
        }

        let ids: Vec<LoadId> = added.iter().map(|c| c.id).collect();
        if !added.is_empty() {
            target.cases.extend(added);
            self.target = Selection::at(target.cases.len() - 1);
            info!(clc = %target.name, count = ids.len(), "factored cases added");
        }
        self.available.clear();
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn primaries(names: &[&str]) -> Vec<LoadCaseGroup> {
        names.iter().map(|n| LoadCaseGroup::new(*n)).collect()
    }

    #[test]
    fn test_multiplier_domain() {
        let labels: Vec<&str> = Multiplier::ALL.iter().map(|m| m.label()).collect();
        assert_eq!(labels, vec!["0.8", "0.9", "1.0", "1.2", "1.25", "1.5"]);
        assert_eq!(Multiplier::default(), Multiplier::X1_0);
        assert_eq!(Multiplier::X1_25.factor(), 1.25);
    }

    #[test]
    fn test_add_in_click_order() {
        let plcs = primaries(&["Dead", "Live", "Wind"]);
        let mut clc = LoadCaseGroup::new("C. Load Case 1");
        let mut builder = CombinationBuilder::default();

        builder.update(&mut clc, &plcs, BuilderMessage::ToggleAvailable(2)).unwrap();
        builder.update(&mut clc, &plcs, BuilderMessage::ToggleAvailable(0)).unwrap();
        let event = builder.update(&mut clc, &plcs, BuilderMessage::Add).unwrap();

        let names: Vec<&str> = clc.case_names().collect();
        assert_eq!(names, vec!["1.0 * Wind", "1.0 * Dead"]);
        assert!(matches!(event, BuilderEvent::Added(ref ids) if ids.len() == 2));
        assert_eq!(builder.target_selected(), Some(1));
        assert!(builder.available_selected().is_empty());
    }

    #[test]
    fn test_add_with_nothing_selected_keeps_state() {
        let plcs = primaries(&["Dead"]);
        let mut clc = LoadCaseGroup::new("C. Load Case 1");
        let mut builder = CombinationBuilder::default();
        let err = builder.update(&mut clc, &plcs, BuilderMessage::Add).unwrap_err();
        assert_eq!(err.error_code(), "NO_SELECTION");
        assert!(clc.cases.is_empty());
    }

    #[test]
    fn test_add_to_full_target_keeps_multi_selection() {
        let plcs = primaries(&["Dead"]);
        let mut clc = LoadCaseGroup::new("C. Load Case 1");
        for i in 0..MAX_CASES {
            clc.cases.push(LoadCase::new(format!("case {}", i)));
        }
        let mut builder = CombinationBuilder::default();
        builder.update(&mut clc, &plcs, BuilderMessage::ToggleAvailable(0)).unwrap();
        assert!(builder.update(&mut clc, &plcs, BuilderMessage::Add).is_err());
        assert_eq!(builder.available_selected(), &[0]);
        assert_eq!(clc.cases.len(), MAX_CASES);
    }

    #[test]
    fn test_add_stops_at_capacity() {
        let names: Vec<String> = (1..=5).map(|i| format!("PLC {}", i)).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let plcs = primaries(&refs);
        let mut clc = LoadCaseGroup::new("C. Load Case 1");
        for i in 0..8 {
            clc.cases.push(LoadCase::new(format!("existing {}", i)));
        }
        let mut builder = CombinationBuilder::default();
        for i in 0..5 {
            builder.update(&mut clc, &plcs, BuilderMessage::ToggleAvailable(i)).unwrap();
        }
        builder.update(&mut clc, &plcs, BuilderMessage::Add).unwrap();
        assert_eq!(clc.cases.len(), MAX_CASES);
        assert_eq!(clc.cases[9].name, "1.0 * PLC 2");
        assert_eq!(builder.target_selected(), Some(9));
    }

    #[test]
    fn test_duplicate_names_skipped_within_batch() {
        let plcs = primaries(&["Dead", "Dead"]);
        let mut clc = LoadCaseGroup::new("C. Load Case 1");
        let mut builder = CombinationBuilder::default();
        builder.update(&mut clc, &plcs, BuilderMessage::ToggleAvailable(0)).unwrap();
        builder.update(&mut clc, &plcs, BuilderMessage::ToggleAvailable(1)).unwrap();
        builder.update(&mut clc, &plcs, BuilderMessage::Add).unwrap();
        assert_eq!(clc.cases.len(), 1);
    }

    #[test]
    fn test_all_duplicates_leave_target_untouched() {
        let plcs = primaries(&["Load A", "Load B"]);
        let mut clc = LoadCaseGroup::new("C. Load Case 1");
        clc.cases.push(LoadCase::new("1.0 * Load A"));
        clc.cases.push(LoadCase::new("0.9 * Load B"));
        let before = clc.clone();

        let mut builder = CombinationBuilder::default();
        builder.update(&mut clc, &plcs, BuilderMessage::SelectTarget(Some(0))).unwrap();
        builder.update(&mut clc, &plcs, BuilderMessage::ToggleAvailable(0)).unwrap();
        let event = builder.update(&mut clc, &plcs, BuilderMessage::Add).unwrap();

        assert_eq!(event, BuilderEvent::Added(Vec::new()));
        assert_eq!(clc, before);
        assert_eq!(builder.target_selected(), Some(0));
        assert!(builder.available_selected().is_empty());
    }

    #[test]
    fn test_delete_target_case() {
        let plcs = primaries(&["Dead", "Live"]);
        let mut clc = LoadCaseGroup::new("C. Load Case 1");
        let mut builder = CombinationBuilder::default();
        builder.update(&mut clc, &plcs, BuilderMessage::ToggleAvailable(0)).unwrap();
        builder.update(&mut clc, &plcs, BuilderMessage::ToggleAvailable(1)).unwrap();
        builder.update(&mut clc, &plcs, BuilderMessage::Add).unwrap();

        builder.update(&mut clc, &plcs, BuilderMessage::DeleteSelected).unwrap();
        assert_eq!(builder.target_selected(), Some(0));
        builder.update(&mut clc, &plcs, BuilderMessage::DeleteSelected).unwrap();
        assert_eq!(builder.target_selected(), None);
        assert!(builder.update(&mut clc, &plcs, BuilderMessage::DeleteSelected).is_err());
    }

    #[test]
    fn test_sync_drops_stale_primary_indices() {
        let plcs = primaries(&["Dead", "Live", "Wind"]);
        let mut clc = LoadCaseGroup::new("C. Load Case 1");
        let mut builder = CombinationBuilder::default();
        builder.update(&mut clc, &plcs, BuilderMessage::ToggleAvailable(2)).unwrap();
        builder.sync(Some(&clc), &plcs[..2]);
        assert!(builder.available_selected().is_empty());
    }
}
