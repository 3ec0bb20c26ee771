//! Loads inside one primary load case
//!
//! The case list does not own its group: the page hands in the currently
//! selected [`LoadCaseGroup`] together with each message, and the editor keeps
//! only the selection into that group's cases.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::load_case::{LoadCase, LoadCaseGroup, LoadId, MAX_CASES};
use crate::errors::{PurlinError, PurlinResult};
use crate::selection::Selection;

const LIST_LABEL: &str = "Loads in this Load Case";

#[derive(Debug, Clone, PartialEq)]
pub enum CaseMessage {
    NewLoad,
    DeleteSelected,
    Select(Option<usize>),
    AddAxialLoad,
    EditMovingLoad,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CaseEvent {
    LoadCreated { index: usize, id: LoadId },
    LoadDeleted(LoadCase),
    SelectionChanged(Option<usize>),
    /// Open the axial load editor for this load
    AxialRequested(LoadId),
    /// Open the moving load editor for this load
    MovingRequested(LoadId),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseListEditor {
    selection: Selection,
}

impl CaseListEditor {
    pub fn selected(&self) -> Option<usize> {
        self.selection.index()
    }

    /// Forget the selection when a different group is shown
    pub(crate) fn clear(&mut self) {
        self.selection = Selection::NONE;
    }

    /// Re-validate the selection after the group (or the group's cases) changed
    pub fn sync(&mut self, group: Option<&LoadCaseGroup>) {
        let len = group.map(|g| g.cases.len()).unwrap_or(0);
        self.selection = self.selection.on_list_changed(len);
    }

    pub fn selected_id(&self, group: &LoadCaseGroup) -> Option<LoadId> {
        self.selection
            .index()
            .and_then(|i| group.cases.get(i))
            .map(|c| c.id)
    }

    pub fn update(&mut self, group: &mut LoadCaseGroup, message: CaseMessage) -> PurlinResult<CaseEvent> {
        match message {
            CaseMessage::NewLoad => {
                let case = push_case(group, |n| format!("Load {}", n + 1))?;
                let index = group.cases.len() - 1;
                self.selection = Selection::at(index);
                Ok(CaseEvent::LoadCreated { index, id: case })
            }
            CaseMessage::DeleteSelected => {
                let removed = remove_selected_case(group, &mut self.selection)?;
                Ok(CaseEvent::LoadDeleted(removed))
            }
            CaseMessage::Select(index) => {
                if matches!(index, Some(i) if i >= group.cases.len()) {
                    return Err(PurlinError::invalid_input(
                        "load selection",
                        format!("{:?}", index),
                        "no such load",
                    ));
                }
                self.selection = index.into();
                Ok(CaseEvent::SelectionChanged(index))
            }
            CaseMessage::AddAxialLoad => self
                .selected_id(group)
                .map(CaseEvent::AxialRequested)
                .ok_or_else(|| PurlinError::no_selection(LIST_LABEL)),
            CaseMessage::EditMovingLoad => self
                .selected_id(group)
                .map(CaseEvent::MovingRequested)
                .ok_or_else(|| PurlinError::no_selection(LIST_LABEL)),
        }
    }
}

/// Append a named case to `group`, refusing once it holds [`MAX_CASES`].
pub(crate) fn push_case(group: &mut LoadCaseGroup, name: impl FnOnce(usize) -> String) -> PurlinResult<LoadId> {
    if group.is_full() {
        debug!(group = %group.name, "case list is full");
        return Err(PurlinError::capacity_reached(LIST_LABEL, MAX_CASES));
    }
    let case = LoadCase::new(name(group.cases.len()));
    let id = case.id;
    group.cases.push(case);
    Ok(id)
}

/// Remove the case under `selection`, stepping the selection back by one.
pub(crate) fn remove_selected_case(group: &mut LoadCaseGroup, selection: &mut Selection) -> PurlinResult<LoadCase> {
    let index = selection
        .index()
        .filter(|&i| i < group.cases.len())
        .ok_or_else(|| PurlinError::no_selection(LIST_LABEL))?;
    let removed = group.cases.remove(index);
    *selection = selection.after_removal(group.cases.len());
    Ok(removed)
}
