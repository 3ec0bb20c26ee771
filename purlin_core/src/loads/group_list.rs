//! Primary / combined load case list manager
//!
//! Holds up to [`MAX_GROUPS`] groups with a single selection. New groups are
//! named after their position (`"P. Load Case 3"`); deleting steps the
//! selection back to the previous entry.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::load_case::{GroupEdit, LoadCaseGroup, MAX_GROUPS};
use super::LoadCaseKind;
use crate::errors::PurlinResult;
use crate::selection::SelectableList;

#[derive(Debug, Clone, PartialEq)]
pub enum ListMessage {
    Add,
    DeleteSelected,
    Select(Option<usize>),
    EditSelected(GroupEdit),
    /// Whole-list replacement from outside the editor
    Replace(Vec<LoadCaseGroup>),
}

/// What a successful list message did
#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent {
    /// A group was appended at this index (the page opens its case editor)
    Created(usize),
    /// The selected group was removed
    Deleted(LoadCaseGroup),
    SelectionChanged(Option<usize>),
    Edited(usize),
    Replaced,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCaseList {
    kind: LoadCaseKind,
    groups: SelectableList<LoadCaseGroup>,
}

impl LoadCaseList {
    pub fn new(kind: LoadCaseKind) -> Self {
        LoadCaseList {
            kind,
            groups: SelectableList::new(kind.list_title(), MAX_GROUPS),
        }
    }

    pub fn kind(&self) -> LoadCaseKind {
        self.kind
    }

    pub fn groups(&self) -> &[LoadCaseGroup] {
        self.groups.items()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.groups.is_full()
    }

    pub fn selected(&self) -> Option<usize> {
        self.groups.selected()
    }

    pub fn selected_group(&self) -> Option<&LoadCaseGroup> {
        self.groups.selected_item()
    }

    /// Mutable access to the selected group for the nested case editors
    pub(crate) fn update_selected<R>(
        &mut self,
        edit: impl FnOnce(&mut LoadCaseGroup) -> PurlinResult<R>,
    ) -> PurlinResult<R> {
        self.groups.update_selected(edit)
    }

    pub fn update(&mut self, message: ListMessage) -> PurlinResult<ListEvent> {
        match message {
            ListMessage::Add => {
                let prefix = self.kind.name_prefix();
                let index = self
                    .groups
                    .push_with(|n| LoadCaseGroup::new(format!("{} {}", prefix, n + 1)))?;
                info!(kind = %self.kind, index, "load case created");
                Ok(ListEvent::Created(index))
            }
            ListMessage::DeleteSelected => {
                let removed = self.groups.remove_selected()?;
                info!(kind = %self.kind, name = %removed.name, "load case deleted");
                Ok(ListEvent::Deleted(removed))
            }
            ListMessage::Select(index) => {
                self.groups.select(index)?;
                Ok(ListEvent::SelectionChanged(index))
            }
            ListMessage::EditSelected(edit) => {
                let index = self.groups.selected();
                self.groups.update_selected(|group| group.apply(edit))?;
                Ok(ListEvent::Edited(index.unwrap_or_default()))
            }
            ListMessage::Replace(groups) => {
                self.groups.replace_items(groups);
                Ok(ListEvent::Replaced)
            }
        }
    }
}
