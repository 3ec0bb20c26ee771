//! # List Selection
//!
//! Every list box in the load case editor is an ordered `Vec` plus a selection
//! pointer. Entries are identified by position only, so the selection has to be
//! re-validated after every change to the list. That re-validation is one
//! explicit transition, [`Selection::on_list_changed`], instead of being spread
//! over ad-hoc fix-ups.
//!
//! ```rust
//! use purlin_core::selection::SelectableList;
//!
//! let mut list: SelectableList<String> = SelectableList::new("Loads", 10);
//! list.push_with(|n| format!("Load {}", n + 1)).unwrap();
//! list.push_with(|n| format!("Load {}", n + 1)).unwrap();
//! assert_eq!(list.selected(), Some(1));
//!
//! list.remove_selected().unwrap();
//! assert_eq!(list.selected(), Some(0));
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{PurlinError, PurlinResult};

/// Single-selection pointer into a positional list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(Option<usize>);

impl Selection {
    /// Nothing selected
    pub const NONE: Selection = Selection(None);

    /// Select a specific index
    pub fn at(index: usize) -> Self {
        Selection(Some(index))
    }

    /// The selected index, if any
    pub fn index(&self) -> Option<usize> {
        self.0
    }

    /// True when nothing is selected
    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }

    /// Re-validate against a list of `len` entries.
    ///
    /// - empty list: nothing selected
    /// - nothing selected and the list has entries: first entry
    /// - selection past the end: last entry
    pub fn on_list_changed(self, len: usize) -> Self {
        match self.0 {
            _ if len == 0 => Selection::NONE,
            None => Selection::at(0),
            Some(index) if index >= len => Selection::at(len - 1),
            Some(_) => self,
        }
    }

    /// Selection after the entry at the current index was removed, leaving
    /// `remaining` entries: the entry just before it, or the new first entry.
    pub fn after_removal(self, remaining: usize) -> Self {
        match self.0 {
            Some(index) if remaining > 0 => Selection::at(index.saturating_sub(1)),
            _ => Selection::NONE,
        }
    }
}

impl From<Option<usize>> for Selection {
    fn from(index: Option<usize>) -> Self {
        Selection(index)
    }
}

/// Ordered, capacity-bounded list with a single selection.
///
/// Used for the primary/combined load case lists and (through
/// [`crate::loads::case_list`]) for the loads inside one case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectableList<T> {
    /// Display label, used in rejection messages
    label: String,
    items: Vec<T>,
    selection: Selection,
    capacity: usize,
}

impl<T> SelectableList<T> {
    /// Create an empty list that holds at most `capacity` entries
    pub fn new(label: impl Into<String>, capacity: usize) -> Self {
        SelectableList {
            label: label.into(),
            items: Vec::new(),
            selection: Selection::NONE,
            capacity,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// True once no further entry can be added
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Currently selected index
    pub fn selected(&self) -> Option<usize> {
        self.selection.index()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selected_item(&self) -> Option<&T> {
        self.selection.index().and_then(|i| self.items.get(i))
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Point the selection at `index` (or clear it).
    pub fn select(&mut self, index: Option<usize>) -> PurlinResult<()> {
        if let Some(i) = index {
            if i >= self.items.len() {
                return Err(PurlinError::invalid_input(
                    format!("{} selection", self.label),
                    i.to_string(),
                    format!("list has {} entries", self.items.len()),
                ));
            }
        }
        self.selection = index.into();
        Ok(())
    }

    /// Append an entry built from the current length and select it.
    ///
    /// Returns the index of the new entry. At capacity nothing changes.
    pub fn push_with(&mut self, make: impl FnOnce(usize) -> T) -> PurlinResult<usize> {
        if self.is_full() {
            debug!(list = %self.label, max = self.capacity, "add rejected, list is full");
            return Err(PurlinError::capacity_reached(&self.label, self.capacity));
        }
        let item = make(self.items.len());
        self.items.push(item);
        let index = self.items.len() - 1;
        self.selection = Selection::at(index);
        Ok(index)
    }

    /// Remove the selected entry and step the selection back by one.
    pub fn remove_selected(&mut self) -> PurlinResult<T> {
        let index = self
            .selection
            .index()
            .ok_or_else(|| PurlinError::no_selection(&self.label))?;
        if index >= self.items.len() {
            self.selection = self.selection.on_list_changed(self.items.len());
            return Err(PurlinError::no_selection(&self.label));
        }
        let removed = self.items.remove(index);
        self.selection = self.selection.after_removal(self.items.len());
        Ok(removed)
    }

    /// Mutate the selected entry in place.
    pub fn update_selected<R>(&mut self, edit: impl FnOnce(&mut T) -> PurlinResult<R>) -> PurlinResult<R> {
        let index = self
            .selection
            .index()
            .ok_or_else(|| PurlinError::no_selection(&self.label))?;
        let item = self
            .items
            .get_mut(index)
            .ok_or_else(|| PurlinError::no_selection(&self.label))?;
        edit(item)
    }

    /// Replace the whole list (external whole-list update) and re-sync the
    /// selection.
    pub fn replace_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.items.truncate(self.capacity);
        self.selection = self.selection.on_list_changed(self.items.len());
    }
}

/// Multi-selection over a positional list, in click order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MultiSelection(Vec<usize>);

impl MultiSelection {
    /// Toggle `index` in or out of the selection
    pub fn toggle(&mut self, index: usize) {
        if let Some(pos) = self.0.iter().position(|&i| i == index) {
            self.0.remove(pos);
        } else {
            self.0.push(index);
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Drop indices that no longer exist in a list of `len` entries
    pub fn retain_below(&mut self, len: usize) {
        self.0.retain(|&i| i < len);
    }
}
