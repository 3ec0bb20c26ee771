//! Load cases page
//!
//! Composes the PLC and CLC list managers, the case list of the selected PLC,
//! the combination builder for the selected CLC, and the nested load editors.
//! Load, axial and moving-load records are keyed by [`LoadId`] and are dropped
//! together with the load (or the whole group) they belong to.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::{PurlinError, PurlinResult};
use crate::loads::{
    AxialLoad, AxialMessage, BuilderMessage, CaseEvent, CaseListEditor, CaseMessage, CombinationBuilder, ListEvent,
    ListMessage, Load, LoadCaseGroup, LoadCaseKind, LoadCaseList, LoadId, LoadMessage, MovingLoad,
    MovingLoadMessage,
};

/// Which sub-editor is open beside the lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NestedEditor {
    /// Loads of the selected PLC
    Cases,
    LoadDetail(LoadId),
    Axial(LoadId),
    Moving(LoadId),
}

impl NestedEditor {
    pub fn load_id(&self) -> Option<LoadId> {
        match self {
            NestedEditor::Cases => None,
            NestedEditor::LoadDetail(id) | NestedEditor::Axial(id) | NestedEditor::Moving(id) => Some(*id),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadCasesMessage {
    KindSelected(LoadCaseKind),
    List(LoadCaseKind, ListMessage),
    Cases(CaseMessage),
    Builder(BuilderMessage),
    Load(LoadMessage),
    Axial(AxialMessage),
    Moving(MovingLoadMessage),
    OpenCaseEditor,
    /// Step back one level: load editors return to the case list, the case
    /// list closes
    CloseEditor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCasesPage {
    kind: LoadCaseKind,
    primary: LoadCaseList,
    combined: LoadCaseList,
    cases: CaseListEditor,
    builder: CombinationBuilder,
    loads: HashMap<LoadId, Load>,
    axial: HashMap<LoadId, AxialLoad>,
    moving: HashMap<LoadId, MovingLoad>,
    editor: Option<NestedEditor>,
}

impl Default for LoadCasesPage {
    fn default() -> Self {
        LoadCasesPage {
            kind: LoadCaseKind::default(),
            primary: LoadCaseList::new(LoadCaseKind::Primary),
            combined: LoadCaseList::new(LoadCaseKind::Combined),
            cases: CaseListEditor::default(),
            builder: CombinationBuilder::default(),
            loads: HashMap::new(),
            axial: HashMap::new(),
            moving: HashMap::new(),
            editor: None,
        }
    }
}

impl LoadCasesPage {
    // ========================================================================
    // Read access
    // ========================================================================

    pub fn kind(&self) -> LoadCaseKind {
        self.kind
    }

    pub fn list(&self, kind: LoadCaseKind) -> &LoadCaseList {
        match kind {
            LoadCaseKind::Primary => &self.primary,
            LoadCaseKind::Combined => &self.combined,
        }
    }

    pub fn primary(&self) -> &LoadCaseList {
        &self.primary
    }

    pub fn combined(&self) -> &LoadCaseList {
        &self.combined
    }

    pub fn cases(&self) -> &CaseListEditor {
        &self.cases
    }

    pub fn builder(&self) -> &CombinationBuilder {
        &self.builder
    }

    pub fn editor(&self) -> Option<NestedEditor> {
        self.editor
    }

    pub fn load(&self, id: LoadId) -> Option<&Load> {
        self.loads.get(&id)
    }

    pub fn axial(&self, id: LoadId) -> Option<&AxialLoad> {
        self.axial.get(&id)
    }

    pub fn moving(&self, id: LoadId) -> Option<&MovingLoad> {
        self.moving.get(&id)
    }

    /// Number of loads with detail records, for diagnostics
    pub fn load_count(&self) -> usize {
        self.loads.len()
    }

    /// Id of the load selected in the current PLC
    pub fn selected_load_id(&self) -> Option<LoadId> {
        self.primary
            .selected_group()
            .and_then(|group| self.cases.selected_id(group))
    }

    // ========================================================================
    // Update
    // ========================================================================

    pub fn update(&mut self, message: LoadCasesMessage) -> PurlinResult<()> {
        let result = self.dispatch(message);
        match &result {
            Ok(()) => self.sync(),
            Err(e) => debug!(error = %e, "load case edit rejected"),
        }
        result
    }

    fn dispatch(&mut self, message: LoadCasesMessage) -> PurlinResult<()> {
        match message {
            LoadCasesMessage::KindSelected(kind) => {
                self.kind = kind;
                self.editor = None;
                Ok(())
            }
            LoadCasesMessage::List(kind, message) => {
                let event = match kind {
                    LoadCaseKind::Primary => self.primary.update(message)?,
                    LoadCaseKind::Combined => self.combined.update(message)?,
                };
                self.on_list_event(kind, event);
                Ok(())
            }
            LoadCasesMessage::Cases(message) => {
                let event = self
                    .primary
                    .update_selected(|group| self.cases.update(group, message))?;
                self.on_case_event(event);
                Ok(())
            }
            LoadCasesMessage::Builder(message) => {
                let primaries = self.primary.groups();
                self.combined
                    .update_selected(|target| self.builder.update(target, primaries, message))?;
                Ok(())
            }
            LoadCasesMessage::Load(message) => match self.editor {
                Some(NestedEditor::LoadDetail(id)) => self.loads.entry(id).or_default().apply(message),
                _ => Err(PurlinError::no_selection("Load Detail")),
            },
            LoadCasesMessage::Axial(message) => match self.editor {
                Some(NestedEditor::Axial(id)) => {
                    self.axial.entry(id).or_default().apply(message);
                    Ok(())
                }
                _ => Err(PurlinError::no_selection("Axial Load")),
            },
            LoadCasesMessage::Moving(message) => match self.editor {
                Some(NestedEditor::Moving(id)) => self.moving.entry(id).or_default().apply(message),
                _ => Err(PurlinError::no_selection("Moving Load")),
            },
            LoadCasesMessage::OpenCaseEditor => {
                if self.primary.selected_group().is_none() {
                    return Err(PurlinError::no_selection(LoadCaseKind::Primary.list_title()));
                }
                self.editor = Some(NestedEditor::Cases);
                Ok(())
            }
            LoadCasesMessage::CloseEditor => {
                self.editor = match self.editor {
                    Some(NestedEditor::Cases) | None => None,
                    Some(_) => Some(NestedEditor::Cases),
                };
                Ok(())
            }
        }
    }

    fn on_list_event(&mut self, kind: LoadCaseKind, event: ListEvent) {
        match (kind, event) {
            (LoadCaseKind::Primary, ListEvent::Created(_)) => {
                self.cases.clear();
                self.editor = Some(NestedEditor::Cases);
            }
            (LoadCaseKind::Primary, ListEvent::Deleted(group)) => {
                self.cases.clear();
                self.purge_group(&group);
            }
            (LoadCaseKind::Primary, ListEvent::SelectionChanged(_)) => {
                self.cases.clear();
                self.editor = self.primary.selected_group().map(|_| NestedEditor::Cases);
            }
            (LoadCaseKind::Primary, ListEvent::Replaced) => {
                self.cases.clear();
                self.purge_missing();
            }
            (LoadCaseKind::Combined, ListEvent::Deleted(group)) => self.purge_group(&group),
            _ => {}
        }
    }

    fn on_case_event(&mut self, event: CaseEvent) {
        match event {
            CaseEvent::LoadCreated { id, .. } => {
                self.loads.insert(id, Load::default());
                self.editor = Some(NestedEditor::LoadDetail(id));
            }
            CaseEvent::LoadDeleted(case) => self.purge(case.id),
            CaseEvent::SelectionChanged(Some(_)) => {
                if let Some(id) = self.selected_load_id() {
                    self.loads.entry(id).or_default();
                    self.editor = Some(NestedEditor::LoadDetail(id));
                }
            }
            CaseEvent::SelectionChanged(None) => self.editor = Some(NestedEditor::Cases),
            CaseEvent::AxialRequested(id) => {
                self.axial.entry(id).or_default();
                self.editor = Some(NestedEditor::Axial(id));
            }
            CaseEvent::MovingRequested(id) => {
                self.moving.entry(id).or_default();
                self.editor = Some(NestedEditor::Moving(id));
            }
        }
    }

    fn purge(&mut self, id: LoadId) {
        self.loads.remove(&id);
        self.axial.remove(&id);
        self.moving.remove(&id);
    }

    /// Drop records whose load is no longer in any primary load case
    fn purge_missing(&mut self) {
        let live: HashSet<LoadId> = self
            .primary
            .groups()
            .iter()
            .flat_map(|group| group.cases.iter().map(|case| case.id))
            .collect();
        let before = self.loads.len();
        self.loads.retain(|id, _| live.contains(id));
        self.axial.retain(|id, _| live.contains(id));
        self.moving.retain(|id, _| live.contains(id));
        info!(discarded = before - self.loads.len(), "load case list replaced");
    }

    fn purge_group(&mut self, group: &LoadCaseGroup) {
        for case in &group.cases {
            self.purge(case.id);
        }
        info!(group = %group.name, loads = group.cases.len(), "load case data discarded");
    }

    /// Re-validate every selection and the open editor against the lists
    fn sync(&mut self) {
        let group = self.primary.selected_group();
        self.cases.sync(group);
        self.builder.sync(self.combined.selected_group(), self.primary.groups());

        self.editor = match self.editor {
            Some(NestedEditor::Cases) if group.is_none() => None,
            Some(editor) => match editor.load_id() {
                Some(id) if !group.is_some_and(|g| g.cases.iter().any(|c| c.id == id)) => {
                    group.map(|_| NestedEditor::Cases)
                }
                _ => Some(editor),
            },
            None => None,
        };
    }
}
