//! Raw text of numeric fields while they are being typed
//!
//! Page records only hold parsed numbers, so redrawing an input from its number
//! drops a trailing `.` or a lone `-` and the next keystroke lands on the wrong
//! text. Every accepted field edit leaves its text here and the view shows that
//! text for as long as it still reads as the stored value. Any other accepted
//! edit clears the buffer, since it may have reset the numbers behind it.

use std::collections::HashMap;

use purlin_core::geometry::{BridgingField, BridgingMessage, SpanMessage, SupportMessage};
use purlin_core::input::float_prefix;
use purlin_core::loads::{
    AxialMessage, Bound, GroupEdit, ListMessage, LoadCaseKind, LoadId, LoadMessage, LocationMessage,
    MovingLoadMessage,
};
use purlin_core::pages::{LoadCasesMessage, LoadCasesPage, ProjectMessage};

/// One numeric input on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    SpanCount,
    SpanLength(usize),
    SupportLeft(usize),
    SupportRight(usize),
    Bridging(usize, BridgingField),
    DeflectionLimit(LoadCaseKind, usize),
    Force(LoadId),
    Axial(LoadId),
    Location(LoadId, Bound),
    Width(LoadId),
    Pressure(LoadId),
    PurlinSpacing(LoadId),
    TestPositions(LoadId),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Drafts {
    fields: HashMap<FieldKey, String>,
}

impl Drafts {
    /// Text to show for `key` given the value the page stores
    pub fn text(&self, key: FieldKey, value: f64) -> String {
        match self.fields.get(&key) {
            // Text with no number yet ("", "-", ".") reads as whatever fallback was stored
            Some(raw) if float_prefix(raw).is_none_or(|typed| typed == value) => raw.clone(),
            _ => value.to_string(),
        }
    }

    /// Record the outcome of a page update. Rejected edits leave the buffer alone.
    pub fn after_edit(&mut self, field: Option<(FieldKey, String)>, accepted: bool) {
        if !accepted {
            return;
        }
        match field {
            Some((key, raw)) => {
                self.fields.insert(key, raw);
            }
            None => self.fields.clear(),
        }
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }
}

/// The numeric field a project page message types into, with its raw text
pub fn project_field(message: &ProjectMessage) -> Option<(FieldKey, String)> {
    let (key, raw) = match message {
        ProjectMessage::SpanCountChanged(raw) => (FieldKey::SpanCount, raw),
        ProjectMessage::Spans(SpanMessage::LengthChanged(i, raw)) => (FieldKey::SpanLength(*i), raw),
        ProjectMessage::Supports(SupportMessage::LeftPercentageChanged(i, raw)) => (FieldKey::SupportLeft(*i), raw),
        ProjectMessage::Supports(SupportMessage::RightPercentageChanged(i, raw)) => {
            (FieldKey::SupportRight(*i), raw)
        }
        ProjectMessage::Bridging(BridgingMessage::FieldChanged(i, field, raw)) => {
            (FieldKey::Bridging(*i, *field), raw)
        }
        _ => return None,
    };
    Some((key, raw.clone()))
}

/// The numeric field a load cases message types into, with its raw text.
/// Load fields are keyed by the load whose editor is open.
pub fn load_cases_field(page: &LoadCasesPage, message: &LoadCasesMessage) -> Option<(FieldKey, String)> {
    let load = page.editor().and_then(|editor| editor.load_id());
    let (key, raw) = match message {
        LoadCasesMessage::List(kind, ListMessage::EditSelected(GroupEdit::SetDeflectionLimit(raw))) => {
            (FieldKey::DeflectionLimit(*kind, page.list(*kind).selected()?), raw)
        }
        LoadCasesMessage::Load(LoadMessage::ForceChanged(raw)) => (FieldKey::Force(load?), raw),
        LoadCasesMessage::Axial(AxialMessage::ValueChanged(raw)) => (FieldKey::Axial(load?), raw),
        LoadCasesMessage::Moving(message) => {
            let id = load?;
            match message {
                MovingLoadMessage::Location(bound, LocationMessage::LengthChanged(raw)) => {
                    (FieldKey::Location(id, *bound), raw)
                }
                MovingLoadMessage::WidthChanged(raw) => (FieldKey::Width(id), raw),
                MovingLoadMessage::PressureChanged(raw) => (FieldKey::Pressure(id), raw),
                MovingLoadMessage::PurlinSpacingChanged(raw) => (FieldKey::PurlinSpacing(id), raw),
                MovingLoadMessage::TestPositionsChanged(raw) => (FieldKey::TestPositions(id), raw),
                _ => return None,
            }
        }
        _ => return None,
    };
    Some((key, raw.clone()))
}
