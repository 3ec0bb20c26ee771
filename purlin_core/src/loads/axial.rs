//! Axial load attached to an individual load

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::input::parse_float_or;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AxialKind {
    #[default]
    Tension,
    Compression,
}

impl AxialKind {
    pub const ALL: [AxialKind; 2] = [AxialKind::Tension, AxialKind::Compression];

    pub fn label(&self) -> &'static str {
        match self {
            AxialKind::Tension => "Tension",
            AxialKind::Compression => "Compression",
        }
    }
}

impl fmt::Display for AxialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Axial force in kN
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AxialLoad {
    pub value: f64,
    pub kind: AxialKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AxialMessage {
    ValueChanged(String),
    KindSelected(AxialKind),
}

impl AxialLoad {
    pub fn apply(&mut self, message: AxialMessage) {
        match message {
            AxialMessage::ValueChanged(text) => self.value = parse_float_or(&text, 0.0),
            AxialMessage::KindSelected(kind) => self.kind = kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axial_edits() {
        let mut axial = AxialLoad::default();
        assert_eq!(axial.kind, AxialKind::Tension);

        axial.apply(AxialMessage::ValueChanged("12.5".into()));
        axial.apply(AxialMessage::KindSelected(AxialKind::Compression));
        assert_eq!(axial.value, 12.5);
        assert_eq!(axial.kind, AxialKind::Compression);

        axial.apply(AxialMessage::ValueChanged("".into()));
        assert_eq!(axial.value, 0.0);
    }
}
