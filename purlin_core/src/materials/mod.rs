//! # Materials Catalogue
//!
//! Material records shown on the home dashboard, and the in-memory catalogue
//! that backs [`MaterialService`].
//!
//! ## Example
//!
//! ```rust
//! use purlin_core::materials::{catalogue, SustainabilityBand};
//!
//! let steel = &catalogue()[0];
//! assert_eq!(steel.name, "Recycled Steel");
//! assert_eq!(steel.sustainability.band(), SustainabilityBand::High);
//! ```

pub mod service;

pub use service::{load_materials, MaterialService, MaterialsState};

use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A property value is either a number or free text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Number(n) => write!(f, "{}", n),
            PropertyValue::Text(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperty {
    pub name: String,
    pub value: PropertyValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl MaterialProperty {
    fn numeric(name: &str, value: f64, unit: &str) -> Self {
        MaterialProperty {
            name: name.to_string(),
            value: PropertyValue::Number(value),
            unit: Some(unit.to_string()),
        }
    }

    /// `"400 MPa"`
    pub fn value_with_unit(&self) -> String {
        match &self.unit {
            Some(unit) => format!("{} {}", self.value, unit),
            None => self.value.to_string(),
        }
    }
}

/// Score thresholds used for the dashboard colours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SustainabilityBand {
    /// Score above 80
    High,
    /// Score above 60
    Medium,
    Low,
}

impl SustainabilityBand {
    pub fn from_score(score: u8) -> Self {
        if score > 80 {
            SustainabilityBand::High
        } else if score > 60 {
            SustainabilityBand::Medium
        } else {
            SustainabilityBand::Low
        }
    }

    /// Chart colour as a hex string
    pub fn color_hex(&self) -> &'static str {
        match self {
            SustainabilityBand::High => "#10b981",
            SustainabilityBand::Medium => "#f59e0b",
            SustainabilityBand::Low => "#ef4444",
        }
    }

    /// Chart colour as linear RGB components (0.0 - 1.0)
    pub fn color_rgb(&self) -> [f32; 3] {
        match self {
            SustainabilityBand::High => [0.063, 0.725, 0.506],
            SustainabilityBand::Medium => [0.961, 0.620, 0.043],
            SustainabilityBand::Low => [0.937, 0.267, 0.267],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SustainabilityRating {
    /// 0 - 100
    pub score: u8,
    pub factors: Vec<String>,
}

impl SustainabilityRating {
    pub fn band(&self) -> SustainabilityBand {
        SustainabilityBand::from_score(self.score)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub properties: Vec<MaterialProperty>,
    pub use_cases: Vec<String>,
    /// Cost per unit in dollars
    pub cost: f64,
    pub sustainability: SustainabilityRating,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

static CATALOGUE: Lazy<Vec<Material>> = Lazy::new(|| {
    vec![
        Material {
            id: "1".into(),
            name: "Recycled Steel".into(),
            category: "Metals".into(),
            description: "High-quality recycled steel with excellent structural properties".into(),
            properties: vec![
                MaterialProperty::numeric("Tensile Strength", 400.0, "MPa"),
                MaterialProperty::numeric("Density", 7.85, "g/cm³"),
                MaterialProperty::numeric("Yield Strength", 250.0, "MPa"),
            ],
            use_cases: strings(&["Building frames", "Bridges", "Industrial structures"]),
            cost: 800.0,
            sustainability: SustainabilityRating {
                score: 85,
                factors: strings(&["Recycled content", "Low carbon footprint", "Fully recyclable"]),
            },
        },
        Material {
            id: "2".into(),
            name: "Bamboo Composite".into(),
            category: "Natural Materials".into(),
            description: "Sustainable bamboo-based composite material for construction".into(),
            properties: vec![
                MaterialProperty::numeric("Compressive Strength", 40.0, "MPa"),
                MaterialProperty::numeric("Density", 0.6, "g/cm³"),
                MaterialProperty::numeric("Moisture Content", 8.0, "%"),
            ],
            use_cases: strings(&["Flooring", "Wall panels", "Furniture"]),
            cost: 450.0,
            sustainability: SustainabilityRating {
                score: 95,
                factors: strings(&["Renewable resource", "Carbon negative", "Biodegradable"]),
            },
        },
        Material {
            id: "3".into(),
            name: "High-Performance Concrete".into(),
            category: "Composites".into(),
            description: "Advanced concrete with enhanced durability and strength".into(),
            properties: vec![
                MaterialProperty::numeric("Compressive Strength", 80.0, "MPa"),
                MaterialProperty::numeric("Density", 2.4, "g/cm³"),
                MaterialProperty::numeric("Water Absorption", 2.0, "%"),
            ],
            use_cases: strings(&["Foundations", "High-rise buildings", "Infrastructure"]),
            cost: 120.0,
            sustainability: SustainabilityRating {
                score: 60,
                factors: strings(&["Long lifespan", "Local sourcing possible", "High embodied energy"]),
            },
        },
    ]
});

/// The built-in material catalogue
pub fn catalogue() -> &'static [Material] {
    &CATALOGUE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_contents() {
        let materials = catalogue();
        assert_eq!(materials.len(), 3);
        let scores: Vec<u8> = materials.iter().map(|m| m.sustainability.score).collect();
        assert_eq!(scores, vec![85, 95, 60]);
        assert_eq!(materials[2].cost, 120.0);
    }

    #[test]
    fn test_bands() {
        assert_eq!(SustainabilityBand::from_score(81), SustainabilityBand::High);
        assert_eq!(SustainabilityBand::from_score(80), SustainabilityBand::Medium);
        assert_eq!(SustainabilityBand::from_score(61), SustainabilityBand::Medium);
        assert_eq!(SustainabilityBand::from_score(60), SustainabilityBand::Low);
        assert_eq!(SustainabilityBand::High.color_hex(), "#10b981");
    }

    #[test]
    fn test_property_display() {
        let density = &catalogue()[0].properties[1];
        assert_eq!(density.value_with_unit(), "7.85 g/cm³");
        let text = MaterialProperty {
            name: "Finish".into(),
            value: PropertyValue::Text("Galvanised".into()),
            unit: None,
        };
        assert_eq!(text.value_with_unit(), "Galvanised");
    }

    #[test]
    fn test_wire_format() {
        let json = serde_json::to_value(&catalogue()[1]).unwrap();
        assert_eq!(json["useCases"][0], "Flooring");
        assert_eq!(json["properties"][0]["value"], 40.0);
    }
}
