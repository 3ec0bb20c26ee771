//! Home page: materials dashboard
//!
//! Shows a sustainability bar chart and one card per material. The page starts
//! in [`MaterialsState::Loading`] and the front end feeds it the result of
//! [`crate::materials::load_materials`].

use serde::{Deserialize, Serialize};

use crate::materials::{Material, MaterialsState, SustainabilityBand};

pub const TITLE: &str = "Ex-Facta";
pub const SUBTITLE: &str = "Engineering Materials Selection Platform";
pub const WELCOME_HEADING: &str = "Welcome to Ex-Facta";
pub const WELCOME_TEXT: &str = "Discover and compare engineering materials for your next project. \
Our platform helps you make informed decisions based on real-world performance data, \
sustainability metrics, and cost analysis.";
pub const CHART_HEADING: &str = "Material Sustainability Comparison";
pub const FEATURED_HEADING: &str = "Featured Materials";

/// Selling points listed at the bottom of the page
pub const FEATURES: [(&str, &str); 3] = [
    (
        "Data-Driven Decisions",
        "Make informed choices based on comprehensive material data and real-world performance metrics.",
    ),
    (
        "Sustainability Focus",
        "Prioritize environmentally responsible materials with detailed sustainability assessments.",
    ),
    (
        "Expert Insights",
        "Access curated material recommendations from industry experts and engineering professionals.",
    ),
];

/// Properties shown per card
const CARD_PROPERTIES: usize = 2;
/// Use cases shown per card
const CARD_USE_CASES: usize = 3;

/// One bar of the sustainability chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartBar {
    pub label: String,
    pub value: f64,
    pub band: SustainabilityBand,
}

impl ChartBar {
    pub fn color_hex(&self) -> &'static str {
        self.band.color_hex()
    }
}

/// Text content of a material card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialCard {
    pub name: String,
    pub category: String,
    pub description: String,
    /// Formatted cost per unit
    pub cost: String,
    pub sustainability_score: u8,
    /// `(name, "value unit")`
    pub key_properties: Vec<(String, String)>,
    pub use_cases: Vec<String>,
}

impl MaterialCard {
    pub fn from_material(material: &Material) -> Self {
        MaterialCard {
            name: material.name.clone(),
            category: material.category.clone(),
            description: material.description.clone(),
            cost: format_currency(material.cost),
            sustainability_score: material.sustainability.score,
            key_properties: material
                .properties
                .iter()
                .take(CARD_PROPERTIES)
                .map(|p| (p.name.clone(), p.value_with_unit()))
                .collect(),
            use_cases: material.use_cases.iter().take(CARD_USE_CASES).cloned().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HomeMessage {
    MaterialsLoaded(MaterialsState),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HomePage {
    pub materials: MaterialsState,
}

impl HomePage {
    pub fn update(&mut self, message: HomeMessage) {
        match message {
            HomeMessage::MaterialsLoaded(state) => self.materials = state,
        }
    }

    pub fn chart_data(&self) -> Vec<ChartBar> {
        self.materials
            .materials()
            .iter()
            .map(|m| ChartBar {
                label: m.name.clone(),
                value: f64::from(m.sustainability.score),
                band: m.sustainability.band(),
            })
            .collect()
    }

    pub fn cards(&self) -> Vec<MaterialCard> {
        self.materials.materials().iter().map(MaterialCard::from_material).collect()
    }
}

/// Format a dollar amount as `$1,234.50`
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}
