//! Shared UI components reusable across the page views
//!
//! Contains:
//! - `fields` - labelled inputs and option rows
//! - `plan` - plan view canvas with zoom controls
//! - `chart` - sustainability bar chart canvas

pub mod chart;
pub mod fields;
pub mod plan;
