//! UI module for the Purlin Designer GUI
//!
//! # Layout
//! - `toolbar` - Application title and route navigation
//! - page body, one module per route: `home`, `project`, `load_cases`, `menu`
//! - `status_bar` - Current route and the last rejected edit
//! - `modal` - About dialog drawn over the menu page
//!
//! # Load Case Editors
//! - `load_editors` - Load detail, axial and moving load forms nested in the
//!   primary load case editor
//!
//! # Shared Components
//! - `shared/fields` - Labeled inputs and option rows
//! - `shared/plan` - Plan view canvas with zoom controls
//! - `shared/chart` - Sustainability bar chart

// Chrome
pub mod modal;
pub mod status_bar;
pub mod toolbar;

// Pages
pub mod home;
pub mod load_cases;
pub mod menu;
pub mod project;

// Load case children
pub mod load_editors;

// Shared components
pub mod shared;
