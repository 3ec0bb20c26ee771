//! # purlin_core - Purlin Design Data Entry
//!
//! `purlin_core` holds every record and editor behind the purlin design front
//! end: project details, span/support/bridging geometry, and the load case
//! editing state machine. The GUI and CLI only render state and forward
//! messages; all rules live here.
//!
//! ## Design Philosophy
//!
//! - **Reducers**: every editor is `update(&mut self, message) -> PurlinResult<Event>`
//! - **Rejections are values**: an invalid edit returns `Err` and leaves state untouched
//! - **JSON-First**: all records implement Serialize/Deserialize
//! - **No calculation**: the design engine is out of scope; "Calculate" is always disabled
//!
//! ## Quick Start
//!
//! ```rust
//! use purlin_core::loads::{CaseMessage, ListMessage, LoadCaseKind};
//! use purlin_core::pages::{LoadCasesMessage, LoadCasesPage, NestedEditor};
//!
//! let mut page = LoadCasesPage::default();
//! page.update(LoadCasesMessage::List(LoadCaseKind::Primary, ListMessage::Add)).unwrap();
//! page.update(LoadCasesMessage::Cases(CaseMessage::NewLoad)).unwrap();
//!
//! let id = page.selected_load_id().unwrap();
//! assert_eq!(page.editor(), Some(NestedEditor::LoadDetail(id)));
//!
//! let json = serde_json::to_string_pretty(&page).unwrap();
//! assert!(json.contains("P. Load Case 1"));
//! ```
//!
//! ## Modules
//!
//! - [`pages`] - Page containers that own state and apply messages
//! - [`loads`] - Load case lists, the combination builder and load detail editors
//! - [`geometry`] - Purlin/span selections and the per-span tables
//! - [`materials`] - Material catalogue and the asynchronous material service
//! - [`routes`] - Page routing; navigation resets the destination page
//! - [`selection`] - Single/multi selection over bounded lists
//! - [`config`] - Environment-driven settings
//! - [`errors`] - Structured error types

pub mod canvas;
pub mod config;
pub mod errors;
pub mod geometry;
pub mod input;
pub mod loads;
pub mod materials;
pub mod pages;
pub mod project;
pub mod routes;
pub mod selection;

// Re-export commonly used types at crate root for convenience
pub use config::AppConfig;
pub use errors::{PurlinError, PurlinResult};
pub use project::Project;
pub use routes::{Navigator, Page, Route};
