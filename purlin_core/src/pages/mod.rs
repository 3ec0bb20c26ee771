//! Page containers
//!
//! Each page owns all state for its screen and applies messages from its
//! widgets. Nothing is shared between pages; see [`crate::routes`].

pub mod home;
pub mod load_cases_page;
pub mod menu;
pub mod project_page;

pub use home::{HomeMessage, HomePage};
pub use load_cases_page::{LoadCasesMessage, LoadCasesPage, NestedEditor};
pub use menu::{FocusTrap, MenuEvent, MenuMessage, MenuPage};
pub use project_page::{ProjectMessage, ProjectPage};
