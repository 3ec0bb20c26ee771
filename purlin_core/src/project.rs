//! # Project Details
//!
//! The `Project` record holds what the project form captures: a name and a
//! free-text description. The session timestamps are kept alongside so the
//! CLI snapshot shows when the data was entered; nothing is saved to disk.
//!
//! ```rust
//! use purlin_core::project::{Project, ProjectFormMessage};
//!
//! let mut project = Project::new();
//! project.apply(ProjectFormMessage::NameChanged("Warehouse 4".into()));
//! assert_eq!(project.name, "Warehouse 4");
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,

    /// When this page session started
    pub created: DateTime<Utc>,

    /// Last edit through the form
    pub modified: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProjectFormMessage {
    NameChanged(String),
    DescriptionChanged(String),
}

impl Project {
    /// Blank project with both timestamps set to now
    pub fn new() -> Self {
        let now = Utc::now();
        Project {
            name: String::new(),
            description: String::new(),
            created: now,
            modified: now,
        }
    }

    pub fn apply(&mut self, message: ProjectFormMessage) {
        match message {
            ProjectFormMessage::NameChanged(name) => self.name = name,
            ProjectFormMessage::DescriptionChanged(description) => self.description = description,
        }
        self.touch();
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.modified = Utc::now();
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_project_is_blank() {
        let project = Project::new();
        assert!(project.name.is_empty());
        assert!(project.description.is_empty());
        assert_eq!(project.created, project.modified);
    }

    #[test]
    fn test_form_edits_touch() {
        let mut project = Project::new();
        let created = project.created;
        project.apply(ProjectFormMessage::DescriptionChanged("Two bay shed".into()));
        assert_eq!(project.description, "Two bay shed");
        assert!(project.modified >= created);
        assert_eq!(project.created, created);
    }

    #[test]
    fn test_serialization() {
        let mut project = Project::new();
        project.apply(ProjectFormMessage::NameChanged("Depot".into()));
        let json = serde_json::to_string(&project).unwrap();
        let parsed: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, project);
    }
}
