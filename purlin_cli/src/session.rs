//! Script session: the navigator plus the runtime used for material fetches

use purlin_core::materials::{load_materials, MaterialService};
use purlin_core::pages::{HomeMessage, LoadCasesMessage};
use purlin_core::{AppConfig, Navigator, Page, PurlinError, PurlinResult};
use tracing::{debug, info};

use crate::script::Action;

/// What the driver should do after a command
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Continue,
    /// Text to print on stdout
    Print(String),
    Quit,
}

pub struct Session {
    nav: Navigator,
    service: MaterialService,
    runtime: tokio::runtime::Runtime,
}

impl Session {
    pub fn new(config: &AppConfig) -> PurlinResult<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .map_err(|e| PurlinError::Internal {
                message: format!("failed to start runtime: {}", e),
            })?;
        Ok(Session {
            nav: Navigator::default(),
            service: MaterialService::from_config(config),
            runtime,
        })
    }

    pub fn page(&self) -> &Page {
        self.nav.page()
    }

    pub fn run(&mut self, action: Action) -> PurlinResult<Outcome> {
        match action {
            Action::Go(route) => {
                self.nav.navigate(route);
                Ok(Outcome::Continue)
            }
            Action::State => Ok(Outcome::Print(serde_json::to_string_pretty(self.nav.page())?)),
            Action::Materials => self.fetch_materials(),
            Action::Help => Ok(Outcome::Print(crate::script::HELP.to_string())),
            Action::Quit => Ok(Outcome::Quit),
            Action::Project(message) => match self.nav.page_mut() {
                Page::Project(page) => page.update(message).map(|()| Outcome::Continue),
                other => Err(wrong_page(other, "/project")),
            },
            Action::LoadCases(message) => match self.nav.page_mut() {
                Page::LoadCases(page) => {
                    // List commands target whichever list the kind selector shows
                    let message = match message {
                        LoadCasesMessage::List(_, edit) => LoadCasesMessage::List(page.kind(), edit),
                        other => other,
                    };
                    page.update(message).map(|()| Outcome::Continue)
                }
                other => Err(wrong_page(other, "/loadCases")),
            },
            Action::Menu(message) => match self.nav.page() {
                Page::Menu(_) => {
                    self.nav.menu(message);
                    Ok(Outcome::Continue)
                }
                other => Err(wrong_page(other, "/menu")),
            },
        }
    }

    fn fetch_materials(&mut self) -> PurlinResult<Outcome> {
        match self.nav.page_mut() {
            Page::Home(page) => {
                debug!(latency_ms = self.service.latency().as_millis() as u64, "fetching materials");
                let state = self.runtime.block_on(load_materials(self.service.clone()));
                page.update(HomeMessage::MaterialsLoaded(state));
                info!(count = page.materials.materials().len(), "materials loaded");
                Ok(Outcome::Print(serde_json::to_string_pretty(&page.materials)?))
            }
            other => Err(wrong_page(other, "/")),
        }
    }
}

fn wrong_page(page: &Page, needed: &str) -> PurlinError {
    PurlinError::invalid_input("page", page.route().path(), format!("command needs the {} page", needed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::parse_line;
    use pretty_assertions::assert_eq;
    use purlin_core::Route;

    fn session() -> Session {
        let config = AppConfig {
            material_latency_ms: 0,
            ..AppConfig::default()
        };
        Session::new(&config).unwrap()
    }

    fn run(session: &mut Session, line: &str) -> PurlinResult<Outcome> {
        let action = parse_line(line)?.unwrap();
        session.run(action)
    }

    #[test]
    fn test_load_case_script() {
        let mut s = session();
        for line in ["go /loadCases", "list add", "list rename Dead", "case new", "load type point", "load force 2.5"] {
            run(&mut s, line).unwrap();
        }

        let Page::LoadCases(page) = s.page() else {
            panic!("expected load cases page");
        };
        assert_eq!(page.primary().groups()[0].name, "Dead");
        let id = page.selected_load_id().unwrap();
        assert_eq!(page.load(id).unwrap().force, 2.5);
    }

    #[test]
    fn test_list_commands_follow_kind_selector() {
        let mut s = session();
        for line in ["go /loadCases", "kind clc", "list add"] {
            run(&mut s, line).unwrap();
        }
        let Page::LoadCases(page) = s.page() else {
            panic!("expected load cases page");
        };
        assert_eq!(page.primary().len(), 0);
        assert_eq!(page.combined().len(), 1);
    }

    #[test]
    fn test_command_on_wrong_page() {
        let mut s = session();
        let err = run(&mut s, "spans 3").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert_eq!(s.page().route(), Route::Home);
    }

    #[test]
    fn test_rejection_leaves_state() {
        let mut s = session();
        run(&mut s, "go /project").unwrap();
        let before = s.page().clone();
        let err = run(&mut s, "support 1 lap yes").unwrap_err();
        assert_eq!(err.error_code(), "FIELD_DISABLED");
        assert_eq!(s.page(), &before);
    }

    #[test]
    fn test_materials_and_state() {
        let mut s = session();
        let Outcome::Print(json) = run(&mut s, "materials").unwrap() else {
            panic!("expected output");
        };
        assert!(json.contains("\"status\": \"Loaded\""));

        let Outcome::Print(state) = run(&mut s, "state").unwrap() else {
            panic!("expected output");
        };
        assert!(state.contains("\"page\": \"home\""));
    }

    #[test]
    fn test_menu_navigation() {
        let mut s = session();
        run(&mut s, "go /menu").unwrap();
        run(&mut s, "menu open /project").unwrap();
        assert_eq!(s.page().route(), Route::Project);
        assert_eq!(run(&mut s, "quit").unwrap(), Outcome::Quit);
    }
}
