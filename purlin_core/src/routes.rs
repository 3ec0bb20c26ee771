//! Page routing
//!
//! Navigation always builds the destination page from its defaults, so
//! nothing entered on a page survives leaving it.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{PurlinError, PurlinResult};
use crate::pages::{HomePage, LoadCasesPage, MenuEvent, MenuMessage, MenuPage, ProjectPage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Route {
    #[default]
    Home,
    Project,
    LoadCases,
    Menu,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Home, Route::Project, Route::LoadCases, Route::Menu];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Project => "/project",
            Route::LoadCases => "/loadCases",
            Route::Menu => "/menu",
        }
    }

    pub fn from_path(path: &str) -> PurlinResult<Self> {
        Route::ALL
            .into_iter()
            .find(|r| r.path() == path)
            .ok_or_else(|| PurlinError::invalid_input("route", path, "unknown page"))
    }

    /// Window title for the page
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Ex-Facta",
            Route::Project => "Project - Ex-Facta",
            Route::LoadCases => "Load Cases - Ex-Facta",
            Route::Menu => "Menu - Ex-Facta",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// The live page and its state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "page", content = "state", rename_all = "camelCase")]
pub enum Page {
    Home(HomePage),
    Project(ProjectPage),
    LoadCases(LoadCasesPage),
    Menu(MenuPage),
}

impl Page {
    pub fn fresh(route: Route) -> Self {
        match route {
            Route::Home => Page::Home(HomePage::default()),
            Route::Project => Page::Project(ProjectPage::default()),
            Route::LoadCases => Page::LoadCases(LoadCasesPage::default()),
            Route::Menu => Page::Menu(MenuPage::default()),
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Page::Home(_) => Route::Home,
            Page::Project(_) => Route::Project,
            Page::LoadCases(_) => Route::LoadCases,
            Page::Menu(_) => Route::Menu,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Navigator {
    page: Page,
}

impl Navigator {
    pub fn new(route: Route) -> Self {
        Navigator {
            page: Page::fresh(route),
        }
    }

    pub fn route(&self) -> Route {
        self.page.route()
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    /// Replace the current page with a fresh instance of `route`, even when
    /// it is the page already shown.
    pub fn navigate(&mut self, route: Route) {
        info!(from = %self.route(), to = %route, "navigate");
        self.page = Page::fresh(route);
    }

    pub fn navigate_path(&mut self, path: &str) -> PurlinResult<()> {
        let route = Route::from_path(path)?;
        self.navigate(route);
        Ok(())
    }

    /// Apply a menu message, following any navigation it asks for.
    /// Ignored when the menu is not the current page.
    pub fn menu(&mut self, message: MenuMessage) {
        let Page::Menu(menu) = &mut self.page else {
            return;
        };
        if let MenuEvent::Navigate(route) = menu.update(message) {
            self.navigate(route);
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Navigator::new(Route::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::{ListMessage, LoadCaseKind};
    use crate::pages::LoadCasesMessage;

    #[test]
    fn test_paths() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()).unwrap(), route);
        }
        assert!(Route::from_path("/settings").is_err());
    }

    #[test]
    fn test_navigation_resets_page() {
        let mut nav = Navigator::new(Route::LoadCases);
        if let Page::LoadCases(page) = nav.page_mut() {
            page.update(LoadCasesMessage::List(LoadCaseKind::Primary, ListMessage::Add))
                .unwrap();
        }

        nav.navigate(Route::LoadCases);
        match nav.page() {
            Page::LoadCases(page) => assert!(page.primary().is_empty()),
            other => panic!("unexpected page {:?}", other.route()),
        }
    }

    #[test]
    fn test_menu_navigates() {
        let mut nav = Navigator::new(Route::Menu);
        nav.menu(MenuMessage::Open(Route::Project));
        assert_eq!(nav.route(), Route::Project);

        // Not on the menu any more
        nav.menu(MenuMessage::Open(Route::Home));
        assert_eq!(nav.route(), Route::Project);
    }
}
