//! Menu page: app header and footer, navigation entries and the About dialog
//!
//! While the About dialog is open, keyboard focus cycles through the dialog's
//! own controls and the page behind it does not scroll.

use serde::{Deserialize, Serialize};

use crate::routes::Route;

pub const APP_TITLE: &str = "EX-facta™ design software";
pub const APP_VERSION: &str = "Version 1.5.3";
pub const APP_TAGLINE: &str = "exclusively for Stramit Exacta® purlins and Stramit® Bridging";
pub const COPYRIGHT: &str = "© Copyright Stramit Corporation Pty Ltd October 2018";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub label: &'static str,
    pub route: Route,
}

pub const MENU_ENTRIES: [MenuEntry; 2] = [
    MenuEntry {
        label: "Project",
        route: Route::Project,
    },
    MenuEntry {
        label: "Load Cases",
        route: Route::LoadCases,
    },
];

/// Cyclic keyboard focus over a fixed number of controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusTrap {
    len: usize,
    focused: usize,
}

impl FocusTrap {
    /// A trap over `len` controls, focusing the first. `len` of 0 is treated as 1.
    pub fn new(len: usize) -> Self {
        FocusTrap {
            len: len.max(1),
            focused: 0,
        }
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    /// Tab
    pub fn next(&mut self) {
        self.focused = (self.focused + 1) % self.len;
    }

    /// Shift+Tab
    pub fn previous(&mut self) {
        self.focused = (self.focused + self.len - 1) % self.len;
    }
}

/// About dialog controls: the close button and the acknowledgement button
const ABOUT_CONTROLS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuMessage {
    Open(Route),
    ShowAbout,
    CloseAbout,
    FocusNext,
    FocusPrevious,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    Navigate(Route),
    None,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuPage {
    about: Option<FocusTrap>,
}

impl MenuPage {
    pub fn about_open(&self) -> bool {
        self.about.is_some()
    }

    pub fn about_focus(&self) -> Option<usize> {
        self.about.map(|trap| trap.focused())
    }

    /// Background scrolling is locked while a dialog is open
    pub fn scroll_locked(&self) -> bool {
        self.about_open()
    }

    pub fn update(&mut self, message: MenuMessage) -> MenuEvent {
        match message {
            MenuMessage::Open(route) if !self.about_open() => return MenuEvent::Navigate(route),
            MenuMessage::Open(_) => {}
            MenuMessage::ShowAbout => self.about = Some(FocusTrap::new(ABOUT_CONTROLS)),
            MenuMessage::CloseAbout => self.about = None,
            MenuMessage::FocusNext => {
                if let Some(trap) = self.about.as_mut() {
                    trap.next();
                }
            }
            MenuMessage::FocusPrevious => {
                if let Some(trap) = self.about.as_mut() {
                    trap.previous();
                }
            }
        }
        MenuEvent::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_wraps() {
        let mut trap = FocusTrap::new(3);
        trap.previous();
        assert_eq!(trap.focused(), 2);
        trap.next();
        assert_eq!(trap.focused(), 0);
        trap.next();
        trap.next();
        trap.next();
        assert_eq!(trap.focused(), 0);
    }

    #[test]
    fn test_about_dialog_locks_page() {
        let mut menu = MenuPage::default();
        assert!(!menu.scroll_locked());
        assert_eq!(menu.update(MenuMessage::Open(Route::Project)), MenuEvent::Navigate(Route::Project));

        menu.update(MenuMessage::ShowAbout);
        assert!(menu.scroll_locked());
        assert_eq!(menu.update(MenuMessage::Open(Route::LoadCases)), MenuEvent::None);

        menu.update(MenuMessage::FocusNext);
        assert_eq!(menu.about_focus(), Some(1));
        menu.update(MenuMessage::FocusNext);
        assert_eq!(menu.about_focus(), Some(0));

        menu.update(MenuMessage::CloseAbout);
        assert!(!menu.about_open());
        assert_eq!(menu.about_focus(), None);
    }

    #[test]
    fn test_entries_link_to_pages() {
        let routes: Vec<Route> = MENU_ENTRIES.iter().map(|e| e.route).collect();
        assert_eq!(routes, vec![Route::Project, Route::LoadCases]);
    }
}
