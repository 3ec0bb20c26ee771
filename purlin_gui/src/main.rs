//! # Purlin Designer GUI Application
//!
//! Desktop front end for the purlin design data-entry pages. Built with Iced;
//! every page's state lives in `purlin_core` and this crate only renders it and
//! forwards widget messages.
//!
//! ## Configuration
//!
//! Settings come from `PURLIN_*` environment variables (see
//! `purlin_core::config`). `RUST_LOG` overrides the configured log filter.

mod drafts;
mod ui;

use iced::widget::{column, container, stack};
use iced::{event, keyboard, window, Element, Event, Length, Subscription, Task};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use purlin_core::materials::{load_materials, MaterialService};
use purlin_core::pages::{HomeMessage, LoadCasesMessage, MenuMessage, ProjectMessage};
use purlin_core::{AppConfig, Navigator, Page, PurlinResult, Route};

use drafts::Drafts;

// ============================================================================
// Messages
// ============================================================================

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Route),
    Home(HomeMessage),
    Project(ProjectMessage),
    LoadCases(LoadCasesMessage),
    Menu(MenuMessage),
}

// ============================================================================
// Application State
// ============================================================================

pub struct App {
    nav: Navigator,
    config: AppConfig,
    /// Last rejected edit, shown in the status bar
    status: String,
    /// Typed text of numeric inputs
    drafts: Drafts,
}

impl App {
    fn new(config: AppConfig) -> (Self, Task<Message>) {
        let app = App {
            nav: Navigator::default(),
            config,
            status: String::new(),
            drafts: Drafts::default(),
        };
        let task = app.enter_page();
        (app, task)
    }

    fn title(&self) -> String {
        self.nav.route().title().to_string()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(route) => {
                self.nav.navigate(route);
                self.status.clear();
                self.drafts.clear();
                return self.enter_page();
            }
            Message::Home(msg) => {
                // A fetch can finish after the user has left the home page
                if let Page::Home(page) = self.nav.page_mut() {
                    page.update(msg);
                }
            }
            Message::Project(msg) => {
                if let Page::Project(page) = self.nav.page_mut() {
                    let field = drafts::project_field(&msg);
                    let result = page.update(msg);
                    self.drafts.after_edit(field, result.is_ok());
                    self.report(result);
                }
            }
            Message::LoadCases(msg) => {
                if let Page::LoadCases(page) = self.nav.page_mut() {
                    let field = drafts::load_cases_field(page, &msg);
                    let result = page.update(msg);
                    self.drafts.after_edit(field, result.is_ok());
                    self.report(result);
                }
            }
            Message::Menu(msg) => {
                let before = self.nav.route();
                self.nav.menu(msg);
                if self.nav.route() != before {
                    self.status.clear();
                    self.drafts.clear();
                    return self.enter_page();
                }
            }
        }
        Task::none()
    }

    /// Work to start when a page is (re)built
    fn enter_page(&self) -> Task<Message> {
        match self.nav.route() {
            Route::Home => {
                let service = MaterialService::from_config(&self.config);
                Task::perform(load_materials(service), |state| {
                    Message::Home(HomeMessage::MaterialsLoaded(state))
                })
            }
            _ => Task::none(),
        }
    }

    fn report(&mut self, result: PurlinResult<()>) {
        match result {
            Ok(()) => self.status.clear(),
            Err(e) => {
                debug!(code = e.error_code(), "edit rejected");
                self.status = e.to_string();
            }
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        match self.nav.page() {
            Page::Menu(menu) if menu.about_open() => event::listen_with(dialog_keys),
            _ => Subscription::none(),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let body: Element<'_, Message> = match self.nav.page() {
            Page::Home(page) => ui::home::view(page),
            Page::Project(page) => ui::project::view(page, &self.drafts),
            Page::LoadCases(page) => ui::load_cases::view(page, &self.drafts),
            Page::Menu(_) => ui::menu::view(),
        };

        let content = column![
            ui::toolbar::view_toolbar(self.nav.route()),
            container(body).width(Length::Fill).height(Length::Fill).padding(10),
            ui::status_bar::view_status_bar(self.nav.route(), &self.status),
        ]
        .padding(8);

        match self.nav.page() {
            Page::Menu(menu) if menu.about_open() => stack![
                content,
                ui::modal::view_backdrop(),
                ui::modal::view_about(menu.about_focus().unwrap_or(0)),
            ]
            .into(),
            _ => content.into(),
        }
    }
}

/// Tab / Shift+Tab cycle focus inside the open dialog, Escape closes it
fn dialog_keys(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    let Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = event else {
        return None;
    };
    match key {
        keyboard::Key::Named(keyboard::key::Named::Tab) if modifiers.shift() => {
            Some(Message::Menu(MenuMessage::FocusPrevious))
        }
        keyboard::Key::Named(keyboard::key::Named::Tab) => Some(Message::Menu(MenuMessage::FocusNext)),
        keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Message::Menu(MenuMessage::CloseAbout)),
        _ => None,
    }
}

fn init_tracing(config: &AppConfig) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

pub fn main() -> iced::Result {
    let (config, config_error) = match AppConfig::from_env() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    init_tracing(&config);
    if let Some(e) = config_error {
        warn!(error = %e, "invalid configuration, using defaults");
    }
    info!(latency_ms = config.material_latency_ms, "starting Purlin Designer");

    let window_size = (config.window_width, config.window_height);
    iced::application(move || App::new(config.clone()), App::update, App::view)
        .title(App::title)
        .subscription(App::subscription)
        .window_size(window_size)
        .run()
}
