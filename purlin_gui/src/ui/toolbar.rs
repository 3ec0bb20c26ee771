//! Toolbar component
//!
//! App title plus one button per page. Pressing the button of the current page
//! rebuilds it from defaults.

use iced::widget::{button, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use purlin_core::pages::home::TITLE;
use purlin_core::Route;

use crate::Message;

fn route_label(route: Route) -> &'static str {
    match route {
        Route::Home => "Home",
        Route::Project => "Project",
        Route::LoadCases => "Load Cases",
        Route::Menu => "Menu",
    }
}

/// Render the toolbar with page navigation
pub fn view_toolbar(current: Route) -> Element<'static, Message> {
    let mut nav_buttons = row![].spacing(4);
    for route in Route::ALL {
        nav_buttons = nav_buttons.push(
            button(text(route_label(route)).size(11))
                .on_press(Message::Navigate(route))
                .padding(Padding::from([4, 8]))
                .style(if route == current { button::primary } else { button::secondary }),
        );
    }

    row![
        text(TITLE).size(24),
        Space::new().width(Length::Fill),
        nav_buttons,
    ]
    .padding(Padding::from([4, 0]))
    .align_y(Alignment::Center)
    .into()
}
