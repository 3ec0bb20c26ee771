//! Status Bar (Bottom)
//!
//! Current page path on the left, the last rejected edit on the right.

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use purlin_core::Route;

use crate::Message;

pub fn view_status_bar(route: Route, status: &str) -> Element<'_, Message> {
    row![
        text(route.path()).size(10),
        Space::new().width(Length::Fill),
        text(status).size(10).color([0.6, 0.3, 0.0]),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
