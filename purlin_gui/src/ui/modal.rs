//! Modal dialog component
//!
//! The About dialog shown over the menu page. Focus is tracked in
//! `purlin_core::pages::MenuPage`; the focused button is drawn with the
//! primary style.

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use purlin_core::pages::menu::{APP_TAGLINE, APP_TITLE, APP_VERSION, COPYRIGHT};
use purlin_core::pages::MenuMessage;

use crate::Message;

/// Render a modal backdrop (semi-transparent overlay that catches clicks)
pub fn view_backdrop() -> Element<'static, Message> {
    button(Space::new())
        .on_press(Message::Menu(MenuMessage::CloseAbout))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_, _| {
            iced::widget::button::Style::default()
                .with_background(iced::Color::from_rgba(0.0, 0.0, 0.0, 0.5))
        })
        .into()
}

/// Render the About dialog. `focused` indexes its two buttons.
pub fn view_about(focused: usize) -> Element<'static, Message> {
    let style_for = |index: usize| if focused == index { button::primary } else { button::secondary };

    let buttons = row![
        button(text("Close").size(11))
            .on_press(Message::Menu(MenuMessage::CloseAbout))
            .padding(Padding::from([6, 16]))
            .style(style_for(0)),
        Space::new().width(8),
        button(text("OK").size(11))
            .on_press(Message::Menu(MenuMessage::CloseAbout))
            .padding(Padding::from([6, 16]))
            .style(style_for(1)),
    ]
    .align_y(Alignment::Center);

    let content = column![
        text(APP_TITLE).size(18),
        Space::new().height(8),
        text(APP_VERSION).size(12),
        text(APP_TAGLINE).size(12),
        Space::new().height(12),
        text(COPYRIGHT).size(10).color([0.5, 0.5, 0.5]),
        Space::new().height(20),
        container(buttons).align_x(iced::alignment::Horizontal::Right).width(Length::Fill),
    ]
    .width(Length::Fixed(400.0));

    let modal_box = container(content)
        .padding(20)
        .style(container::bordered_box);

    // Center the modal in the screen
    container(modal_box)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .into()
}
