//! Menu page: app header, page links and footer

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use purlin_core::pages::menu::{APP_TAGLINE, APP_TITLE, APP_VERSION, COPYRIGHT, MENU_ENTRIES};
use purlin_core::pages::MenuMessage;

use crate::Message;

pub fn view() -> Element<'static, Message> {
    let header = column![
        text(APP_TITLE).size(28),
        text(APP_VERSION).size(18),
        text(APP_TAGLINE).size(13),
    ]
    .spacing(4)
    .align_x(Alignment::Center);

    let mut entries = column![].spacing(8).align_x(Alignment::Center);
    for entry in MENU_ENTRIES {
        entries = entries.push(
            button(text(entry.label).size(13))
                .on_press(Message::Menu(MenuMessage::Open(entry.route)))
                .padding(Padding::from([8, 24]))
                .width(Length::Fixed(200.0))
                .style(button::primary),
        );
    }
    entries = entries.push(
        button(text("About").size(13))
            .on_press(Message::Menu(MenuMessage::ShowAbout))
            .padding(Padding::from([8, 24]))
            .width(Length::Fixed(200.0))
            .style(button::secondary),
    );

    let footer = row![text(COPYRIGHT).size(11), Space::new().width(Length::Fill)];

    column![
        container(header).width(Length::Fill).align_x(iced::alignment::Horizontal::Center),
        container(entries)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(iced::alignment::Horizontal::Center)
            .align_y(iced::alignment::Vertical::Center),
        footer,
    ]
    .into()
}
