//! Form field helpers

use iced::widget::{button, row, text, text_input, Row};
use iced::{Alignment, Element, Length, Padding};

use crate::Message;

/// Width of the label column in forms
pub const LABEL_WIDTH: f32 = 140.0;

/// Label plus text input; a disabled input shows its value but ignores typing.
pub fn labeled_input<'a>(
    label: &'a str,
    value: &str,
    enabled: bool,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text(label).size(11).width(Length::Fixed(LABEL_WIDTH)),
        text_input("", value)
            .on_input_maybe(enabled.then_some(on_change))
            .width(Length::Fill)
            .padding(4)
            .size(11),
    ]
    .align_y(Alignment::Center)
    .into()
}

/// One button per option, the current one highlighted (radio group)
pub fn option_row<'a, T>(
    options: &[T],
    current: Option<T>,
    label: impl Fn(&T) -> String,
    on_select: impl Fn(T) -> Message,
    enabled: bool,
) -> Row<'a, Message>
where
    T: Copy + PartialEq,
{
    let mut buttons = row![].spacing(4);
    for &option in options {
        let mut btn = button(text(label(&option)).size(11))
            .padding(Padding::from([4, 10]))
            .style(if current == Some(option) { button::primary } else { button::secondary });
        if enabled {
            btn = btn.on_press(on_select(option));
        }
        buttons = buttons.push(btn);
    }
    buttons
}

/// Muted helper text
pub fn hint(content: &str) -> Element<'_, Message> {
    text(content).size(10).color([0.5, 0.5, 0.5]).into()
}
