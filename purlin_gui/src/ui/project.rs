//! Project page view
//!
//! Displays:
//! - Project details form
//! - Purlin type, span type, purlin size mode and sheeting restraint selectors
//! - Span, support and bridging tables (one row per span)
//! - Plan view with zoom controls

use iced::widget::{
    button, checkbox, column, pick_list, row, rule, scrollable, text, text_input, Column, Row, Space,
};
use iced::{Alignment, Element, Length, Padding};

use purlin_core::geometry::{
    BridgingMessage, PurlinSize, PurlinSizeMode, PurlinType, SpanMessage, SpanType, SupportMessage,
    SupportTable,
};
use purlin_core::pages::{ProjectMessage, ProjectPage};
use purlin_core::project::ProjectFormMessage;

use crate::drafts::{Drafts, FieldKey};
use crate::Message;
use super::shared::fields::{hint, labeled_input, option_row};
use super::shared::plan;

const BRIDGING_COUNTS: [u8; 4] = [0, 1, 2, 3];

fn project(message: ProjectMessage) -> Message {
    Message::Project(message)
}

pub fn view<'a>(page: &'a ProjectPage, drafts: &Drafts) -> Element<'a, Message> {
    let form = column![
        text("Project").size(14),
        labeled_input("Project Name:", &page.project.name, true, |s| {
            project(ProjectMessage::Form(ProjectFormMessage::NameChanged(s)))
        }),
        labeled_input("Description:", &page.project.description, true, |s| {
            project(ProjectMessage::Form(ProjectFormMessage::DescriptionChanged(s)))
        }),
    ]
    .spacing(6);

    let calculate = button(text("Calculate").size(12)).padding(Padding::from([6, 16]));
    let calculate = if page.can_calculate() {
        calculate.on_press(project(ProjectMessage::Calculate)).style(button::primary)
    } else {
        calculate.style(button::secondary)
    };

    scrollable(
        column![
            form,
            rule::horizontal(1),
            view_selectors(page, drafts),
            rule::horizontal(1),
            view_span_table(page, drafts),
            Space::new().height(10),
            view_support_table(page, drafts),
            Space::new().height(10),
            view_bridging_table(page, drafts),
            Space::new().height(10),
            plan::view(&page.plan, page.num_spans.get()),
            Space::new().height(10),
            calculate,
        ]
        .spacing(8)
        .padding(8),
    )
    .into()
}

fn view_selectors<'a>(page: &'a ProjectPage, drafts: &Drafts) -> Column<'a, Message> {
    let num_spans = drafts.text(FieldKey::SpanCount, page.num_spans.get() as f64);
    column![
        labeled_input("No. of Spans:", &num_spans, true, |s| {
            project(ProjectMessage::SpanCountChanged(s))
        }),
        row![
            text("Purlin Type:").size(11).width(Length::Fixed(140.0)),
            option_row(
                &PurlinType::ALL,
                Some(page.purlin_type),
                |t| t.label().to_string(),
                |t| project(ProjectMessage::PurlinTypeSelected(t)),
                true,
            ),
        ]
        .align_y(Alignment::Center),
        row![
            text("Span Type:").size(11).width(Length::Fixed(140.0)),
            pick_list(&SpanType::ALL[..], Some(page.span_type), |t| {
                project(ProjectMessage::SpanTypeSelected(t))
            })
            .width(Length::Fixed(120.0))
            .text_size(11),
        ]
        .align_y(Alignment::Center),
        row![
            text("Purlin Size:").size(11).width(Length::Fixed(140.0)),
            option_row(
                &PurlinSizeMode::ALL,
                Some(page.purlin_size_mode),
                |m| m.label().to_string(),
                |m| project(ProjectMessage::PurlinSizeModeSelected(m)),
                true,
            ),
        ]
        .align_y(Alignment::Center),
        row![
            text("Sheeting Restraint:").size(11).width(Length::Fixed(140.0)),
            option_row(
                &[true, false],
                Some(page.sheeting_restraint),
                |&on| if on { "Yes".to_string() } else { "No".to_string() },
                |on| project(ProjectMessage::SheetingRestraintSelected(on)),
                true,
            ),
        ]
        .align_y(Alignment::Center),
    ]
    .spacing(6)
}

fn cell_input<'a>(value: &str, enabled: bool, on_change: impl Fn(String) -> Message + 'a) -> Element<'a, Message> {
    text_input("", value)
        .on_input_maybe(enabled.then_some(on_change))
        .width(Length::Fixed(80.0))
        .padding(2)
        .size(10)
        .into()
}

fn view_span_table<'a>(page: &'a ProjectPage, drafts: &Drafts) -> Column<'a, Message> {
    let sizes_editable = page.purlin_size_mode.sizes_editable();
    let header = row![
        text("Span").size(10).width(Length::Fixed(50.0)),
        text("Length (mm)").size(10).width(Length::Fixed(80.0)),
        text("Purlin Size").size(10).width(Length::Fixed(90.0)),
    ]
    .spacing(4);

    let mut rows: Column<'_, Message> = column![].spacing(4);
    for (i, span) in page.span_rows().into_iter().enumerate() {
        let size: Element<'_, Message> = if sizes_editable {
            pick_list(PurlinSize::catalogue(), Some(span.purlin_size), move |size| {
                project(ProjectMessage::Spans(SpanMessage::PurlinSizeSelected(i, size)))
            })
            .width(Length::Fixed(90.0))
            .text_size(10)
            .into()
        } else {
            text("-").size(10).width(Length::Fixed(90.0)).into()
        };

        let length = drafts.text(FieldKey::SpanLength(i), f64::from(span.length_mm));
        let span_row: Row<'_, Message> = row![
            text(span.span.to_string()).size(10).width(Length::Fixed(50.0)),
            cell_input(&length, true, move |s| {
                project(ProjectMessage::Spans(SpanMessage::LengthChanged(i, s)))
            }),
            size,
        ]
        .spacing(4)
        .align_y(Alignment::Center);
        rows = rows.push(span_row);
    }

    column![text("Spans").size(12), header, rule::horizontal(1), rows].spacing(2)
}

fn view_support_table<'a>(page: &'a ProjectPage, drafts: &Drafts) -> Column<'a, Message> {
    let header = row![
        text("Support").size(10).width(Length::Fixed(50.0)),
        text("Lap").size(10).width(Length::Fixed(40.0)),
        text("Left %").size(10).width(Length::Fixed(80.0)),
        text("Right %").size(10).width(Length::Fixed(80.0)),
    ]
    .spacing(4);

    let mut rows: Column<'_, Message> = column![].spacing(4);
    for (i, support) in page.support_rows().into_iter().enumerate() {
        let percentages = page.supports.percentages_enabled(i);
        let left = drafts.text(FieldKey::SupportLeft(i), support.left_percentage);
        let right = drafts.text(FieldKey::SupportRight(i), support.right_percentage);
        let lap = checkbox(support.lap)
            .on_toggle_maybe(SupportTable::lap_enabled(i).then_some(move |on| {
                project(ProjectMessage::Supports(SupportMessage::LapToggled(i, on)))
            }))
            .text_size(10);

        rows = rows.push(
            row![
                text(support.support.to_string()).size(10).width(Length::Fixed(50.0)),
                row![lap].width(Length::Fixed(40.0)),
                cell_input(&left, percentages, move |s| {
                    project(ProjectMessage::Supports(SupportMessage::LeftPercentageChanged(i, s)))
                }),
                cell_input(&right, percentages, move |s| {
                    project(ProjectMessage::Supports(SupportMessage::RightPercentageChanged(i, s)))
                }),
            ]
            .spacing(4)
            .align_y(Alignment::Center),
        );
    }

    column![text("Supports").size(12), header, rule::horizontal(1), rows].spacing(2)
}

fn view_bridging_table<'a>(page: &'a ProjectPage, drafts: &Drafts) -> Column<'a, Message> {
    let editable = page.bridging.rows_editable();
    let default_spacing = checkbox(page.bridging.default_spacing)
        .label("Use default bridging spacing")
        .on_toggle(|on| project(ProjectMessage::Bridging(BridgingMessage::DefaultSpacingToggled(on))))
        .text_size(11);

    let mut rows: Column<'_, Message> = column![].spacing(4);
    for (i, info) in page.bridging_rows().into_iter().enumerate() {
        let count: Element<'_, Message> = if editable {
            pick_list(&BRIDGING_COUNTS[..], Some(info.bridgings), move |n| {
                project(ProjectMessage::Bridging(BridgingMessage::BridgingsSelected(i, n)))
            })
            .width(Length::Fixed(50.0))
            .text_size(10)
            .into()
        } else {
            text(info.bridgings.to_string()).size(10).width(Length::Fixed(50.0)).into()
        };

        let mut cells = row![
            text(info.span.to_string()).size(10).width(Length::Fixed(50.0)),
            count,
        ]
        .spacing(4)
        .align_y(Alignment::Center);
        for field in info.visible_fields() {
            let spacing = drafts.text(FieldKey::Bridging(i, field), info.field(field));
            cells = cells.push(cell_input(&spacing, editable, move |s| {
                project(ProjectMessage::Bridging(BridgingMessage::FieldChanged(i, field, s)))
            }));
        }
        rows = rows.push(cells);
    }

    column![
        text("Bridging").size(12),
        default_spacing,
        hint("Spacing of each bridging row from the left support of the span (mm)"),
        rows,
    ]
    .spacing(4)
}
