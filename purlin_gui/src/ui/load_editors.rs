//! Nested editors for a single load: detail, axial and moving load

use iced::widget::{column, row, text, Column, Row};
use iced::{Alignment, Element, Length};

use purlin_core::loads::{
    AxialKind, AxialLoad, AxialMessage, Bound, LengthType, Load, LoadApplication, LoadDirection, LoadLocation,
    LoadId, LoadMessage, LoadType, LocationMessage, MovingLoad, MovingLoadMessage, MovingUnits, PointOfReference,
};
use purlin_core::pages::LoadCasesMessage;

use crate::drafts::{Drafts, FieldKey};
use crate::Message;
use super::load_cases::msg;
use super::shared::fields::{hint, labeled_input, option_row, LABEL_WIDTH};

fn labeled<'a>(label: &'a str, control: Row<'a, Message>) -> Row<'a, Message> {
    row![text(label).size(11).width(Length::Fixed(LABEL_WIDTH)), control].align_y(Alignment::Center)
}

fn load_msg(message: LoadMessage) -> Message {
    msg(LoadCasesMessage::Load(message))
}

fn moving_msg(message: MovingLoadMessage) -> Message {
    msg(LoadCasesMessage::Moving(message))
}

/// Load detail form; fields the load type ignores stay blank and disabled.
pub fn view_load<'a>(id: LoadId, load: &'a Load, drafts: &Drafts) -> Element<'a, Message> {
    let load_type = load.load_type;
    let force = drafts.text(FieldKey::Force(id), load.force);

    column![
        text("Load Detail").size(13),
        labeled(
            "Load Type:",
            option_row(
                &LoadType::ALL,
                Some(load_type),
                |t| t.to_string(),
                |t| load_msg(LoadMessage::LoadTypeSelected(t)),
                true,
            ),
        ),
        labeled(
            "Direction:",
            option_row(
                &LoadDirection::ALL,
                load.direction,
                |d| d.label().to_string(),
                |d| load_msg(LoadMessage::DirectionSelected(d)),
                load_type.uses_direction(),
            ),
        ),
        labeled(
            "Application:",
            option_row(
                &LoadApplication::ALL,
                load.application,
                |a| a.label().to_string(),
                |a| load_msg(LoadMessage::ApplicationSelected(a)),
                load_type.uses_application(),
            ),
        ),
        labeled(
            "Units:",
            option_row(
                load_type.unit_options(),
                load.units,
                |u| u.symbol().to_string(),
                |u| load_msg(LoadMessage::UnitsSelected(u)),
                true,
            ),
        ),
        row![
            labeled_input("Force:", &force, true, |s| {
                load_msg(LoadMessage::ForceChanged(s))
            }),
            text(load.units_label()).size(11),
        ]
        .spacing(4)
        .align_y(Alignment::Center),
    ]
    .spacing(6)
    .into()
}

pub fn view_axial<'a>(id: LoadId, axial: &'a AxialLoad, drafts: &Drafts) -> Element<'a, Message> {
    let value = drafts.text(FieldKey::Axial(id), axial.value);

    column![
        text("Axial Load").size(13),
        labeled(
            "Type:",
            option_row(
                &AxialKind::ALL,
                Some(axial.kind),
                |k| k.label().to_string(),
                |k| msg(LoadCasesMessage::Axial(AxialMessage::KindSelected(k))),
                true,
            ),
        ),
        row![
            labeled_input("Axial Load:", &value, true, |s| {
                msg(LoadCasesMessage::Axial(AxialMessage::ValueChanged(s)))
            }),
            text("kN").size(11),
        ]
        .spacing(4)
        .align_y(Alignment::Center),
    ]
    .spacing(6)
    .into()
}

fn view_location(bound: Bound, location: &LoadLocation, length: String) -> Column<'_, Message> {
    let edit = move |edit: LocationMessage| moving_msg(MovingLoadMessage::Location(bound, edit));

    column![
        text(location.title.as_str()).size(12),
        labeled(
            "Point of Reference:",
            option_row(
                &PointOfReference::ALL,
                Some(location.point_of_reference),
                |p| p.label().to_string(),
                move |p| edit(LocationMessage::ReferenceSelected(p)),
                true,
            ),
        ),
        labeled(
            "Length Type:",
            option_row(
                &LengthType::ALL,
                Some(location.length_type),
                |t| t.label().to_string(),
                move |t| edit(LocationMessage::LengthTypeSelected(t)),
                true,
            ),
        ),
        row![
            labeled_input("Length:", &length, true, move |s| {
                edit(LocationMessage::LengthChanged(s))
            }),
            text(location.length_type.suffix()).size(11),
        ]
        .spacing(4)
        .align_y(Alignment::Center),
    ]
    .spacing(6)
}

/// Moving load form; width and pressure only accept input for kPa loads.
pub fn view_moving<'a>(id: LoadId, moving: &'a MovingLoad, drafts: &Drafts) -> Element<'a, Message> {
    let pressure = moving.pressure_mode();
    let left = drafts.text(FieldKey::Location(id, Bound::Left), moving.left_bound.length);
    let right = drafts.text(FieldKey::Location(id, Bound::Right), moving.right_bound.length);
    let width = drafts.text(FieldKey::Width(id), moving.width_mm);
    let pressure_kpa = drafts.text(FieldKey::Pressure(id), moving.pressure_kpa);
    let spacing = drafts.text(FieldKey::PurlinSpacing(id), f64::from(moving.purlin_spacing_mm));
    let positions = drafts.text(FieldKey::TestPositions(id), f64::from(moving.num_test_positions));

    column![
        text("Moving Load").size(13),
        row![
            view_location(Bound::Left, &moving.left_bound, left).width(Length::FillPortion(1)),
            view_location(Bound::Right, &moving.right_bound, right).width(Length::FillPortion(1)),
        ]
        .spacing(12),
        labeled(
            "Units:",
            option_row(
                &MovingUnits::ALL,
                Some(moving.units),
                |u| u.symbol().to_string(),
                |u| moving_msg(MovingLoadMessage::UnitsSelected(u)),
                true,
            ),
        ),
        labeled_input("Width (mm):", &width, pressure, |s| {
            moving_msg(MovingLoadMessage::WidthChanged(s))
        }),
        labeled_input("Pressure (kPa):", &pressure_kpa, pressure, |s| {
            moving_msg(MovingLoadMessage::PressureChanged(s))
        }),
        labeled_input("Purlin Spacing (mm):", &spacing, true, |s| {
            moving_msg(MovingLoadMessage::PurlinSpacingChanged(s))
        }),
        labeled_input("Test Positions:", &positions, true, |s| {
            moving_msg(MovingLoadMessage::TestPositionsChanged(s))
        }),
        hint("Number of positions the load is stepped through between the bounds"),
    ]
    .spacing(6)
    .into()
}
