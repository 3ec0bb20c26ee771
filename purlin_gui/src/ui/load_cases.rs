//! Load cases page view
//!
//! Left column: kind selector and the selected kind's list. Right column: the
//! editor for the selection (PLC case editor with its nested load editors, or
//! the CLC combination builder).

use iced::widget::{button, column, container, pick_list, row, rule, scrollable, text, Column, Space};
use iced::{Alignment, Element, Length, Padding};

use purlin_core::loads::{
    BuilderMessage, CaseMessage, GroupEdit, LimitState, ListMessage, LoadCaseGroup, LoadCaseKind, LoadCaseList,
    Multiplier, MAX_NAME_LEN,
};
use purlin_core::pages::{LoadCasesMessage, LoadCasesPage, NestedEditor};

use crate::drafts::{Drafts, FieldKey};
use crate::Message;
use super::load_editors;
use super::shared::fields::{hint, labeled_input, option_row, LABEL_WIDTH};

pub(super) fn msg(message: LoadCasesMessage) -> Message {
    Message::LoadCases(message)
}

fn action_button(label: &str, message: Option<LoadCasesMessage>) -> Element<'_, Message> {
    button(text(label).size(11))
        .on_press_maybe(message.map(msg))
        .padding(Padding::from([4, 10]))
        .style(button::secondary)
        .into()
}

pub fn view<'a>(page: &'a LoadCasesPage, drafts: &Drafts) -> Element<'a, Message> {
    let kind = page.kind();
    let kinds = option_row(
        &LoadCaseKind::ALL,
        Some(kind),
        |k| k.label().to_string(),
        |k| msg(LoadCasesMessage::KindSelected(k)),
        true,
    );

    let left = column![
        text("Load Cases").size(16),
        kinds,
        hint(kind.description()),
        rule::horizontal(1),
        view_list(page.list(kind), drafts),
    ]
    .spacing(8)
    .width(Length::Fixed(320.0));

    let right: Element<'_, Message> = match kind {
        LoadCaseKind::Primary => view_primary_editor(page, drafts),
        LoadCaseKind::Combined => view_builder(page),
    };

    scrollable(
        row![left, rule::vertical(1), container(right).width(Length::Fill)]
            .spacing(12)
            .padding(8),
    )
    .into()
}

fn view_list<'a>(list: &'a LoadCaseList, drafts: &Drafts) -> Column<'a, Message> {
    let kind = list.kind();
    let mut entries = column![].spacing(2);
    for (i, group) in list.groups().iter().enumerate() {
        let selected = list.selected() == Some(i);
        entries = entries.push(
            button(text(group.name.as_str()).size(11))
                .on_press(msg(LoadCasesMessage::List(kind, ListMessage::Select(Some(i)))))
                .width(Length::Fill)
                .padding(Padding::from([3, 8]))
                .style(if selected { button::primary } else { button::text }),
        );
    }
    if list.is_empty() {
        entries = entries.push(hint("No load cases defined"));
    }

    let actions = row![
        action_button(
            "New",
            (!list.is_full()).then_some(LoadCasesMessage::List(kind, ListMessage::Add)),
        ),
        action_button(
            "Delete",
            list.selected().map(|_| LoadCasesMessage::List(kind, ListMessage::DeleteSelected)),
        ),
    ]
    .spacing(4);

    let mut col = column![
        text(kind.list_title()).size(13),
        container(entries).padding(4).style(container::bordered_box),
        actions,
    ]
    .spacing(6);

    if let (Some(index), Some(group)) = (list.selected(), list.selected_group()) {
        let limit = drafts.text(FieldKey::DeflectionLimit(kind, index), group.deflection_limit);
        col = col.push(rule::horizontal(1)).push(view_group_fields(kind, group, limit));
    }
    col
}

fn view_group_fields(kind: LoadCaseKind, group: &LoadCaseGroup, deflection_limit: String) -> Column<'_, Message> {
    let edit = move |edit: GroupEdit| msg(LoadCasesMessage::List(kind, ListMessage::EditSelected(edit)));

    column![
        labeled_input("Name:", &group.name, true, move |s| edit(GroupEdit::Rename(s))),
        hint(if group.name.chars().count() >= MAX_NAME_LEN {
            "Maximum name length reached"
        } else {
            ""
        }),
        row![
            text("Limit State:").size(11).width(Length::Fixed(LABEL_WIDTH)),
            option_row(
                &LimitState::ALL,
                Some(group.limit_state),
                |s| s.label().to_string(),
                move |s| edit(GroupEdit::SetLimitState(s)),
                true,
            ),
        ]
        .align_y(Alignment::Center),
        labeled_input(
            "Deflection Limit:",
            &deflection_limit,
            group.deflection_limit_enabled(),
            move |s| edit(GroupEdit::SetDeflectionLimit(s)),
        ),
    ]
    .spacing(6)
}

fn view_primary_editor<'a>(page: &'a LoadCasesPage, drafts: &Drafts) -> Element<'a, Message> {
    let Some(group) = page.primary().selected_group() else {
        return column![
            hint("Select or create a primary load case to edit its loads"),
            action_button("Edit Cases", None),
        ]
        .spacing(6)
        .into();
    };

    let editor = match page.editor() {
        None => {
            return column![
                text(group.name.as_str()).size(14),
                action_button("Edit Cases", Some(LoadCasesMessage::OpenCaseEditor)),
            ]
            .spacing(6)
            .into()
        }
        Some(editor) => editor,
    };

    let detail: Element<'_, Message> = match editor {
        NestedEditor::Cases => hint("Select a load to edit its details").into(),
        NestedEditor::LoadDetail(id) => match page.load(id) {
            Some(load) => load_editors::view_load(id, load, drafts),
            None => hint("Load not found").into(),
        },
        NestedEditor::Axial(id) => match page.axial(id) {
            Some(axial) => load_editors::view_axial(id, axial, drafts),
            None => hint("Axial load not found").into(),
        },
        NestedEditor::Moving(id) => match page.moving(id) {
            Some(moving) => load_editors::view_moving(id, moving, drafts),
            None => hint("Moving load not found").into(),
        },
    };

    column![
        row![
            text(format!("Loads in {}", group.name)).size(14),
            Space::new().width(Length::Fill),
            action_button("Close", Some(LoadCasesMessage::CloseEditor)),
        ]
        .align_y(Alignment::Center),
        view_case_list(page, group),
        rule::horizontal(1),
        detail,
    ]
    .spacing(8)
    .into()
}

fn view_case_list<'a>(page: &'a LoadCasesPage, group: &'a LoadCaseGroup) -> Column<'a, Message> {
    let selected = page.cases().selected();
    let mut entries = column![].spacing(2);
    for (i, case) in group.cases.iter().enumerate() {
        entries = entries.push(
            button(text(case.name.as_str()).size(11))
                .on_press(msg(LoadCasesMessage::Cases(CaseMessage::Select(Some(i)))))
                .width(Length::Fill)
                .padding(Padding::from([3, 8]))
                .style(if selected == Some(i) { button::primary } else { button::text }),
        );
    }
    if group.cases.is_empty() {
        entries = entries.push(hint("No loads in this case"));
    }

    let has_load = selected.is_some();
    let actions = row![
        action_button(
            "New Load",
            (!group.is_full()).then_some(LoadCasesMessage::Cases(CaseMessage::NewLoad)),
        ),
        action_button(
            "Delete",
            has_load.then_some(LoadCasesMessage::Cases(CaseMessage::DeleteSelected)),
        ),
        action_button(
            "Add Axial Load",
            has_load.then_some(LoadCasesMessage::Cases(CaseMessage::AddAxialLoad)),
        ),
        action_button(
            "Edit Moving Load",
            has_load.then_some(LoadCasesMessage::Cases(CaseMessage::EditMovingLoad)),
        ),
    ]
    .spacing(4);

    column![
        container(entries).padding(4).style(container::bordered_box),
        actions,
    ]
    .spacing(6)
}

fn view_builder(page: &LoadCasesPage) -> Element<'_, Message> {
    let Some(target) = page.combined().selected_group() else {
        return hint("Select or create a combined load case to add factored cases").into();
    };
    let builder = page.builder();

    let mut cases = column![].spacing(2);
    for (i, case) in target.cases.iter().enumerate() {
        cases = cases.push(
            button(text(case.name.as_str()).size(11))
                .on_press(msg(LoadCasesMessage::Builder(BuilderMessage::SelectTarget(Some(i)))))
                .width(Length::Fill)
                .padding(Padding::from([3, 8]))
                .style(if builder.target_selected() == Some(i) { button::primary } else { button::text }),
        );
    }

    let mut available = column![].spacing(2);
    for (i, primary) in page.primary().groups().iter().enumerate() {
        available = available.push(
            button(text(primary.name.as_str()).size(11))
                .on_press(msg(LoadCasesMessage::Builder(BuilderMessage::ToggleAvailable(i))))
                .width(Length::Fill)
                .padding(Padding::from([3, 8]))
                .style(if builder.is_available_selected(i) { button::primary } else { button::text }),
        );
    }
    if page.primary().is_empty() {
        available = available.push(hint("Define primary load cases first"));
    }

    let multiplier = pick_list(&Multiplier::ALL[..], Some(builder.multiplier()), |m| {
        msg(LoadCasesMessage::Builder(BuilderMessage::MultiplierSelected(m)))
    })
    .width(Length::Fixed(80.0))
    .text_size(11);

    let controls = column![
        text("Multiplier").size(11),
        multiplier,
        action_button(
            "<< Add",
            (!builder.available_selected().is_empty() && !target.is_full())
                .then_some(LoadCasesMessage::Builder(BuilderMessage::Add)),
        ),
        action_button(
            "Delete",
            builder
                .target_selected()
                .map(|_| LoadCasesMessage::Builder(BuilderMessage::DeleteSelected)),
        ),
    ]
    .spacing(6)
    .align_x(Alignment::Center);

    row![
        column![
            text(format!("Cases in {}", target.name)).size(12),
            container(cases).padding(4).width(Length::Fill).style(container::bordered_box),
        ]
        .spacing(4)
        .width(Length::FillPortion(1)),
        controls,
        column![
            text("Primary Load Cases").size(12),
            container(available).padding(4).width(Length::Fill).style(container::bordered_box),
        ]
        .spacing(4)
        .width(Length::FillPortion(1)),
    ]
    .spacing(10)
    .into()
}
