//! End-to-end load case editing through the load cases page

use pretty_assertions::assert_eq;
use purlin_core::loads::{
    AxialKind, AxialMessage, BuilderMessage, CaseMessage, GroupEdit, LimitState, ListMessage, Load,
    LoadApplication, LoadCaseKind, LoadCaseList, LoadDirection, LoadMessage, LoadType, LoadUnits, Multiplier,
    MAX_GROUPS,
};
use purlin_core::pages::{LoadCasesMessage, LoadCasesPage, NestedEditor};

fn plc(message: ListMessage) -> LoadCasesMessage {
    LoadCasesMessage::List(LoadCaseKind::Primary, message)
}

fn clc(message: ListMessage) -> LoadCasesMessage {
    LoadCasesMessage::List(LoadCaseKind::Combined, message)
}

fn names(list: &LoadCaseList) -> Vec<String> {
    list.groups().iter().map(|g| g.name.clone()).collect()
}

// ============================================================================
// List manager
// ============================================================================

#[test]
fn add_grows_by_one_until_capacity() {
    for kind in LoadCaseKind::ALL {
        let mut list = LoadCaseList::new(kind);
        for n in 0..MAX_GROUPS + 3 {
            let before = list.len();
            let _ = list.update(ListMessage::Add);
            assert_eq!(list.len(), (before + 1).min(MAX_GROUPS), "after add #{}", n + 1);
        }
    }
}

#[test]
fn add_to_full_plc_list_changes_nothing() {
    let mut page = LoadCasesPage::default();
    for _ in 0..MAX_GROUPS {
        page.update(plc(ListMessage::Add)).unwrap();
    }
    page.update(plc(ListMessage::Select(Some(5)))).unwrap();
    let before = page.primary().clone();

    let err = page.update(plc(ListMessage::Add)).unwrap_err();

    assert_eq!(err.error_code(), "CAPACITY_REACHED");
    assert_eq!(page.primary(), &before);
    assert_eq!(page.primary().len(), 20);
    assert_eq!(page.primary().selected(), Some(5));
}

#[test]
fn delete_without_selection_is_rejected() {
    let mut list = LoadCaseList::new(LoadCaseKind::Combined);
    assert!(list.update(ListMessage::DeleteSelected).is_err());

    list.update(ListMessage::Add).unwrap();
    list.update(ListMessage::Add).unwrap();
    list.update(ListMessage::Select(None)).unwrap();
    assert!(list.update(ListMessage::DeleteSelected).is_err());
    assert_eq!(list.len(), 2);
}

#[test]
fn delete_last_entry_clears_selection() {
    let mut list = LoadCaseList::new(LoadCaseKind::Primary);
    list.update(ListMessage::Add).unwrap();
    list.update(ListMessage::DeleteSelected).unwrap();
    assert!(list.is_empty());
    assert_eq!(list.selected(), None);
}

#[test]
fn delete_steps_selection_back() {
    let mut list = LoadCaseList::new(LoadCaseKind::Primary);
    for _ in 0..4 {
        list.update(ListMessage::Add).unwrap();
    }

    list.update(ListMessage::Select(Some(2))).unwrap();
    list.update(ListMessage::DeleteSelected).unwrap();
    assert_eq!(list.selected(), Some(1));
    assert_eq!(names(&list), vec!["P. Load Case 1", "P. Load Case 2", "P. Load Case 4"]);

    list.update(ListMessage::Select(Some(0))).unwrap();
    list.update(ListMessage::DeleteSelected).unwrap();
    assert_eq!(list.selected(), Some(0));
    assert_eq!(names(&list), vec!["P. Load Case 2", "P. Load Case 4"]);
}

#[test]
fn deflection_limit_follows_limit_state() {
    let mut page = LoadCasesPage::default();
    page.update(plc(ListMessage::Add)).unwrap();

    let rejected = page.update(plc(ListMessage::EditSelected(GroupEdit::SetDeflectionLimit("250".into()))));
    assert!(rejected.is_err());

    page.update(plc(ListMessage::EditSelected(GroupEdit::SetLimitState(LimitState::Serviceability))))
        .unwrap();
    page.update(plc(ListMessage::EditSelected(GroupEdit::SetDeflectionLimit("250".into()))))
        .unwrap();
    assert_eq!(page.primary().selected_group().unwrap().deflection_limit, 250.0);

    page.update(plc(ListMessage::EditSelected(GroupEdit::SetLimitState(LimitState::Strength))))
        .unwrap();
    assert_eq!(page.primary().selected_group().unwrap().deflection_limit, 0.0);
}

// ============================================================================
// Combination builder
// ============================================================================

/// One PLC called "Load A" and one empty CLC, with the CLC builder showing
fn builder_page() -> LoadCasesPage {
    let mut page = LoadCasesPage::default();
    page.update(plc(ListMessage::Add)).unwrap();
    page.update(plc(ListMessage::EditSelected(GroupEdit::Rename("Load A".into()))))
        .unwrap();
    page.update(LoadCasesMessage::KindSelected(LoadCaseKind::Combined)).unwrap();
    page.update(clc(ListMessage::Add)).unwrap();
    page
}

#[test]
fn builder_skips_existing_names() {
    let mut page = builder_page();
    page.update(LoadCasesMessage::Builder(BuilderMessage::ToggleAvailable(0))).unwrap();
    page.update(LoadCasesMessage::Builder(BuilderMessage::Add)).unwrap();

    let target = page.combined().selected_group().unwrap().clone();
    assert_eq!(target.case_names().collect::<Vec<_>>(), vec!["1.0 * Load A"]);

    // Same primary, same multiplier
    page.update(LoadCasesMessage::Builder(BuilderMessage::ToggleAvailable(0))).unwrap();
    assert!(page.builder().is_available_selected(0));
    page.update(LoadCasesMessage::Builder(BuilderMessage::Add)).unwrap();

    assert_eq!(page.combined().selected_group().unwrap(), &target);
    assert!(page.builder().available_selected().is_empty());
}

#[test]
fn builder_without_primary_selection_is_rejected() {
    let mut page = builder_page();
    let err = page
        .update(LoadCasesMessage::Builder(BuilderMessage::Add))
        .unwrap_err();
    assert_eq!(err.error_code(), "NO_SELECTION");
    assert!(page.combined().selected_group().unwrap().cases.is_empty());
}

#[test]
fn builder_caps_target_at_ten() {
    let mut page = LoadCasesPage::default();
    for _ in 0..12 {
        page.update(plc(ListMessage::Add)).unwrap();
    }
    page.update(clc(ListMessage::Add)).unwrap();
    for i in 0..12 {
        page.update(LoadCasesMessage::Builder(BuilderMessage::ToggleAvailable(i))).unwrap();
    }
    page.update(LoadCasesMessage::Builder(BuilderMessage::MultiplierSelected(Multiplier::X1_5)))
        .unwrap();
    page.update(LoadCasesMessage::Builder(BuilderMessage::Add)).unwrap();

    let target = page.combined().selected_group().unwrap();
    assert_eq!(target.cases.len(), 10);
    assert_eq!(target.cases[9].name, "1.5 * P. Load Case 10");
    assert_eq!(page.builder().target_selected(), Some(9));

    let err = page
        .update(LoadCasesMessage::Builder(BuilderMessage::ToggleAvailable(11)))
        .and_then(|_| page.update(LoadCasesMessage::Builder(BuilderMessage::Add)))
        .unwrap_err();
    assert_eq!(err.error_code(), "CAPACITY_REACHED");
}

// ============================================================================
// Load detail
// ============================================================================

#[test]
fn udl_to_point_clears_application_and_units() {
    let mut load = Load::default();
    load.apply(LoadMessage::ApplicationSelected(LoadApplication::All)).unwrap();
    load.apply(LoadMessage::UnitsSelected(LoadUnits::Kpa)).unwrap();

    load.apply(LoadMessage::LoadTypeSelected(LoadType::Point)).unwrap();
    assert_eq!(load.application, None);
    assert_eq!(load.units, None);

    // Line does not bring the application back, nor clear a later one
    load.apply(LoadMessage::LoadTypeSelected(LoadType::Line)).unwrap();
    assert_eq!(load.application, None);
    load.apply(LoadMessage::ApplicationSelected(LoadApplication::One)).unwrap();
    load.apply(LoadMessage::LoadTypeSelected(LoadType::Line)).unwrap();
    assert_eq!(load.application, Some(LoadApplication::One));
}

#[test]
fn unit_options_per_load_type() {
    let expected = [
        (LoadType::Udl, vec![LoadUnits::KnPerM, LoadUnits::Kpa]),
        (LoadType::Point, vec![LoadUnits::Kn]),
        (LoadType::Line, vec![LoadUnits::KnPerM]),
    ];
    for (load_type, options) in expected {
        let mut load = Load::default();
        load.set_load_type(load_type);
        let accepted: Vec<LoadUnits> = LoadUnits::ALL
            .into_iter()
            .filter(|&u| load.clone().set_units(u).is_ok())
            .collect();
        assert_eq!(accepted, options, "{}", load_type);
        assert_eq!(load_type.unit_options(), options.as_slice());
    }
}

#[test]
fn line_to_udl_keeps_application_only() {
    let mut page = LoadCasesPage::default();
    page.update(plc(ListMessage::Add)).unwrap();
    page.update(LoadCasesMessage::Cases(CaseMessage::NewLoad)).unwrap();
    let id = page.selected_load_id().unwrap();

    for message in [
        LoadMessage::LoadTypeSelected(LoadType::Line),
        LoadMessage::DirectionSelected(LoadDirection::Parallel),
        LoadMessage::ApplicationSelected(LoadApplication::Multiple),
        LoadMessage::UnitsSelected(LoadUnits::KnPerM),
        LoadMessage::ForceChanged("2.5".into()),
    ] {
        page.update(LoadCasesMessage::Load(message)).unwrap();
    }
    page.update(LoadCasesMessage::Load(LoadMessage::LoadTypeSelected(LoadType::Udl)))
        .unwrap();

    assert_eq!(
        page.load(id),
        Some(&Load {
            load_type: LoadType::Udl,
            direction: None,
            application: Some(LoadApplication::Multiple),
            units: None,
            force: 2.5,
        })
    );
}

// ============================================================================
// Per-load records
// ============================================================================

#[test]
fn axial_data_stays_with_its_load_after_delete() {
    let mut page = LoadCasesPage::default();
    page.update(plc(ListMessage::Add)).unwrap();
    page.update(LoadCasesMessage::Cases(CaseMessage::NewLoad)).unwrap();
    let first = page.selected_load_id().unwrap();
    page.update(LoadCasesMessage::Cases(CaseMessage::NewLoad)).unwrap();
    let second = page.selected_load_id().unwrap();

    page.update(LoadCasesMessage::Cases(CaseMessage::AddAxialLoad)).unwrap();
    page.update(LoadCasesMessage::Axial(AxialMessage::ValueChanged("12".into()))).unwrap();
    page.update(LoadCasesMessage::Axial(AxialMessage::KindSelected(AxialKind::Compression)))
        .unwrap();

    page.update(LoadCasesMessage::Cases(CaseMessage::Select(Some(0)))).unwrap();
    assert_eq!(page.editor(), Some(NestedEditor::LoadDetail(first)));
    page.update(LoadCasesMessage::Cases(CaseMessage::DeleteSelected)).unwrap();

    // The surviving load moved to position 0 and kept its axial record
    assert_eq!(page.selected_load_id(), Some(second));
    assert!(page.axial(first).is_none());
    let axial = page.axial(second).unwrap();
    assert_eq!(axial.value, 12.0);
    assert_eq!(axial.kind, AxialKind::Compression);
}
