//! Project page table editing and page routing

use pretty_assertions::assert_eq;
use purlin_core::geometry::{BridgingField, BridgingMessage, SupportMessage, SupportTable};
use purlin_core::pages::{ProjectMessage, ProjectPage};
use purlin_core::{Navigator, Page, Route};

fn page_with_spans(n: usize) -> ProjectPage {
    let mut page = ProjectPage::default();
    page.update(ProjectMessage::SpanCountChanged(n.to_string())).unwrap();
    page
}

#[test]
fn bridging_count_three_to_one_keeps_first_field() {
    let mut page = page_with_spans(2);
    page.update(ProjectMessage::Bridging(BridgingMessage::DefaultSpacingToggled(false)))
        .unwrap();
    page.update(ProjectMessage::Bridging(BridgingMessage::BridgingsSelected(1, 3)))
        .unwrap();
    for (field, text) in [
        (BridgingField::Field1, "1200"),
        (BridgingField::Field2, "2400"),
        (BridgingField::Field3, "3600"),
    ] {
        page.update(ProjectMessage::Bridging(BridgingMessage::FieldChanged(1, field, text.into())))
            .unwrap();
    }

    page.update(ProjectMessage::Bridging(BridgingMessage::BridgingsSelected(1, 1)))
        .unwrap();

    let row = &page.bridging_rows()[1];
    assert_eq!(row.span, 2);
    assert_eq!(row.bridgings, 1);
    assert_eq!((row.field1, row.field2, row.field3), (1200.0, 0.0, 0.0));
}

#[test]
fn first_support_never_laps() {
    for n in 1..=10 {
        let mut page = page_with_spans(n);
        assert!(!SupportTable::lap_enabled(0));
        let err = page
            .update(ProjectMessage::Supports(SupportMessage::LapToggled(0, true)))
            .unwrap_err();
        assert_eq!(err.error_code(), "FIELD_DISABLED");
        assert!(!page.support_rows()[0].lap);
    }
}

#[test]
fn out_of_range_percentage_keeps_previous_value() {
    let mut page = page_with_spans(3);
    page.update(ProjectMessage::Supports(SupportMessage::LapToggled(1, true)))
        .unwrap();
    page.update(ProjectMessage::Supports(SupportMessage::LeftPercentageChanged(1, "15".into())))
        .unwrap();

    let err = page
        .update(ProjectMessage::Supports(SupportMessage::LeftPercentageChanged(1, "150".into())))
        .unwrap_err();

    assert_eq!(err.error_code(), "INVALID_INPUT");
    assert_eq!(page.support_rows()[1].left_percentage, 15.0);
}

#[test]
fn rows_follow_span_count_not_storage() {
    let page = page_with_spans(6);
    let spans: Vec<usize> = page.span_rows().iter().map(|r| r.span).collect();
    assert_eq!(spans, vec![1, 2, 3, 4, 5, 6]);
    let supports: Vec<usize> = page.support_rows().iter().map(|r| r.support).collect();
    assert_eq!(supports, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn navigation_discards_page_state() {
    let mut nav = Navigator::new(Route::Project);
    if let Page::Project(page) = nav.page_mut() {
        page.update(ProjectMessage::SpanCountChanged("5".into())).unwrap();
    }

    nav.navigate_path("/loadCases").unwrap();
    nav.navigate_path("/project").unwrap();

    match nav.page() {
        Page::Project(page) => assert_eq!(page.span_rows().len(), 1),
        other => panic!("expected project page, got {}", other.route()),
    }
    assert!(nav.navigate_path("/nowhere").is_err());
}
