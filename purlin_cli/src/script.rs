//! Command parser
//!
//! One command per line. Blank lines and lines starting with `#` are skipped.
//! Each command maps onto exactly one page message, so the CLI drives the same
//! editors as the GUI.
//!
//! ```text
//! go /loadCases
//! list add
//! case new
//! load type point
//! load force 2.5
//! state
//! ```

use purlin_core::canvas::ZoomMessage;
use purlin_core::geometry::{
    BridgingField, BridgingMessage, PurlinSize, PurlinSizeMode, PurlinType, SpanMessage, SpanType, SupportMessage,
};
use purlin_core::loads::{
    AxialKind, AxialMessage, Bound, BuilderMessage, CaseMessage, GroupEdit, LengthType, LimitState, ListMessage,
    LoadApplication, LoadCaseKind, LoadDirection, LoadMessage, LoadType, LoadUnits, LocationMessage,
    MovingLoadMessage, MovingUnits, Multiplier, PointOfReference,
};
use purlin_core::pages::{LoadCasesMessage, MenuMessage, ProjectMessage};
use purlin_core::project::ProjectFormMessage;
use purlin_core::{PurlinError, PurlinResult, Route};

pub const HELP: &str = "\
Commands:
  go <path>                          open a page (/, /project, /loadCases, /menu)
  state                              print the current page as JSON
  materials                          fetch the material catalogue (home page)
  help | quit

Project page:
  name <text> | description <text>
  spans <n> | purlin c|z | spantype <1-9> | sizes check|find | restraint yes|no
  span <i> length <mm> | span <i> size <n>
  support <i> lap yes|no | support <i> left|right <percent>
  bridging default yes|no | bridging <i> count <n> | bridging <i> field <1-3> <mm>
  zoom in|out|fit | calculate

Load cases page:
  kind plc|clc
  list add | list delete | list select <n>|none | list rename <text>
  list limit strength|serviceability | list deflection <value>
  case open|close|new|delete|axial|moving | case select <n>|none
  load type udl|point|line | load direction parallel|perpendicular
  load apply part|one|multiple|all | load units kn/m|kn|kpa | load force <value>
  axial value <kN> | axial kind tension|compression
  moving units kn/m|kpa | moving width|pressure|spacing|positions <value>
  moving left|right ref left|right | moving left|right type mm|length
  moving left|right length <value>
  build target <n>|none | build toggle <n> | build mult <factor> | build add | build delete

Menu page:
  menu open <path> | menu about | menu close | menu next | menu prev";

/// A parsed script line
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Go(Route),
    State,
    Materials,
    Help,
    Quit,
    Project(ProjectMessage),
    LoadCases(LoadCasesMessage),
    Menu(MenuMessage),
}

fn unknown(command: &str) -> PurlinError {
    PurlinError::invalid_input("command", command, "unknown command, try 'help'")
}

fn keyword<T: Copy>(field: &str, token: &str, table: &[(&str, T)]) -> PurlinResult<T> {
    table
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(token))
        .map(|&(_, value)| value)
        .ok_or_else(|| {
            let names: Vec<&str> = table.iter().map(|(name, _)| *name).collect();
            PurlinError::invalid_input(field, token, format!("expected one of {}", names.join(", ")))
        })
}

fn yes_no(field: &str, token: &str) -> PurlinResult<bool> {
    keyword(field, token, &[("yes", true), ("no", false), ("on", true), ("off", false)])
}

/// 1-based row number on the command line, 0-based index in the tables
fn row_index(field: &str, token: &str) -> PurlinResult<usize> {
    match token.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(PurlinError::invalid_input(field, token, "expected a row number starting at 1")),
    }
}

fn selection(field: &str, token: &str) -> PurlinResult<Option<usize>> {
    if token.eq_ignore_ascii_case("none") {
        Ok(None)
    } else {
        row_index(field, token).map(Some)
    }
}

/// Everything after the first `skip` words, spacing preserved
fn rest(line: &str, skip: usize) -> String {
    let mut remainder = line.trim_start();
    for _ in 0..skip {
        remainder = remainder
            .split_once(char::is_whitespace)
            .map(|(_, tail)| tail.trim_start())
            .unwrap_or("");
    }
    remainder.to_string()
}

pub fn parse_line(line: &str) -> PurlinResult<Option<Action>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let words: Vec<&str> = line.split_whitespace().collect();

    let action = match words.as_slice() {
        ["go", path] => Action::Go(Route::from_path(path)?),
        ["state"] => Action::State,
        ["materials"] => Action::Materials,
        ["help"] => Action::Help,
        ["quit"] | ["exit"] => Action::Quit,
        ["menu", ..] => Action::Menu(parse_menu(&words[1..])?),
        [first, ..] if is_project_command(first) => Action::Project(parse_project(line, &words)?),
        _ => Action::LoadCases(parse_load_cases(line, &words)?),
    };
    Ok(Some(action))
}

fn parse_menu(words: &[&str]) -> PurlinResult<MenuMessage> {
    Ok(match words {
        ["open", path] => MenuMessage::Open(Route::from_path(path)?),
        ["about"] => MenuMessage::ShowAbout,
        ["close"] => MenuMessage::CloseAbout,
        ["next"] => MenuMessage::FocusNext,
        ["prev"] => MenuMessage::FocusPrevious,
        _ => return Err(unknown(&words.join(" "))),
    })
}

fn is_project_command(word: &str) -> bool {
    matches!(
        word,
        "name" | "description" | "spans" | "purlin" | "spantype" | "sizes" | "restraint" | "span" | "support"
            | "bridging" | "zoom" | "calculate"
    )
}

fn parse_project(line: &str, words: &[&str]) -> PurlinResult<ProjectMessage> {
    Ok(match words {
        ["name", ..] => ProjectMessage::Form(ProjectFormMessage::NameChanged(rest(line, 1))),
        ["description", ..] => ProjectMessage::Form(ProjectFormMessage::DescriptionChanged(rest(line, 1))),
        ["spans", ..] => ProjectMessage::SpanCountChanged(rest(line, 1)),
        ["purlin", t] => ProjectMessage::PurlinTypeSelected(keyword(
            "purlin_type",
            t,
            &[("c", PurlinType::TypeC), ("z", PurlinType::TypeZ)],
        )?),
        ["spantype", n] => {
            let number: usize = n
                .parse()
                .map_err(|_| PurlinError::invalid_input("span_type", *n, "expected 1-9"))?;
            let span_type = SpanType::ALL
                .into_iter()
                .find(|s| s.number() == number)
                .ok_or_else(|| PurlinError::invalid_input("span_type", *n, "expected 1-9"))?;
            ProjectMessage::SpanTypeSelected(span_type)
        }
        ["sizes", mode] => ProjectMessage::PurlinSizeModeSelected(keyword(
            "purlin_size_mode",
            mode,
            &[("check", PurlinSizeMode::CheckPurlinSize), ("find", PurlinSizeMode::FindPurlinSize)],
        )?),
        ["restraint", on] => ProjectMessage::SheetingRestraintSelected(yes_no("sheeting_restraint", on)?),
        ["span", i, "length", ..] => {
            ProjectMessage::Spans(SpanMessage::LengthChanged(row_index("span", i)?, rest(line, 3)))
        }
        ["span", i, "size", n] => {
            let number: u8 = n
                .parse()
                .map_err(|_| PurlinError::invalid_input("purlin_size", *n, "expected a catalogue number"))?;
            ProjectMessage::Spans(SpanMessage::PurlinSizeSelected(row_index("span", i)?, PurlinSize::new(number)?))
        }
        ["support", i, "lap", on] => {
            ProjectMessage::Supports(SupportMessage::LapToggled(row_index("support", i)?, yes_no("lap", on)?))
        }
        ["support", i, "left", ..] => ProjectMessage::Supports(SupportMessage::LeftPercentageChanged(
            row_index("support", i)?,
            rest(line, 3),
        )),
        ["support", i, "right", ..] => ProjectMessage::Supports(SupportMessage::RightPercentageChanged(
            row_index("support", i)?,
            rest(line, 3),
        )),
        ["bridging", "default", on] => {
            ProjectMessage::Bridging(BridgingMessage::DefaultSpacingToggled(yes_no("default_spacing", on)?))
        }
        ["bridging", i, "count", n] => {
            let count: u8 = n
                .parse()
                .map_err(|_| PurlinError::invalid_input("bridgings", *n, "expected 0-3"))?;
            ProjectMessage::Bridging(BridgingMessage::BridgingsSelected(row_index("bridging", i)?, count))
        }
        ["bridging", i, "field", k, ..] => {
            let field = keyword(
                "bridging_field",
                k,
                &[("1", BridgingField::Field1), ("2", BridgingField::Field2), ("3", BridgingField::Field3)],
            )?;
            ProjectMessage::Bridging(BridgingMessage::FieldChanged(row_index("bridging", i)?, field, rest(line, 4)))
        }
        ["zoom", z] => ProjectMessage::Zoom(keyword(
            "zoom",
            z,
            &[("in", ZoomMessage::In), ("out", ZoomMessage::Out), ("fit", ZoomMessage::Fit)],
        )?),
        ["calculate"] => ProjectMessage::Calculate,
        _ => return Err(unknown(line)),
    })
}

fn parse_load_cases(line: &str, words: &[&str]) -> PurlinResult<LoadCasesMessage> {
    let list = |message: ListMessage| LoadCasesMessage::List(LoadCaseKind::Primary, message);

    Ok(match words {
        ["kind", k] => LoadCasesMessage::KindSelected(keyword(
            "kind",
            k,
            &[("plc", LoadCaseKind::Primary), ("clc", LoadCaseKind::Combined)],
        )?),

        // The kind is filled in from the page's current selector
        ["list", "add"] => list(ListMessage::Add),
        ["list", "delete"] => list(ListMessage::DeleteSelected),
        ["list", "select", n] => list(ListMessage::Select(selection("list", n)?)),
        ["list", "rename", ..] => list(ListMessage::EditSelected(GroupEdit::Rename(rest(line, 2)))),
        ["list", "limit", s] => list(ListMessage::EditSelected(GroupEdit::SetLimitState(keyword(
            "limit_state",
            s,
            &[("strength", LimitState::Strength), ("serviceability", LimitState::Serviceability)],
        )?))),
        ["list", "deflection", ..] => list(ListMessage::EditSelected(GroupEdit::SetDeflectionLimit(rest(line, 2)))),

        ["case", "open"] => LoadCasesMessage::OpenCaseEditor,
        ["case", "close"] => LoadCasesMessage::CloseEditor,
        ["case", "new"] => LoadCasesMessage::Cases(CaseMessage::NewLoad),
        ["case", "delete"] => LoadCasesMessage::Cases(CaseMessage::DeleteSelected),
        ["case", "axial"] => LoadCasesMessage::Cases(CaseMessage::AddAxialLoad),
        ["case", "moving"] => LoadCasesMessage::Cases(CaseMessage::EditMovingLoad),
        ["case", "select", n] => LoadCasesMessage::Cases(CaseMessage::Select(selection("load", n)?)),

        ["load", "type", t] => LoadCasesMessage::Load(LoadMessage::LoadTypeSelected(keyword(
            "load_type",
            t,
            &[("udl", LoadType::Udl), ("point", LoadType::Point), ("line", LoadType::Line)],
        )?)),
        ["load", "direction", d] => LoadCasesMessage::Load(LoadMessage::DirectionSelected(keyword(
            "direction",
            d,
            &[("parallel", LoadDirection::Parallel), ("perpendicular", LoadDirection::Perpendicular)],
        )?)),
        ["load", "apply", a] => LoadCasesMessage::Load(LoadMessage::ApplicationSelected(keyword(
            "application",
            a,
            &[
                ("part", LoadApplication::Part),
                ("one", LoadApplication::One),
                ("multiple", LoadApplication::Multiple),
                ("all", LoadApplication::All),
            ],
        )?)),
        ["load", "units", u] => LoadCasesMessage::Load(LoadMessage::UnitsSelected(keyword(
            "units",
            u,
            &[("kn/m", LoadUnits::KnPerM), ("kn", LoadUnits::Kn), ("kpa", LoadUnits::Kpa)],
        )?)),
        ["load", "force", ..] => LoadCasesMessage::Load(LoadMessage::ForceChanged(rest(line, 2))),

        ["axial", "value", ..] => LoadCasesMessage::Axial(AxialMessage::ValueChanged(rest(line, 2))),
        ["axial", "kind", k] => LoadCasesMessage::Axial(AxialMessage::KindSelected(keyword(
            "axial_kind",
            k,
            &[("tension", AxialKind::Tension), ("compression", AxialKind::Compression)],
        )?)),

        ["moving", "units", u] => LoadCasesMessage::Moving(MovingLoadMessage::UnitsSelected(keyword(
            "units",
            u,
            &[("kn/m", MovingUnits::KnPerM), ("kpa", MovingUnits::Kpa)],
        )?)),
        ["moving", "width", ..] => LoadCasesMessage::Moving(MovingLoadMessage::WidthChanged(rest(line, 2))),
        ["moving", "pressure", ..] => LoadCasesMessage::Moving(MovingLoadMessage::PressureChanged(rest(line, 2))),
        ["moving", "spacing", ..] => {
            LoadCasesMessage::Moving(MovingLoadMessage::PurlinSpacingChanged(rest(line, 2)))
        }
        ["moving", "positions", ..] => {
            LoadCasesMessage::Moving(MovingLoadMessage::TestPositionsChanged(rest(line, 2)))
        }
        ["moving", side, field, ..] => {
            let bound = keyword("bound", side, &[("left", Bound::Left), ("right", Bound::Right)])?;
            let edit = match (*field, words.get(3)) {
                ("ref", Some(r)) => LocationMessage::ReferenceSelected(keyword(
                    "point_of_reference",
                    r,
                    &[("left", PointOfReference::LeftEnd), ("right", PointOfReference::RightEnd)],
                )?),
                ("type", Some(t)) => LocationMessage::LengthTypeSelected(keyword(
                    "length_type",
                    t,
                    &[("mm", LengthType::Mm), ("length", LengthType::Length)],
                )?),
                ("length", _) => LocationMessage::LengthChanged(rest(line, 3)),
                _ => return Err(unknown(line)),
            };
            LoadCasesMessage::Moving(MovingLoadMessage::Location(bound, edit))
        }

        ["build", "target", n] => LoadCasesMessage::Builder(BuilderMessage::SelectTarget(selection("case", n)?)),
        ["build", "toggle", n] => LoadCasesMessage::Builder(BuilderMessage::ToggleAvailable(row_index("plc", n)?)),
        ["build", "mult", m] => LoadCasesMessage::Builder(BuilderMessage::MultiplierSelected(
            Multiplier::ALL
                .into_iter()
                .find(|x| x.label() == *m)
                .ok_or_else(|| PurlinError::invalid_input("multiplier", *m, "expected 0.8, 0.9, 1.0, 1.2, 1.25 or 1.5"))?,
        )),
        ["build", "add"] => LoadCasesMessage::Builder(BuilderMessage::Add),
        ["build", "delete"] => LoadCasesMessage::Builder(BuilderMessage::DeleteSelected),

        _ => return Err(unknown(line)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_comments_and_blanks_skipped() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("   # setup").unwrap(), None);
    }

    #[test]
    fn test_navigation() {
        assert_eq!(parse_line("go /loadCases").unwrap(), Some(Action::Go(Route::LoadCases)));
        assert!(parse_line("go /nowhere").is_err());
    }

    #[test]
    fn test_free_text_keeps_spacing() {
        assert_eq!(
            parse_line("name  Shed  roof").unwrap(),
            Some(Action::Project(ProjectMessage::Form(ProjectFormMessage::NameChanged(
                "Shed  roof".to_string()
            ))))
        );
        assert_eq!(
            parse_line("list rename Dead load").unwrap(),
            Some(Action::LoadCases(LoadCasesMessage::List(
                LoadCaseKind::Primary,
                ListMessage::EditSelected(GroupEdit::Rename("Dead load".to_string()))
            )))
        );
    }

    #[test]
    fn test_rows_are_one_based() {
        assert_eq!(
            parse_line("support 2 lap yes").unwrap(),
            Some(Action::Project(ProjectMessage::Supports(SupportMessage::LapToggled(1, true))))
        );
        assert!(parse_line("support 0 lap yes").is_err());
    }

    #[test]
    fn test_keywords() {
        assert_eq!(
            parse_line("load units KN/M").unwrap(),
            Some(Action::LoadCases(LoadCasesMessage::Load(LoadMessage::UnitsSelected(LoadUnits::KnPerM))))
        );
        assert_eq!(
            parse_line("build mult 1.25").unwrap(),
            Some(Action::LoadCases(LoadCasesMessage::Builder(BuilderMessage::MultiplierSelected(
                Multiplier::X1_25
            ))))
        );
        assert_eq!(
            parse_line("moving left type length").unwrap(),
            Some(Action::LoadCases(LoadCasesMessage::Moving(MovingLoadMessage::Location(
                Bound::Left,
                LocationMessage::LengthTypeSelected(LengthType::Length)
            ))))
        );
        let err = parse_line("load type beam").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_unknown_command() {
        assert!(parse_line("frobnicate").is_err());
        assert!(parse_line("menu dance").is_err());
    }
}
