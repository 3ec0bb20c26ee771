//! Project page
//!
//! Owns everything entered on the project screen: project details, purlin and
//! span configuration, and the three per-span tables. The tables are sized by
//! [`SpanCount`]; the purlin size column follows [`PurlinSizeMode`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::canvas::{PlanView, ZoomMessage};
use crate::errors::{PurlinError, PurlinResult};
use crate::geometry::{
    BridgingMessage, BridgingSpacingInfo, BridgingTable, PurlinSizeMode, PurlinType, SpanCount, SpanInfo,
    SpanMessage, SpanTable, SpanType, SupportInfo, SupportMessage, SupportTable,
};
use crate::project::{Project, ProjectFormMessage};

#[derive(Debug, Clone, PartialEq)]
pub enum ProjectMessage {
    Form(ProjectFormMessage),
    /// Raw text of the "No. of Spans" field
    SpanCountChanged(String),
    PurlinTypeSelected(PurlinType),
    SpanTypeSelected(SpanType),
    PurlinSizeModeSelected(PurlinSizeMode),
    SheetingRestraintSelected(bool),
    Spans(SpanMessage),
    Supports(SupportMessage),
    Bridging(BridgingMessage),
    Zoom(ZoomMessage),
    Calculate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectPage {
    pub project: Project,
    pub num_spans: SpanCount,
    pub purlin_type: PurlinType,
    pub span_type: SpanType,
    pub purlin_size_mode: PurlinSizeMode,
    /// Sheeting screwed directly to the purlin restrains it
    pub sheeting_restraint: bool,
    pub spans: SpanTable,
    pub supports: SupportTable,
    pub bridging: BridgingTable,
    pub plan: PlanView,
}

impl Default for ProjectPage {
    fn default() -> Self {
        ProjectPage {
            project: Project::new(),
            num_spans: SpanCount::default(),
            purlin_type: PurlinType::default(),
            span_type: SpanType::default(),
            purlin_size_mode: PurlinSizeMode::default(),
            sheeting_restraint: true,
            spans: SpanTable::default(),
            supports: SupportTable::default(),
            bridging: BridgingTable::default(),
            plan: PlanView::default(),
        }
    }
}

impl ProjectPage {
    pub fn span_rows(&self) -> Vec<SpanInfo> {
        self.spans.rows(self.num_spans)
    }

    pub fn support_rows(&self) -> Vec<SupportInfo> {
        self.supports.rows(self.num_spans)
    }

    pub fn bridging_rows(&self) -> Vec<BridgingSpacingInfo> {
        self.bridging.rows(self.num_spans)
    }

    /// No design engine is wired in, so calculation is never available.
    pub fn can_calculate(&self) -> bool {
        false
    }

    pub fn update(&mut self, message: ProjectMessage) -> PurlinResult<()> {
        let result = match message {
            ProjectMessage::Form(edit) => {
                self.project.apply(edit);
                Ok(())
            }
            ProjectMessage::SpanCountChanged(text) => SpanCount::parse(&text).map(|count| self.num_spans = count),
            ProjectMessage::PurlinTypeSelected(purlin_type) => {
                self.purlin_type = purlin_type;
                Ok(())
            }
            ProjectMessage::SpanTypeSelected(span_type) => {
                self.span_type = span_type;
                Ok(())
            }
            ProjectMessage::PurlinSizeModeSelected(mode) => {
                self.purlin_size_mode = mode;
                Ok(())
            }
            ProjectMessage::SheetingRestraintSelected(restrained) => {
                self.sheeting_restraint = restrained;
                Ok(())
            }
            ProjectMessage::Spans(edit) => self.spans.update(edit, self.num_spans, self.purlin_size_mode),
            ProjectMessage::Supports(edit) => self.supports.update(edit, self.num_spans),
            ProjectMessage::Bridging(edit) => self.bridging.update(edit, self.num_spans),
            ProjectMessage::Zoom(zoom) => {
                self.plan.apply(zoom);
                Ok(())
            }
            ProjectMessage::Calculate => Err(PurlinError::field_disabled("calculate", "no design engine available")),
        };
        if let Err(ref e) = result {
            debug!(error = %e, "project edit rejected");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PurlinSize;

    #[test]
    fn test_defaults() {
        let page = ProjectPage::default();
        assert_eq!(page.num_spans.get(), 1);
        assert_eq!(page.purlin_type, PurlinType::TypeC);
        assert_eq!(page.span_rows().len(), 1);
        assert!(!page.can_calculate());
    }

    #[test]
    fn test_span_count_drives_tables() {
        let mut page = ProjectPage::default();
        page.update(ProjectMessage::SpanCountChanged("4".into())).unwrap();
        assert_eq!(page.span_rows().len(), 4);
        assert_eq!(page.support_rows().len(), 4);
        assert_eq!(page.bridging_rows().len(), 4);

        assert!(page.update(ProjectMessage::SpanCountChanged("11".into())).is_err());
        assert!(page.update(ProjectMessage::SpanCountChanged("x".into())).is_err());
        assert_eq!(page.num_spans.get(), 4);
    }

    #[test]
    fn test_shrinking_keeps_stored_rows() {
        let mut page = ProjectPage::default();
        page.update(ProjectMessage::SpanCountChanged("3".into())).unwrap();
        page.update(ProjectMessage::Spans(SpanMessage::LengthChanged(2, "7200".into())))
            .unwrap();
        page.update(ProjectMessage::SpanCountChanged("2".into())).unwrap();
        assert_eq!(page.span_rows().len(), 2);
        page.update(ProjectMessage::SpanCountChanged("3".into())).unwrap();
        assert_eq!(page.span_rows()[2].length_mm, 7200);
    }

    #[test]
    fn test_find_mode_locks_sizes() {
        let mut page = ProjectPage::default();
        page.update(ProjectMessage::PurlinSizeModeSelected(PurlinSizeMode::FindPurlinSize))
            .unwrap();
        let size = PurlinSize::new(3).unwrap();
        assert!(page
            .update(ProjectMessage::Spans(SpanMessage::PurlinSizeSelected(0, size)))
            .is_err());
    }

    #[test]
    fn test_calculate_is_disabled() {
        let mut page = ProjectPage::default();
        let err = page.update(ProjectMessage::Calculate).unwrap_err();
        assert!(err.is_rejection());
    }

    #[test]
    fn test_form_and_zoom() {
        let mut page = ProjectPage::default();
        page.update(ProjectMessage::Form(ProjectFormMessage::NameChanged("Shed".into())))
            .unwrap();
        page.update(ProjectMessage::Zoom(ZoomMessage::In)).unwrap();
        assert_eq!(page.project.name, "Shed");
        assert!(page.plan.scale() > 1.0);
    }
}
