//! Plan view zoom state
//!
//! The plan canvas has no drawing of its own yet; it only tracks the zoom
//! applied by the three zoom buttons.

use serde::{Deserialize, Serialize};

pub const MIN_SCALE: f64 = 0.1;
pub const MAX_SCALE: f64 = 10.0;

/// Factor applied per zoom step
pub const ZOOM_STEP: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanView {
    scale: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomMessage {
    In,
    Out,
    Fit,
}

impl PlanView {
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn zoom_in(&mut self) {
        self.scale = (self.scale * ZOOM_STEP).clamp(MIN_SCALE, MAX_SCALE);
    }

    pub fn zoom_out(&mut self) {
        self.scale = (self.scale / ZOOM_STEP).clamp(MIN_SCALE, MAX_SCALE);
    }

    /// Back to the identity transform
    pub fn zoom_to_fit(&mut self) {
        self.scale = 1.0;
    }

    pub fn apply(&mut self, message: ZoomMessage) {
        match message {
            ZoomMessage::In => self.zoom_in(),
            ZoomMessage::Out => self.zoom_out(),
            ZoomMessage::Fit => self.zoom_to_fit(),
        }
    }
}

impl Default for PlanView {
    fn default() -> Self {
        PlanView { scale: 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_steps() {
        let mut view = PlanView::default();
        view.zoom_in();
        assert!((view.scale() - 1.5).abs() < 1e-12);
        view.zoom_in();
        assert!((view.scale() - 2.25).abs() < 1e-12);
        view.zoom_out();
        assert!((view.scale() - 1.5).abs() < 1e-12);
        view.apply(ZoomMessage::Fit);
        assert_eq!(view.scale(), 1.0);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut view = PlanView::default();
        for _ in 0..20 {
            view.zoom_in();
        }
        assert_eq!(view.scale(), MAX_SCALE);
        for _ in 0..40 {
            view.zoom_out();
        }
        assert_eq!(view.scale(), MIN_SCALE);
    }
}
