use log::debug;

use crate::core::data::complex::Complex;
use crate::core::viewport::transform::ViewportTransform;
use crate::core::viewport::zoom_history::ZoomHistory;

/// What a zoom request did to the state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ZoomOutcome {
    /// A checkpoint was pushed and the anchored zoom applied.
    ZoomedIn,
    /// The most recent checkpoint was restored.
    ZoomedOut,
    /// Nothing changed: unit/invalid factor or zoom-out with no history.
    Unchanged,
}

/// Current transform plus the zoom checkpoints that led to it.
///
/// Zoom-in is computed; zoom-out is a replay of the last checkpoint. Panning
/// done after a zoom-in is therefore discarded by the matching zoom-out.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportState {
    transform: ViewportTransform,
    history: ZoomHistory,
}

impl ViewportState {
    #[must_use]
    pub fn new(transform: ViewportTransform) -> Self {
        Self {
            transform,
            history: ZoomHistory::new(),
        }
    }

    #[must_use]
    pub fn transform(&self) -> ViewportTransform {
        self.transform
    }

    #[must_use]
    pub fn history(&self) -> &ZoomHistory {
        &self.history
    }

    pub fn pan_by(&mut self, delta: Complex) {
        self.transform = self.transform.panned_by(delta);
    }

    /// Applies a zoom factor anchored at `ndc`.
    pub fn zoom_at(&mut self, factor: f64, ndc: Complex) -> ZoomOutcome {
        if !factor.is_finite() || factor <= 0.0 || factor == 1.0 {
            return ZoomOutcome::Unchanged;
        }

        if factor > 1.0 {
            self.history.push(self.transform);
            self.transform = self.transform.zoomed_in_at(factor, ndc);
            debug!(
                "zoom in x{} -> zoom {} (depth {})",
                factor,
                self.transform.zoom(),
                self.history.len()
            );
            return ZoomOutcome::ZoomedIn;
        }

        match self.history.pop() {
            Some(checkpoint) => {
                self.transform = checkpoint;
                debug!(
                    "zoom out -> restored zoom {} (depth {})",
                    checkpoint.zoom(),
                    self.history.len()
                );
                ZoomOutcome::ZoomedOut
            }
            None => ZoomOutcome::Unchanged,
        }
    }

    pub fn reset(&mut self, transform: ViewportTransform) {
        self.transform = transform;
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn initial() -> ViewportTransform {
        ViewportTransform::new(Complex::new(-1.5, -1.0), 0.8).unwrap()
    }

    #[test]
    fn test_zoom_in_at_center_scenario() {
        let mut state = ViewportState::new(initial());

        let outcome = state.zoom_at(1.1, Complex::ZERO);

        assert_eq!(outcome, ZoomOutcome::ZoomedIn);
        assert_eq!(state.transform().offset(), Complex::new(-1.5, -1.0));
        assert!((state.transform().zoom() - 0.88).abs() < 1e-12);
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.history().peek(), Some(&initial()));
    }

    #[test]
    fn test_zoom_in_then_out_restores_bit_identical_transform() {
        let mut state = ViewportState::new(initial());
        let anchor = Complex::new(0.37, -0.81);

        state.zoom_at(1.1, anchor);
        assert_ne!(state.transform(), initial());

        assert_eq!(state.zoom_at(0.9, anchor), ZoomOutcome::ZoomedOut);
        assert_eq!(state.transform(), initial());
        assert_eq!(
            state.transform().offset().real.to_bits(),
            initial().offset().real.to_bits()
        );
        assert_eq!(
            state.transform().zoom().to_bits(),
            initial().zoom().to_bits()
        );
    }

    #[test]
    fn test_zoom_out_discards_pan_made_while_zoomed_in() {
        let mut state = ViewportState::new(initial());

        state.zoom_at(1.1, Complex::new(0.5, 0.5));
        state.pan_by(Complex::new(0.25, -0.125));
        state.zoom_at(0.9, Complex::ZERO);

        assert_eq!(state.transform(), initial());
    }

    #[test]
    fn test_history_depth_tracks_zoom_ins_minus_zoom_outs() {
        let mut state = ViewportState::new(initial());

        for _ in 0..5 {
            state.zoom_at(1.1, Complex::new(0.1, 0.2));
        }
        assert_eq!(state.history().len(), 5);

        for _ in 0..3 {
            state.zoom_at(0.9, Complex::ZERO);
        }
        assert_eq!(state.history().len(), 2);
    }

    #[test]
    fn test_zoom_out_with_empty_history_is_noop() {
        let mut state = ViewportState::new(initial());

        assert_eq!(state.zoom_at(0.9, Complex::new(1.0, 1.0)), ZoomOutcome::Unchanged);
        assert_eq!(state.transform(), initial());
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_invalid_factors_are_ignored() {
        let mut state = ViewportState::new(initial());

        for factor in [1.0, 0.0, -2.0, f64::NAN, f64::INFINITY] {
            assert_eq!(state.zoom_at(factor, Complex::ZERO), ZoomOutcome::Unchanged);
        }
        assert_eq!(state.transform(), initial());
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_reset_restores_transform_and_clears_history() {
        let mut state = ViewportState::new(initial());
        state.zoom_at(1.1, Complex::ZERO);
        state.pan_by(Complex::new(1.0, 1.0));

        state.reset(initial());

        assert_eq!(state.transform(), initial());
        assert!(state.history().is_empty());
    }
}
