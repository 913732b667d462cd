use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

/// Width and height of the visible square at `zoom == 1`.
pub const BASE_EXTENT: f64 = 4.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportTransformError {
    InvalidZoom { zoom: f64 },
}

impl fmt::Display for ViewportTransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidZoom { zoom } => {
                write!(f, "zoom must be positive and finite: {}", zoom)
            }
        }
    }
}

impl Error for ViewportTransformError {}

/// The `(offset, zoom)` pair that places the viewport on the complex plane.
///
/// Maps normalised device coordinates in `[-1, 1]²` to the plane via
/// `offset + ndc * extent() / 2`. `zoom` is always positive.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewportTransform {
    offset: Complex,
    zoom: f64,
}

impl ViewportTransform {
    pub fn new(offset: Complex, zoom: f64) -> Result<Self, ViewportTransformError> {
        if !is_valid_zoom(zoom) {
            return Err(ViewportTransformError::InvalidZoom { zoom });
        }

        Ok(Self { offset, zoom })
    }

    /// For compile-time constants whose zoom is known to be positive.
    pub(crate) const fn new_unchecked(offset: Complex, zoom: f64) -> Self {
        Self { offset, zoom }
    }

    #[must_use]
    pub fn offset(&self) -> Complex {
        self.offset
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn extent(&self) -> f64 {
        BASE_EXTENT / self.zoom
    }

    #[must_use]
    pub fn ndc_to_complex(&self, ndc: Complex) -> Complex {
        self.offset + ndc.scale(self.extent() / 2.0)
    }

    #[must_use]
    pub(crate) fn panned_by(self, delta: Complex) -> Self {
        Self {
            offset: self.offset + delta,
            zoom: self.zoom,
        }
    }

    /// Zooms in by `factor` keeping the point at `ndc` fixed.
    ///
    /// Callers guarantee `factor > 1`, so zoom stays positive. Zoom is not
    /// clamped: after several thousand zoom-ins it overflows to infinity and
    /// the view degenerates, which is accepted.
    #[must_use]
    pub(crate) fn zoomed_in_at(self, factor: f64, ndc: Complex) -> Self {
        let new_zoom = self.zoom * factor;
        let old_extent = self.extent();
        let new_extent = BASE_EXTENT / new_zoom;
        let shift = ndc.scale((old_extent - new_extent) / 2.0);

        Self {
            offset: self.offset + shift,
            zoom: new_zoom,
        }
    }
}

fn is_valid_zoom(zoom: f64) -> bool {
    zoom.is_finite() && zoom > 0.0
}
