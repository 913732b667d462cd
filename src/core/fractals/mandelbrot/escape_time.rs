//! Escape-time evaluation of a single point.

use crate::core::data::complex::Complex;
use crate::core::data::point::FragmentPoint;
use crate::core::data::viewport_size::ViewportSize;
use crate::core::fractals::mandelbrot::known_interior::is_known_interior;
use crate::core::viewport::transform::{BASE_EXTENT, ViewportTransform};

/// `|z|² > ESCAPE_RADIUS_SQUARED` means the orbit has left the radius-2 disk.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Classification of one point after iterating `z ← z² + c`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum EscapeTime {
    /// The orbit stayed bounded for the whole iteration budget.
    Interior { final_z: Complex },
    /// The orbit escaped; `iteration` is the last step completed before escape.
    Escaped { iteration: u32, final_z: Complex },
}

impl EscapeTime {
    #[must_use]
    pub fn is_interior(&self) -> bool {
        matches!(self, Self::Interior { .. })
    }

    #[must_use]
    pub fn iteration(&self) -> Option<u32> {
        match self {
            Self::Interior { .. } => None,
            Self::Escaped { iteration, .. } => Some(*iteration),
        }
    }

    #[must_use]
    pub fn final_z(&self) -> Complex {
        match self {
            Self::Interior { final_z } | Self::Escaped { final_z, .. } => *final_z,
        }
    }
}

/// Maps a fragment position to the complex plane.
///
/// The position is centred on the viewport and divided by the shorter side,
/// so the set keeps its aspect ratio on non-square viewports.
#[must_use]
pub fn fragment_to_complex(
    fragment: FragmentPoint,
    size: ViewportSize,
    transform: ViewportTransform,
) -> Complex {
    let min_side = size.min_side();
    let uv = Complex {
        real: (fragment.x - 0.5 * f64::from(size.width())) / min_side,
        imag: (fragment.y - 0.5 * f64::from(size.height())) / min_side,
    };

    transform.offset() + uv.scale(BASE_EXTENT / transform.zoom())
}

/// Iterates `z ← z² + c` from zero for at most `max_iterations` steps.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32, skip_known_interior: bool) -> EscapeTime {
    if skip_known_interior && is_known_interior(c) {
        return EscapeTime::Interior {
            final_z: Complex::ZERO,
        };
    }

    let mut z = Complex::ZERO;
    let mut last_completed = 0;

    for iteration in 0..max_iterations {
        z = z.square() + c;

        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return EscapeTime::Escaped {
                iteration: last_completed,
                final_z: z,
            };
        }

        last_completed = iteration;
    }

    EscapeTime::Interior { final_z: z }
}

/// Per-pixel kernel: fragment position and view to an escape classification.
#[must_use]
pub fn evaluate(
    fragment: FragmentPoint,
    size: ViewportSize,
    transform: ViewportTransform,
    max_iterations: u32,
    skip_known_interior: bool,
) -> EscapeTime {
    let c = fragment_to_complex(fragment, size, transform);
    escape_time(c, max_iterations, skip_known_interior)
}
