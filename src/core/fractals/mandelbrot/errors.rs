use crate::core::data::point::Point;
use crate::core::data::viewport_size::ViewportSize;
use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq)]
pub enum MandelbrotError {
    ZeroMaxIterationsError,
    PixelOutsideViewport { pixel: Point, size: ViewportSize },
}

impl fmt::Display for MandelbrotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::PixelOutsideViewport { pixel, size } => {
                write!(
                    f,
                    "pixel (x: {}, y: {}) is outside the {}x{} viewport",
                    pixel.x,
                    pixel.y,
                    size.width(),
                    size.height()
                )
            }
        }
    }
}

impl Error for MandelbrotError {}
