use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::{FragmentPoint, Point};
use crate::core::data::viewport_size::ViewportSize;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::escape_time::{EscapeTime, evaluate};
use crate::core::viewport::transform::ViewportTransform;

/// Escape-time evaluation bound to one frame's size, transform and budget.
#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    size: ViewportSize,
    transform: ViewportTransform,
    max_iterations: u32,
    skip_known_interior: bool,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = EscapeTime;
    type Failure = MandelbrotError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        if !self.size.contains_pixel(pixel) {
            return Err(MandelbrotError::PixelOutsideViewport {
                pixel,
                size: self.size,
            });
        }

        let fragment = FragmentPoint::pixel_centre(pixel, self.size.height());

        Ok(evaluate(
            fragment,
            self.size,
            self.transform,
            self.max_iterations,
            self.skip_known_interior,
        ))
    }
}

impl MandelbrotAlgorithm {
    pub fn new(
        size: ViewportSize,
        transform: ViewportTransform,
        max_iterations: u32,
        skip_known_interior: bool,
    ) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        Ok(Self {
            size,
            transform,
            max_iterations,
            skip_known_interior,
        })
    }

    #[must_use]
    pub fn size(&self) -> ViewportSize {
        self.size
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
