use crate::core::data::viewport_size::ViewportSize;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::viewport::transform::ViewportTransform;

/// Snapshot of everything needed to render one frame.
///
/// Built on the event-loop thread and handed to the worker behind an `Arc`,
/// so the worker never observes a half-updated view.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub size: ViewportSize,
    pub transform: ViewportTransform,
    pub max_iterations: u32,
    pub colour_map_kind: MandelbrotColourMapKinds,
    pub skip_known_interior: bool,
}

impl RenderRequest {
    pub fn algorithm(&self) -> Result<MandelbrotAlgorithm, MandelbrotError> {
        MandelbrotAlgorithm::new(
            self.size,
            self.transform,
            self.max_iterations,
            self.skip_known_interior,
        )
    }

    #[must_use]
    pub fn colour_map(&self) -> Box<dyn MandelbrotColourMap> {
        mandelbrot_colour_map_factory(self.colour_map_kind, self.max_iterations)
    }
}
