use crate::{
    controllers::interactive::data::render_request::RenderRequest,
    core::{
        data::{complex::Complex, viewport_size::ViewportSize},
        fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds,
        viewport::transform::ViewportTransform,
    },
};

pub const DEFAULT_MAX_ITERATIONS: u32 = 100;
pub const DEFAULT_OFFSET: Complex = Complex::new(-1.5, -1.0);
pub const DEFAULT_ZOOM: f64 = 0.8;

pub(crate) const fn default_transform() -> ViewportTransform {
    ViewportTransform::new_unchecked(DEFAULT_OFFSET, DEFAULT_ZOOM)
}

/// Rendering settings that are not part of the navigable view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub initial_transform: ViewportTransform,
    pub max_iterations: u32,
    pub colour_map_kind: MandelbrotColourMapKinds,
    pub skip_known_interior: bool,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            initial_transform: default_transform(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            colour_map_kind: MandelbrotColourMapKinds::default(),
            skip_known_interior: true,
        }
    }
}

impl MandelbrotConfig {
    #[must_use]
    pub fn build_render_request(
        &self,
        size: ViewportSize,
        transform: ViewportTransform,
    ) -> RenderRequest {
        RenderRequest {
            size,
            transform,
            max_iterations: self.max_iterations,
            colour_map_kind: self.colour_map_kind,
            skip_known_interior: self.skip_known_interior,
        }
    }

    pub fn reset_iterations(&mut self) {
        self.max_iterations = DEFAULT_MAX_ITERATIONS;
    }
}
