use std::sync::Arc;

use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::core::data::viewport_size::ViewportSize;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::viewport::transform::ViewportTransform;

/// Render settings edited from the overlay plus submission bookkeeping.
#[derive(Default)]
pub struct GuiAppState {
    pub mandelbrot: MandelbrotConfig,
    last_submitted_request: Option<Arc<RenderRequest>>,
    pub latest_submitted_generation: u64,
}

impl GuiAppState {
    #[must_use]
    pub fn build_render_request(
        &self,
        size: ViewportSize,
        transform: ViewportTransform,
    ) -> RenderRequest {
        self.mandelbrot.build_render_request(size, transform)
    }

    #[must_use]
    pub fn should_submit(&self, request: &RenderRequest) -> bool {
        self.last_submitted_request
            .as_ref()
            .is_none_or(|last| last.as_ref() != request)
    }

    pub fn record_submission(&mut self, request: Arc<RenderRequest>, generation: u64) {
        self.last_submitted_request = Some(request);
        self.latest_submitted_generation = generation;
    }

    /// Forgets the last submission so the next identical request is sent again.
    pub fn invalidate_submission(&mut self) {
        self.last_submitted_request = None;
    }

    pub fn reset_view(&mut self) {
        self.mandelbrot.reset_iterations();
    }
}
