use log::info;
use std::error::Error;
use std::path::Path;
use std::time::Instant;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_frame::render_frame;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport_size::ViewportSize;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;

pub const DEFAULT_SNAPSHOT_WIDTH: u32 = 800;
pub const DEFAULT_SNAPSHOT_HEIGHT: u32 = 600;

/// Renders the configured initial view once and hands it to a file presenter.
pub struct CliSnapshotController<P: FilePresenterPort> {
    presenter: P,
    config: MandelbrotConfig,
    size: ViewportSize,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> CliSnapshotController<P> {
    pub fn new(presenter: P, config: MandelbrotConfig, size: ViewportSize) -> Self {
        Self {
            presenter,
            config,
            size,
            buffer: None,
        }
    }

    pub fn generate(&mut self) -> Result<(), Box<dyn Error>> {
        let request = self
            .config
            .build_render_request(self.size, self.config.initial_transform);

        info!(
            "rendering {}x{} snapshot, max iterations {}, colour map {}",
            self.size.width(),
            self.size.height(),
            request.max_iterations,
            request.colour_map_kind
        );

        let start = Instant::now();
        let buffer = render_frame(&request)?;
        info!("rendered in {:?}", start.elapsed());

        self.buffer = Some(buffer);

        Ok(())
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, filepath.as_ref())?;
            info!("saved to {}", filepath.as_ref().display());
        }

        Ok(())
    }
}
