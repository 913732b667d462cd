use log::trace;

use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::mandelbrot::colour_map::MandelbrotColourMapError;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum RenderFrameError {
    Algorithm(MandelbrotError),
    PixelBuffer(GeneratePixelBufferError<MandelbrotColourMapError>),
}

impl fmt::Display for RenderFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Algorithm(err) => write!(f, "algorithm error: {}", err),
            Self::PixelBuffer(err) => write!(f, "{}", err),
        }
    }
}

impl Error for RenderFrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Algorithm(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<MandelbrotError> for RenderFrameError {
    fn from(err: MandelbrotError) -> Self {
        Self::Algorithm(err)
    }
}

impl From<GeneratePixelBufferError<MandelbrotColourMapError>> for RenderFrameError {
    fn from(err: GeneratePixelBufferError<MandelbrotColourMapError>) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Evaluates and colours every pixel described by `request`.
pub fn render_frame(request: &RenderRequest) -> Result<PixelBuffer, RenderFrameError> {
    let algorithm = request.algorithm()?;
    let colour_map = request.colour_map();

    let escape_times = generate_fractal_rayon(request.size, &algorithm)?;
    let pixel_buffer = generate_pixel_buffer(&escape_times, colour_map.as_ref(), request.size)?;

    trace!(
        "rendered {}x{} frame at zoom {} with {}",
        request.size.width(),
        request.size.height(),
        request.transform.zoom(),
        colour_map.display_name()
    );

    Ok(pixel_buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::complex::Complex;
    use crate::core::data::point::Point;
    use crate::core::data::viewport_size::ViewportSize;
    use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
    use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
    use crate::core::viewport::transform::ViewportTransform;

    fn request(width: u32, height: u32, kind: MandelbrotColourMapKinds) -> RenderRequest {
        let config = MandelbrotConfig {
            colour_map_kind: kind,
            ..MandelbrotConfig::default()
        };

        config.build_render_request(
            ViewportSize::new(width, height).unwrap(),
            ViewportTransform::new(Complex::new(-0.5, 0.0), 1.0).unwrap(),
        )
    }

    #[test]
    fn test_render_frame_fills_whole_viewport() {
        let request = request(16, 9, MandelbrotColourMapKinds::EscapeHue);

        let pixel_buffer = render_frame(&request).unwrap();

        assert_eq!(pixel_buffer.size(), request.size);
        assert_eq!(pixel_buffer.buffer_size(), 16 * 9 * 4);
        assert!(pixel_buffer.buffer().chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn test_render_frame_colours_interior_centre() {
        // Centre pixel of a 3x3 frame sits on c = (-0.5, 0), inside the cardioid.
        let glow = render_frame(&request(3, 3, MandelbrotColourMapKinds::InteriorGlow)).unwrap();
        let hue = render_frame(&request(3, 3, MandelbrotColourMapKinds::EscapeHue)).unwrap();

        assert_eq!(
            glow.pixel(Point { x: 1, y: 1 }),
            Some(Colour { r: 230, g: 46, b: 46 })
        );
        assert_eq!(hue.pixel(Point { x: 1, y: 1 }), Some(Colour::BLACK));
    }

    #[test]
    fn test_render_frame_rejects_zero_iterations() {
        let mut request = request(4, 4, MandelbrotColourMapKinds::InteriorGlow);
        request.max_iterations = 0;

        assert_eq!(
            render_frame(&request),
            Err(RenderFrameError::Algorithm(
                MandelbrotError::ZeroMaxIterationsError
            ))
        );
    }

    #[test]
    fn test_render_frame_is_deterministic() {
        let request = request(32, 24, MandelbrotColourMapKinds::EscapeHue);

        assert_eq!(render_frame(&request), render_frame(&request));
    }
}
