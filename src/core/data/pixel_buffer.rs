use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::viewport_size::ViewportSize;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 4;

fn viewport_size_to_buffer_size(size: ViewportSize) -> usize {
    size.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        pixel: Point,
        size: ViewportSize,
    },
    BoundsMismatch {
        expected_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                expected_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "expected {} bytes of pixel data but buffer holds {}",
                    expected_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, size } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} viewport",
                    pixel.x,
                    pixel.y,
                    size.width(),
                    size.height()
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGBA8 frame, top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    size: ViewportSize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(size: ViewportSize) -> Self {
        Self {
            size,
            buffer: vec![0; viewport_size_to_buffer_size(size)],
        }
    }

    pub fn from_data(size: ViewportSize, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let expected_size = viewport_size_to_buffer_size(size);

        if expected_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { size, buffer })
    }

    #[must_use]
    pub fn size(&self) -> ViewportSize {
        self.size
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        if !self.size.contains_pixel(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                size: self.size,
            });
        }

        let index =
            (pixel.y as usize * self.size.width() as usize + pixel.x as usize) * BYTES_PER_PIXEL;
        write_rgba(&mut self.buffer[index..index + BYTES_PER_PIXEL], colour);

        Ok(())
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        if !self.size.contains_pixel(pixel) {
            return None;
        }

        let index =
            (pixel.y as usize * self.size.width() as usize + pixel.x as usize) * BYTES_PER_PIXEL;
        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    /// Iterates RGB triples, dropping alpha.
    pub fn rgb_bytes(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        self.buffer
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|px| [px[0], px[1], px[2]])
    }
}

#[inline]
pub(crate) fn write_rgba(dst: &mut [u8], colour: Colour) {
    dst[0] = colour.r;
    dst[1] = colour.g;
    dst[2] = colour.b;
    dst[3] = 255;
}
