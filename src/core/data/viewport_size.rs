use crate::core::data::point::{DevicePoint, Point};
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ViewportSizeError {
    Empty { width: u32, height: u32 },
}

impl fmt::Display for ViewportSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { width, height } => {
                write!(f, "viewport size must be at least 1x1: {}x{}", width, height)
            }
        }
    }
}

impl Error for ViewportSizeError {}

/// Size of the render surface in device pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ViewportSize {
    width: u32,
    height: u32,
}

impl ViewportSize {
    pub fn new(width: u32, height: u32) -> Result<Self, ViewportSizeError> {
        if width == 0 || height == 0 {
            return Err(ViewportSizeError::Empty { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn min_side(&self) -> f64 {
        f64::from(self.width.min(self.height))
    }

    #[must_use]
    pub fn center(&self) -> DevicePoint {
        DevicePoint::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    #[must_use]
    pub fn contains_pixel(&self, pixel: Point) -> bool {
        pixel.x >= 0
            && pixel.y >= 0
            && (pixel.x as u32) < self.width
            && (pixel.y as u32) < self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_size_new_valid() {
        let size = ViewportSize::new(800, 600).unwrap();

        assert_eq!(size.width(), 800);
        assert_eq!(size.height(), 600);
        assert_eq!(size.pixel_count(), 480_000);
        assert_eq!(size.min_side(), 600.0);
        assert_eq!(size.center(), DevicePoint::new(400.0, 300.0));
    }

    #[test]
    fn test_viewport_size_rejects_empty_dimensions() {
        assert_eq!(
            ViewportSize::new(0, 600),
            Err(ViewportSizeError::Empty {
                width: 0,
                height: 600
            })
        );
        assert_eq!(
            ViewportSize::new(800, 0),
            Err(ViewportSizeError::Empty {
                width: 800,
                height: 0
            })
        );
        assert!(ViewportSize::new(1, 1).is_ok());
    }

    #[test]
    fn test_viewport_size_contains_pixel() {
        let size = ViewportSize::new(3, 2).unwrap();

        assert!(size.contains_pixel(Point { x: 0, y: 0 }));
        assert!(size.contains_pixel(Point { x: 2, y: 1 }));
        assert!(!size.contains_pixel(Point { x: 3, y: 1 }));
        assert!(!size.contains_pixel(Point { x: 2, y: 2 }));
        assert!(!size.contains_pixel(Point { x: -1, y: 0 }));
    }
}
