/// Integer pixel position: column and row, origin top-left.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Continuous device-pixel position as delivered by pointer and touch input.
///
/// Origin is the top-left of the viewport and `y` grows downwards.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct DevicePoint {
    pub x: f64,
    pub y: f64,
}

impl DevicePoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn delta_from(&self, other: Self) -> (f64, f64) {
        (self.x - other.x, self.y - other.y)
    }
}

/// Continuous pixel position in fragment convention.
///
/// Origin is the bottom-left of the viewport and `y` grows upwards; pixel
/// centres sit at half-integer coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct FragmentPoint {
    pub x: f64,
    pub y: f64,
}

impl FragmentPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Centre of `pixel` (row 0 at the top) in a viewport `height` rows tall.
    #[must_use]
    pub fn pixel_centre(pixel: Point, height: u32) -> Self {
        Self {
            x: f64::from(pixel.x) + 0.5,
            y: f64::from(height) - f64::from(pixel.y) - 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_from() {
        let last = DevicePoint::new(10.0, 20.0);
        let current = DevicePoint::new(15.5, 12.0);

        assert_eq!(current.delta_from(last), (5.5, -8.0));
        assert_eq!(last.delta_from(last), (0.0, 0.0));
    }

    #[test]
    fn test_pixel_centre_flips_rows() {
        assert_eq!(
            FragmentPoint::pixel_centre(Point { x: 0, y: 0 }, 2),
            FragmentPoint::new(0.5, 1.5)
        );
        assert_eq!(
            FragmentPoint::pixel_centre(Point { x: 1, y: 1 }, 2),
            FragmentPoint::new(1.5, 0.5)
        );
    }
}
