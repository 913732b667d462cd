use crate::core::data::complex::Complex;
use crate::core::data::point::DevicePoint;
use crate::core::data::viewport_size::ViewportSize;

/// Converts a device position to normalised device coordinates in `[-1, 1]²`.
///
/// Each axis is normalised by its own dimension and `y` is flipped so that
/// up on screen is up on the complex plane.
#[must_use]
pub fn device_to_ndc(position: DevicePoint, size: ViewportSize) -> Complex {
    let width = f64::from(size.width());
    let height = f64::from(size.height());

    Complex {
        real: position.x / width * 2.0 - 1.0,
        imag: -(position.y / height * 2.0 - 1.0),
    }
}
