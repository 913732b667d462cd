use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::viewport_size::ViewportSize;

/// Single-threaded reference for [`generate_fractal_rayon`](super::generate_fractal_rayon::generate_fractal_rayon).
///
/// Results are row-major, top row first.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    size: ViewportSize,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    let mut results = Vec::with_capacity(size.pixel_count());

    for y in 0..size.height() as i32 {
        for x in 0..size.width() as i32 {
            results.push(algorithm.compute(Point { x, y })?);
        }
    }

    Ok(results)
}
