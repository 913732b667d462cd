use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::viewport_size::ViewportSize;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// Rows are split across the pool; each row is computed left to right and the
/// rows are stitched back together in order, so the output is row-major with
/// the top row first, identical to [`generate_fractal`](super::generate_fractal::generate_fractal).
/// The first failing pixel aborts the frame.
pub fn generate_fractal_rayon<Alg>(
    size: ViewportSize,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    let width = size.width() as i32;

    let rows: Vec<Vec<Alg::Success>> = (0..size.height() as i32)
        .into_par_iter()
        .map(|y| {
            (0..width)
                .map(|x| algorithm.compute(Point { x, y }))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut results = Vec::with_capacity(size.pixel_count());
    for row in rows {
        results.extend(row);
    }

    Ok(results)
}
