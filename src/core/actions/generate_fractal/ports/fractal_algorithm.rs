use crate::core::data::point::Point;
use std::error::Error;

/// Per-pixel computation run once for every pixel of a frame.
///
/// Implementations must be pure: no state shared between pixels and no
/// ordering assumptions, so the caller is free to evaluate in parallel.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
