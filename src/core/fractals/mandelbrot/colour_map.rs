use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::escape_time::EscapeTime;
use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MandelbrotColourMapError {
    IterationsExceedMax {
        iterations: u32,
        max_iterations: u32,
    },
}

impl fmt::Display for MandelbrotColourMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IterationsExceedMax {
                iterations,
                max_iterations,
            } => {
                write!(
                    f,
                    "iterations {} exceeds maximum {}",
                    iterations, max_iterations
                )
            }
        }
    }
}

impl Error for MandelbrotColourMapError {}

pub trait MandelbrotColourMap:
    ColourMap<EscapeTime, Failure = MandelbrotColourMapError> + Send + Sync
{
    fn kind(&self) -> MandelbrotColourMapKinds;
}

/// Rejects escape counts that could not have come from a `max_iterations` budget.
pub(crate) fn check_iterations(
    iterations: u32,
    max_iterations: u32,
) -> Result<(), MandelbrotColourMapError> {
    if iterations >= max_iterations {
        return Err(MandelbrotColourMapError::IterationsExceedMax {
            iterations,
            max_iterations,
        });
    }

    Ok(())
}
