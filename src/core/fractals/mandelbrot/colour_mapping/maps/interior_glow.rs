use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_map::{
    MandelbrotColourMap, MandelbrotColourMapError, check_iterations,
};
use crate::core::fractals::mandelbrot::colour_mapping::hsv::hsv_to_colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::escape_time::EscapeTime;

const HUE_PER_UNIT_MAGNITUDE: f64 = 0.1;
const SATURATION: f64 = 0.8;
const VALUE: f64 = 0.9;

/// Lights up the set itself, hued by where each orbit ended; the exterior is black.
#[derive(Debug)]
pub struct MandelbrotInteriorGlow {
    max_iterations: u32,
}

impl ColourMap<EscapeTime> for MandelbrotInteriorGlow {
    type Failure = MandelbrotColourMapError;

    fn map(&self, value: EscapeTime) -> Result<Colour, Self::Failure> {
        match value {
            EscapeTime::Interior { final_z } => Ok(hsv_to_colour(
                final_z.magnitude() * HUE_PER_UNIT_MAGNITUDE,
                SATURATION,
                VALUE,
            )),
            EscapeTime::Escaped { iteration, .. } => {
                check_iterations(iteration, self.max_iterations)?;
                Ok(Colour::BLACK)
            }
        }
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotInteriorGlow {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::InteriorGlow
    }
}

impl MandelbrotInteriorGlow {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
