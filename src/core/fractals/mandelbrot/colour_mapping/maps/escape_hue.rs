use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_map::{
    MandelbrotColourMap, MandelbrotColourMapError, check_iterations,
};
use crate::core::fractals::mandelbrot::colour_mapping::hsv::hsv_to_colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::escape_time::EscapeTime;

#[derive(Debug)]
pub struct MandelbrotEscapeHue {
    max_iterations: u32,
}

impl ColourMap<EscapeTime> for MandelbrotEscapeHue {
    type Failure = MandelbrotColourMapError;

    fn map(&self, value: EscapeTime) -> Result<Colour, Self::Failure> {
        match value {
            EscapeTime::Interior { .. } => Ok(Colour::BLACK),
            EscapeTime::Escaped { iteration, .. } => {
                check_iterations(iteration, self.max_iterations)?;

                let t = f64::from(iteration) / f64::from(self.max_iterations);
                Ok(hsv_to_colour(t, 0.8, 1.0))
            }
        }
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotEscapeHue {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::EscapeHue
    }
}

impl MandelbrotEscapeHue {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    fn escaped(iteration: u32) -> EscapeTime {
        EscapeTime::Escaped {
            iteration,
            final_z: Complex::new(4.0, 4.0),
        }
    }

    #[test]
    fn test_interior_is_black() {
        let mapper = MandelbrotEscapeHue::new(100);
        let colour = mapper
            .map(EscapeTime::Interior {
                final_z: Complex::new(0.2, 0.1),
            })
            .unwrap();

        assert_eq!(colour, Colour::BLACK);
    }

    #[test]
    fn test_first_step_escape_is_red() {
        let mapper = MandelbrotEscapeHue::new(100);

        assert_eq!(mapper.map(escaped(0)).unwrap(), Colour { r: 255, g: 51, b: 51 });
    }

    #[test]
    fn test_half_budget_is_cyan() {
        let mapper = MandelbrotEscapeHue::new(100);

        assert_eq!(mapper.map(escaped(50)).unwrap(), Colour { r: 51, g: 255, b: 255 });
    }

    #[test]
    fn test_last_iteration_is_accepted() {
        let mapper = MandelbrotEscapeHue::new(100);

        assert!(mapper.map(escaped(99)).is_ok());
        assert!(mapper.map(escaped(100)).is_err());
    }
}
