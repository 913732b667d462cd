use crate::core::fractals::mandelbrot::mandelbrot_config::default_transform;
use crate::core::viewport::transform::ViewportTransform;
use std::error::Error;
use std::fmt;

pub const DEFAULT_MOUSE_PAN_SCALE: f64 = 4.0;
pub const DEFAULT_TOUCH_PAN_SCALE: f64 = 2.0;
pub const DEFAULT_WHEEL_ZOOM_IN_FACTOR: f64 = 1.1;
pub const DEFAULT_WHEEL_ZOOM_OUT_FACTOR: f64 = 0.9;

#[derive(Debug, Clone, PartialEq)]
pub enum InteractionConfigError {
    InvalidPanScale { name: &'static str, value: f64 },
    InvalidZoomInFactor { factor: f64 },
    InvalidZoomOutFactor { factor: f64 },
}

impl fmt::Display for InteractionConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPanScale { name, value } => {
                write!(f, "{} must be positive and finite, got {}", name, value)
            }
            Self::InvalidZoomInFactor { factor } => {
                write!(f, "wheel zoom-in factor must be greater than 1, got {}", factor)
            }
            Self::InvalidZoomOutFactor { factor } => {
                write!(
                    f,
                    "wheel zoom-out factor must be between 0 and 1 exclusive, got {}",
                    factor
                )
            }
        }
    }
}

impl Error for InteractionConfigError {}

/// Tuning for how input maps onto the view.
///
/// Pan scales are the complex-plane distance covered by a full-width drag at
/// zoom 1. With `mouse_pan_scale` equal to the visible extent, content tracks
/// the pointer exactly on a square viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionConfig {
    pub mouse_pan_scale: f64,
    pub touch_pan_scale: f64,
    pub wheel_zoom_in_factor: f64,
    pub wheel_zoom_out_factor: f64,
    pub initial_transform: ViewportTransform,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            mouse_pan_scale: DEFAULT_MOUSE_PAN_SCALE,
            touch_pan_scale: DEFAULT_TOUCH_PAN_SCALE,
            wheel_zoom_in_factor: DEFAULT_WHEEL_ZOOM_IN_FACTOR,
            wheel_zoom_out_factor: DEFAULT_WHEEL_ZOOM_OUT_FACTOR,
            initial_transform: default_transform(),
        }
    }
}

impl InteractionConfig {
    pub fn validate(&self) -> Result<(), InteractionConfigError> {
        for (name, value) in [
            ("mouse_pan_scale", self.mouse_pan_scale),
            ("touch_pan_scale", self.touch_pan_scale),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(InteractionConfigError::InvalidPanScale { name, value });
            }
        }

        let zoom_in = self.wheel_zoom_in_factor;
        if !zoom_in.is_finite() || zoom_in <= 1.0 {
            return Err(InteractionConfigError::InvalidZoomInFactor { factor: zoom_in });
        }

        let zoom_out = self.wheel_zoom_out_factor;
        if !(zoom_out > 0.0 && zoom_out < 1.0) {
            return Err(InteractionConfigError::InvalidZoomOutFactor { factor: zoom_out });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    #[test]
    fn test_default_is_valid() {
        let config = InteractionConfig::default();

        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.initial_transform.offset(), Complex::new(-1.5, -1.0));
        assert_eq!(config.initial_transform.zoom(), 0.8);
    }

    #[test]
    fn test_rejects_bad_pan_scales() {
        let config = InteractionConfig {
            touch_pan_scale: 0.0,
            ..InteractionConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(InteractionConfigError::InvalidPanScale {
                name: "touch_pan_scale",
                value: 0.0
            })
        );

        let config = InteractionConfig {
            mouse_pan_scale: f64::INFINITY,
            ..InteractionConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(InteractionConfigError::InvalidPanScale {
                name: "mouse_pan_scale",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_bad_zoom_factors() {
        let config = InteractionConfig {
            wheel_zoom_in_factor: 1.0,
            ..InteractionConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(InteractionConfigError::InvalidZoomInFactor { factor: 1.0 })
        );

        for factor in [0.0, 1.0, 1.5, f64::NAN] {
            let config = InteractionConfig {
                wheel_zoom_out_factor: factor,
                ..InteractionConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(InteractionConfigError::InvalidZoomOutFactor { .. })
            ));
        }
    }
}
