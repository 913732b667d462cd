use crate::core::data::colour::Colour;

const K: [f64; 4] = [1.0, 2.0 / 3.0, 1.0 / 3.0, 3.0];

fn fract(x: f64) -> f64 {
    x - x.floor()
}

fn mix(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

fn to_channel(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Branch-free HSV to RGB, the same formulation fragment shaders use.
///
/// Hue wraps, so any real value is accepted; `saturation` and `value` are
/// expected in `[0, 1]`.
#[must_use]
pub fn hsv_to_colour(hue: f64, saturation: f64, value: f64) -> Colour {
    let channel = |k: f64| {
        let p = (fract(hue + k) * 6.0 - K[3]).abs();
        value * mix(K[0], (p - K[0]).clamp(0.0, 1.0), saturation)
    };

    Colour {
        r: to_channel(channel(K[0])),
        g: to_channel(channel(K[1])),
        b: to_channel(channel(K[2])),
    }
}
