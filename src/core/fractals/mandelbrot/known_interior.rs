use crate::core::data::complex::Complex;

/// True when `c` lies inside the main cardioid or the period-2 disk.
///
/// Both regions are in the set, so points here never escape and the iteration
/// loop can be skipped.
#[must_use]
pub fn is_known_interior(c: Complex) -> bool {
    in_main_cardioid(c) || in_period_two_bulb(c)
}

#[must_use]
pub fn in_main_cardioid(c: Complex) -> bool {
    let x = c.real - 0.25;
    let y_squared = c.imag * c.imag;
    let q = x * x + y_squared;

    q * (q + x) < 0.25 * y_squared
}

#[must_use]
pub fn in_period_two_bulb(c: Complex) -> bool {
    let x = c.real + 1.0;

    x * x + c.imag * c.imag < 0.0625
}
