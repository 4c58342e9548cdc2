//! Math utility functions.

use num_traits::{Euclid, Float};

use crate::Component;

/// Wrap a hue in degrees into `[0, 360)`. Negative hues wrap around instead
/// of keeping their sign.
pub fn normalize_hue(hue: Component) -> Component {
    let hue = Euclid::rem_euclid(&hue, &360.0);
    // Tiny negative inputs round up to exactly 360.0.
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}

/// Clamp a value into `[0, 1]`. NaN becomes 0.
pub fn clamp_unit<T: Float>(value: T) -> T {
    if value.is_nan() {
        T::zero()
    } else {
        value.max(T::zero()).min(T::one())
    }
}

/// Quantize a normalized component to an 8-bit channel.
pub fn to_channel(value: Component) -> u8 {
    (clamp_unit(value) * 255.0).round() as u8
}
