//! Model a color with the HSL notation.

use crate::Component;

/// A color specified with hue, saturation and lightness.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    /// The hue in degrees, `[0, 360)`.
    pub hue: Component,
    /// The saturation relative to lightness, `[0, 1]`.
    pub saturation: Component,
    /// The lightness, `[0, 1]`.
    pub lightness: Component,
    /// The alpha component, `[0, 1]`.
    pub alpha: Component,
}

impl Hsl {
    /// Create a new color with HSL (hue, saturation, lightness) components.
    pub fn new(
        hue: Component,
        saturation: Component,
        lightness: Component,
        alpha: Component,
    ) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha,
        }
    }
}
