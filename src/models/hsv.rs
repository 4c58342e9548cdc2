//! Model a color with the HSV notation.

use crate::Component;

/// A color specified with hue, saturation and value (brightness).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    /// The hue in degrees, `[0, 360)`.
    pub hue: Component,
    /// The saturation relative to value, `[0, 1]`.
    pub saturation: Component,
    /// The value, `[0, 1]`. This is the largest of the RGB channels.
    pub value: Component,
    /// The alpha component, `[0, 1]`.
    pub alpha: Component,
}

impl Hsv {
    /// Create a new color with HSV (hue, saturation, value) components.
    pub fn new(hue: Component, saturation: Component, value: Component, alpha: Component) -> Self {
        Self {
            hue,
            saturation,
            value,
            alpha,
        }
    }
}
