//! A [`Tone`] is a named [`Color`] that can be described in terms of RGB
//! (red, green, blue), HSL (hue, saturation, lightness) or HSV (hue,
//! saturation, value). Alpha is carried along, so tones work equally well as
//! RGBA, HSLA and HSVA.
//!
//! Two tones are the same if they represent the same color, even when their
//! names differ.
//!
//! <https://en.wikipedia.org/wiki/HSL_and_HSV>

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::convert::util;
use crate::{Color, Component, Error, Hsl, Hsv, Result};

/// An immutable, named color.
#[derive(Clone, Debug)]
pub struct Tone {
    name: String,
    color: Color,
    hue: Component,
}

impl Tone {
    /// Create a tone with the given name.
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self::from_parts(Some(name.into()), color)
    }

    /// Create a tone named after its RGB channels, e.g. pure red becomes
    /// `#ff0000`.
    ///
    /// Tones that only differ in alpha get the same name, so there is no
    /// question of whether the name is ARGB or RGBA.
    pub fn unnamed(color: Color) -> Self {
        Self::from_parts(None, color)
    }

    /// Create a tone, deriving the name from the color when `name` is `None`.
    pub fn from_parts(name: Option<String>, color: Color) -> Self {
        let name = name.unwrap_or_else(|| color.to_hex());
        let (hue, _, _) = util::rgb_to_hue_with_min_max(&color.components());

        Self { name, color, hue }
    }

    /// Create a tone from values that may be missing. The name is derived
    /// when absent; a missing color is an [`Error::InvalidArgument`].
    pub fn try_new(name: Option<&str>, color: Option<Color>) -> Result<Self> {
        let Some(color) = color else {
            return Err(Error::InvalidArgument(format!(
                "a tone called {name:?} was created without a color"
            )));
        };

        Ok(Self::from_parts(name.map(str::to_owned), color))
    }

    /// The name of this tone.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The RGBA color this tone represents.
    pub fn color(&self) -> Color {
        self.color
    }

    /// The red channel, from 0 to 255.
    pub fn red(&self) -> u8 {
        self.color.red
    }

    /// The green channel, from 0 to 255.
    pub fn green(&self) -> u8 {
        self.color.green
    }

    /// The blue channel, from 0 to 255.
    pub fn blue(&self) -> u8 {
        self.color.blue
    }

    /// The alpha channel, from 0 (transparent) to 255 (opaque).
    pub fn alpha(&self) -> u8 {
        self.color.alpha
    }

    /// The hue in degrees, `[0, 360)`. Shades of gray have a hue of 0.
    pub fn hue(&self) -> Component {
        self.hue
    }

    /// The saturation in the HSL model, `[0, 1]`.
    pub fn saturation_l(&self) -> Component {
        let (min, max) = self.min_max();
        util::hsl_saturation_lightness(min, max).0
    }

    /// The saturation in the HSV model, `[0, 1]`.
    pub fn saturation_v(&self) -> Component {
        let (min, max) = self.min_max();
        util::hsv_saturation_value(min, max).0
    }

    /// The lightness in the HSL model, `[0, 1]`.
    pub fn lightness(&self) -> Component {
        let (min, max) = self.min_max();
        util::hsl_saturation_lightness(min, max).1
    }

    /// The value (brightness) in the HSV model, `[0, 1]`.
    pub fn value(&self) -> Component {
        let (min, max) = self.min_max();
        util::hsv_saturation_value(min, max).1
    }

    fn min_max(&self) -> (Component, Component) {
        util::min_max(&self.color.components())
    }

    /// This tone in the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        self.color.to_hsl()
    }

    /// This tone in the HSV notation.
    pub fn to_hsv(&self) -> Hsv {
        self.color.to_hsv()
    }
}

impl From<Color> for Tone {
    fn from(value: Color) -> Self {
        Self::unnamed(value)
    }
}

impl PartialEq for Tone {
    fn eq(&self, other: &Self) -> bool {
        self.color == other.color
    }
}

impl Eq for Tone {}

impl Hash for Tone {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.color.hash(state);
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.color.to_hex())
    }
}
