//! A [`Color`] is an 8-bit per channel RGBA value. It is the source every
//! other representation in this crate is derived from.

use std::fmt;
use std::str::FromStr;

use crate::Error;

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all derived components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all derived components are stored as.
pub type Component = f64;

/// Represent the three normalized color channels of a color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

/// A color with red, green, blue and alpha channels, each from 0 to 255.
///
/// Equality and hashing are structural over all four channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    /// The red channel.
    pub red: u8,
    /// The green channel.
    pub green: u8,
    /// The blue channel.
    pub blue: u8,
    /// The alpha channel. 255 is fully opaque.
    pub alpha: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Opaque green.
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    /// Opaque blue.
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    /// Opaque yellow.
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    /// Opaque cyan.
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    /// Opaque magenta.
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);

    /// Create an opaque color.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, u8::MAX)
    }

    /// Create a color with an explicit alpha channel.
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Unpack a color stored as `0xAARRGGBB`.
    pub const fn from_argb(argb: u32) -> Self {
        Self::rgba(
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
            (argb >> 24) as u8,
        )
    }

    /// Pack this color as `0xAARRGGBB`.
    pub const fn to_argb(&self) -> u32 {
        (self.alpha as u32) << 24
            | (self.red as u32) << 16
            | (self.green as u32) << 8
            | self.blue as u32
    }

    /// The red, green and blue channels scaled to `[0, 1]`.
    pub fn components(&self) -> Components {
        Components(
            self.red as Component,
            self.green as Component,
            self.blue as Component,
        )
        .map(|c| c / 255.0)
    }

    /// The alpha channel scaled to `[0, 1]`.
    pub fn normalized_alpha(&self) -> Component {
        self.alpha as Component / 255.0
    }

    /// Format the color as `#rrggbb`. Alpha is not included.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alpha == u8::MAX {
            f.write_str(&self.to_hex())
        } else {
            write!(f, "{}{:02x}", self.to_hex(), self.alpha)
        }
    }
}

/// Parses `#rgb`, `#rrggbb` and `#rrggbbaa`. The leading `#` is optional.
impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidArgument(format!("\"{s}\" is not a hex color"));

        let digits = s.strip_prefix('#').unwrap_or(s);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());

        match digits.len() {
            3 => {
                let nibble = |i: usize| {
                    u8::from_str_radix(&digits[i..i + 1], 16)
                        .map(|n| n * 17)
                        .map_err(|_| invalid())
                };
                Ok(Self::rgb(nibble(0)?, nibble(1)?, nibble(2)?))
            }
            6 => Ok(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(invalid()),
        }
    }
}

impl From<[u8; 4]> for Color {
    fn from([red, green, blue, alpha]: [u8; 4]) -> Self {
        Self::rgba(red, green, blue, alpha)
    }
}

impl From<Color> for [u8; 4] {
    fn from(value: Color) -> Self {
        [value.red, value.green, value.blue, value.alpha]
    }
}

#[cfg(feature = "image")]
impl From<image::Rgba<u8>> for Color {
    fn from(value: image::Rgba<u8>) -> Self {
        Self::from(value.0)
    }
}

#[cfg(feature = "image")]
impl From<Color> for image::Rgba<u8> {
    fn from(value: Color) -> Self {
        image::Rgba(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn rgb_is_opaque() {
        let c = Color::rgb(222, 250, 206);
        assert_eq!(c, Color::rgba(222, 250, 206, 255));
        assert_eq!(Color::RED, Color::rgba(255, 0, 0, 255));
    }

    #[test]
    fn argb_packing() {
        let c = Color::rgba(0xde, 0xfa, 0xce, 0x32);
        assert_eq!(c.to_argb(), 0x32deface);
        assert_eq!(Color::from_argb(0x32deface), c);
        assert_eq!(Color::from_argb(0xffff0000), Color::RED);
    }

    #[test]
    fn components_are_normalized() {
        let c = Color::rgba(255, 0, 51, 102);
        let Components(r, g, b) = c.components();
        assert_component_eq!(r, 1.0);
        assert_component_eq!(g, 0.0);
        assert_component_eq!(b, 0.2);
        assert_component_eq!(c.normalized_alpha(), 0.4);
    }

    #[test]
    fn hex_ignores_alpha() {
        assert_eq!(Color::rgb(222, 250, 206).to_hex(), "#deface");
        assert_eq!(Color::rgba(222, 250, 206, 50).to_hex(), "#deface");
        assert_eq!(Color::rgb(1, 2, 3).to_hex(), "#010203");
    }

    #[test]
    fn display_includes_alpha_only_when_translucent() {
        assert_eq!(Color::RED.to_string(), "#ff0000");
        assert_eq!(Color::rgba(255, 0, 0, 0x80).to_string(), "#ff000080");
    }

    #[test]
    fn parse_hex() {
        assert_eq!("#deface".parse::<Color>().unwrap(), Color::rgb(222, 250, 206));
        assert_eq!("DEFACE".parse::<Color>().unwrap(), Color::rgb(222, 250, 206));
        assert_eq!("#f0a".parse::<Color>().unwrap(), Color::rgb(255, 0, 170));
        assert_eq!(
            "#defacE32".parse::<Color>().unwrap(),
            Color::rgba(222, 250, 206, 50)
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        for s in ["", "#", "#12345", "#gggggg", "#ffé", "red", "+fffff"] {
            assert!(
                matches!(s.parse::<Color>(), Err(Error::InvalidArgument(_))),
                "{s} should not parse"
            );
        }
    }

    #[cfg(feature = "image")]
    #[test]
    fn pixel_conversion() {
        let pixel = image::Rgba([1, 2, 3, 4]);
        let c = Color::from(pixel);
        assert_eq!(c, Color::rgba(1, 2, 3, 4));
        assert_eq!(image::Rgba::<u8>::from(c), pixel);
    }
}
