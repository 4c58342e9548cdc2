//! Conversions between the RGB channels of a [`Color`] and the HSL/HSV
//! notations.
//!
//! Hue is shared by both notations. Achromatic colors (all channels equal)
//! have no hue information; they report a hue of 0 and a saturation of 0 in
//! both notations.
//!
//! ```rust
//! use palettest::Color;
//! let hsl = Color::rgb(222, 250, 206).to_hsl();
//! assert!((hsl.hue - 98.1818).abs() < 1.0e-3);
//! assert_eq!(hsl.to_color(), Color::rgb(222, 250, 206));
//! ```

use crate::{
    color::{Color, Components},
    math::to_channel,
    models::{Hsl, Hsv},
};

impl Color {
    /// Convert this color to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        let Components(hue, saturation, lightness) = util::rgb_to_hsl(&self.components());
        Hsl::new(hue, saturation, lightness, self.normalized_alpha())
    }

    /// Convert this color to the HSV notation.
    pub fn to_hsv(&self) -> Hsv {
        let Components(hue, saturation, value) = util::rgb_to_hsv(&self.components());
        Hsv::new(hue, saturation, value, self.normalized_alpha())
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to 8-bit RGB channels.
    pub fn to_color(&self) -> Color {
        let rgb = util::hsl_to_rgb(&Components(self.hue, self.saturation, self.lightness));
        quantize(rgb, self.alpha)
    }
}

impl Hsv {
    /// Convert this color from the HSV notation to 8-bit RGB channels.
    pub fn to_color(&self) -> Color {
        let rgb = util::hsv_to_rgb(&Components(self.hue, self.saturation, self.value));
        quantize(rgb, self.alpha)
    }
}

fn quantize(Components(red, green, blue): Components, alpha: crate::Component) -> Color {
    Color::rgba(
        to_channel(red),
        to_channel(green),
        to_channel(blue),
        to_channel(alpha),
    )
}

pub(crate) mod util {
    use crate::{
        color::{Component, Components},
        math::{clamp_unit, normalize_hue},
    };

    /// The smallest and largest of the normalized RGB components.
    pub fn min_max(from: &Components) -> (Component, Component) {
        let Components(red, green, blue) = *from;
        (red.min(green).min(blue), red.max(green).max(blue))
    }

    /// Calculate the hue from normalized RGB components and return it along
    /// with the min and max RGB values.
    ///
    /// When more than one channel holds the maximum, red wins over green and
    /// green wins over blue.
    pub fn rgb_to_hue_with_min_max(from: &Components) -> (Component, Component, Component) {
        let Components(red, green, blue) = *from;
        let (min, max) = min_max(from);

        let chroma = max - min;

        let hue = if chroma == 0.0 {
            0.0
        } else {
            let raw = if red == max {
                (green - blue) / chroma
            } else if green == max {
                2.0 + (blue - red) / chroma
            } else {
                4.0 + (red - green) / chroma
            };
            normalize_hue(raw * 60.0)
        };

        (hue, min, max)
    }

    /// HSL saturation and lightness from the min and max RGB values.
    pub fn hsl_saturation_lightness(min: Component, max: Component) -> (Component, Component) {
        let chroma = max - min;
        let lightness = (max + min) / 2.0;

        let saturation = if chroma == 0.0 {
            0.0
        } else {
            chroma / (1.0 - (2.0 * lightness - 1.0).abs())
        };

        (clamp_unit(saturation), lightness)
    }

    /// HSV saturation and value from the min and max RGB values.
    pub fn hsv_saturation_value(min: Component, max: Component) -> (Component, Component) {
        let saturation = if max == 0.0 { 0.0 } else { (max - min) / max };
        (saturation, max)
    }

    /// Convert from RGB notation to HSL notation.
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);
        let (saturation, lightness) = hsl_saturation_lightness(min, max);
        Components(hue, saturation, lightness)
    }

    /// Convert from RGB notation to HSV notation.
    pub fn rgb_to_hsv(from: &Components) -> Components {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);
        let (saturation, value) = hsv_saturation_value(min, max);
        Components(hue, saturation, value)
    }

    /// Convert from HSL notation to RGB notation.
    /// <https://drafts.csswg.org/css-color-4/#hsl-to-rgb>
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let hue = normalize_hue(from.0);
        let saturation = clamp_unit(from.1);
        let lightness = clamp_unit(from.2);

        if saturation <= 0.0 {
            return Components(lightness, lightness, lightness);
        }

        macro_rules! f {
            ($n:expr) => {{
                let k = ($n + hue / 30.0) % 12.0;
                let a = saturation * lightness.min(1.0 - lightness);
                lightness - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
            }};
        }

        Components(f!(0.0), f!(8.0), f!(4.0))
    }

    /// Convert from HSV notation to RGB notation.
    pub fn hsv_to_rgb(from: &Components) -> Components {
        let hue = normalize_hue(from.0);
        let saturation = clamp_unit(from.1);
        let value = clamp_unit(from.2);

        if saturation <= 0.0 {
            return Components(value, value, value);
        }

        macro_rules! f {
            ($n:expr) => {{
                let k = ($n + hue / 60.0) % 6.0;
                value - value * saturation * k.min(4.0 - k).clamp(0.0, 1.0)
            }};
        }

        Components(f!(5.0), f!(3.0), f!(1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::util::*;
    use super::*;
    use crate::{assert_component_eq, Component};

    #[test]
    fn hue_of_primaries() {
        #[rustfmt::skip]
        const TESTS: &[(u8, u8, u8, Component)] = &[
            (255, 0, 0, 0.0),
            (255, 255, 0, 60.0),
            (0, 255, 0, 120.0),
            (0, 255, 255, 180.0),
            (0, 0, 255, 240.0),
            (255, 0, 255, 300.0),
        ];

        for &(r, g, b, hue) in TESTS {
            let (actual, _, _) = rgb_to_hue_with_min_max(&Color::rgb(r, g, b).components());
            assert_component_eq!(actual, hue);
        }
    }

    #[test]
    fn hue_wraps_for_red_with_more_blue() {
        // (g - b) is negative here, so the raw hue is below zero.
        let (hue, _, _) = rgb_to_hue_with_min_max(&Color::rgb(255, 0, 51).components());
        assert_component_eq!(hue, 348.0);
    }

    #[test]
    fn achromatic_has_no_hue_or_saturation() {
        for v in [0, 50, 128, 255] {
            let c = Color::rgb(v, v, v).components();
            let Components(hue, s_l, _) = rgb_to_hsl(&c);
            let Components(_, s_v, _) = rgb_to_hsv(&c);
            assert_eq!(hue, 0.0);
            assert_eq!(s_l, 0.0);
            assert_eq!(s_v, 0.0);
        }
    }

    #[test]
    fn hsl_and_hsv_of_deface() {
        let c = Color::rgb(222, 250, 206).components();

        let Components(hue, saturation, lightness) = rgb_to_hsl(&c);
        assert_component_eq!(hue, 98.1818);
        assert_component_eq!(saturation, 0.8148);
        assert_component_eq!(lightness, 0.8941);

        let Components(hue, saturation, value) = rgb_to_hsv(&c);
        assert_component_eq!(hue, 98.1818);
        assert_component_eq!(saturation, 0.1760);
        assert_component_eq!(value, 0.9804);
    }

    #[test]
    fn saturation_and_value_from_min_max() {
        let c = Color::rgb(222, 250, 206).components();
        let (min, max) = min_max(&c);
        let (_, tmin, tmax) = rgb_to_hue_with_min_max(&c);
        assert_eq!((min, max), (tmin, tmax));

        let Components(_, s_l, l) = rgb_to_hsl(&c);
        assert_eq!(hsl_saturation_lightness(min, max), (s_l, l));
        let Components(_, s_v, v) = rgb_to_hsv(&c);
        assert_eq!(hsv_saturation_value(min, max), (s_v, v));

        assert_eq!(hsv_saturation_value(0.0, 0.0), (0.0, 0.0));
        assert_eq!(hsl_saturation_lightness(1.0, 1.0), (0.0, 1.0));
    }

    #[test]
    fn model_values_carry_alpha() {
        let c = Color::rgba(222, 250, 206, 51);
        assert_component_eq!(c.to_hsl().alpha, 0.2);
        assert_component_eq!(c.to_hsv().alpha, 0.2);
    }

    #[test]
    fn back_to_color() {
        #[rustfmt::skip]
        const COLORS: &[Color] = &[
            Color::BLACK, Color::WHITE, Color::RED, Color::GREEN, Color::BLUE,
            Color::YELLOW, Color::CYAN, Color::MAGENTA,
            Color::rgb(222, 250, 206),
            Color::rgb(210, 105, 30),
            Color::rgba(50, 50, 50, 0),
            Color::rgba(12, 200, 99, 128),
        ];

        for &color in COLORS {
            assert_eq!(color.to_hsl().to_color(), color, "hsl {color}");
            assert_eq!(color.to_hsv().to_color(), color, "hsv {color}");
        }
    }

    #[test]
    fn authored_in_hsl() {
        assert_eq!(Hsl::new(25.0, 0.75, 0.470588, 1.0).to_color(), Color::rgb(210, 105, 30));
        assert_eq!(Hsl::new(-120.0, 1.0, 0.5, 1.0).to_color(), Color::BLUE);
        assert_eq!(Hsv::new(120.0, 1.0, 1.0, 1.0).to_color(), Color::GREEN);
        assert_eq!(Hsv::new(0.0, 0.0, 0.5, 1.0).to_color(), Color::rgb(128, 128, 128));
    }
}
