//! Plain values for colors expressed in the HSL and HSV notations.
//!
//! These are snapshots produced by [`Color::to_hsl`](crate::Color::to_hsl)
//! and [`Color::to_hsv`](crate::Color::to_hsv), or authored by hand and
//! turned back into a [`Color`](crate::Color) with `to_color`.

mod hsl;
mod hsv;

pub use hsl::Hsl;
pub use hsv::Hsv;
