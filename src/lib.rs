//! palettest models colors as named, immutable [`Tone`]s that can be queried
//! in the RGB, HSL and HSV color models, along with the image file helpers
//! needed to get colors in and out of pictures.
//!
//! ```rust
//! use palettest::{Color, Tone};
//! let tone = Tone::unnamed(Color::rgb(222, 250, 206));
//! assert_eq!(tone.name(), "#deface");
//! assert_eq!(tone.to_string(), "#deface (#deface)");
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod error;
mod math;
mod models;
mod tone;

#[cfg(feature = "image")]
pub mod image_file;


pub use color::{Color, Component, Components};
pub use error::{Error, Result};
pub use models::{Hsl, Hsv};
pub use tone::Tone;
