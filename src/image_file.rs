//! Loading, decoding and saving images through the `image` crate.
//!
//! Every function here is a single blocking call. Failures are returned to the
//! caller as they happen; nothing is retried.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

use image::{DynamicImage, ImageFormat, ImageReader};

use crate::{Error, Result};

/// Load and decode the image at `path`. The format is detected from the file
/// contents, falling back to the extension.
pub fn load_image(path: impl AsRef<Path>) -> Result<DynamicImage> {
    let path = path.as_ref();

    if !path.is_file() {
        tracing::warn!("image not found: {}", path.display());
        return Err(Error::NotFound(path.to_path_buf()));
    }

    let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    tracing::debug!(
        "loaded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );

    Ok(image)
}

/// Decode an encoded image held in memory. Empty input is rejected as an
/// invalid argument.
pub fn decode_bytes(bytes: &[u8]) -> Result<DynamicImage> {
    if bytes.is_empty() {
        return Err(Error::InvalidArgument(
            "cannot decode an image from no bytes".to_string(),
        ));
    }

    let image = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .decode()?;
    tracing::debug!("decoded {} bytes ({}x{})", bytes.len(), image.width(), image.height());

    Ok(image)
}

/// Write `image` to `path`.
///
/// `format` names the codec, e.g. `"png"` or `"jpg"`. It does not have to
/// agree with the extension of `path`. When it is `None` the codec is chosen
/// from the extension.
pub fn save_image(
    image: &DynamicImage,
    path: impl AsRef<Path>,
    format: Option<&str>,
) -> Result<()> {
    let path = path.as_ref();
    let format = match format {
        Some(name) => parse_format(name)?,
        None => format_of_path(path)?,
    };

    write_image(image, path, format)
}

/// Decode an encoded image and write it to `path`, re-encoded with the codec
/// implied by the extension of `path`. If the extension names no codec, the
/// format of `bytes` is kept.
pub fn save_bytes(bytes: &[u8], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let image = decode_bytes(bytes)?;

    let format = match ImageFormat::from_path(path) {
        Ok(format) => format,
        Err(_) => image::guess_format(bytes)?,
    };

    write_image(&image, path, format)
}

fn write_image(image: &DynamicImage, path: &Path, format: ImageFormat) -> Result<()> {
    // JPEG has no alpha channel.
    let image = if format == ImageFormat::Jpeg && image.color().has_alpha() {
        Cow::Owned(DynamicImage::ImageRgb8(image.to_rgb8()))
    } else {
        Cow::Borrowed(image)
    };

    let mut writer = BufWriter::new(File::create(path)?);
    image.write_to(&mut writer, format)?;
    writer.flush()?;

    tracing::debug!(
        "saved {} as {:?} ({}x{})",
        path.display(),
        format,
        image.width(),
        image.height()
    );

    Ok(())
}

fn parse_format(name: &str) -> Result<ImageFormat> {
    ImageFormat::from_extension(name.trim_start_matches('.')).ok_or_else(|| {
        tracing::warn!("unknown image format: {name}");
        Error::UnsupportedFormat(name.to_string())
    })
}

fn format_of_path(path: &Path) -> Result<ImageFormat> {
    ImageFormat::from_path(path).map_err(|_| {
        tracing::warn!("no image format for path: {}", path.display());
        Error::UnsupportedFormat(path.display().to_string())
    })
}
