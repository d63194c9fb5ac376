//! Image validation and dimension probing.

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, ImageReader};

use crate::ItemError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
}

/// Fully decode `bytes`; a body that is not an image is a decode failure.
pub fn decode_image(bytes: &[u8]) -> Result<ImageInfo, ItemError> {
    let format = image::guess_format(bytes)?;
    let image = image::load_from_memory_with_format(bytes, format)?;
    Ok(ImageInfo {
        width: image.width(),
        height: image.height(),
        format,
    })
}

/// Header-only probe, for large images whose pixels are not needed.
pub fn probe_dimensions(bytes: &[u8]) -> Result<(u32, u32), ItemError> {
    let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    if reader.format().is_none() {
        return Err(ItemError::Decode("unrecognised image format".to_string()));
    }
    Ok(reader.into_dimensions()?)
}

pub fn probe_file_dimensions(path: &Path) -> Result<(u32, u32), ItemError> {
    Ok(ImageReader::open(path)?.with_guessed_format()?.into_dimensions()?)
}

/// Lower-case extension of the last URL path segment, if any.
pub fn url_extension(raw: &str) -> Option<String> {
    let parsed = url::Url::parse(raw).ok()?;
    let name = parsed.path_segments()?.next_back()?;
    let (_, ext) = name.rsplit_once('.')?;
    (!ext.is_empty()).then(|| ext.to_ascii_lowercase())
}

/// Last URL path segment without its extension, percent-decoding left as is.
pub fn url_file_stem(raw: &str) -> Option<String> {
    let parsed = url::Url::parse(raw).ok()?;
    let name = parsed.path_segments()?.next_back()?;
    let stem = name.rsplit_once('.').map_or(name, |(stem, _)| stem);
    (!stem.is_empty()).then(|| stem.to_string())
}
