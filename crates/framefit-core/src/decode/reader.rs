//! Source image decoding with EXIF orientation handling.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::DynamicImage;
use tracing::{debug, warn};

use super::{DecodeError, DecodedImage, Orientation, SourceFormat};

/// Detect the format of encoded image bytes from their magic number.
///
/// # Errors
///
/// Returns `DecodeError::UnsupportedFormat` if the bytes are not WebP, JPEG,
/// GIF or PNG.
pub fn detect_format(bytes: &[u8]) -> Result<SourceFormat, DecodeError> {
    let format = image::guess_format(bytes)
        .map_err(|_| DecodeError::UnsupportedFormat("unrecognized data".to_string()))?;

    SourceFormat::from_image_format(format).ok_or_else(|| {
        warn!(?format, "Rejected unsupported image format");
        DecodeError::UnsupportedFormat(format!("{:?}", format))
    })
}

/// Decode a WebP, JPEG, GIF or PNG image, applying EXIF orientation.
///
/// GIFs decode to their first frame. Alpha is preserved so transparent
/// regions can be composited onto the canvas background.
///
/// # Errors
///
/// Returns `DecodeError::UnsupportedFormat` for any other format and
/// `DecodeError::CorruptedFile` if the data cannot be decoded.
pub fn decode_image(bytes: &[u8]) -> Result<(SourceFormat, DecodedImage), DecodeError> {
    let format = detect_format(bytes)?;
    let orientation = extract_orientation(bytes);

    let img = image::load_from_memory_with_format(bytes, format.to_image_format())
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let decoded = DecodedImage::from_rgba_image(apply_orientation(img, orientation).into_rgba8());
    if decoded.is_empty() {
        return Err(DecodeError::EmptyImage);
    }

    debug!(
        ?format,
        ?orientation,
        width = decoded.width,
        height = decoded.height,
        "Decoded source image"
    );

    Ok((format, decoded))
}

/// Extract EXIF orientation from encoded bytes.
///
/// Returns `Orientation::Normal` if no EXIF data is found or orientation
/// cannot be determined.
fn extract_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);

    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default(),
        Err(_) => Orientation::Normal,
    }
}

/// Apply EXIF orientation transformation to an image.
fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}
