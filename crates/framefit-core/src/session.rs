//! Editing session: one source image, its rotation, and the current frame.
//!
//! A [`Session`] holds everything a single user's framing workflow needs.
//! Every change (new source, rotation, target size) recomputes the frame
//! from scratch. The previous frame is dropped before the new one is built,
//! so at most one encoded buffer is alive per session.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::decode::{decode_image, format_label, DecodeError, DecodedImage, SourceFormat};
use crate::render::{render, RenderError, RenderResult};
use crate::transform::{Rotation, TargetSpec};

/// Extension given to every downloaded frame.
pub const OUTPUT_EXTENSION: &str = "jpg";

/// Errors surfaced to the user by session operations.
///
/// None of these are fatal: the session stays usable and the user can retry.
#[derive(Debug, Error)]
pub enum SessionError {
    /// An operation needs a source image but none is loaded.
    #[error("No image loaded")]
    NoImage,

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Whether the source already has the target size once rotated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    AlreadyTargetSize,
    ResizeRequired,
}

impl FrameStatus {
    pub fn label(self) -> &'static str {
        match self {
            FrameStatus::AlreadyTargetSize => "Already correct size",
            FrameStatus::ResizeRequired => "Resizing required",
        }
    }
}

/// A decoded source and what is known about the file it came from.
#[derive(Debug, Clone)]
pub struct LoadedSource {
    pub file_name: String,
    /// Size of the encoded file in bytes.
    pub byte_size: u64,
    pub format: SourceFormat,
    pub image: DecodedImage,
}

/// Summary of the loaded source for an info panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceInfo {
    pub file_name: String,
    /// Human-readable file size, e.g. `1.5 KB`.
    pub file_size: String,
    /// Unrotated resolution, e.g. `800 x 600`.
    pub resolution: String,
    /// Format label derived from the file name, e.g. `JPEG`.
    pub format: String,
    pub status: FrameStatus,
}

/// Framing state for one user.
#[derive(Debug, Default)]
pub struct Session {
    target: TargetSpec,
    rotation: Rotation,
    source: Option<LoadedSource>,
    result: Option<RenderResult>,
}

impl Session {
    pub fn new(target: TargetSpec) -> Self {
        Self {
            target,
            ..Self::default()
        }
    }

    pub fn target(&self) -> TargetSpec {
        self.target
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn source(&self) -> Option<&LoadedSource> {
        self.source.as_ref()
    }

    /// The most recent frame, if the last render succeeded.
    pub fn result(&self) -> Option<&RenderResult> {
        self.result.as_ref()
    }

    /// Take ownership of the current frame, leaving none behind.
    pub fn take_result(&mut self) -> Option<RenderResult> {
        self.result.take()
    }

    /// Decode `bytes` as the new source and render it with no rotation.
    ///
    /// Unsupported or undecodable input leaves the session untouched, so the
    /// previous source and frame stay available.
    pub fn load(&mut self, file_name: &str, bytes: &[u8]) -> Result<&RenderResult, SessionError> {
        let (format, image) = decode_image(bytes).map_err(|e| {
            warn!(file_name, error = %e, "Failed to load source image");
            e
        })?;

        info!(
            file_name,
            width = image.width,
            height = image.height,
            format = format.display_name(),
            "Loaded source image"
        );

        self.source = Some(LoadedSource {
            file_name: file_name.to_string(),
            byte_size: bytes.len() as u64,
            format,
            image,
        });
        self.rotation = Rotation::Deg0;
        self.render()
    }

    /// Turn the source 90° counter-clockwise and re-render.
    pub fn rotate_left(&mut self) -> Result<&RenderResult, SessionError> {
        self.rotate_to(self.rotation.rotate_left())
    }

    /// Turn the source 90° clockwise and re-render.
    pub fn rotate_right(&mut self) -> Result<&RenderResult, SessionError> {
        self.rotate_to(self.rotation.rotate_right())
    }

    fn rotate_to(&mut self, rotation: Rotation) -> Result<&RenderResult, SessionError> {
        if self.source.is_none() {
            return Err(SessionError::NoImage);
        }
        self.rotation = rotation;
        debug!(rotation = rotation.degrees(), "Rotation changed");
        self.render()
    }

    /// Switch the output size, re-rendering if a source is loaded.
    pub fn set_target(&mut self, target: TargetSpec) -> Result<Option<&RenderResult>, SessionError> {
        self.target = target;
        if self.source.is_none() {
            return Ok(None);
        }
        self.render().map(Some)
    }

    /// Drop the source and frame and return the rotation to 0°.
    ///
    /// The target size is kept.
    pub fn reset(&mut self) {
        self.source = None;
        self.result = None;
        self.rotation = Rotation::Deg0;
    }

    /// Rebuild the frame from the source, target and rotation.
    ///
    /// The previous frame is released first. If rendering fails no frame is
    /// left behind.
    pub fn render(&mut self) -> Result<&RenderResult, SessionError> {
        let source = self.source.as_ref().ok_or(SessionError::NoImage)?;
        self.result = None;

        let result = render(&source.image, self.target, self.rotation).map_err(|e| {
            warn!(error = %e, "Failed to render frame");
            e
        })?;
        let result: &RenderResult = self.result.insert(result);
        Ok(result)
    }

    /// Describe the loaded source for display.
    pub fn source_info(&self) -> Option<SourceInfo> {
        let source = self.source.as_ref()?;
        let displayed = source
            .image
            .dimensions()
            .swapped_if(self.rotation.swaps_dimensions());
        let status = if displayed == self.target.dimensions() {
            FrameStatus::AlreadyTargetSize
        } else {
            FrameStatus::ResizeRequired
        };

        Some(SourceInfo {
            file_name: source.file_name.clone(),
            file_size: format_file_size(source.byte_size),
            resolution: source.image.dimensions().to_string(),
            format: format_label(&source.file_name),
            status,
        })
    }

    /// Default download name without extension: `<stem>_<W>x<H>`.
    pub fn suggested_file_stem(&self) -> Option<String> {
        let source = self.source.as_ref()?;
        Some(format!(
            "{}_{}",
            strip_extension(&source.file_name),
            self.target
        ))
    }

    /// File name for saving the current frame.
    ///
    /// A non-blank `user_input` wins, with its extension replaced by `.jpg`.
    /// Otherwise the name is derived from the source file and target size.
    pub fn download_file_name(&self, user_input: &str) -> Option<String> {
        let input = user_input.trim();
        let stem = if input.is_empty() {
            self.suggested_file_stem()?
        } else {
            strip_extension(input).to_string()
        };
        Some(format!("{}.{}", stem, OUTPUT_EXTENSION))
    }
}

/// Remove a trailing `.ext` (no dots or slashes in `ext`) from a file name.
pub fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if idx + 1 < name.len() && !name[idx + 1..].contains('/') => &name[..idx],
        _ => name,
    }
}

/// Format a byte count with binary units: `0 Bytes`, `512 Bytes`, `1.5 KB`.
///
/// Values are rounded to two decimals and trailing zeros are dropped.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    while unit + 1 < UNITS.len() && bytes >= 1024u64.pow(unit as u32 + 1) {
        unit += 1;
    }

    let value = bytes as f64 / 1024f64.powi(unit as i32);
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{encoded, BMP_HEADER};
    use image::ImageFormat;

    fn small_target() -> TargetSpec {
        TargetSpec::new(120, 160).unwrap()
    }

    fn png(width: u32, height: u32) -> Vec<u8> {
        encoded(width, height, [30, 60, 90, 255], ImageFormat::Png)
    }

    fn loaded_session() -> Session {
        let mut session = Session::new(small_target());
        session.load("holiday.png", &png(80, 60)).unwrap();
        session
    }

    #[test]
    fn test_default_session() {
        let session = Session::default();
        assert_eq!(session.target(), TargetSpec::PORTRAIT_1200X1600);
        assert_eq!(session.rotation(), Rotation::Deg0);
        assert!(session.source().is_none());
        assert!(session.result().is_none());
        assert!(session.source_info().is_none());
    }

    #[test]
    fn test_load_renders_target_sized_frame() {
        let mut session = Session::new(small_target());
        let result = session.load("holiday.png", &png(80, 60)).unwrap();

        assert_eq!((result.width, result.height), (120, 160));
        assert_eq!(result.quality, 92);
        assert_eq!(session.source().unwrap().format, SourceFormat::Png);
    }

    #[test]
    fn test_load_resets_rotation() {
        let mut session = loaded_session();
        session.rotate_right().unwrap();
        assert_eq!(session.rotation(), Rotation::Deg90);

        session.load("next.png", &png(40, 40)).unwrap();
        assert_eq!(session.rotation(), Rotation::Deg0);
    }

    #[test]
    fn test_rotation_cycle() {
        let mut session = loaded_session();
        let mut degrees = Vec::new();
        for _ in 0..4 {
            let result = session.rotate_right().unwrap();
            assert_eq!((result.width, result.height), (120, 160));
            degrees.push(session.rotation().degrees());
        }
        assert_eq!(degrees, vec![90, 180, 270, 0]);

        session.rotate_left().unwrap();
        assert_eq!(session.rotation(), Rotation::Deg270);
    }

    #[test]
    fn test_rotate_without_image() {
        let mut session = Session::default();
        assert!(matches!(session.rotate_left(), Err(SessionError::NoImage)));
        assert!(matches!(session.rotate_right(), Err(SessionError::NoImage)));
        assert_eq!(session.rotation(), Rotation::Deg0);
    }

    #[test]
    fn test_unsupported_format_keeps_state() {
        let mut session = loaded_session();
        session.rotate_right().unwrap();
        let before = session.result().cloned();

        let err = session.load("drawing.bmp", BMP_HEADER).unwrap_err();
        assert!(matches!(
            err,
            SessionError::Decode(DecodeError::UnsupportedFormat(_))
        ));
        assert_eq!(session.source().unwrap().file_name, "holiday.png");
        assert_eq!(session.rotation(), Rotation::Deg90);
        assert_eq!(session.result().cloned(), before);
    }

    #[test]
    fn test_corrupted_file_keeps_state() {
        let mut session = loaded_session();
        let bytes = png(64, 64);

        let err = session.load("broken.png", &bytes[..bytes.len() / 2]).unwrap_err();
        assert!(matches!(
            err,
            SessionError::Decode(DecodeError::CorruptedFile(_))
        ));
        assert_eq!(session.source().unwrap().file_name, "holiday.png");
        assert!(session.result().is_some());
    }

    #[test]
    fn test_set_target_rerenders() {
        let mut session = loaded_session();
        let landscape = TargetSpec::new(256, 144).unwrap();

        let result = session.set_target(landscape).unwrap().unwrap();
        assert_eq!((result.width, result.height), (256, 144));
        assert_eq!(session.target(), landscape);
    }

    #[test]
    fn test_set_target_without_image() {
        let mut session = Session::default();
        let result = session
            .set_target(TargetSpec::LANDSCAPE_2560X1440)
            .unwrap();
        assert!(result.is_none());
        assert_eq!(session.target(), TargetSpec::LANDSCAPE_2560X1440);
    }

    #[test]
    fn test_reset() {
        let mut session = loaded_session();
        session.rotate_left().unwrap();
        session.reset();

        assert!(session.source().is_none());
        assert!(session.result().is_none());
        assert_eq!(session.rotation(), Rotation::Deg0);
        assert_eq!(session.target(), small_target());
        assert!(matches!(session.render(), Err(SessionError::NoImage)));
    }

    #[test]
    fn test_take_result() {
        let mut session = loaded_session();
        let result = session.take_result().unwrap();
        assert!(!result.is_empty());
        assert!(session.result().is_none());
    }

    #[test]
    fn test_source_info() {
        let session = loaded_session();
        let info = session.source_info().unwrap();

        assert_eq!(info.file_name, "holiday.png");
        assert_eq!(info.resolution, "80 x 60");
        assert_eq!(info.format, "PNG");
        assert_eq!(info.status, FrameStatus::ResizeRequired);
        assert!(info.file_size.ends_with("Bytes") || info.file_size.ends_with("KB"));
    }

    #[test]
    fn test_status_accounts_for_rotation() {
        let mut session = Session::new(small_target());
        session.load("sideways.png", &png(160, 120)).unwrap();
        assert_eq!(
            session.source_info().unwrap().status,
            FrameStatus::ResizeRequired
        );

        session.rotate_right().unwrap();
        let info = session.source_info().unwrap();
        assert_eq!(info.status, FrameStatus::AlreadyTargetSize);
        assert_eq!(info.status.label(), "Already correct size");
        // Resolution is always reported unrotated
        assert_eq!(info.resolution, "160 x 120");
    }

    #[test]
    fn test_download_file_name_default() {
        let session = loaded_session();
        assert_eq!(
            session.suggested_file_stem().unwrap(),
            "holiday_120x160"
        );
        assert_eq!(
            session.download_file_name("").unwrap(),
            "holiday_120x160.jpg"
        );
        assert_eq!(
            session.download_file_name("   ").unwrap(),
            "holiday_120x160.jpg"
        );
    }

    #[test]
    fn test_download_file_name_user_input() {
        let session = loaded_session();
        assert_eq!(session.download_file_name("frame").unwrap(), "frame.jpg");
        assert_eq!(session.download_file_name(" frame.png ").unwrap(), "frame.jpg");
        assert_eq!(
            session.download_file_name("my.photo.webp").unwrap(),
            "my.photo.jpg"
        );
    }

    #[test]
    fn test_download_file_name_without_source() {
        let session = Session::default();
        assert!(session.download_file_name("").is_none());
        assert_eq!(session.download_file_name("custom").unwrap(), "custom.jpg");
    }

    #[test]
    fn test_strip_extension() {
        assert_eq!(strip_extension("photo.jpeg"), "photo");
        assert_eq!(strip_extension("archive.tar.gz"), "archive.tar");
        assert_eq!(strip_extension("noext"), "noext");
        assert_eq!(strip_extension("trailing."), "trailing.");
        assert_eq!(strip_extension("dir.d/file"), "dir.d/file");
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1_048_576), "1 MB");
        assert_eq!(format_file_size(2_621_440), "2.5 MB");
        assert_eq!(format_file_size(1_073_741_824), "1 GB");
        assert_eq!(format_file_size(5 * 1_099_511_627_776), "5120 GB");
    }

    #[test]
    fn test_format_file_size_rounds_to_two_decimals() {
        // 1234 / 1024 = 1.2050...
        assert_eq!(format_file_size(1234), "1.21 KB");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(SessionError::NoImage.to_string(), "No image loaded");
    }
}
