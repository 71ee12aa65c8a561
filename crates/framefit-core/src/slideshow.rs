//! Slideshow configuration builder.
//!
//! Collects JPEG file names with per-image display durations and renders the
//! plain-text config file read by the photo frame:
//!
//! ```text
//! [SlideShow Config]
//!
//! /slide_show/a.jpg 5
//! /slide_show/b.jpg 10
//! ```

use std::ops::RangeInclusive;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::decode::SourceFormat;

/// Name the generated config is saved under.
pub const CONFIG_FILE_NAME: &str = "config.txt";

/// First line of the config file.
pub const CONFIG_HEADER: &str = "[SlideShow Config]";

/// Directory on the frame that slides are read from.
pub const SLIDE_DIRECTORY: &str = "/slide_show/";

/// Duration given to newly added slides, in seconds.
pub const DEFAULT_DURATION_SECS: u32 = 5;

/// Accepted slide durations, in seconds.
pub const DURATION_RANGE: RangeInclusive<u32> = 1..=999;

/// Errors from editing or generating a slideshow config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlideshowError {
    /// None of the offered files were JPEGs.
    #[error("Please select JPG image files only")]
    NoJpegFiles,

    /// Duration outside 1..=999 seconds.
    #[error("Invalid duration {0}s, must be between 1 and 999")]
    InvalidDuration(u32),

    #[error("No slide at index {index} (have {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Nothing to generate.
    #[error("Please add at least one image")]
    Empty,
}

/// One image in the slideshow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlideEntry {
    pub file_name: String,
    /// Display time in seconds.
    pub duration: u32,
}

impl SlideEntry {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            duration: DEFAULT_DURATION_SECS,
        }
    }

    /// The config line for this slide, without the newline.
    pub fn config_line(&self) -> String {
        format!("{}{} {}", SLIDE_DIRECTORY, self.file_name, self.duration)
    }
}

/// Ordered list of slides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SlideshowConfig {
    entries: Vec<SlideEntry>,
}

impl SlideshowConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[SlideEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, file_name: &str) -> bool {
        self.entries.iter().any(|e| e.file_name == file_name)
    }

    /// Add files given as `(file name, MIME type)` pairs.
    ///
    /// Only JPEGs are kept, and names already in the list are skipped. Returns
    /// how many slides were added.
    ///
    /// # Errors
    ///
    /// Returns `SlideshowError::NoJpegFiles` if none of the files are JPEGs;
    /// the list is left unchanged.
    pub fn add_files<'a, I>(&mut self, files: I) -> Result<usize, SlideshowError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let jpegs: Vec<&str> = files
            .into_iter()
            .filter(|(_, mime)| SourceFormat::from_mime_type(mime) == Some(SourceFormat::Jpeg))
            .map(|(name, _)| name)
            .collect();

        if jpegs.is_empty() {
            return Err(SlideshowError::NoJpegFiles);
        }

        let before = self.entries.len();
        for name in jpegs {
            if !self.contains(name) {
                self.entries.push(SlideEntry::new(name));
            }
        }

        let added = self.entries.len() - before;
        debug!(added, total = self.entries.len(), "Added slides");
        Ok(added)
    }

    /// Change the display time of the slide at `index`.
    ///
    /// An invalid duration leaves the previous value in place.
    pub fn set_duration(&mut self, index: usize, duration: u32) -> Result<(), SlideshowError> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(SlideshowError::IndexOutOfRange { index, len })?;

        if !DURATION_RANGE.contains(&duration) {
            return Err(SlideshowError::InvalidDuration(duration));
        }
        entry.duration = duration;
        Ok(())
    }

    /// Remove and return the slide at `index`.
    pub fn remove(&mut self, index: usize) -> Result<SlideEntry, SlideshowError> {
        if index >= self.entries.len() {
            return Err(SlideshowError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Render the config file text.
    pub fn generate(&self) -> Result<String, SlideshowError> {
        if self.entries.is_empty() {
            return Err(SlideshowError::Empty);
        }

        let mut out = String::with_capacity(32 + self.entries.len() * 32);
        out.push_str(CONFIG_HEADER);
        out.push_str("\n\n");
        for entry in &self.entries {
            out.push_str(&entry.config_line());
            out.push('\n');
        }
        Ok(out)
    }
}
