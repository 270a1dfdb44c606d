//! Window parameters.
//!
//! A [`WindowSpec`] says how many frames each window spans, how many of them
//! are shared with the previous window, and whether the final window is
//! zero-padded to full length. Sizes are measured in frames and may be
//! fractional: the delivered window is always `⌊size⌋` frames long, while
//! the read position advances by exactly `size - overlap` frames, carrying
//! the fractional part over to later windows.

use serde::{Deserialize, Serialize};

use crate::error::InvalidWindow;

/// Size, overlap and padding of the windows pulled from a buffer.
///
/// Deserializes from JSON such as `{"size": 1024, "overlap": 512}`;
/// `overlap` defaults to 0 and `pad` to false.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WindowSpec {
    /// Window length in frames (at least 1; the fractional part only affects the hop).
    pub size: f64,
    /// Frames shared between consecutive windows, in `[0, size)`.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub overlap: f64,
    /// Zero-pad the last window(s) to the full `⌊size⌋` frames.
    #[serde(default, skip_serializing_if = "is_false")]
    pub pad: bool,
}

fn is_zero(value: &f64) -> bool {
    *value == 0.0
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl WindowSpec {
    /// Creates non-overlapping, unpadded windows of `size` frames.
    pub fn new(size: f64) -> Self {
        Self {
            size,
            overlap: 0.0,
            pad: false,
        }
    }

    /// Creates windows from durations in seconds at the given sample rate.
    ///
    /// A 40 ms window with 8 ms overlap at 44.1 kHz is `size = 1764`,
    /// `overlap = 352.8`.
    pub fn from_duration(window_seconds: f64, overlap_seconds: f64, sample_rate: f64) -> Self {
        Self::new(window_seconds * sample_rate).with_overlap(overlap_seconds * sample_rate)
    }

    /// Sets the overlap in frames.
    pub fn with_overlap(mut self, overlap: f64) -> Self {
        self.overlap = overlap;
        self
    }

    /// Sets whether the tail is zero-padded.
    pub fn with_pad(mut self, pad: bool) -> Self {
        self.pad = pad;
        self
    }

    /// Enables zero-padding of the tail.
    pub fn padded(self) -> Self {
        self.with_pad(true)
    }

    /// Number of frames in each delivered window.
    pub fn frames(&self) -> usize {
        self.size.floor() as usize
    }

    /// Distance in frames between the starts of consecutive windows.
    pub fn hop(&self) -> f64 {
        self.size - self.overlap
    }

    /// Checks that the window makes forward progress.
    ///
    /// # Errors
    /// Fails if `size` is not a finite number of at least one frame, or if
    /// `overlap` is not a finite value in `[0, size)`.
    pub fn validate(&self) -> Result<(), InvalidWindow> {
        if !self.size.is_finite() || self.size < 1.0 {
            return Err(InvalidWindow::new(
                "size",
                format!("must be a finite number of at least 1 frame, got {}", self.size),
            ));
        }
        if !self.overlap.is_finite() || self.overlap < 0.0 {
            return Err(InvalidWindow::new(
                "overlap",
                format!("must be finite and non-negative, got {}", self.overlap),
            ));
        }
        if self.overlap >= self.size {
            return Err(InvalidWindow::new(
                "overlap",
                format!(
                    "must be smaller than size ({}), got {}",
                    self.size, self.overlap
                ),
            ));
        }
        Ok(())
    }
}
