//! Multi-channel sample blocks.
//!
//! A [`Block`] is a frames × channels matrix stored interleaved, one frame
//! after another. Sources produce blocks of arbitrary length; the window
//! buffer returns blocks of the requested window length.

use std::fmt;
use std::slice::ChunksExact;

use crate::error::{BlockError, BlockResult};

/// A numeric sample type.
///
/// `Default::default()` is taken as the zero sample, used for padding.
pub trait Sample: Copy + Default + PartialEq + fmt::Debug {}

impl<T> Sample for T where T: Copy + Default + PartialEq + fmt::Debug {}

/// A 2-D block of samples, frames × channels, stored interleaved.
///
/// The only block allowed to have zero channels is an empty one, returned
/// when a stream ends before its channel count was ever known.
#[derive(Debug, Clone, PartialEq)]
pub struct Block<S> {
    samples: Vec<S>,
    channels: usize,
}

impl<S: Sample> Block<S> {
    /// Creates a block from interleaved samples.
    ///
    /// # Errors
    /// Fails if `channels` is zero or `samples` is not a whole number of frames.
    pub fn new(channels: usize, samples: Vec<S>) -> BlockResult<Self> {
        if channels == 0 {
            return Err(BlockError::ZeroChannels);
        }
        if samples.len() % channels != 0 {
            return Err(BlockError::PartialFrame {
                len: samples.len(),
                channels,
            });
        }
        Ok(Self { samples, channels })
    }

    /// Creates a single-channel block.
    pub fn mono(samples: Vec<S>) -> Self {
        Self {
            samples,
            channels: 1,
        }
    }

    /// Creates a block from a list of frames (rows).
    ///
    /// The channel count is taken from the first frame, so at least one
    /// frame is required.
    pub fn from_frames<F: AsRef<[S]>>(frames: &[F]) -> BlockResult<Self> {
        let channels = frames.first().map_or(0, |frame| frame.as_ref().len());
        if channels == 0 {
            return Err(BlockError::ZeroChannels);
        }

        let mut samples = Vec::with_capacity(frames.len() * channels);
        for (index, frame) in frames.iter().enumerate() {
            let frame = frame.as_ref();
            if frame.len() != channels {
                return Err(BlockError::RaggedFrame {
                    index,
                    expected: channels,
                    found: frame.len(),
                });
            }
            samples.extend_from_slice(frame);
        }
        Ok(Self { samples, channels })
    }

    /// Creates a block from planar channel data (one slice per channel).
    pub fn from_channels<C: AsRef<[S]>>(channels: &[C]) -> BlockResult<Self> {
        if channels.is_empty() {
            return Err(BlockError::ZeroChannels);
        }
        let frames = channels[0].as_ref().len();
        for (index, channel) in channels.iter().enumerate() {
            let found = channel.as_ref().len();
            if found != frames {
                return Err(BlockError::RaggedChannel {
                    index,
                    expected: frames,
                    found,
                });
            }
        }

        let samples = (0..frames)
            .flat_map(move |frame| channels.iter().map(move |channel| channel.as_ref()[frame]))
            .collect();
        Ok(Self {
            samples,
            channels: channels.len(),
        })
    }

    /// Creates a block of `frames` zero frames.
    pub fn zeros(frames: usize, channels: usize) -> BlockResult<Self> {
        Self::new(channels, vec![S::default(); frames * channels])
    }

    /// Creates a block with no frames.
    pub fn empty(channels: usize) -> Self {
        Self {
            samples: Vec::new(),
            channels,
        }
    }

    /// Joins blocks end to end.
    ///
    /// Empty blocks are skipped; every other block must share one channel count.
    pub fn concat(blocks: &[Block<S>]) -> BlockResult<Self> {
        let mut non_empty = blocks.iter().filter(|block| !block.is_empty());
        let Some(first) = non_empty.next() else {
            let channels = blocks.iter().map(|block| block.channels).find(|&c| c > 0);
            return Ok(Self::empty(channels.unwrap_or(0)));
        };

        let mut joined = first.clone();
        for block in non_empty {
            if block.channels != joined.channels {
                return Err(BlockError::ChannelMismatch {
                    expected: joined.channels,
                    found: block.channels,
                });
            }
            joined.samples.extend_from_slice(&block.samples);
        }
        Ok(joined)
    }

    /// Builds a block without validation.
    pub(crate) fn from_parts(channels: usize, samples: Vec<S>) -> Self {
        debug_assert!(
            channels > 0 || samples.is_empty(),
            "samples without channels"
        );
        debug_assert!(channels == 0 || samples.len() % channels == 0);
        Self { samples, channels }
    }

    /// Right-pads with zero frames up to `frames` frames.
    pub(crate) fn pad_to(&mut self, frames: usize) {
        let target = frames.saturating_mul(self.channels);
        if self.samples.len() < target {
            self.samples.resize(target, S::default());
        }
    }

    /// Number of channels.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Number of frames.
    pub fn frames(&self) -> usize {
        if self.channels == 0 {
            0
        } else {
            self.samples.len() / self.channels
        }
    }

    /// Returns true if the block holds no frames.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns frame `index`, one sample per channel.
    pub fn frame(&self, index: usize) -> Option<&[S]> {
        if self.channels == 0 {
            return None;
        }
        let start = index.checked_mul(self.channels)?;
        self.samples.get(start..start.checked_add(self.channels)?)
    }

    /// Iterates over frames in order.
    pub fn iter_frames(&self) -> ChunksExact<'_, S> {
        self.samples.chunks_exact(self.channels.max(1))
    }

    /// Iterates over the samples of one channel, or `None` if out of range.
    pub fn channel(&self, channel: usize) -> Option<impl Iterator<Item = S> + '_> {
        if channel >= self.channels {
            return None;
        }
        Some(
            self.samples
                .iter()
                .skip(channel)
                .step_by(self.channels)
                .copied(),
        )
    }

    /// Interleaved samples.
    pub fn as_interleaved(&self) -> &[S] {
        &self.samples
    }

    /// Consumes the block, returning its interleaved samples.
    pub fn into_interleaved(self) -> Vec<S> {
        self.samples
    }

    /// Frames as owned rows.
    pub fn to_frames(&self) -> Vec<Vec<S>> {
        self.iter_frames().map(<[S]>::to_vec).collect()
    }
}
