//! Synthetic streams for exercising the window buffer.
//!
//! Samples are numbered in stream order: sample `c` of frame `f` in a
//! `channels`-wide stream has the value `f * channels + c`. A window's
//! first sample therefore tells exactly which stream frame it starts at.

use framewise::{Block, BlockSource, BufferError, WindowBuffer, WindowSpec};
use thiserror::Error;

/// Interleaved samples `0, 1, 2, ...` for `frames` frames of `channels` channels.
pub fn indexed_samples(frames: usize, channels: usize) -> Vec<f64> {
    (0..frames * channels).map(|i| i as f64).collect()
}

/// Cuts interleaved samples into blocks whose frame counts cycle through `lengths`.
///
/// Zero lengths produce empty blocks. An empty `lengths` yields one block.
pub fn chunk_frames(samples: &[f64], channels: usize, lengths: &[usize]) -> Vec<Block<f64>> {
    if lengths.iter().all(|&len| len == 0) {
        return vec![Block::new(channels, samples.to_vec()).expect("whole frames")];
    }

    let mut blocks = Vec::new();
    let mut offset = 0;
    for &len in lengths.iter().cycle() {
        if offset >= samples.len() {
            break;
        }
        let end = (offset + len * channels).min(samples.len());
        blocks.push(Block::new(channels, samples[offset..end].to_vec()).expect("whole frames"));
        offset = end;
    }
    blocks
}

/// An indexed stream of `frames` frames cut by `lengths`.
pub fn indexed_stream(frames: usize, channels: usize, lengths: &[usize]) -> Vec<Block<f64>> {
    chunk_frames(&indexed_samples(frames, channels), channels, lengths)
}

/// Pulls `window` until exhaustion, panicking on any other error.
pub fn collect_windows<B>(buffer: &mut WindowBuffer<f64, B>, window: WindowSpec) -> Vec<Block<f64>>
where
    B: BlockSource<f64>,
    B::Error: std::fmt::Debug,
{
    let mut windows = Vec::new();
    loop {
        match buffer.pull(window) {
            Ok(block) => windows.push(block),
            Err(BufferError::Exhausted) => return windows,
            Err(err) => panic!("unexpected buffer error: {:?}", err),
        }
    }
}

/// Error raised by [`FlakySource`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("source fault after {blocks} blocks")]
pub struct SourceFault {
    /// Blocks delivered before the fault.
    pub blocks: usize,
}

/// A source that delivers some blocks, then fails on every later call.
#[derive(Debug)]
pub struct FlakySource {
    blocks: std::vec::IntoIter<Block<f64>>,
    delivered: usize,
}

impl FlakySource {
    /// Creates a source that fails once `blocks` are used up.
    pub fn new(blocks: Vec<Block<f64>>) -> Self {
        Self {
            blocks: blocks.into_iter(),
            delivered: 0,
        }
    }
}

impl BlockSource<f64> for FlakySource {
    type Error = SourceFault;

    fn next_block(&mut self) -> Result<Option<Block<f64>>, Self::Error> {
        match self.blocks.next() {
            Some(block) => {
                self.delivered += 1;
                Ok(Some(block))
            }
            None => Err(SourceFault {
                blocks: self.delivered,
            }),
        }
    }
}
