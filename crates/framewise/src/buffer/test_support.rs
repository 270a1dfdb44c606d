//! Fixtures shared by the buffer tests.

use std::convert::Infallible;
use std::vec;

use crate::block::Block;
use crate::source::{self, BlockSource, IterSource};

pub(super) use super::WindowBuffer;
pub(super) use crate::error::BufferError;
pub(super) use crate::window::WindowSpec;

pub(super) type VecBuffer = WindowBuffer<f64, IterSource<vec::IntoIter<Block<f64>>>>;

/// Buffer over the given blocks.
pub(super) fn buffer_over(blocks: Vec<Block<f64>>) -> VecBuffer {
    WindowBuffer::new(source::from_iter(blocks))
}

/// One single-frame block per value, each frame `[v; channels]`.
pub(super) fn frame_per_block(values: &[f64], channels: usize) -> Vec<Block<f64>> {
    values
        .iter()
        .map(|&v| Block::new(channels, vec![v; channels]).unwrap())
        .collect()
}

/// One block holding frames `[0; channels]`, `[1; channels]`, ...
pub(super) fn ramp(frames: usize, channels: usize) -> Block<f64> {
    let samples = (0..frames)
        .flat_map(|i| std::iter::repeat(i as f64).take(channels))
        .collect();
    Block::new(channels, samples).unwrap()
}

/// Frames of `[v; channels]` for each value.
pub(super) fn rows(values: &[f64], channels: usize) -> Vec<Vec<f64>> {
    values.iter().map(|&v| vec![v; channels]).collect()
}

/// Source that counts how often it was asked for a block.
#[derive(Debug)]
pub(super) struct CountingSource {
    pub(super) blocks: vec::IntoIter<Block<f64>>,
    pub(super) calls: usize,
}

impl CountingSource {
    pub(super) fn new(blocks: Vec<Block<f64>>) -> Self {
        Self {
            blocks: blocks.into_iter(),
            calls: 0,
        }
    }
}

impl BlockSource<f64> for CountingSource {
    type Error = Infallible;

    fn next_block(&mut self) -> Result<Option<Block<f64>>, Self::Error> {
        self.calls += 1;
        Ok(self.blocks.next())
    }
}
