//! Iterator adapter over successive pulls.

use std::iter::FusedIterator;

use super::window_buffer::WindowBuffer;
use crate::block::{Block, Sample};
use crate::error::BufferError;
use crate::source::BlockSource;
use crate::window::WindowSpec;

/// Iterator returned by [`WindowBuffer::windows`].
///
/// Yields `pull(window)` results. Ends at exhaustion, and after yielding
/// the first error.
#[derive(Debug)]
pub struct Windows<'a, S, B> {
    buffer: &'a mut WindowBuffer<S, B>,
    window: WindowSpec,
    done: bool,
}

impl<'a, S, B> Windows<'a, S, B> {
    pub(crate) fn new(buffer: &'a mut WindowBuffer<S, B>, window: WindowSpec) -> Self {
        Self {
            buffer,
            window,
            done: false,
        }
    }
}

impl<S: Sample, B: BlockSource<S>> Iterator for Windows<'_, S, B> {
    type Item = Result<Block<S>, BufferError<B::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.buffer.pull(self.window) {
            Ok(block) => Some(Ok(block)),
            Err(err) => {
                self.done = true;
                if err.is_exhausted() {
                    None
                } else {
                    Some(Err(err))
                }
            }
        }
    }
}

impl<S: Sample, B: BlockSource<S>> FusedIterator for Windows<'_, S, B> {}
