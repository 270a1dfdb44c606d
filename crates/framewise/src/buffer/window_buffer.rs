//! The streaming window buffer.

use std::collections::VecDeque;

use log::{debug, trace};

use super::windows::Windows;
use crate::block::{Block, Sample};
use crate::error::{BufferError, BufferResult};
use crate::source::BlockSource;
use crate::window::WindowSpec;

/// Turns a [`BlockSource`] into fixed-size, optionally overlapping windows.
///
/// The buffer keeps the frames it has fetched but not yet stepped past,
/// plus a fractional read cursor into them. Each request fetches from the
/// source only as many blocks as it needs.
///
/// # Example
///
/// ```
/// use framewise::{source, Block, WindowBuffer, WindowSpec};
///
/// let blocks = (0..3).map(|i| Block::mono(vec![i as f32]));
/// let mut buffer = WindowBuffer::new(source::from_iter(blocks));
/// let window = WindowSpec::new(2.0).with_overlap(1.0);
///
/// assert_eq!(buffer.pull(window)?.as_interleaved(), &[0.0, 1.0]);
/// assert_eq!(buffer.pull(window)?.as_interleaved(), &[1.0, 2.0]);
/// assert_eq!(buffer.pull(window)?.as_interleaved(), &[2.0]);
/// assert!(buffer.pull(window).unwrap_err().is_exhausted());
/// # Ok::<(), framewise::BufferError<std::convert::Infallible>>(())
/// ```
#[derive(Debug)]
pub struct WindowBuffer<S, B> {
    source: B,
    /// Interleaved frames fetched from the source and not yet discarded.
    retained: VecDeque<S>,
    /// Channel count, fixed by the first non-empty block.
    channels: Option<usize>,
    /// Read position into `retained`, in frames. Below 1 between calls, and
    /// may run a fraction past the retained frames while the source is live.
    cursor: f64,
    /// Frames discarded from the front of the stream so far.
    discarded: u64,
    source_done: bool,
    exhausted: bool,
}

impl<S: Sample, B: BlockSource<S>> WindowBuffer<S, B> {
    /// Creates a buffer over `source`. Nothing is fetched until the first request.
    pub fn new(source: B) -> Self {
        Self {
            source,
            retained: VecDeque::new(),
            channels: None,
            cursor: 0.0,
            discarded: 0,
            source_done: false,
            exhausted: false,
        }
    }

    /// Returns the next window and advances by `window.hop()` frames.
    ///
    /// The window holds `window.frames()` frames unless the source ran out:
    /// then it is zero-padded to full length if `window.pad` is set, or
    /// returned short otherwise.
    ///
    /// # Errors
    /// - [`BufferError::Exhausted`] when no frame is left to deliver.
    /// - [`BufferError::InvalidWindow`] if the window parameters are invalid.
    /// - [`BufferError::ChannelMismatch`] if a fetched block has the wrong channel count.
    /// - [`BufferError::Source`] if the source fails.
    pub fn pull(&mut self, window: WindowSpec) -> BufferResult<Block<S>, B::Error> {
        let block = self.extract(&window)?;
        self.advance(window.hop())?;
        Ok(block)
    }

    /// Returns the window `pull` would return next, without advancing.
    ///
    /// Repeated calls with the same window return identical blocks, and a
    /// following `pull` with the same window returns that block too.
    pub fn fill(&mut self, window: WindowSpec) -> BufferResult<Block<S>, B::Error> {
        self.extract(&window)
    }

    /// Drains the source and returns every frame not yet stepped past.
    ///
    /// The buffer is exhausted afterwards; calling this again returns an
    /// empty block.
    pub fn pull_all(&mut self) -> BufferResult<Block<S>, B::Error> {
        let channels = self.channels.unwrap_or(0);
        if self.exhausted {
            return Ok(Block::empty(channels));
        }

        self.fetch_frames(usize::MAX)?;
        // Channel count may only now be known.
        let channels = self.channels.unwrap_or(channels);
        let skip = (self.cursor as usize).min(self.retained_frames());
        let total = self.retained_frames();

        let samples: Vec<S> = self.retained.drain(..).skip(skip * channels).collect();
        self.discarded += total as u64;
        self.cursor = 0.0;
        self.exhausted = true;
        debug!(
            "drained {} frames, stream exhausted at frame {}",
            total - skip,
            self.discarded
        );

        Ok(Block::from_parts(channels, samples))
    }

    /// Iterates over successive `pull(window)` results until exhaustion.
    pub fn windows(&mut self, window: WindowSpec) -> Windows<'_, S, B> {
        Windows::new(self, window)
    }

    /// Channel count of the stream, once the first block has been seen.
    pub fn channels(&self) -> Option<usize> {
        self.channels
    }

    /// Frames currently held in the buffer.
    pub fn retained_frames(&self) -> usize {
        match self.channels {
            Some(channels) => self.retained.len() / channels,
            None => 0,
        }
    }

    /// Fractional read cursor relative to the first retained frame.
    pub fn cursor(&self) -> f64 {
        self.cursor
    }

    /// Absolute stream position of the next window start, in frames.
    pub fn position(&self) -> f64 {
        self.discarded as f64 + self.cursor
    }

    /// Returns true once a request found nothing left to deliver.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Consumes the buffer, returning the source.
    pub fn into_source(self) -> B {
        self.source
    }

    /// Copies the window at the cursor, fetching as needed. Shared by
    /// `pull` and `fill`.
    fn extract(&mut self, window: &WindowSpec) -> BufferResult<Block<S>, B::Error> {
        window.validate()?;
        if self.exhausted {
            return Err(BufferError::Exhausted);
        }

        let start = self.cursor as usize;
        let frames = window.frames();
        if let Some(channels) = self.channels {
            check_padded_len(window, channels)?;
        }
        self.fetch_frames(start.saturating_add(frames))?;

        let available = self.retained_frames().saturating_sub(start).min(frames);
        if available == 0 {
            debug!("stream exhausted at frame {}", self.position());
            self.exhausted = true;
            return Err(BufferError::Exhausted);
        }

        let channels = self.channels.unwrap_or(0);
        check_padded_len(window, channels)?;
        let mut samples = Vec::with_capacity(available * channels);
        samples.extend(
            self.retained
                .range(start * channels..(start + available) * channels)
                .copied(),
        );
        let mut block = Block::from_parts(channels, samples);
        if available < frames && window.pad {
            block.pad_to(frames);
        }
        Ok(block)
    }

    /// Moves the cursor by `hop` frames and discards the whole frames it passed.
    ///
    /// Only whole frames stepped over are fetched. A fractional remainder
    /// past the retained frames stays pending until the next request.
    fn advance(&mut self, hop: f64) -> BufferResult<(), B::Error> {
        let cursor = self.cursor + hop;
        self.fetch_frames(cursor as usize)?;
        self.cursor = cursor;

        let whole = (self.cursor as usize).min(self.retained_frames());
        if whole > 0 {
            let channels = self.channels.unwrap_or(0);
            self.retained.drain(..whole * channels);
            self.discarded += whole as u64;
            self.cursor -= whole as f64;
        }

        let retained = self.retained_frames() as f64;
        if self.source_done && self.cursor > retained {
            self.cursor = retained;
        }
        debug_assert!(self.cursor >= 0.0 && self.cursor < retained + 1.0);
        Ok(())
    }

    /// Fetches blocks until `target` frames are retained or the source ends.
    fn fetch_frames(&mut self, target: usize) -> BufferResult<(), B::Error> {
        while !self.source_done && self.retained_frames() < target {
            match self.source.next_block().map_err(BufferError::Source)? {
                Some(block) => self.append(block)?,
                None => {
                    debug!(
                        "source finished after {} frames",
                        self.discarded + self.retained_frames() as u64
                    );
                    self.source_done = true;
                }
            }
        }
        Ok(())
    }

    fn append(&mut self, block: Block<S>) -> BufferResult<(), B::Error> {
        if block.channels() == 0 {
            return Ok(());
        }
        match self.channels {
            Some(expected) if expected != block.channels() => {
                return Err(BufferError::ChannelMismatch {
                    expected,
                    found: block.channels(),
                });
            }
            Some(_) => {}
            None => self.channels = Some(block.channels()),
        }
        if block.is_empty() {
            return Ok(());
        }

        trace!(
            "fetched block of {} frames x {} channels",
            block.frames(),
            block.channels()
        );
        self.retained.extend(block.into_interleaved());
        Ok(())
    }
}

/// Rejects padded windows whose sample count does not fit in `usize`.
fn check_padded_len<E>(window: &WindowSpec, channels: usize) -> BufferResult<(), E> {
    if window.pad && window.frames().checked_mul(channels).is_none() {
        return Err(BufferError::invalid_window(
            "size",
            format!(
                "padded window of {} frames x {} channels overflows",
                window.frames(),
                channels
            ),
        ));
    }
    Ok(())
}
