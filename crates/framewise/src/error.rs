//! Error types for blocks and the window buffer.

use thiserror::Error;

/// Result type for block construction.
pub type BlockResult<T> = Result<T, BlockError>;

/// Result type for window buffer operations over a source failing with `E`.
pub type BufferResult<T, E> = Result<T, BufferError<E>>;

/// Errors that can occur while building or combining blocks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockError {
    /// A block must have at least one channel.
    #[error("block must have at least one channel")]
    ZeroChannels,

    /// Interleaved sample count is not a whole number of frames.
    #[error("{len} samples do not divide into frames of {channels} channels")]
    PartialFrame {
        /// Number of interleaved samples supplied.
        len: usize,
        /// Channel count of the block.
        channels: usize,
    },

    /// A frame has a different width than the first one.
    #[error("frame {index} has {found} channels, expected {expected}")]
    RaggedFrame {
        /// Index of the offending frame.
        index: usize,
        /// Channel count taken from the first frame.
        expected: usize,
        /// Channel count of the offending frame.
        found: usize,
    },

    /// A channel has a different length than the first one.
    #[error("channel {index} has {found} frames, expected {expected}")]
    RaggedChannel {
        /// Index of the offending channel.
        index: usize,
        /// Frame count taken from the first channel.
        expected: usize,
        /// Frame count of the offending channel.
        found: usize,
    },

    /// Blocks being joined disagree on their channel count.
    #[error("cannot join a {found}-channel block onto {expected} channels")]
    ChannelMismatch {
        /// Channel count of the blocks joined so far.
        expected: usize,
        /// Channel count of the offending block.
        found: usize,
    },
}

/// A window parameter is out of range.
///
/// Raised before the cursor moves; retrying with the same parameters
/// always fails again.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid window parameter '{name}': {message}")]
pub struct InvalidWindow {
    /// Parameter name.
    pub name: &'static str,
    /// Error message.
    pub message: String,
}

impl InvalidWindow {
    /// Creates an invalid window error.
    pub fn new(name: &'static str, message: impl Into<String>) -> Self {
        Self {
            name,
            message: message.into(),
        }
    }
}

/// Errors returned by [`WindowBuffer`](crate::WindowBuffer) operations.
///
/// `E` is the error type of the wrapped [`BlockSource`](crate::BlockSource).
#[derive(Debug, Error)]
pub enum BufferError<E> {
    /// No frame is left to deliver and the source has ended.
    ///
    /// This is the normal end of a stream, not a failure.
    #[error("stream exhausted")]
    Exhausted,

    /// The requested window size or overlap is invalid.
    #[error(transparent)]
    InvalidWindow(#[from] InvalidWindow),

    /// The source produced a block whose channel count differs from the stream's.
    #[error("source block has {found} channels, stream has {expected}")]
    ChannelMismatch {
        /// Channel count established by the first block.
        expected: usize,
        /// Channel count of the offending block.
        found: usize,
    },

    /// Error raised by the block source, passed through unchanged.
    #[error(transparent)]
    Source(E),
}

impl<E> BufferError<E> {
    /// Creates an invalid window error.
    pub fn invalid_window(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidWindow(InvalidWindow::new(name, message))
    }

    /// Returns true if this is the end-of-stream signal.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, BufferError::Exhausted)
    }

    /// Returns the source error, if the source caused this failure.
    pub fn into_source(self) -> Option<E> {
        match self {
            BufferError::Source(err) => Some(err),
            _ => None,
        }
    }
}
