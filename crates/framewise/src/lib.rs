//! Framewise
//!
//! This crate turns an irregular stream of multi-channel sample blocks into
//! a pull-based sequence of fixed-size, optionally overlapping windows.
//!
//! # Overview
//!
//! Upstream code (a file decoder, a generator, a network receiver) hands out
//! blocks of whatever length is convenient for it. Analysis code wants
//! windows of a fixed length, often overlapping, sometimes with a
//! fractional hop. [`WindowBuffer`] sits between the two:
//!
//! - **`pull`** - Next window, then step forward by `size - overlap` frames
//! - **`fill`** - Peek at the window `pull` would return, without stepping
//! - **`pull_all`** - Drain the rest of the stream into one block
//!
//! Window and overlap sizes may be fractional. The delivered window always
//! has `⌊size⌋` frames; the fractional part of the read position is carried
//! across calls so positions do not drift over long streams.
//!
//! # Example
//!
//! ```
//! use framewise::{source, Block, WindowBuffer, WindowSpec};
//!
//! // A decoder handing out stereo blocks of uneven length.
//! let blocks = vec![
//!     Block::from_frames(&[[0.0f32, 0.0], [1.0, 1.0], [2.0, 2.0]])?,
//!     Block::from_frames(&[[3.0, 3.0], [4.0, 4.0]])?,
//! ];
//! let mut buffer = WindowBuffer::new(source::from_iter(blocks));
//!
//! let window = WindowSpec::new(4.0).with_overlap(2.0).padded();
//! let sizes: Vec<usize> = buffer
//!     .windows(window)
//!     .map(|block| block.map(|b| b.frames()))
//!     .collect::<Result<_, _>>()?;
//! assert_eq!(sizes, vec![4, 4, 4]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`block`] - Multi-channel sample blocks
//! - [`buffer`] - The window buffer and its iterator adapter
//! - [`error`] - Error types
//! - [`source`] - The block source trait and iterator adapters
//! - [`window`] - Window size, overlap and padding parameters

pub mod block;
pub mod buffer;
pub mod error;
pub mod source;
pub mod window;

// Re-export main types at crate root
pub use block::{Block, Sample};
pub use buffer::{WindowBuffer, Windows};
pub use error::{BlockError, BlockResult, BufferError, BufferResult, InvalidWindow};
pub use source::{BlockSource, IterSource, TryIterSource};
pub use window::WindowSpec;
