//! Framewise Integration Test Infrastructure
//!
//! This crate holds the end-to-end and property tests for the window buffer:
//!
//! - **Scenarios**: Hand-checked pull sequences over small streams
//! - **Stream properties**: Reconstruction, overlap, padding and peeking
//!   invariants over a grid of chunkings
//! - **Property tests**: The same invariants over random chunkings, window
//!   sizes and fractional hops (proptest)
//! - **Window config**: Window parameters loaded from JSON
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p framewise-tests
//!
//! # Just the property tests
//! cargo test -p framewise-tests --test proptest_windows
//! ```

pub mod fixtures;

// Re-export commonly used items
pub use fixtures::{
    chunk_frames, collect_windows, indexed_samples, indexed_stream, FlakySource, SourceFault,
};
