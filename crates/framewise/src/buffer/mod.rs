//! Fixed-size, overlapping windows over a block source.
//!
//! [`WindowBuffer`] coalesces the irregular blocks of a [`BlockSource`]
//! into windows of a requested size. `pull` delivers a window and steps
//! forward, `fill` peeks at the same window without moving, and
//! `pull_all` drains whatever is left in one block.
//!
//! [`BlockSource`]: crate::source::BlockSource

mod window_buffer;
mod windows;

#[cfg(test)]
mod test_support;
#[cfg(test)]
mod tests_overlap;
#[cfg(test)]
mod tests_pull_all;

// Re-export public API
pub use window_buffer::WindowBuffer;
pub use windows::Windows;
