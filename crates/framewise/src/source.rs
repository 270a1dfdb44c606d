//! Block sources.
//!
//! A [`BlockSource`] is the upstream side of a window buffer: a lazy
//! sequence of blocks pulled one at a time. Decoders, generators and test
//! fixtures implement it directly, or wrap an iterator with [`from_iter`]
//! or [`try_from_iter`].

use std::convert::Infallible;

use crate::block::Block;

/// A pull-based sequence of sample blocks.
///
/// Every block from one source must have the same channel count. Once
/// `next_block` returns `Ok(None)` the window buffer never calls it again.
pub trait BlockSource<S> {
    /// Error raised by the source, passed through the buffer unchanged.
    type Error;

    /// Returns the next block, or `None` at the end of the stream.
    fn next_block(&mut self) -> Result<Option<Block<S>>, Self::Error>;
}

impl<S, B> BlockSource<S> for &mut B
where
    B: BlockSource<S> + ?Sized,
{
    type Error = B::Error;

    fn next_block(&mut self) -> Result<Option<Block<S>>, Self::Error> {
        (**self).next_block()
    }
}

impl<S, B> BlockSource<S> for Box<B>
where
    B: BlockSource<S> + ?Sized,
{
    type Error = B::Error;

    fn next_block(&mut self) -> Result<Option<Block<S>>, Self::Error> {
        (**self).next_block()
    }
}

/// Source over an infallible iterator of blocks.
#[derive(Debug, Clone)]
pub struct IterSource<I> {
    iter: I,
}

impl<S, I> BlockSource<S> for IterSource<I>
where
    I: Iterator<Item = Block<S>>,
{
    type Error = Infallible;

    fn next_block(&mut self) -> Result<Option<Block<S>>, Self::Error> {
        Ok(self.iter.next())
    }
}

/// Source over an iterator of fallible blocks.
#[derive(Debug, Clone)]
pub struct TryIterSource<I> {
    iter: I,
}

impl<S, E, I> BlockSource<S> for TryIterSource<I>
where
    I: Iterator<Item = Result<Block<S>, E>>,
{
    type Error = E;

    fn next_block(&mut self) -> Result<Option<Block<S>>, Self::Error> {
        self.iter.next().transpose()
    }
}

/// Wraps anything iterable over blocks as a source.
pub fn from_iter<S, I>(blocks: I) -> IterSource<I::IntoIter>
where
    I: IntoIterator<Item = Block<S>>,
{
    IterSource {
        iter: blocks.into_iter(),
    }
}

/// Wraps anything iterable over `Result<Block, E>` as a source failing with `E`.
pub fn try_from_iter<S, E, I>(blocks: I) -> TryIterSource<I::IntoIter>
where
    I: IntoIterator<Item = Result<Block<S>, E>>,
{
    TryIterSource {
        iter: blocks.into_iter(),
    }
}
