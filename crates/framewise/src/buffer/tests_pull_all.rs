//! Tests for draining the whole stream.

use pretty_assertions::assert_eq;

use super::test_support::*;
use crate::block::Block;
use crate::source::BlockSource;

#[test]
fn test_pull_all_concatenates_every_block() {
    let values = [0.0, 11.0, 22.0, 33.0, 44.0, 55.0];
    let mut buffer = buffer_over(frame_per_block(&values, 1));

    let all = buffer.pull_all().unwrap();
    assert_eq!(all.as_interleaved(), &values);
    assert!(buffer.is_exhausted());
}

#[test]
fn test_pull_all_twice_returns_empty() {
    let mut buffer = buffer_over(vec![ramp(4, 2)]);

    assert_eq!(buffer.pull_all().unwrap().frames(), 4);
    let again = buffer.pull_all().unwrap();
    assert!(again.is_empty());
    assert_eq!(again.channels(), 2);
    assert!(buffer.pull(WindowSpec::new(1.0)).unwrap_err().is_exhausted());
}

#[test]
fn test_pull_all_after_pull_returns_remainder() {
    let mut buffer = buffer_over(vec![ramp(3, 1), ramp(3, 1)]);
    buffer.pull(WindowSpec::new(2.0)).unwrap();

    let rest = buffer.pull_all().unwrap();
    assert_eq!(rest.as_interleaved(), &[2.0, 0.0, 1.0, 2.0]);
}

#[test]
fn test_pull_all_on_empty_source() {
    let mut buffer = buffer_over(vec![]);
    let all = buffer.pull_all().unwrap();
    assert_eq!(all, Block::empty(0));
}

#[test]
fn test_pull_all_matches_single_full_pull() {
    let blocks = vec![ramp(3, 2), ramp(5, 2), ramp(1, 2)];
    let total: usize = blocks.iter().map(Block::frames).sum();

    let all = buffer_over(blocks.clone()).pull_all().unwrap();
    let single = buffer_over(blocks)
        .pull(WindowSpec::new(total as f64))
        .unwrap();
    assert_eq!(all, single);
}

#[test]
fn test_into_source_after_drain() {
    let mut buffer = WindowBuffer::new(CountingSource::new(vec![ramp(2, 1), ramp(3, 1)]));
    assert_eq!(buffer.pull_all().unwrap().frames(), 5);

    let mut source = buffer.into_source();
    // Two blocks, then the end-of-stream answer.
    assert_eq!(source.calls, 3);
    assert_eq!(source.next_block().unwrap(), None);
}
