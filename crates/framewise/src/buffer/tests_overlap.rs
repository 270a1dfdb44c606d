//! Tests for overlapping and fractional windows.

use pretty_assertions::assert_eq;

use super::test_support::*;

#[test]
fn test_overlap_within_one_block() {
    let mut buffer = buffer_over(vec![ramp(6, 2)]);
    let window = WindowSpec::new(3.0).with_overlap(2.0);

    let windows: Vec<_> = (0..4)
        .map(|_| buffer.pull(window).unwrap().to_frames())
        .collect();
    assert_eq!(
        windows,
        vec![
            rows(&[0.0, 1.0, 2.0], 2),
            rows(&[1.0, 2.0, 3.0], 2),
            rows(&[2.0, 3.0, 4.0], 2),
            rows(&[3.0, 4.0, 5.0], 2),
        ]
    );
}

#[test]
fn test_overlap_across_blocks() {
    let values = [0.0, 11.0, 22.0, 33.0, 44.0, 55.0];
    let mut buffer = buffer_over(frame_per_block(&values, 2));
    let window = WindowSpec::new(2.0).with_overlap(1.0);

    for pair in values.windows(2) {
        assert_eq!(buffer.pull(window).unwrap().to_frames(), rows(pair, 2));
    }
}

#[test]
fn test_fractional_hop_repeats_window() {
    let values = [0.0, 11.0, 22.0, 33.0, 44.0, 55.0];
    let mut buffer = buffer_over(frame_per_block(&values, 1));
    let window = WindowSpec::new(3.0).with_overlap(2.5);

    assert_eq!(buffer.pull(window).unwrap().as_interleaved(), &[0.0, 11.0, 22.0]);
    assert!((buffer.cursor() - 0.5).abs() < 1e-12);
    assert_eq!(buffer.pull(window).unwrap().as_interleaved(), &[0.0, 11.0, 22.0]);
    assert_eq!(buffer.cursor(), 0.0);
    assert_eq!(buffer.pull(window).unwrap().as_interleaved(), &[11.0, 22.0, 33.0]);
}

#[test]
fn test_fractional_size_short_tail_repeats() {
    let mut buffer = buffer_over(frame_per_block(&[0.0, 1.0, 2.0], 2));
    let window = WindowSpec::new(2.5).with_overlap(2.0);

    let expected = [
        rows(&[0.0, 1.0], 2),
        rows(&[0.0, 1.0], 2),
        rows(&[1.0, 2.0], 2),
        rows(&[1.0, 2.0], 2),
        rows(&[2.0], 2),
        rows(&[2.0], 2),
    ];
    for frames in expected {
        assert_eq!(buffer.pull(window).unwrap().to_frames(), frames);
    }
    assert!(buffer.pull(window).unwrap_err().is_exhausted());
}

#[test]
fn test_fractional_overlap_keeps_window_length() {
    let blocks = (0..20).map(|_| ramp(1024, 1)).collect();
    let mut buffer = buffer_over(blocks);
    let window = WindowSpec::new(1764.0).with_overlap(352.8).padded();

    let mut count = 0;
    for block in buffer.windows(window) {
        assert_eq!(block.unwrap().frames(), 1764);
        count += 1;
    }
    // 20480 frames, hop 1411.2: starts at k * 1411.2 for k * 1411.2 < 20480.
    assert_eq!(count, 15);
}

#[test]
fn test_position_tracks_fractional_hops() {
    let mut buffer = buffer_over(vec![ramp(100, 1)]);
    let window = WindowSpec::new(4.0).with_overlap(2.75);

    for k in 0..40 {
        let block = buffer.pull(window).unwrap();
        // 1.25 is exact in binary, so the start frame is exactly floor(k * 1.25).
        let start = (k as f64 * 1.25).floor();
        assert_eq!(block.as_interleaved()[0], start);
        assert_eq!(buffer.position(), (k + 1) as f64 * 1.25);
    }
    assert!(buffer.retained_frames() < 100);
}

#[test]
fn test_overlap_discards_consumed_frames() {
    let mut buffer = buffer_over(frame_per_block(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0], 1));
    let window = WindowSpec::new(3.0).with_overlap(1.0);

    buffer.pull(window).unwrap();
    assert_eq!(buffer.retained_frames(), 1);
    buffer.pull(window).unwrap();
    assert_eq!(buffer.retained_frames(), 1);
    assert_eq!(buffer.position(), 4.0);
}
