use super::*;
use crate::foundation::core::Rgba8;

fn cfg() -> SinkConfig {
    SinkConfig {
        canvas: Canvas {
            width: 8,
            height: 4,
        },
        frame_count: 3,
    }
}

fn frame(v: u8) -> FrameRGBA {
    FrameRGBA::filled(cfg().canvas, Rgba8::opaque(v, v, v))
}

#[test]
fn in_memory_sink_captures_frames_in_order() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg()).unwrap();
    for i in 0..3u8 {
        sink.push_frame(FrameIndex(u64::from(i)), &frame(i)).unwrap();
    }
    sink.end().unwrap();

    assert!(sink.is_finished());
    assert_eq!(sink.config(), Some(cfg()));
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, vec![0, 1, 2]);
    assert_eq!(sink.frames()[2].1.pixel(0, 0), Some(Rgba8::opaque(2, 2, 2)));
}

#[test]
fn push_before_begin_is_rejected() {
    let mut sink = InMemorySink::new();
    assert!(sink.push_frame(FrameIndex(0), &frame(0)).is_err());
}

#[test]
fn out_of_order_push_is_rejected() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(1), &frame(0)).unwrap();
    let err = sink.push_frame(FrameIndex(1), &frame(0)).unwrap_err();
    assert!(err.to_string().contains("strictly increasing"));
}

#[test]
fn mismatched_dimensions_are_rejected() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg()).unwrap();
    let wrong = FrameRGBA::filled(
        Canvas {
            width: 4,
            height: 8,
        },
        Rgba8::opaque(0, 0, 0),
    );
    let err = sink.push_frame(FrameIndex(0), &wrong).unwrap_err();
    assert!(matches!(err, FixtureError::Validation(_)));
}

#[test]
fn truncated_buffer_is_rejected() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg()).unwrap();
    let mut short = frame(0);
    short.data.truncate(10);
    assert!(sink.push_frame(FrameIndex(0), &short).is_err());
}
