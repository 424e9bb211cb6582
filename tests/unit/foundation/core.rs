use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
    assert_eq!(r.len_frames(), 3);
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(3), FrameIndex(2)).is_err());
    assert!(FrameRange::new(FrameIndex(2), FrameIndex(2)).unwrap().is_empty());
}

#[test]
fn frame_range_iterates_in_order() {
    let r = FrameRange::new(FrameIndex(0), FrameIndex(3)).unwrap();
    let got: Vec<u64> = r.iter().map(|f| f.0).collect();
    assert_eq!(got, vec![0, 1, 2]);
}

#[test]
fn file_names_are_zero_padded() {
    assert_eq!(FrameIndex(0).file_name(), "frame_0000.png");
    assert_eq!(FrameIndex(29).file_name(), "frame_0029.png");
    assert_eq!(FrameIndex(12345).file_name(), "frame_12345.png");
}

#[test]
fn canvas_bounds_are_half_open() {
    let c = Canvas {
        width: 405,
        height: 720,
    };
    assert!(c.contains(0, 0));
    assert!(c.contains(404, 719));
    assert!(!c.contains(405, 0));
    assert!(!c.contains(0, 720));
    assert!(!c.contains(-1, 10));
    assert_eq!(c.rgba_len(), 405 * 720 * 4);
}

#[test]
fn canvas_serializes_as_plain_fields() {
    let c = Canvas {
        width: 405,
        height: 720,
    };
    let v = serde_json::to_value(c).unwrap();
    assert_eq!(v, serde_json::json!({ "width": 405, "height": 720 }));
}
