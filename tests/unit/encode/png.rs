use super::*;
use crate::foundation::core::{Canvas, Rgba8};

fn scratch(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_png").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn cfg(frame_count: u64) -> SinkConfig {
    SinkConfig {
        canvas: Canvas {
            width: 6,
            height: 10,
        },
        frame_count,
    }
}

fn frame(v: u8) -> FrameRGBA {
    let mut f = FrameRGBA::filled(cfg(1).canvas, Rgba8::opaque(v, 0, 255 - v));
    f.put_pixel(5, 9, Rgba8::opaque(255, 255, 0));
    f
}

#[test]
fn write_png_round_trips_rgba8() {
    let dir = scratch("single");
    ensure_dir(&dir).unwrap();
    let path = dir.join("one.png");
    let f = frame(40);
    write_png(&path, &f).unwrap();

    let img = image::open(&path).unwrap();
    assert_eq!(img.color(), image::ColorType::Rgba8);
    let rgba = img.to_rgba8();
    assert_eq!(rgba.dimensions(), (6, 10));
    assert_eq!(rgba.as_raw(), &f.data);
}

#[test]
fn sequence_sink_creates_nested_dir_and_numbered_files() {
    let dir = scratch("sequence").join("a").join("b");
    let mut sink = PngSequenceSink::new(&dir);
    sink.begin(cfg(3)).unwrap();
    for i in 0..3u8 {
        sink.push_frame(FrameIndex(u64::from(i)), &frame(i * 10)).unwrap();
    }
    sink.end().unwrap();

    let mut names: Vec<String> = std::fs::read_dir(&dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(
        names,
        vec!["frame_0000.png", "frame_0001.png", "frame_0002.png"]
    );
    assert_eq!(sink.written().len(), 3);
    assert_eq!(sink.written()[1], dir.join("frame_0001.png"));
}

#[test]
fn begin_fails_when_dir_is_blocked_by_a_file() {
    let root = scratch("blocked");
    std::fs::create_dir_all(&root).unwrap();
    let blocker = root.join("not_a_dir");
    std::fs::write(&blocker, b"x").unwrap();

    let mut sink = PngSequenceSink::new(blocker.join("frames"));
    let err = sink.begin(cfg(1)).unwrap_err();
    assert!(matches!(err, FixtureError::Other(_)));
    assert!(err.to_string().contains("create output dir"));
}

#[test]
fn write_png_into_missing_dir_reports_path() {
    let dir = scratch("missing");
    let path = dir.join("nope").join("frame.png");
    let err = write_png(&path, &frame(0)).unwrap_err();
    assert!(err.to_string().contains("frame.png"));
}

#[test]
fn sink_rejects_wrong_sized_frame_before_writing() {
    let dir = scratch("wrong_size");
    let mut sink = PngSequenceSink::new(&dir);
    sink.begin(cfg(1)).unwrap();
    let mut f = frame(0);
    f.data.pop();
    assert!(sink.push_frame(FrameIndex(0), &f).is_err());
    assert!(!dir.join("frame_0000.png").exists());
}
