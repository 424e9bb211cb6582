//! Antframes generates deterministic PNG fixture frames for video pipeline tests.
//!
//! Each frame is a 405x720 RGBA8 image: an animated gradient background (red fades out, green
//! and blue fade in across the sequence) with ten small yellow marker squares that move along
//! wrapping diagonal tracks. The default sequence is 30 frames written to
//! `simulation_videos/test_png_frames/frame_0000.png` .. `frame_0029.png`.
//!
//! # Pipeline overview
//!
//! 1. **Render**: `SequenceSpec + FrameIndex -> FrameRGBA` (gradient, then markers)
//! 2. **Sink**: frames stream in index order into a [`FrameSink`]
//!    ([`PngSequenceSink`] for files, [`InMemorySink`] for tests)
//!
//! Output is a pure function of the frame index: two runs produce byte-identical files.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod encode;
mod foundation;
mod pattern;
mod render;
mod session;

/// Single-image PNG smoke check.
pub mod test_pattern;

pub use encode::png::{PngSequenceSink, ensure_dir, write_png};
pub use encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use foundation::core::{Canvas, FrameIndex, FrameRange, Rgba8};
pub use foundation::error::{FixtureError, FixtureResult};
pub use pattern::ants::{
    ANT_COLOR, ANT_HALF_EXTENT, ANT_MARGIN, ANT_TRACK_SCALE, AntMarker, ant_position,
    ant_positions, draw_ants,
};
pub use pattern::gradient::{fill_gradient, gradient_pixel, time_factor};
pub use render::frame::FrameRGBA;
pub use session::{
    ANT_COUNT, FRAME_COUNT, FRAMES_DIR, FrameGenerator, HEIGHT, RenderStats, SequenceSpec, WIDTH,
    create_test_png_frames, create_test_png_frames_in,
};
