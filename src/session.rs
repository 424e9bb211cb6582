use std::path::{Path, PathBuf};

use crate::encode::png::PngSequenceSink;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Canvas, FrameIndex, FrameRange, Rgba8};
use crate::foundation::error::{FixtureError, FixtureResult};
use crate::pattern::ants::draw_ants;
use crate::pattern::gradient::{fill_gradient, time_factor};
use crate::render::frame::FrameRGBA;

/// Frame width (mobile portrait aspect).
pub const WIDTH: u32 = 405;
/// Frame height (mobile portrait aspect).
pub const HEIGHT: u32 = 720;
/// Frames per sequence (5 seconds at 6 fps).
pub const FRAME_COUNT: u64 = 30;
/// Markers drawn on each frame.
pub const ANT_COUNT: u64 = 10;
/// Default output directory, relative to the working directory.
pub const FRAMES_DIR: &str = "simulation_videos/test_png_frames";

/// Parameters of a generated sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SequenceSpec {
    /// Frame dimensions.
    pub canvas: Canvas,
    /// Number of frames; also the period of marker motion.
    pub frame_count: u64,
    /// Markers per frame.
    pub ant_count: u64,
}

impl Default for SequenceSpec {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: WIDTH,
                height: HEIGHT,
            },
            frame_count: FRAME_COUNT,
            ant_count: ANT_COUNT,
        }
    }
}

impl SequenceSpec {
    /// Reject empty canvases and empty sequences.
    pub fn validate(&self) -> FixtureResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(FixtureError::validation(
                "sequence width/height must be non-zero",
            ));
        }
        if self.frame_count == 0 {
            return Err(FixtureError::validation(
                "sequence frame_count must be non-zero",
            ));
        }
        Ok(())
    }

    /// The full `0..frame_count` range.
    pub fn full_range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(0),
            end: FrameIndex(self.frame_count),
        }
    }
}

/// Summary of a range render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames rendered and pushed to the sink.
    pub frames_total: u64,
}

/// Renders frames of a [`SequenceSpec`].
#[derive(Clone, Debug)]
pub struct FrameGenerator {
    spec: SequenceSpec,
}

impl FrameGenerator {
    /// Validate `spec` and build a generator for it.
    pub fn new(spec: SequenceSpec) -> FixtureResult<Self> {
        spec.validate()?;
        Ok(Self { spec })
    }

    /// The sequence parameters.
    pub fn spec(&self) -> &SequenceSpec {
        &self.spec
    }

    /// Render a single frame: gradient background, then markers on top.
    pub fn render_frame(&self, idx: FrameIndex) -> FixtureResult<FrameRGBA> {
        if !self.spec.full_range().contains(idx) {
            return Err(FixtureError::validation(format!(
                "frame {} is outside the {}-frame sequence",
                idx.0, self.spec.frame_count
            )));
        }
        let mut frame = FrameRGBA::filled(self.spec.canvas, Rgba8::opaque(0, 0, 0));
        fill_gradient(&mut frame, time_factor(idx, self.spec.frame_count));
        draw_ants(&mut frame, idx, self.spec.ant_count, self.spec.frame_count);
        Ok(frame)
    }

    /// Render `range` in order and stream every frame into `sink`.
    ///
    /// The first error (render or sink) aborts the run; frames already pushed stay pushed.
    #[tracing::instrument(skip(self, sink))]
    pub fn render_range(
        &self,
        range: FrameRange,
        sink: &mut dyn FrameSink,
    ) -> FixtureResult<RenderStats> {
        if range.end.0 > self.spec.frame_count {
            return Err(FixtureError::validation(format!(
                "range end {} exceeds the {}-frame sequence",
                range.end.0, self.spec.frame_count
            )));
        }

        sink.begin(SinkConfig {
            canvas: self.spec.canvas,
            frame_count: range.len_frames(),
        })?;

        let mut stats = RenderStats::default();
        for idx in range.iter() {
            let frame = self.render_frame(idx)?;
            sink.push_frame(idx, &frame)?;
            stats.frames_total += 1;
        }

        sink.end()?;
        Ok(stats)
    }
}

/// Write the default fixture sequence to [`FRAMES_DIR`] and return that directory.
pub fn create_test_png_frames() -> FixtureResult<PathBuf> {
    create_test_png_frames_in(FRAMES_DIR)
}

/// Write the default fixture sequence to `dir` (created if missing) and return `dir`.
pub fn create_test_png_frames_in(dir: impl AsRef<Path>) -> FixtureResult<PathBuf> {
    let generator = FrameGenerator::new(SequenceSpec::default())?;
    let mut sink = PngSequenceSink::new(dir.as_ref());
    generator.render_range(generator.spec().full_range(), &mut sink)?;
    Ok(sink.dir().to_path_buf())
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
