use crate::foundation::core::{Canvas, FrameIndex};
use crate::foundation::error::{FixtureError, FixtureResult};
use crate::render::frame::FrameRGBA;

/// Configuration provided to a [`FrameSink`] at the start of a range render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    /// Output dimensions.
    pub canvas: Canvas,
    /// Number of frames that will be pushed.
    pub frame_count: u64,
}

impl SinkConfig {
    /// Check that `frame` has the configured dimensions and a tightly packed buffer.
    pub fn check_frame(&self, frame: &FrameRGBA) -> FixtureResult<()> {
        if frame.canvas() != self.canvas {
            return Err(FixtureError::validation(format!(
                "frame is {}x{}, sink expects {}x{}",
                frame.width, frame.height, self.canvas.width, self.canvas.height
            )));
        }
        frame.check_len()
    }
}

/// Sink contract for consuming rendered frames in order.
///
/// Ordering contract: `push_frame` is called in strictly increasing `FrameIndex` order.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> FixtureResult<()>;
    /// Push one frame in strictly increasing order.
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> FixtureResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> FixtureResult<()>;
}

pub(crate) fn check_order(last: Option<FrameIndex>, idx: FrameIndex) -> FixtureResult<()> {
    match last {
        Some(prev) if idx <= prev => Err(FixtureError::validation(format!(
            "frame {} pushed after frame {}; frames must be strictly increasing",
            idx.0, prev.0
        ))),
        _ => Ok(()),
    }
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, FrameRGBA)>,
    finished: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[(FrameIndex, FrameRGBA)] {
        &self.frames
    }

    /// `true` once `end` has been called.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> FixtureResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> FixtureResult<()> {
        let cfg = self
            .cfg
            .ok_or_else(|| FixtureError::validation("push_frame called before begin"))?;
        cfg.check_frame(frame)?;
        check_order(self.frames.last().map(|(i, _)| *i), idx)?;
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> FixtureResult<()> {
        self.finished = true;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
