use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::encode::sink::{FrameSink, SinkConfig, check_order};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{FixtureError, FixtureResult};
use crate::render::frame::FrameRGBA;

/// Create `dir` and any missing parents.
pub fn ensure_dir(dir: &Path) -> FixtureResult<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create output dir '{}'", dir.display()))?;
    Ok(())
}

/// Encode `frame` as an 8-bit RGBA PNG at `path`.
///
/// The parent directory must already exist.
pub fn write_png(path: &Path, frame: &FrameRGBA) -> FixtureResult<()> {
    frame.check_len()?;
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| match e {
        image::ImageError::IoError(io) => FixtureError::Other(
            anyhow::Error::new(io).context(format!("write png '{}'", path.display())),
        ),
        other => FixtureError::encode(format!("png '{}': {other}", path.display())),
    })
}

/// Sink that writes each frame to `<dir>/frame_NNNN.png`.
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    cfg: Option<SinkConfig>,
    last_idx: Option<FrameIndex>,
    written: Vec<PathBuf>,
}

impl PngSequenceSink {
    /// Create a sink targeting `dir`. Nothing touches the filesystem until `begin`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cfg: None,
            last_idx: None,
            written: Vec::new(),
        }
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths written so far, in push order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Path a given frame is written to.
    pub fn frame_path(&self, idx: FrameIndex) -> PathBuf {
        self.dir.join(idx.file_name())
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, cfg: SinkConfig) -> FixtureResult<()> {
        ensure_dir(&self.dir)?;
        tracing::debug!(
            dir = %self.dir.display(),
            width = cfg.canvas.width,
            height = cfg.canvas.height,
            frames = cfg.frame_count,
            "png sequence sink ready"
        );
        self.cfg = Some(cfg);
        self.last_idx = None;
        self.written.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> FixtureResult<()> {
        let cfg = self
            .cfg
            .ok_or_else(|| FixtureError::validation("push_frame called before begin"))?;
        cfg.check_frame(frame)?;
        check_order(self.last_idx, idx)?;

        let path = self.frame_path(idx);
        write_png(&path, frame)?;
        tracing::info!("Created {}", idx.file_name());

        self.last_idx = Some(idx);
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> FixtureResult<()> {
        tracing::info!(
            "Created {} test PNG frames in {}",
            self.written.len(),
            self.dir.display()
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
