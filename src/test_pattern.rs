//! Single-image PNG smoke check.
//!
//! A static red/green ramp over constant blue, useful for confirming that PNG output works at all
//! before generating a full sequence.

use std::path::Path;

use crate::encode::png::{ensure_dir, write_png};
use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::error::FixtureResult;
use crate::render::frame::FrameRGBA;

/// Blue channel value used across the whole pattern.
pub const TEST_PATTERN_BLUE: u8 = 100;
/// Default file name written by [`write_test_pattern`] callers.
pub const TEST_PATTERN_FILE: &str = "test_output.png";

/// Render the smoke pattern: red ramps with `x`, green ramps with `y`, blue is constant.
pub fn render_test_pattern(canvas: Canvas) -> FrameRGBA {
    let mut frame = FrameRGBA::filled(canvas, Rgba8::opaque(0, 0, TEST_PATTERN_BLUE));
    for (y, row) in frame.rows_mut().enumerate() {
        let g = (255.0 * (y as f64 / f64::from(canvas.height))) as u8;
        for (x, px) in row.chunks_exact_mut(4).enumerate() {
            px[0] = (255.0 * (x as f64 / f64::from(canvas.width))) as u8;
            px[1] = g;
        }
    }
    frame
}

/// Render the pattern at `canvas` size and write it to `path`, creating parent directories.
pub fn write_test_pattern(path: &Path, canvas: Canvas) -> FixtureResult<FrameRGBA> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }
    let frame = render_test_pattern(canvas);
    write_png(path, &frame)?;
    tracing::info!(
        "Test PNG created successfully: {} ({}x{}, {} bytes)",
        path.display(),
        frame.width,
        frame.height,
        frame.data.len()
    );
    Ok(frame)
}

#[cfg(test)]
#[path = "../tests/unit/test_pattern.rs"]
mod tests;
