use crate::foundation::core::{Canvas, FrameIndex, Rgba8};
use crate::render::frame::FrameRGBA;

/// Normalized progress of `idx` through a sequence of `frame_count` frames, in `[0, 1]`.
///
/// The last frame maps to exactly `1.0`. A single-frame sequence stays at `0.0`.
pub fn time_factor(idx: FrameIndex, frame_count: u64) -> f64 {
    if frame_count <= 1 {
        return 0.0;
    }
    idx.0 as f64 / (frame_count - 1) as f64
}

/// Background color at column `x`, row `y`.
///
/// Red fades out across the sequence as a horizontal ramp, green fades in as a vertical ramp,
/// blue rises uniformly. Channels truncate toward zero.
pub fn gradient_pixel(x: u32, y: u32, canvas: Canvas, time_factor: f64) -> Rgba8 {
    let fx = f64::from(x) / f64::from(canvas.width);
    let fy = f64::from(y) / f64::from(canvas.height);
    Rgba8::opaque(
        (255.0 * fx * (1.0 - time_factor)) as u8,
        (255.0 * fy * time_factor) as u8,
        (255.0 * time_factor) as u8,
    )
}

/// Overwrite every pixel of `frame` with the gradient for `time_factor`.
pub fn fill_gradient(frame: &mut FrameRGBA, time_factor: f64) {
    let canvas = frame.canvas();
    for (y, row) in frame.rows_mut().enumerate() {
        for (x, px) in row.chunks_exact_mut(4).enumerate() {
            let c = gradient_pixel(x as u32, y as u32, canvas, time_factor);
            px.copy_from_slice(&c.to_array());
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pattern/gradient.rs"]
mod tests;
