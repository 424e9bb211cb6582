use crate::foundation::core::{Canvas, FrameIndex, Rgba8};
use crate::render::frame::FrameRGBA;

/// Marker fill color (opaque yellow).
pub const ANT_COLOR: Rgba8 = Rgba8::opaque(255, 255, 0);
/// Markers span `2 * ANT_HALF_EXTENT + 1` pixels on each side.
pub const ANT_HALF_EXTENT: i64 = 2;
/// Offset added to both coordinates after scaling.
pub const ANT_MARGIN: i64 = 50;
/// Fraction of the canvas each marker track covers.
pub const ANT_TRACK_SCALE: f64 = 0.8;

const ANT_X_STRIDE: u64 = 3;
const ANT_Y_STRIDE: u64 = 2;

/// Center of one marker square in a particular frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AntMarker {
    /// Column of the center pixel.
    pub x: i64,
    /// Row of the center pixel.
    pub y: i64,
}

impl AntMarker {
    /// Paint the marker square onto `frame`, skipping pixels that fall outside it.
    ///
    /// Returns the number of pixels written.
    pub fn draw(self, frame: &mut FrameRGBA) -> usize {
        let mut written = 0;
        for dy in -ANT_HALF_EXTENT..=ANT_HALF_EXTENT {
            for dx in -ANT_HALF_EXTENT..=ANT_HALF_EXTENT {
                if frame.put_pixel(self.x + dx, self.y + dy, ANT_COLOR) {
                    written += 1;
                }
            }
        }
        written
    }

    /// Iterate the in-bounds pixel coordinates this marker covers on `canvas`.
    pub fn covered(self, canvas: Canvas) -> impl Iterator<Item = (u32, u32)> {
        let (cx, cy) = (self.x, self.y);
        (-ANT_HALF_EXTENT..=ANT_HALF_EXTENT)
            .flat_map(move |dy| {
                (-ANT_HALF_EXTENT..=ANT_HALF_EXTENT).map(move |dx| (cx + dx, cy + dy))
            })
            .filter(move |&(x, y)| canvas.contains(x, y))
            .map(|(x, y)| (x as u32, y as u32))
    }
}

/// Position of marker `ant` in frame `idx`.
///
/// Each marker walks a diagonal track that wraps every `frame_count` frames; marker `ant` is
/// phase-shifted by `3 * ant` steps horizontally and `2 * ant` vertically.
pub fn ant_position(idx: FrameIndex, ant: u64, canvas: Canvas, frame_count: u64) -> AntMarker {
    let n = frame_count.max(1);
    let step_x = (idx.0 + ant * ANT_X_STRIDE) % n;
    let step_y = (idx.0 + ant * ANT_Y_STRIDE) % n;
    let track_w = f64::from(canvas.width) * ANT_TRACK_SCALE;
    let track_h = f64::from(canvas.height) * ANT_TRACK_SCALE;
    AntMarker {
        x: (track_w * step_x as f64 / n as f64) as i64 + ANT_MARGIN,
        y: (track_h * step_y as f64 / n as f64) as i64 + ANT_MARGIN,
    }
}

/// Positions of all `ant_count` markers in frame `idx`, in drawing order.
pub fn ant_positions(
    idx: FrameIndex,
    ant_count: u64,
    canvas: Canvas,
    frame_count: u64,
) -> Vec<AntMarker> {
    (0..ant_count)
        .map(|ant| ant_position(idx, ant, canvas, frame_count))
        .collect()
}

/// Draw every marker for frame `idx` on top of `frame`.
pub fn draw_ants(frame: &mut FrameRGBA, idx: FrameIndex, ant_count: u64, frame_count: u64) {
    let canvas = frame.canvas();
    for marker in ant_positions(idx, ant_count, canvas, frame_count) {
        marker.draw(frame);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pattern/ants.rs"]
mod tests;
