use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::error::{FixtureError, FixtureResult};

/// A rendered frame as RGBA8 pixels.
///
/// Alpha is straight (not premultiplied); every frame produced by this crate is fully opaque.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl FrameRGBA {
    /// Allocate a frame filled with `color`.
    pub fn filled(canvas: Canvas, color: Rgba8) -> Self {
        let px = color.to_array();
        let mut data = Vec::with_capacity(canvas.rgba_len());
        for _ in 0..(canvas.width as usize * canvas.height as usize) {
            data.extend_from_slice(&px);
        }
        Self {
            width: canvas.width,
            height: canvas.height,
            data,
        }
    }

    /// Wrap an existing buffer, checking that its length matches the dimensions.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> FixtureResult<Self> {
        let frame = Self {
            width,
            height,
            data,
        };
        frame.check_len()?;
        Ok(frame)
    }

    /// Dimensions of this frame.
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// Color at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        let i = self.offset(x, y)?;
        Some(Rgba8::from_slice(&self.data[i..i + 4]))
    }

    /// Overwrite the pixel at `(x, y)`. Returns `false` (and writes nothing) outside the frame.
    pub fn put_pixel(&mut self, x: i64, y: i64, color: Rgba8) -> bool {
        if !self.canvas().contains(x, y) {
            return false;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.data[i..i + 4].copy_from_slice(&color.to_array());
        true
    }

    /// Mutable rows of `width * 4` bytes each, top to bottom.
    pub(crate) fn rows_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        let stride = self.width as usize * 4;
        self.data.chunks_exact_mut(stride.max(1))
    }

    /// Verify `data.len() == width * height * 4`.
    pub fn check_len(&self) -> FixtureResult<()> {
        let expected = self.canvas().rgba_len();
        if self.data.len() != expected {
            return Err(FixtureError::validation(format!(
                "frame data is {} bytes, expected {expected} for {}x{} RGBA8",
                self.data.len(),
                self.width,
                self.height
            )));
        }
        Ok(())
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 4)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
