//! Encoding sinks.
//!
//! Sinks consume rendered frames in index order and are driven by
//! [`FrameGenerator::render_range`](crate::FrameGenerator::render_range).

/// Numbered PNG sequence output.
pub mod png;
/// Generic frame sink trait and built-in sinks.
pub mod sink;
