//! Rendering module
//!
//! Frames are drawn through a minimal [`DrawSurface`]: filled rectangles and
//! centered text glyphs. On the web that is a Canvas 2D context.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use shapes::draw_frame;

/// A 2D target that can fill rectangles and draw centered text
pub trait DrawSurface {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str);
    /// Draw `text` centered on (x, y) at the given pixel size
    fn fill_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: &str);
}
