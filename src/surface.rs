//! The drawing target boundary.
//!
//! The field never owns a canvas; the host hands it something that can take
//! dot and line primitives. The crate ships a wgpu-backed implementation
//! ([`crate::gpu::CanvasRenderer`]), and tests use a recording stub.

use glam::Vec2;

use crate::color::Rgba;

/// A host-owned surface accepting 2D draw primitives in pixel coordinates.
///
/// One frame is: `clear`, then any number of `fill_circle` / `line` calls.
/// Implementations must not reorder primitives across a `clear`.
pub trait DrawSurface {
    /// Erase the previous frame.
    fn clear(&mut self);

    /// Draw a filled circle centered at `center`.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Draw a straight line segment of the given width.
    fn line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32);
}
