//! CPU-side primitive accumulator backing the wgpu canvas.
//!
//! [`CanvasRenderer`] implements [`DrawSurface`] by collecting one instance
//! record per primitive; [`super::GpuContext::render`] uploads the batches
//! and draws them as instanced quads.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::color::Rgba;
use crate::surface::DrawSurface;

/// One filled circle, expanded to a quad in the vertex shader.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub(crate) struct CircleInstance {
    pub center: [f32; 2],
    pub radius: f32,
    pub color: [f32; 4],
}

/// One line segment, extruded to a width-honoring quad in the vertex shader.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub(crate) struct LineInstance {
    pub from: [f32; 2],
    pub to: [f32; 2],
    pub color: [f32; 4],
    pub width: f32,
    pub _pad: [f32; 3],
}

/// A wgpu-backed drawing surface.
///
/// `clear`/`fill_circle`/`line` only record; nothing touches the GPU until
/// the host hands the finished frame to [`super::GpuContext::render`].
#[derive(Default)]
pub struct CanvasRenderer {
    circles: Vec<CircleInstance>,
    lines: Vec<LineInstance>,
}

impl CanvasRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn circles(&self) -> &[CircleInstance] {
        &self.circles
    }

    pub(crate) fn lines(&self) -> &[LineInstance] {
        &self.lines
    }
}

impl DrawSurface for CanvasRenderer {
    fn clear(&mut self) {
        self.circles.clear();
        self.lines.clear();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.circles.push(CircleInstance {
            center: center.to_array(),
            radius,
            color: color.to_f32_array(),
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        self.lines.push(LineInstance {
            from: from.to_array(),
            to: to.to_array(),
            color: color.to_f32_array(),
            width,
            _pad: [0.0; 3],
        });
    }
}
