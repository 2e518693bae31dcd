//! # driftweb
//!
//! An ambient particle background: drifting points joined by fading lines
//! whenever they come within a connection distance of each other.
//!
//! The core is [`ParticleField`], which owns the full lifecycle: particle
//! generation, per-frame kinematics with wrap-around bounds, a per-frame
//! spatial hash grid for near-neighbor discovery, and emission of dot/line
//! primitives to a host-owned [`DrawSurface`]. Neighbor search inspects only
//! the 3×3 cell block around each particle, so edge discovery stays linear
//! in particle count instead of quadratic.
//!
//! ## Quick Start
//!
//! Windowed, using the built-in wgpu host:
//!
//! ```ignore
//! use driftweb::{FieldConfig, Viewer};
//!
//! fn main() -> Result<(), driftweb::ViewerError> {
//!     Viewer::new()
//!         .with_config(FieldConfig::new().with_max_count(60))
//!         .with_colors("#8b5cf6", "#06b6d4")
//!         .run()
//! }
//! ```
//!
//! Headless, driving the field yourself:
//!
//! ```
//! use driftweb::{FieldConfig, ParticleField};
//!
//! let mut field = ParticleField::new(FieldConfig::new());
//! field.initialize(1000.0, 800.0);
//! assert_eq!(field.particle_count(), 40);
//! // each repaint: field.advance_frame(&mut your_surface);
//! ```
//!
//! ## Core Concepts
//!
//! - **Particles** drift with a constant per-tick velocity and wrap at the
//!   viewport edges, preserving their overshoot. The whole set is reseeded
//!   on resize; nothing is added or removed mid-session.
//! - **The spatial grid** uses cells exactly as large as the connection
//!   distance and is rebuilt from scratch every frame. See
//!   [`spatial::SpatialGrid`] for the trade-off discussion.
//! - **Theme colors** arrive as CSS hex tokens; parse failures fall back to
//!   the documented defaults instead of interrupting the animation.
//! - **The drawing surface** is a capability the host supplies. The crate
//!   ships [`gpu::CanvasRenderer`] for its own winit/wgpu [`Viewer`], and
//!   any `clear`/`circle`/`line` sink works.

pub mod color;
pub mod config;
pub mod error;
pub mod field;
pub mod gpu;
pub mod particle;
pub mod spatial;
pub mod surface;
pub mod time;
pub mod viewer;

pub use color::{Rgb, Rgba, DEFAULT_ACCENT, DEFAULT_ACCENT2};
pub use config::FieldConfig;
pub use error::{GpuError, ViewerError};
pub use field::ParticleField;
pub use glam::Vec2;
pub use particle::Particle;
pub use spatial::SpatialGrid;
pub use surface::DrawSurface;
pub use viewer::Viewer;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use driftweb::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::{Rgb, Rgba};
    pub use crate::config::FieldConfig;
    pub use crate::field::ParticleField;
    pub use crate::surface::DrawSurface;
    pub use crate::time::Time;
    pub use crate::viewer::Viewer;
    pub use crate::Vec2;
}
