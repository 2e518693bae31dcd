//! The particle entity: spawn distribution and per-tick kinematics.

use glam::Vec2;
use rand::Rng;

use crate::config::FieldConfig;

/// A single decorative point.
///
/// Velocity is a fixed per-tick displacement chosen at spawn; there are no
/// forces and no wall-clock scaling. Radius and opacity affect drawing only.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

impl Particle {
    /// Spawn a particle uniformly inside `[0, width) × [0, height)`.
    pub fn spawn<R: Rng>(rng: &mut R, width: f32, height: f32, cfg: &FieldConfig) -> Self {
        let velocity = Vec2::new(
            (rng.gen::<f32>() - cfg.base_speed) * cfg.speed_variation,
            (rng.gen::<f32>() - cfg.base_speed) * cfg.speed_variation,
        );
        Self {
            position: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
            velocity,
            radius: rng.gen::<f32>() * cfg.size_variation + cfg.base_size,
            opacity: rng.gen::<f32>() * cfg.opacity_variation + cfg.base_opacity,
        }
    }

    /// Advance one tick and wrap into `[0, width) × [0, height)`.
    ///
    /// Wrapping preserves the overshoot: a particle at `x = width - 0.1`
    /// moving at `+1` reappears at `x ≈ 0.9`, not pinned to the edge.
    pub fn step(&mut self, width: f32, height: f32) {
        self.position += self.velocity;
        self.position.x = wrap(self.position.x, width);
        self.position.y = wrap(self.position.y, height);
    }
}

/// Euclidean remainder of `value` by `extent`, in `[0, extent)`.
fn wrap(value: f32, extent: f32) -> f32 {
    if extent <= 0.0 {
        return 0.0;
    }
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to the extent itself for tiny negatives
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}
