//! The particle field: lifecycle, per-frame stepping, and edge rendering.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::color::{Rgb, DEFAULT_ACCENT, DEFAULT_ACCENT2};
use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::spatial::SpatialGrid;
use crate::surface::DrawSurface;

/// An animated set of weakly-interacting points with proximity edges.
///
/// The field owns its particles and colors outright; the host owns the
/// drawing surface and the frame schedule. Everything here is synchronous
/// and runs on whatever thread the host calls from.
///
/// ```
/// use driftweb::{FieldConfig, ParticleField};
///
/// let mut field = ParticleField::new(FieldConfig::new());
/// field.initialize(1000.0, 800.0);
/// assert_eq!(field.particle_count(), 40); // min(60, 1000 * 800 / 20000)
/// ```
pub struct ParticleField {
    config: FieldConfig,
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    accent: Rgb,
    accent2: Rgb,
    seeded: bool,
    rng: StdRng,
    /// Scratch positions, refilled each frame for the grid build.
    positions: Vec<Vec2>,
}

impl ParticleField {
    /// Create an unseeded field. [`ParticleField::advance_frame`] is a no-op
    /// until the first [`ParticleField::initialize`].
    pub fn new(config: FieldConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a field with a fixed RNG seed, for reproducible layouts.
    pub fn with_seed(config: FieldConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: FieldConfig, rng: StdRng) -> Self {
        Self {
            config,
            particles: Vec::new(),
            width: 0.0,
            height: 0.0,
            accent: DEFAULT_ACCENT,
            accent2: DEFAULT_ACCENT2,
            seeded: false,
            rng,
            positions: Vec::new(),
        }
    }

    /// (Re)populate the particle set for a `width × height` viewport.
    ///
    /// Count = `min(max_count, floor(width * height / density))`. A
    /// degenerate viewport or non-positive density yields zero particles and
    /// subsequent frames draw nothing; neither case is an error. Safe to
    /// call repeatedly; any prior particle set is replaced wholesale.
    pub fn initialize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.seeded = true;

        let count = if width > 0.0 && height > 0.0 && self.config.density > 0.0 {
            let by_area = (width * height / self.config.density).floor() as usize;
            by_area.min(self.config.max_count)
        } else {
            0
        };

        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles
                .push(Particle::spawn(&mut self.rng, width, height, &self.config));
        }
    }

    /// Reseed for a new viewport size. Drops the previous set entirely.
    pub fn on_viewport_resize(&mut self, width: f32, height: f32) {
        self.initialize(width, height);
    }

    /// Re-read the two accent colors from CSS hex tokens.
    ///
    /// A token that fails to parse falls back to the matching default
    /// triple. Particle positions are untouched.
    pub fn on_theme_change(&mut self, accent: &str, accent2: &str) {
        self.accent = Rgb::parse_hex_or(accent, DEFAULT_ACCENT);
        self.accent2 = Rgb::parse_hex_or(accent2, DEFAULT_ACCENT2);
    }

    /// Run one frame: step and wrap every particle, rebuild the spatial
    /// grid, and emit one circle per particle plus one line per pair within
    /// the connection distance.
    ///
    /// Edge alpha falls linearly from `edge_opacity` at distance zero to 0
    /// at the connection distance. Before the first `initialize` this is a
    /// complete no-op; with zero particles it only clears.
    pub fn advance_frame(&mut self, surface: &mut dyn DrawSurface) {
        if !self.seeded {
            return;
        }

        surface.clear();

        for p in &mut self.particles {
            p.step(self.width, self.height);
        }
        for p in &self.particles {
            surface.fill_circle(p.position, p.radius, self.accent.with_alpha(p.opacity));
        }

        self.positions.clear();
        self.positions.extend(self.particles.iter().map(|p| p.position));

        let distance = self.config.connection_distance;
        let grid = SpatialGrid::build(&self.positions, self.width, self.height, distance);

        let edge_opacity = self.config.edge_opacity;
        let edge_width = self.config.edge_width;
        let accent2 = self.accent2;
        let positions = &self.positions;
        grid.for_each_pair(positions, distance, |i, j, dist| {
            let alpha = edge_opacity * (1.0 - dist / distance);
            surface.line(positions[i], positions[j], accent2.with_alpha(alpha), edge_width);
        });
    }

    /// Current number of particles.
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// The live particle set.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// The configuration this field was built with.
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Current accent colors (dots, lines).
    pub fn colors(&self) -> (Rgb, Rgb) {
        (self.accent, self.accent2)
    }
}
