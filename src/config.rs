//! Field configuration.
//!
//! All tunables are host-supplied at construction; nothing is mutated at
//! runtime. Defaults reproduce the stock portfolio background.

/// Tunables for a [`crate::ParticleField`].
///
/// Use method chaining to adjust, then hand to `ParticleField::new`:
///
/// ```
/// use driftweb::FieldConfig;
///
/// let config = FieldConfig::new()
///     .with_max_count(40)
///     .with_connection_distance(120.0);
/// assert_eq!(config.max_count, 40);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FieldConfig {
    /// Upper bound on the particle count regardless of viewport area.
    pub max_count: usize,
    /// Viewport area (px²) per particle; count = `floor(w * h / density)`.
    pub density: f32,
    /// Maximum separation at which two particles are joined by a line.
    /// Also the spatial grid cell size.
    pub connection_distance: f32,
    /// Minimum draw radius of a particle.
    pub base_size: f32,
    /// Random additional draw radius, uniform in `[0, size_variation)`.
    pub size_variation: f32,
    /// Minimum particle draw alpha.
    pub base_opacity: f32,
    /// Random additional alpha, uniform in `[0, opacity_variation)`.
    pub opacity_variation: f32,
    /// Center offset of the per-axis velocity distribution.
    pub base_speed: f32,
    /// Scale of the per-axis velocity distribution: each component is
    /// `(rand() - base_speed) * speed_variation` px per tick.
    pub speed_variation: f32,
    /// Line alpha at distance zero; decays linearly to 0 at
    /// `connection_distance`.
    pub edge_opacity: f32,
    /// Line width in pixels.
    pub edge_width: f32,
}

impl FieldConfig {
    /// Create a configuration with the stock defaults.
    pub fn new() -> Self {
        Self {
            max_count: 60,
            density: 20_000.0,
            connection_distance: 100.0,
            base_size: 0.5,
            size_variation: 2.0,
            base_opacity: 0.1,
            opacity_variation: 0.3,
            base_speed: 0.5,
            speed_variation: 0.4,
            edge_opacity: 0.1,
            edge_width: 0.5,
        }
    }

    /// Set the particle count ceiling.
    pub fn with_max_count(mut self, max_count: usize) -> Self {
        self.max_count = max_count;
        self
    }

    /// Set the area-per-particle divisor.
    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    /// Set the connection distance (and grid cell size).
    pub fn with_connection_distance(mut self, distance: f32) -> Self {
        self.connection_distance = distance;
        self
    }

    /// Set the particle draw radius range `[base, base + variation)`.
    pub fn with_size(mut self, base: f32, variation: f32) -> Self {
        self.base_size = base;
        self.size_variation = variation;
        self
    }

    /// Set the particle alpha range `[base, base + variation)`.
    pub fn with_opacity(mut self, base: f32, variation: f32) -> Self {
        self.base_opacity = base;
        self.opacity_variation = variation;
        self
    }

    /// Set the per-tick velocity distribution.
    pub fn with_speed(mut self, base: f32, variation: f32) -> Self {
        self.base_speed = base;
        self.speed_variation = variation;
        self
    }

    /// Set line alpha at distance zero and line width.
    pub fn with_edges(mut self, opacity: f32, width: f32) -> Self {
        self.edge_opacity = opacity;
        self.edge_width = width;
        self
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_background() {
        let cfg = FieldConfig::new();
        assert_eq!(cfg.max_count, 60);
        assert_eq!(cfg.density, 20_000.0);
        assert_eq!(cfg.connection_distance, 100.0);
        assert_eq!(cfg.edge_opacity, 0.1);
        assert_eq!(cfg.edge_width, 0.5);
    }

    #[test]
    fn builder_chains() {
        let cfg = FieldConfig::new()
            .with_max_count(10)
            .with_density(5_000.0)
            .with_connection_distance(50.0)
            .with_size(1.0, 0.0)
            .with_opacity(0.5, 0.0)
            .with_speed(0.5, 1.0)
            .with_edges(0.2, 1.0);
        assert_eq!(cfg.max_count, 10);
        assert_eq!(cfg.density, 5_000.0);
        assert_eq!(cfg.connection_distance, 50.0);
        assert_eq!(cfg.base_size, 1.0);
        assert_eq!(cfg.base_opacity, 0.5);
        assert_eq!(cfg.speed_variation, 1.0);
        assert_eq!(cfg.edge_width, 1.0);
    }
}
