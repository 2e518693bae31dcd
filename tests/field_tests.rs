//! End-to-end tests for the public `ParticleField` API, driven through a
//! recording surface. Assertions are on the *set* of primitives and their
//! values, never on draw order.

use driftweb::{DrawSurface, FieldConfig, ParticleField, Rgb, Rgba, Vec2, DEFAULT_ACCENT};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Primitive {
    Circle { center: Vec2, radius: f32, color: Rgba },
    Line { from: Vec2, to: Vec2, color: Rgba, width: f32 },
}

#[derive(Default)]
struct RecordingSurface {
    cleared: u32,
    primitives: Vec<Primitive>,
}

impl RecordingSurface {
    fn circles(&self) -> Vec<(Vec2, f32, Rgba)> {
        self.primitives
            .iter()
            .filter_map(|p| match *p {
                Primitive::Circle { center, radius, color } => Some((center, radius, color)),
                _ => None,
            })
            .collect()
    }

    fn lines(&self) -> Vec<(Vec2, Vec2, Rgba, f32)> {
        self.primitives
            .iter()
            .filter_map(|p| match *p {
                Primitive::Line { from, to, color, width } => Some((from, to, color, width)),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self) {
        self.cleared += 1;
        self.primitives.clear();
    }
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.primitives.push(Primitive::Circle { center, radius, color });
    }
    fn line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        self.primitives.push(Primitive::Line { from, to, color, width });
    }
}

#[test]
fn particle_count_follows_area_over_density() {
    let mut field = ParticleField::with_seed(FieldConfig::new(), 11);

    field.initialize(1000.0, 800.0);
    assert_eq!(field.particle_count(), 40); // min(60, floor(800000 / 20000))

    field.initialize(4000.0, 3000.0);
    assert_eq!(field.particle_count(), 60); // capped by max_count

    field.initialize(100.0, 100.0);
    assert_eq!(field.particle_count(), 0); // floor(10000 / 20000)
}

#[test]
fn zero_area_viewport_yields_zero_particles() {
    let mut field = ParticleField::with_seed(FieldConfig::new(), 11);
    field.initialize(0.0, 800.0);
    assert_eq!(field.particle_count(), 0);
    field.initialize(1000.0, -5.0);
    assert_eq!(field.particle_count(), 0);
}

#[test]
fn nonpositive_density_yields_zero_particles() {
    let mut field = ParticleField::with_seed(FieldConfig::new().with_density(0.0), 11);
    field.initialize(1000.0, 800.0);
    assert_eq!(field.particle_count(), 0);
}

#[test]
fn reinitialize_replaces_the_particle_set() {
    let mut field = ParticleField::with_seed(FieldConfig::new(), 11);
    field.initialize(1000.0, 800.0);
    assert_eq!(field.particle_count(), 40);

    // Shrinking the viewport drops every particle; nothing leaks across
    field.on_viewport_resize(100.0, 100.0);
    assert_eq!(field.particle_count(), 0);

    let mut surface = RecordingSurface::default();
    field.advance_frame(&mut surface);
    assert_eq!(surface.cleared, 1);
    assert!(surface.primitives.is_empty());
}

#[test]
fn positions_stay_inside_viewport_across_frames() {
    let (w, h) = (1000.0, 800.0);
    let mut field = ParticleField::with_seed(FieldConfig::new(), 23);
    field.initialize(w, h);

    let mut surface = RecordingSurface::default();
    for _ in 0..500 {
        field.advance_frame(&mut surface);
        for p in field.particles() {
            assert!(p.position.x >= 0.0 && p.position.x < w, "x out of bounds");
            assert!(p.position.y >= 0.0 && p.position.y < h, "y out of bounds");
        }
    }
}

#[test]
fn frame_emits_one_circle_per_particle() {
    let mut field = ParticleField::with_seed(FieldConfig::new(), 5);
    field.initialize(1000.0, 800.0);

    let mut surface = RecordingSurface::default();
    field.advance_frame(&mut surface);
    assert_eq!(surface.circles().len(), field.particle_count());
}

#[test]
fn drawn_lines_match_an_exhaustive_neighbor_search() {
    let cfg = FieldConfig::new();
    let distance = cfg.connection_distance;
    let mut field = ParticleField::with_seed(cfg, 31);
    field.initialize(1000.0, 800.0);

    let mut surface = RecordingSurface::default();
    field.advance_frame(&mut surface);

    // Post-step positions, so both searches see the same frame
    let positions: Vec<Vec2> = field.particles().iter().map(|p| p.position).collect();
    let mut expected: Vec<(Vec2, Vec2)> = Vec::new();
    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            if positions[i].distance(positions[j]) < distance {
                expected.push((positions[i], positions[j]));
            }
        }
    }

    let drawn = surface.lines();
    assert_eq!(drawn.len(), expected.len());
    for (from, to, _, _) in &drawn {
        assert!(
            expected
                .iter()
                .any(|&(a, b)| (a == *from && b == *to) || (a == *to && b == *from)),
            "line {from:?} -> {to:?} has no matching close pair"
        );
    }
}

#[test]
fn no_duplicate_or_degenerate_lines() {
    let mut field = ParticleField::with_seed(FieldConfig::new(), 47);
    field.initialize(1000.0, 800.0);

    let mut surface = RecordingSurface::default();
    field.advance_frame(&mut surface);

    let lines = surface.lines();
    for (idx, (from, to, _, _)) in lines.iter().enumerate() {
        assert_ne!(from, to, "self-edge drawn");
        for (from2, to2, _, _) in &lines[idx + 1..] {
            let same = from == from2 && to == to2;
            let flipped = from == to2 && to == from2;
            assert!(!same && !flipped, "pair drawn twice");
        }
    }
}

#[test]
fn edge_opacity_decays_linearly_with_distance() {
    let cfg = FieldConfig::new();
    let (distance, base) = (cfg.connection_distance, cfg.edge_opacity);
    let mut field = ParticleField::with_seed(cfg, 61);
    field.initialize(1000.0, 800.0);

    let mut surface = RecordingSurface::default();
    field.advance_frame(&mut surface);

    for (from, to, color, _) in surface.lines() {
        let dist = from.distance(to);
        assert!(dist < distance);
        let expected = base * (1.0 - dist / distance);
        assert!(
            (color.a - expected).abs() < 1e-5,
            "alpha {} for distance {dist}, expected {expected}",
            color.a
        );
        assert!(color.a > 0.0);
    }
}

#[test]
fn end_to_end_shrink_then_animate_silently() {
    // 1000x800 seeds 40 particles, re-init at 100x100 seeds 0, and
    // frames after that draw nothing and panic on nothing.
    let mut field = ParticleField::with_seed(FieldConfig::new(), 2);
    field.initialize(1000.0, 800.0);
    assert_eq!(field.particle_count(), 40);

    field.initialize(100.0, 100.0);
    assert_eq!(field.particle_count(), 0);

    let mut surface = RecordingSurface::default();
    for _ in 0..10 {
        field.advance_frame(&mut surface);
    }
    assert_eq!(surface.cleared, 10);
    assert!(surface.primitives.is_empty());
}

#[test]
fn advance_frame_before_initialize_is_a_noop() {
    let mut field = ParticleField::new(FieldConfig::new());
    let mut surface = RecordingSurface::default();
    field.advance_frame(&mut surface);
    assert_eq!(surface.cleared, 0);
    assert!(surface.primitives.is_empty());
}

#[test]
fn malformed_accent_token_falls_back_to_default_triple() {
    let mut field = ParticleField::with_seed(FieldConfig::new(), 13);
    field.initialize(1000.0, 800.0);
    field.on_theme_change("definitely not a color", "#06b6d4");

    let mut surface = RecordingSurface::default();
    field.advance_frame(&mut surface);

    for (_, _, color) in surface.circles() {
        assert_eq!(color.rgb(), DEFAULT_ACCENT);
        assert_eq!(color.rgb(), Rgb::new(139, 92, 246));
    }
}

#[test]
fn theme_change_applies_to_subsequent_frames() {
    let mut field = ParticleField::with_seed(FieldConfig::new(), 13);
    field.initialize(1000.0, 800.0);
    field.on_theme_change("#ff0000", "#00ff00");

    let mut surface = RecordingSurface::default();
    field.advance_frame(&mut surface);

    for (_, _, color) in surface.circles() {
        assert_eq!(color.rgb(), Rgb::new(255, 0, 0));
    }
    for (_, _, color, _) in surface.lines() {
        assert_eq!(color.rgb(), Rgb::new(0, 255, 0));
    }
}

#[test]
fn particle_radii_and_opacities_are_fixed_at_creation() {
    let mut field = ParticleField::with_seed(FieldConfig::new(), 17);
    field.initialize(1000.0, 800.0);

    let before: Vec<(f32, f32)> = field.particles().iter().map(|p| (p.radius, p.opacity)).collect();
    let mut surface = RecordingSurface::default();
    for _ in 0..50 {
        field.advance_frame(&mut surface);
    }
    let after: Vec<(f32, f32)> = field.particles().iter().map(|p| (p.radius, p.opacity)).collect();
    assert_eq!(before, after);
}
