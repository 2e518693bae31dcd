//! Uniform spatial hash grid for near-neighbor pair discovery.
//!
//! The viewport is partitioned into square cells whose edge equals the
//! connection distance `D`. Any two points closer than `D` therefore sit in
//! the same cell or in adjacent cells, so pair discovery only ever inspects
//! the 3×3 block around each point instead of every other point.
//!
//! The grid is rebuilt from scratch every frame and discarded afterwards.
//! That is deliberate: a full rebuild is O(n) and trivially correct, while
//! incremental maintenance is O(1) amortized but considerably more
//! error-prone, for no measurable gain at the particle counts this crate
//! targets (tens of points).

use glam::Vec2;

/// A freshly built spatial partition of a point set.
///
/// Cell coordinates computed during the build are cached per point and
/// reused by [`SpatialGrid::for_each_pair`], so the query step performs no
/// redundant floor-divisions.
pub struct SpatialGrid {
    cell_size: f32,
    cols: usize,
    rows: usize,
    /// Row-major `cols * rows` buckets of point indices.
    cells: Vec<Vec<usize>>,
    /// Cached (col, row) per point, parallel to the input slice.
    coords: Vec<(usize, usize)>,
}

impl SpatialGrid {
    /// Partition `points` over a `width × height` viewport.
    ///
    /// Every point is assigned to exactly one cell; positions are clamped
    /// into grid bounds so a coordinate sitting exactly on the far edge
    /// cannot index past the last column or row. A degenerate viewport
    /// produces an empty grid.
    pub fn build(points: &[Vec2], width: f32, height: f32, cell_size: f32) -> Self {
        if width <= 0.0 || height <= 0.0 || cell_size <= 0.0 {
            return Self {
                cell_size,
                cols: 0,
                rows: 0,
                cells: Vec::new(),
                coords: Vec::new(),
            };
        }

        let cols = (width / cell_size).ceil().max(1.0) as usize;
        let rows = (height / cell_size).ceil().max(1.0) as usize;
        let mut cells: Vec<Vec<usize>> = vec![Vec::new(); cols * rows];
        let mut coords = Vec::with_capacity(points.len());

        for (idx, p) in points.iter().enumerate() {
            let col = ((p.x / cell_size).floor() as isize).clamp(0, cols as isize - 1) as usize;
            let row = ((p.y / cell_size).floor() as isize).clamp(0, rows as isize - 1) as usize;
            cells[row * cols + col].push(idx);
            coords.push((col, row));
        }

        Self { cell_size, cols, rows, cells, coords }
    }

    /// Number of grid columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of grid rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Cell edge length.
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Visit every unordered pair of points closer than `radius`.
    ///
    /// `points` must be the slice the grid was built from. For each pair the
    /// callback receives `(i, j, distance)` with `i < j`; each pair is
    /// visited exactly once and self-pairs never occur. Candidates are
    /// gathered from the 3×3 cell block around each point's cached cell;
    /// out-of-bounds neighbor cells are skipped, never wrapped or aliased
    /// into an adjacent row. Rejection happens on squared distance, so the
    /// square root is only taken for pairs that are actually within range.
    pub fn for_each_pair<F>(&self, points: &[Vec2], radius: f32, mut visit: F)
    where
        F: FnMut(usize, usize, f32),
    {
        debug_assert_eq!(points.len(), self.coords.len());
        let radius_sq = radius * radius;

        for (i, &(col, row)) in self.coords.iter().enumerate() {
            for dy in -1isize..=1 {
                for dx in -1isize..=1 {
                    let ncol = col as isize + dx;
                    let nrow = row as isize + dy;
                    if ncol < 0
                        || nrow < 0
                        || ncol >= self.cols as isize
                        || nrow >= self.rows as isize
                    {
                        continue;
                    }

                    let cell = &self.cells[nrow as usize * self.cols + ncol as usize];
                    for &j in cell {
                        // i < j visits each unordered pair exactly once
                        if j <= i {
                            continue;
                        }
                        let dist_sq = points[i].distance_squared(points[j]);
                        if dist_sq < radius_sq {
                            visit(i, j, dist_sq.sqrt());
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use std::collections::BTreeSet;

    fn brute_force_pairs(points: &[Vec2], radius: f32) -> BTreeSet<(usize, usize)> {
        let mut pairs = BTreeSet::new();
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                if points[i].distance_squared(points[j]) < radius * radius {
                    pairs.insert((i, j));
                }
            }
        }
        pairs
    }

    fn grid_pairs(points: &[Vec2], w: f32, h: f32, radius: f32) -> BTreeSet<(usize, usize)> {
        let grid = SpatialGrid::build(points, w, h, radius);
        let mut pairs = BTreeSet::new();
        grid.for_each_pair(points, radius, |i, j, _| {
            assert!(i < j, "pair ({i}, {j}) is not ordered");
            assert!(pairs.insert((i, j)), "pair ({i}, {j}) visited twice");
        });
        pairs
    }

    #[test]
    fn every_point_lands_in_exactly_one_cell() {
        let points = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(99.9, 79.9),
            Vec2::new(50.0, 40.0),
            Vec2::new(10.0, 70.0),
        ];
        let grid = SpatialGrid::build(&points, 100.0, 80.0, 30.0);
        let total: usize = grid.cells.iter().map(Vec::len).sum();
        assert_eq!(total, points.len());
    }

    #[test]
    fn grid_dimensions_round_up() {
        let grid = SpatialGrid::build(&[], 1000.0, 800.0, 100.0);
        assert_eq!(grid.cols(), 10);
        assert_eq!(grid.rows(), 8);

        let grid = SpatialGrid::build(&[], 1001.0, 801.0, 100.0);
        assert_eq!(grid.cols(), 11);
        assert_eq!(grid.rows(), 9);
    }

    #[test]
    fn degenerate_viewport_builds_empty_grid() {
        let grid = SpatialGrid::build(&[], 0.0, 600.0, 100.0);
        assert_eq!(grid.cols(), 0);
        assert_eq!(grid.rows(), 0);
        grid.for_each_pair(&[], 100.0, |_, _, _| panic!("no pairs expected"));
    }

    #[test]
    fn finds_pairs_across_cell_boundaries() {
        // Two points 2px apart but in different cells
        let points = vec![Vec2::new(99.0, 50.0), Vec2::new(101.0, 50.0)];
        let pairs = grid_pairs(&points, 400.0, 100.0, 100.0);
        assert_eq!(pairs, BTreeSet::from([(0, 1)]));
    }

    #[test]
    fn pair_at_exact_radius_is_rejected() {
        let points = vec![Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0)];
        let pairs = grid_pairs(&points, 400.0, 100.0, 100.0);
        assert!(pairs.is_empty());
    }

    #[test]
    fn edge_column_does_not_alias_into_next_row() {
        // Right-edge point and left-edge point one row apart: a wrapped
        // row-major index would pair them even though they are ~300px apart.
        let points = vec![Vec2::new(399.0, 10.0), Vec2::new(1.0, 110.0)];
        let pairs = grid_pairs(&points, 400.0, 200.0, 100.0);
        assert!(pairs.is_empty());
    }

    #[test]
    fn matches_brute_force_on_random_sets() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for &(w, h, radius, n) in &[
            (1000.0f32, 800.0f32, 100.0f32, 60usize),
            (640.0, 480.0, 75.0, 40),
            (150.0, 150.0, 100.0, 25),
            (90.0, 60.0, 100.0, 15), // radius larger than the viewport
        ] {
            for _ in 0..10 {
                let points: Vec<Vec2> = (0..n)
                    .map(|_| Vec2::new(rng.gen::<f32>() * w, rng.gen::<f32>() * h))
                    .collect();
                assert_eq!(
                    grid_pairs(&points, w, h, radius),
                    brute_force_pairs(&points, radius),
                    "grid and brute force disagree for {w}x{h} r={radius} n={n}"
                );
            }
        }
    }

    #[test]
    fn reported_distances_are_euclidean() {
        let points = vec![Vec2::new(0.0, 0.0), Vec2::new(30.0, 40.0)];
        let grid = SpatialGrid::build(&points, 200.0, 200.0, 100.0);
        let mut seen = None;
        grid.for_each_pair(&points, 100.0, |i, j, dist| {
            seen = Some((i, j, dist));
        });
        let (i, j, dist) = seen.expect("pair within range");
        assert_eq!((i, j), (0, 1));
        assert!((dist - 50.0).abs() < 1e-4);
    }
}
