//! Unit tests for vk-spatial.
//!
//! The central law: for any point set and radius, `GridIndex` and
//! `BruteForceIndex` report exactly the same neighbor sets.

#[cfg(test)]
mod helpers {
    use vk_core::{AgentId, Domain, Point, SimRng};

    pub fn square(side: f64) -> Domain {
        Domain::new(side, side).unwrap()
    }

    pub fn random_points(rng: &mut SimRng, n: usize, domain: Domain) -> Vec<Point> {
        (0..n)
            .map(|_| {
                Point::new(
                    rng.gen_range(0.0..domain.width),
                    rng.gen_range(0.0..domain.height),
                )
            })
            .collect()
    }

    pub fn sorted(mut ids: Vec<AgentId>) -> Vec<AgentId> {
        ids.sort();
        ids
    }
}

// ── Construction ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod build {
    use vk_core::{AgentId, Domain, Point};

    use super::helpers::square;
    use crate::GridIndex;
    use crate::NeighborIndex;
    use crate::grid::{MAX_AXIS_CELLS, resolution_for_radius};

    #[test]
    fn empty_point_set() {
        let grid = GridIndex::build(&[], square(100.0), 10, 10);
        assert!(grid.is_empty());
        assert_eq!(grid.resolution(), (10, 10));
        assert!(grid.cell(3, 4).is_empty());
    }

    #[test]
    fn resolution_clamped_to_one() {
        let grid = GridIndex::build(&[Point::new(1.0, 1.0)], square(100.0), 0, 0);
        assert_eq!(grid.resolution(), (1, 1));
        assert_eq!(grid.cell(0, 0), &[AgentId(0)]);
    }

    #[test]
    fn resolution_from_radius() {
        let d = Domain::new(100.0, 35.0).unwrap();
        assert_eq!(resolution_for_radius(d, 10.0, 1000), (10, 3));
        assert_eq!(resolution_for_radius(d, 200.0, 1000), (1, 1));
        assert_eq!(resolution_for_radius(d, 0.0, 1000), (1, 1));
        assert_eq!(resolution_for_radius(d, f64::NAN, 1000), (1, 1));
    }

    #[test]
    fn tiny_radius_resolution_is_bounded() {
        let d = square(100.0);
        // sqrt(4 * 25) = 10 cells per axis at most.
        assert_eq!(resolution_for_radius(d, 0.001, 25), (10, 10));
        assert_eq!(resolution_for_radius(d, 1e-12, 0), (2, 2));
        assert_eq!(resolution_for_radius(d, f64::MIN_POSITIVE, 1 << 40), (MAX_AXIS_CELLS, MAX_AXIS_CELLS));
    }

    #[test]
    fn explicit_resolution_is_bounded() {
        let grid = GridIndex::build(&[Point::new(1.0, 1.0)], square(100.0), usize::MAX, usize::MAX);
        assert_eq!(grid.resolution(), (MAX_AXIS_CELLS, MAX_AXIS_CELLS));
        assert_eq!(grid.neighbors(Point::new(1.0, 1.0), 0.5), vec![AgentId(0)]);
    }

    #[test]
    fn every_point_in_exactly_its_cell() {
        let pts = vec![
            Point::new(0.0, 0.0),
            Point::new(9.99, 0.0),
            Point::new(10.0, 0.0),
            Point::new(99.999, 99.999),
            Point::new(55.0, 21.0),
        ];
        let grid = GridIndex::build(&pts, square(100.0), 10, 10);
        assert_eq!(grid.cell_of(pts[0]), (0, 0));
        assert_eq!(grid.cell_of(pts[1]), (0, 0));
        assert_eq!(grid.cell_of(pts[2]), (1, 0));
        assert_eq!(grid.cell_of(pts[3]), (9, 9));
        assert_eq!(grid.cell_of(pts[4]), (5, 2));

        let mut total = 0;
        for j in 0..10 {
            for i in 0..10 {
                for id in grid.cell(i, j) {
                    assert_eq!(grid.cell_of(pts[id.index()]), (i, j));
                    total += 1;
                }
            }
        }
        assert_eq!(total, pts.len());
    }

    #[test]
    fn boundary_value_folds_into_range() {
        let grid = GridIndex::build(&[], square(100.0), 10, 10);
        assert_eq!(grid.cell_of(Point::new(100.0, -0.5)), (0, 9));
    }

    #[test]
    fn degenerate_domain_has_empty_buckets() {
        let d = Domain::resized(0.0, 50.0).unwrap();
        let grid = GridIndex::build(&[Point::new(0.0, 1.0)], d, 4, 4);
        assert_eq!(grid.len(), 1);
        assert!(grid.cell(0, 0).is_empty());
    }
}

// ── Queries ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod query {
    use vk_core::{AgentId, Point};

    use super::helpers::{sorted, square};
    use crate::{GridIndex, NeighborIndex};

    #[test]
    fn includes_self() {
        let pts = [Point::new(50.0, 50.0)];
        let grid = GridIndex::for_radius(&pts, square(100.0), 10.0);
        assert_eq!(grid.neighbors(pts[0], 10.0), vec![AgentId(0)]);
    }

    #[test]
    fn self_found_with_smallest_radius() {
        let pts = [Point::new(50.0, 50.0), Point::new(50.0, 50.0), Point::new(51.0, 50.0)];
        let r = f64::MIN_POSITIVE;
        let grid = GridIndex::for_radius(&pts, square(100.0), r);
        assert_eq!(sorted(grid.neighbors(pts[0], r)), vec![AgentId(0), AgentId(1)]);
        let brute = crate::BruteForceIndex::build(&pts, square(100.0));
        assert_eq!(sorted(brute.neighbors(pts[2], r)), vec![AgentId(2)]);
    }

    #[test]
    fn non_positive_radius_matches_nothing() {
        let pts = [Point::new(50.0, 50.0)];
        let grid = GridIndex::for_radius(&pts, square(100.0), 10.0);
        assert!(grid.neighbors(pts[0], 0.0).is_empty());
        assert!(grid.neighbors(pts[0], -3.0).is_empty());
        assert!(grid.neighbors(pts[0], f64::NAN).is_empty());
    }

    #[test]
    fn wraps_across_vertical_edge() {
        let pts = [Point::new(1.0, 50.0), Point::new(99.0, 50.0)];
        let grid = GridIndex::for_radius(&pts, square(100.0), 10.0);
        assert_eq!(sorted(grid.neighbors(pts[0], 10.0)), vec![AgentId(0), AgentId(1)]);
        assert_eq!(sorted(grid.neighbors(pts[1], 10.0)), vec![AgentId(0), AgentId(1)]);
    }

    #[test]
    fn wraps_across_corner() {
        let pts = [Point::new(0.5, 0.5), Point::new(99.5, 99.5), Point::new(50.0, 50.0)];
        let grid = GridIndex::for_radius(&pts, square(100.0), 5.0);
        assert_eq!(sorted(grid.neighbors(pts[0], 5.0)), vec![AgentId(0), AgentId(1)]);
    }

    #[test]
    fn distance_is_strict() {
        let pts = [Point::new(10.0, 10.0), Point::new(20.0, 10.0)];
        let grid = GridIndex::for_radius(&pts, square(100.0), 10.0);
        assert_eq!(grid.count_neighbors(pts[0], 10.0), 1);
        assert_eq!(grid.count_neighbors(pts[0], 10.000_001), 2);
    }

    #[test]
    fn reports_squared_distance() {
        let pts = [Point::new(1.0, 1.0), Point::new(98.0, 1.0)];
        let grid = GridIndex::for_radius(&pts, square(100.0), 10.0);
        let mut seen = Vec::new();
        grid.for_each_neighbor(pts[0], 10.0, &mut |id, d_sq| seen.push((id, d_sq)));
        seen.sort_by_key(|&(id, _)| id);
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], (AgentId(0), 0.0));
        assert!((seen[1].1 - 9.0).abs() < 1e-9);
    }

    #[test]
    fn radius_larger_than_domain_visits_each_point_once() {
        let pts = [Point::new(10.0, 10.0), Point::new(60.0, 60.0), Point::new(90.0, 5.0)];
        // Fine grid, huge radius: the scan window wraps past itself.
        let grid = GridIndex::build(&pts, square(100.0), 10, 10);
        assert_eq!(sorted(grid.neighbors(pts[0], 250.0)), vec![AgentId(0), AgentId(1), AgentId(2)]);
    }
}

// ── Grid vs brute force ────────────────────────────────────────────────────────

#[cfg(test)]
mod equivalence {
    use vk_core::{Domain, SimRng};

    use super::helpers::{random_points, sorted};
    use crate::{BruteForceIndex, GridIndex, NeighborIndex};

    fn assert_equivalent(domain: Domain, n: usize, r: f64, nx: usize, ny: usize, seed: u64) {
        let mut rng = SimRng::new(seed);
        let pts = random_points(&mut rng, n, domain);
        let grid = GridIndex::build(&pts, domain, nx, ny);
        let brute = BruteForceIndex::build(&pts, domain);
        for &p in &pts {
            assert_eq!(
                sorted(grid.neighbors(p, r)),
                sorted(brute.neighbors(p, r)),
                "domain {domain}, r {r}, grid {nx}x{ny}, query {p}",
            );
        }
    }

    #[test]
    fn matches_brute_force_at_natural_resolution() {
        let domain = Domain::new(100.0, 100.0).unwrap();
        for seed in 0..5 {
            assert_equivalent(domain, 300, 10.0, 10, 10, seed);
        }
    }

    #[test]
    fn matches_brute_force_for_random_radii_and_shapes() {
        let mut rng = SimRng::new(99);
        for seed in 0..20 {
            let w = rng.gen_range(5.0..200.0);
            let h = rng.gen_range(5.0..200.0);
            let domain = Domain::new(w, h).unwrap();
            // Radii up to and beyond half the shorter side.
            let r = rng.gen_range(0.1..w.min(h));
            let nx = rng.gen_range(1..25);
            let ny = rng.gen_range(1..25);
            assert_equivalent(domain, 150, r, nx, ny, seed);
        }
    }

    #[test]
    fn matches_brute_force_near_half_domain() {
        let domain = Domain::new(60.0, 40.0).unwrap();
        for r in [19.0, 20.0, 21.0, 29.9, 30.0, 36.0, 80.0] {
            assert_equivalent(domain, 120, r, 6, 4, 7);
            assert_equivalent(domain, 120, r, 13, 9, 8);
        }
    }

    #[test]
    fn query_points_off_the_index_agree() {
        let domain = Domain::new(80.0, 80.0).unwrap();
        let mut rng = SimRng::new(5);
        let pts = super::helpers::random_points(&mut rng, 200, domain);
        let grid = GridIndex::for_radius(&pts, domain, 7.5);
        let brute = BruteForceIndex::build(&pts, domain);
        for q in super::helpers::random_points(&mut rng, 50, domain) {
            assert_eq!(sorted(grid.neighbors(q, 7.5)), sorted(brute.neighbors(q, 7.5)));
        }
    }
}
