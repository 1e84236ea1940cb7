//! The `NeighborIndex` trait and the all-pairs reference implementation.

use vk_core::{AgentId, Domain, Point};

/// Common behaviour exposed by neighborhood indices.
///
/// Indices are immutable snapshots of one point set: build a new one whenever
/// positions change.  Every point at wrapped distance strictly less than `r`
/// is reported, including a point located exactly at `p`.  A radius that is
/// not positive (or NaN) matches nothing.
pub trait NeighborIndex {
    /// Visit every indexed point within wrapped distance `r` of `p`, passing
    /// its id and squared distance.  Each point is visited at most once.
    fn for_each_neighbor(&self, p: Point, r: f64, visitor: &mut dyn FnMut(AgentId, f64));

    /// Collect the ids within `r` of `p`.  Order is unspecified.
    fn neighbors(&self, p: Point, r: f64) -> Vec<AgentId> {
        let mut out = Vec::new();
        self.for_each_neighbor(p, r, &mut |id, _| out.push(id));
        out
    }

    /// Number of indexed points within `r` of `p`.
    fn count_neighbors(&self, p: Point, r: f64) -> usize {
        let mut n = 0;
        self.for_each_neighbor(p, r, &mut |_, _| n += 1);
        n
    }
}

/// `true` if `r` can match anything at all.
#[inline]
pub(crate) fn usable_radius(r: f64) -> bool {
    r > 0.0
}

/// Distance test for a usable radius.  `d_sq == 0` always matches, even when
/// `r * r` underflows to zero.
#[inline]
pub(crate) fn within(d_sq: f64, r_sq: f64) -> bool {
    d_sq < r_sq || d_sq == 0.0
}

// ── BruteForceIndex ───────────────────────────────────────────────────────────

/// O(N) per query: tests every point.  Kept as the equivalence oracle for
/// [`GridIndex`][crate::GridIndex].
pub struct BruteForceIndex {
    domain: Domain,
    points: Vec<Point>,
}

impl BruteForceIndex {
    pub fn build(points: &[Point], domain: Domain) -> Self {
        Self {
            domain,
            points: points.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl NeighborIndex for BruteForceIndex {
    fn for_each_neighbor(&self, p: Point, r: f64, visitor: &mut dyn FnMut(AgentId, f64)) {
        if !usable_radius(r) || self.domain.is_degenerate() {
            return;
        }
        let r_sq = r * r;
        for (i, &q) in self.points.iter().enumerate() {
            let d_sq = self.domain.distance_sq(p, q);
            if within(d_sq, r_sq) {
                visitor(AgentId(i as u32), d_sq);
            }
        }
    }
}
