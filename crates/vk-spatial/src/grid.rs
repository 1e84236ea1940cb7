//! Uniform bucket grid over a periodic domain.
//!
//! # Data layout
//!
//! Cells are numbered row-major, `cell = j * nx + i`.  Bucket contents use
//! **Compressed Sparse Row (CSR)** format: the agents in cell `c` occupy
//!
//! ```text
//! entries[ cell_start[c] .. cell_start[c+1] ]
//! ```
//!
//! The index is built in two O(N) passes (count, then scatter) and is never
//! mutated afterwards; the engine rebuilds it from scratch every tick.
//!
//! # Query
//!
//! A query at `p` with radius `r` scans `cx = ceil(r / cell_w)` columns and
//! `cy = ceil(r / cell_h)` rows on each side of `p`'s cell, wrapping cell
//! indices modulo `nx`/`ny`.  If `2c + 1` reaches the axis length, the whole
//! axis is scanned once instead, so no bucket is visited twice.

use vk_core::{AgentId, Domain, Point};

use crate::index::{NeighborIndex, usable_radius, within};

/// Upper bound on cells per axis for any grid.
pub const MAX_AXIS_CELLS: usize = 1024;

/// Radius-derived grids hold at most this many cells per indexed point.
const CELLS_PER_POINT: usize = 4;

/// Bucket grid sized to the interaction radius.  See the module docs.
#[derive(Clone, Debug)]
pub struct GridIndex {
    domain: Domain,
    nx: usize,
    ny: usize,
    /// CSR row pointer.  Length = `nx * ny + 1`.
    cell_start: Vec<u32>,
    /// Agent ids sorted by cell.
    entries: Vec<AgentId>,
    /// Copy of the indexed positions, indexed by `AgentId`.
    points: Vec<Point>,
}

impl GridIndex {
    /// Bucket `points` into an `nx × ny` grid over `domain`.
    ///
    /// `nx` and `ny` are clamped to `1..=MAX_AXIS_CELLS`.  On a degenerate
    /// domain every bucket stays empty.
    pub fn build(points: &[Point], domain: Domain, nx: usize, ny: usize) -> Self {
        let nx = nx.clamp(1, MAX_AXIS_CELLS);
        let ny = ny.clamp(1, MAX_AXIS_CELLS);
        let n_cells = nx * ny;

        let mut index = Self {
            domain,
            nx,
            ny,
            cell_start: vec![0; n_cells + 1],
            entries: Vec::new(),
            points: points.to_vec(),
        };
        if domain.is_degenerate() {
            return index;
        }

        // Pass 1: count per cell, shifted by one so the prefix sum lands in place.
        let cells: Vec<usize> = points.iter().map(|&p| index.cell_index(p)).collect();
        for &c in &cells {
            index.cell_start[c + 1] += 1;
        }
        for c in 0..n_cells {
            index.cell_start[c + 1] += index.cell_start[c];
        }

        // Pass 2: scatter ids into their buckets.
        let mut cursor: Vec<u32> = index.cell_start[..n_cells].to_vec();
        index.entries = vec![AgentId(0); points.len()];
        for (i, &c) in cells.iter().enumerate() {
            let slot = cursor[c] as usize;
            index.entries[slot] = AgentId(i as u32);
            cursor[c] += 1;
        }

        index
    }

    /// Build with the resolution implied by interaction radius `r`.  See
    /// [`resolution_for_radius`].
    pub fn for_radius(points: &[Point], domain: Domain, r: f64) -> Self {
        let (nx, ny) = resolution_for_radius(domain, r, points.len());
        Self::build(points, domain, nx, ny)
    }

    /// Grid resolution `(nx, ny)`.
    #[inline]
    pub fn resolution(&self) -> (usize, usize) {
        (self.nx, self.ny)
    }

    #[inline]
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Number of indexed points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Cell coordinate `(i, j)` containing `p`:
    /// `floor(p / extent * n) mod n` on each axis.
    #[inline]
    pub fn cell_of(&self, p: Point) -> (usize, usize) {
        (
            axis_cell(p.x, self.domain.width, self.nx),
            axis_cell(p.y, self.domain.height, self.ny),
        )
    }

    /// Agents bucketed in cell `(i, j)`.  Out-of-range coordinates wrap.
    pub fn cell(&self, i: usize, j: usize) -> &[AgentId] {
        self.bucket((j % self.ny) * self.nx + (i % self.nx))
    }

    #[inline]
    fn cell_index(&self, p: Point) -> usize {
        let (i, j) = self.cell_of(p);
        j * self.nx + i
    }

    #[inline]
    fn bucket(&self, c: usize) -> &[AgentId] {
        let start = self.cell_start[c] as usize;
        let end = self.cell_start[c + 1] as usize;
        &self.entries[start..end]
    }
}

impl NeighborIndex for GridIndex {
    fn for_each_neighbor(&self, p: Point, r: f64, visitor: &mut dyn FnMut(AgentId, f64)) {
        if !usable_radius(r) || self.domain.is_degenerate() || self.points.is_empty() {
            return;
        }
        let r_sq = r * r;
        let (ci, cj) = self.cell_of(p);
        let cols = AxisSpan::new(ci, r / self.domain.width, self.nx);
        let rows = AxisSpan::new(cj, r / self.domain.height, self.ny);

        for j in rows.iter() {
            let row_base = j * self.nx;
            for i in cols.iter() {
                for &id in self.bucket(row_base + i) {
                    let d_sq = self.domain.distance_sq(p, self.points[id.index()]);
                    if within(d_sq, r_sq) {
                        visitor(id, d_sq);
                    }
                }
            }
        }
    }
}

/// Resolution for a grid whose cells are at least `r` wide on each axis:
/// `floor(extent / r)`, at least 1.
///
/// Each axis is also capped at `ceil(sqrt(4 * max(points, 1)))` (and
/// [`MAX_AXIS_CELLS`]), so a tiny radius cannot blow up the cell array.
/// Coarser cells only widen the scan; query results are unchanged.  A
/// non-positive or non-finite `r` gives a single cell.
pub fn resolution_for_radius(domain: Domain, r: f64, points: usize) -> (usize, usize) {
    if !(r.is_finite() && r > 0.0) || domain.is_degenerate() {
        return (1, 1);
    }
    let cap = ((points.max(1).saturating_mul(CELLS_PER_POINT) as f64).sqrt().ceil() as usize)
        .clamp(1, MAX_AXIS_CELLS);
    // Float-to-int casts saturate, so a huge `extent / r` lands on the cap.
    let per_axis = |extent: f64| ((extent / r).floor() as usize).clamp(1, cap);
    (per_axis(domain.width), per_axis(domain.height))
}

#[inline]
fn axis_cell(v: f64, extent: f64, n: usize) -> usize {
    // NaN and infinities cast to 0 / saturate; rem_euclid folds them back in.
    let k = (v / extent * n as f64).floor() as i64;
    k.rem_euclid(n as i64) as usize
}

// ── Axis iteration ────────────────────────────────────────────────────────────

/// The distinct cell indices to scan along one axis: `len` consecutive cells
/// starting at `start`, modulo `n`.
#[derive(Copy, Clone)]
struct AxisSpan {
    start: usize,
    len: usize,
    n: usize,
}

impl AxisSpan {
    /// `rel_radius` is the query radius as a fraction of the axis extent.
    fn new(center: usize, rel_radius: f64, n: usize) -> Self {
        let reach = (rel_radius * n as f64).ceil();
        if reach.is_nan() || 2.0 * reach + 1.0 >= n as f64 {
            return Self { start: 0, len: n, n };
        }
        let reach = reach as usize;
        Self {
            start: center + n - reach,
            len: 2 * reach + 1,
            n,
        }
    }

    fn iter(self) -> impl Iterator<Item = usize> {
        (0..self.len).map(move |k| (self.start + k) % self.n)
    }
}
