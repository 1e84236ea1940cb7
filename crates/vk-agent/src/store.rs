//! Core agent storage: `AgentStore` (SoA data) and `AgentView` (one row).
//!
//! # Layout
//!
//! Every `Vec` field has exactly `len()` elements and the `AgentId` value is
//! the index into all of them:
//!
//! ```ignore
//! let heading = store.headings[agent.index()];  // O(1), cache-friendly
//! ```
//!
//! Keeping positions in their own contiguous `Vec<Point>` lets the engine hand
//! them straight to `GridIndex::build` every tick without gathering.
//!
//! Agents carry no identity beyond their index.  Removal is swap-remove: the
//! last agent moves into the vacated slot and takes over its `AgentId`.

use std::f64::consts::TAU;

use vk_core::{AgentId, Domain, Point, SimRng};

use crate::Trail;

// ── AgentView ─────────────────────────────────────────────────────────────────

/// Read-only view of one agent, for renderers and output writers.
#[derive(Copy, Clone, Debug)]
pub struct AgentView<'a> {
    pub id:       AgentId,
    pub position: Point,
    /// Radians, any real value; interpret modulo 2π.
    pub heading:  f64,
    pub speed:    f64,
    /// Past positions, newest first.
    pub trail:    &'a Trail,
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for the whole flock.
///
/// The engine is the only writer.  Everyone else sees `&AgentStore`.
#[derive(Clone, Debug)]
pub struct AgentStore {
    /// Current position, always inside the domain.
    pub positions: Vec<Point>,

    /// Current heading in radians.
    pub headings: Vec<f64>,

    /// Constant per-agent speed, fixed at creation.
    pub speeds: Vec<f64>,

    /// Bounded position history, newest first.
    pub trails: Vec<Trail>,

    trail_capacity: usize,
}

impl AgentStore {
    /// An empty flock whose agents will keep `trail_capacity` past positions.
    pub fn new(trail_capacity: usize) -> Self {
        Self {
            positions: Vec::new(),
            headings: Vec::new(),
            speeds: Vec::new(),
            trails: Vec::new(),
            trail_capacity,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.len() as u32).map(AgentId)
    }

    #[inline]
    pub fn trail_capacity(&self) -> usize {
        self.trail_capacity
    }

    /// Resize every trail.  Shrinking drops the oldest positions.
    pub fn set_trail_capacity(&mut self, capacity: usize) {
        self.trail_capacity = capacity;
        for trail in &mut self.trails {
            trail.set_capacity(capacity);
        }
    }

    // ── Reads ─────────────────────────────────────────────────────────────

    /// Read-only view of one agent.  Panics if `id` is out of range.
    pub fn get(&self, id: AgentId) -> AgentView<'_> {
        let i = id.index();
        AgentView {
            id,
            position: self.positions[i],
            heading:  self.headings[i],
            speed:    self.speeds[i],
            trail:    &self.trails[i],
        }
    }

    /// All agents in index order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = AgentView<'_>> + '_ {
        (0..self.len()).map(|i| self.get(AgentId(i as u32)))
    }

    /// Vicsek polarization `|Σ (cos θ, sin θ)| / N`: 1 for a perfectly aligned
    /// flock, near 0 for random headings, 0 for an empty flock.
    pub fn order_parameter(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let (s, c) = self
            .headings
            .iter()
            .fold((0.0, 0.0), |(s, c), h| (s + h.sin(), c + h.cos()));
        s.hypot(c) / self.len() as f64
    }

    // ── Writes ────────────────────────────────────────────────────────────

    /// Append one agent.  `position` is wrapped into `domain` and seeds the
    /// trail.
    pub fn push(&mut self, domain: Domain, position: Point, heading: f64, speed: f64) -> AgentId {
        let id = AgentId(self.len() as u32);
        let position = domain.wrap(position);
        let mut trail = Trail::new(self.trail_capacity);
        trail.push(position);

        self.positions.push(position);
        self.headings.push(heading);
        self.speeds.push(speed);
        self.trails.push(trail);
        id
    }

    /// Append `count` agents at uniformly random positions with uniformly
    /// random headings in `[0, 2π)`.
    ///
    /// Draw order per agent is x, y, heading.
    pub fn spawn_random(&mut self, count: usize, domain: Domain, speed: f64, rng: &mut SimRng) {
        self.reserve(count);
        for _ in 0..count {
            let x = rng.random::<f64>() * domain.width;
            let y = rng.random::<f64>() * domain.height;
            let heading = rng.random::<f64>() * TAU;
            self.push(domain, Point::new(x, y), heading, speed);
        }
    }

    /// Remove one agent by moving the last agent into its slot.
    pub fn swap_remove(&mut self, id: AgentId) {
        let i = id.index();
        self.positions.swap_remove(i);
        self.headings.swap_remove(i);
        self.speeds.swap_remove(i);
        self.trails.swap_remove(i);
    }

    /// Remove `min(count, len())` agents chosen uniformly at random without
    /// replacement.  Each removal picks an index uniformly over the current
    /// population and swap-removes it.  Returns how many were removed.
    pub fn remove_random(&mut self, count: usize, rng: &mut SimRng) -> usize {
        let n = count.min(self.len());
        for _ in 0..n {
            let i = rng.gen_range(0..self.len());
            self.swap_remove(AgentId(i as u32));
        }
        n
    }

    /// Set `id`'s heading, move it one step at its own speed along that
    /// heading, wrap into `domain` and record the new position in its trail.
    pub fn advance(&mut self, id: AgentId, heading: f64, domain: Domain) {
        let i = id.index();
        let speed = self.speeds[i];
        let p = self.positions[i];
        let next = domain.wrap(Point::new(
            p.x + speed * heading.cos(),
            p.y + speed * heading.sin(),
        ));
        self.headings[i] = heading;
        self.positions[i] = next;
        self.trails[i].push(next);
    }

    fn reserve(&mut self, additional: usize) {
        self.positions.reserve(additional);
        self.headings.reserve(additional);
        self.speeds.reserve(additional);
        self.trails.reserve(additional);
    }
}
