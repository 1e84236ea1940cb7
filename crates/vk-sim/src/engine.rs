//! The `FlockEngine` struct and its tick loop.

use tracing::{debug, info, warn};

use vk_agent::AgentStore;
use vk_core::config::{check_finite, check_non_negative};
use vk_core::{AgentId, Domain, FlockConfig, SimRng, Tick};
use vk_spatial::{GridIndex, NeighborIndex};

use crate::{FlockBuilder, FlockObserver, SimResult};

// ── StepStats ─────────────────────────────────────────────────────────────────

/// Summary of one executed tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StepStats {
    /// The tick that was executed.
    pub tick: Tick,
    /// Population during the tick.
    pub agents: usize,
    /// Average neighbor-set size, self included.  0 when nothing moved.
    pub mean_neighbors: f64,
    /// Polarization after the tick (see [`AgentStore::order_parameter`]).
    pub order: f64,
}

// ── FlockEngine ───────────────────────────────────────────────────────────────

/// Owns the flock and applies the Vicsek rule one tick at a time.
///
/// Every operation takes `&mut self`, so a step always runs to completion
/// before any edit can be made.  A step has no failure path: headings for the
/// whole flock are computed from the pre-step snapshot first and only then
/// committed, so partial updates are never observable.
///
/// Create via [`FlockEngine::new`] or [`FlockBuilder`].
pub struct FlockEngine {
    /// Current parameters.  `width`/`height` mirror `domain`.
    pub(crate) config: FlockConfig,

    /// The torus.  May be degenerate after a resize.
    pub(crate) domain: Domain,

    pub(crate) agents: AgentStore,

    /// Single source of randomness for spawns, removals and noise.
    pub(crate) rng: SimRng,

    /// Next tick to execute.
    pub(crate) tick: Tick,

    /// Render-only flag, passed through untouched.
    pub(crate) draw_circles: bool,

    #[cfg(feature = "parallel")]
    pub(crate) pool: Option<rayon::ThreadPool>,
}

impl FlockEngine {
    /// Build a flock of `agent_count` random agents on `domain` with radius
    /// `radius`, noise `noise` and speed `speed`.  Trail length and seed take
    /// their [`FlockConfig`] defaults; use [`FlockBuilder`] for full control.
    pub fn new(
        domain:      Domain,
        agent_count: usize,
        radius:      f64,
        noise:       f64,
        speed:       f64,
    ) -> SimResult<Self> {
        let config = FlockConfig {
            width: domain.width,
            height: domain.height,
            agent_count,
            radius,
            noise,
            speed,
            ..FlockConfig::default()
        };
        FlockBuilder::new(config).build()
    }

    // ── Read accessors ────────────────────────────────────────────────────

    /// Read-only access to the flock.  Iterate with [`AgentStore::iter`].
    #[inline]
    pub fn agents(&self) -> &AgentStore {
        &self.agents
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    #[inline]
    pub fn domain(&self) -> Domain {
        self.domain
    }

    #[inline]
    pub fn config(&self) -> &FlockConfig {
        &self.config
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.config.radius
    }

    #[inline]
    pub fn noise(&self) -> f64 {
        self.config.noise
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.config.speed
    }

    /// The next tick [`step`](Self::step) will execute.
    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    #[inline]
    pub fn draw_circles(&self) -> bool {
        self.draw_circles
    }

    pub fn order_parameter(&self) -> f64 {
        self.agents.order_parameter()
    }

    // ── Edits between ticks ───────────────────────────────────────────────

    /// Append `count` agents at random positions and headings, moving at the
    /// current speed.
    pub fn add_agents(&mut self, count: usize) {
        self.agents
            .spawn_random(count, self.domain, self.config.speed, &mut self.rng);
        debug!(added = count, agents = self.agents.len(), "agents added");
    }

    /// Remove `min(count, len())` agents chosen uniformly at random.  Returns
    /// how many were removed; an empty flock is a no-op.
    pub fn remove_agents(&mut self, count: usize) -> usize {
        let removed = self.agents.remove_random(count, &mut self.rng);
        debug!(removed, agents = self.agents.len(), "agents removed");
        removed
    }

    /// Replace the noise amplitude.  Any finite value is accepted; callers
    /// clamp to a display range if they want to.  The noise distribution is
    /// symmetric, so `-η` behaves like `η`.
    pub fn set_noise(&mut self, noise: f64) -> SimResult<()> {
        self.config.noise = check_finite("noise", noise)?;
        Ok(())
    }

    /// Replace the interaction radius.  The grid resolution follows on the
    /// next step.
    pub fn set_radius(&mut self, radius: f64) -> SimResult<()> {
        self.config.radius = check_non_negative("radius", radius)?;
        info!(radius, "interaction radius changed");
        Ok(())
    }

    /// Speed for agents created from now on.  Existing agents keep theirs.
    pub fn set_speed(&mut self, speed: f64) -> SimResult<()> {
        self.config.speed = check_non_negative("speed", speed)?;
        Ok(())
    }

    pub fn set_trail_capacity(&mut self, capacity: usize) {
        self.config.trail_capacity = capacity;
        self.agents.set_trail_capacity(capacity);
    }

    pub fn set_draw_circles(&mut self, on: bool) {
        self.draw_circles = on;
    }

    /// Change the torus extent.  Agents are not moved; every later wrap and
    /// index build uses the new size.  Zero extents give a degenerate domain
    /// on which steps neither align nor move anyone.
    pub fn resize_domain(&mut self, width: f64, height: f64) -> SimResult<()> {
        let domain = Domain::resized(width, height)?;
        if domain == self.domain {
            return Ok(());
        }
        self.domain = domain;
        self.config.width = width;
        self.config.height = height;
        if domain.is_degenerate() {
            warn!(%domain, "domain resized to zero area; steps will not move agents");
        } else {
            info!(%domain, "domain resized");
        }
        Ok(())
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Execute one tick.  See the crate docs for the phase order.
    pub fn step(&mut self) -> StepStats {
        let now = self.tick;
        let n = self.agents.len();
        self.tick = now.next();

        if n == 0 || self.domain.is_degenerate() {
            if n > 0 {
                debug!(tick = now.0, "degenerate domain; flock left unchanged");
            }
            return StepStats {
                tick: now,
                agents: n,
                mean_neighbors: 0.0,
                order: self.agents.order_parameter(),
            };
        }

        // ── Phase 1: index the pre-step positions ─────────────────────────
        let index = GridIndex::for_radius(&self.agents.positions, self.domain, self.config.radius);

        // ── Phase 2: new headings from the static snapshot ────────────────
        //
        // Noise is drawn up front, in agent order, so the heading phase never
        // touches the RNG and can run in parallel.
        let half_noise = self.config.noise * 0.5;
        let noise: Vec<f64> = (0..n)
            .map(|_| half_noise * (1.0 - 2.0 * self.rng.random::<f64>()))
            .collect();
        let updates = self.compute_headings(&index, &noise);

        // ── Phase 3: commit ───────────────────────────────────────────────
        let mut neighbor_total = 0usize;
        for (i, (heading, count)) in updates.into_iter().enumerate() {
            neighbor_total += count;
            self.agents.advance(AgentId(i as u32), heading, self.domain);
        }

        let stats = StepStats {
            tick: now,
            agents: n,
            mean_neighbors: neighbor_total as f64 / n as f64,
            order: self.agents.order_parameter(),
        };
        debug!(
            tick = now.0,
            agents = n,
            mean_neighbors = stats.mean_neighbors,
            order = stats.order,
            "step",
        );
        stats
    }

    /// Step `n` times with observer hooks, ignoring `total_ticks`.
    pub fn run_ticks<O: FlockObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.observed_step(observer);
        }
    }

    /// Step until the tick counter reaches `config.total_ticks`, then call
    /// [`FlockObserver::on_run_end`].
    ///
    /// A run starting from tick 0 first snapshots the initial population.
    pub fn run<O: FlockObserver>(&mut self, observer: &mut O) {
        let end = Tick(self.config.total_ticks);
        info!(from = self.tick.0, to = end.0, agents = self.agents.len(), "run started");
        if self.tick == Tick::ZERO && self.config.output_interval_ticks > 0 {
            observer.on_snapshot(self.tick, &self.agents, &self.domain);
        }
        while self.tick < end {
            self.observed_step(observer);
        }
        observer.on_run_end(self.tick);
        info!(tick = self.tick.0, order = self.order_parameter(), "run finished");
    }

    fn observed_step<O: FlockObserver>(&mut self, observer: &mut O) {
        observer.on_tick_start(self.tick);
        let stats = self.step();
        observer.on_tick_end(&stats);
        if self.tick.is_on_interval(self.config.output_interval_ticks) {
            observer.on_snapshot(self.tick, &self.agents, &self.domain);
        }
    }

    /// `(new heading, neighbor count)` for every agent, in index order.
    fn compute_headings(&self, index: &GridIndex, noise: &[f64]) -> Vec<(f64, usize)> {
        let agents = &self.agents;
        let radius = self.config.radius;

        #[cfg(not(feature = "parallel"))]
        {
            (0..agents.len())
                .map(|i| aligned_heading(index, agents, i, radius, noise[i]))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            let run = || {
                (0..agents.len())
                    .into_par_iter()
                    .map(|i| aligned_heading(index, agents, i, radius, noise[i]))
                    .collect::<Vec<_>>()
            };
            match &self.pool {
                Some(pool) => pool.install(run),
                None => run(),
            }
        }
    }
}

/// Circular mean of the headings within `radius` of agent `i` (itself
/// included), plus `noise`.
///
/// An empty neighbor set (only possible when `radius` is 0) leaves the
/// heading unchanged and ignores the noise sample.
fn aligned_heading(
    index:  &GridIndex,
    agents: &AgentStore,
    i:      usize,
    radius: f64,
    noise:  f64,
) -> (f64, usize) {
    let mut sin_sum = 0.0;
    let mut cos_sum = 0.0;
    let mut count = 0usize;
    index.for_each_neighbor(agents.positions[i], radius, &mut |other, _| {
        let h = agents.headings[other.index()];
        sin_sum += h.sin();
        cos_sum += h.cos();
        count += 1;
    });

    if count == 0 {
        return (agents.headings[i], 0);
    }
    (sin_sum.atan2(cos_sum) + noise, count)
}
