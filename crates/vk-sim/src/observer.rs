//! Engine observer trait for progress reporting and data collection.

use vk_agent::AgentStore;
use vk_core::{Domain, Tick};

use crate::StepStats;

/// Callbacks invoked by [`FlockEngine::run`][crate::FlockEngine::run] and
/// [`FlockEngine::run_ticks`][crate::FlockEngine::run_ticks] at tick
/// boundaries.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Observers only ever see `&` access.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl FlockObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, stats: &StepStats) {
///         if stats.tick.0 % self.interval == 0 {
///             println!("{}: order {:.3}", stats.tick, stats.order);
///         }
///     }
/// }
/// ```
pub trait FlockObserver {
    /// Called before each step.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after each step with its summary.
    fn on_tick_end(&mut self, _stats: &StepStats) {}

    /// Called when the number of completed steps falls on
    /// `output_interval_ticks`, and once for the initial population when
    /// [`run`][crate::FlockEngine::run] starts from tick 0.
    ///
    /// `tick` counts the steps completed: 0 is the initial state, `k` the
    /// state after `k` steps.
    fn on_snapshot(&mut self, _tick: Tick, _agents: &AgentStore, _domain: &Domain) {}

    /// Called once after the final tick of a run.
    fn on_run_end(&mut self, _final_tick: Tick) {}
}

/// A [`FlockObserver`] that does nothing.
pub struct NoopObserver;

impl FlockObserver for NoopObserver {}
