//! `FlockOutputObserver<W>` — bridges `FlockObserver` to an `OutputWriter`.

use vk_agent::AgentStore;
use vk_core::{Domain, Tick};
use vk_sim::{FlockObserver, StepStats};

use crate::row::{AgentSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`FlockObserver`] that writes agent snapshots and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `FlockObserver`
/// methods have no return value.  After `engine.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct FlockOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> FlockOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any).  Returns `None` if all writes
    /// succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer.  Needed after `run_ticks`, which does not fire
    /// `on_run_end`.
    pub fn finish(&mut self) -> OutputResult<()> {
        self.writer.finish()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> FlockObserver for FlockOutputObserver<W> {
    fn on_tick_end(&mut self, stats: &StepStats) {
        let row = TickSummaryRow {
            tick:           stats.tick.0,
            agents:         stats.agents as u64,
            mean_neighbors: stats.mean_neighbors,
            order:          stats.order,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore, _domain: &Domain) {
        let rows: Vec<AgentSnapshotRow> = agents
            .iter()
            .map(|a| AgentSnapshotRow {
                agent_id: a.id.0,
                tick:     tick.0,
                x:        a.position.x,
                y:        a.position.y,
                heading:  a.heading,
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_run_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
