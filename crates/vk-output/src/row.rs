//! Plain data row types written by output backends.

/// One agent's state at a given tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    /// Storage index at this tick (not stable across removals).
    pub agent_id: u32,
    pub tick:     u64,
    pub x:        f64,
    pub y:        f64,
    pub heading:  f64,
}

/// Summary statistics for one executed tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:           u64,
    pub agents:         u64,
    pub mean_neighbors: f64,
    /// Polarization in `[0, 1]`.
    pub order:          f64,
}
