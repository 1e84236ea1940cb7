//! `vk-output` — simulation output writers for the vicsek flocking engine.
//!
//! | Backend | Files created                                      |
//! |---------|----------------------------------------------------|
//! | CSV     | `agent_snapshots.csv`, `tick_summaries.csv`        |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`FlockOutputObserver`], which implements `vk_sim::FlockObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use vk_output::{CsvWriter, FlockOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = FlockOutputObserver::new(writer);
//! engine.run(&mut obs);
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::FlockOutputObserver;
pub use row::{AgentSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
