//! `vk-sim` — the Vicsek flocking engine.
//!
//! # Two-phase tick
//!
//! ```text
//! step():
//!   ① Index    — bucket all current positions into a GridIndex sized to r.
//!   ② Headings — for each agent (parallel with the `parallel` feature):
//!                  circular mean of neighbor headings (self included)
//!                  + uniform noise in [-η/2, η/2].
//!                Reads only the pre-step snapshot.
//!   ③ Commit   — for each agent in ascending AgentId order:
//!                  set heading, move one step at its speed, wrap, push trail.
//! ```
//!
//! Population edits (`add_agents`, `remove_agents`) and parameter changes are
//! separate operations between ticks; none of them can interleave with a step.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the heading phase on Rayon's thread pool.         |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use vk_core::FlockConfig;
//! use vk_sim::{FlockBuilder, NoopObserver};
//!
//! let mut engine = FlockBuilder::new(FlockConfig::default()).build()?;
//! engine.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod observer;


pub use builder::FlockBuilder;
pub use engine::{FlockEngine, StepStats};
pub use error::{SimError, SimResult};
pub use observer::{FlockObserver, NoopObserver};
