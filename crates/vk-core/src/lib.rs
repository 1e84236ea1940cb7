//! `vk-core` — foundational types for the `vicsek` flocking engine.
//!
//! This crate is a dependency of every other `vk-*` crate.  It has no `vk-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`geo`]         | `Point`, `Domain` (periodic geometry)                 |
//! | [`time`]        | `Tick`                                                |
//! | [`rng`]         | `SimRng`                                              |
//! | [`config`]      | `FlockConfig`                                         |
//! | [`error`]       | `VkError`, `VkResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::FlockConfig;
pub use error::{VkError, VkResult};
pub use geo::{Domain, Point};
pub use ids::AgentId;
pub use rng::SimRng;
pub use time::Tick;
