//! `vk-agent` — Structure-of-Arrays flock storage.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`trail`]       | `Trail` (fixed-capacity ring buffer of past positions)   |
//! | [`store`]       | `AgentStore` (SoA arrays), `AgentView` (read-only row)    |
//! | [`builder`]     | `AgentStoreBuilder` (explicit placements)                 |

pub mod builder;
pub mod store;
pub mod trail;


pub use builder::AgentStoreBuilder;
pub use store::{AgentStore, AgentView};
pub use trail::Trail;
