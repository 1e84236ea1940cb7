//! Fluent builder for hand-placed flocks.
//!
//! # Usage
//!
//! ```rust
//! use std::f64::consts::FRAC_PI_2;
//! use vk_agent::AgentStoreBuilder;
//! use vk_core::{Domain, Point};
//!
//! let domain = Domain::new(100.0, 100.0).unwrap();
//! let store = AgentStoreBuilder::new(domain, /*trail_capacity=*/ 7)
//!     .agent(Point::new(5.0, 5.0), 0.0, 1.0)
//!     .agent(Point::new(8.0, 5.0), FRAC_PI_2, 1.0)
//!     .build();
//!
//! assert_eq!(store.len(), 2);
//! ```

use vk_core::{Domain, Point};

use crate::AgentStore;

/// Fluent builder for [`AgentStore`] with explicit initial states.
///
/// Random populations come from [`AgentStore::spawn_random`] instead.
pub struct AgentStoreBuilder {
    domain: Domain,
    store:  AgentStore,
}

impl AgentStoreBuilder {
    /// Create a builder whose agents are placed on `domain`.
    pub fn new(domain: Domain, trail_capacity: usize) -> Self {
        Self {
            domain,
            store: AgentStore::new(trail_capacity),
        }
    }

    /// Add one agent.  The position is wrapped into the domain.
    pub fn agent(mut self, position: Point, heading: f64, speed: f64) -> Self {
        self.store.push(self.domain, position, heading, speed);
        self
    }

    /// Add one agent per `(position, heading)` pair, all with `speed`.
    pub fn agents<I>(mut self, agents: I, speed: f64) -> Self
    where
        I: IntoIterator<Item = (Point, f64)>,
    {
        for (position, heading) in agents {
            self.store.push(self.domain, position, heading, speed);
        }
        self
    }

    pub fn build(self) -> AgentStore {
        self.store
    }
}
