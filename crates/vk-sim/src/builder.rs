//! Fluent builder for constructing a [`FlockEngine`].

use tracing::info;

use vk_agent::AgentStore;
use vk_core::{FlockConfig, SimRng, Tick, VkError};

use crate::{FlockEngine, SimResult};

/// Fluent builder for [`FlockEngine`].
///
/// # Required inputs
///
/// - [`FlockConfig`] — domain, parameters, seed, …
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                             |
/// |-----------------|-----------------------------------------------------|
/// | `.agents(s)`    | `config.agent_count` random agents from `config.seed` |
///
/// # Example
///
/// ```rust,ignore
/// let store = AgentStoreBuilder::new(domain, 7)
///     .agent(Point::new(5.0, 5.0), 0.0, 1.0)
///     .build();
/// let engine = FlockBuilder::new(config).agents(store).build()?;
/// ```
pub struct FlockBuilder {
    config: FlockConfig,
    agents: Option<AgentStore>,
}

impl FlockBuilder {
    pub fn new(config: FlockConfig) -> Self {
        Self { config, agents: None }
    }

    /// Start from an explicit population instead of a random one.
    ///
    /// Every position must already lie inside the configured domain.  The
    /// store's trail capacity replaces `config.trail_capacity`.
    pub fn agents(mut self, agents: AgentStore) -> Self {
        self.agents = Some(agents);
        self
    }

    /// Validate inputs, populate the flock and return a ready-to-step engine.
    pub fn build(self) -> SimResult<FlockEngine> {
        let mut config = self.config;
        config.validate()?;
        let domain = config.domain()?;
        let mut rng = SimRng::new(config.seed);

        let agents = match self.agents {
            Some(store) => {
                if let Some(a) = store.iter().find(|a| !domain.contains(a.position)) {
                    return Err(VkError::Config(format!(
                        "{} at {} lies outside domain {domain}",
                        a.id, a.position,
                    ))
                    .into());
                }
                config.trail_capacity = store.trail_capacity();
                store
            }
            None => {
                let mut store = AgentStore::new(config.trail_capacity);
                store.spawn_random(config.agent_count, domain, config.speed, &mut rng);
                store
            }
        };

        #[cfg(feature = "parallel")]
        let pool = match config.num_threads {
            Some(n) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| crate::SimError::ThreadPool(e.to_string()))?,
            ),
            None => None,
        };

        info!(
            agents = agents.len(),
            %domain,
            radius = config.radius,
            noise = config.noise,
            speed = config.speed,
            seed = config.seed,
            "flock engine ready",
        );

        Ok(FlockEngine {
            config,
            domain,
            agents,
            rng,
            tick: Tick::ZERO,
            draw_circles: false,
            #[cfg(feature = "parallel")]
            pool,
        })
    }
}
