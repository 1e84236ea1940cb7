//! Run configuration.
//!
//! Typically loaded from a JSON file by the application crate (with the
//! `serde` feature) and passed to `vk_sim::FlockBuilder`.  Every field is a
//! default for the run; the engine's setters may change radius, noise, speed,
//! trail length and domain between ticks.

use crate::{Domain, VkError, VkResult};

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FlockConfig {
    /// Torus width.
    pub width: f64,

    /// Torus height.
    pub height: f64,

    /// Agents spawned at random when the engine is built without an explicit
    /// population.
    pub agent_count: usize,

    /// Interaction radius `r`.
    pub radius: f64,

    /// Noise amplitude `η`.  Each tick perturbs headings by a uniform sample
    /// in `[-η/2, η/2]`.
    pub noise: f64,

    /// Speed given to newly created agents.
    pub speed: f64,

    /// Positions kept per agent for trail rendering (newest first).
    pub trail_capacity: usize,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Ticks executed by `FlockEngine::run`.
    pub total_ticks: u64,

    /// Worker thread count passed to Rayon.  `None` uses all logical cores.
    pub num_threads: Option<usize>,

    /// Snapshot cadence for observers.  1 = every tick, 0 = never.
    pub output_interval_ticks: u64,
}

impl Default for FlockConfig {
    fn default() -> Self {
        Self {
            width:                 512.0,
            height:                512.0,
            agent_count:           250,
            radius:                10.0,
            noise:                 0.4,
            speed:                 3.0,
            trail_capacity:        7,
            seed:                  42,
            total_ticks:           1_000,
            num_threads:           None,
            output_interval_ticks: 1,
        }
    }
}

impl FlockConfig {
    /// Check every precondition the engine relies on.
    pub fn validate(&self) -> VkResult<()> {
        Domain::new(self.width, self.height)?;
        check_non_negative("radius", self.radius)?;
        check_finite("noise", self.noise)?;
        check_non_negative("speed", self.speed)?;
        if self.num_threads == Some(0) {
            return Err(VkError::Config("num_threads must be at least 1".into()));
        }
        Ok(())
    }

    /// The torus described by `width` × `height`.
    pub fn domain(&self) -> VkResult<Domain> {
        Domain::new(self.width, self.height)
    }
}

/// Reject negative and non-finite values for `name`.
pub fn check_non_negative(name: &'static str, value: f64) -> VkResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(VkError::InvalidParameter { name, value })
    }
}

/// Reject non-finite values for `name`.  Any sign is accepted.
pub fn check_finite(name: &'static str, value: f64) -> VkResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(VkError::InvalidParameter { name, value })
    }
}
