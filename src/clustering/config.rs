//! Partitioner configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Settings for [`partition_with`](super::partition_with).
///
/// Defaults: seed 42, at most 300 Lloyd iterations per restart, 10 restarts.
///
/// # Examples
///
/// ```
/// use zone_routing::clustering::PartitionConfig;
///
/// let cfg = PartitionConfig::default()
///     .with_seed(7)
///     .with_max_iterations(50)
///     .with_restarts(3);
/// assert_eq!(cfg.seed(), 7);
/// assert_eq!(cfg.max_iterations(), 50);
/// assert_eq!(cfg.restarts(), 3);
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionConfig {
    seed: u64,
    max_iterations: usize,
    restarts: usize,
}

impl PartitionConfig {
    /// Sets the base random seed. Each restart derives its own seed from it.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the Lloyd iteration budget per restart.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the number of independently seeded restarts.
    pub fn with_restarts(mut self, restarts: usize) -> Self {
        self.restarts = restarts;
        self
    }

    /// Base random seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Lloyd iteration budget per restart.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Number of restarts.
    pub fn restarts(&self) -> usize {
        self.restarts
    }

    /// Checks that the iteration budget and restart count are positive.
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(Error::invalid_config("max_iterations must be at least 1"));
        }
        if self.restarts == 0 {
            return Err(Error::invalid_config("restarts must be at least 1"));
        }
        Ok(())
    }

    /// Parses a configuration from JSON; missing fields take their defaults.
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)
            .map_err(|e| Error::invalid_config(format!("unreadable partition config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_iterations: 300,
            restarts: 10,
        }
    }
}
