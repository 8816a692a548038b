//! Configuration for seeding and the update simulator.

use std::time::Duration;

/// Interval between simulated updates.
pub const DEFAULT_UPDATE_INTERVAL: Duration = Duration::from_secs(5);

/// Configuration for the [`Simulator`](crate::Simulator).
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Time between two simulated updates.
    pub interval: Duration,
    /// Fixed RNG seed for reproducible runs; `None` seeds from the OS.
    pub rng_seed: Option<u64>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_UPDATE_INTERVAL,
            rng_seed: None,
        }
    }
}

/// Options for [`seed`](crate::seed).
#[derive(Debug, Clone)]
pub struct SeedOptions {
    /// Identifiers are `{prefix}{n}` with `n` counting from 1.
    pub prefix: String,
    /// Log progress every this many entrants; 0 disables progress lines.
    pub progress_every: usize,
    /// Fixed RNG seed for reproducible ratings; `None` seeds from the OS.
    pub rng_seed: Option<u64>,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            prefix: "user_".to_string(),
            progress_every: 1000,
            rng_seed: None,
        }
    }
}
