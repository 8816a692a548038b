//! Periodic simulated rating updates.

use crate::config::SimulatorConfig;
use crate::seed::{make_rng, random_rating_value};
use rand::rngs::StdRng;
use rankboard_store::{Registry, StoreResult};
use rankboard_types::{EntrantId, Rating};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// One rating rewrite performed by the simulator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingChange {
    pub id: EntrantId,
    pub previous: Rating,
    pub current: Rating,
}

/// Background writer that rewrites a random entrant's rating every interval.
///
/// The timer and the cancellation token are owned by whoever runs it; the
/// simulator itself holds nothing but a handle to the registry.
pub struct Simulator {
    registry: Arc<Registry>,
    config: SimulatorConfig,
    rng: StdRng,
}

impl Simulator {
    pub fn new(registry: Arc<Registry>, config: SimulatorConfig) -> Self {
        let rng = make_rng(config.rng_seed);
        Self {
            registry,
            config,
            rng,
        }
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Performs a single update.
    ///
    /// Returns `Ok(None)` when the registry is empty. The write itself is one
    /// atomic registry operation.
    pub fn tick(&mut self) -> StoreResult<Option<RatingChange>> {
        let Some(entrant) = self.registry.sample(&mut self.rng) else {
            return Ok(None);
        };
        let current = Rating::new(random_rating_value(&mut self.rng))?;
        let previous = self
            .registry
            .update_rating(entrant.id.as_str(), i64::from(current))?;

        info!("Updated {}: {previous} -> {current}", entrant.id);
        Ok(Some(RatingChange {
            id: entrant.id,
            previous,
            current,
        }))
    }

    /// Runs until `cancel` fires, returning the number of applied updates.
    ///
    /// The first update happens one full interval after start. Failed or
    /// skipped ticks are logged and the loop carries on.
    pub async fn run(mut self, cancel: CancellationToken) -> u64 {
        // `interval` panics on a zero period.
        let period = self.config.interval.max(Duration::from_millis(1));
        let mut ticker = tokio::time::interval(period);
        // After a stall, drop the missed ticks and stay on the original schedule.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first tick completes immediately.
        ticker.tick().await;

        info!("Started random rating updates (every {period:?})");
        let mut applied = 0u64;

        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                _ = ticker.tick() => match self.tick() {
                    Ok(Some(_)) => applied += 1,
                    Ok(None) => debug!("Registry empty, skipping update"),
                    Err(e) => warn!("Failed to apply random update: {e}"),
                },
            }
        }

        info!("Random rating updates stopped after {applied} updates");
        applied
    }

    /// Spawns [`Simulator::run`] on the current tokio runtime.
    pub fn spawn(self, cancel: CancellationToken) -> JoinHandle<u64> {
        tokio::spawn(self.run(cancel))
    }
}
