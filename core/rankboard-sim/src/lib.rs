//! Writers that drive the ranking store from inside the process.
//!
//! - [`seed`] bulk-inserts entrants with uniformly random ratings.
//! - [`Simulator`] periodically rewrites a random entrant's rating until its
//!   cancellation token fires.
//!
//! Both only go through the public [`rankboard_store::Registry`] API, so they
//! are ordinary concurrent writers from the registry's point of view.

mod config;
mod seed;
mod simulator;

pub use config::{SeedOptions, SimulatorConfig, DEFAULT_UPDATE_INTERVAL};
pub use seed::{random_rating_value, seed, seed_with};
pub use simulator::{RatingChange, Simulator};
