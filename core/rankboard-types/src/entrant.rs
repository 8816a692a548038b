//! Entrants and the ranked projections built from them.

use crate::{EntrantId, Rating};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A uniquely identified participant with its current rating.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entrant {
    pub id: EntrantId,
    pub rating: Rating,
}

impl Entrant {
    #[must_use]
    pub fn new(id: impl Into<EntrantId>, rating: Rating) -> Self {
        Self {
            id: id.into(),
            rating,
        }
    }

    /// Leaderboard order: rating descending, then identifier ascending.
    ///
    /// This is a total order because identifiers are unique.
    #[must_use]
    pub fn leaderboard_cmp(&self, other: &Self) -> Ordering {
        other
            .rating
            .cmp(&self.rating)
            .then_with(|| self.id.cmp(&other.id))
    }
}

/// An entrant together with its competition rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntrant {
    /// 1 + number of entrants with a strictly greater rating.
    pub rank: usize,
    pub id: EntrantId,
    pub rating: Rating,
}

/// Aggregate statistics over a non-empty registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub total_count: usize,
    pub min_rating: Rating,
    pub max_rating: Rating,
    pub average_rating: f64,
}
