//! The entrant registry: identifier -> rating, shared across threads.

use crate::error::{StoreError, StoreResult};
use crate::ranking::RankingView;
use rand::seq::IteratorRandom;
use rand::Rng;
use rankboard_types::{Entrant, EntrantId, Page, PageRequest, RankedEntrant, Rating, Stats};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// Canonical store of every entrant's current rating.
///
/// Readers run concurrently; each write takes the lock exclusively for a
/// single map operation. Ranked reads copy the map out under the read lock
/// and sort after releasing it.
#[derive(Debug, Default)]
pub struct Registry {
    entrants: RwLock<HashMap<EntrantId, Rating>>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    // Every write is one map operation, so a panicking holder cannot leave a
    // half-written entry behind and the poison flag can be ignored.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<EntrantId, Rating>> {
        self.entrants.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<EntrantId, Rating>> {
        self.entrants.write().unwrap_or_else(PoisonError::into_inner)
    }

    // ── Writes ───────────────────────────────────────────────────

    /// Inserts an entrant or overwrites its rating.
    ///
    /// The rating is validated before the lock is taken; an invalid rating
    /// leaves the registry untouched.
    pub fn upsert(&self, id: impl Into<EntrantId>, rating: i64) -> StoreResult<()> {
        let rating = Rating::new(rating)?;
        let id = id.into();
        debug!("upsert {id} = {rating}");
        self.write().insert(id, rating);
        Ok(())
    }

    /// Overwrites the rating of an existing entrant, returning the previous
    /// rating.
    ///
    /// Unlike [`Registry::upsert`] this never creates an entrant. The lookup
    /// and the write happen under the same lock.
    pub fn update_rating(&self, id: &str, rating: i64) -> StoreResult<Rating> {
        let rating = Rating::new(rating)?;
        let mut entrants = self.write();
        let slot = entrants
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(EntrantId::new(id)))?;
        let previous = std::mem::replace(slot, rating);
        debug!("update {id}: {previous} -> {rating}");
        Ok(previous)
    }

    // ── Point reads ──────────────────────────────────────────────

    /// Looks up a single entrant.
    pub fn get(&self, id: &str) -> StoreResult<Entrant> {
        self.read()
            .get_key_value(id)
            .map(|(id, rating)| Entrant::new(id.clone(), *rating))
            .ok_or_else(|| StoreError::NotFound(EntrantId::new(id)))
    }

    /// Number of distinct entrants.
    pub fn count(&self) -> usize {
        self.read().len()
    }

    /// Returns `true` if no entrant has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Rank computed by counting entrants with a strictly greater rating.
    ///
    /// Always agrees with the snapshot-position rank from
    /// [`Registry::get_rank`]; this form needs no sort.
    pub fn rank_by_count(&self, id: &str) -> StoreResult<usize> {
        let entrants = self.read();
        let rating = entrants
            .get(id)
            .copied()
            .ok_or_else(|| StoreError::NotFound(EntrantId::new(id)))?;
        Ok(1 + entrants.values().filter(|r| **r > rating).count())
    }

    /// Picks an entrant uniformly at random, or `None` if the registry is
    /// empty.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Entrant> {
        self.read()
            .iter()
            .choose(rng)
            .map(|(id, rating)| Entrant::new(id.clone(), *rating))
    }

    // ── Snapshots ────────────────────────────────────────────────

    /// Point-in-time copy of every entrant in leaderboard order.
    ///
    /// Later writes are not reflected in the returned vector.
    pub fn all_sorted_by_rating(&self) -> Vec<Entrant> {
        let mut snapshot: Vec<Entrant> = {
            let entrants = self.read();
            entrants
                .iter()
                .map(|(id, rating)| Entrant::new(id.clone(), *rating))
                .collect()
        };
        // Identifiers are unique, so the order is total and an unstable sort
        // is deterministic.
        snapshot.sort_unstable_by(Entrant::leaderboard_cmp);
        snapshot
    }

    /// Builds a fresh ranked view of the current contents.
    pub fn ranking(&self) -> RankingView {
        RankingView::from_sorted(self.all_sorted_by_rating())
    }

    // ── Ranked reads ─────────────────────────────────────────────

    /// One page of the leaderboard.
    pub fn get_page(&self, request: PageRequest) -> Page {
        self.ranking().page(request)
    }

    /// An entrant's rank, located by its position in a fresh snapshot.
    pub fn get_rank(&self, id: &str) -> StoreResult<RankedEntrant> {
        self.ranking().rank_of(id)
    }

    /// Case-insensitive substring search over identifiers, in leaderboard
    /// order, carrying global ranks.
    pub fn search(&self, query: &str, limit: usize) -> Vec<RankedEntrant> {
        self.ranking().search(query, limit)
    }

    /// Aggregate statistics, or [`StoreError::EmptyRegistry`].
    pub fn get_stats(&self) -> StoreResult<Stats> {
        self.ranking().stats()
    }
}
