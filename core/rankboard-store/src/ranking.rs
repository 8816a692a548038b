//! Ranked views derived from a sorted registry snapshot.

use crate::error::{StoreError, StoreResult};
use rankboard_types::{Entrant, EntrantId, Page, PageRequest, RankedEntrant, Stats};

/// Number of matches returned by a search when the caller does not say.
pub const DEFAULT_SEARCH_LIMIT: usize = 50;

/// A ranked, ordered snapshot of the registry.
///
/// Built on demand and never updated; a later read builds a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankingView {
    entries: Vec<RankedEntrant>,
}

impl RankingView {
    /// Assigns competition ranks to entrants already in leaderboard order.
    ///
    /// One pass: the rank only moves when the rating changes, and then jumps
    /// to the 1-based position, which equals one plus the number of entrants
    /// ahead with a strictly greater rating.
    pub fn from_sorted(sorted: Vec<Entrant>) -> Self {
        let mut entries = Vec::with_capacity(sorted.len());
        let mut current_rank = 1;
        let mut last_rating = None;

        for (i, entrant) in sorted.into_iter().enumerate() {
            if last_rating.is_some_and(|last| last != entrant.rating) {
                current_rank = i + 1;
            }
            last_rating = Some(entrant.rating);
            entries.push(RankedEntrant {
                rank: current_rank,
                id: entrant.id,
                rating: entrant.rating,
            });
        }

        Self { entries }
    }

    /// Sorts arbitrary entrants into leaderboard order and ranks them.
    pub fn from_unsorted(mut entrants: Vec<Entrant>) -> Self {
        entrants.sort_unstable_by(Entrant::leaderboard_cmp);
        Self::from_sorted(entrants)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every ranked entrant, best first.
    pub fn entries(&self) -> &[RankedEntrant] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<RankedEntrant> {
        self.entries
    }

    /// The window `[offset, offset + limit)` of the ranking.
    ///
    /// A window starting past the end is empty with `has_more == false`.
    pub fn page(&self, request: PageRequest) -> Page {
        let total_count = self.entries.len();
        let offset = request.offset();
        let end = offset.saturating_add(request.limit()).min(total_count);

        let entries = if offset >= total_count {
            Vec::new()
        } else {
            self.entries[offset..end].to_vec()
        };

        Page {
            entries,
            page: request.page(),
            limit: request.limit(),
            total_count,
            has_more: offset.saturating_add(request.limit()) < total_count,
        }
    }

    /// Finds an entrant's ranked entry.
    pub fn rank_of(&self, id: &str) -> StoreResult<RankedEntrant> {
        self.entries
            .iter()
            .find(|entry| entry.id.as_str() == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(EntrantId::new(id)))
    }

    /// Entrants whose identifier contains `query`, ignoring case.
    ///
    /// Matches keep leaderboard order and their global rank, and the result
    /// is cut to `limit` after ordering, so it always holds the best matches.
    pub fn search(&self, query: &str, limit: usize) -> Vec<RankedEntrant> {
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.id.contains_lowercase(&needle))
            .take(limit)
            .cloned()
            .collect()
    }

    /// Count, extremes and mean rating.
    ///
    /// An empty view has no meaningful extremes or mean, so it reports
    /// [`StoreError::EmptyRegistry`] instead of zeroes.
    pub fn stats(&self) -> StoreResult<Stats> {
        let (Some(best), Some(worst)) = (self.entries.first(), self.entries.last()) else {
            return Err(StoreError::EmptyRegistry);
        };
        let sum: u64 = self
            .entries
            .iter()
            .map(|entry| u64::from(entry.rating.value()))
            .sum();

        Ok(Stats {
            total_count: self.entries.len(),
            min_rating: worst.rating,
            max_rating: best.rating,
            average_rating: sum as f64 / self.entries.len() as f64,
        })
    }
}
