//! Property-based tests for ranking correctness.
//!
//! Every ranked read must agree with the definition of competition ranking:
//! an entrant's rank is one plus the number of entrants with a strictly
//! greater rating, whichever way it is computed.

use proptest::prelude::*;
use rankboard_store::Registry;
use rankboard_types::PageRequest;
use std::collections::{BTreeMap, HashSet};

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

fn rating_strategy() -> impl Strategy<Value = i64> {
    // A narrow band forces plenty of ties.
    prop_oneof![100i64..=5000, 1000i64..=1010]
}

fn id_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z_0-9]{1,8}").unwrap()
}

fn population_strategy() -> impl Strategy<Value = BTreeMap<String, i64>> {
    prop::collection::btree_map(id_strategy(), rating_strategy(), 0..80)
}

fn build(population: &BTreeMap<String, i64>) -> Registry {
    let registry = Registry::new();
    for (id, rating) in population {
        registry.upsert(id.as_str(), *rating).unwrap();
    }
    registry
}

// =============================================================================
// RANK PROPERTIES
// =============================================================================

proptest! {
    /// A strictly higher rating always ranks strictly better.
    #[test]
    fn higher_rating_ranks_better(r1 in 100i64..=5000, r2 in 100i64..=5000) {
        prop_assume!(r1 != r2);
        let (high, low) = if r1 > r2 { (r1, r2) } else { (r2, r1) };
        let registry = Registry::new();
        registry.upsert("A", high).unwrap();
        registry.upsert("B", low).unwrap();
        prop_assert!(registry.get_rank("A").unwrap().rank < registry.get_rank("B").unwrap().rank);
    }

    /// Equal ratings share one rank.
    #[test]
    fn equal_ratings_share_rank(population in population_strategy()) {
        let registry = build(&population);
        let mut rank_by_rating = BTreeMap::new();
        for entry in registry.ranking().entries() {
            let rank = *rank_by_rating.entry(entry.rating).or_insert(entry.rank);
            prop_assert_eq!(rank, entry.rank);
        }
    }

    /// Walking the snapshot, rank never decreases and ratings never increase.
    #[test]
    fn rank_is_monotonic(population in population_strategy()) {
        let view = build(&population).ranking();
        for pair in view.entries().windows(2) {
            prop_assert!(pair[0].rating >= pair[1].rating);
            prop_assert!(pair[0].rank <= pair[1].rank);
            if pair[0].rating == pair[1].rating {
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }

    /// Snapshot-position rank equals 1 + count of strictly greater ratings.
    #[test]
    fn position_rank_equals_count_rank(population in population_strategy()) {
        let registry = build(&population);
        for (id, rating) in &population {
            let expected = 1 + population.values().filter(|r| *r > rating).count();
            prop_assert_eq!(registry.get_rank(id).unwrap().rank, expected);
            prop_assert_eq!(registry.rank_by_count(id).unwrap(), expected);
        }
    }
}

// =============================================================================
// PAGINATION & SEARCH PROPERTIES
// =============================================================================

proptest! {
    /// Concatenated pages reproduce the snapshot: no gaps, no duplicates.
    #[test]
    fn pages_cover_snapshot_exactly(
        population in population_strategy(),
        limit in 1i64..=100,
    ) {
        let registry = build(&population);
        let mut collected = Vec::new();
        let mut page = 1;
        loop {
            let window = registry.get_page(PageRequest::new(page, limit));
            prop_assert_eq!(window.total_count, registry.count());
            collected.extend(window.entries);
            if !window.has_more {
                break;
            }
            page += 1;
        }

        prop_assert_eq!(collected.len(), registry.count());
        let unique: HashSet<_> = collected.iter().map(|e| e.id.clone()).collect();
        prop_assert_eq!(unique.len(), collected.len());
        prop_assert_eq!(collected, registry.ranking().into_entries());
    }

    /// Any page past the end is empty and reports no more pages.
    #[test]
    fn page_past_end_is_empty(
        population in population_strategy(),
        limit in 1i64..=100,
        extra in 0i64..5,
    ) {
        let registry = build(&population);
        let count = registry.count() as i64;
        let first_empty_page = (count + limit - 1) / limit + 1;
        let page = registry.get_page(PageRequest::new(first_empty_page + extra, limit));
        prop_assert!(page.entries.is_empty());
        prop_assert!(!page.has_more);
        prop_assert_eq!(page.total_count, registry.count());
    }

    /// Search hits are exactly the filtered ranking, with unfiltered ranks.
    #[test]
    fn search_is_filtered_ranking(
        population in population_strategy(),
        query in "[a-zA-Z]{0,2}",
        limit in 0usize..60,
    ) {
        let registry = build(&population);
        let needle = query.to_lowercase();
        let expected: Vec<_> = registry
            .ranking()
            .into_entries()
            .into_iter()
            .filter(|e| e.id.as_str().to_lowercase().contains(&needle))
            .take(limit)
            .collect();
        prop_assert_eq!(registry.search(&query, limit), expected);
    }

    /// Stats agree with a direct computation over the population.
    #[test]
    fn stats_match_population(population in population_strategy()) {
        let registry = build(&population);
        match registry.get_stats() {
            Ok(stats) => {
                let min = population.values().min().copied().unwrap();
                let max = population.values().max().copied().unwrap();
                let sum: i64 = population.values().sum();
                prop_assert_eq!(stats.total_count, population.len());
                prop_assert_eq!(i64::from(stats.min_rating), min);
                prop_assert_eq!(i64::from(stats.max_rating), max);
                let mean = sum as f64 / population.len() as f64;
                prop_assert!((stats.average_rating - mean).abs() < 1e-9);
            }
            Err(_) => prop_assert!(population.is_empty()),
        }
    }
}
