use rand::rngs::StdRng;
use rand::SeedableRng;
use rankboard_store::{Registry, StoreError};
use rankboard_types::{EntrantId, InvalidRating, Rating};
use std::collections::HashSet;

fn rating(value: i64) -> Rating {
    Rating::new(value).unwrap()
}

// ── Upsert ───────────────────────────────────────────────────────

#[test]
fn new_registry_is_empty() {
    let registry = Registry::new();
    assert_eq!(registry.count(), 0);
    assert!(registry.is_empty());
    assert!(registry.all_sorted_by_rating().is_empty());
}

#[test]
fn upsert_inserts_entrant() {
    let registry = Registry::new();
    registry.upsert("alice", 1500).unwrap();

    let alice = registry.get("alice").unwrap();
    assert_eq!(alice.id, EntrantId::new("alice"));
    assert_eq!(alice.rating, rating(1500));
    assert_eq!(registry.count(), 1);
}

#[test]
fn upsert_overwrites_without_duplicating() {
    let registry = Registry::new();
    registry.upsert("alice", 1500).unwrap();
    registry.upsert("alice", 2500).unwrap();

    assert_eq!(registry.count(), 1);
    assert_eq!(registry.get("alice").unwrap().rating, rating(2500));
}

#[test]
fn upsert_boundaries_are_inclusive() {
    let registry = Registry::new();
    assert!(registry.upsert("low", 100).is_ok());
    assert!(registry.upsert("high", 5000).is_ok());
    assert_eq!(
        registry.upsert("below", 99),
        Err(StoreError::InvalidRating(InvalidRating(99)))
    );
    assert_eq!(
        registry.upsert("above", 5001),
        Err(StoreError::InvalidRating(InvalidRating(5001)))
    );
    assert_eq!(registry.count(), 2);
}

#[test]
fn rejected_upsert_keeps_previous_rating() {
    let registry = Registry::new();
    registry.upsert("alice", 1200).unwrap();
    assert!(registry.upsert("alice", 6000).is_err());
    assert_eq!(registry.get("alice").unwrap().rating, rating(1200));
}

// ── Update ───────────────────────────────────────────────────────

#[test]
fn update_rating_returns_previous() {
    let registry = Registry::new();
    registry.upsert("bob", 800).unwrap();

    let previous = registry.update_rating("bob", 4200).unwrap();
    assert_eq!(previous, rating(800));
    assert_eq!(registry.get("bob").unwrap().rating, rating(4200));
}

#[test]
fn update_rating_requires_existing_entrant() {
    let registry = Registry::new();
    assert_eq!(
        registry.update_rating("ghost", 1000),
        Err(StoreError::NotFound(EntrantId::new("ghost")))
    );
    assert_eq!(registry.count(), 0);
}

#[test]
fn update_rating_validates_before_lookup() {
    let registry = Registry::new();
    registry.upsert("bob", 800).unwrap();
    assert!(matches!(
        registry.update_rating("bob", 50),
        Err(StoreError::InvalidRating(_))
    ));
    assert!(matches!(
        registry.update_rating("ghost", 50),
        Err(StoreError::InvalidRating(_))
    ));
    assert_eq!(registry.get("bob").unwrap().rating, rating(800));
}

// ── Lookups ──────────────────────────────────────────────────────

#[test]
fn get_missing_is_not_found() {
    let registry = Registry::new();
    registry.upsert("alice", 1000).unwrap();
    assert_eq!(
        registry.get("Alice"),
        Err(StoreError::NotFound(EntrantId::new("Alice")))
    );
}

#[test]
fn rank_by_count_missing_is_not_found() {
    let registry = Registry::new();
    assert!(matches!(
        registry.rank_by_count("nobody"),
        Err(StoreError::NotFound(_))
    ));
}

#[test]
fn sorted_snapshot_orders_by_rating_then_id() {
    let registry = Registry::new();
    registry.upsert("carol", 3000).unwrap();
    registry.upsert("alice", 3000).unwrap();
    registry.upsert("dave", 100).unwrap();
    registry.upsert("bob", 5000).unwrap();

    let ids: Vec<String> = registry
        .all_sorted_by_rating()
        .into_iter()
        .map(|e| e.id.into_inner())
        .collect();
    assert_eq!(ids, vec!["bob", "alice", "carol", "dave"]);
}

#[test]
fn snapshot_is_point_in_time() {
    let registry = Registry::new();
    registry.upsert("alice", 1000).unwrap();
    let snapshot = registry.all_sorted_by_rating();

    registry.upsert("alice", 2000).unwrap();
    registry.upsert("bob", 3000).unwrap();

    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].rating, rating(1000));
}

// ── Sampling ─────────────────────────────────────────────────────

#[test]
fn sample_empty_is_none() {
    let registry = Registry::new();
    let mut rng = StdRng::seed_from_u64(1);
    assert!(registry.sample(&mut rng).is_none());
}

#[test]
fn sample_returns_existing_entrants() {
    let registry = Registry::new();
    for i in 0..20 {
        registry.upsert(format!("user_{i}"), 100 + i * 10).unwrap();
    }
    let mut rng = StdRng::seed_from_u64(7);
    let mut seen = HashSet::new();
    for _ in 0..500 {
        let entrant = registry.sample(&mut rng).unwrap();
        assert_eq!(registry.get(entrant.id.as_str()).unwrap(), entrant);
        seen.insert(entrant.id);
    }
    // 500 uniform draws over 20 entrants hit all of them.
    assert_eq!(seen.len(), 20);
}
