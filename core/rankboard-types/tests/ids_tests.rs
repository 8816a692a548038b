use rankboard_types::EntrantId;
use std::collections::HashSet;
use std::str::FromStr;

#[test]
fn display_and_parse() {
    let id = EntrantId::new("user_42");
    let parsed = EntrantId::from_str(&id.to_string()).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn conversions_agree() {
    assert_eq!(EntrantId::from("alice"), EntrantId::from("alice".to_string()));
    assert_eq!(EntrantId::new("alice").as_str(), "alice");
    assert_eq!(EntrantId::new("alice").into_inner(), "alice");
}

#[test]
fn ordering_is_bytewise() {
    let mut ids = vec![
        EntrantId::new("b"),
        EntrantId::new("B"),
        EntrantId::new("a"),
        EntrantId::new("A"),
    ];
    ids.sort();
    let sorted: Vec<&str> = ids.iter().map(EntrantId::as_str).collect();
    assert_eq!(sorted, vec!["A", "B", "a", "b"]);
}

#[test]
fn hash_and_eq() {
    let mut set = HashSet::new();
    set.insert(EntrantId::new("x"));
    set.insert(EntrantId::new("x"));
    assert_eq!(set.len(), 1);
}

#[test]
fn case_insensitive_contains() {
    let id = EntrantId::new("Player_One");
    assert!(id.contains_lowercase("player"));
    assert!(id.contains_lowercase("_one"));
    assert!(id.contains_lowercase(""));
    assert!(!id.contains_lowercase("two"));
}

#[test]
fn serializes_transparently() {
    let json = serde_json::to_string(&EntrantId::new("bob")).unwrap();
    assert_eq!(json, "\"bob\"");
    let parsed: EntrantId = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.as_str(), "bob");
}
