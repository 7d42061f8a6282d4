use super::*;

#[test]
fn test_lookup_miss() {
    let table = TranspositionTable::new();
    assert!(table.lookup(42).is_none());
    assert!(table.is_empty());
}

#[test]
fn test_store_and_lookup() {
    let mut table = TranspositionTable::new();
    table.store(
        42,
        TableEntry {
            value: 1.5,
            depth: 3,
            bound: Bound::Lower,
        },
    );

    let entry = table.lookup(42).unwrap();
    assert_eq!(entry.value, 1.5);
    assert_eq!(entry.depth, 3);
    assert_eq!(entry.bound, Bound::Lower);
    assert_eq!(table.len(), 1);
}

#[test]
fn test_store_overwrites_unconditionally() {
    let mut table = TranspositionTable::new();
    table.store(
        42,
        TableEntry {
            value: 1.5,
            depth: 5,
            bound: Bound::Lower,
        },
    );
    // A shallower entry still replaces the deeper one
    table.store(
        42,
        TableEntry {
            value: -0.5,
            depth: 1,
            bound: Bound::Upper,
        },
    );

    let entry = table.lookup(42).unwrap();
    assert_eq!(entry.value, -0.5);
    assert_eq!(entry.depth, 1);
}

#[test]
fn test_clear() {
    let mut table = TranspositionTable::new();
    table.store(
        1,
        TableEntry {
            value: 0.0,
            depth: 1,
            bound: Bound::Exact,
        },
    );
    table.clear();
    assert!(table.lookup(1).is_none());
    assert!(table.is_empty());
}
