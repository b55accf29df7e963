use lazy_sssp::data_structures::PriorityFrontier;
use ordered_float::OrderedFloat;

#[test]
fn test_frontier_extracts_in_distance_order() {
    let mut frontier = PriorityFrontier::new();
    frontier.insert(7u32, "C");
    frontier.insert(2, "A");
    frontier.insert(5, "B");

    assert_eq!(frontier.peek_min(), Some((2, &"A")));
    assert_eq!(frontier.extract_min(), Some((2, "A")));
    assert_eq!(frontier.extract_min(), Some((5, "B")));
    assert_eq!(frontier.extract_min(), Some((7, "C")));
    assert_eq!(frontier.extract_min(), None);
    assert!(frontier.is_empty());
}

#[test]
fn test_frontier_keeps_stale_entries() {
    let mut frontier = PriorityFrontier::new();
    frontier.insert(OrderedFloat(10.0), 1usize);
    // A better distance for the same vertex is a new entry
    frontier.insert(OrderedFloat(3.0), 1usize);

    assert_eq!(frontier.len(), 2);
    assert_eq!(frontier.extract_min(), Some((OrderedFloat(3.0), 1)));
    assert_eq!(frontier.extract_min(), Some((OrderedFloat(10.0), 1)));
}

#[test]
fn test_frontier_equal_distances_by_vertex() {
    let mut frontier = PriorityFrontier::new();
    frontier.insert(4u32, "D");
    frontier.insert(4, "B");
    frontier.insert(4, "C");

    let order: Vec<_> = std::iter::from_fn(|| frontier.extract_min())
        .map(|(_, v)| v)
        .collect();
    assert_eq!(order, vec!["B", "C", "D"]);
}

#[test]
fn test_frontier_high_water_and_clear() {
    let mut frontier = PriorityFrontier::new();
    for i in 0..5u32 {
        frontier.insert(i, i);
    }
    frontier.extract_min();
    frontier.extract_min();
    frontier.insert(9, 9);

    assert_eq!(frontier.len(), 4);
    assert_eq!(frontier.high_water(), 5);

    frontier.clear();
    assert!(frontier.is_empty());
    assert_eq!(frontier.high_water(), 5);
}
