use super::*;

#[test]
fn test_defaults() {
    let config = SearchConfig::default();
    assert_eq!(config.schedule, DepthSchedule::PlyBuckets);
    assert!(config.use_iterative_deepening);
    assert_eq!(config.time_budget_ms, None);
    assert_eq!(config.move_ordering, MoveOrderingPolicy::CapturesFirst);
    assert_eq!(config.weights.bishop, 3.5);
    assert_eq!(config.weights.king, 1000.0);
}

#[test]
fn test_ply_bucket_schedule() {
    let schedule = DepthSchedule::PlyBuckets;
    assert_eq!(schedule.depth_for(0), 2);
    assert_eq!(schedule.depth_for(5), 2);
    assert_eq!(schedule.depth_for(6), 3);
    assert_eq!(schedule.depth_for(59), 3);
    assert_eq!(schedule.depth_for(60), 4);
    assert_eq!(schedule.depth_for(89), 4);
    assert_eq!(schedule.depth_for(90), 5);
    assert_eq!(DepthSchedule::Fixed { depth: 7 }.depth_for(90), 7);
}

#[test]
fn test_parse_toml() {
    let toml = r#"
        use_iterative_deepening = false
        time_budget_ms = 250
        move_ordering = "natural"

        [schedule]
        kind = "fixed"
        depth = 4

        [weights]
        bishop = 3.3
        control_weight = 0.2
    "#;

    let config: SearchConfig = toml::from_str(toml).unwrap();
    assert!(!config.use_iterative_deepening);
    assert_eq!(config.time_budget_ms, Some(250));
    assert_eq!(config.move_ordering, MoveOrderingPolicy::Natural);
    assert_eq!(config.schedule, DepthSchedule::Fixed { depth: 4 });
    assert_eq!(config.weights.bishop, 3.3);
    assert_eq!(config.weights.control_weight, 0.2);
    // Unspecified weights keep their defaults
    assert_eq!(config.weights.queen, 9.0);
}

#[test]
fn test_empty_toml_is_default() {
    let config: SearchConfig = toml::from_str("").unwrap();
    assert_eq!(config, SearchConfig::default());
}
