// ABOUTME: Integration tests for free-text query parsing
// ABOUTME: Covers alias expansion, difficulty resolution, and equipment scanning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

mod common;

use trainer_plan_server::planner::parse_query;

fn contains_all(haystack: &[String], needles: &[&str]) -> bool {
    needles
        .iter()
        .all(|needle| haystack.iter().any(|value| value == needle))
}

#[test]
fn test_upper_body_queries_yield_superset() {
    common::init_test_logging();

    let queries = [
        "upper body strength",
        "UPPER BODY blast",
        "give me an Upper Body routine with cables",
    ];

    for query in queries {
        let params = parse_query(query, None, None);
        assert!(
            contains_all(
                &params.muscles,
                &["chest", "shoulders", "biceps", "triceps", "back"]
            ),
            "query {query:?} missing expected muscles: {:?}",
            params.muscles
        );
    }
}

#[test]
fn test_arms_always_adds_biceps_and_triceps() {
    let queries = [
        "arms",
        "big arms and shoulders",
        "arms day at the gym with bands",
    ];

    for query in queries {
        let params = parse_query(query, None, None);
        assert!(contains_all(&params.muscles, &["biceps", "triceps"]));
    }
}

#[test]
fn test_lower_and_full_body_aliases() {
    let lower = parse_query("lower body burner", None, None);
    assert!(contains_all(
        &lower.muscles,
        &["quadriceps", "hamstrings", "glutes", "calves"]
    ));

    let full = parse_query("total body circuit", None, None);
    assert!(contains_all(
        &full.muscles,
        &["chest", "quadriceps", "back", "shoulders", "abs"]
    ));
}

#[test]
fn test_body_parts_deduplicate_across_muscles() {
    // biceps and triceps both map to Upper Arms; chest maps to Chest
    let params = parse_query("chest biceps triceps", None, None);

    let mut body_parts = params.body_parts.clone();
    body_parts.sort();
    assert_eq!(body_parts, vec!["Chest".to_string(), "Upper Arms".to_string()]);
}

#[test]
fn test_explicit_difficulty_not_validated() {
    let params = parse_query("leg day", Some("extreme"), None);
    assert_eq!(params.difficulty.as_deref(), Some("extreme"));
}

#[test]
fn test_difficulty_from_keywords_when_not_explicit() {
    let params = parse_query("I'm new to lifting, chest day", None, None);
    assert_eq!(params.difficulty.as_deref(), Some("beginner"));
}

#[test]
fn test_equipment_explicit_override_wins() {
    let explicit = vec!["cable".to_string(), "cable".to_string()];
    let params = parse_query("dumbbell work", None, Some(&explicit));

    // Verbatim but deduplicated
    assert_eq!(params.equipment, vec!["cable".to_string()]);
}

#[test]
fn test_equipment_alias_rules() {
    let params = parse_query("no equipment session at home", None, None);
    assert_eq!(params.equipment, vec!["body weight".to_string()]);

    let params = parse_query("resistance band shoulder work", None, None);
    assert!(params.equipment.iter().any(|e| e == "band"));
}

#[test]
fn test_beginner_chest_dumbbell_scenario() {
    let params = parse_query("beginner chest workout with dumbbells", None, None);

    assert_eq!(params.difficulty.as_deref(), Some("beginner"));
    assert!(params.muscles.iter().any(|m| m == "chest"));
    assert_eq!(params.body_parts, vec!["Chest".to_string()]);
    assert_eq!(params.equipment, vec!["dumbbell".to_string()]);
}

#[test]
fn test_empty_query_yields_empty_parameters() {
    let params = parse_query("", None, None);

    assert!(params.muscles.is_empty());
    assert!(params.body_parts.is_empty());
    assert!(params.equipment.is_empty());
    assert_eq!(params.difficulty, None);
}
