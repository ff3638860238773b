// ABOUTME: Rule-based narrowing of the exercise catalog to a bounded candidate set
// ABOUTME: Body-part and equipment filters with threshold and sparse-result fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Candidate filtering
//!
//! Narrows the catalog against parsed query parameters. The filter is
//! rule-based, not ranked: no scoring, ties broken by original catalog
//! order. Two fallback policies keep the candidate set usable:
//!
//! - the equipment subset is applied only when it keeps at least
//!   [`limits::MIN_CANDIDATES`] records;
//! - a result below that threshold discards all filtering and takes the
//!   first [`limits::MAX_CANDIDATES`] catalog records unfiltered.

use crate::constants::limits;
use crate::models::{ExerciseRecord, QueryParameters};

/// True when any value in `record_values` case-insensitively matches any
/// value in `wanted`
fn any_overlap(record_values: &[String], wanted: &[String]) -> bool {
    wanted.iter().any(|want| {
        record_values
            .iter()
            .any(|have| have.eq_ignore_ascii_case(want))
    })
}

/// Filter the catalog down to a bounded candidate set
///
/// Steps apply in order and are skipped when their parameter set is empty.
/// Output length is at most [`limits::MAX_CANDIDATES`].
#[must_use]
pub fn filter_exercises(
    catalog: &[ExerciseRecord],
    params: &QueryParameters,
) -> Vec<ExerciseRecord> {
    let mut filtered: Vec<ExerciseRecord> = catalog.to_vec();

    if !params.body_parts.is_empty() {
        filtered.retain(|record| any_overlap(&record.body_parts, &params.body_parts));
    }

    if !params.equipment.is_empty() {
        let equipment_filtered: Vec<ExerciseRecord> = filtered
            .iter()
            .filter(|record| any_overlap(&record.equipments, &params.equipment))
            .cloned()
            .collect();

        // Equipment filtering must never reduce below the usability threshold
        if equipment_filtered.len() >= limits::MIN_CANDIDATES {
            filtered = equipment_filtered;
        }
    }

    // Sparse results: sacrifice relevance for availability
    if filtered.len() < limits::MIN_CANDIDATES {
        filtered = catalog.iter().take(limits::MAX_CANDIDATES).cloned().collect();
    }

    filtered.truncate(limits::MAX_CANDIDATES);
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, body_part: &str, equipment: &str) -> ExerciseRecord {
        ExerciseRecord {
            exercise_id: id.to_string(),
            name: format!("Exercise {id}"),
            body_parts: vec![body_part.to_string()],
            target_muscles: Vec::new(),
            secondary_muscles: Vec::new(),
            equipments: vec![equipment.to_string()],
            exercise_type: None,
            image_url: None,
            video_url: None,
        }
    }

    fn chest_catalog(count: usize) -> Vec<ExerciseRecord> {
        (0..count)
            .map(|i| record(&format!("c{i}"), "Chest", "dumbbell"))
            .collect()
    }

    fn params(body_parts: &[&str], equipment: &[&str]) -> QueryParameters {
        QueryParameters {
            muscles: Vec::new(),
            body_parts: body_parts.iter().map(|s| (*s).to_string()).collect(),
            difficulty: None,
            equipment: equipment.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    #[test]
    fn test_body_part_filter_is_case_insensitive() {
        let catalog = vec![
            record("a", "Chest", "dumbbell"),
            record("b", "Upper Legs", "barbell"),
            record("c", "CHEST", "cable"),
            record("d", "Chest", "band"),
        ];

        let result = filter_exercises(&catalog, &params(&["chest"], &[]));

        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|r| r.exercise_id != "b"));
    }

    #[test]
    fn test_equipment_filter_applies_at_threshold() {
        let mut catalog = chest_catalog(4);
        catalog.push(record("k1", "Chest", "kettlebell"));
        catalog.push(record("k2", "Chest", "kettlebell"));
        catalog.push(record("k3", "Chest", "kettlebell"));

        let result = filter_exercises(&catalog, &params(&["Chest"], &["kettlebell"]));

        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|r| r.equipments[0] == "kettlebell"));
    }

    #[test]
    fn test_equipment_filter_skipped_below_threshold() {
        let mut catalog = chest_catalog(5);
        catalog.push(record("k1", "Chest", "kettlebell"));
        catalog.push(record("k2", "Chest", "kettlebell"));

        // Only 2 kettlebell matches: keep the pre-equipment-filter set
        let result = filter_exercises(&catalog, &params(&["Chest"], &["kettlebell"]));

        assert_eq!(result.len(), 7);
    }

    #[test]
    fn test_unmatched_equipment_never_removes_records() {
        let catalog = chest_catalog(6);

        let result = filter_exercises(&catalog, &params(&["Chest"], &["medicine ball"]));

        assert_eq!(result.len(), 6);
    }

    #[test]
    fn test_sparse_result_falls_back_to_unfiltered_prefix() {
        let mut catalog = vec![
            record("x1", "Back", "barbell"),
            record("x2", "Upper Legs", "machine"),
        ];
        catalog.extend(chest_catalog(2));

        // Body-part filter keeps only 2 chest records, below the threshold
        let result = filter_exercises(&catalog, &params(&["Chest"], &[]));

        // Fallback: first 30 of the original catalog, order preserved
        assert_eq!(result.len(), 4);
        assert_eq!(result[0].exercise_id, "x1");
        assert_eq!(result[1].exercise_id, "x2");
    }

    #[test]
    fn test_truncates_to_thirty() {
        let catalog = chest_catalog(50);

        let result = filter_exercises(&catalog, &params(&["Chest"], &[]));

        assert_eq!(result.len(), 30);
        // Stable: the first 30 in catalog order
        assert_eq!(result[0].exercise_id, "c0");
        assert_eq!(result[29].exercise_id, "c29");
    }

    #[test]
    fn test_empty_params_returns_catalog_prefix() {
        let catalog = chest_catalog(10);

        let result = filter_exercises(&catalog, &params(&[], &[]));

        assert_eq!(result.len(), 10);
    }

    #[test]
    fn test_empty_catalog_yields_empty_set() {
        let result = filter_exercises(&[], &params(&["Chest"], &["dumbbell"]));
        assert!(result.is_empty());
    }
}
