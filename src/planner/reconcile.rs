// ABOUTME: Merges model-selected exercise ids back against full catalog records
// ABOUTME: Silently drops unknown ids and attaches derived presentation fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Plan reconciliation
//!
//! The model only sees a compact candidate projection; the frontend needs
//! full records. Reconciliation walks the plan's exercises in order, looks
//! each id up in the catalog, and merges record fields with the plan's
//! programming. Ids absent from the catalog are dropped without error —
//! the output may be shorter than the plan.

use crate::models::{ExerciseRecord, ReconciledExercise, WorkoutPlan};
use std::collections::HashMap;
use tracing::warn;

/// Fixed difficulty label: the catalog carries no per-exercise difficulty
const DEFAULT_LEVEL: &str = "intermediate";

/// Search URL template for exercise tutorial lookup
const TUTORIAL_SEARCH_URL: &str = "https://www.youtube.com/results?search_query=";

/// Merge the plan's exercise selections with full catalog records
///
/// Output preserves the plan's exercise order, filtered for dropped ids.
#[must_use]
pub fn reconcile_plan(plan: &WorkoutPlan, catalog: &[ExerciseRecord]) -> Vec<ReconciledExercise> {
    let index: HashMap<&str, &ExerciseRecord> = catalog
        .iter()
        .map(|record| (record.exercise_id.as_str(), record))
        .collect();

    plan.exercises
        .iter()
        .filter_map(|item| {
            let Some(record) = index.get(item.id.as_str()) else {
                warn!("Dropping plan exercise with unknown id: {}", item.id);
                return None;
            };

            let tutorial_query =
                urlencoding::encode(&format!("{} exercise tutorial", record.name)).into_owned();

            Some(ReconciledExercise {
                id: record.exercise_id.clone(),
                exercise_id: record.exercise_id.clone(),
                name: record.name.clone(),
                body_parts: record.body_parts.clone(),
                primary_muscles: record.target_muscles.clone(),
                target_muscles: record.target_muscles.clone(),
                secondary_muscles: record.secondary_muscles.clone(),
                equipments: record.equipments.clone(),
                equipment: record.equipments.join(", "),
                exercise_type: record.exercise_type.clone(),
                image_url: record.image_url.clone(),
                video_url: record.video_url.clone(),
                level: DEFAULT_LEVEL.to_string(),
                sets: item.sets,
                reps: item.reps.clone(),
                rest_seconds: item.rest_seconds,
                trainer_notes: item.trainer_notes.clone(),
                youtube_search_url: format!("{TUTORIAL_SEARCH_URL}{tutorial_query}"),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExercisePlan;

    fn record(id: &str, name: &str) -> ExerciseRecord {
        ExerciseRecord {
            exercise_id: id.to_string(),
            name: name.to_string(),
            body_parts: vec!["Chest".to_string()],
            target_muscles: vec!["pectorals".to_string()],
            secondary_muscles: vec!["triceps".to_string()],
            equipments: vec!["dumbbell".to_string(), "bench".to_string()],
            exercise_type: Some("weight_reps".to_string()),
            image_url: None,
            video_url: None,
        }
    }

    fn plan_item(id: &str) -> ExercisePlan {
        ExercisePlan {
            id: id.to_string(),
            sets: 4,
            reps: "8-10".to_string(),
            rest_seconds: 90,
            trainer_notes: "Control the descent.".to_string(),
        }
    }

    fn plan_with(items: Vec<ExercisePlan>) -> WorkoutPlan {
        WorkoutPlan {
            summary: "s".to_string(),
            workout_focus: "f".to_string(),
            estimated_time: "30 minutes".to_string(),
            difficulty: "beginner".to_string(),
            exercises: items,
            warmup_recommendation: "w".to_string(),
            cooldown_recommendation: "c".to_string(),
        }
    }

    #[test]
    fn test_merges_plan_and_record_fields() {
        let catalog = vec![record("a1", "Dumbbell Press")];
        let plan = plan_with(vec![plan_item("a1")]);

        let result = reconcile_plan(&plan, &catalog);

        assert_eq!(result.len(), 1);
        let merged = &result[0];
        assert_eq!(merged.id, "a1");
        assert_eq!(merged.sets, 4);
        assert_eq!(merged.reps, "8-10");
        assert_eq!(merged.rest_seconds, 90);
        assert_eq!(merged.primary_muscles, vec!["pectorals".to_string()]);
        assert_eq!(merged.equipment, "dumbbell, bench");
        assert_eq!(merged.level, "intermediate");
    }

    #[test]
    fn test_unknown_ids_are_silently_dropped() {
        let catalog = vec![record("a1", "Dumbbell Press"), record("a2", "Cable Fly")];
        let plan = plan_with(vec![plan_item("a2"), plan_item("ghost"), plan_item("a1")]);

        let result = reconcile_plan(&plan, &catalog);

        // Two entries, in plan order
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].id, "a2");
        assert_eq!(result[1].id, "a1");
    }

    #[test]
    fn test_tutorial_url_is_encoded() {
        let catalog = vec![record("a1", "Dumbbell Bench Press")];
        let plan = plan_with(vec![plan_item("a1")]);

        let result = reconcile_plan(&plan, &catalog);

        assert_eq!(
            result[0].youtube_search_url,
            "https://www.youtube.com/results?search_query=Dumbbell%20Bench%20Press%20exercise%20tutorial"
        );
    }

    #[test]
    fn test_empty_plan_yields_empty_output() {
        let catalog = vec![record("a1", "Dumbbell Press")];
        let plan = plan_with(Vec::new());

        assert!(reconcile_plan(&plan, &catalog).is_empty());
    }
}
