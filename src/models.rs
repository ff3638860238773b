// ABOUTME: Core data models for exercises, parsed queries, and workout plans
// ABOUTME: Defines ExerciseRecord, QueryParameters, WorkoutPlan and API payload types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Data Models
//!
//! Wire data structures shared across the planning pipeline. Catalog records
//! and reconciled exercises use the camelCase field names of the upstream
//! ExerciseDB API; the workout plan mirrors the snake_case JSON schema the
//! model is instructed to emit.

use serde::{Deserialize, Serialize};

/// A single exercise record from the ExerciseDB catalog
///
/// Records are immutable once fetched. Collections default to empty so
/// sparse upstream records still deserialize.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseRecord {
    /// Unique exercise identifier assigned by the catalog
    pub exercise_id: String,
    /// Display name of the exercise
    pub name: String,
    /// Coarse body-part categories from the catalog taxonomy (e.g. "Upper Arms")
    #[serde(default)]
    pub body_parts: Vec<String>,
    /// Primary muscles worked
    #[serde(default)]
    pub target_muscles: Vec<String>,
    /// Secondary muscles worked
    #[serde(default)]
    pub secondary_muscles: Vec<String>,
    /// Equipment required
    #[serde(default)]
    pub equipments: Vec<String>,
    /// Exercise classification (e.g. "weight_reps")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_type: Option<String>,
    /// Thumbnail image URL; may arrive relative to the CDN base
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Demonstration video URL; may arrive relative to the CDN base
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

/// Structured filter parameters derived from a free-text workout query
///
/// All collections carry set semantics: deduplicated, order not part of the
/// contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryParameters {
    /// Recognized muscle tokens extracted from the query
    pub muscles: Vec<String>,
    /// Catalog body-part categories mapped from the muscles
    pub body_parts: Vec<String>,
    /// Difficulty label; explicit caller values pass through verbatim
    pub difficulty: Option<String>,
    /// Recognized equipment tokens
    pub equipment: Vec<String>,
}

fn default_sets() -> u32 {
    3
}

fn default_reps() -> String {
    "10-12".to_string()
}

fn default_rest_seconds() -> u32 {
    60
}

/// One exercise entry in a model-generated workout plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExercisePlan {
    /// Exercise id, expected to come from the offered candidate set
    pub id: String,
    /// Number of sets
    #[serde(default = "default_sets")]
    pub sets: u32,
    /// Rep range as text (e.g. "10-12")
    #[serde(default = "default_reps")]
    pub reps: String,
    /// Rest between sets, in seconds
    #[serde(default = "default_rest_seconds")]
    pub rest_seconds: u32,
    /// Coaching tip for this exercise
    #[serde(default)]
    pub trainer_notes: String,
}

/// A complete model-generated workout plan
///
/// Field names match the JSON schema the model is instructed to emit;
/// parsing into this type is what enforces the output contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutPlan {
    /// Short overview of the plan and its benefits
    pub summary: String,
    /// Primary focus area (e.g. "Upper Body Push")
    pub workout_focus: String,
    /// Estimated duration as text (e.g. "45 minutes")
    pub estimated_time: String,
    /// Overall difficulty label
    pub difficulty: String,
    /// Selected exercises in execution order
    pub exercises: Vec<ExercisePlan>,
    /// Suggested warmup
    pub warmup_recommendation: String,
    /// Suggested cooldown
    pub cooldown_recommendation: String,
}

/// A catalog record merged with plan programming and presentation fields
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReconciledExercise {
    /// Exercise id (duplicate of `exercise_id` in the shape the frontend expects)
    pub id: String,
    /// Catalog exercise id
    pub exercise_id: String,
    /// Display name
    pub name: String,
    /// Body-part categories
    pub body_parts: Vec<String>,
    /// Primary muscles worked (alias of the record's target muscles)
    pub primary_muscles: Vec<String>,
    /// Primary muscles as stored on the record
    pub target_muscles: Vec<String>,
    /// Secondary muscles worked
    pub secondary_muscles: Vec<String>,
    /// Equipment list as stored on the record
    pub equipments: Vec<String>,
    /// Equipment joined to a display string
    pub equipment: String,
    /// Exercise classification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise_type: Option<String>,
    /// Thumbnail image URL (absolute)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Demonstration video URL (absolute)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// Difficulty label; the catalog carries no per-exercise difficulty
    pub level: String,
    /// Number of sets from the plan
    pub sets: u32,
    /// Rep range from the plan
    pub reps: String,
    /// Rest between sets from the plan, in seconds
    pub rest_seconds: u32,
    /// Coaching tip from the plan
    pub trainer_notes: String,
    /// Generated tutorial lookup URL
    pub youtube_search_url: String,
}

// ============================================================================
// API Payload Types
// ============================================================================

/// Request body for `POST /api/workout`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WorkoutRequest {
    /// Free-text workout request
    pub query: String,
    /// Explicit difficulty override; passes through unvalidated
    #[serde(default)]
    pub difficulty: Option<String>,
    /// Explicit equipment override; a non-empty list suppresses query scanning
    #[serde(default)]
    pub equipment: Option<Vec<String>>,
}

/// Response body for `POST /api/workout`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutResponse {
    /// The model-generated plan
    pub plan: WorkoutPlan,
    /// Plan exercises reconciled against full catalog records
    pub exercises: Vec<ReconciledExercise>,
}

/// Response body for `GET /api/exercises`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseListResponse {
    /// Number of exercises returned
    pub count: usize,
    /// The full cached catalog
    pub exercises: Vec<ExerciseRecord>,
}

/// Response body for `GET /api/filters`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterOptionsResponse {
    /// Sorted distinct equipment names across the catalog
    pub equipment: Vec<String>,
    /// Sorted distinct body-part categories across the catalog
    #[serde(rename = "bodyParts")]
    pub body_parts: Vec<String>,
    /// Sorted distinct muscle names (target and secondary) across the catalog
    pub muscles: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exercise_record_deserializes_sparse_fields() {
        let record: ExerciseRecord = serde_json::from_str(
            r#"{"exerciseId": "abc123", "name": "Push Up"}"#,
        )
        .unwrap();

        assert_eq!(record.exercise_id, "abc123");
        assert!(record.body_parts.is_empty());
        assert!(record.image_url.is_none());
    }

    #[test]
    fn test_exercise_plan_defaults() {
        let plan: ExercisePlan = serde_json::from_str(r#"{"id": "abc123"}"#).unwrap();

        assert_eq!(plan.sets, 3);
        assert_eq!(plan.reps, "10-12");
        assert_eq!(plan.rest_seconds, 60);
        assert!(plan.trainer_notes.is_empty());
    }

    #[test]
    fn test_workout_plan_requires_schema_fields() {
        // A plan missing required top-level fields must fail to parse
        let result = serde_json::from_str::<WorkoutPlan>(r#"{"summary": "only a summary"}"#);
        assert!(result.is_err());
    }
}
