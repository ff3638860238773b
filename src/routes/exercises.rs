// ABOUTME: Exercise catalog route handlers for listing, lookup, and filter options
// ABOUTME: Serves the cached ExerciseDB catalog and its distinct taxonomy values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Exercise catalog routes
//!
//! All handlers read from the process-lifetime catalog cache; the first
//! request triggers the upstream fetch.

use crate::errors::AppError;
use crate::models::{ExerciseListResponse, ExerciseRecord, FilterOptionsResponse};
use crate::server::ServerResources;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Exercise catalog routes handler
pub struct ExerciseRoutes;

impl ExerciseRoutes {
    /// Create all exercise catalog routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/exercises", get(Self::list_exercises))
            .route("/api/exercises/:exercise_id", get(Self::get_exercise))
            .route("/api/filters", get(Self::get_filters))
            .with_state(resources)
    }

    /// List the full cached catalog
    async fn list_exercises(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let exercises = resources.catalog.fetch().await?;

        let response = ExerciseListResponse {
            count: exercises.len(),
            exercises: exercises.as_ref().clone(),
        };

        Ok(Json(response).into_response())
    }

    /// Look up one exercise by id
    async fn get_exercise(
        State(resources): State<Arc<ServerResources>>,
        Path(exercise_id): Path<String>,
    ) -> Result<Response, AppError> {
        let exercises = resources.catalog.fetch().await?;

        let record = exercises
            .iter()
            .find(|record| record.exercise_id == exercise_id)
            .ok_or_else(|| AppError::not_found("Exercise").with_resource_id(exercise_id))?;

        Ok(Json(record.clone()).into_response())
    }

    /// Return sorted distinct filter options derived from the catalog
    async fn get_filters(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let exercises = resources.catalog.fetch().await?;

        Ok(Json(collect_filter_options(&exercises)).into_response())
    }
}

/// Collect sorted distinct equipment, body parts, and muscles
///
/// Muscles cover both target and secondary muscles across the catalog.
#[must_use]
pub fn collect_filter_options(records: &[ExerciseRecord]) -> FilterOptionsResponse {
    let mut equipment = BTreeSet::new();
    let mut body_parts = BTreeSet::new();
    let mut muscles = BTreeSet::new();

    for record in records {
        equipment.extend(record.equipments.iter().cloned());
        body_parts.extend(record.body_parts.iter().cloned());
        muscles.extend(record.target_muscles.iter().cloned());
        muscles.extend(record.secondary_muscles.iter().cloned());
    }

    FilterOptionsResponse {
        equipment: equipment.into_iter().collect(),
        body_parts: body_parts.into_iter().collect(),
        muscles: muscles.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, equipment: &str, body_part: &str, target: &str, secondary: &str) -> ExerciseRecord {
        ExerciseRecord {
            exercise_id: id.to_string(),
            name: format!("Exercise {id}"),
            body_parts: vec![body_part.to_string()],
            target_muscles: vec![target.to_string()],
            secondary_muscles: vec![secondary.to_string()],
            equipments: vec![equipment.to_string()],
            exercise_type: None,
            image_url: None,
            video_url: None,
        }
    }

    #[test]
    fn test_collect_filter_options_sorted_distinct() {
        let records = vec![
            record("a", "dumbbell", "Chest", "pectorals", "triceps"),
            record("b", "barbell", "Back", "lats", "biceps"),
            record("c", "dumbbell", "Chest", "pectorals", "deltoids"),
        ];

        let options = collect_filter_options(&records);

        assert_eq!(options.equipment, vec!["barbell", "dumbbell"]);
        assert_eq!(options.body_parts, vec!["Back", "Chest"]);
        assert_eq!(
            options.muscles,
            vec!["biceps", "deltoids", "lats", "pectorals", "triceps"]
        );
    }

    #[test]
    fn test_collect_filter_options_empty_catalog() {
        let options = collect_filter_options(&[]);

        assert!(options.equipment.is_empty());
        assert!(options.body_parts.is_empty());
        assert!(options.muscles.is_empty());
    }
}
