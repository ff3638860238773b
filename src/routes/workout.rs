// ABOUTME: Workout plan generation route running the full planning pipeline
// ABOUTME: Parses the query, filters candidates, requests a plan, and reconciles the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Workout plan generation route
//!
//! `POST /api/workout` runs the whole pipeline for one request. The query
//! handed to the parser and the model is the original query enhanced with
//! any explicit difficulty and equipment, so the model sees the same
//! constraints the filters applied.

use crate::errors::AppError;
use crate::models::{WorkoutRequest, WorkoutResponse};
use crate::planner::{filter_exercises, parse_query, reconcile_plan, request_plan};
use crate::server::ServerResources;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

/// Workout routes handler
pub struct WorkoutRoutes;

impl WorkoutRoutes {
    /// Create all workout routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/workout", post(Self::generate_workout))
            .with_state(resources)
    }

    /// Generate a personalized workout plan
    async fn generate_workout(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<WorkoutRequest>,
    ) -> Result<Response, AppError> {
        let request_id = Uuid::new_v4();

        Self::run_pipeline(&resources, &request, request_id)
            .await
            .map(|response| Json(response).into_response())
            .map_err(|e| e.with_request_id(request_id.to_string()))
    }

    /// Run the planning pipeline for one request
    #[instrument(skip(resources, request), fields(request_id = %request_id))]
    async fn run_pipeline(
        resources: &ServerResources,
        request: &WorkoutRequest,
        request_id: Uuid,
    ) -> Result<WorkoutResponse, AppError> {
        let catalog = resources.catalog.fetch().await?;

        let enhanced_query = build_enhanced_query(request);
        let params = parse_query(
            &enhanced_query,
            request.difficulty.as_deref(),
            request.equipment.as_deref(),
        );

        let candidates = filter_exercises(&catalog, &params);
        if candidates.is_empty() {
            return Err(AppError::no_candidates(
                "No exercises found matching your criteria. Try a different query.",
            ));
        }

        info!(
            muscles = params.muscles.len(),
            candidates = candidates.len(),
            "Offering candidate set to the model"
        );

        let plan = request_plan(resources.llm.as_ref(), &enhanced_query, &candidates).await?;
        let exercises = reconcile_plan(&plan, &catalog);

        Ok(WorkoutResponse { plan, exercises })
    }
}

/// Append explicit difficulty and equipment to the free-text query
///
/// The parser and the model both see this enhanced form, so explicit
/// overrides influence keyword scanning as well as selection.
#[must_use]
pub fn build_enhanced_query(request: &WorkoutRequest) -> String {
    let mut enhanced = request.query.clone();

    if let Some(difficulty) = &request.difficulty {
        enhanced.push(' ');
        enhanced.push_str(difficulty);
    }

    if let Some(equipment) = &request.equipment {
        if !equipment.is_empty() {
            enhanced.push_str(" with ");
            enhanced.push_str(&equipment.join(", "));
        }
    }

    enhanced
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enhanced_query_plain() {
        let request = WorkoutRequest {
            query: "chest workout".to_string(),
            difficulty: None,
            equipment: None,
        };

        assert_eq!(build_enhanced_query(&request), "chest workout");
    }

    #[test]
    fn test_enhanced_query_with_overrides() {
        let request = WorkoutRequest {
            query: "chest workout".to_string(),
            difficulty: Some("beginner".to_string()),
            equipment: Some(vec!["dumbbell".to_string(), "band".to_string()]),
        };

        assert_eq!(
            build_enhanced_query(&request),
            "chest workout beginner with dumbbell, band"
        );
    }

    #[test]
    fn test_enhanced_query_ignores_empty_equipment() {
        let request = WorkoutRequest {
            query: "chest workout".to_string(),
            difficulty: None,
            equipment: Some(Vec::new()),
        };

        assert_eq!(build_enhanced_query(&request), "chest workout");
    }
}
