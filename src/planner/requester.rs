// ABOUTME: Builds the plan-generation prompt and parses the model's JSON response
// ABOUTME: Projects candidates into the prompt, strips code fences, enforces the plan schema
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Plan requesting
//!
//! Embeds a compact projection of the candidate set and the user's query
//! into a fixed instructional prompt, invokes the model, and parses the
//! returned text into a [`WorkoutPlan`]. Model output may arrive wrapped
//! in a fenced code block; the fence is stripped before parsing.

use crate::constants::limits;
use crate::errors::{AppError, AppResult};
use crate::llm::{get_trainer_system_prompt, ChatMessage, ChatRequest, LlmProvider};
use crate::models::{ExerciseRecord, WorkoutPlan};
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;
use tracing::{debug, instrument};

/// Compact per-candidate projection embedded in the prompt
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CandidateProjection<'a> {
    id: &'a str,
    name: &'a str,
    equipment: &'a [String],
    body_parts: &'a [String],
    target_muscles: &'a [String],
    secondary_muscles: &'a [String],
    exercise_type: Option<&'a str>,
}

impl<'a> From<&'a ExerciseRecord> for CandidateProjection<'a> {
    fn from(record: &'a ExerciseRecord) -> Self {
        Self {
            id: &record.exercise_id,
            name: &record.name,
            equipment: &record.equipments,
            body_parts: &record.body_parts,
            target_muscles: &record.target_muscles,
            secondary_muscles: &record.secondary_muscles,
            exercise_type: record.exercise_type.as_deref(),
        }
    }
}

/// Build the user prompt embedding the query and the candidate projection
fn build_user_prompt(query: &str, candidates: &[ExerciseRecord]) -> String {
    let projection: Vec<CandidateProjection<'_>> =
        candidates.iter().map(CandidateProjection::from).collect();
    let context = serde_json::to_string_pretty(&projection)
        .unwrap_or_else(|_| "[]".to_string());

    format!(
        "User's workout request: \"{query}\"\n\n\
         Available exercises (choose from these ONLY):\n\
         {context}\n\n\
         Create a personalized workout plan based on the user's request. Return ONLY valid JSON."
    )
}

/// Compiled-once fence pattern; matches with or without a language tag
fn fence_regex() -> Option<&'static Regex> {
    static FENCE: OnceLock<Option<Regex>> = OnceLock::new();
    FENCE
        .get_or_init(|| Regex::new(r"```(?:json)?\s*([\s\S]*?)```").ok())
        .as_ref()
}

/// Strip an optional triple-backtick fence (with or without a language tag)
/// from model output
#[must_use]
pub fn extract_json_payload(content: &str) -> &str {
    if content.contains("```") {
        if let Some(captures) = fence_regex().and_then(|fence| fence.captures(content)) {
            if let Some(inner) = captures.get(1) {
                return inner.as_str().trim();
            }
        }
    }

    content
}

/// Parse model output text into a workout plan, enforcing the schema
///
/// # Errors
///
/// Returns a plan-parse error if the text is not valid JSON for the plan
/// schema after fence stripping
pub fn parse_plan(content: &str) -> AppResult<WorkoutPlan> {
    let payload = extract_json_payload(content);

    serde_json::from_str(payload)
        .map_err(|e| AppError::plan_parse(format!("Failed to parse AI response: {e}")))
}

/// Request a workout plan for the query from the given candidate set
///
/// # Errors
///
/// Returns an external-service error if the model call fails, or a
/// plan-parse error if its output is not a valid plan
#[instrument(skip(llm, candidates), fields(candidates = candidates.len()))]
pub async fn request_plan(
    llm: &dyn LlmProvider,
    query: &str,
    candidates: &[ExerciseRecord],
) -> AppResult<WorkoutPlan> {
    debug!("Requesting workout plan from {}", llm.display_name());

    let request = ChatRequest::new(vec![
        ChatMessage::system(get_trainer_system_prompt()),
        ChatMessage::user(build_user_prompt(query, candidates)),
    ])
    .with_max_tokens(limits::PLAN_MAX_TOKENS);

    let response = llm.complete(&request).await?;

    parse_plan(&response.content)
}
