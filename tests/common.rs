// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides catalog record builders, a stub LLM provider, and quiet logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
#![allow(dead_code)]

//! Shared test utilities for `trainer_plan_server`
//!
//! This module provides common fixtures to reduce duplication across
//! integration tests.

use async_trait::async_trait;
use std::sync::Once;
use trainer_plan_server::errors::AppError;
use trainer_plan_server::llm::{
    ChatRequest, ChatResponse, LlmCapabilities, LlmProvider, TokenUsage,
};
use trainer_plan_server::models::ExerciseRecord;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Build a catalog record with the given taxonomy values
pub fn exercise(id: &str, name: &str, body_part: &str, equipment: &str) -> ExerciseRecord {
    ExerciseRecord {
        exercise_id: id.to_string(),
        name: name.to_string(),
        body_parts: vec![body_part.to_string()],
        target_muscles: vec!["pectorals".to_string()],
        secondary_muscles: vec!["triceps".to_string()],
        equipments: vec![equipment.to_string()],
        exercise_type: Some("weight_reps".to_string()),
        image_url: None,
        video_url: None,
    }
}

/// Build a small chest-focused catalog
pub fn chest_catalog(count: usize) -> Vec<ExerciseRecord> {
    (0..count)
        .map(|i| exercise(&format!("c{i}"), &format!("Chest Exercise {i}"), "Chest", "dumbbell"))
        .collect()
}

/// A valid plan JSON selecting the given exercise ids
pub fn plan_json(ids: &[&str]) -> String {
    let exercises: Vec<String> = ids
        .iter()
        .map(|id| {
            format!(
                r#"{{"id": "{id}", "sets": 3, "reps": "10-12", "rest_seconds": 60, "trainer_notes": "Stay controlled."}}"#
            )
        })
        .collect();

    format!(
        r#"{{
            "summary": "A focused session.",
            "workout_focus": "Upper Body Push",
            "estimated_time": "30 minutes",
            "difficulty": "beginner",
            "exercises": [{}],
            "warmup_recommendation": "Arm circles.",
            "cooldown_recommendation": "Chest stretch."
        }}"#,
        exercises.join(",")
    )
}

/// Stub LLM provider returning a canned reply
pub struct StubLlmProvider {
    reply: String,
}

impl StubLlmProvider {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

#[async_trait]
impl LlmProvider for StubLlmProvider {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn display_name(&self) -> &'static str {
        "Stub Provider"
    }

    fn capabilities(&self) -> LlmCapabilities {
        LlmCapabilities::SYSTEM_MESSAGES
    }

    fn default_model(&self) -> &str {
        "stub-model"
    }

    fn available_models(&self) -> &'static [&'static str] {
        &["stub-model"]
    }

    async fn complete(&self, _request: &ChatRequest) -> Result<ChatResponse, AppError> {
        Ok(ChatResponse {
            content: self.reply.clone(),
            model: "stub-model".to_string(),
            usage: Some(TokenUsage {
                prompt_tokens: 100,
                completion_tokens: 50,
                total_tokens: 150,
            }),
            finish_reason: Some("end_turn".to_string()),
        })
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        Ok(true)
    }
}

/// Stub provider whose completion always fails
pub struct FailingLlmProvider;

#[async_trait]
impl LlmProvider for FailingLlmProvider {
    fn name(&self) -> &'static str {
        "failing-stub"
    }

    fn display_name(&self) -> &'static str {
        "Failing Stub Provider"
    }

    fn capabilities(&self) -> LlmCapabilities {
        LlmCapabilities::empty()
    }

    fn default_model(&self) -> &str {
        "stub-model"
    }

    fn available_models(&self) -> &'static [&'static str] {
        &["stub-model"]
    }

    async fn complete(&self, _request: &ChatRequest) -> Result<ChatResponse, AppError> {
        Err(AppError::external_service("Stub", "simulated outage"))
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        Ok(false)
    }
}
