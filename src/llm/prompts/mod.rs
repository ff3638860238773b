// ABOUTME: System prompts for LLM interactions loaded at compile time
// ABOUTME: Provides the personal trainer system prompt for workout plan generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # System Prompts
//!
//! This module provides system prompts for LLM interactions.
//! Prompts are loaded at compile time from markdown files for easy maintenance.

/// Personal trainer system prompt
///
/// Contains instructions for the model including:
/// - Role and communication style
/// - The exact JSON output schema for workout plans
/// - Selection constraints (exactly 3 exercises, candidate ids only,
///   compound movements before isolation)
pub const TRAINER_SYSTEM_PROMPT: &str = include_str!("trainer_system.md");

/// Get the system prompt for workout plan generation
#[must_use]
pub const fn get_trainer_system_prompt() -> &'static str {
    TRAINER_SYSTEM_PROMPT
}
