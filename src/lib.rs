// ABOUTME: Main library entry point for the trainer plan server
// ABOUTME: Aggregates ExerciseDB catalog data and LLM selection into workout plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Trainer Plan Server
//!
//! A request-response backend that turns a free-text fitness request into a
//! structured workout plan. The pipeline fetches a bounded exercise catalog
//! from ExerciseDB, parses the user's query into filter parameters, narrows
//! the catalog to a small candidate set, asks a language model to select and
//! program three exercises, and reconciles the model's picks back against
//! full catalog records.
//!
//! ## Architecture
//!
//! - **catalog**: ExerciseDB API client and process-lifetime catalog cache
//! - **planner**: query parsing, candidate filtering, plan request, and
//!   reconciliation (the core pipeline)
//! - **llm**: LLM provider abstraction and the Anthropic implementation
//! - **routes**: axum HTTP handlers grouped by domain
//! - **models**: wire data structures shared across the pipeline
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use trainer_plan_server::config::environment::ServerConfig;
//! use trainer_plan_server::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env();
//!     println!("Trainer plan server configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// ExerciseDB catalog client and process-lifetime cache
pub mod catalog;

/// Configuration management from environment variables
pub mod config;

/// Rule tables, limits, and environment-overridable endpoints
pub mod constants;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// LLM provider abstraction for workout plan generation
pub mod llm;

/// Production logging and structured output
pub mod logging;

/// Common data models for exercises and workout plans
pub mod models;

/// Workout planning pipeline: parse, filter, request, reconcile
pub mod planner;

/// HTTP route handlers grouped by domain
pub mod routes;

/// Server resources and router assembly
pub mod server;

/// Shared utilities (HTTP client pooling)
pub mod utils;
