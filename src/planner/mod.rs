// ABOUTME: Workout planning pipeline from free-text query to reconciled plan
// ABOUTME: Parses queries, filters candidates, requests a plan, and reconciles model output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Workout Planner
//!
//! The core pipeline: a free-text fitness request is parsed into structured
//! filter parameters, the catalog is narrowed to a bounded candidate set,
//! the candidates are offered to the model for selection, and the model's
//! picks are reconciled back against full catalog records.
//!
//! Control flow: [`query::parse_query`] → [`filter::filter_exercises`] →
//! [`requester::request_plan`] → [`reconcile::reconcile_plan`].

pub mod filter;
pub mod query;
pub mod reconcile;
pub mod requester;

pub use filter::filter_exercises;
pub use query::parse_query;
pub use reconcile::reconcile_plan;
pub use requester::request_plan;
