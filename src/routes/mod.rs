// ABOUTME: Route module organization for the trainer plan server HTTP endpoints
// ABOUTME: Provides route definitions organized by domain with thin handler functions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Route module for the trainer plan server
//!
//! This module organizes all HTTP routes by domain. Each domain module
//! contains only route definitions and thin handler functions that delegate
//! to the catalog and planner layers.

/// Exercise catalog routes (listing, lookup, filter options)
pub mod exercises;
/// Health check and service status routes
pub mod health;
/// Workout plan generation routes
pub mod workout;

/// Exercise catalog route handlers
pub use exercises::ExerciseRoutes;
/// Health check route handlers
pub use health::HealthRoutes;
/// Workout route handlers
pub use workout::WorkoutRoutes;
