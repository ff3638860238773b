// ABOUTME: Rule tables, limits, and environment-overridable endpoints
// ABOUTME: Declarative vocabularies for query parsing plus external API defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Constants and Rule Tables
//!
//! Query parsing is driven by the ordered, declarative tables in this module
//! rather than by control flow: each table maps a recognized token to its
//! effect, so the rule set can be tested and extended independently of the
//! parser.

/// Service name constants for logging and health payloads
pub mod service_names {
    /// Canonical service name
    pub const TRAINER_PLAN_SERVER: &str = "trainer-plan-server";
}

/// Muscle names recognized in free-text queries (substring match against the
/// lowercased query)
pub const MUSCLE_VOCABULARY: &[&str] = &[
    "chest",
    "shoulders",
    "biceps",
    "triceps",
    "forearms",
    "lats",
    "back",
    "lower back",
    "traps",
    "abdominals",
    "abs",
    "obliques",
    "core",
    "quadriceps",
    "quads",
    "hamstrings",
    "glutes",
    "calves",
    "adductors",
    "abductors",
    "legs",
];

/// Muscle-group aliases: query token -> muscles added to the parsed set.
/// Rules apply independently and additively; a query may trigger several.
pub const MUSCLE_ALIASES: &[(&str, &[&str])] = &[
    ("arms", &["biceps", "triceps"]),
    (
        "upper body",
        &["chest", "shoulders", "biceps", "triceps", "back"],
    ),
    ("lower body", &["quadriceps", "hamstrings", "glutes", "calves"]),
    ("full body", &["chest", "quadriceps", "back", "shoulders", "abs"]),
    ("total body", &["chest", "quadriceps", "back", "shoulders", "abs"]),
];

/// Muscle -> ExerciseDB body-part category. Muscles not listed here fall
/// back to [`DEFAULT_BODY_PART`].
pub const MUSCLE_TO_BODY_PART: &[(&str, &str)] = &[
    ("chest", "Chest"),
    ("shoulders", "Shoulders"),
    ("biceps", "Upper Arms"),
    ("triceps", "Upper Arms"),
    ("forearms", "Lower Arms"),
    ("lats", "Back"),
    ("back", "Back"),
    ("lower back", "Back"),
    ("traps", "Back"),
    ("abdominals", "Waist"),
    ("abs", "Waist"),
    ("obliques", "Waist"),
    ("core", "Waist"),
    ("quadriceps", "Upper Legs"),
    ("quads", "Upper Legs"),
    ("hamstrings", "Upper Legs"),
    ("glutes", "Upper Legs"),
    ("calves", "Lower Legs"),
    ("adductors", "Upper Legs"),
    ("abductors", "Upper Legs"),
    ("legs", "Upper Legs"),
];

/// Body-part category used for muscles missing from [`MUSCLE_TO_BODY_PART`]
pub const DEFAULT_BODY_PART: &str = "Chest";

/// Difficulty keyword groups: any keyword in the group maps the query to the
/// label. Groups are checked in order; the first matching group wins.
pub const DIFFICULTY_KEYWORDS: &[(&[&str], &str)] = &[
    (&["beginner", "easy", "new", "starting"], "beginner"),
    (&["intermediate", "moderate"], "intermediate"),
    (&["advanced", "expert", "hard", "intense"], "expert"),
];

/// Equipment names recognized in free-text queries (substring match)
pub const EQUIPMENT_VOCABULARY: &[&str] = &[
    "dumbbell",
    "barbell",
    "body weight",
    "cable",
    "machine",
    "kettlebell",
    "band",
    "medicine ball",
    "exercise ball",
];

/// Equipment aliases: query token -> equipment added to the parsed set
pub const EQUIPMENT_ALIASES: &[(&str, &str)] = &[
    ("bodyweight", "body weight"),
    ("no equipment", "body weight"),
    ("home", "body weight"),
    ("dumbbells", "dumbbell"),
    ("resistance band", "band"),
];

/// Candidate-set and catalog limits
pub mod limits {
    /// Maximum records requested from the catalog API per fetch
    pub const CATALOG_PAGE_LIMIT: usize = 200;
    /// Maximum candidate exercises handed to the model
    pub const MAX_CANDIDATES: usize = 30;
    /// Minimum candidate count below which filtering falls back
    pub const MIN_CANDIDATES: usize = 3;
    /// Maximum tokens requested from the model per plan
    pub const PLAN_MAX_TOKENS: u32 = 2048;
    /// Request deadline for external catalog and model calls, in seconds
    pub const EXTERNAL_REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// Environment-overridable external endpoints
pub mod env_config {
    use std::env;

    /// RapidAPI host for the ExerciseDB catalog
    #[must_use]
    pub fn exercisedb_api_host() -> String {
        env::var("EXERCISEDB_API_HOST").unwrap_or_else(|_| {
            "exercise-db-with-videos-and-images-by-ascendapi.p.rapidapi.com".to_string()
        })
    }

    /// Base URL for the ExerciseDB catalog API
    #[must_use]
    pub fn exercisedb_api_base() -> String {
        env::var("EXERCISEDB_API_BASE")
            .unwrap_or_else(|_| format!("https://{}", exercisedb_api_host()))
    }

    /// CDN base for exercise thumbnail images
    #[must_use]
    pub fn exercise_image_cdn() -> String {
        env::var("EXERCISE_IMAGE_CDN")
            .unwrap_or_else(|_| "https://exercisedb.b-cdn.net/exercises-thumbnails".to_string())
    }

    /// CDN base for exercise videos
    #[must_use]
    pub fn exercise_video_cdn() -> String {
        env::var("EXERCISE_VIDEO_CDN")
            .unwrap_or_else(|_| "https://exercisedb.b-cdn.net/exercises-videos".to_string())
    }

    /// Base URL for the Anthropic Messages API
    #[must_use]
    pub fn anthropic_api_base() -> String {
        env::var("ANTHROPIC_API_BASE").unwrap_or_else(|_| "https://api.anthropic.com".to_string())
    }

    /// Comma-separated list of allowed CORS origins for the frontend
    #[must_use]
    pub fn cors_allowed_origins() -> Vec<String> {
        env::var("CORS_ALLOWED_ORIGINS").map_or_else(
            |_| {
                vec![
                    "http://localhost:5173".to_string(),
                    "http://localhost:3000".to_string(),
                    "http://127.0.0.1:5173".to_string(),
                ]
            },
            |origins| {
                origins
                    .split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            },
        )
    }
}
