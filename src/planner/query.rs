// ABOUTME: Heuristic parsing of free-text fitness requests into filter parameters
// ABOUTME: Substring vocabulary scans plus alias rule tables for muscles, difficulty, equipment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Query parsing
//!
//! Turns a free-text workout query plus optional explicit overrides into
//! [`QueryParameters`]. All matching happens against the lowercased query;
//! the vocabularies and alias rules live in [`crate::constants`] as
//! declarative tables.

use crate::constants::{
    DEFAULT_BODY_PART, DIFFICULTY_KEYWORDS, EQUIPMENT_ALIASES, EQUIPMENT_VOCABULARY,
    MUSCLE_ALIASES, MUSCLE_TO_BODY_PART, MUSCLE_VOCABULARY,
};
use crate::models::QueryParameters;

/// Parse a workout query into structured filter parameters
///
/// Explicit `difficulty` passes through verbatim without validation; an
/// explicit non-empty `equipment` list suppresses equipment scanning.
/// Output collections carry set semantics — deduplicated, with no
/// guaranteed order.
#[must_use]
pub fn parse_query(
    query: &str,
    difficulty: Option<&str>,
    equipment: Option<&[String]>,
) -> QueryParameters {
    let query_lower = query.to_lowercase();

    let muscles = extract_muscles(&query_lower);
    let body_parts = map_body_parts(&muscles);
    let difficulty = resolve_difficulty(&query_lower, difficulty);
    let equipment = resolve_equipment(&query_lower, equipment);

    QueryParameters {
        muscles,
        body_parts,
        difficulty,
        equipment,
    }
}

/// Append a value if the collection does not already hold it
fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|existing| existing == value) {
        values.push(value.to_string());
    }
}

/// Scan the lowered query for muscle names, then apply alias expansions
fn extract_muscles(query_lower: &str) -> Vec<String> {
    let mut muscles = Vec::new();

    for &muscle in MUSCLE_VOCABULARY {
        if query_lower.contains(muscle) {
            push_unique(&mut muscles, muscle);
        }
    }

    // Alias rules apply independently and additively
    for &(token, expansion) in MUSCLE_ALIASES {
        if query_lower.contains(token) {
            for &muscle in expansion {
                push_unique(&mut muscles, muscle);
            }
        }
    }

    muscles
}

/// Map extracted muscles to catalog body-part categories
///
/// Muscles missing from the mapping table fall back to the default
/// category rather than being dropped.
fn map_body_parts(muscles: &[String]) -> Vec<String> {
    let mut body_parts = Vec::new();

    for muscle in muscles {
        let category = MUSCLE_TO_BODY_PART
            .iter()
            .find(|(name, _)| *name == muscle.as_str())
            .map_or(DEFAULT_BODY_PART, |(_, category)| *category);
        push_unique(&mut body_parts, category);
    }

    body_parts
}

/// Resolve difficulty from the explicit override or keyword groups
fn resolve_difficulty(query_lower: &str, explicit: Option<&str>) -> Option<String> {
    if let Some(difficulty) = explicit {
        // Caller-supplied difficulty passes through verbatim
        return Some(difficulty.to_string());
    }

    for &(keywords, label) in DIFFICULTY_KEYWORDS {
        if keywords.iter().any(|keyword| query_lower.contains(keyword)) {
            return Some(label.to_string());
        }
    }

    None
}

/// Resolve equipment from the explicit override or vocabulary scanning
fn resolve_equipment(query_lower: &str, explicit: Option<&[String]>) -> Vec<String> {
    if let Some(equipment) = explicit {
        if !equipment.is_empty() {
            let mut deduplicated = Vec::new();
            for item in equipment {
                push_unique(&mut deduplicated, item.as_str());
            }
            return deduplicated;
        }
    }

    let mut equipment = Vec::new();

    for &item in EQUIPMENT_VOCABULARY {
        if query_lower.contains(item) {
            push_unique(&mut equipment, item);
        }
    }

    for &(token, item) in EQUIPMENT_ALIASES {
        if query_lower.contains(token) {
            push_unique(&mut equipment, item);
        }
    }

    equipment
}
