// ABOUTME: ExerciseDB API integration and exercise data fetching
// ABOUTME: Handles RapidAPI authentication, response-shape leniency, and CDN URL normalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::constants::env_config;
use crate::errors::{AppError, AppResult};
use crate::models::ExerciseRecord;
use crate::utils::http_client::shared_client;
use reqwest::Client;
use std::sync::OnceLock;
use tracing::{debug, error, instrument, warn};
use url::Url;

/// Environment variable for the RapidAPI key
const RAPIDAPI_KEY_ENV: &str = "RAPIDAPI_KEY";

/// Configuration for ExerciseDB API integration
#[derive(Debug, Clone)]
pub struct ExerciseDbConfig {
    /// API base URL
    pub base_url: String,
    /// RapidAPI host header value
    pub api_host: String,
    /// CDN base for thumbnail images
    pub image_cdn: String,
    /// CDN base for demonstration videos
    pub video_cdn: String,
}

impl Default for ExerciseDbConfig {
    fn default() -> Self {
        Self {
            base_url: env_config::exercisedb_api_base(),
            api_host: env_config::exercisedb_api_host(),
            image_cdn: env_config::exercise_image_cdn(),
            video_cdn: env_config::exercise_video_cdn(),
        }
    }
}

/// Global ExerciseDB configuration singleton
static EXERCISEDB_CONFIG: OnceLock<ExerciseDbConfig> = OnceLock::new();

impl ExerciseDbConfig {
    /// Get the global ExerciseDB configuration
    pub fn global() -> &'static Self {
        EXERCISEDB_CONFIG.get_or_init(Self::default)
    }
}

/// ExerciseDB catalog API client
pub struct ExerciseDbProvider {
    client: Client,
    config: &'static ExerciseDbConfig,
    api_key: String,
}

impl ExerciseDbProvider {
    /// Create a provider with the given RapidAPI key
    #[must_use]
    pub fn new(api_key: String) -> Self {
        Self {
            client: shared_client().clone(),
            config: ExerciseDbConfig::global(),
            api_key,
        }
    }

    /// Create a provider from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `RAPIDAPI_KEY` is not set
    pub fn from_env() -> AppResult<Self> {
        let api_key = std::env::var(RAPIDAPI_KEY_ENV).map_err(|_| {
            AppError::config(format!(
                "Missing {RAPIDAPI_KEY_ENV} environment variable. Please set it in the .env file."
            ))
        })?;

        Ok(Self::new(api_key))
    }

    /// Fetch one page of exercises from the catalog API
    ///
    /// Media URLs on the returned records are normalized to absolute form.
    ///
    /// # Errors
    ///
    /// Returns an external-service error if the request fails or the API
    /// responds with a non-success status
    #[instrument(skip(self))]
    pub async fn fetch_page(&self, limit: usize) -> AppResult<Vec<ExerciseRecord>> {
        debug!("Fetching exercise catalog from ExerciseDB (limit {limit})");

        let response = self
            .client
            .get(format!("{}/api/v1/exercises", self.config.base_url))
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", &self.config.api_host)
            .query(&[("limit", limit)])
            .send()
            .await
            .map_err(|e| {
                error!("Failed to reach ExerciseDB API: {}", e);
                AppError::external_service("ExerciseDB", format!("Failed to connect: {e}"))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read ExerciseDB response: {}", e);
            AppError::external_service("ExerciseDB", format!("Failed to read response: {e}"))
        })?;

        if !status.is_success() {
            error!("ExerciseDB API error: {} - {}", status, body);
            return Err(AppError::external_service(
                "ExerciseDB",
                format!("API error ({status})"),
            ));
        }

        let value: serde_json::Value = serde_json::from_str(&body).map_err(|e| {
            error!("ExerciseDB returned non-JSON body: {}", e);
            AppError::external_service("ExerciseDB", format!("Failed to parse response: {e}"))
        })?;

        let mut records = parse_catalog_response(value);
        for record in &mut records {
            self.normalize_media_urls(record);
        }

        debug!("Fetched {} exercises from ExerciseDB", records.len());
        Ok(records)
    }

    /// Prefix relative media URLs with the matching CDN base
    ///
    /// URLs that already carry a scheme are left untouched.
    pub fn normalize_media_urls(&self, record: &mut ExerciseRecord) {
        if let Some(image_url) = &record.image_url {
            if is_relative(image_url) {
                record.image_url = Some(format!("{}/{}", self.config.image_cdn, image_url));
            }
        }
        if let Some(video_url) = &record.video_url {
            if is_relative(video_url) {
                record.video_url = Some(format!("{}/{}", self.config.video_cdn, video_url));
            }
        }
    }
}

/// True when the URL carries no scheme and needs a CDN prefix
fn is_relative(candidate: &str) -> bool {
    Url::parse(candidate).is_err()
}

/// Extract the exercise list from either supported response shape
///
/// The catalog API returns either a bare array or an object with a `data`
/// field. Any other shape yields an empty list rather than an error;
/// individual malformed records are skipped.
#[must_use]
pub fn parse_catalog_response(value: serde_json::Value) -> Vec<ExerciseRecord> {
    let items = match value {
        serde_json::Value::Array(items) => items,
        serde_json::Value::Object(mut map) => match map.remove("data") {
            Some(serde_json::Value::Array(items)) => items,
            _ => {
                warn!("ExerciseDB response object carried no data array");
                return Vec::new();
            }
        },
        _ => {
            warn!("Unrecognized ExerciseDB response shape");
            return Vec::new();
        }
    };

    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<ExerciseRecord>(item) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Skipping malformed exercise record: {}", e);
                None
            }
        })
        .collect()
}
