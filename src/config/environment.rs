// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, HTTP port, CORS origins, and runtime configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Server configuration loaded from environment variables
//!
//! Credentials for the catalog and model APIs are owned by their providers
//! (`catalog::ExerciseDbProvider::from_env`, `llm::AnthropicProvider::from_env`);
//! this module covers the server-level settings.

use crate::constants::env_config;
use serde::{Deserialize, Serialize};
use std::env;
use tracing::{info, warn};

/// Default HTTP port for the API server
const DEFAULT_HTTP_PORT: u16 = 8000;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Deployment environment (development, staging, production)
    pub environment: String,
    /// Allowed CORS origins for the frontend
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Loads a `.env` file first when one exists, matching local development
    /// workflows. Missing variables fall back to defaults; this function
    /// does not fail.
    #[must_use]
    pub fn from_env() -> Self {
        info!("Loading configuration from environment variables");

        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {}", e);
        }

        let http_port = env::var("HTTP_PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(DEFAULT_HTTP_PORT);

        Self {
            http_port,
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            cors_origins: env_config::cors_allowed_origins(),
        }
    }

    /// Human-readable configuration summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Trainer Plan Server Configuration:\n\
             - HTTP Port: {}\n\
             - Environment: {}\n\
             - CORS Origins: {}",
            self.http_port,
            self.environment,
            self.cors_origins.join(", "),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_mentions_port() {
        let config = ServerConfig {
            http_port: 9000,
            environment: "test".into(),
            cors_origins: vec!["http://localhost:5173".into()],
        };

        let summary = config.summary();
        assert!(summary.contains("9000"));
        assert!(summary.contains("http://localhost:5173"));
    }
}
