// ABOUTME: Server resources and axum router assembly for the trainer plan server
// ABOUTME: Bundles catalog, LLM provider, and config; wires routes and HTTP middleware
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Server assembly
//!
//! [`ServerResources`] owns everything the handlers share: the catalog
//! service (provider + cache), the LLM provider, and the configuration.
//! One instance is created at startup and Arc-shared into every route.

use crate::catalog::CatalogService;
use crate::config::ServerConfig;
use crate::errors::AppResult;
use crate::llm::{AnthropicProvider, LlmProvider};
use crate::routes::{ExerciseRoutes, HealthRoutes, WorkoutRoutes};
use axum::http::{HeaderName, HeaderValue, Method};
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Overall deadline for one request, covering both external calls
const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Shared resources for all request handlers
pub struct ServerResources {
    /// Exercise catalog provider and cache
    pub catalog: Arc<CatalogService>,
    /// LLM provider used for plan generation
    pub llm: Arc<dyn LlmProvider>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Create server resources with proper Arc sharing
    #[must_use]
    pub fn new(
        catalog: CatalogService,
        llm: Arc<dyn LlmProvider>,
        config: Arc<ServerConfig>,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            llm,
            config,
        }
    }

    /// Create server resources from environment configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if either external credential is missing
    pub fn from_env(config: Arc<ServerConfig>) -> AppResult<Self> {
        let catalog = CatalogService::from_env()?;
        let llm: Arc<dyn LlmProvider> = Arc::new(AnthropicProvider::from_env()?);

        Ok(Self::new(catalog, llm, config))
    }
}

/// Assemble the full application router with middleware layers
pub fn router(resources: Arc<ServerResources>) -> Router {
    let cors = cors_layer(&resources.config);

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(ExerciseRoutes::routes(resources.clone()))
        .merge(WorkoutRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(REQUEST_TIMEOUT_SECS)))
        .layer(cors)
}

/// Build the CORS layer from the configured frontend origins
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    let allow_origin = if origins.is_empty() {
        // Fallback to any if parsing failed
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}

/// Bind the listener and serve the application until shutdown
///
/// # Errors
///
/// Returns an error if binding or serving fails
pub async fn serve(resources: Arc<ServerResources>) -> anyhow::Result<()> {
    let addr = format!("0.0.0.0:{}", resources.config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Trainer plan server listening on {}", addr);

    axum::serve(listener, router(resources)).await?;

    Ok(())
}
