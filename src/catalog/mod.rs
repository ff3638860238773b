// ABOUTME: ExerciseDB catalog integration with a process-lifetime cache
// ABOUTME: Fetches, normalizes, and memoizes the bounded exercise catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Exercise Catalog
//!
//! This module owns everything about the upstream exercise catalog: the
//! ExerciseDB API client, media-URL normalization, and the memoization
//! object that keeps the fetched list for the process lifetime.

mod cache;
mod exercisedb;

pub use cache::CatalogCache;
pub use exercisedb::{parse_catalog_response, ExerciseDbConfig, ExerciseDbProvider};

use crate::constants::limits;
use crate::errors::AppResult;
use crate::models::ExerciseRecord;
use std::sync::Arc;

/// Catalog provider and cache bundled for injection into the pipeline
pub struct CatalogService {
    provider: ExerciseDbProvider,
    cache: CatalogCache,
}

impl CatalogService {
    /// Create a new catalog service around the given provider
    #[must_use]
    pub fn new(provider: ExerciseDbProvider) -> Self {
        Self {
            provider,
            cache: CatalogCache::new(),
        }
    }

    /// Create a catalog service from environment configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the RapidAPI key is not set
    pub fn from_env() -> AppResult<Self> {
        Ok(Self::new(ExerciseDbProvider::from_env()?))
    }

    /// Return the cached catalog, fetching it on first access
    ///
    /// # Errors
    ///
    /// Returns an external-service error if the upstream fetch fails
    pub async fn fetch(&self) -> AppResult<Arc<Vec<ExerciseRecord>>> {
        self.cache
            .get_or_populate(|| self.provider.fetch_page(limits::CATALOG_PAGE_LIMIT))
            .await
    }

    /// Store a catalog directly, bypassing the upstream fetch
    pub async fn prime(&self, records: Vec<ExerciseRecord>) {
        self.cache.prime(records).await;
    }

    /// Drop the cached catalog so the next access refetches
    pub async fn invalidate(&self) {
        self.cache.invalidate().await;
    }
}
