// ABOUTME: Process-lifetime memoization of the fetched exercise catalog
// ABOUTME: Single-population cache with explicit invalidation for tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! In-memory catalog memoization
//!
//! The catalog is fetched at most once per process lifetime and shared
//! read-mostly across request pipelines. Concurrent first accessors may
//! each issue a redundant fetch before the cache is populated; the last
//! writer wins. Records are immutable after fetch, so the race cannot
//! corrupt state.

use crate::errors::AppError;
use crate::models::ExerciseRecord;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Memoization object for the fetched exercise catalog
#[derive(Default)]
pub struct CatalogCache {
    store: RwLock<Option<Arc<Vec<ExerciseRecord>>>>,
}

impl CatalogCache {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Peek at the cached catalog without fetching
    pub async fn cached(&self) -> Option<Arc<Vec<ExerciseRecord>>> {
        self.store.read().await.clone()
    }

    /// Return the cached catalog, running `fetch` to populate it when empty
    ///
    /// The fetch runs without holding the lock, so concurrent first
    /// accessors may fetch redundantly; whichever finishes last wins.
    ///
    /// # Errors
    ///
    /// Propagates the fetch error when the cache is empty and the fetch fails
    pub async fn get_or_populate<F, Fut>(&self, fetch: F) -> Result<Arc<Vec<ExerciseRecord>>, AppError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<ExerciseRecord>, AppError>>,
    {
        if let Some(records) = self.store.read().await.clone() {
            return Ok(records);
        }

        let records = Arc::new(fetch().await?);
        debug!("Catalog cache populated with {} records", records.len());

        *self.store.write().await = Some(records.clone());

        Ok(records)
    }

    /// Store a catalog directly, replacing any cached value
    ///
    /// Lets tests and tooling populate the cache without an upstream fetch.
    pub async fn prime(&self, records: Vec<ExerciseRecord>) {
        *self.store.write().await = Some(Arc::new(records));
    }

    /// Drop the cached catalog so the next access refetches
    pub async fn invalidate(&self) {
        *self.store.write().await = None;
        debug!("Catalog cache invalidated");
    }
}
