// ABOUTME: Shared HTTP client utilities with connection pooling and timeout configuration
// ABOUTME: Provides a singleton HTTP client to eliminate redundant client creation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::constants::limits;
use reqwest::{Client, ClientBuilder};
use std::sync::OnceLock;
use std::time::Duration;

/// Global shared HTTP client with default configuration
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Get or create the shared HTTP client with default settings
///
/// This client uses connection pooling and the fixed external-call deadline.
/// Prefer this over creating new clients for better performance.
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        ClientBuilder::new()
            .timeout(Duration::from_secs(limits::EXTERNAL_REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_client_returns_same_instance() {
        let first = shared_client();
        let second = shared_client();
        assert!(std::ptr::eq(first, second));
    }
}
