// ABOUTME: Shared utility modules for the trainer plan server
// ABOUTME: Provides pooled HTTP client construction for external API calls
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Shared HTTP client utilities with connection pooling
pub mod http_client;
