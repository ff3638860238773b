// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Handles environment-sourced server configuration and runtime options
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Configuration module for the trainer plan server
//!
//! Configuration is environment-only: there are no configuration files
//! beyond an optional `.env` loaded at startup. External providers own
//! their credentials and read them in their respective `from_env`
//! constructors.

/// Environment and server configuration
pub mod environment;

pub use environment::ServerConfig;
