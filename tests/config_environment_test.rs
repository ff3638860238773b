// ABOUTME: Integration tests for environment-sourced server configuration
// ABOUTME: Covers port defaults, overrides, and CORS origin parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

mod common;

use serial_test::serial;
use trainer_plan_server::config::ServerConfig;
use trainer_plan_server::constants::env_config;

#[test]
#[serial]
fn test_default_port_when_unset() {
    common::init_test_logging();
    std::env::remove_var("HTTP_PORT");

    let config = ServerConfig::from_env();
    assert_eq!(config.http_port, 8000);
}

#[test]
#[serial]
fn test_port_override_from_env() {
    std::env::set_var("HTTP_PORT", "9100");

    let config = ServerConfig::from_env();
    assert_eq!(config.http_port, 9100);

    std::env::remove_var("HTTP_PORT");
}

#[test]
#[serial]
fn test_invalid_port_falls_back_to_default() {
    std::env::set_var("HTTP_PORT", "not-a-port");

    let config = ServerConfig::from_env();
    assert_eq!(config.http_port, 8000);

    std::env::remove_var("HTTP_PORT");
}

#[test]
#[serial]
fn test_cors_origins_default_to_frontend_dev_hosts() {
    std::env::remove_var("CORS_ALLOWED_ORIGINS");

    let origins = env_config::cors_allowed_origins();
    assert_eq!(
        origins,
        vec![
            "http://localhost:5173".to_string(),
            "http://localhost:3000".to_string(),
            "http://127.0.0.1:5173".to_string(),
        ]
    );
}

#[test]
#[serial]
fn test_cors_origins_parsed_from_env() {
    std::env::set_var(
        "CORS_ALLOWED_ORIGINS",
        "https://app.example.com, https://staging.example.com",
    );

    let origins = env_config::cors_allowed_origins();
    assert_eq!(
        origins,
        vec![
            "https://app.example.com".to_string(),
            "https://staging.example.com".to_string(),
        ]
    );

    std::env::remove_var("CORS_ALLOWED_ORIGINS");
}
