// ABOUTME: Server binary for the trainer plan API
// ABOUTME: Loads configuration, initializes logging, and serves the planning pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Trainer Plan Server Binary
//!
//! Starts the workout plan API with environment-sourced configuration.
//! Both external credentials (`RAPIDAPI_KEY`, `ANTHROPIC_API_KEY`) are
//! required at startup.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use trainer_plan_server::{config::ServerConfig, logging, server};
use tracing::info;

#[derive(Parser)]
#[command(name = "trainer-plan-server")]
#[command(about = "AI personal trainer API - workout plan generation with LLM selection")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Handle container environments where clap may not receive usable args
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Argument parsing failed: {e}");
            eprintln!("Using default configuration");
            Args { http_port: None }
        }
    };

    let mut config = ServerConfig::from_env();

    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("Starting Trainer Plan Server");
    info!("{}", config.summary());

    let resources = Arc::new(server::ServerResources::from_env(Arc::new(config))?);

    info!(
        "LLM provider ready: {} (default model {})",
        resources.llm.display_name(),
        resources.llm.default_model()
    );

    server::serve(resources).await
}
