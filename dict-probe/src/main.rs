// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use dict_probe::cli::{Cli, Command};
use dict_probe::probe::{self, Query};
use dict_probe::{config, soak};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // RUST_LOG takes precedence, fallback to info. Diagnostics go to stderr
    // so stdout carries only the probe output.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let endpoint = config::resolve_endpoint(&cli.endpoint)?;

    info!(
        endpoint = %endpoint,
        version = env!("CARGO_PKG_VERSION"),
        "dict-probe starting"
    );

    let client = reqwest::Client::builder()
        .build()
        .context("failed to create HTTP client")?;

    match cli.command {
        Command::Probe { word, language } => {
            let query = Query::new(word, language);
            probe::run(&client, &endpoint, &query, cli.decode).await?;
        }
        Command::Soak {
            base_word,
            language,
            count,
            delay_seconds,
        } => {
            soak::run(
                &client,
                &endpoint,
                &base_word,
                &language,
                count,
                Duration::from_secs(delay_seconds),
                cli.decode,
            )
            .await?;
        }
    }

    Ok(())
}
