// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use std::time::Duration;

use anyhow::Result;
use reqwest::Client;
use tracing::info;

use crate::probe::{self, Query};

/// Probe `count` times, sleeping `delay` before each attempt. Iteration `i`
/// (1-based) looks up `base_word` with the decimal index appended. The first
/// transport failure aborts the whole run; there is no retry and no
/// aggregation of results.
pub async fn run(
    client: &Client,
    endpoint: &str,
    base_word: &str,
    language: &str,
    count: u32,
    delay: Duration,
    decode: bool,
) -> Result<()> {
    for i in 1..=count {
        tokio::time::sleep(delay).await;

        let query = Query::new(format!("{base_word}{i}"), language);
        info!(iteration = i, count, word = %query.word, "soak probe");
        probe::run(client, endpoint, &query, decode).await?;
    }

    Ok(())
}
