// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use anyhow::{Context, Result, bail};
use reqwest::Url;

/// Production dictionary service. A local development instance is usually
/// reachable on http://localhost:9042.
pub const DEFAULT_ENDPOINT: &str = "https://dictionary.nuenki.app";

/// Environment variable consulted when --endpoint is not given.
pub const ENDPOINT_ENV: &str = "DICT_PROBE_ENDPOINT";

/// Validate the endpoint and normalise it to a form the probe runner can
/// append the lookup path to. Only absolute http/https URLs are accepted;
/// a trailing slash is tolerated.
pub fn resolve_endpoint(raw: &str) -> Result<String> {
    let url = Url::parse(raw).with_context(|| format!("invalid endpoint URL: {raw}"))?;

    match url.scheme() {
        "http" | "https" => {}
        other => bail!("unsupported endpoint scheme '{other}' in {raw} (expected http or https)"),
    }
    if url.host_str().is_none() {
        bail!("endpoint {raw} has no host");
    }

    Ok(raw.trim_end_matches('/').to_string())
}
