// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use std::io::Write;
use std::time::Instant;

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode, Url};
use tracing::{info, warn};

use crate::model::DictionaryResponse;

/// Path appended to the endpoint for every lookup.
const LOOKUP_PATH: &str = "get_definition";

/// One lookup, constructed fresh per probe and discarded after use.
#[derive(Debug, Clone)]
pub struct Query {
    pub word: String,
    pub language: String,
}

impl Query {
    pub fn new(word: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            language: language.into(),
        }
    }
}

/// What a single probe observed: the status line and the raw payload.
#[derive(Debug)]
pub struct ProbeResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// Build the lookup URL. The query values are percent-encoded by the URL
/// serializer; the endpoint is expected to be pre-normalised (no trailing
/// slash), as produced by config::resolve_endpoint.
pub fn build_url(endpoint: &str, query: &Query) -> Result<Url> {
    Url::parse_with_params(
        &format!("{endpoint}/{LOOKUP_PATH}"),
        &[
            ("language", query.language.as_str()),
            ("word", query.word.as_str()),
        ],
    )
    .with_context(|| format!("building lookup URL from endpoint {endpoint}"))
}

/// Issue a single GET and collect the response. Transport failures (DNS,
/// refused connection, timeout, protocol errors) propagate; HTTP-level
/// errors do not — a 404 is a response like any other.
pub async fn fetch(client: &Client, endpoint: &str, query: &Query) -> Result<ProbeResponse> {
    let url = build_url(endpoint, query)?;

    let start = Instant::now();
    let response = client
        .get(url.clone())
        .send()
        .await
        .with_context(|| format!("GET {url}"))?;

    let status = response.status();
    let body = response
        .bytes()
        .await
        .with_context(|| format!("reading response body from {url}"))?
        .to_vec();
    let elapsed = start.elapsed();

    info!(
        word = %query.word,
        language = %query.language,
        status = status.as_u16(),
        bytes = body.len(),
        elapsed_ms = elapsed.as_millis() as u64,
        "probe completed"
    );

    if status.is_client_error() || status.is_server_error() {
        warn!(
            word = %query.word,
            status = status.as_u16(),
            "incorrect HTTP return code for {url}, expected 1xx or 2xx or 3xx"
        );
    }

    Ok(ProbeResponse {
        status,
        body,
    })
}

/// Write the two observable output lines: the numeric status code, then the
/// raw body (lossy UTF-8 where the payload is not valid UTF-8).
pub fn report<W: Write>(out: &mut W, response: &ProbeResponse) -> Result<()> {
    writeln!(out, "{}", response.status.as_u16())?;
    writeln!(out, "{}", String::from_utf8_lossy(&response.body))?;
    Ok(())
}

/// Probe once and print to stdout. With `decode` set, a 2xx body is
/// additionally parsed as the service's JSON response; a body that does not
/// parse is logged and otherwise ignored.
pub async fn run(client: &Client, endpoint: &str, query: &Query, decode: bool) -> Result<()> {
    let response = fetch(client, endpoint, query).await?;

    let mut stdout = std::io::stdout().lock();
    report(&mut stdout, &response)?;
    stdout.flush()?;

    if decode && response.status.is_success() {
        match serde_json::from_slice::<DictionaryResponse>(&response.body) {
            Ok(decoded) => info!(
                word = %decoded.element.word,
                lang = %decoded.element.lang,
                definitions = decoded.element.definitions.len(),
                wiktionary_link = %decoded.wiktionary_link,
                "decoded definition"
            ),
            Err(e) => warn!(word = %query.word, "response body is not a dictionary response: {e}"),
        }
    }

    Ok(())
}
