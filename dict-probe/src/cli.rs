// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use clap::{Parser, Subcommand};

use crate::config;

/// Smoke-test probe for the dictionary lookup service
#[derive(Parser, Debug)]
#[command(name = "dict-probe")]
#[command(about = "Issue GET probes against the dictionary service and print status + body")]
pub struct Cli {
    /// Base URL of the dictionary service
    #[arg(
        long,
        global = true,
        env = config::ENDPOINT_ENV,
        default_value = config::DEFAULT_ENDPOINT
    )]
    pub endpoint: String,

    /// Decode 2xx bodies as the service's JSON response and log a summary
    #[arg(long, global = true)]
    pub decode: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Issue a single probe
    Probe {
        /// Word to look up
        word: String,

        /// Language name, spelled the way the service expects it
        #[arg(short, long, default_value = "German")]
        language: String,
    },

    /// Repeat probes with a numeric word suffix and a fixed delay
    Soak {
        /// Word stem; each iteration appends its 1-based index
        base_word: String,

        /// Language name, spelled the way the service expects it
        #[arg(short, long, default_value = "German")]
        language: String,

        /// Number of probes to issue
        #[arg(short, long, default_value = "99")]
        count: u32,

        /// Seconds to sleep before each probe
        #[arg(long, default_value = "10")]
        delay_seconds: u64,
    },
}
