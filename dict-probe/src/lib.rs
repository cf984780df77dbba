// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Smoke-test probe for the dictionary lookup service.
//!
//! This crate provides the building blocks used by the `dict-probe` binary:
//! CLI argument types, endpoint resolution, the probe runner itself, and the
//! fixed-delay soak loop. The primary user-facing interface is the
//! command-line application.

pub mod cli;
pub mod config;
pub mod model;
pub mod probe;
pub mod soak;
