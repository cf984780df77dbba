// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Typed view of the dictionary service's JSON response, used by --decode.
//!
//! The shapes mirror what the service returns for a successful lookup. The
//! probe never depends on this model for its output contract; decoding is
//! purely diagnostic.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DictionaryResponse {
    pub element: DictionaryElement,
    pub wiktionary_link: String,
}

#[derive(Debug, Deserialize)]
pub struct DictionaryElement {
    pub word: String,
    /// Language name as the service spells it, e.g. "German".
    pub lang: String,
    #[serde(default)]
    pub audio: Vec<String>,
    pub ipa: Option<String>,
    #[serde(default)]
    pub word_types: Vec<String>,
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Deserialize)]
pub struct Definition {
    pub text: Vec<HyperlinkedText>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Definition text is a run of plain segments and inline links to other
/// dictionary entries.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub enum HyperlinkedText {
    Plain(String),
    Link(String),
}
