// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Loader session configuration

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use url::Url;

use crate::error::{LoaderError, Result};

/// Default base URI when none is configured.
pub const DEFAULT_BASE: &str = "http://localhost/";

/// Default extension completion list.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".js"];

/// A single URL rewrite rule applied when requesting scripts.
///
/// `parse_map` rewrites `from` → `to`; `unparse_map` is the inverse
/// direction used to recover a canonical module URI from a script's
/// actual source URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapRule {
    /// Canonical URI prefix
    pub from: String,
    /// Rewritten prefix used on the wire
    pub to: String,
}

/// Configuration for a loader session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Base URI against which module ids resolve
    pub base: String,

    /// First-segment alias expansions (alias -> replacement)
    pub alias: BTreeMap<String, String>,

    /// URL rewrite rules, applied first-match-wins in declaration order
    pub map: Vec<MapRule>,

    /// Extensions tried for extension-less ids, first entry is the default
    pub extensions: Vec<String>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE.to_string(),
            alias: BTreeMap::new(),
            map: Vec::new(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl LoaderConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Parse the configured base into an absolute URL.
    pub fn base_url(&self) -> Result<Url> {
        Url::parse(&self.base).map_err(|source| LoaderError::InvalidBase {
            uri: self.base.clone(),
            source,
        })
    }

    /// Default extension appended to extension-less ids.
    pub fn default_extension(&self) -> &str {
        self.extensions.first().map(|s| s.as_str()).unwrap_or(".js")
    }
}
