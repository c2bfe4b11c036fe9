// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Module id to URI mapping

use url::Url;

use crate::config::LoaderConfig;

/// Resolve a module id to its canonical URI.
///
/// Expands a first-segment alias, resolves relative segments against the
/// configured base, and completes a missing extension. Deterministic for a
/// given configuration; an id that cannot be joined to the base is returned
/// unchanged rather than rejected.
pub fn id2uri(base: &Url, config: &LoaderConfig, id: &str) -> String {
    let id = expand_alias(config, id.trim());

    // An absolute id passes through join untouched; a relative one is
    // resolved against the base, normalizing `.` and `..` segments.
    let uri = match base.join(&id) {
        Ok(uri) => uri,
        Err(_) => return id,
    };

    complete_extension(uri, config)
}

/// Expand the first path segment of an id through the alias table.
fn expand_alias(config: &LoaderConfig, id: &str) -> String {
    let (first, rest) = match id.find('/') {
        Some(pos) => (&id[..pos], &id[pos..]),
        None => (id, ""),
    };

    match config.alias.get(first) {
        Some(replacement) => format!("{}{}", replacement, rest),
        None => id.to_string(),
    }
}

/// Complete a missing extension on a resolved URI.
///
/// Ids carrying a query or fragment pass through unchanged. A trailing
/// slash resolves to the directory's index file; a last segment without a
/// dot gets the default extension appended.
fn complete_extension(mut uri: Url, config: &LoaderConfig) -> String {
    if uri.query().is_some() || uri.fragment().is_some() {
        return uri.to_string();
    }

    let path = uri.path().to_string();
    let last = path.rsplit('/').next().unwrap_or("");

    if path.ends_with('/') {
        uri.set_path(&format!("{}index{}", path, config.default_extension()));
    } else if !last.contains('.') {
        uri.set_path(&format!("{}{}", path, config.default_extension()));
    }

    uri.to_string()
}

/// Apply the configured URL rewrite rules to a canonical URI.
///
/// First matching rule wins; identity when no rule matches.
pub fn parse_map(config: &LoaderConfig, uri: &str) -> String {
    for rule in &config.map {
        if let Some(rest) = uri.strip_prefix(rule.from.as_str()) {
            return format!("{}{}", rule.to, rest);
        }
    }
    uri.to_string()
}

/// Invert the configured URL rewrite rules.
///
/// Recovers the canonical module URI from the URL a script was actually
/// requested under. First matching rule wins; identity when none matches.
pub fn unparse_map(config: &LoaderConfig, uri: &str) -> String {
    for rule in &config.map {
        if let Some(rest) = uri.strip_prefix(rule.to.as_str()) {
            return format!("{}{}", rule.from, rest);
        }
    }
    uri.to_string()
}
