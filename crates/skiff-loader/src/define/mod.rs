// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Module-definition front end
//!
//! Normalizes the overloaded `define(id?, deps?, factory)` signature into
//! a canonical [`ModuleDescriptor`], inferring the dependency list from
//! the factory source when no explicit one was given, deriving the module
//! URI for anonymous definitions, and handing the result to the session's
//! registration state.
//!
//! `define` never fails: malformed shapes are normalized rather than
//! rejected, and an anonymous module whose URI cannot be derived is
//! staged for deferred registration instead of erroring.

mod call;
pub mod deps;
mod script;

pub use call::{DefineCall, DefineHead, ModuleDescriptor, ModuleFactory};

use std::sync::Arc;
use url::Url;

use crate::config::LoaderConfig;
use crate::error::Result;
use crate::host::{ModuleSignal, ScriptHost};
use crate::paths;
use crate::registry::LoaderContext;

/// The module-definition entry point for one loader session.
///
/// Owns the session configuration, the host-introspection seam, and the
/// shared registration state the surrounding loader consumes.
pub struct Loader {
    config: LoaderConfig,
    base: Url,
    context: Arc<LoaderContext>,
    host: Arc<dyn ScriptHost + Send + Sync>,
    signal: ModuleSignal,
}

impl Loader {
    /// Create a loader session.
    ///
    /// Fails only when the configured base is not an absolute URI; the
    /// base is parsed once here so `define` stays infallible.
    pub fn new(
        config: LoaderConfig,
        host: Arc<dyn ScriptHost + Send + Sync>,
        signal: ModuleSignal,
    ) -> Result<Self> {
        let base = config.base_url()?;
        Ok(Self {
            config,
            base,
            context: Arc::new(LoaderContext::new()),
            host,
            signal,
        })
    }

    /// The session's registration state.
    pub fn context(&self) -> &Arc<LoaderContext> {
        &self.context
    }

    /// The session configuration.
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Define a module.
    ///
    /// Resolves the call shape, infers dependencies when none were given
    /// and the factory is callable, normalizes the dependency list,
    /// resolves the module URI (directly for an explicit id, via the
    /// anonymous derivation path otherwise), and registers the result --
    /// immediately when the URI is known, deferred when it is not.
    pub fn define(&self, call: DefineCall) {
        let (id, deps, factory) = call.into_parts();

        let deps = match deps {
            Some(deps) => normalize_deps(deps),
            None if factory.is_callable() => {
                factory.source().map(deps::extract).unwrap_or_default()
            }
            // A plain exported value: nothing to scan.
            None => Vec::new(),
        };

        // An empty explicit id counts as absent.
        let id = id.filter(|id| !id.is_empty());

        let uri = match &id {
            Some(id) => Some(paths::id2uri(&self.base, &self.config, id)),
            None => script::resolve_anonymous(
                self.host.as_ref(),
                self.signal,
                &self.config,
                &factory,
            ),
        };

        let module = ModuleDescriptor { id, deps, factory };
        self.context.register(module, uri);
    }
}

/// Drop empty entries and duplicates from an explicit dependency list,
/// preserving first-appearance order.
fn normalize_deps(deps: Vec<String>) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(deps.len());
    for dep in deps {
        if !dep.is_empty() && !normalized.contains(&dep) {
            normalized.push(dep);
        }
    }
    normalized
}
