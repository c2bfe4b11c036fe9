// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Session-scoped module registration state

use dashmap::DashMap;
use parking_lot::Mutex;
use std::sync::Arc;

use crate::define::ModuleDescriptor;

/// Shared registration state for one loader session.
///
/// Holds the module table keyed by resolved URI, the list of modules
/// defined within the current loading batch, and the single slot for a
/// pending anonymous module whose URI becomes known only once the
/// enclosing script's load event fires.
///
/// Initialized empty at session start and never torn down mid-session.
/// The definition front end only ever inserts into the table; reads are
/// for the surrounding loader.
pub struct LoaderContext {
    /// Resolved URI -> module
    modules: DashMap<String, Arc<ModuleDescriptor>>,
    /// Modules defined in the current loading batch
    batch: Mutex<Vec<Arc<ModuleDescriptor>>>,
    /// At most one pending anonymous module per in-flight script load
    pending: Mutex<Option<Arc<ModuleDescriptor>>>,
}

impl LoaderContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self {
            modules: DashMap::new(),
            batch: Mutex::new(Vec::new()),
            pending: Mutex::new(None),
        }
    }

    /// Register a finished module.
    ///
    /// With a URI the module is inserted into the table immediately and
    /// appended to the current batch. Without one it is staged as the
    /// pending anonymous module, replacing any previous pending value --
    /// defining two anonymous modules in one file without explicit ids is
    /// unsupported and the second wins.
    pub fn register(&self, module: ModuleDescriptor, uri: Option<String>) {
        let module = Arc::new(module);

        match uri {
            Some(uri) => {
                self.modules.insert(uri, Arc::clone(&module));
                self.batch.lock().push(module);
            }
            None => {
                let previous = self.pending.lock().replace(module);
                if previous.is_some() {
                    tracing::debug!("pending anonymous module replaced by a later definition");
                }
            }
        }
    }

    /// Commit the pending anonymous module under a now-known URI.
    ///
    /// Called by the surrounding loader from its load-completion handler.
    /// Returns `false` when nothing was pending.
    pub fn commit_pending(&self, uri: &str) -> bool {
        match self.pending.lock().take() {
            Some(module) => {
                self.modules.insert(uri.to_string(), Arc::clone(&module));
                self.batch.lock().push(module);
                true
            }
            None => false,
        }
    }

    /// Whether an anonymous module is waiting for its URI.
    pub fn has_pending(&self) -> bool {
        self.pending.lock().is_some()
    }

    /// Drain the list of modules defined in the current batch.
    pub fn take_batch(&self) -> Vec<Arc<ModuleDescriptor>> {
        std::mem::take(&mut *self.batch.lock())
    }

    /// Look up a registered module by URI.
    pub fn get(&self, uri: &str) -> Option<Arc<ModuleDescriptor>> {
        self.modules.get(uri).map(|entry| Arc::clone(entry.value()))
    }

    /// Whether a module is registered under the given URI.
    pub fn contains(&self, uri: &str) -> bool {
        self.modules.contains_key(uri)
    }

    /// All registered URIs.
    pub fn uris(&self) -> Vec<String> {
        self.modules.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Number of registered modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl Default for LoaderContext {
    fn default() -> Self {
        Self::new()
    }
}
