// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Host runtime introspection seam
//!
//! The loader derives the identity of an anonymous module from whatever
//! "currently executing script" primitive the host runtime offers. That
//! capability varies by runtime, so it is injected at construction time:
//! a [`ModuleSignal`] selects the derivation strategy and a [`ScriptHost`]
//! supplies the runtime-specific introspection.

use parking_lot::Mutex;
use url::Url;

/// How the host reports the module currently being evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleSignal {
    /// The runtime exposes the current module synchronously; interactive
    /// script probing is bypassed and the host supplies the URI directly.
    Native,
    /// No synchronous signal; the loader probes the script element the
    /// runtime reports as being parsed ("interactive script").
    Interactive,
}

/// Handle to a script element reported by the host.
///
/// Carries the source attribute as written in markup; the host resolves
/// it to an absolute URL through [`ScriptHost::script_src`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptRef {
    raw_src: String,
}

impl ScriptRef {
    /// Create a handle for a script with the given source attribute.
    pub fn new(raw_src: impl Into<String>) -> Self {
        Self {
            raw_src: raw_src.into(),
        }
    }

    /// The source attribute as written.
    pub fn raw_src(&self) -> &str {
        &self.raw_src
    }
}

/// Runtime script-introspection primitives consumed by the loader.
///
/// Implementations adapt a concrete host environment; tests and tooling
/// use [`StaticHost`].
pub trait ScriptHost {
    /// URI of the module currently being evaluated, on hosts with a
    /// native current-module signal. Defaults to unavailable.
    fn current_module_uri(&self) -> Option<String> {
        None
    }

    /// The script element currently being parsed, if the host can tell.
    fn current_script(&self) -> Option<ScriptRef>;

    /// Absolute source URL of a script element.
    fn script_src(&self, script: &ScriptRef) -> String;
}

/// A [`ScriptHost`] backed by explicitly staged state.
///
/// Serves whatever current script or module URI was last set. Used as the
/// test double for the loader and by the CLI, which has no live runtime
/// to introspect.
pub struct StaticHost {
    base: Url,
    interactive: Mutex<Option<ScriptRef>>,
    current_uri: Mutex<Option<String>>,
}

impl StaticHost {
    /// Create a host that absolutizes script sources against `base`.
    pub fn new(base: Url) -> Self {
        Self {
            base,
            interactive: Mutex::new(None),
            current_uri: Mutex::new(None),
        }
    }

    /// Stage the script element the host reports as interactive.
    pub fn set_interactive(&self, script: ScriptRef) {
        *self.interactive.lock() = Some(script);
    }

    /// Clear the interactive script, simulating a host that cannot tell.
    pub fn clear_interactive(&self) {
        *self.interactive.lock() = None;
    }

    /// Stage the native current-module URI.
    pub fn set_current_module_uri(&self, uri: impl Into<String>) {
        *self.current_uri.lock() = Some(uri.into());
    }
}

impl ScriptHost for StaticHost {
    fn current_module_uri(&self) -> Option<String> {
        self.current_uri.lock().clone()
    }

    fn current_script(&self) -> Option<ScriptRef> {
        self.interactive.lock().clone()
    }

    fn script_src(&self, script: &ScriptRef) -> String {
        self.base
            .join(script.raw_src())
            .map(|url| url.to_string())
            .unwrap_or_else(|_| script.raw_src().to_string())
    }
}
