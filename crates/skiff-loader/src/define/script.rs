// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Anonymous module URI derivation

use crate::config::LoaderConfig;
use crate::define::ModuleFactory;
use crate::host::{ModuleSignal, ScriptHost};
use crate::paths;

/// Try to derive the URI of a module defined without an explicit id.
///
/// On hosts with a native current-module signal the URI comes straight
/// from the host. Otherwise the script element currently being parsed is
/// probed and its absolute source URL reverse-mapped to a canonical
/// module URI. Returns `None` when derivation fails; the caller falls
/// back to deferred registration and the failure is logged once here.
pub(crate) fn resolve_anonymous(
    host: &dyn ScriptHost,
    signal: ModuleSignal,
    config: &LoaderConfig,
    factory: &ModuleFactory,
) -> Option<String> {
    match signal {
        ModuleSignal::Native => host.current_module_uri(),
        ModuleSignal::Interactive => match host.current_script() {
            Some(script) => {
                let src = host.script_src(&script);
                Some(paths::unparse_map(config, &src))
            }
            None => {
                tracing::warn!(
                    "failed to derive URL from interactive script for: {}",
                    factory.source().unwrap_or("<value factory>")
                );
                None
            }
        },
    }
}
