// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! End-to-end define flow: normalization, URI derivation, registration

use skiff_loader::{
    DefineCall, DefineHead, Loader, LoaderConfig, MapRule, ModuleFactory, ModuleSignal, ScriptRef,
    StaticHost,
};
use std::sync::Arc;

fn session(signal: ModuleSignal) -> (Loader, Arc<StaticHost>) {
    let mut config = LoaderConfig {
        base: "https://mirror.example.com/app/".to_string(),
        ..Default::default()
    };
    config.map.push(MapRule {
        from: "https://cdn.example.com/".to_string(),
        to: "https://mirror.example.com/".to_string(),
    });

    let host = Arc::new(StaticHost::new(config.base_url().unwrap()));
    let loader = Loader::new(config, Arc::clone(&host) as _, signal).unwrap();
    (loader, host)
}

#[test]
fn test_anonymous_module_lands_under_reverse_mapped_uri() {
    let (loader, host) = session(ModuleSignal::Interactive);
    host.set_interactive(ScriptRef::new("widgets/dialog.js"));

    loader.define(DefineCall::Factory(ModuleFactory::function(
        "function(require) {\n  var base = require('widgets/base');\n  require('util');\n}",
    )));

    // The script was served from the mirror; the module is registered
    // under its canonical CDN URI.
    let module = loader
        .context()
        .get("https://cdn.example.com/app/widgets/dialog.js")
        .expect("module registered under canonical URI");
    assert_eq!(module.id, None);
    assert_eq!(module.deps, vec!["widgets/base", "util"]);

    let batch = loader.context().take_batch();
    assert_eq!(batch.len(), 1);
}

#[test]
fn test_deferred_registration_commits_on_load_completion() {
    let (loader, _host) = session(ModuleSignal::Interactive);

    // No interactive script can be obtained; registration is deferred.
    loader.define(DefineCall::Factory(ModuleFactory::function(
        "function(require) { require('a'); }",
    )));
    assert!(loader.context().is_empty());
    assert!(loader.context().has_pending());

    // The surrounding loader learns the URI from the script's load event.
    assert!(loader
        .context()
        .commit_pending("https://cdn.example.com/app/late.js"));
    let module = loader
        .context()
        .get("https://cdn.example.com/app/late.js")
        .unwrap();
    assert_eq!(module.deps, vec!["a"]);
    assert_eq!(loader.context().take_batch().len(), 1);
}

#[test]
fn test_multi_module_file_batches_explicit_ids() {
    let (loader, _host) = session(ModuleSignal::Interactive);

    loader.define(DefineCall::Full {
        id: "pkg/a".to_string(),
        deps: vec![],
        factory: ModuleFactory::function("function() {}"),
    });
    loader.define(DefineCall::HeadFactory(
        DefineHead::Id("pkg/b".to_string()),
        ModuleFactory::function("function(require) { require('pkg/a'); }"),
    ));

    assert!(loader.context().contains("https://mirror.example.com/app/pkg/a.js"));
    let b = loader
        .context()
        .get("https://mirror.example.com/app/pkg/b.js")
        .unwrap();
    assert_eq!(b.deps, vec!["pkg/a"]);

    // Both definitions from the same file show up in the batch.
    assert_eq!(loader.context().take_batch().len(), 2);
    // Draining is per batch, not cumulative.
    assert!(loader.context().take_batch().is_empty());
}

#[test]
fn test_native_signal_host_skips_interactive_probing() {
    let (loader, host) = session(ModuleSignal::Native);
    host.set_current_module_uri("https://cdn.example.com/app/native.js");

    loader.define(DefineCall::Factory(ModuleFactory::value(serde_json::json!({
        "ready": true
    }))));

    let module = loader
        .context()
        .get("https://cdn.example.com/app/native.js")
        .unwrap();
    assert!(module.deps.is_empty());
}
