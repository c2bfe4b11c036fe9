// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! # skiff-loader
//!
//! The module-definition front end of the Skiff client-side script
//! loader.
//!
//! This crate handles everything between a `define()` call and the
//! session's module table:
//!
//! - Normalizing the overloaded `define(id?, deps?, factory)` signature
//!   into a canonical [`ModuleDescriptor`]
//! - Inferring a module's dependency list by statically scanning its
//!   factory source for `require("x")` calls
//! - Deriving an identifier for anonymous modules from the URL of the
//!   script currently being evaluated, on hosts that lack a native
//!   "current module" signal
//! - Registering the result into the session's [`LoaderContext`], either
//!   immediately or deferred until the enclosing script's load event
//!
//! Resolving the dependency graph, fetching and executing modules, and
//! cache eviction belong to the surrounding loader, not this crate.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use skiff_loader::{DefineCall, Loader, LoaderConfig, ModuleFactory, ModuleSignal, StaticHost};
//! use std::sync::Arc;
//!
//! let config = LoaderConfig::default();
//! let host = Arc::new(StaticHost::new(config.base_url()?));
//! let loader = Loader::new(config, host, ModuleSignal::Interactive)?;
//!
//! loader.define(DefineCall::Factory(ModuleFactory::function(
//!     "function(require) { var a = require('a'); }",
//! )));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod define;
pub mod error;
pub mod host;
pub mod paths;
pub mod registry;

// Re-exports
pub use config::{LoaderConfig, MapRule};
pub use define::{DefineCall, DefineHead, Loader, ModuleDescriptor, ModuleFactory};
pub use error::{LoaderError, Result};
pub use host::{ModuleSignal, ScriptHost, ScriptRef, StaticHost};
pub use registry::LoaderContext;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
