// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Error types for the loader front end

use thiserror::Error;

/// Result type for loader operations
pub type Result<T> = std::result::Result<T, LoaderError>;

/// Errors that can occur around the module-definition front end.
///
/// `define` itself never fails: malformed calls are normalized and an
/// unresolvable anonymous URI defers registration instead of erroring.
/// These variants cover the fallible collaborators (configuration,
/// file access for tooling).
#[derive(Debug, Error)]
pub enum LoaderError {
    /// File system error
    #[error("File system error: {0}")]
    Fs(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// The configured base is not a valid absolute URI
    #[error("Invalid base URI '{uri}': {source}")]
    InvalidBase {
        /// The offending base string
        uri: String,
        /// Underlying parse failure
        source: url::ParseError,
    },
}
