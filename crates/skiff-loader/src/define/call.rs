// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Call shapes accepted by `define`

/// A module factory: either a function (held as its source text, from
/// which static `require()` dependencies can be scanned) or a plain
/// exported value.
#[derive(Debug, Clone, PartialEq)]
pub enum ModuleFactory {
    /// A callable factory, invoked lazily by the loader with resolved
    /// dependencies. Holds the function's source text.
    Function(String),
    /// A plain exported value; dependency inference does not apply.
    Value(serde_json::Value),
}

impl ModuleFactory {
    /// Create a function factory from source text.
    pub fn function(source: impl Into<String>) -> Self {
        Self::Function(source.into())
    }

    /// Create a value factory.
    pub fn value(value: impl Into<serde_json::Value>) -> Self {
        Self::Value(value.into())
    }

    /// Whether the factory is callable.
    pub fn is_callable(&self) -> bool {
        matches!(self, Self::Function(_))
    }

    /// Source text of a callable factory.
    pub fn source(&self) -> Option<&str> {
        match self {
            Self::Function(source) => Some(source),
            Self::Value(_) => None,
        }
    }
}

/// First argument of a two-argument `define` call: a module id or an
/// explicit dependency list, distinguished by type.
#[derive(Debug, Clone, PartialEq)]
pub enum DefineHead {
    /// `define(id, factory)`
    Id(String),
    /// `define(deps, factory)`
    Deps(Vec<String>),
}

/// The three call shapes `define` accepts.
///
/// The overloaded positional signature `define(id?, deps?, factory)` is
/// expressed as one variant per argument count, with the two-argument
/// ambiguity carried by [`DefineHead`]. Shapes the original signature
/// would have had to type-sniff at runtime are unrepresentable here.
#[derive(Debug, Clone, PartialEq)]
pub enum DefineCall {
    /// `define(factory)`
    Factory(ModuleFactory),
    /// `define(id, factory)` or `define(deps, factory)`
    HeadFactory(DefineHead, ModuleFactory),
    /// `define(id, deps, factory)`
    Full {
        /// Explicit module id
        id: String,
        /// Explicit dependency list
        deps: Vec<String>,
        /// Module factory
        factory: ModuleFactory,
    },
}

impl DefineCall {
    /// Flatten the call shape into canonical `(id, deps, factory)` parts.
    pub(crate) fn into_parts(self) -> (Option<String>, Option<Vec<String>>, ModuleFactory) {
        match self {
            Self::Factory(factory) => (None, None, factory),
            Self::HeadFactory(DefineHead::Id(id), factory) => (Some(id), None, factory),
            Self::HeadFactory(DefineHead::Deps(deps), factory) => (None, Some(deps), factory),
            Self::Full { id, deps, factory } => (Some(id), Some(deps), factory),
        }
    }
}

/// A normalized module definition.
///
/// Created fresh on every `define` call and handed to the registration
/// sink; never mutated afterward by the front end. `deps` never contains
/// empty strings or duplicates and preserves first-appearance order.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleDescriptor {
    /// Explicit module id, if one was given
    pub id: Option<String>,
    /// Normalized dependency list
    pub deps: Vec<String>,
    /// The module factory
    pub factory: ModuleFactory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_callability() {
        assert!(ModuleFactory::function("function() {}").is_callable());
        assert!(!ModuleFactory::value(serde_json::json!({ "answer": 42 })).is_callable());
    }

    #[test]
    fn test_value_factory_has_no_source() {
        assert!(ModuleFactory::value(serde_json::json!([1, 2])).source().is_none());
        assert_eq!(
            ModuleFactory::function("function() {}").source(),
            Some("function() {}")
        );
    }

    #[test]
    fn test_into_parts_per_shape() {
        let factory = ModuleFactory::function("function() {}");

        let (id, deps, _) = DefineCall::Factory(factory.clone()).into_parts();
        assert_eq!((id, deps), (None, None));

        let (id, deps, _) =
            DefineCall::HeadFactory(DefineHead::Id("a".to_string()), factory.clone()).into_parts();
        assert_eq!((id, deps), (Some("a".to_string()), None));

        let (id, deps, _) =
            DefineCall::HeadFactory(DefineHead::Deps(vec!["b".to_string()]), factory.clone())
                .into_parts();
        assert_eq!((id, deps), (None, Some(vec!["b".to_string()])));

        let (id, deps, _) = DefineCall::Full {
            id: "a".to_string(),
            deps: vec!["b".to_string()],
            factory,
        }
        .into_parts();
        assert_eq!((id, deps), (Some("a".to_string()), Some(vec!["b".to_string()])));
    }
}
