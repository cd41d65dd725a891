//! Option declarations and resolution into an immutable [`ConfigState`].
//!
//! A backend declares its recognized options once, with defaults. At the
//! start of a generation run the registry overlays the user-supplied raw
//! values onto those defaults, producing a [`ConfigState`] that never
//! changes afterwards. Unrecognized raw keys are ignored so a richer host
//! configuration surface can pass its whole map through.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{Error, Result};

/// Raw option values as supplied by the host (config file, CLI flags).
pub type RawOptions = IndexMap<String, toml::Value>;

/// The declared type of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    Bool,
    Str,
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKind::Bool => write!(f, "boolean"),
            OptionKind::Str => write!(f, "string"),
        }
    }
}

/// A resolved option value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Str(String),
}

impl OptionValue {
    pub fn kind(&self) -> OptionKind {
        match self {
            OptionValue::Bool(_) => OptionKind::Bool,
            OptionValue::Str(_) => OptionKind::Str,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(b) => write!(f, "{}", b),
            OptionValue::Str(s) => write!(f, "{}", s),
        }
    }
}

/// One declared option: name, kind, help text, and default value.
///
/// Immutable once declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    pub name: &'static str,
    pub kind: OptionKind,
    pub description: &'static str,
    pub default: OptionValue,
}

/// The set of options a backend recognizes.
///
/// Declaration order is preserved so listings and resolution are
/// order-stable across runs.
#[derive(Debug, Default)]
pub struct OptionRegistry {
    specs: IndexMap<&'static str, OptionSpec>,
}

impl OptionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an option.
    pub fn declare(
        mut self,
        name: &'static str,
        kind: OptionKind,
        description: &'static str,
        default: OptionValue,
    ) -> Self {
        self.specs.insert(
            name,
            OptionSpec {
                name,
                kind,
                description,
                default,
            },
        );
        self
    }

    /// Declare a boolean option.
    pub fn boolean(self, name: &'static str, description: &'static str, default: bool) -> Self {
        self.declare(name, OptionKind::Bool, description, OptionValue::Bool(default))
    }

    /// Declare a string option.
    pub fn string(self, name: &'static str, description: &'static str, default: &str) -> Self {
        self.declare(
            name,
            OptionKind::Str,
            description,
            OptionValue::Str(default.to_string()),
        )
    }

    /// Look up a declared option by name.
    pub fn get(&self, name: &str) -> Option<&OptionSpec> {
        self.specs.get(name)
    }

    /// Iterate declared options in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &OptionSpec> {
        self.specs.values()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Resolve raw user-supplied values against the declared defaults.
    ///
    /// Every declared option ends up in the state: the user value if
    /// present and well-typed, else the default. Unrecognized keys in
    /// `raw` are ignored.
    pub fn resolve(&self, raw: &RawOptions) -> Result<ConfigState> {
        let mut values = IndexMap::new();
        for spec in self.specs.values() {
            let value = match raw.get(spec.name) {
                Some(supplied) => coerce(spec, supplied)?,
                None => spec.default.clone(),
            };
            values.insert(spec.name.to_string(), value);
        }
        Ok(ConfigState { values })
    }
}

/// Coerce a raw TOML value to the option's declared kind.
///
/// Booleans also accept the exact strings "true"/"false" since CLI
/// `-p name=value` pairs arrive as strings.
fn coerce(spec: &OptionSpec, value: &toml::Value) -> Result<OptionValue> {
    match (spec.kind, value) {
        (OptionKind::Bool, toml::Value::Boolean(b)) => Ok(OptionValue::Bool(*b)),
        (OptionKind::Bool, toml::Value::String(s)) if s == "true" => Ok(OptionValue::Bool(true)),
        (OptionKind::Bool, toml::Value::String(s)) if s == "false" => Ok(OptionValue::Bool(false)),
        (OptionKind::Str, toml::Value::String(s)) => Ok(OptionValue::Str(s.clone())),
        _ => Err(Error::option_type(spec.name, spec.kind, describe(value))),
    }
}

/// Describe a raw value for an error message.
fn describe(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => format!("\"{s}\""),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        _ => "a non-scalar value".to_string(),
    }
}

/// The fully resolved option map for one generation run.
///
/// Built once by [`OptionRegistry::resolve`] and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigState {
    values: IndexMap<String, OptionValue>,
}

impl ConfigState {
    /// Look up a resolved value by option name.
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.values.get(name)
    }

    /// Read a boolean option. Absent or non-boolean names read as false.
    pub fn bool(&self, name: &str) -> bool {
        matches!(self.values.get(name), Some(OptionValue::Bool(true)))
    }

    /// Read a string option. Absent or non-string names read as "".
    pub fn str(&self, name: &str) -> &str {
        match self.values.get(name) {
            Some(OptionValue::Str(s)) => s,
            _ => "",
        }
    }

    /// Iterate resolved values in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> OptionRegistry {
        OptionRegistry::new()
            .string("packageName", "Package name.", "openapi")
            .boolean("withXml", "Include XML annotations.", false)
    }

    fn raw(pairs: &[(&str, toml::Value)]) -> RawOptions {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_defaults_applied() {
        let state = registry().resolve(&RawOptions::new()).unwrap();
        assert_eq!(state.str("packageName"), "openapi");
        assert!(!state.bool("withXml"));
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn test_user_values_overlay_defaults() {
        let state = registry()
            .resolve(&raw(&[
                ("packageName", toml::Value::String("petstore".into())),
                ("withXml", toml::Value::Boolean(true)),
            ]))
            .unwrap();
        assert_eq!(state.str("packageName"), "petstore");
        assert!(state.bool("withXml"));
    }

    #[test]
    fn test_bool_accepts_true_false_strings() {
        let state = registry()
            .resolve(&raw(&[("withXml", toml::Value::String("true".into()))]))
            .unwrap();
        assert!(state.bool("withXml"));

        let state = registry()
            .resolve(&raw(&[("withXml", toml::Value::String("false".into()))]))
            .unwrap();
        assert!(!state.bool("withXml"));
    }

    #[test]
    fn test_bool_rejects_other_strings() {
        let err = registry()
            .resolve(&raw(&[("withXml", toml::Value::String("yes".into()))]))
            .unwrap_err();
        match err {
            Error::OptionType {
                option, expected, ..
            } => {
                assert_eq!(option, "withXml");
                assert_eq!(expected, OptionKind::Bool);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_string_rejects_non_strings() {
        let err = registry()
            .resolve(&raw(&[("packageName", toml::Value::Integer(3))]))
            .unwrap_err();
        assert!(matches!(err, Error::OptionType { .. }));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let with_unknown = registry()
            .resolve(&raw(&[("noSuchOption", toml::Value::Boolean(true))]))
            .unwrap();
        let without = registry().resolve(&RawOptions::new()).unwrap();
        assert_eq!(with_unknown, without);
    }

    #[test]
    fn test_declaration_order_preserved() {
        let state = registry().resolve(&RawOptions::new()).unwrap();
        let names: Vec<&str> = state.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["packageName", "withXml"]);
    }
}
