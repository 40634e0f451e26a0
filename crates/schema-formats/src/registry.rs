//! Format registry
//!
//! Registration and lookup are split into two types. [`RegistryBuilder`] is
//! the setup phase: it is mutable and single-owner. [`RegistryBuilder::build`]
//! consumes it and returns a [`FormatRegistry`], which has no mutating
//! methods and can be shared across threads for lookups without locking.
//!
//! Built-in formats resolve through the [`Format`] enumeration; only custom
//! names, aliases and overrides live in the map.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde_json::Value;

use crate::config::FormatsConfig;
use crate::error::RegistryError;
use crate::format::Format;

/// Draft-03 spellings registered by `legacy_names`
const LEGACY_NAMES: [(&str, Format); 2] = [
    ("ip-address", Format::Ipv4),
    ("host-name", Format::Hostname),
];

static BUILTIN: Lazy<FormatRegistry> = Lazy::new(|| RegistryBuilder::new().build());

/// A user-supplied format check.
///
/// Implemented for every `Fn(&str) -> bool + Send + Sync`, so plain functions
/// and closures can be registered directly.
pub trait FormatValidator: Send + Sync {
    /// Returns whether `value` conforms to the format.
    fn is_valid(&self, value: &str) -> bool;
}

impl<F> FormatValidator for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_valid(&self, value: &str) -> bool {
        self(value)
    }
}

/// A resolved format check, cheap to clone and keep for repeated use.
#[derive(Clone)]
pub enum Validator {
    Builtin(Format),
    Custom(Arc<dyn FormatValidator>),
}

impl Validator {
    pub fn is_valid(&self, value: &str) -> bool {
        match self {
            Validator::Builtin(format) => format.is_valid(value),
            Validator::Custom(validator) => validator.is_valid(value),
        }
    }

    /// The built-in format behind this validator, if any
    pub fn builtin(&self) -> Option<Format> {
        match self {
            Validator::Builtin(format) => Some(*format),
            Validator::Custom(_) => None,
        }
    }
}

impl From<Format> for Validator {
    fn from(format: Format) -> Self {
        Validator::Builtin(format)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Validator::Builtin(format) => f.debug_tuple("Builtin").field(&format.name()).finish(),
            Validator::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Name bindings shared by the builder and the frozen registry
#[derive(Clone, Debug, Default)]
struct Bindings {
    builtins: HashSet<Format>,
    custom: HashMap<String, Validator>,
}

impl Bindings {
    fn resolve(&self, name: &str) -> Option<Validator> {
        if let Some(validator) = self.custom.get(name) {
            return Some(validator.clone());
        }
        Format::from_name(name)
            .filter(|format| self.builtins.contains(format))
            .map(Validator::Builtin)
    }

    fn names(&self) -> BTreeSet<&str> {
        self.custom
            .keys()
            .map(String::as_str)
            .chain(self.builtins.iter().map(|format| format.name()))
            .collect()
    }
}

/// Setup phase of a [`FormatRegistry`].
///
/// # Example
///
/// ```
/// use schema_formats::RegistryBuilder;
///
/// let mut builder = RegistryBuilder::new();
/// builder
///     .register("even-length", |s: &str| s.len() % 2 == 0)?
///     .alias("uriref", "uri-reference")?;
/// let registry = builder.build();
///
/// assert!(registry.validate("even-length", "ab"));
/// assert!(registry.validate("uriref", "../a"));
/// # Ok::<(), schema_formats::RegistryError>(())
/// ```
#[derive(Clone, Debug)]
pub struct RegistryBuilder {
    bindings: Bindings,
}

impl RegistryBuilder {
    /// Starts with every built-in format registered.
    pub fn new() -> Self {
        Self {
            bindings: Bindings {
                builtins: Format::ALL.into_iter().collect(),
                custom: HashMap::new(),
            },
        }
    }

    /// Starts with no formats at all.
    pub fn empty() -> Self {
        Self {
            bindings: Bindings::default(),
        }
    }

    /// Starts from the built-ins and applies a `[formats]` config section:
    /// legacy names first, then aliases, then disabled entries.
    pub fn from_config(config: &FormatsConfig) -> Result<Self, RegistryError> {
        let mut builder = Self::new();
        if config.legacy_names {
            for (name, format) in LEGACY_NAMES {
                builder.alias(name, format.name())?;
            }
        }
        for (name, target) in &config.aliases {
            builder.alias(name, target)?;
        }
        for name in &config.disabled {
            builder.disable(name)?;
        }
        Ok(builder)
    }

    /// Binds `name` to `validator`, replacing any existing binding,
    /// built-ins included.
    pub fn register<V>(&mut self, name: impl Into<String>, validator: V) -> Result<&mut Self, RegistryError>
    where
        V: FormatValidator + 'static,
    {
        self.bind(name.into(), Validator::Custom(Arc::new(validator)))
    }

    /// Binds `name` to whatever `target` currently resolves to.
    pub fn alias(&mut self, name: impl Into<String>, target: &str) -> Result<&mut Self, RegistryError> {
        let validator = self
            .bindings
            .resolve(target)
            .ok_or_else(|| RegistryError::UnknownFormat(target.to_string()))?;
        self.bind(name.into(), validator)
    }

    /// Removes every binding for `name`.
    pub fn disable(&mut self, name: &str) -> Result<&mut Self, RegistryError> {
        let removed_custom = self.bindings.custom.remove(name).is_some();
        let removed_builtin = Format::from_name(name)
            .map_or(false, |format| self.bindings.builtins.remove(&format));
        if !removed_custom && !removed_builtin {
            return Err(RegistryError::UnknownFormat(name.to_string()));
        }
        tracing::debug!(format = %name, "disabled format");
        Ok(self)
    }

    fn bind(&mut self, name: String, validator: Validator) -> Result<&mut Self, RegistryError> {
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if self.bindings.resolve(&name).is_some() {
            tracing::debug!(format = %name, "replacing existing format binding");
        } else {
            tracing::debug!(format = %name, ?validator, "registered format");
        }
        self.bindings.custom.insert(name, validator);
        Ok(self)
    }

    /// Freezes the bindings.
    pub fn build(self) -> FormatRegistry {
        tracing::debug!(
            builtins = self.bindings.builtins.len(),
            custom = self.bindings.custom.len(),
            "format registry built"
        );
        FormatRegistry {
            bindings: self.bindings,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable mapping from format name to [`Validator`].
///
/// Obtain one from [`RegistryBuilder::build`] or [`FormatRegistry::builtin`].
#[derive(Clone)]
pub struct FormatRegistry {
    bindings: Bindings,
}

impl FormatRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Process-wide registry holding only the built-in formats
    pub fn builtin() -> &'static FormatRegistry {
        &BUILTIN
    }

    /// Resolves a format name. Matching is exact and case-sensitive.
    pub fn lookup(&self, name: &str) -> Option<Validator> {
        self.bindings.resolve(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Checks `value` against the named format. Unknown formats yield `false`;
    /// whether that is an error is for the caller to decide.
    pub fn validate(&self, name: &str, value: &str) -> bool {
        match self.lookup(name) {
            Some(validator) => validator.is_valid(value),
            None => {
                tracing::trace!(format = %name, "unknown format");
                false
            }
        }
    }

    /// Checks a JSON instance against the named format.
    ///
    /// Formats only constrain strings, so any other value passes.
    pub fn validate_value(&self, name: &str, value: &Value) -> bool {
        match value {
            Value::String(s) => self.validate(name, s),
            _ => true,
        }
    }

    /// All bound names, sorted
    pub fn names(&self) -> Vec<&str> {
        self.bindings.names().into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.bindings.names().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.builtins.is_empty() && self.bindings.custom.is_empty()
    }

    /// Starts a new setup phase from these bindings. The registry itself
    /// is left untouched.
    pub fn to_builder(&self) -> RegistryBuilder {
        RegistryBuilder {
            bindings: self.bindings.clone(),
        }
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        RegistryBuilder::new().build()
    }
}

impl fmt::Debug for FormatRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatRegistry")
            .field("names", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn always(_: &str) -> bool {
        true
    }

    #[test]
    fn test_builtins_resolve_through_enum() {
        let registry = RegistryBuilder::new().build();
        let validator = registry.lookup("date").unwrap();
        assert_eq!(validator.builtin(), Some(Format::Date));
        assert!(registry.bindings.custom.is_empty());
        assert_eq!(registry.len(), Format::ALL.len());
    }

    #[test]
    fn test_override_shadows_builtin() {
        let mut builder = RegistryBuilder::new();
        builder.register("date", always).unwrap();
        let registry = builder.build();
        assert!(registry.validate("date", "not a date"));
        assert_eq!(registry.len(), Format::ALL.len());
    }

    #[test]
    fn test_disable_removes_override_and_builtin() {
        let mut builder = RegistryBuilder::new();
        builder.register("date", always).unwrap();
        builder.disable("date").unwrap();
        let registry = builder.build();
        assert!(registry.lookup("date").is_none());
        assert!(!registry.validate("date", "2020-01-01"));
    }

    #[test]
    fn test_disable_unknown() {
        let mut builder = RegistryBuilder::empty();
        assert_eq!(
            builder.disable("date").err(),
            Some(RegistryError::UnknownFormat("date".to_string()))
        );
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut builder = RegistryBuilder::new();
        assert_eq!(builder.register("", always).err(), Some(RegistryError::EmptyName));
        assert_eq!(builder.alias("", "date").err(), Some(RegistryError::EmptyName));
    }

    #[test]
    fn test_legacy_names() {
        let config = FormatsConfig {
            legacy_names: true,
            ..FormatsConfig::default()
        };
        let registry = RegistryBuilder::from_config(&config).unwrap().build();
        assert!(registry.validate("ip-address", "127.0.0.1"));
        assert!(registry.validate("host-name", "example.com"));
        assert_eq!(registry.lookup("ip-address").unwrap().builtin(), Some(Format::Ipv4));
    }

    #[test]
    fn test_debug_output() {
        let mut builder = RegistryBuilder::empty();
        builder.register("custom", always).unwrap();
        builder.alias("when", "custom").unwrap();
        let registry = builder.build();
        assert_eq!(format!("{registry:?}"), r#"FormatRegistry { names: ["custom", "when"] }"#);
        assert_eq!(format!("{:?}", Validator::from(Format::Ipv6)), r#"Builtin("ipv6")"#);
    }
}
