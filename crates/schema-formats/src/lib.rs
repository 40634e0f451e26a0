//! Schema Formats
//!
//! Format assertions for JSON Schema validators: each built-in format is a
//! pure `&str -> bool` predicate for one external standard (RFC 3339 dates,
//! RFC 1123 hostnames, IP literals, RFC 3986 URIs, RFC 6570 URI templates,
//! RFC 6901 JSON pointers and more).
//!
//! Validators never panic or return errors. Anything malformed is `false`.
//!
//! ```
//! use schema_formats::FormatRegistry;
//!
//! let registry = FormatRegistry::builtin();
//! assert!(registry.validate("date-time", "1963-06-19T08:30:06.283185Z"));
//! assert!(!registry.validate("ipv4", "0x7f000001"));
//! assert!(!registry.validate("no-such-format", "anything"));
//! ```

pub mod config;
pub mod datetime;
pub mod error;
pub mod format;
pub mod host;
pub mod identifier;
pub mod ip;
pub mod pattern;
pub mod pointer;
pub mod registry;
pub mod template;
pub mod uri;

pub use config::{Config, FormatsConfig};
pub use error::RegistryError;
pub use format::Format;
pub use registry::{FormatRegistry, FormatValidator, RegistryBuilder, Validator};

// Re-export all validators
pub use datetime::*;
pub use host::*;
pub use identifier::*;
pub use ip::*;
pub use pattern::*;
pub use pointer::*;
pub use template::*;
pub use uri::*;
