//! Setup-time errors
//!
//! Validators never fail; they return `false`. These errors only come from
//! building a registry.

/// Errors raised while assembling a [`FormatRegistry`](crate::FormatRegistry)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("unknown format: {0}")]
    UnknownFormat(String),
    #[error("format name must not be empty")]
    EmptyName,
}
