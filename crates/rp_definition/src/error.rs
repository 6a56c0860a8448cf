use thiserror::Error;

// -----------------------------------------------------------------------------
// Error

/// Errors raised while constructing a [`Definition`](crate::Definition).
///
/// Options are never validated; only the property name can be rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DefinitionError {
    #[error("property definition requires a non-empty name")]
    EmptyName,
}
