//! Tool catalog error types.

use thiserror::Error;

/// Errors raised while registering or looking up tools.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A tool was registered without a code.
    #[error("Tool code may not be empty.")]
    EmptyToolCode,

    /// A tool was registered with a code the catalog already holds.
    #[error("Tool code `{0}` is already in use.")]
    DuplicateToolCode(String),

    /// A lookup named a code the catalog does not hold.
    #[error("Tool code `{0}` is not in the catalog.")]
    UnknownToolCode(String),
}
