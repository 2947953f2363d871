//! Core error types for the tooltime crate.
//!
//! Every failure in this crate is a construction-time validation failure:
//! once a `Checkout` exists, all figures derived from it are infallible.

use thiserror::Error;

use crate::rentals::CheckoutError;
use crate::tools::CatalogError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for rental pricing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Checkout rejected: {0}")]
    Checkout(#[from] CheckoutError),

    #[error("Tool catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_error_converts_into_root_error() {
        let err: Error = CheckoutError::InvalidDiscount(101).into();
        assert_eq!(err, Error::Checkout(CheckoutError::InvalidDiscount(101)));
        assert_eq!(
            err.to_string(),
            "Checkout rejected: A discount greater than 100% is not allowed."
        );
    }

    #[test]
    fn test_catalog_error_converts_into_root_error() {
        let err: Error = CatalogError::DuplicateToolCode("LADW".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Tool catalog error: Tool code `LADW` is already in use."
        );
    }
}
