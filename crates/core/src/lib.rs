//! Tooltime Core - tool rental pricing.
//!
//! This crate turns a tool checkout (tool, rental length, discount and
//! checkout date) into a rental agreement: due date, chargeable days under
//! the tool type's weekday/weekend/holiday billing policy, and the
//! pre-discount, discount and final charges in cents.

pub mod constants;
pub mod errors;
pub mod holidays;
pub mod rentals;
pub mod tools;
pub mod utils;

pub use holidays::{Holiday, HolidayRule};
pub use rentals::{
    Checkout, CheckoutError, NewCheckout, RentalAgreement, RentalService, RentalServiceTrait,
    RentalSummary,
};
pub use tools::{BillingPolicy, CatalogError, Tool, ToolCatalog, ToolType};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
