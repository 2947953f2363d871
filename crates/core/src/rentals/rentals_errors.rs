//! Checkout validation errors.

use thiserror::Error;

/// Reasons a checkout cannot be created.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("A checkout may not omit the tool.")]
    InvalidTool,

    #[error("A checkout may not omit the checkout date.")]
    InvalidDate,

    #[error("A tool must be rented for at least one day.")]
    InvalidRentalDuration(i32),

    #[error("A rental of {0} days would end past the last supported calendar date.")]
    RentalPeriodOutOfRange(i32),

    #[error("{}", invalid_discount_message(*.0))]
    InvalidDiscount(i32),
}

fn invalid_discount_message(percent: i32) -> &'static str {
    if percent < 0 {
        "A negative rental discount is not allowed."
    } else {
        "A discount greater than 100% is not allowed."
    }
}
