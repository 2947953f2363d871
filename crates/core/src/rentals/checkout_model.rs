//! Checkout domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_DISCOUNT_PERCENT, MIN_RENTAL_DAYS};
use crate::tools::Tool;
use crate::utils::time_utils::add_days;

use super::rentals_errors::CheckoutError;

/// A validated tool checkout.
///
/// Holds a tool, a rental length of at least one day, a discount between 0
/// and 100 percent and the day the tool left the store. Values are never
/// clamped: anything out of range is rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Checkout {
    tool: Tool,
    rental_days: i32,
    discount_percent: i32,
    checkout_date: NaiveDate,
}

impl Checkout {
    pub fn new(
        tool: Tool,
        rental_days: i32,
        discount_percent: i32,
        checkout_date: NaiveDate,
    ) -> Result<Self, CheckoutError> {
        Self::from_parts(Some(tool), rental_days, discount_percent, Some(checkout_date))
    }

    /// Builds a checkout from parts that may be missing.
    ///
    /// Checks run in a fixed order (tool, date, rental days, discount) and
    /// the first failure is returned.
    pub fn from_parts(
        tool: Option<Tool>,
        rental_days: i32,
        discount_percent: i32,
        checkout_date: Option<NaiveDate>,
    ) -> Result<Self, CheckoutError> {
        let tool = tool.ok_or(CheckoutError::InvalidTool)?;
        let checkout_date = checkout_date.ok_or(CheckoutError::InvalidDate)?;

        if rental_days < MIN_RENTAL_DAYS {
            return Err(CheckoutError::InvalidRentalDuration(rental_days));
        }
        if !(0..=MAX_DISCOUNT_PERCENT).contains(&discount_percent) {
            return Err(CheckoutError::InvalidDiscount(discount_percent));
        }
        if add_days(checkout_date, (rental_days - 1) as u64).is_none() {
            return Err(CheckoutError::RentalPeriodOutOfRange(rental_days));
        }

        Ok(Checkout {
            tool,
            rental_days,
            discount_percent,
            checkout_date,
        })
    }

    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    pub fn rental_days(&self) -> i32 {
        self.rental_days
    }

    pub fn discount_percent(&self) -> i32 {
        self.discount_percent
    }

    pub fn checkout_date(&self) -> NaiveDate {
        self.checkout_date
    }
}

/// Input model for requesting a checkout by tool code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCheckout {
    pub tool_code: Option<String>,
    pub rental_days: i32,
    pub discount_percent: i32,
    pub checkout_date: Option<NaiveDate>,
}
