use std::fmt;

use chrono::NaiveDate;

use crate::tools::ToolType;

use super::checkout_model::Checkout;
use super::pricing;
use super::report::{render_report, RentalSummary};

/// The agreement produced by a checkout.
///
/// Owns nothing but the checkout it was created from; every figure below is
/// recomputed from it on each call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentalAgreement {
    checkout: Checkout,
}

impl RentalAgreement {
    pub fn new(checkout: Checkout) -> Self {
        RentalAgreement { checkout }
    }

    pub fn checkout(&self) -> &Checkout {
        &self.checkout
    }

    pub fn tool_code(&self) -> &str {
        self.checkout.tool().code()
    }

    pub fn tool_type(&self) -> ToolType {
        self.checkout.tool().tool_type()
    }

    pub fn tool_brand(&self) -> &str {
        self.checkout.tool().brand()
    }

    pub fn rental_days(&self) -> i32 {
        self.checkout.rental_days()
    }

    pub fn checkout_date(&self) -> NaiveDate {
        self.checkout.checkout_date()
    }

    pub fn due_date(&self) -> NaiveDate {
        pricing::due_date(&self.checkout)
    }

    /// Daily rental charge in cents.
    pub fn daily_rental_charge(&self) -> i64 {
        pricing::daily_charge(&self.checkout)
    }

    /// Days from checkout through due date that are billed.
    pub fn chargeable_days(&self) -> u32 {
        pricing::chargeable_days(&self.checkout)
    }

    /// Chargeable days times the daily charge, in cents.
    pub fn pre_discount_charge(&self) -> i64 {
        pricing::pre_discount_charge(&self.checkout)
    }

    pub fn discount_percent(&self) -> i32 {
        self.checkout.discount_percent()
    }

    /// Discount in cents.
    pub fn discount_amount(&self) -> i64 {
        pricing::discount_amount(&self.checkout)
    }

    /// Amount owed in cents, after discount.
    pub fn final_charge(&self) -> i64 {
        pricing::final_charge(&self.checkout)
    }

    /// All figures of the agreement as a serializable record.
    pub fn summary(&self) -> RentalSummary {
        RentalSummary::from(self)
    }

    /// The printable agreement report.
    pub fn report(&self) -> String {
        render_report(self)
    }
}

impl fmt::Display for RentalAgreement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.report())
    }
}

impl From<Checkout> for RentalAgreement {
    fn from(checkout: Checkout) -> Self {
        RentalAgreement::new(checkout)
    }
}
