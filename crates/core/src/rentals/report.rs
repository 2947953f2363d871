//! Rendering of rental agreements.

use std::fmt::Write;

use chrono::NaiveDate;
use serde::Serialize;

use crate::tools::ToolType;
use crate::utils::money_utils::format_cents;
use crate::utils::time_utils::format_report_date;

use super::rental_agreement::RentalAgreement;

/// Renders the fixed-format report printed for the customer.
///
/// Twelve labeled lines, each ending in a newline. Dates print as MM/DD/YY and
/// amounts as dollars.
pub fn render_report(agreement: &RentalAgreement) -> String {
    let lines = [
        ("Tool code", agreement.tool_code().to_string()),
        ("Tool type", agreement.tool_type().description().to_string()),
        ("Tool brand", agreement.tool_brand().to_string()),
        ("Rental days", agreement.rental_days().to_string()),
        ("Check out date", format_report_date(agreement.checkout_date())),
        ("Due date", format_report_date(agreement.due_date())),
        (
            "Daily rental charge",
            format_cents(agreement.daily_rental_charge()),
        ),
        ("Charge days", agreement.chargeable_days().to_string()),
        (
            "Pre-discount charge",
            format_cents(agreement.pre_discount_charge()),
        ),
        ("Discount percent", format!("{}%", agreement.discount_percent())),
        ("Discount amount", format_cents(agreement.discount_amount())),
        ("Final charge", format_cents(agreement.final_charge())),
    ];

    let mut report = String::new();
    for (label, value) in lines {
        // Writing to a String cannot fail
        let _ = writeln!(report, "{label}: {value}");
    }
    report
}

/// Machine-readable form of a rental agreement. Amounts are in cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalSummary {
    pub tool_code: String,
    pub tool_type: ToolType,
    pub tool_brand: String,
    pub rental_days: i32,
    pub checkout_date: NaiveDate,
    pub due_date: NaiveDate,
    pub daily_rental_charge: i64,
    pub charge_days: u32,
    pub pre_discount_charge: i64,
    pub discount_percent: i32,
    pub discount_amount: i64,
    pub final_charge: i64,
}

impl From<&RentalAgreement> for RentalSummary {
    fn from(agreement: &RentalAgreement) -> Self {
        let pre_discount_charge = agreement.pre_discount_charge();
        let discount_amount = agreement.discount_amount();
        RentalSummary {
            tool_code: agreement.tool_code().to_string(),
            tool_type: agreement.tool_type(),
            tool_brand: agreement.tool_brand().to_string(),
            rental_days: agreement.rental_days(),
            checkout_date: agreement.checkout_date(),
            due_date: agreement.due_date(),
            daily_rental_charge: agreement.daily_rental_charge(),
            charge_days: agreement.chargeable_days(),
            pre_discount_charge,
            discount_percent: agreement.discount_percent(),
            discount_amount,
            final_charge: pre_discount_charge - discount_amount,
        }
    }
}
