//! Charge calculations for a checkout.
//!
//! Every figure is a pure function of the checkout; amounts are integer cents.

use chrono::NaiveDate;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::utils::money_utils::whole_cents;
use crate::utils::time_utils::add_days;

use super::chargeable_days::count_chargeable_days;
use super::checkout_model::Checkout;

/// The day the tool is due back. The checkout day is the first rental day.
pub fn due_date(checkout: &Checkout) -> NaiveDate {
    // Representability of the due date is checked when the checkout is built
    add_days(checkout.checkout_date(), (checkout.rental_days() - 1) as u64)
        .unwrap_or(NaiveDate::MAX)
}

pub fn chargeable_days(checkout: &Checkout) -> u32 {
    count_chargeable_days(
        checkout.checkout_date(),
        due_date(checkout),
        checkout.tool().tool_type(),
        checkout.checkout_date(),
    )
}

pub fn daily_charge(checkout: &Checkout) -> i64 {
    checkout.tool().tool_type().daily_charge_cents()
}

pub fn pre_discount_charge(checkout: &Checkout) -> i64 {
    i64::from(chargeable_days(checkout)) * daily_charge(checkout)
}

/// `percent` of `amount_cents`, computed exactly and cut down to whole cents.
///
/// A fractional cent of discount is never granted: 50% of 299 is 149.
pub fn discount_for(amount_cents: i64, percent: i32) -> i64 {
    let exact = Decimal::from(amount_cents) * Decimal::from(percent) / dec!(100);
    // Never larger in magnitude than amount_cents for percent <= 100
    whole_cents(exact).to_i64().unwrap_or(0)
}

pub fn discount_amount(checkout: &Checkout) -> i64 {
    discount_for(pre_discount_charge(checkout), checkout.discount_percent())
}

pub fn final_charge(checkout: &Checkout) -> i64 {
    pre_discount_charge(checkout) - discount_amount(checkout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::ToolCatalog;

    fn checkout(code: &str, days: i32, discount: i32, y: i32, m: u32, d: u32) -> Checkout {
        let catalog = ToolCatalog::standard();
        Checkout::new(
            catalog.get(code).unwrap().clone(),
            days,
            discount,
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_discount_half_cent_is_not_granted() {
        // 50% of 299 is 149.5
        assert_eq!(discount_for(299, 50), 149);
        assert_eq!(discount_for(1, 50), 0);
        assert_eq!(discount_for(3, 50), 1);
    }

    #[test]
    fn test_discount_fraction_is_dropped() {
        // 10% of 298 is 29.8, 25% of 447 is 111.75
        assert_eq!(discount_for(298, 10), 29);
        assert_eq!(discount_for(447, 25), 111);
        assert_eq!(discount_for(447, 1), 4);
        assert_eq!(discount_for(149, 33), 49);
    }

    #[test]
    fn test_discount_is_exact_where_binary_floats_drift() {
        // 0.29 * 100 and friends are inexact in f64
        assert_eq!(discount_for(100, 29), 29);
        assert_eq!(discount_for(100, 57), 57);
        assert_eq!(discount_for(1_000_000_000, 7), 70_000_000);
    }

    #[test]
    fn test_discount_bounds() {
        assert_eq!(discount_for(897, 0), 0);
        assert_eq!(discount_for(897, 100), 897);
        assert_eq!(discount_for(0, 75), 0);
    }

    #[test]
    fn test_due_date_counts_checkout_day() {
        let one_day = checkout("JAKR", 1, 0, 2015, 9, 3);
        assert_eq!(due_date(&one_day), one_day.checkout_date());

        let nine_days = checkout("JAKR", 9, 0, 2015, 7, 2);
        assert_eq!(
            due_date(&nine_days),
            NaiveDate::from_ymd_opt(2015, 7, 10).unwrap()
        );
    }

    #[test]
    fn test_figures_for_jackhammer_over_independence_day() {
        let c = checkout("JAKR", 9, 0, 2015, 7, 2);
        assert_eq!(chargeable_days(&c), 6);
        assert_eq!(daily_charge(&c), 299);
        assert_eq!(pre_discount_charge(&c), 1794);
        assert_eq!(discount_amount(&c), 0);
        assert_eq!(final_charge(&c), 1794);
    }

    #[test]
    fn test_figures_for_half_price_jackhammer() {
        let c = checkout("JAKR", 4, 50, 2020, 7, 2);
        assert_eq!(chargeable_days(&c), 1);
        assert_eq!(pre_discount_charge(&c), 299);
        assert_eq!(discount_amount(&c), 149);
        assert_eq!(final_charge(&c), 150);
    }
}
