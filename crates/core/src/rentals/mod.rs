//! Rentals module - checkouts, chargeable days, pricing and rental agreements.

mod chargeable_days;
mod checkout_model;
pub mod pricing;
mod rental_agreement;
mod rentals_errors;
mod rentals_service;
mod rentals_traits;
mod report;


pub use chargeable_days::count_chargeable_days;
pub use checkout_model::{Checkout, NewCheckout};
pub use rental_agreement::RentalAgreement;
pub use rentals_errors::CheckoutError;
pub use rentals_service::RentalService;
pub use rentals_traits::RentalServiceTrait;
pub use report::{render_report, RentalSummary};
