//! Holidays module - observed-date rules for the holidays rentals are not billed on.

mod holidays_model;

pub use holidays_model::{Holiday, HolidayRule};
