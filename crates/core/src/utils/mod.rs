//! Date iteration and money formatting helpers.

pub mod money_utils;
pub mod time_utils;
