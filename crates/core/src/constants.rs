/// Currency symbol used when rendering amounts
pub const CURRENCY_SYMBOL: &str = "$";

/// Number of minor units (cents) per major unit, expressed as decimal places
pub const CURRENCY_MINOR_UNIT_DIGITS: u32 = 2;

/// Separator between thousands groups in rendered amounts
pub const THOUSANDS_SEPARATOR: char = ',';

/// Date format used in rental reports (MM/DD/YY)
pub const REPORT_DATE_FORMAT: &str = "%m/%d/%y";

/// Upper bound for a discount percentage
pub const MAX_DISCOUNT_PERCENT: i32 = 100;

/// Minimum length of a rental, in days
pub const MIN_RENTAL_DAYS: i32 = 1;
