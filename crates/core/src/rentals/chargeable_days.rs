use chrono::NaiveDate;
use log::debug;

use crate::holidays::Holiday;
use crate::tools::ToolType;
use crate::utils::time_utils::{days_between, is_weekend};

/// Counts the days in `[start, end]` (both inclusive) that `tool_type` is billed for.
///
/// Holidays are located relative to `reference_date` (the next observed
/// occurrence on or after it), not relative to each day in the range. When
/// the tool type is free on holidays, an observed holiday is never billed,
/// even if its weekday would otherwise be chargeable.
pub fn count_chargeable_days(
    start: NaiveDate,
    end: NaiveDate,
    tool_type: ToolType,
    reference_date: NaiveDate,
) -> u32 {
    let policy = tool_type.billing_policy();

    let free_holidays: Vec<NaiveDate> = if policy.charges_holidays {
        Vec::new()
    } else {
        Holiday::ALL
            .iter()
            .filter_map(|holiday| {
                let observed = holiday.next_observed(reference_date)?;
                debug!("{} observed on {}", holiday.description(), observed);
                Some(observed)
            })
            .collect()
    };

    let count = days_between(start, end)
        .filter(|day| !free_holidays.contains(day))
        .filter(|&day| {
            if is_weekend(day) {
                policy.charges_weekends
            } else {
                policy.charges_weekdays
            }
        })
        .count() as u32;

    debug!(
        "{} chargeable days for {} between {} and {}",
        count,
        tool_type.description(),
        start,
        end
    );
    count
}
