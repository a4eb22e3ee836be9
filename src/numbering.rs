//! Weekly issue numbers derived from the issue date.

use crate::config::{REFERENCE_DATE, REFERENCE_ISSUE};
use crate::dates;

/// Issue number for a display date, counted in whole weeks from the reference issue.
///
/// Weeks are floor-divided, so any date before the reference lands on a
/// lower number (a day earlier is already one issue earlier). Unparseable
/// text yields the reference issue.
pub fn issue_number(date_text: &str) -> i64 {
    match dates::parse(date_text) {
        Some(date) => {
            let days = (date - REFERENCE_DATE).num_days();
            REFERENCE_ISSUE + days.div_euclid(7)
        }
        None => REFERENCE_ISSUE,
    }
}
