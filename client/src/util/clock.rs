//! Wall-clock helpers.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use time::OffsetDateTime;

/// Current calendar year in UTC.
///
/// Server and browser both read UTC so the hydrated footer matches the
/// server-rendered one.
pub fn current_year() -> i32 {
    OffsetDateTime::now_utc().year()
}
