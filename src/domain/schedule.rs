//! Upcoming-Sunday computation for press and status output.

use chrono::{Datelike, Duration, Local, NaiveDate};

/// The next Sunday strictly after `today`. If `today` is a Sunday the
/// result is the Sunday seven days out.
pub fn next_sunday(today: NaiveDate) -> NaiveDate {
    let days_ahead = match today.weekday().num_days_from_sunday() {
        0 => 7,
        n => 7 - n,
    };
    today + Duration::days(i64::from(days_ahead))
}

/// The next Sunday relative to the local date.
pub fn upcoming_sunday() -> NaiveDate {
    next_sunday(Local::now().date_naive())
}

/// Format as e.g. `Sunday, June 15, 2025`.
pub fn format_sunday(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}
