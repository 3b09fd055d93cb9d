use chrono::{Datelike, NaiveDate};

/// Returns true when `date` falls inside the inclusive window.
/// An absent bound imposes no restriction on that side.
pub fn in_window(date: NaiveDate, start: Option<NaiveDate>, end: Option<NaiveDate>) -> bool {
    if let Some(start) = start {
        if date < start {
            return false;
        }
    }
    if let Some(end) = end {
        if date > end {
            return false;
        }
    }
    true
}

/// Returns true when `date` falls in the same calendar month as `reference`.
pub fn same_month(date: NaiveDate, reference: NaiveDate) -> bool {
    date.year() == reference.year() && date.month() == reference.month()
}

/// Whole days from `from` until `to`, floored at zero for past dates.
pub fn days_until(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days().max(0)
}
