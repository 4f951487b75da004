//! Shared clock and due-date arithmetic.
//!
//! Borrow-assignment and overdue-defaulting must compute "today" through the
//! same routine, so both live here.

use chrono::{Duration, Local, NaiveDate};

/// Current date on the local system clock.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Due date `days` days from today.
pub fn due_in_days(days: i64) -> NaiveDate {
    today() + Duration::days(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_due_in_days_counts_from_today() {
        assert_eq!(due_in_days(0), today());
        assert_eq!(due_in_days(14), today() + Duration::days(14));
    }
}
