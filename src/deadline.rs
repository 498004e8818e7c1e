//! Notice-posting deadline for the monthly county tax sale.
//!
//! Sales happen on the first Tuesday of each month and every notice of sale
//! must be posted 21 days before that.

use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};

const NOTICE_DAYS: i64 = 21;

/// First Tuesday of the month containing `date`.
pub fn first_tuesday(date: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(date.year(), date.month(), Weekday::Tue, 1)
}

/// Last day to post a notice for the next sale that can still make it.
pub fn notice_deadline(today: NaiveDate) -> Option<NaiveDate> {
    let month_start = today.with_day(1)?;
    let deadline_for = |months_ahead: u32| -> Option<NaiveDate> {
        let sale = first_tuesday(month_start.checked_add_months(Months::new(months_ahead))?)?;
        sale.checked_sub_signed(Duration::days(NOTICE_DAYS))
    };

    let next = deadline_for(1)?;
    if today > next {
        deadline_for(2)
    } else {
        Some(next)
    }
}

pub fn describe(deadline: NaiveDate) -> String {
    format!(
        "Dallas County listing deadline for next auction = {}",
        deadline.format("%Y-%m-%d, %A")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn first_tuesday_of_month() {
        assert_eq!(first_tuesday(date(2026, 11, 20)), Some(date(2026, 11, 3)));
        assert_eq!(first_tuesday(date(2026, 12, 1)), Some(date(2026, 12, 1)));
    }

    #[test]
    fn deadline_before_next_months_sale() {
        // Sale on Tue 2026-11-03, deadline three weeks earlier.
        assert_eq!(notice_deadline(date(2026, 10, 1)), Some(date(2026, 10, 13)));
        assert_eq!(notice_deadline(date(2026, 10, 13)), Some(date(2026, 10, 13)));
    }

    #[test]
    fn rolls_over_once_deadline_has_passed() {
        // Next sale Tue 2026-12-01, deadline Tue 2026-11-10.
        assert_eq!(notice_deadline(date(2026, 10, 16)), Some(date(2026, 11, 10)));
    }

    #[test]
    fn crosses_year_boundary() {
        // Sale on Tue 2027-01-05, deadline 2026-12-15.
        assert_eq!(notice_deadline(date(2026, 12, 2)), Some(date(2026, 12, 15)));
    }

    #[test]
    fn describe_includes_weekday() {
        assert_eq!(
            describe(date(2026, 10, 13)),
            "Dallas County listing deadline for next auction = 2026-10-13, Tuesday"
        );
    }
}
