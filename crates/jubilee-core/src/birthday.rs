//! Birthday matching — pure calendar math, no I/O.
//!
//! Only month and day matter; the birth year is ignored so matching recurs
//! annually. Feb 29 birthdates are observed on Feb 28 in common years.

use chrono::{Datelike, NaiveDate};

/// The calendar day a birthdate is observed on in a given year.
/// Feb 29 falls back to Feb 28 when `year` has no leap day.
pub fn observed_on(year: i32, birthdate: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthdate.month(), birthdate.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
        .unwrap_or(birthdate)
}

/// True iff `today` is the day `birthdate` is observed this year.
pub fn is_due(today: NaiveDate, birthdate: NaiveDate) -> bool {
    observed_on(today.year(), birthdate) == today
}

/// First observed occurrence of the birthday strictly after `today`.
/// Drives sentinel expiry: a claim made today stays live until the user
/// becomes eligible again.
pub fn next_anniversary(today: NaiveDate, birthdate: NaiveDate) -> NaiveDate {
    let this_year = observed_on(today.year(), birthdate);
    if this_year > today {
        this_year
    } else {
        observed_on(today.year() + 1, birthdate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_due_on_month_day_match() {
        assert!(is_due(d(2026, 6, 21), d(1999, 6, 21)));
        assert!(!is_due(d(2026, 6, 22), d(1999, 6, 21)));
        assert!(!is_due(d(2026, 7, 21), d(1999, 6, 21)));
    }

    #[test]
    fn test_birth_year_is_ignored() {
        assert!(is_due(d(2026, 3, 2), d(1992, 3, 2)));
        assert!(is_due(d(2026, 3, 2), d(2026, 3, 2)));
    }

    #[test]
    fn test_leap_day_observed_feb_28_in_common_years() {
        let leapling = d(2000, 2, 29);
        assert!(is_due(d(2026, 2, 28), leapling));
        assert!(!is_due(d(2026, 3, 1), leapling));
        // In a leap year only the real day counts.
        assert!(is_due(d(2028, 2, 29), leapling));
        assert!(!is_due(d(2028, 2, 28), leapling));
    }

    #[test]
    fn test_next_anniversary_later_this_year() {
        assert_eq!(next_anniversary(d(2026, 1, 10), d(1999, 6, 21)), d(2026, 6, 21));
    }

    #[test]
    fn test_next_anniversary_rolls_to_next_year() {
        // On the birthday itself, the next occurrence is a year out.
        assert_eq!(next_anniversary(d(2026, 6, 21), d(1999, 6, 21)), d(2027, 6, 21));
        assert_eq!(next_anniversary(d(2026, 12, 31), d(1999, 6, 21)), d(2027, 6, 21));
    }

    #[test]
    fn test_next_anniversary_leapling() {
        let leapling = d(2000, 2, 29);
        // Claimed on the observed day in a common year: next is the real
        // leap day when one exists before the next fallback.
        assert_eq!(next_anniversary(d(2027, 2, 28), leapling), d(2028, 2, 29));
        assert_eq!(next_anniversary(d(2028, 2, 29), leapling), d(2029, 2, 28));
    }
}
