//! Minor determination
//!
//! A subject is a minor when aged 16 or 17 at the date of consent. Younger
//! subjects are not enrolled at all, and a guardian is required for minors.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Youngest completed age counted as a minor
pub const MINOR_MIN_AGE: i32 = 16;

/// Oldest completed age counted as a minor
pub const MINOR_MAX_AGE: i32 = 17;

/// Age in completed years at a reference date.
///
/// Negative when the reference date is before the date of birth.
#[must_use]
pub fn age_in_years(dob: NaiveDate, reference_date: NaiveDate) -> i32 {
    let years = reference_date.year() - dob.year();
    // Birthday not yet reached in the reference year
    if reference_date.month() < dob.month()
        || (reference_date.month() == dob.month() && reference_date.day() < dob.day())
    {
        years - 1
    } else {
        years
    }
}

/// Whether the subject is a minor at the given consent timestamp.
///
/// Only the calendar date of the timestamp is used.
#[must_use]
pub fn is_minor(dob: NaiveDate, reference_datetime: DateTime<Utc>) -> bool {
    let age = age_in_years(dob, reference_datetime.date_naive());
    (MINOR_MIN_AGE..=MINOR_MAX_AGE).contains(&age)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 23, 59, 59).unwrap()
    }

    #[test]
    fn test_age_calculation() {
        let dob = date(1980, 6, 15);
        assert_eq!(age_in_years(dob, date(2020, 6, 15)), 40);
        assert_eq!(age_in_years(dob, date(2020, 6, 14)), 39);
        assert_eq!(age_in_years(dob, date(2020, 6, 16)), 40);
        assert_eq!(age_in_years(dob, date(1979, 1, 1)), -2);
    }

    #[test]
    fn test_leap_day_birthday() {
        let dob = date(2000, 2, 29);
        assert_eq!(age_in_years(dob, date(2016, 2, 28)), 15);
        assert_eq!(age_in_years(dob, date(2016, 2, 29)), 16);
        assert_eq!(age_in_years(dob, date(2017, 2, 28)), 16);
        assert_eq!(age_in_years(dob, date(2017, 3, 1)), 17);
    }

    #[test]
    fn test_minor_boundaries() {
        let dob = date(2000, 5, 10);
        // Day before 16th birthday
        assert!(!is_minor(dob, at(2016, 5, 9)));
        // 16th birthday
        assert!(is_minor(dob, at(2016, 5, 10)));
        // Day before 18th birthday
        assert!(is_minor(dob, at(2018, 5, 9)));
        // 18th birthday
        assert!(!is_minor(dob, at(2018, 5, 10)));
    }

    #[test]
    fn test_ages_outside_range() {
        let dob = date(1986, 1, 1);
        assert!(!is_minor(dob, at(2016, 10, 17)));
        assert!(!is_minor(date(2010, 1, 1), at(2016, 10, 17)));
        assert!(!is_minor(date(2020, 1, 1), at(2016, 10, 17)));
    }

    #[test]
    fn test_all_ages_around_range() {
        let reference = at(2016, 10, 17);
        for age in 0..=40 {
            let dob = date(2016 - age, 10, 17);
            assert_eq!(is_minor(dob, reference), age == 16 || age == 17, "age {age}");
        }
    }
}
