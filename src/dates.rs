use std::iter::successors;
use thiserror::Error;
use time::{Date, Duration, Month, Weekday};

pub(crate) const DAYS_IN_WEEK: usize = 7;

pub(crate) trait WeekdayExt {
    /// Position of the weekday in a week beginning on `week_start`, from 0
    /// to 6
    fn index_from(&self, week_start: Weekday) -> u8;
}

impl WeekdayExt for Weekday {
    fn index_from(&self, week_start: Weekday) -> u8 {
        (self.number_days_from_sunday() + 7 - week_start.number_days_from_sunday()) % 7
    }
}

/// Converts a week-start number (0 = Sunday through 6 = Saturday) into a
/// `Weekday`
pub(crate) fn weekday_from_sunday(n: u8) -> Option<Weekday> {
    (n < 7).then(|| Weekday::Sunday.nth_next(n))
}

/// Seven consecutive dates
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Week([Date; DAYS_IN_WEEK]);

impl Week {
    /// Builds the week whose first day is `first`.  Fails if the week would
    /// extend past the last representable date.
    pub(crate) fn starting(first: Date) -> Result<Week, OutOfTimeError> {
        let mut iter = iter_days_from(first);
        let mut days = [first; DAYS_IN_WEEK];
        for slot in &mut days {
            *slot = iter.next().ok_or(OutOfTimeError)?;
        }
        Ok(Week(days))
    }

    pub(crate) fn first(&self) -> Date {
        self.0[0]
    }

    pub(crate) fn last(&self) -> Date {
        self.0[DAYS_IN_WEEK - 1]
    }

    pub(crate) fn contains(&self, date: Date) -> bool {
        (self.first()..=self.last()).contains(&date)
    }

    pub(crate) fn days(&self) -> impl Iterator<Item = Date> + '_ {
        self.0.iter().copied()
    }

    pub(crate) fn next(&self) -> Result<Week, OutOfTimeError> {
        let first = self.last().next_day().ok_or(OutOfTimeError)?;
        Week::starting(first)
    }
}

impl IntoIterator for Week {
    type Item = Date;
    type IntoIter = std::array::IntoIter<Date, DAYS_IN_WEEK>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("reached the end of time")]
pub(crate) struct OutOfTimeError;

pub(crate) fn first_of_month(date: Date) -> Date {
    Date::from_calendar_date(date.year(), date.month(), 1)
        .expect("the first of an existing date's month should be a valid date")
}

pub(crate) fn next_month_start(date: Date) -> Result<Date, OutOfTimeError> {
    let (year, month) = match date.month() {
        Month::December => (date.year() + 1, Month::January),
        m => (date.year(), m.next()),
    };
    Date::from_calendar_date(year, month, 1).map_err(|_| OutOfTimeError)
}

pub(crate) fn previous_month_start(date: Date) -> Result<Date, OutOfTimeError> {
    let (year, month) = match date.month() {
        Month::January => (date.year() - 1, Month::December),
        m => (date.year(), m.previous()),
    };
    Date::from_calendar_date(year, month, 1).map_err(|_| OutOfTimeError)
}

pub(crate) fn same_month(a: Date, b: Date) -> bool {
    (a.year(), a.month()) == (b.year(), b.month())
}

pub(crate) fn add_days(date: Date, days: i64) -> Result<Date, OutOfTimeError> {
    date.checked_add(Duration::days(days)).ok_or(OutOfTimeError)
}

fn iter_days_from(date: Date) -> impl Iterator<Item = Date> {
    successors(Some(date), |&d| d.next_day())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;
    use time::Weekday::*;

    #[test]
    fn test_index_from_sunday() {
        assert_eq!(Sunday.index_from(Sunday), 0);
        assert_eq!(Wednesday.index_from(Sunday), 3);
        assert_eq!(Saturday.index_from(Sunday), 6);
    }

    #[test]
    fn test_index_from_monday() {
        assert_eq!(Monday.index_from(Monday), 0);
        assert_eq!(Sunday.index_from(Monday), 6);
        assert_eq!(Saturday.index_from(Monday), 5);
    }

    #[test]
    fn test_weekday_from_sunday() {
        assert_eq!(weekday_from_sunday(0), Some(Sunday));
        assert_eq!(weekday_from_sunday(1), Some(Monday));
        assert_eq!(weekday_from_sunday(6), Some(Saturday));
        assert_eq!(weekday_from_sunday(7), None);
    }

    #[test]
    fn test_week_starting() {
        let week = Week::starting(date!(2025 - 12 - 28)).unwrap();
        assert_eq!(
            week.days().collect::<Vec<_>>(),
            [
                date!(2025 - 12 - 28),
                date!(2025 - 12 - 29),
                date!(2025 - 12 - 30),
                date!(2025 - 12 - 31),
                date!(2026 - 01 - 01),
                date!(2026 - 01 - 02),
                date!(2026 - 01 - 03),
            ]
        );
        assert!(week.contains(date!(2026 - 01 - 01)));
        assert!(!week.contains(date!(2026 - 01 - 04)));
        assert_eq!(week.next().unwrap().first(), date!(2026 - 01 - 04));
    }

    #[test]
    fn test_week_at_end_of_time() {
        assert_eq!(Week::starting(Date::MAX), Err(OutOfTimeError));
    }

    #[test]
    fn test_month_steps() {
        assert_eq!(first_of_month(date!(2025 - 05 - 15)), date!(2025 - 05 - 01));
        assert_eq!(
            next_month_start(date!(2025 - 12 - 31)),
            Ok(date!(2026 - 01 - 01))
        );
        assert_eq!(
            previous_month_start(date!(2025 - 01 - 31)),
            Ok(date!(2024 - 12 - 01))
        );
        assert_eq!(
            previous_month_start(date!(2025 - 03 - 31)),
            Ok(date!(2025 - 02 - 01))
        );
    }

    #[test]
    fn test_same_month() {
        assert!(same_month(date!(2025 - 05 - 01), date!(2025 - 05 - 31)));
        assert!(!same_month(date!(2025 - 05 - 31), date!(2025 - 06 - 01)));
        assert!(!same_month(date!(2024 - 05 - 01), date!(2025 - 05 - 01)));
    }

    #[test]
    fn test_add_days() {
        assert_eq!(add_days(date!(2025 - 05 - 15), -7), Ok(date!(2025 - 05 - 08)));
        assert_eq!(add_days(Date::MAX, 1), Err(OutOfTimeError));
    }
}
