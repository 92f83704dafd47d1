//! Matching events to calendar days.
//!
//! Everything here is a pure function of its arguments.  The event slice is
//! only ever borrowed, and results preserve the slice's order.

use crate::dates::{add_days, first_of_month, same_month, OutOfTimeError, Week, WeekdayExt};
use crate::event::Event;
use time::{Date, Weekday};

/// Returns `true` if `event` occupies `date`.
///
/// An event without an end date occupies only its start date.  An event with
/// an end date occupies every day from its start up to, but not including,
/// its end.
pub(crate) fn is_active_on(event: &Event, date: Date) -> bool {
    match event.end {
        None => date == event.start,
        Some(end) => match end.previous_day() {
            Some(last) => (event.start..=last).contains(&date),
            None => false,
        },
    }
}

/// Returns `true` if `event` is active on `date` and started on an earlier
/// day
pub(crate) fn is_continuation(event: &Event, date: Date) -> bool {
    date != event.start && is_active_on(event, date)
}

pub(crate) fn events_on(events: &[Event], date: Date) -> Vec<&Event> {
    events.iter().filter(|ev| is_active_on(ev, date)).collect()
}

/// Returns the seven days of the week containing `date`, beginning on
/// `week_start`
pub(crate) fn week_of(date: Date, week_start: Weekday) -> Result<Week, OutOfTimeError> {
    let offset = date.weekday().index_from(week_start);
    let first = add_days(date, -i64::from(offset))?;
    Week::starting(first)
}

pub(crate) fn events_by_day_of_week(
    events: &[Event],
    date: Date,
    week_start: Weekday,
) -> Result<Vec<(Date, Vec<&Event>)>, OutOfTimeError> {
    Ok(week_of(date, week_start)?
        .into_iter()
        .map(|d| (d, events_on(events, d)))
        .collect())
}

/// Returns the weeks needed to show every day of `date`'s month, each
/// beginning on `week_start`
pub(crate) fn month_weeks(date: Date, week_start: Weekday) -> Result<Vec<Week>, OutOfTimeError> {
    let first = first_of_month(date);
    let mut week = week_of(first, week_start)?;
    let mut weeks = vec![week];
    while let Some(d) = week.last().next_day() {
        if !same_month(d, first) {
            break;
        }
        week = week.next()?;
        weeks.push(week);
    }
    Ok(weeks)
}
