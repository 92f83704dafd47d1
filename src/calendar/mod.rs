mod agenda;
mod board;
mod canvas;
mod picker;
pub(crate) use self::agenda::Agenda;
pub(crate) use self::board::{Board, Toolbar};
pub(crate) use self::picker::{DatePicker, PICKER_HEIGHT};
use time::Weekday;

fn weekday_abbrev(wd: Weekday) -> &'static str {
    match wd {
        Weekday::Sunday => "Sun",
        Weekday::Monday => "Mon",
        Weekday::Tuesday => "Tue",
        Weekday::Wednesday => "Wed",
        Weekday::Thursday => "Thu",
        Weekday::Friday => "Fri",
        Weekday::Saturday => "Sat",
    }
}

/// Weekdays in display order for a week beginning on `week_start`
fn weekdays_from(week_start: Weekday) -> impl Iterator<Item = Weekday> {
    (0..7).map(move |i| week_start.nth_next(i))
}
