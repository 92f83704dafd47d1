use super::canvas::BufferCanvas;
use super::{weekday_abbrev, weekdays_from};
use crate::dates::same_month;
use crate::event::Event;
use crate::resolver::{events_on, month_weeks};
use crate::selection::Selection;
use crate::theme::{
    BASE_STYLE, GRID_STYLE, SELECTED_STYLE, TITLE_STYLE, TODAY_STYLE, WEEKDAY_STYLE,
};
use ratatui::{buffer::Buffer, layout::Rect, style::Modifier, widgets::Widget};
use time::Date;

/// Columns per day: two for the number and one gutter
const DAY_WIDTH: u16 = 3;

/// Width needed to show a full week
const PICKER_WIDTH: u16 = DAY_WIDTH * 7 - 1;

/// Lines needed for the caption, the weekday header, and six weeks
pub(crate) const PICKER_HEIGHT: u16 = 8;

/// Width of "< YYYY.MM >"
const CAPTION_WIDTH: u16 = 11;

/// A compact month calendar for picking a date.  It always shows a whole
/// month: the visible month of the selection.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct DatePicker<'a> {
    events: &'a [Event],
    selection: &'a Selection,
    today: Date,
}

impl<'a> DatePicker<'a> {
    pub(crate) fn new(events: &'a [Event], selection: &'a Selection, today: Date) -> Self {
        DatePicker {
            events,
            selection,
            today,
        }
    }
}

impl Widget for DatePicker<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let visible = self.selection.visible();
        let Ok(weeks) = month_weeks(visible, self.selection.week_start()) else {
            return;
        };
        let left = area.width.saturating_sub(PICKER_WIDTH) / 2;
        let mut canvas = BufferCanvas::new(area, buf);
        let caption = format!("{:04}.{:02}", visible.year(), u8::from(visible.month()));
        let caption_x = left + (PICKER_WIDTH - CAPTION_WIDTH) / 2;
        canvas.mvprint(0, caption_x, "<", GRID_STYLE);
        canvas.mvprint(0, caption_x + 2, caption, TITLE_STYLE);
        canvas.mvprint(0, caption_x + 10, ">", GRID_STYLE);
        let weekdays = weekdays_from(self.selection.week_start());
        for (wd, x) in weekdays.zip((left..).step_by(3)) {
            canvas.mvprint(1, x, &weekday_abbrev(wd)[..2], WEEKDAY_STYLE);
        }
        for (week, y) in weeks.iter().zip(2..) {
            for (date, x) in week.days().zip((left..).step_by(3)) {
                if !same_month(date, visible) {
                    continue;
                }
                let mut style = if date == self.selection.selected() {
                    SELECTED_STYLE
                } else if date == self.today {
                    TODAY_STYLE
                } else {
                    BASE_STYLE
                };
                if !events_on(self.events, date).is_empty() {
                    style = style.add_modifier(Modifier::UNDERLINED);
                }
                canvas.mvprint(y, x, format!("{:>2}", date.day()), style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::demo_events;
    use crate::testutil::buffer_lines;
    use time::macros::date;
    use time::Weekday::{Monday, Sunday};

    fn render(picker: DatePicker<'_>) -> Buffer {
        let area = Rect::new(0, 0, PICKER_WIDTH, PICKER_HEIGHT);
        let mut buf = Buffer::empty(area);
        picker.render(area, &mut buf);
        buf
    }

    #[test]
    fn test_may_2025() {
        let events = demo_events();
        let sel = Selection::new(date!(2025 - 05 - 15), Sunday);
        let buf = render(DatePicker::new(&events, &sel, date!(2025 - 05 - 20)));
        assert_eq!(
            buffer_lines(&buf),
            [
                "    < 2025.05 >     ",
                "Su Mo Tu We Th Fr Sa",
                "             1  2  3",
                " 4  5  6  7  8  9 10",
                "11 12 13 14 15 16 17",
                "18 19 20 21 22 23 24",
                "25 26 27 28 29 30 31",
                "                    ",
            ]
        );
        let style_at = |x: u16, y: u16| buf[(x, y)].style();
        // the 15th is selected
        assert_eq!(style_at(12, 4).bg, SELECTED_STYLE.bg);
        // the 20th is today
        assert_eq!(style_at(7, 5).fg, TODAY_STYLE.fg);
        // the 5th has events, the 9th does not
        assert!(style_at(3, 3).add_modifier.contains(Modifier::UNDERLINED));
        assert!(!style_at(15, 3).add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_monday_start() {
        let sel = Selection::new(date!(2025 - 06 - 01), Monday);
        let buf = render(DatePicker::new(&[], &sel, date!(2025 - 05 - 20)));
        let lines = buffer_lines(&buf);
        assert_eq!(lines[0], "    < 2025.06 >     ");
        assert_eq!(lines[1], "Mo Tu We Th Fr Sa Su");
        assert_eq!(lines[2], "                   1");
        assert_eq!(lines[7], "30                  ");
    }
}
