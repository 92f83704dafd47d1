use super::canvas::{BufferCanvas, ACS_HLINE};
use super::{weekday_abbrev, weekdays_from};
use crate::dates::{same_month, Week, DAYS_IN_WEEK};
use crate::event::Event;
use crate::resolver::{events_by_day_of_week, events_on, is_continuation};
use crate::selection::{Selection, ViewMode};
use crate::theme::{
    event_style, ACTIVE_TOGGLE_STYLE, BASE_STYLE, GRID_STYLE, MORE_STYLE, OUTSIDE_MONTH_STYLE,
    SELECTED_STYLE, TITLE_STYLE, TODAY_STYLE, WEEKDAY_STYLE,
};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use time::Date;

/// Most events listed in one day of the month view; any beyond this are
/// summarized with a "+N more" line
const MAX_EVENT_ROWS: u16 = 3;

/// Number of lines taken up by the weekday header and its rule
const HEADER_LINES: u16 = 2;

/// Marker drawn before an event's title on days after its first
const CONTINUATION_MARK: &str = "…";

/// The large calendar: a month grid or a single week of day columns,
/// depending on the selection's view mode
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Board<'a> {
    events: &'a [Event],
    selection: &'a Selection,
    today: Date,
}

impl<'a> Board<'a> {
    pub(crate) fn new(events: &'a [Event], selection: &'a Selection, today: Date) -> Self {
        Board {
            events,
            selection,
            today,
        }
    }

    fn day_style(&self, date: Date) -> Style {
        if date == self.selection.selected() {
            SELECTED_STYLE
        } else if date == self.today {
            TODAY_STYLE
        } else if self.selection.view_mode() == ViewMode::Month
            && !same_month(date, self.selection.visible())
        {
            OUTSIDE_MONTH_STYLE
        } else {
            BASE_STYLE
        }
    }

    fn render_month(&self, weeks: &[Week], grid: &Grid, canvas: &mut BufferCanvas<'_>) {
        let rows = u16::try_from(weeks.len()).unwrap_or(u16::MAX);
        let row_height = (grid.height.saturating_sub(HEADER_LINES) / rows.max(1)).max(1);
        let slots = row_height.saturating_sub(1).min(MAX_EVENT_ROWS);
        let tops = (HEADER_LINES..).step_by(row_height.into());
        for (week, top) in weeks.iter().zip(tops) {
            for (date, x) in week.days().zip(grid.columns()) {
                let label = format!("{:>2}", date.day());
                canvas.mvprint(top, x, label, self.day_style(date));
                let events = events_on(self.events, date);
                let shown = if events.len() > usize::from(slots) {
                    slots.saturating_sub(1)
                } else {
                    slots
                };
                let mut y = top + 1;
                for ev in events.iter().take(shown.into()) {
                    draw_chip(canvas, y, x, grid.cell_width(), ev, date);
                    y += 1;
                }
                let more = events.len().saturating_sub(shown.into());
                if more > 0 && slots > 0 {
                    canvas.mvprintn(y, x, format!("+{more} more"), grid.cell_width(), MORE_STYLE);
                }
            }
        }
    }

    fn render_week(&self, grid: &Grid, canvas: &mut BufferCanvas<'_>) {
        let Ok(days) = events_by_day_of_week(
            self.events,
            self.selection.visible(),
            self.selection.week_start(),
        ) else {
            return;
        };
        let available = grid.height.saturating_sub(HEADER_LINES + 1);
        for ((date, events), x) in days.into_iter().zip(grid.columns()) {
            let label = format!("{:>2}", date.day());
            canvas.mvprint(HEADER_LINES, x, label, self.day_style(date));
            let too_many = events.len() > usize::from(available);
            let shown = if too_many {
                available.saturating_sub(1)
            } else {
                available
            };
            let mut y = HEADER_LINES + 1;
            for ev in events.iter().take(shown.into()) {
                draw_chip(canvas, y, x, grid.cell_width(), ev, date);
                y += 1;
            }
            if too_many && available > 0 {
                let more = events.len() - usize::from(shown);
                canvas.mvprintn(y, x, format!("+{more} more"), grid.cell_width(), MORE_STYLE);
            }
        }
    }
}

impl Widget for Board<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let grid = Grid::new(area);
        let mut canvas = BufferCanvas::new(area, buf);
        let weekdays = weekdays_from(self.selection.week_start());
        for (wd, x) in weekdays.zip(grid.columns()) {
            canvas.mvprint(0, x, weekday_abbrev(wd), WEEKDAY_STYLE);
        }
        canvas.hline(1, 0, ACS_HLINE, area.width);
        match self.selection.view_mode() {
            ViewMode::Month => {
                if let Ok(weeks) = self.selection.visible_weeks() {
                    self.render_month(&weeks, &grid, &mut canvas);
                }
            }
            ViewMode::Week => self.render_week(&grid, &mut canvas),
        }
    }
}

/// Column geometry for seven equally wide day columns
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Grid {
    column_width: u16,
    height: u16,
}

impl Grid {
    fn new(area: Rect) -> Grid {
        let days = u16::try_from(DAYS_IN_WEEK).unwrap_or(u16::MAX);
        Grid {
            column_width: (area.width / days).max(2),
            height: area.height,
        }
    }

    /// Left edges of the day columns
    fn columns(&self) -> impl Iterator<Item = u16> {
        let width = self.column_width;
        (0..7).map(move |i| i * width)
    }

    /// Usable width of a column, leaving one blank column as a gutter
    fn cell_width(&self) -> u16 {
        self.column_width - 1
    }
}

fn draw_chip(canvas: &mut BufferCanvas<'_>, y: u16, x: u16, width: u16, event: &Event, date: Date) {
    let text = if is_continuation(event, date) {
        format!("{CONTINUATION_MARK}{}", event.title)
    } else {
        event.title.clone()
    };
    canvas.mvfill(y, x, text, width, event_style(event.color));
}

/// The line above the board: the visible period with paging arrows on the
/// left and the month/week toggle on the right
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Toolbar<'a> {
    selection: &'a Selection,
}

impl<'a> Toolbar<'a> {
    pub(crate) fn new(selection: &'a Selection) -> Self {
        Toolbar { selection }
    }
}

impl Widget for Toolbar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = Layout::horizontal([Constraint::Fill(1), Constraint::Length(14)]);
        let [caption_area, toggle_area] = layout.areas(area);
        Paragraph::new(Line::from_iter([
            Span::styled("< ", GRID_STYLE),
            Span::styled(self.selection.title(), TITLE_STYLE),
            Span::styled(" >", GRID_STYLE),
        ]))
        .style(BASE_STYLE)
        .render(caption_area, buf);
        let mode = self.selection.view_mode();
        let toggle = |label: &'static str, m: ViewMode| {
            Span::styled(
                label,
                if m == mode {
                    ACTIVE_TOGGLE_STYLE
                } else {
                    BASE_STYLE
                },
            )
        };
        Paragraph::new(Line::from_iter([
            toggle(" Month ", ViewMode::Month),
            Span::styled(" ", BASE_STYLE),
            toggle(" Week ", ViewMode::Week),
        ]))
        .style(BASE_STYLE)
        .alignment(Alignment::Right)
        .render(toggle_area, buf);
    }
}
