use super::weekday_abbrev;
use crate::event::Event;
use crate::resolver::events_on;
use crate::theme::{event_marker_style, BASE_STYLE, EMPTY_STYLE, GRID_STYLE, TITLE_STYLE};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Paragraph, Widget},
};
use time::Date;

/// The events of a single day, listed under the date
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Agenda<'a> {
    events: &'a [Event],
    date: Date,
}

impl<'a> Agenda<'a> {
    pub(crate) fn new(events: &'a [Event], date: Date) -> Self {
        Agenda { events, date }
    }

    fn heading(&self) -> String {
        format!(
            "{:04}.{:02}.{:02} ({})",
            self.date.year(),
            u8::from(self.date.month()),
            self.date.day(),
            weekday_abbrev(self.date.weekday())
        )
    }
}

impl Widget for Agenda<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![Line::styled(self.heading(), TITLE_STYLE)];
        let events = events_on(self.events, self.date);
        if events.is_empty() {
            lines.push(Line::styled("No events.", EMPTY_STYLE));
        }
        for ev in events {
            lines.push(Line::from_iter([
                Span::styled("● ", event_marker_style(ev.color)),
                Span::styled(ev.title.as_str(), BASE_STYLE),
            ]));
            let mut details = ev.tags.iter().map(|t| format!("#{t}")).collect::<Vec<_>>();
            if let Some((done, total)) = ev.progress() {
                details.push(format!("{done}/{total} done"));
            }
            if !details.is_empty() {
                lines.push(Line::styled(format!("  {}", details.join(" ")), GRID_STYLE));
            }
        }
        Paragraph::new(Text::from(lines))
            .style(BASE_STYLE)
            .render(area, buf);
    }
}
