use ratatui::style::Color;
use std::collections::BTreeSet;
use time::{macros::date, Date};

pub(crate) const DEFAULT_EVENT_COLOR: Color = Color::Gray;

/// A dated calendar entry.  An event with no `end` occupies only its `start`
/// day; otherwise it occupies `[start, end)`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Event {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) start: Date,
    pub(crate) end: Option<Date>,
    pub(crate) color: Color,
    pub(crate) tags: BTreeSet<String>,
    pub(crate) subtasks: Vec<Subtask>,
}

impl Event {
    pub(crate) fn new<I: Into<String>, T: Into<String>>(id: I, title: T, start: Date) -> Event {
        Event {
            id: id.into(),
            title: title.into(),
            start,
            end: None,
            color: DEFAULT_EVENT_COLOR,
            tags: BTreeSet::new(),
            subtasks: Vec::new(),
        }
    }

    pub(crate) fn until(mut self, end: Date) -> Self {
        self.end = Some(end);
        self
    }

    pub(crate) fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub(crate) fn tag<S: Into<String>>(mut self, tag: S) -> Self {
        self.tags.insert(tag.into());
        self
    }

    pub(crate) fn subtask(mut self, subtask: Subtask) -> Self {
        self.subtasks.push(subtask);
        self
    }

    /// Returns `(done, total)` for the event's subtasks, or `None` if it has
    /// none
    pub(crate) fn progress(&self) -> Option<(usize, usize)> {
        if self.subtasks.is_empty() {
            None
        } else {
            let done = self.subtasks.iter().filter(|st| st.done).count();
            Some((done, self.subtasks.len()))
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Subtask {
    pub(crate) id: String,
    pub(crate) label: String,
    pub(crate) done: bool,
}

impl Subtask {
    pub(crate) fn new<I: Into<String>, L: Into<String>>(id: I, label: L, done: bool) -> Subtask {
        Subtask {
            id: id.into(),
            label: label.into(),
            done,
        }
    }
}

/// Events shown when no events file is given
pub(crate) fn demo_events() -> Vec<Event> {
    vec![
        Event::new("scelerisque", "Scelerisque mauris", date!(2025 - 05 - 05))
            .color(Color::Rgb(0x5c, 0xca, 0xc2)),
        Event::new(
            "convallis",
            "Convallis egestas in aliquet",
            date!(2025 - 05 - 05),
        )
        .until(date!(2025 - 05 - 08))
        .color(Color::Rgb(0xa9, 0xaf, 0xb7))
        .tag("work")
        .subtask(Subtask::new("draft", "Draft agenda", true))
        .subtask(Subtask::new("book", "Book room", false)),
        Event::new("fringilla", "Fringilla arcu donec", date!(2025 - 05 - 15))
            .color(Color::Rgb(0xf1, 0x72, 0x6a)),
        Event::new(
            "turpis-venenatis",
            "Turpis venenatis bibendum",
            date!(2025 - 05 - 18),
        )
        .color(Color::Rgb(0x2d, 0x34, 0x36)),
        Event::new("nibh", "Nibh", date!(2025 - 05 - 23)).color(Color::Rgb(0x81, 0xec, 0xec)),
    ]
}
