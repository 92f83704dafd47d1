use crate::popup::popup;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::Text,
    widgets::{Block, Paragraph, Widget},
};

static TEXT: &[&str] = &[
    "h, LEFT         Select previous day",
    "l, RIGHT        Select next day",
    "k, UP           Select same day last week",
    "j, DOWN         Select same day next week",
    "p, PAGE UP      Show previous month/week",
    "n, PAGE DOWN    Show next month/week",
    "m               Month view",
    "w               Week view",
    "TAB             Toggle month/week view",
    "0, HOME         Select today",
    "g               Input date to jump to",
    "?               Show this help",
    "q, ESC          Quit",
    "",
    "Press the Any Key to dismiss.",
];

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Help(pub(crate) Style);

impl Widget for Help {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Text::from_iter(TEXT.iter().copied());
        let width = u16::try_from(text.width() + 2).unwrap_or(u16::MAX);
        let height = u16::try_from(text.height() + 2).unwrap_or(u16::MAX);
        let help_area = popup(area, buf, width, height);
        let block = Block::bordered()
            .title(" Commands ")
            .title_alignment(Alignment::Center);
        Paragraph::new(text)
            .block(block)
            .style(self.0)
            .render(help_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::buffer_lines;
    use crate::theme::BASE_STYLE;

    #[test]
    fn test_lists_every_command() {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        Help(BASE_STYLE).render(area, &mut buf);
        let screen = buffer_lines(&buf).join("\n");
        assert!(screen.contains(" Commands "));
        for line in TEXT.iter().filter(|s| !s.is_empty()) {
            assert!(screen.contains(line), "help should show {line:?}");
        }
    }
}
