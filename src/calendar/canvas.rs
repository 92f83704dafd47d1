use ratatui::{buffer::Buffer, layout::Rect, style::Style};

pub(super) const ACS_HLINE: char = '─';

/// Draws text at coordinates relative to an area, clipping anything that
/// would fall outside of it
#[derive(Debug, Eq, PartialEq)]
pub(super) struct BufferCanvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl<'a> BufferCanvas<'a> {
    pub(super) fn new(area: Rect, buf: &'a mut Buffer) -> Self {
        Self { area, buf }
    }

    pub(super) fn mvprint<S: AsRef<str>>(&mut self, y: u16, x: u16, s: S, style: Style) {
        self.mvprintn(y, x, s, u16::MAX, style);
    }

    /// Like `mvprint()`, but draws at most `width` columns
    pub(super) fn mvprintn<S: AsRef<str>>(
        &mut self,
        y: u16,
        x: u16,
        s: S,
        width: u16,
        style: Style,
    ) {
        if y < self.area.height && x < self.area.width {
            let width = width.min(self.area.width - x);
            self.buf.set_stringn(
                x + self.area.x,
                y + self.area.y,
                s,
                usize::from(width),
                style,
            );
        }
    }

    /// Fills `width` columns starting at (`y`, `x`) with blanks in `style`
    /// and then draws `s` on top
    pub(super) fn mvfill<S: AsRef<str>>(&mut self, y: u16, x: u16, s: S, width: u16, style: Style) {
        self.mvprintn(y, x, " ".repeat(usize::from(width)), width, style);
        self.mvprintn(y, x, s, width, style);
    }

    pub(super) fn hline(&mut self, y: u16, x: u16, ch: char, length: u16) {
        let line = String::from(ch).repeat(length.into());
        self.mvprintn(y, x, line, length, Style::new());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::buffer_lines;

    #[test]
    fn test_clipping() {
        let area = Rect::new(2, 1, 6, 2);
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 4));
        let mut canvas = BufferCanvas::new(area, &mut buf);
        canvas.mvprint(0, 1, "abcdefghij", Style::new());
        canvas.mvprint(1, 0, "xy", Style::new());
        canvas.mvprint(2, 0, "never", Style::new());
        canvas.mvprint(0, 6, "never", Style::new());
        canvas.hline(1, 3, ACS_HLINE, 10);
        assert_eq!(
            buffer_lines(&buf),
            ["          ", "   abcde  ", "  xy ───  ", "          "]
        );
    }

    #[test]
    fn test_mvfill() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 8, 1));
        let mut canvas = BufferCanvas::new(buf.area, &mut buf);
        canvas.mvfill(0, 1, "ab", 4, Style::new());
        canvas.mvfill(0, 5, "toolong", 2, Style::new());
        assert_eq!(buffer_lines(&buf), [" ab  to "]);
    }
}
