use crate::theme::BASE_STYLE;
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Margin, Rect},
    widgets::{Clear, Widget},
};

/// Blanks a `width` by `height` box centered in `area`, along with a
/// one-cell margin around it, and returns the box
pub(crate) fn popup(area: Rect, buf: &mut Buffer, width: u16, height: u16) -> Rect {
    let columns = Layout::horizontal([width.saturating_add(2)]).flex(Flex::Center);
    let rows = Layout::vertical([height.saturating_add(2)]).flex(Flex::Center);
    let [outer] = columns.areas(area);
    let [outer] = rows.areas(outer);
    Clear.render(outer, buf);
    buf.set_style(outer, BASE_STYLE);
    outer.inner(Margin::new(1, 1))
}
