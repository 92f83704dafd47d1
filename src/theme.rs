use ratatui::style::{Color, Modifier, Style};

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub(crate) const TITLE_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const WEEKDAY_STYLE: Style = BASE_STYLE.fg(Color::Gray).add_modifier(Modifier::BOLD);

/// Days shown on the board or picker that belong to a neighboring month
pub(crate) const OUTSIDE_MONTH_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

pub(crate) const TODAY_STYLE: Style = BASE_STYLE
    .fg(Color::LightYellow)
    .add_modifier(Modifier::BOLD);

pub(crate) const SELECTED_STYLE: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Cyan)
    .add_modifier(Modifier::BOLD);

pub(crate) const GRID_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

pub(crate) const MORE_STYLE: Style = BASE_STYLE.fg(Color::Gray).add_modifier(Modifier::ITALIC);

pub(crate) const EMPTY_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

pub(crate) const ACTIVE_TOGGLE_STYLE: Style = SELECTED_STYLE;

pub(crate) mod jumpto {
    use super::*;

    pub(crate) const UNFILLED_CELL_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

    pub(crate) const READY_ENTER_STYLE: Style = BASE_STYLE.add_modifier(Modifier::UNDERLINED);
}

/// Style for an event chip drawn in the event's color, with text that stays
/// readable against it
pub(crate) fn event_style(color: Color) -> Style {
    let fg = match color {
        Color::Rgb(r, g, b) => {
            let luma = u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114;
            if luma >= 140_000 {
                Color::Black
            } else {
                Color::White
            }
        }
        Color::Reset
        | Color::Black
        | Color::Red
        | Color::Blue
        | Color::Magenta
        | Color::DarkGray => Color::White,
        _ => Color::Black,
    };
    Style::new().fg(fg).bg(color)
}

/// Style for a bullet or marker drawn in the event's color on the base
/// background
pub(crate) fn event_marker_style(color: Color) -> Style {
    BASE_STYLE.fg(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_style_contrast() {
        assert_eq!(event_style(Color::Rgb(0x5c, 0xca, 0xc2)).fg, Some(Color::Black));
        assert_eq!(event_style(Color::Rgb(0x2d, 0x34, 0x36)).fg, Some(Color::White));
        assert_eq!(event_style(Color::Blue).fg, Some(Color::White));
        assert_eq!(event_style(Color::Gray).fg, Some(Color::Black));
        assert_eq!(event_style(Color::Gray).bg, Some(Color::Gray));
    }
}
