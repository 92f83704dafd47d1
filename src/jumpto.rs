use crate::popup::popup;
use crate::theme::{
    jumpto::{READY_ENTER_STYLE, UNFILLED_CELL_STYLE},
    BASE_STYLE,
};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, StatefulWidget, Widget},
};
use time::{Date, Month};

/// Number of digits in a full date: four for the year, two for the month,
/// and two for the day
const DIGITS: usize = 8;

/// What each unfilled digit position shows
const PLACEHOLDER: &str = "YYYYMMDD";

const PROMPT_WIDTH: u16 = 15;
const PROMPT_HEIGHT: u16 = 6;

/// A small box prompting for a date to jump to
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct JumpTo;

impl StatefulWidget for JumpTo {
    type State = JumpToState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut JumpToState) {
        let prompt_area = popup(area, buf, PROMPT_WIDTH, PROMPT_HEIGHT);
        let enter_style = if state.is_complete() {
            READY_ENTER_STYLE
        } else {
            BASE_STYLE
        };
        let block = Block::bordered()
            .title(" Jump To… ")
            .title_alignment(Alignment::Center);
        Paragraph::new(vec![
            Line::default(),
            state.entry_line(),
            Line::default(),
            Line::from(Span::styled("[ENTER]", enter_style)),
        ])
        .centered()
        .block(block)
        .style(BASE_STYLE)
        .render(prompt_area, buf);
    }
}

/// Digits typed so far into the jump-to prompt, filled in from the left
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct JumpToState {
    negative: bool,
    digits: [Option<u8>; DIGITS],
    filled: usize,
}

impl JumpToState {
    pub(crate) fn new() -> JumpToState {
        JumpToState::default()
    }

    fn is_complete(&self) -> bool {
        self.filled == DIGITS
    }

    /// The typed date as `-YYYY-MM-DD`, with placeholders for missing digits
    fn entry_line(&self) -> Line<'static> {
        let sign = if self.negative { "-" } else { " " };
        let mut spans = vec![Span::raw(sign)];
        for (pos, digit) in self.digits.iter().enumerate() {
            if matches!(pos, 4 | 6) {
                spans.push(Span::raw("-"));
            }
            spans.push(match digit {
                Some(d) => Span::raw(d.to_string()),
                None => Span::styled(&PLACEHOLDER[pos..=pos], UNFILLED_CELL_STYLE),
            });
        }
        Line::from(spans)
    }

    pub(crate) fn handle_input(&mut self, input: JumpToInput) -> JumpToOutput {
        match input {
            JumpToInput::Negative if self.filled == 0 => {
                self.negative = !self.negative;
                JumpToOutput::Ok
            }
            JumpToInput::Positive if self.filled == 0 => {
                self.negative = false;
                JumpToOutput::Ok
            }
            JumpToInput::Digit(d) if d < 10 && !self.is_complete() => {
                self.digits[self.filled] = Some(d);
                self.filled += 1;
                JumpToOutput::Ok
            }
            JumpToInput::Backspace if self.filled > 0 => {
                self.filled -= 1;
                self.digits[self.filled] = None;
                JumpToOutput::Ok
            }
            JumpToInput::Enter if self.is_complete() => match self.to_date() {
                Some(date) => JumpToOutput::Jump(date),
                None => JumpToOutput::Invalid,
            },
            _ => JumpToOutput::Invalid,
        }
    }

    fn to_date(self) -> Option<Date> {
        let mut year = i32::from(digits_value(&self.digits[..4])?);
        if self.negative {
            year = -year;
        }
        let month = u8::try_from(digits_value(&self.digits[4..6])?).ok()?;
        let month = Month::try_from(month).ok()?;
        let day = u8::try_from(digits_value(&self.digits[6..])?).ok()?;
        Date::from_calendar_date(year, month, day).ok()
    }
}

fn digits_value(digits: &[Option<u8>]) -> Option<u16> {
    digits
        .iter()
        .try_fold(0u16, |acc, d| Some(acc * 10 + u16::from((*d)?)))
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum JumpToInput {
    Negative,
    Positive,
    Digit(u8),
    Backspace,
    Enter,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum JumpToOutput {
    Ok,
    Invalid,
    Jump(Date),
}
