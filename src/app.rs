use crate::calendar::{Agenda, Board, DatePicker, Toolbar, PICKER_HEIGHT};
use crate::dates::OutOfTimeError;
use crate::event::Event;
use crate::help::Help;
use crate::jumpto::{JumpTo, JumpToInput, JumpToOutput, JumpToState};
use crate::selection::{Selection, ViewMode};
use crate::theme::{BASE_STYLE, GRID_STYLE};
use crossterm::event::{read, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect},
    widgets::{Block, Borders, StatefulWidget, Widget},
    Terminal,
};
use std::io::{self, Write};
use time::Date;

/// Columns taken up by the sidebar holding the date picker and agenda,
/// including its border
const SIDEBAR_WIDTH: u16 = 34;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App {
    events: Vec<Event>,
    selection: Selection,
    today: Date,
    state: AppState,
}

impl App {
    pub(crate) fn new(events: Vec<Event>, selection: Selection, today: Date) -> App {
        App {
            events,
            selection,
            today,
            state: AppState::Calendar,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.handle_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Some(KeyEvent {
            code, modifiers, ..
        }) = read()?.as_key_press_event()
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match &mut self.state {
            AppState::Calendar => match key {
                KeyCode::Char('h') | KeyCode::Left => self.navigate(|sel| sel.select_offset(-1)),
                KeyCode::Char('l') | KeyCode::Right => self.navigate(|sel| sel.select_offset(1)),
                KeyCode::Char('k') | KeyCode::Up => self.navigate(|sel| sel.select_offset(-7)),
                KeyCode::Char('j') | KeyCode::Down => self.navigate(|sel| sel.select_offset(7)),
                KeyCode::Char('p') | KeyCode::PageUp => self.navigate(Selection::page_backwards),
                KeyCode::Char('n') | KeyCode::PageDown => self.navigate(Selection::page_forwards),
                KeyCode::Char('m') => {
                    self.selection.set_view_mode(ViewMode::Month);
                    true
                }
                KeyCode::Char('w') => {
                    self.selection.set_view_mode(ViewMode::Week);
                    true
                }
                KeyCode::Tab => {
                    self.selection
                        .set_view_mode(self.selection.view_mode().toggled());
                    true
                }
                KeyCode::Char('0') | KeyCode::Home => {
                    self.selection.select(self.today);
                    true
                }
                KeyCode::Char('g') => {
                    self.state = AppState::Jumping(JumpToState::new());
                    true
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    true
                }
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Calendar;
                true
            }
            AppState::Jumping(state) => {
                if matches!(key, KeyCode::Char('q' | 'g') | KeyCode::Esc) {
                    self.state = AppState::Calendar;
                    true
                } else {
                    let output = match key {
                        KeyCode::Char('-') => state.handle_input(JumpToInput::Negative),
                        KeyCode::Char('+') => state.handle_input(JumpToInput::Positive),
                        KeyCode::Char(c @ '0'..='9') => match c.to_digit(10).map(u8::try_from) {
                            Some(Ok(d)) => state.handle_input(JumpToInput::Digit(d)),
                            _ => JumpToOutput::Invalid,
                        },
                        KeyCode::Backspace | KeyCode::Delete => {
                            state.handle_input(JumpToInput::Backspace)
                        }
                        KeyCode::Enter => state.handle_input(JumpToInput::Enter),
                        _ => JumpToOutput::Invalid,
                    };
                    match output {
                        JumpToOutput::Ok => true,
                        JumpToOutput::Invalid => false,
                        JumpToOutput::Jump(date) => {
                            self.state = AppState::Calendar;
                            log::debug!("jumping to {date}");
                            self.selection.select(date);
                            true
                        }
                    }
                }
            }
            AppState::Quitting => false,
        }
    }

    fn navigate<F>(&mut self, func: F) -> bool
    where
        F: FnOnce(&mut Selection) -> Result<(), OutOfTimeError>,
    {
        match func(&mut self.selection) {
            Ok(()) => true,
            Err(e) => {
                log::warn!(
                    "cannot move selection from {}: {e}",
                    self.selection.selected()
                );
                false
            }
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        let [sidebar_area, main_area] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Fill(1)])
                .areas(area);
        let sidebar = Block::new()
            .borders(Borders::RIGHT)
            .border_style(GRID_STYLE);
        let inner = sidebar.inner(sidebar_area);
        sidebar.render(sidebar_area, buf);
        let [picker_area, _, agenda_area] = Layout::vertical([
            Constraint::Length(PICKER_HEIGHT),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(inner.inner(Margin::new(1, 0)));
        DatePicker::new(&self.events, &self.selection, self.today).render(picker_area, buf);
        Agenda::new(&self.events, self.selection.selected()).render(agenda_area, buf);

        let [toolbar_area, _, board_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(main_area.inner(Margin::new(1, 0)));
        Toolbar::new(&self.selection).render(toolbar_area, buf);
        Board::new(&self.events, &self.selection, self.today).render(board_area, buf);

        if self.state == AppState::Helping {
            Help(BASE_STYLE).render(area, buf);
        } else if let AppState::Jumping(ref mut state) = self.state {
            JumpTo.render(area, buf, state);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Calendar,
    Helping,
    Jumping(JumpToState),
    Quitting,
}
