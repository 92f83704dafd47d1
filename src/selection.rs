use crate::dates::{
    add_days, first_of_month, next_month_start, previous_month_start, same_month, OutOfTimeError,
    Week,
};
use crate::resolver::{month_weeks, week_of};
use time::{Date, Weekday};

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) enum ViewMode {
    #[default]
    Month,
    Week,
}

impl ViewMode {
    pub(crate) fn toggled(self) -> ViewMode {
        match self {
            ViewMode::Month => ViewMode::Week,
            ViewMode::Week => ViewMode::Month,
        }
    }
}

/// Which day is selected and which page of the calendar is on screen.
///
/// `visible` is the anchor date for the board: in month view the board shows
/// the anchor's month, and in week view it shows the week containing the
/// anchor.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Selection {
    selected: Date,
    visible: Date,
    view_mode: ViewMode,
    week_start: Weekday,
}

impl Selection {
    pub(crate) fn new(selected: Date, week_start: Weekday) -> Selection {
        Selection {
            selected,
            visible: selected,
            view_mode: ViewMode::default(),
            week_start,
        }
    }

    pub(crate) fn selected(&self) -> Date {
        self.selected
    }

    pub(crate) fn visible(&self) -> Date {
        self.visible
    }

    pub(crate) fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub(crate) fn week_start(&self) -> Weekday {
        self.week_start
    }

    pub(crate) fn select(&mut self, date: Date) {
        self.selected = date;
        let off_page = match self.view_mode {
            ViewMode::Month => !same_month(date, self.visible),
            ViewMode::Week => !same_month(date, self.visible) || !self.visible_week_contains(date),
        };
        if off_page {
            self.visible = date;
        }
    }

    /// Moves the selection by `days` days, which may be negative
    pub(crate) fn select_offset(&mut self, days: i64) -> Result<(), OutOfTimeError> {
        let date = add_days(self.selected, days)?;
        self.select(date);
        Ok(())
    }

    pub(crate) fn page_forwards(&mut self) -> Result<(), OutOfTimeError> {
        self.visible = match self.view_mode {
            ViewMode::Month => next_month_start(self.visible)?,
            ViewMode::Week => add_days(self.visible, 7)?,
        };
        Ok(())
    }

    pub(crate) fn page_backwards(&mut self) -> Result<(), OutOfTimeError> {
        self.visible = match self.view_mode {
            ViewMode::Month => previous_month_start(self.visible)?,
            ViewMode::Week => add_days(self.visible, -7)?,
        };
        Ok(())
    }

    pub(crate) fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// The weeks shown on the board for the current view mode
    pub(crate) fn visible_weeks(&self) -> Result<Vec<Week>, OutOfTimeError> {
        match self.view_mode {
            ViewMode::Month => month_weeks(self.visible, self.week_start),
            ViewMode::Week => Ok(vec![week_of(self.visible, self.week_start)?]),
        }
    }

    /// Caption for the board, e.g., "May 2025"
    pub(crate) fn title(&self) -> String {
        let anchor = match self.view_mode {
            ViewMode::Month => first_of_month(self.visible),
            ViewMode::Week => self.visible,
        };
        format!("{} {}", anchor.month(), anchor.year())
    }

    fn visible_week_contains(&self, date: Date) -> bool {
        week_of(self.visible, self.week_start).is_ok_and(|w| w.contains(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;
    use time::Weekday::*;

    #[test]
    fn test_select_within_month_keeps_page() {
        let mut sel = Selection::new(date!(2025 - 05 - 15), Sunday);
        sel.page_backwards().unwrap();
        sel.page_forwards().unwrap();
        assert_eq!(sel.visible(), date!(2025 - 05 - 01));
        sel.select(date!(2025 - 05 - 20));
        assert_eq!(sel.selected(), date!(2025 - 05 - 20));
        assert_eq!(sel.visible(), date!(2025 - 05 - 01));
    }

    #[test]
    fn test_select_other_month_moves_page() {
        let mut sel = Selection::new(date!(2025 - 05 - 15), Sunday);
        sel.select(date!(2025 - 06 - 02));
        assert_eq!(sel.selected(), date!(2025 - 06 - 02));
        assert_eq!(sel.visible(), date!(2025 - 06 - 02));
        assert_eq!(sel.title(), "June 2025");
    }

    #[test]
    fn test_paging_leaves_selection_alone() {
        let mut sel = Selection::new(date!(2025 - 05 - 15), Sunday);
        sel.page_forwards().unwrap();
        assert_eq!(sel.visible(), date!(2025 - 06 - 01));
        sel.page_forwards().unwrap();
        assert_eq!(sel.visible(), date!(2025 - 07 - 01));
        sel.page_backwards().unwrap();
        sel.page_backwards().unwrap();
        sel.page_backwards().unwrap();
        assert_eq!(sel.visible(), date!(2025 - 04 - 01));
        assert_eq!(sel.selected(), date!(2025 - 05 - 15));
    }

    #[test]
    fn test_month_paging_across_year() {
        let mut sel = Selection::new(date!(2025 - 12 - 31), Sunday);
        sel.page_forwards().unwrap();
        assert_eq!(sel.visible(), date!(2026 - 01 - 01));
        assert_eq!(sel.title(), "January 2026");
        sel.page_backwards().unwrap();
        sel.page_backwards().unwrap();
        assert_eq!(sel.visible(), date!(2025 - 11 - 01));
    }

    #[test]
    fn test_week_paging() {
        let mut sel = Selection::new(date!(2025 - 05 - 15), Sunday);
        sel.set_view_mode(ViewMode::Week);
        sel.page_forwards().unwrap();
        assert_eq!(sel.visible(), date!(2025 - 05 - 22));
        let weeks = sel.visible_weeks().unwrap();
        assert_eq!(weeks.len(), 1);
        assert_eq!(weeks[0].first(), date!(2025 - 05 - 18));
        sel.page_backwards().unwrap();
        sel.page_backwards().unwrap();
        assert_eq!(sel.visible(), date!(2025 - 05 - 08));
        assert_eq!(sel.selected(), date!(2025 - 05 - 15));
    }

    #[test]
    fn test_switching_view_keeps_selection() {
        let mut sel = Selection::new(date!(2025 - 05 - 15), Sunday);
        sel.set_view_mode(ViewMode::Week);
        assert_eq!(sel.view_mode(), ViewMode::Week);
        assert_eq!(sel.selected(), date!(2025 - 05 - 15));
        sel.set_view_mode(sel.view_mode().toggled());
        assert_eq!(sel.view_mode(), ViewMode::Month);
        assert_eq!(sel.selected(), date!(2025 - 05 - 15));
    }

    #[test]
    fn test_select_outside_visible_week_moves_page() {
        let mut sel = Selection::new(date!(2025 - 05 - 15), Sunday);
        sel.set_view_mode(ViewMode::Week);
        sel.select(date!(2025 - 05 - 17));
        assert_eq!(sel.visible(), date!(2025 - 05 - 15));
        sel.select(date!(2025 - 05 - 18));
        assert_eq!(sel.visible(), date!(2025 - 05 - 18));
    }

    #[test]
    fn test_select_offset() {
        let mut sel = Selection::new(date!(2025 - 05 - 31), Sunday);
        sel.select_offset(1).unwrap();
        assert_eq!(sel.selected(), date!(2025 - 06 - 01));
        assert_eq!(sel.visible(), date!(2025 - 06 - 01));
        sel.select_offset(-7).unwrap();
        assert_eq!(sel.selected(), date!(2025 - 05 - 25));
        assert_eq!(sel.visible(), date!(2025 - 05 - 25));
        let mut sel = Selection::new(Date::MAX, Sunday);
        assert_eq!(sel.select_offset(1), Err(OutOfTimeError));
        assert_eq!(sel.selected(), Date::MAX);
    }

    #[test]
    fn test_month_visible_weeks_follow_week_start() {
        let sel = Selection::new(date!(2025 - 05 - 15), Monday);
        let weeks = sel.visible_weeks().unwrap();
        assert_eq!(sel.week_start(), Monday);
        assert_eq!(weeks[0].first(), date!(2025 - 04 - 28));
        assert_eq!(weeks.last().unwrap().last(), date!(2025 - 06 - 01));
    }
}
