//! Application state and keyboard handling.
//!
//! # Responsibility
//! - Own the view mode, month cursor, detail selection and identity edit
//!   session.
//! - Translate key presses into state transitions; rendering lives in
//!   `ui`.
//!
//! # Invariants
//! - `cursor_day` always names a real day of the visible month.
//! - The edit modal and the detail panel capture input before the view
//!   underneath them.

use crossterm::event::{KeyCode, KeyEvent};
use kalender_core::{CalendarEvent, IdentityRepository, IdentityService, MonthWindow};
use log::error;

/// Top-level view state; switched only by explicit user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Landing,
    Calendar,
}

/// Focusable fields of the identity edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Name,
    Address,
    LogoUrl,
}

impl EditField {
    fn next(self) -> Self {
        match self {
            Self::Name => Self::Address,
            Self::Address => Self::LogoUrl,
            Self::LogoUrl => Self::Name,
        }
    }
}

/// Mutable application state shared between event handling and rendering.
pub struct App<R: IdentityRepository> {
    pub view: View,
    pub window: MonthWindow,
    pub cursor_day: u32,
    pub detail: Option<CalendarEvent>,
    pub identity: IdentityService<R>,
    pub edit_field: EditField,
    pub should_quit: bool,
}

impl<R: IdentityRepository> App<R> {
    pub fn new(identity: IdentityService<R>) -> Self {
        Self {
            view: View::Landing,
            window: MonthWindow::default(),
            cursor_day: 1,
            detail: None,
            identity,
            edit_field: EditField::Name,
            should_quit: false,
        }
    }

    /// Event (if any) that applies to a day of the visible month.
    pub fn event_for(&self, day: u32) -> Option<CalendarEvent> {
        kalender_core::resolve(self.window.year(), self.window.month_index(), day)
    }

    /// Event under the day cursor.
    pub fn event_under_cursor(&self) -> Option<CalendarEvent> {
        self.event_for(self.cursor_day)
    }

    /// Routes one key press to the active layer.
    pub fn on_key(&mut self, key: KeyEvent) {
        if self.identity.is_editing() {
            self.on_edit_key(key);
            return;
        }

        if self.detail.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                self.detail = None;
            }
            return;
        }

        match self.view {
            View::Landing => self.on_landing_key(key),
            View::Calendar => self.on_calendar_key(key),
        }
    }

    fn on_landing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Enter | KeyCode::Char('c') => self.view = View::Calendar,
            KeyCode::Char('e') => self.open_edit(),
            _ => {}
        }
    }

    fn on_calendar_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('b') | KeyCode::Esc => self.view = View::Landing,
            KeyCode::Char('e') => self.open_edit(),
            KeyCode::Char('[') | KeyCode::PageUp => self.step_month_back(),
            KeyCode::Char(']') | KeyCode::PageDown => self.step_month_forward(),
            KeyCode::Left => self.move_cursor(-1),
            KeyCode::Right => self.move_cursor(1),
            KeyCode::Up => self.move_cursor(-7),
            KeyCode::Down => self.move_cursor(7),
            KeyCode::Enter => self.detail = self.event_under_cursor(),
            _ => {}
        }
    }

    fn on_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.identity.cancel_edit(),
            KeyCode::Tab | KeyCode::Down => self.edit_field = self.edit_field.next(),
            KeyCode::Enter => {
                if let Err(err) = self.identity.commit_edit() {
                    // Keep the session open; the user can retry or cancel.
                    error!("event=identity_commit module=tui status=error error={err}");
                }
            }
            KeyCode::Backspace => self.edit_pop(),
            KeyCode::Char(c) => self.edit_push(c),
            _ => {}
        }
    }

    fn open_edit(&mut self) {
        self.edit_field = EditField::Name;
        self.identity.begin_edit();
    }

    fn step_month_back(&mut self) {
        if self.window.step_back() {
            self.clamp_cursor();
        }
    }

    fn step_month_forward(&mut self) {
        if self.window.step_forward() {
            self.clamp_cursor();
        }
    }

    fn move_cursor(&mut self, delta: i64) {
        let days = i64::from(self.window.days());
        if days == 0 {
            return;
        }
        let moved = (i64::from(self.cursor_day) + delta).clamp(1, days);
        self.cursor_day = moved as u32;
    }

    fn clamp_cursor(&mut self) {
        let days = self.window.days().max(1);
        self.cursor_day = self.cursor_day.min(days);
    }

    fn edit_push(&mut self, c: char) {
        let field = self.edit_field;
        let Some(draft) = self.identity.draft_mut() else {
            return;
        };
        match field {
            EditField::Name => draft.name.push(c),
            EditField::Address => draft.address.push(c),
            EditField::LogoUrl => draft.logo_url.get_or_insert_with(String::new).push(c),
        }
    }

    fn edit_pop(&mut self) {
        let field = self.edit_field;
        let Some(draft) = self.identity.draft_mut() else {
            return;
        };
        match field {
            EditField::Name => {
                draft.name.pop();
            }
            EditField::Address => {
                draft.address.pop();
            }
            EditField::LogoUrl => {
                if let Some(url) = draft.logo_url.as_mut() {
                    url.pop();
                    if url.is_empty() {
                        draft.logo_url = None;
                    }
                }
            }
        }
    }
}
