//! Day-to-event resolution.
//!
//! # Responsibility
//! - Map one calendar day to the single schedule event that applies, or
//!   to nothing for a plain school day.
//!
//! # Invariants
//! - Resolution is pure: no side effects, no caching, stable results for
//!   a given catalog.
//! - Precedence is strict and short-circuiting: explicit catalog entry in
//!   declaration order, then the March good-habits weekend rule, then the
//!   generic weekend rule, then nothing.

use crate::catalog;
use crate::model::event::{CalendarEvent, EventCategory};
use chrono::{Datelike, NaiveDate, Weekday};

/// Zero-based month index of March, the month whose weekends synthesize
/// good-habits events instead of generic weekend ones.
pub const GOOD_HABITS_MONTH_INDEX: u32 = 2;

/// Resolves days against an arbitrary ordered catalog.
///
/// The free [`resolve`] function wraps this around the fixed default
/// catalog; tests use it with controlled mini-catalogs.
#[derive(Debug, Clone, Copy)]
pub struct DayResolver<'a> {
    catalog: &'a [CalendarEvent],
}

impl<'a> DayResolver<'a> {
    /// Creates a resolver over `catalog`; declaration order is the
    /// tie-break for overlapping entries.
    pub fn new(catalog: &'a [CalendarEvent]) -> Self {
        Self { catalog }
    }

    /// Resolves one day to at most one applicable event.
    ///
    /// `month_index` is zero-based (0 = January). Day values that do not
    /// form a real calendar date resolve to `None`; valid-day enumeration
    /// is the caller's contract.
    pub fn resolve(&self, year: i32, month_index: u32, day: u32) -> Option<CalendarEvent> {
        let date = NaiveDate::from_ymd_opt(year, month_index + 1, day)?;

        if let Some(event) = self.catalog.iter().find(|event| event.contains(date)) {
            return Some(event.clone());
        }

        let weekday = date.weekday();
        if !is_weekend(weekday) {
            return None;
        }

        if month_index == GOOD_HABITS_MONTH_INDEX {
            return Some(good_habits_event(date));
        }

        Some(weekend_event(date, weekday))
    }
}

/// Resolves one day against the fixed default catalog.
///
/// See [`DayResolver::resolve`] for the contract.
pub fn resolve(year: i32, month_index: u32, day: u32) -> Option<CalendarEvent> {
    DayResolver::new(catalog::events()).resolve(year, month_index, day)
}

/// Builds the synthetic good-habits weekend event for `date`.
///
/// Fresh record per call; the identifier is derived from the date so the
/// same day always yields the same id.
pub fn good_habits_event(date: NaiveDate) -> CalendarEvent {
    CalendarEvent {
        id: format!("march-weekend-{date}"),
        start_date: date,
        end_date: date,
        title: catalog::good_habits_title().to_string(),
        description: catalog::good_habits_description().to_string(),
        category: EventCategory::Weekend,
        style: "red".to_string(),
    }
}

/// Builds the synthetic generic weekend event for `date`.
///
/// The description names the weekend day (Sabtu vs Minggu). Fresh record
/// per call with a date-derived identifier.
pub fn weekend_event(date: NaiveDate, weekday: Weekday) -> CalendarEvent {
    let day_name = if weekday == Weekday::Sun {
        "Minggu"
    } else {
        "Sabtu"
    };

    CalendarEvent {
        id: format!("weekend-{date}"),
        start_date: date,
        end_date: date,
        title: catalog::weekend_title().to_string(),
        description: format!("Hari {day_name} adalah hari libur belajar di sekolah."),
        category: EventCategory::Weekend,
        style: "rose-muted".to_string(),
    }
}

fn is_weekend(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sat | Weekday::Sun)
}
