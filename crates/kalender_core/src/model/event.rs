//! Calendar event domain model.
//!
//! # Responsibility
//! - Define the canonical schedule-event record shared by catalog and
//!   resolver.
//! - Provide date-range containment used by resolution.
//!
//! # Invariants
//! - `start_date <= end_date` (inclusive range).
//! - `category` is a closed enumeration; `style` is an opaque display
//!   token with no behavioral meaning.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Opaque display token (color classification) carried through to the UI.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type StyleToken = String;

/// Closed category set for schedule events.
///
/// The source data used ad-hoc Indonesian tags (mandiri/sekolah/libur/
/// kembali/weekend); they map 1:1 onto these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventCategory {
    /// Pembelajaran mandiri at home / place of worship / community.
    IndependentStudy,
    /// Pembelajaran di satuan pendidikan (regular effective days).
    InSchool,
    /// Libur bersama Idulfitri.
    Holiday,
    /// Masuk kembali, first day back at school.
    ReturnToSchool,
    /// Saturday/Sunday annotation, explicit or synthesized.
    Weekend,
}

impl EventCategory {
    /// Stable wire/display tag for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::IndependentStudy => "independent-study",
            Self::InSchool => "in-school",
            Self::Holiday => "holiday",
            Self::ReturnToSchool => "return-to-school",
            Self::Weekend => "weekend",
        }
    }
}

/// Validation failure for an event record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventValidationError {
    /// `end_date` precedes `start_date`.
    ReversedRange { start: NaiveDate, end: NaiveDate },
    /// `id` is empty, so the record has no stable identity.
    EmptyId,
}

impl Display for EventValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReversedRange { start, end } => {
                write!(f, "end_date ({end}) must be >= start_date ({start})")
            }
            Self::EmptyId => write!(f, "event id must not be empty"),
        }
    }
}

impl Error for EventValidationError {}

/// One schedule event: an inclusive calendar-date range plus display
/// metadata.
///
/// Serialized field names mirror the persisted/wire shape of the source
/// data (`startDate`, `endDate`, `type`, `color`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Stable identifier, unique within the catalog. Synthetic events
    /// derive theirs deterministically from the date.
    pub id: String,
    /// First day the event applies to (inclusive).
    #[serde(rename = "startDate")]
    pub start_date: NaiveDate,
    /// Last day the event applies to (inclusive, >= `start_date`).
    #[serde(rename = "endDate")]
    pub end_date: NaiveDate,
    /// Short display label.
    pub title: String,
    /// Explanatory text shown in the detail panel.
    pub description: String,
    /// Closed category classification.
    #[serde(rename = "type")]
    pub category: EventCategory,
    /// Display-only color token, carried through unchanged.
    #[serde(rename = "color")]
    pub style: StyleToken,
}

impl CalendarEvent {
    /// Returns whether `date` falls inside the inclusive range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Returns whether the event spans more than one day.
    pub fn is_multi_day(&self) -> bool {
        self.start_date != self.end_date
    }

    /// Checks record-level invariants.
    ///
    /// # Errors
    /// - `ReversedRange` when `end_date < start_date`.
    /// - `EmptyId` when the identifier is empty.
    pub fn validate(&self) -> Result<(), EventValidationError> {
        if self.id.is_empty() {
            return Err(EventValidationError::EmptyId);
        }
        if self.end_date < self.start_date {
            return Err(EventValidationError::ReversedRange {
                start: self.start_date,
                end: self.end_date,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{CalendarEvent, EventCategory, EventValidationError};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    fn sample(start: NaiveDate, end: NaiveDate) -> CalendarEvent {
        CalendarEvent {
            id: "sample".to_string(),
            start_date: start,
            end_date: end,
            title: "Sample".to_string(),
            description: "sample event".to_string(),
            category: EventCategory::InSchool,
            style: "emerald".to_string(),
        }
    }

    #[test]
    fn contains_is_inclusive_on_both_ends() {
        let event = sample(date(2026, 2, 18), date(2026, 2, 20));

        assert!(event.contains(date(2026, 2, 18)));
        assert!(event.contains(date(2026, 2, 19)));
        assert!(event.contains(date(2026, 2, 20)));
        assert!(!event.contains(date(2026, 2, 17)));
        assert!(!event.contains(date(2026, 2, 21)));
    }

    #[test]
    fn validate_rejects_reversed_range() {
        let event = sample(date(2026, 3, 2), date(2026, 3, 1));

        let err = event.validate().unwrap_err();
        assert_eq!(
            err,
            EventValidationError::ReversedRange {
                start: date(2026, 3, 2),
                end: date(2026, 3, 1),
            }
        );
    }

    #[test]
    fn validate_rejects_empty_id() {
        let mut event = sample(date(2026, 3, 1), date(2026, 3, 1));
        event.id.clear();

        assert_eq!(event.validate().unwrap_err(), EventValidationError::EmptyId);
    }

    #[test]
    fn serialization_uses_expected_wire_fields() {
        let event = sample(date(2026, 2, 18), date(2026, 2, 20));

        let json = serde_json::to_value(&event).expect("event serializes");
        assert_eq!(json["id"], "sample");
        assert_eq!(json["startDate"], "2026-02-18");
        assert_eq!(json["endDate"], "2026-02-20");
        assert_eq!(json["type"], "in-school");
        assert_eq!(json["color"], "emerald");

        let decoded: CalendarEvent = serde_json::from_value(json).expect("event decodes");
        assert_eq!(decoded, event);
    }
}
