//! Fixed schedule-event catalog for Ramadan 1447H (2026).
//!
//! # Responsibility
//! - Hold the ordered list of explicitly declared events for the
//!   observance window.
//!
//! # Invariants
//! - Declaration order is the resolution tie-break: single-day overrides
//!   are listed before the broad ranges they overlap, and the resolver
//!   takes the first containing entry.
//! - The catalog is built once and never mutated at runtime.

use crate::model::event::{CalendarEvent, EventCategory};
use chrono::NaiveDate;
use once_cell::sync::Lazy;

const GOOD_HABITS_TITLE: &str = "Pembiasaan Baik";
const GOOD_HABITS_DESCRIPTION: &str =
    "pembiasaan baik yang di lakukan oleh siswa dengan bimbingan orang tua siswa di rumah";
const WEEKEND_TITLE: &str = "Libur Akhir Pekan";

static EVENTS: Lazy<Vec<CalendarEvent>> = Lazy::new(build_catalog);

/// Returns the catalog in declaration (= precedence) order.
pub fn events() -> &'static [CalendarEvent] {
    &EVENTS
}

/// Title used by explicit and synthetic good-habits entries.
pub fn good_habits_title() -> &'static str {
    GOOD_HABITS_TITLE
}

/// Description used by explicit and synthetic good-habits entries.
pub fn good_habits_description() -> &'static str {
    GOOD_HABITS_DESCRIPTION
}

/// Title used by explicit and synthetic weekend entries.
pub fn weekend_title() -> &'static str {
    WEEKEND_TITLE
}

fn build_catalog() -> Vec<CalendarEvent> {
    vec![
        single(
            "march-1",
            ymd(2026, 3, 1),
            GOOD_HABITS_TITLE,
            GOOD_HABITS_DESCRIPTION,
            EventCategory::Weekend,
            "red",
        ),
        single(
            "march-7",
            ymd(2026, 3, 7),
            GOOD_HABITS_TITLE,
            GOOD_HABITS_DESCRIPTION,
            EventCategory::Weekend,
            "red",
        ),
        single(
            "march-8",
            ymd(2026, 3, 8),
            GOOD_HABITS_TITLE,
            GOOD_HABITS_DESCRIPTION,
            EventCategory::Weekend,
            "red",
        ),
        ranged(
            "1",
            ymd(2026, 2, 18),
            ymd(2026, 2, 20),
            "Pembelajaran Mandiri",
            "Kegiatan pembelajaran dilaksanakan secara mandiri di lingkungan keluarga, \
             tempat ibadah, dan masyarakat (Hari Efektif).",
            EventCategory::IndependentStudy,
            "amber",
        ),
        single(
            "1-sat",
            ymd(2026, 2, 21),
            WEEKEND_TITLE,
            "Hari Sabtu adalah hari libur belajar di sekolah.",
            EventCategory::Weekend,
            "rose-muted",
        ),
        single(
            "feb-28",
            ymd(2026, 2, 28),
            GOOD_HABITS_TITLE,
            GOOD_HABITS_DESCRIPTION,
            EventCategory::Weekend,
            "red",
        ),
        ranged(
            "2",
            ymd(2026, 2, 23),
            ymd(2026, 3, 13),
            "Pembelajaran di Satuan Pendidikan",
            "Kegiatan bermanfaat untuk meningkatkan iman, takwa, akhlak mulia, \
             kepemimpinan, dan sosial pada hari efektif (Senin-Jumat).",
            EventCategory::InSchool,
            "emerald",
        ),
        ranged(
            "3",
            ymd(2026, 3, 15),
            ymd(2026, 3, 27),
            "Libur Bersama Idulfitri",
            "Libur bersama idul fitri",
            EventCategory::Holiday,
            "rose",
        ),
        single(
            "weekend-28",
            ymd(2026, 3, 28),
            WEEKEND_TITLE,
            "hari libur tidak efektif",
            EventCategory::Weekend,
            "red",
        ),
        single(
            "weekend-29",
            ymd(2026, 3, 29),
            WEEKEND_TITLE,
            "libur hari tidak efektif",
            EventCategory::Weekend,
            "red",
        ),
        single(
            "5",
            ymd(2026, 3, 30),
            "Masuk Kembali",
            "Kegiatan pembelajaran di sekolah dilaksanakan kembali (Hari Senin).",
            EventCategory::ReturnToSchool,
            "blue",
        ),
    ]
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    // Catalog dates are fixed configuration data; an invalid literal is a
    // programming error caught by the catalog tests.
    NaiveDate::from_ymd_opt(year, month, day).expect("valid catalog date literal")
}

fn single(
    id: &str,
    date: NaiveDate,
    title: &str,
    description: &str,
    category: EventCategory,
    style: &str,
) -> CalendarEvent {
    ranged(id, date, date, title, description, category, style)
}

fn ranged(
    id: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
    title: &str,
    description: &str,
    category: EventCategory,
    style: &str,
) -> CalendarEvent {
    CalendarEvent {
        id: id.to_string(),
        start_date,
        end_date,
        title: title.to_string(),
        description: description.to_string(),
        category,
        style: style.to_string(),
    }
}
