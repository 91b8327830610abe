use chrono::NaiveDate;
use kalender_core::{resolve, CalendarEvent, DayResolver, EventCategory};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

fn mini_event(id: &str, start: NaiveDate, end: NaiveDate, title: &str) -> CalendarEvent {
    CalendarEvent {
        id: id.to_string(),
        start_date: start,
        end_date: end,
        title: title.to_string(),
        description: format!("{title} description"),
        category: EventCategory::InSchool,
        style: "emerald".to_string(),
    }
}

#[test]
fn explicit_entry_wins_regardless_of_weekday() {
    // 2026-02-18 (Wednesday) through 2026-02-20 (Friday): independent study.
    for day in 18..=20 {
        let event = resolve(2026, 1, day).expect("catalog entry applies");
        assert_eq!(event.id, "1");
        assert_eq!(event.category, EventCategory::IndependentStudy);
    }

    // 2026-03-21/22 fall on a weekend inside the holiday range; the
    // explicit range still wins over both synthetic weekend rules.
    for day in [21, 22] {
        let event = resolve(2026, 2, day).expect("holiday range applies");
        assert_eq!(event.id, "3");
        assert_eq!(event.category, EventCategory::Holiday);
    }
}

#[test]
fn explicit_saturday_override_beats_generic_rule() {
    // 2026-02-21 is a Saturday with its own catalog entry.
    let event = resolve(2026, 1, 21).expect("explicit Saturday entry applies");
    assert_eq!(event.id, "1-sat");
    assert_eq!(event.title, "Libur Akhir Pekan");
    assert!(event.description.contains("Sabtu"));
}

#[test]
fn march_weekends_synthesize_good_habits() {
    // 2026-03-14 (Saturday) sits in the gap between catalog ranges.
    let event = resolve(2026, 2, 14).expect("March weekend synthesizes");
    assert_eq!(event.id, "march-weekend-2026-03-14");
    assert_eq!(event.title, "Pembiasaan Baik");
    assert_eq!(event.category, EventCategory::Weekend);
    assert_eq!(event.style, "red");
    assert_eq!(event.start_date, date(2026, 3, 14));
    assert_eq!(event.end_date, date(2026, 3, 14));
}

#[test]
fn march_first_is_covered_by_explicit_entry_not_synthesis() {
    // March 1, 2026 is a Sunday, but the explicit `march-1` entry is
    // declared ahead of the synthetic rule's jurisdiction.
    let event = resolve(2026, 2, 1).expect("explicit entry applies");
    assert_eq!(event.id, "march-1");
    assert_eq!(event.title, "Pembiasaan Baik");
}

#[test]
fn non_march_weekends_synthesize_generic_weekend() {
    let saturday = resolve(2026, 1, 14).expect("Saturday synthesizes");
    assert_eq!(saturday.id, "weekend-2026-02-14");
    assert_eq!(saturday.title, "Libur Akhir Pekan");
    assert!(saturday.description.contains("Sabtu"));
    assert_eq!(saturday.style, "rose-muted");

    let sunday = resolve(2026, 1, 15).expect("Sunday synthesizes");
    assert_eq!(sunday.id, "weekend-2026-02-15");
    assert!(sunday.description.contains("Minggu"));

    // Outside the navigable window the resolver still behaves: January 3,
    // 2026 is a Saturday with no catalog coverage.
    let january = resolve(2026, 0, 3).expect("January Saturday synthesizes");
    assert_eq!(january.id, "weekend-2026-01-03");
}

#[test]
fn uncovered_weekdays_resolve_to_nothing() {
    // 2026-02-16 (Monday) and 02-17 (Tuesday) precede every catalog range.
    assert_eq!(resolve(2026, 1, 16), None);
    assert_eq!(resolve(2026, 1, 17), None);
    // 2026-01-05 (Monday), far outside the catalog.
    assert_eq!(resolve(2026, 0, 5), None);
}

#[test]
fn march_sixteenth_falls_inside_holiday_range() {
    // A Monday, but covered: the holiday range 03-15..03-27 contains it.
    let event = resolve(2026, 2, 16).expect("holiday range applies");
    assert_eq!(event.id, "3");
}

#[test]
fn invalid_day_resolves_to_nothing() {
    assert_eq!(resolve(2026, 1, 31), None);
    assert_eq!(resolve(2026, 1, 0), None);
    assert_eq!(resolve(2026, 12, 1), None);
}

#[test]
fn resolution_is_deterministic() {
    assert_eq!(resolve(2026, 2, 14), resolve(2026, 2, 14));
    assert_eq!(resolve(2026, 1, 18), resolve(2026, 1, 18));
}

#[test]
fn earlier_declared_entry_wins_on_overlap() {
    let catalog = vec![
        mini_event(
            "override",
            date(2026, 2, 10),
            date(2026, 2, 10),
            "Single-day override",
        ),
        mini_event(
            "broad",
            date(2026, 2, 9),
            date(2026, 2, 12),
            "Broad range",
        ),
    ];
    let resolver = DayResolver::new(&catalog);

    let overlapped = resolver.resolve(2026, 1, 10).expect("overlap resolves");
    assert_eq!(overlapped.id, "override");

    let neighbor = resolver.resolve(2026, 1, 11).expect("range resolves");
    assert_eq!(neighbor.id, "broad");
}

#[test]
fn empty_catalog_falls_through_to_weekend_rules() {
    let resolver = DayResolver::new(&[]);

    let saturday = resolver.resolve(2026, 1, 14).expect("Saturday synthesizes");
    assert_eq!(saturday.id, "weekend-2026-02-14");

    // With no catalog, the March override dates fall to the synthetic
    // good-habits rule instead.
    let march_first = resolver.resolve(2026, 2, 1).expect("March Sunday synthesizes");
    assert_eq!(march_first.id, "march-weekend-2026-03-01");

    assert_eq!(resolver.resolve(2026, 1, 16), None);
}
