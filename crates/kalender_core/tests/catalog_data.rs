use kalender_core::catalog::events;
use kalender_core::EventCategory;
use std::collections::HashSet;

#[test]
fn catalog_has_expected_entries_in_declaration_order() {
    let ids: Vec<&str> = events().iter().map(|event| event.id.as_str()).collect();

    assert_eq!(
        ids,
        vec![
            "march-1",
            "march-7",
            "march-8",
            "1",
            "1-sat",
            "feb-28",
            "2",
            "3",
            "weekend-28",
            "weekend-29",
            "5",
        ]
    );
}

#[test]
fn every_entry_passes_validation() {
    for event in events() {
        event
            .validate()
            .unwrap_or_else(|err| panic!("catalog entry `{}` invalid: {err}", event.id));
    }
}

#[test]
fn ids_are_unique() {
    let mut seen = HashSet::new();
    for event in events() {
        assert!(seen.insert(event.id.as_str()), "duplicate id {}", event.id);
    }
}

#[test]
fn single_day_overrides_precede_overlapping_ranges() {
    let index_of = |id: &str| {
        events()
            .iter()
            .position(|event| event.id == id)
            .unwrap_or_else(|| panic!("catalog entry `{id}` missing"))
    };

    // The March good-habits overrides and feb-28 sit inside the broad
    // in-school range `2`; declaration order is their only precedence.
    for id in ["march-1", "march-7", "march-8", "feb-28"] {
        assert!(index_of(id) < index_of("2"), "`{id}` must precede `2`");
    }
}

#[test]
fn categories_match_the_source_tags() {
    let category_of = |id: &str| {
        events()
            .iter()
            .find(|event| event.id == id)
            .unwrap_or_else(|| panic!("catalog entry `{id}` missing"))
            .category
    };

    assert_eq!(category_of("1"), EventCategory::IndependentStudy);
    assert_eq!(category_of("2"), EventCategory::InSchool);
    assert_eq!(category_of("3"), EventCategory::Holiday);
    assert_eq!(category_of("5"), EventCategory::ReturnToSchool);
    assert_eq!(category_of("march-1"), EventCategory::Weekend);
    assert_eq!(category_of("1-sat"), EventCategory::Weekend);
}

#[test]
fn category_tags_are_stable() {
    assert_eq!(EventCategory::IndependentStudy.as_str(), "independent-study");
    assert_eq!(EventCategory::InSchool.as_str(), "in-school");
    assert_eq!(EventCategory::Holiday.as_str(), "holiday");
    assert_eq!(EventCategory::ReturnToSchool.as_str(), "return-to-school");
    assert_eq!(EventCategory::Weekend.as_str(), "weekend");
}
