use placedesk_core::{derive_view, FilterState, PlaceRecord, SortKey};

fn place(id: &str, name: Option<&str>, rating: Option<f64>) -> PlaceRecord {
    PlaceRecord {
        id: id.to_string(),
        query: None,
        name: name.map(str::to_string),
        address: None,
        phone: None,
        website: None,
        maps_url: None,
        average_rating: rating,
        contacted: false,
    }
}

fn search(term: &str) -> FilterState {
    FilterState {
        search: term.to_string(),
        ..FilterState::default()
    }
}

fn ids(view: &[PlaceRecord]) -> Vec<&str> {
    view.iter().map(|record| record.id.as_str()).collect()
}

#[test]
fn min_rating_treats_missing_rating_as_zero() {
    let records = vec![
        place("a", Some("A"), Some(5.0)),
        place("b", Some("B"), None),
        place("c", Some("C"), Some(3.0)),
    ];
    let filter = FilterState {
        min_rating: Some(4.0),
        ..FilterState::default()
    };

    let view = derive_view(&records, &filter, SortKey::NameAsc);
    assert_eq!(ids(&view), vec!["a"]);
}

#[test]
fn min_rating_bound_is_inclusive() {
    let records = vec![place("a", Some("A"), Some(4.0))];
    let filter = FilterState {
        min_rating: Some(4.0),
        ..FilterState::default()
    };

    assert_eq!(derive_view(&records, &filter, SortKey::NameAsc).len(), 1);
}

#[test]
fn search_matches_name_case_insensitively() {
    let records = vec![
        place("a", Some("Café Test 1"), None),
        place("b", Some("Bar X"), None),
    ];

    let view = derive_view(&records, &search("CAFÉ"), SortKey::NameAsc);
    assert_eq!(ids(&view), vec!["a"]);

    let view = derive_view(&records, &search("café"), SortKey::NameAsc);
    assert_eq!(ids(&view), vec!["a"]);
}

#[test]
fn search_matches_address_too() {
    let mut with_address = place("a", Some("Bar X"), None);
    with_address.address = Some("Av. Corrientes 500".to_string());
    let records = vec![with_address, place("b", Some("Bar Y"), None)];

    let view = derive_view(&records, &search("corrientes"), SortKey::NameAsc);
    assert_eq!(ids(&view), vec!["a"]);
}

#[test]
fn search_runs_over_name_and_address_joined_without_separator() {
    let mut record = place("a", Some("Bar Sur"), None);
    record.address = Some("Mitre 500".to_string());
    let records = vec![record];

    // The haystack is "bar surmitre 500": a term spanning the name/address
    // boundary matches, one assuming a separator does not.
    let view = derive_view(&records, &search("surmitre"), SortKey::NameAsc);
    assert_eq!(ids(&view), vec!["a"]);

    let view = derive_view(&records, &search("sur mitre"), SortKey::NameAsc);
    assert!(view.is_empty());
}

#[test]
fn empty_search_passes_records_without_name_or_address() {
    let records = vec![place("a", None, None)];
    let view = derive_view(&records, &FilterState::default(), SortKey::NameAsc);
    assert_eq!(view.len(), 1);
}

#[test]
fn only_not_contacted_drops_contacted_records() {
    let mut contacted = place("a", Some("A"), None);
    contacted.contacted = true;
    let records = vec![contacted, place("b", Some("B"), None)];
    let filter = FilterState {
        only_not_contacted: true,
        ..FilterState::default()
    };

    let view = derive_view(&records, &filter, SortKey::NameAsc);
    assert_eq!(ids(&view), vec!["b"]);
}

#[test]
fn filters_compose_with_logical_and() {
    let mut contacted = place("a", Some("Café Uno"), Some(4.5));
    contacted.contacted = true;
    let records = vec![
        contacted,
        place("b", Some("Café Dos"), Some(4.5)),
        place("c", Some("Café Tres"), Some(2.0)),
        place("d", Some("Bar"), Some(5.0)),
    ];
    let filter = FilterState {
        search: "café".to_string(),
        min_rating: Some(4.0),
        only_not_contacted: true,
    };

    let view = derive_view(&records, &filter, SortKey::NameAsc);
    assert_eq!(ids(&view), vec!["b"]);
}

#[test]
fn rating_desc_orders_missing_rating_as_zero() {
    let records = vec![
        place("a", Some("A"), Some(3.0)),
        place("b", Some("B"), None),
        place("c", Some("C"), Some(4.5)),
    ];

    let view = derive_view(&records, &FilterState::default(), SortKey::RatingDesc);
    assert_eq!(ids(&view), vec!["c", "a", "b"]);
}

#[test]
fn rating_asc_is_the_mirror_order() {
    let records = vec![
        place("a", Some("A"), Some(3.0)),
        place("b", Some("B"), None),
        place("c", Some("C"), Some(4.5)),
    ];

    let view = derive_view(&records, &FilterState::default(), SortKey::RatingAsc);
    assert_eq!(ids(&view), vec!["b", "a", "c"]);
}

#[test]
fn name_sort_treats_missing_name_as_empty_and_folds_case() {
    let records = vec![
        place("a", Some("zulu"), None),
        place("b", None, None),
        place("c", Some("Alpha"), None),
    ];

    let view = derive_view(&records, &FilterState::default(), SortKey::NameAsc);
    assert_eq!(ids(&view), vec!["b", "c", "a"]);

    let view = derive_view(&records, &FilterState::default(), SortKey::NameDesc);
    assert_eq!(ids(&view), vec!["a", "c", "b"]);
}

#[test]
fn ties_keep_raw_list_order() {
    // Equal ratings and equal folded names: the sort must be stable.
    let records = vec![
        place("first", Some("Same"), Some(4.0)),
        place("second", Some("same"), Some(4.0)),
        place("third", Some("SAME"), Some(4.0)),
    ];

    for sort in [
        SortKey::NameAsc,
        SortKey::NameDesc,
        SortKey::RatingDesc,
        SortKey::RatingAsc,
    ] {
        let view = derive_view(&records, &FilterState::default(), sort);
        assert_eq!(ids(&view), vec!["first", "second", "third"], "{sort:?}");
    }
}

#[test]
fn filtering_preserves_relative_order_of_passing_records() {
    // All names tie, so the stable sort leaves the filtered subsequence in
    // raw-list order.
    let records = vec![
        place("a", None, Some(5.0)),
        place("b", None, Some(1.0)),
        place("c", None, Some(4.0)),
        place("d", None, Some(4.5)),
    ];
    let filter = FilterState {
        min_rating: Some(4.0),
        ..FilterState::default()
    };

    let view = derive_view(&records, &filter, SortKey::NameAsc);
    assert_eq!(ids(&view), vec!["a", "c", "d"]);
}

#[test]
fn derivation_is_idempotent() {
    let records = vec![
        place("a", Some("Café"), Some(3.0)),
        place("b", Some("Bar"), Some(4.5)),
        place("c", None, None),
    ];
    let filter = FilterState {
        search: "a".to_string(),
        min_rating: Some(1.0),
        ..FilterState::default()
    };

    let once = derive_view(&records, &filter, SortKey::RatingDesc);
    let twice = derive_view(&once, &filter, SortKey::RatingDesc);
    assert_eq!(once, twice);
}

#[test]
fn empty_inputs_yield_empty_views() {
    assert!(derive_view(&[], &FilterState::default(), SortKey::NameAsc).is_empty());

    let records = vec![place("a", Some("Bar"), None)];
    let view = derive_view(&records, &search("no such place"), SortKey::NameAsc);
    assert!(view.is_empty());
}

#[test]
fn input_list_is_never_mutated() {
    let records = vec![
        place("b", Some("B"), Some(1.0)),
        place("a", Some("A"), Some(5.0)),
    ];
    let before = records.clone();

    let _ = derive_view(&records, &FilterState::default(), SortKey::RatingDesc);
    assert_eq!(records, before);
}
