use placedesk_core::PlaceRecord;
use placedesk_engine::{export_csv_file, place_rows, to_csv, CsvRow};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn row(value: Value) -> CsvRow {
    match value {
        Value::Object(map) => map,
        other => panic!("not an object: {other:?}"),
    }
}

fn place(id: &str, name: Option<&str>, rating: Option<f64>) -> PlaceRecord {
    PlaceRecord {
        id: id.to_string(),
        query: Some("cafeterias".to_string()),
        name: name.map(str::to_string),
        address: None,
        phone: None,
        website: None,
        maps_url: None,
        average_rating: rating,
        contacted: false,
    }
}

#[test]
fn output_has_header_plus_one_line_per_record() {
    let rows = vec![
        row(json!({ "id": "p1", "name": "A", "rating": 4.5 })),
        row(json!({ "id": "p2", "name": "B", "rating": 3.0 })),
        row(json!({ "id": "p3", "name": "C", "rating": 1.0 })),
    ];

    let csv = to_csv(&rows).expect("csv");
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "id,name,rating");
    for line in &lines[1..] {
        assert_eq!(line.matches("\",\"").count(), 2, "3 quoted fields: {line}");
        assert!(line.starts_with('"') && line.ends_with('"'));
    }
}

#[test]
fn header_follows_the_first_records_key_order() {
    let rows = vec![row(json!({ "b": 1, "a": 2, "c": 3 }))];
    let csv = to_csv(&rows).expect("csv");
    assert_eq!(csv.lines().next(), Some("b,a,c"));
}

#[test]
fn later_records_are_projected_onto_the_first_records_keys() {
    let rows = vec![
        row(json!({ "id": "p1", "name": "A" })),
        // "extra" is dropped, missing "name" renders empty.
        row(json!({ "id": "p2", "extra": "ignored" })),
    ];

    let csv = to_csv(&rows).expect("csv");
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines, vec![r#"id,name"#, r#""p1","A""#, r#""p2","""#,]);
}

#[test]
fn null_values_render_as_empty_strings() {
    let rows = vec![row(json!({ "id": "p1", "phone": null }))];
    let csv = to_csv(&rows).expect("csv");
    assert_eq!(csv.lines().nth(1), Some(r#""p1","""#));
}

#[test]
fn non_string_values_use_their_json_form() {
    let rows = vec![row(json!({ "rating": 4.5, "contacted": true, "count": 7 }))];
    let csv = to_csv(&rows).expect("csv");
    assert_eq!(csv.lines().nth(1), Some(r#""4.5","true","7""#));
}

#[test]
fn inner_quotes_are_doubled() {
    let rows = vec![row(json!({ "name": r#"Bar "El Quoted""# }))];
    let csv = to_csv(&rows).expect("csv");
    assert_eq!(csv.lines().nth(1), Some(r#""Bar ""El Quoted""""#));
}

#[test]
fn commas_survive_inside_quoted_fields() {
    let rows = vec![row(json!({ "address": "Av. Corrientes 500, CABA", "id": "p1" }))];
    let csv = to_csv(&rows).expect("csv");
    assert_eq!(csv.lines().nth(1), Some(r#""Av. Corrientes 500, CABA","p1""#));
}

#[test]
fn empty_input_produces_no_output() {
    assert_eq!(to_csv(&[]), None);
}

#[test]
fn place_rows_keep_the_record_field_order() {
    let rows = place_rows(&[place("p1", Some("Café"), Some(4.5))]).expect("rows");
    let keys: Vec<&str> = rows[0].keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec![
            "id",
            "query",
            "name",
            "address",
            "phone",
            "website",
            "url",
            "average_rating",
            "contacted"
        ]
    );
}

#[test]
fn export_file_round_trips_records() {
    let temp = tempfile::TempDir::new().unwrap();
    let records = vec![
        place("p1", Some("Café Uno"), Some(4.5)),
        place("p2", None, None),
    ];

    let path = export_csv_file(temp.path(), "resultados-job-j1.csv", &records)
        .expect("export")
        .expect("path");
    assert_eq!(path.file_name().unwrap(), "resultados-job-j1.csv");

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "id,query,name,address,phone,website,url,average_rating,contacted"
    );
    assert_eq!(
        lines[1],
        r#""p1","cafeterias","Café Uno","","","","","4.5","false""#
    );
    // Missing optionals serialize as null and render empty.
    assert_eq!(lines[2], r#""p2","cafeterias","","","","","","","false""#);
}

#[test]
fn exporting_nothing_writes_no_file() {
    let temp = tempfile::TempDir::new().unwrap();

    let result = export_csv_file(temp.path(), "resultados.csv", &[]).expect("export");
    assert_eq!(result, None);
    assert!(!temp.path().join("resultados.csv").exists());
}
