use std::fs;

use chrono::{TimeZone, Utc};
use tidy_model::{CleanCategory, CleaningReport};
use tidy_report::{render_text_report, write_json_report, write_text_report};

fn sample_report() -> CleaningReport {
    let mut report = CleaningReport::new(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());
    for (original, normalized) in [
        ("Order ID", "order_id"),
        ("Order Date", "order_date"),
        ("Unit Price", "unit_price"),
        ("Tags", "tags"),
        ("tags", "tags"),
    ] {
        report.column_mapping.push(original, normalized);
    }
    for column in ["order_id", "order_date", "unit_price", "tags"] {
        report
            .counts_mut(CleanCategory::NullsNormalized)
            .insert(column.to_string(), 0);
        report
            .counts_mut(CleanCategory::TrimmedValues)
            .insert(column.to_string(), 0);
    }
    report
        .counts_mut(CleanCategory::NullsNormalized)
        .insert("unit_price".to_string(), 2);
    report
        .counts_mut(CleanCategory::TrimmedValues)
        .insert("tags".to_string(), 1);
    report
        .counts_mut(CleanCategory::NumericParsed)
        .insert("unit_price".to_string(), 5);
    report
        .counts_mut(CleanCategory::RangesNormalized)
        .insert("unit_price".to_string(), 1);
    report
        .counts_mut(CleanCategory::DatesParsed)
        .insert("order_date".to_string(), 6);
    report
        .counts_mut(CleanCategory::TagsNormalized)
        .insert("tags".to_string(), 3);
    report.merged_columns = vec!["tags".to_string()];
    report.duplicate_rows_removed = 1;
    report
}

/// Strip the generated timestamp line for deterministic snapshots.
fn without_timestamp(text: &str) -> String {
    text.lines()
        .filter(|line| !line.starts_with("Generated at:"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn text_report_layout() {
    let text = render_text_report(&sample_report());
    insta::assert_snapshot!(without_timestamp(&text));
}

#[test]
fn text_report_timestamp_line() {
    let text = render_text_report(&sample_report());
    assert_eq!(
        text.lines().nth(1),
        Some("Generated at: 2024-05-01T12:00:00Z")
    );
    assert!(text.ends_with("Duplicate rows removed: 1\n"));
}

#[test]
fn reports_round_trip_through_files() {
    let dir = tempfile::tempdir().expect("temp dir");
    let json_path = dir.path().join("clean_report.json");
    let text_path = dir.path().join("clean_report.txt");
    let report = sample_report();

    write_json_report(&json_path, &report).expect("write json");
    write_text_report(&text_path, &report).expect("write text");

    let parsed: CleaningReport =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(parsed, report);
    assert_eq!(
        fs::read_to_string(&text_path).unwrap(),
        render_text_report(&report)
    );
}

#[test]
fn reports_create_missing_directories() {
    let dir = tempfile::tempdir().expect("temp dir");
    let json_path = dir.path().join("audit").join("json").join("clean_report.json");
    let text_path = dir.path().join("audit").join("clean_report.txt");
    let report = sample_report();

    write_json_report(&json_path, &report).expect("write json");
    write_text_report(&text_path, &report).expect("write text");

    assert!(json_path.is_file());
    assert!(text_path.is_file());
}

#[test]
fn unwritable_directory_names_the_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();
    let path = blocker.join("clean_report.txt");

    let err = write_text_report(&path, &sample_report()).unwrap_err();

    assert!(format!("{err:#}").contains("blocker"));
}
