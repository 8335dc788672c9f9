//! Integration tests for dataset loading
//!
//! Runs the full pipeline: CSV text through schema validation and parsing,
//! and a background load from a local file source polled the way the UI
//! polls it.

mod common;

use std::io::Write;
use std::time::{Duration, Instant};

use common::builders::FIXTURE_CSV;
use maskviz::data::loader::{DatasetHandle, LoadStatus};
use maskviz::data::source::FileCsvSource;
use maskviz::data::parse_dataset;
use maskviz::types::MaskCategory;

#[test]
fn test_parse_preserves_row_order_and_types() {
    let dataset = parse_dataset(FIXTURE_CSV).unwrap();
    assert_eq!(dataset.len(), 3);

    let names = dataset.state_names();
    assert_eq!(names, vec!["California", "Texas", "Vermont"]);

    let texas = dataset.find_state("Texas").unwrap();
    assert_eq!(texas.state_code, "TX");
    assert_eq!(texas.region, "South");
    assert!((texas.cases - 600_000.0).abs() < 1e-9);
    assert!((texas.mask_share(MaskCategory::Frequently) - 0.25).abs() < 1e-9);
}

#[test]
fn test_missing_column_is_a_schema_error() {
    let csv = "\
state,State Code,Region,cases,deaths,Mask Use,Population,ALWAYS,FREQUENTLY,SOMETIMES,RARELY
Texas,TX,South,600000,11000,400000,29000000,0.4,0.25,0.2,0.1
";
    let error = parse_dataset(csv).unwrap_err();
    assert!(error.to_string().contains("NEVER"));
}

#[test]
fn test_malformed_numeric_cell_coerces_to_nan() {
    let csv = "\
state,State Code,Region,cases,deaths,Mask Use,Population,ALWAYS,FREQUENTLY,SOMETIMES,RARELY,NEVER
Texas,TX,South,not-a-number,11000,400000,29000000,0.4,0.25,0.2,0.1,0.05
";
    let dataset = parse_dataset(csv).unwrap();
    let texas = dataset.find_state("Texas").unwrap();
    assert!(texas.cases.is_nan());
    assert!((texas.deaths - 11_000.0).abs() < 1e-9);
}

#[test]
fn test_background_load_from_file_source() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{FIXTURE_CSV}").unwrap();

    let mut handle = DatasetHandle::spawn(Box::new(FileCsvSource::new(file.path())));

    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        match handle.poll() {
            LoadStatus::Loading => {
                assert!(Instant::now() < deadline, "loader never settled");
                std::thread::sleep(Duration::from_millis(5));
            }
            LoadStatus::Ready(dataset) => {
                assert_eq!(dataset.len(), 3);
                assert!(dataset.find_state("Vermont").is_some());
                break;
            }
            LoadStatus::Failed(message) => panic!("load failed: {message}"),
        }
    }
}

#[test]
fn test_background_load_missing_file_fails() {
    let mut handle = DatasetHandle::spawn(Box::new(FileCsvSource::new(
        "/nonexistent/mask_case.csv",
    )));

    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        match handle.poll() {
            LoadStatus::Loading => {
                assert!(Instant::now() < deadline, "loader never settled");
                std::thread::sleep(Duration::from_millis(5));
            }
            LoadStatus::Failed(_) => break,
            LoadStatus::Ready(_) => panic!("expected failure"),
        }
    }
    assert!(handle.dataset().is_none());
}
