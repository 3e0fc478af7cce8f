// tests/export_roundtrip.rs
use std::fs;

use chrono::NaiveDate;
use fbstats_scrape::config::options::{ExportFormat, ExportOptions};
use fbstats_scrape::csv::read_dataset;
use fbstats_scrape::file::{save_player_stats, write_dataset};
use fbstats_scrape::store::DataSet;

fn sample() -> DataSet {
    let row = |v: &[&str]| v.iter().map(|s| String::from(*s)).collect::<Vec<_>>();
    DataSet::new(
        row(&["Team", "Name", "Goals", "Accurate passes %", "Rating"]),
        vec![
            row(&["Brighton & Hove Albion", "Kaoru Mitoma", "3", "81.2", "7.02"]),
            row(&["Wolverhampton, Wanderers", "Pedro \"Neto\"", "2", "77", "7.10"]),
            row(&["Atlético Madrid", "Antoine Griezmann", "16", "", "7.61"]),
        ],
    )
}

fn export_to(dir: &std::path::Path, format: ExportFormat, include_headers: bool) -> ExportOptions {
    ExportOptions { format, include_headers, out_dir: dir.to_path_buf() }
}

#[test]
fn csv_round_trip_keeps_order_and_values() {
    let dir = tempfile::tempdir().unwrap();
    let ds = sample();
    let now = NaiveDate::from_ymd_opt(2024, 5, 19).unwrap().and_hms_opt(16, 4, 0).unwrap();

    let path = save_player_stats(&ds, "LaLiga", &export_to(dir.path(), ExportFormat::Csv, true), &now).unwrap();
    assert_eq!(path, dir.path().join("LaLiga - player_stats - 05-19_1604.csv"));

    let back = read_dataset(&path, b',', true).unwrap();
    assert_eq!(back, ds);
}

#[test]
fn tsv_round_trip_uses_tabs() {
    let dir = tempfile::tempdir().unwrap();
    let ds = sample();
    let now = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap().and_hms_opt(9, 30, 0).unwrap();

    let path = save_player_stats(&ds, "Serie A", &export_to(dir.path(), ExportFormat::Tsv, true), &now).unwrap();
    assert!(path.to_string_lossy().ends_with("Serie A - player_stats - 12-01_0930.tsv"));

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("Team\tName\tGoals\tAccurate passes %\tRating\n"), "{text}");
    // Commas are not special in TSV.
    assert!(text.contains("Wolverhampton, Wanderers\t"));

    assert_eq!(read_dataset(&path, b'\t', true).unwrap(), ds);
}

#[test]
fn headers_can_be_left_out_of_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let ds = sample();
    let path = dir.path().join("nested/out.csv");

    write_dataset(&path, &ds, &export_to(dir.path(), ExportFormat::Csv, false)).unwrap();

    let back = read_dataset(&path, b',', false).unwrap();
    assert_eq!(back.headers, None);
    assert_eq!(back.rows, ds.rows);
}

#[test]
fn export_dir_that_is_a_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("out");
    fs::write(&blocker, "not a dir").unwrap();
    let now = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();

    let res = save_player_stats(&sample(), "UCL", &export_to(&blocker, ExportFormat::Csv, true), &now);
    assert!(res.is_err());
}
