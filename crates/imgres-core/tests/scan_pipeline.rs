//! End-to-end tests for a full pass: listing, header reads, report and export,
//! run against real image files written into temporary folders.

use image::{ImageFormat, RgbImage};
use imgres_core::{
    write_report, ExportFormat, Exporter, ImageRecord, ListingStatus, ProfileConfig, ReportStyle,
    Scanner,
};
use serde::Deserialize;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

// ── Helpers ──────────────────────────────────────────────────────────────────

/// Write a `width`x`height` image in `format`, then pad the file with zeros to
/// exactly `size` bytes. Decoders only look at the header, so the padding
/// changes the reported size without affecting the dimensions.
fn write_image(dir: &Path, name: &str, width: u32, height: u32, format: ImageFormat, size: u64) {
    let path = dir.join(name);
    RgbImage::new(width, height)
        .save_with_format(&path, format)
        .unwrap();

    let current = fs::metadata(&path).unwrap().len();
    assert!(current <= size, "{name} is already {current} bytes");
    let mut file = OpenOptions::new().append(true).open(&path).unwrap();
    file.write_all(&vec![0u8; (size - current) as usize]).unwrap();
}

const MB: u64 = 1024 * 1024;

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Filename")]
    filename: String,
    #[serde(rename = "Width")]
    width: u32,
    #[serde(rename = "Height")]
    height: u32,
    #[serde(rename = "Size_MB")]
    size_mb: f64,
    #[serde(rename = "Aspect_Ratio")]
    aspect_ratio: f64,
}

fn scenario_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_image(dir.path(), "b.jpg", 400, 100, ImageFormat::Jpeg, MB / 2);
    write_image(dir.path(), "a.png", 100, 200, ImageFormat::Png, MB);
    dir
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[test]
fn scan_two_images_reports_sorted_totals_and_largest() {
    let dir = scenario_dir();
    let profile = ProfileConfig::images();

    let outcome = Scanner::new(&profile).scan(dir.path());

    assert_eq!(outcome.status, ListingStatus::Found(2));
    assert!(outcome.failures.is_empty());
    assert_eq!(
        outcome.records,
        vec![
            ImageRecord::new("a.png", 100, 200, 1.0),
            ImageRecord::new("b.jpg", 400, 100, 0.5),
        ]
    );

    let mut out = Vec::new();
    let style = ReportStyle::from_profile(&profile);
    assert!(write_report(&mut out, &style, &outcome.records).unwrap());
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("Total files: 2\n"));
    assert!(text.contains("Total size: 1.50 MB\n"));
    assert!(text.contains("Largest image: b.jpg (400x100)\n"));
    assert!(text.contains("Smallest image: a.png (100x200)\n"));

    let a_row = text.find("\na.png ").unwrap();
    let b_row = text.find("\nb.jpg ").unwrap();
    assert!(a_row < b_row);
}

#[test]
fn corrupt_file_is_skipped_and_totals_exclude_it() {
    let dir = scenario_dir();
    fs::write(dir.path().join("broken.gif"), b"not an image at all").unwrap();

    let profile = ProfileConfig::images();
    let outcome = Scanner::new(&profile).scan(dir.path());

    assert_eq!(outcome.status, ListingStatus::Found(3));
    let names: Vec<&str> = outcome.records.iter().map(|r| r.filename.as_str()).collect();
    assert_eq!(names, vec!["a.png", "b.jpg"]);

    assert_eq!(outcome.failures.len(), 1);
    assert!(outcome.failures[0]
        .to_string()
        .starts_with("Error processing broken.gif"));

    let style = ReportStyle::from_profile(&profile);
    let mut out = Vec::new();
    write_report(&mut out, &style, &outcome.records).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Total files: 2\n"));
    assert!(text.contains("Total size: 1.50 MB\n"));
    assert!(!text.contains("broken.gif"));
}

#[test]
fn folder_without_images_gives_no_records_and_no_table() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("readme.txt"), b"hello").unwrap();
    fs::write(dir.path().join("photo.raw"), b"raw").unwrap();

    let profile = ProfileConfig::images();
    let outcome = Scanner::new(&profile).scan(dir.path());

    assert_eq!(outcome.status, ListingStatus::NoMatches);
    assert!(outcome.records.is_empty());

    let mut out = Vec::new();
    let wrote = write_report(&mut out, &ReportStyle::from_profile(&profile), &outcome.records)
        .unwrap();
    assert!(!wrote);
    assert!(out.is_empty());
}

#[test]
fn missing_folder_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let outcome = Scanner::new(&ProfileConfig::images()).scan(&dir.path().join("images"));

    assert_eq!(outcome.status, ListingStatus::RootMissing);
    assert!(outcome.records.is_empty());
}

#[test]
fn png_profile_matches_exact_suffixes_only() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["logo.PNG", "logo.png", "icon.Png"] {
        RgbImage::new(16, 16)
            .save_with_format(dir.path().join(name), ImageFormat::Png)
            .unwrap();
    }
    write_image(dir.path(), "photo.jpg", 8, 8, ImageFormat::Jpeg, 64 * 1024);

    let outcome = Scanner::new(&ProfileConfig::png()).scan(dir.path());

    let names: Vec<&str> = outcome.records.iter().map(|r| r.filename.as_str()).collect();
    assert_eq!(names, vec!["logo.PNG", "logo.png"]);
}

#[test]
fn png_profile_report_lists_large_files() {
    let dir = tempfile::tempdir().unwrap();
    write_image(dir.path(), "huge.png", 50, 50, ImageFormat::Png, 3 * MB);
    write_image(dir.path(), "small.png", 50, 50, ImageFormat::Png, MB);

    let profile = ProfileConfig::png();
    let outcome = Scanner::new(&profile).scan(dir.path());

    let mut out = Vec::new();
    write_report(&mut out, &ReportStyle::from_profile(&profile), &outcome.records).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with(&format!("{}\nPNG RESOLUTION REPORT\n", "=".repeat(80))));
    assert!(text.contains("Large files (> 2.00 MB): 1\n  huge.png (3.00 MB)\n"));
}

#[test]
fn csv_export_round_trips() {
    let dir = scenario_dir();
    let outcome = Scanner::new(&ProfileConfig::images()).scan(dir.path());

    let out_dir = tempfile::tempdir().unwrap();
    let csv_path = out_dir.path().join("image_resolutions.csv");
    let written = Exporter::new(ExportFormat::Csv, false)
        .export(&outcome.records, &csv_path)
        .unwrap();
    assert_eq!(written, 2);

    let content = fs::read_to_string(&csv_path).unwrap();
    assert!(content.starts_with("Filename,Width,Height,Size_MB,Aspect_Ratio\n"));

    let mut reader = csv::Reader::from_path(&csv_path).unwrap();
    let rows: Vec<CsvRow> = reader.deserialize().map(|r| r.unwrap()).collect();

    assert_eq!(rows.len(), outcome.records.len());
    for (row, record) in rows.iter().zip(&outcome.records) {
        assert_eq!(row.filename, record.filename);
        assert_eq!(row.width, record.width);
        assert_eq!(row.height, record.height);
        assert_eq!(row.size_mb, record.size_mb);
        assert_eq!(row.aspect_ratio, record.aspect_ratio());
    }
}

#[test]
fn json_export_matches_records() {
    let dir = scenario_dir();
    let outcome = Scanner::new(&ProfileConfig::images()).scan(dir.path());

    let out_dir = tempfile::tempdir().unwrap();
    let json_path = out_dir.path().join("out.json");
    Exporter::new(ExportFormat::Json, true)
        .export(&outcome.records, &json_path)
        .unwrap();

    let parsed: Vec<serde_json::Value> =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[1]["filename"], "b.jpg");
    assert_eq!(parsed[1]["aspect_ratio"], 4.0);
}
