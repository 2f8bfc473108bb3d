use application_tracker::applications::{
    produce_fake_data, ApplicationStatus, ExportOutcome, FakeApplicationGenerator,
};
use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const HEADER: &str = "Company,Position,Link,Status,Date";

fn run_binary(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_produce-fake-data"))
        .args(args)
        .current_dir(dir)
        .env_remove("FAKE_DATA_COUNT")
        .env_remove("FAKE_DATA_OUTPUT")
        .env_remove("FAKE_DATA_SEED")
        .env_remove("RUST_LOG")
        .env("APP_LOG_LEVEL", "warn")
        .output()
        .expect("binary runs")
}

#[test]
fn writes_hundred_rows_when_destination_absent() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("applications.csv");
    let mut generator = FakeApplicationGenerator::seeded(17);

    let outcome = produce_fake_data(&path, 100, &mut generator).expect("export succeeds");
    assert_eq!(
        outcome,
        ExportOutcome::Written {
            path: path.clone(),
            rows: 100
        }
    );

    let contents = fs::read_to_string(&path).expect("csv readable");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 101);
    assert_eq!(lines[0], HEADER);

    let lower = NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date");
    let upper = NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date");
    let statuses: Vec<&str> = ApplicationStatus::ordered()
        .iter()
        .map(|status| status.label())
        .collect();

    for (index, line) in lines[1..].iter().enumerate() {
        let fields: Vec<&str> = line.split(',').collect();
        assert_eq!(fields.len(), 5, "unexpected row shape: {line}");
        assert_eq!(fields[0], format!("Company {}", index + 1));
        assert_eq!(fields[1], format!("Position {}", index + 1));
        assert_eq!(fields[2], "#");
        assert!(statuses.contains(&fields[3]), "unknown status {}", fields[3]);

        let date = NaiveDate::parse_from_str(fields[4], "%Y-%m-%d").expect("iso date");
        assert!(date >= lower && date < upper, "date {date} out of range");
    }
}

#[test]
fn existing_destination_is_left_byte_identical() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("applications.csv");
    let original = b"Company,Notes\r\nAcme,\"hand written\"\r\n\xff";
    fs::write(&path, original).expect("seed existing file");

    let mut generator = FakeApplicationGenerator::seeded(4);
    let outcome = produce_fake_data(&path, 100, &mut generator).expect("guard runs");

    assert!(matches!(outcome, ExportOutcome::Skipped { .. }));
    assert_eq!(fs::read(&path).expect("read back"), original.to_vec());
}

#[test]
fn second_run_is_a_no_op() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("applications.csv");

    let first = produce_fake_data(&path, 20, &mut FakeApplicationGenerator::seeded(1))
        .expect("first export");
    assert!(first.was_written());
    let after_first = fs::read(&path).expect("read first");

    let second = produce_fake_data(&path, 20, &mut FakeApplicationGenerator::seeded(2))
        .expect("second export");
    assert!(!second.was_written());
    assert_eq!(fs::read(&path).expect("read second"), after_first);
}

#[test]
fn zero_rows_produce_header_only_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("empty.csv");

    produce_fake_data(&path, 0, &mut FakeApplicationGenerator::seeded(1)).expect("export");
    assert_eq!(
        fs::read_to_string(&path).expect("read back"),
        format!("{HEADER}\n")
    );
}

#[test]
fn binary_without_arguments_writes_then_skips() {
    let dir = tempfile::tempdir().expect("temp dir");

    let first = run_binary(dir.path(), &[]);
    assert!(first.status.success());
    assert_eq!(
        String::from_utf8_lossy(&first.stdout).trim(),
        "Writing fake data to applications.csv"
    );

    let path = dir.path().join("applications.csv");
    let written = fs::read(&path).expect("applications.csv created");
    assert_eq!(String::from_utf8_lossy(&written).lines().count(), 101);

    let second = run_binary(dir.path(), &[]);
    assert!(second.status.success());
    assert_eq!(
        String::from_utf8_lossy(&second.stdout).trim(),
        "applications.csv already exists. Doing nothing."
    );
    assert_eq!(fs::read(&path).expect("still readable"), written);
}

#[test]
fn binary_preview_prints_csv_without_writing() {
    let dir = tempfile::tempdir().expect("temp dir");

    let output = run_binary(dir.path(), &["preview", "--count", "3", "--seed", "5"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], HEADER);
    assert!(!dir.path().join("applications.csv").exists());
}

#[test]
fn binary_reports_unwritable_destination() {
    let dir = tempfile::tempdir().expect("temp dir");

    let output = run_binary(
        dir.path(),
        &["generate", "--output", "missing/dir/applications.csv"],
    );
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("application error"));
}
