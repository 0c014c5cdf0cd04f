//! Tests for the `proteins` binary.

use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

// =============================================================================
// Helper functions
// =============================================================================

fn create_file(content: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}

fn run_proteins(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_proteins"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to run proteins")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

const TABLE: &str = "\
6901\t5.6.7.8\tp6901\t78910\t4\t5\t512\t100\tGRO-A5\thttp://y\tyou\t2\r\n\
6900\t1.2.3.4\tp6900\t10000\t3\t5\t500\t100\tGRO-A5\thttp://x\tme\t26.4\r\n\
bogus line\r\n";

const SUMMARY: &str = r#"[
    {"id": 6900, "ws": "1.2.3.4", "atoms": 10000, "timeout": 259200,
     "deadline": 432000, "credit": 600, "type": "GRO-A5", "contact": "me", "bonus": 26.4},
    {"id": 7000, "ws": "9.9.9.9", "atoms": 5, "timeout": 86400,
     "deadline": 172800, "credit": 10, "type": "OPENMM_22", "contact": "x"}
]"#;

// =============================================================================
// convert
// =============================================================================

#[test]
fn test_convert_sorts_and_normalizes() {
    let input = create_file(TABLE, ".tab");
    let output = run_proteins(&["convert", "-i", input.path().to_str().unwrap()]);

    assert!(output.status.success());
    let text = stdout_of(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("6900\t"));
    assert!(lines[1].starts_with("6901\t"));
    assert!(!text.contains('\r'));
}

#[test]
fn test_convert_json_to_file() {
    let input = create_file(SUMMARY, ".json");
    let out = NamedTempFile::new().unwrap();
    let output = run_proteins(&[
        "convert",
        "-i",
        input.path().to_str().unwrap(),
        "-o",
        out.path().to_str().unwrap(),
    ]);

    assert!(output.status.success());
    let written = std::fs::read_to_string(out.path()).unwrap();
    assert_eq!(
        written.lines().next().unwrap(),
        "6900\t1.2.3.4\tp6900\t10000\t3\t5\t600\t100\tGRO-A5\thttps://apps.foldingathome.org/project.py?p=6900\tme\t26.4"
    );
    assert_eq!(written.lines().count(), 2);
}

#[test]
fn test_strict_rejects_short_lines() {
    let input = create_file("5\ts\tn\t1\t2\t3\t4\t5\n", ".tab");
    let path = input.path().to_str().unwrap();

    let lenient = run_proteins(&["convert", "-i", path]);
    assert_eq!(stdout_of(&lenient).lines().count(), 1);

    let strict = run_proteins(&["--strict", "convert", "-i", path]);
    assert!(strict.status.success());
    assert!(stdout_of(&strict).is_empty());
}

// =============================================================================
// update
// =============================================================================

#[test]
fn test_update_reports_and_writes() {
    let table = create_file(TABLE, ".tab");
    let snapshot = create_file(SUMMARY, ".json");
    let table_path = table.path().to_str().unwrap();

    let output = run_proteins(&[
        "update",
        "-t",
        table_path,
        "-s",
        snapshot.path().to_str().unwrap(),
        "--write",
    ]);

    assert!(output.status.success());
    let text = stdout_of(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("6900\tchanged\t"));
    assert!(lines[0].contains("credit: '500' -> '600'"));
    assert_eq!(lines[1], "7000\tadded");

    let written = std::fs::read_to_string(table.path()).unwrap();
    let keys: Vec<&str> = written
        .lines()
        .map(|l| l.split('\t').next().unwrap())
        .collect();
    assert_eq!(keys, vec!["6900", "6901", "7000"]);
}

#[test]
fn test_update_quiet_hides_unchanged() {
    let table = create_file(TABLE, ".tab");
    let output = run_proteins(&[
        "update",
        "-t",
        table.path().to_str().unwrap(),
        "-s",
        table.path().to_str().unwrap(),
        "--quiet",
    ]);

    assert!(output.status.success());
    assert!(stdout_of(&output).is_empty());
}

// =============================================================================
// show / production
// =============================================================================

#[test]
fn test_show_project() {
    let input = create_file(TABLE, ".tab");
    let output = run_proteins(&["show", "-i", input.path().to_str().unwrap(), "6900"]);

    assert!(output.status.success());
    let text = stdout_of(&output);
    assert!(text.contains("credit"));
    assert!(text.contains("26.4"));
}

#[test]
fn test_show_missing_project_fails() {
    let input = create_file(TABLE, ".tab");
    let output = run_proteins(&["show", "-i", input.path().to_str().unwrap(), "1"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Project 1 not found"));
}

#[test]
fn test_production() {
    let input = create_file(TABLE, ".tab");
    let output = run_proteins(&[
        "production",
        "-i",
        input.path().to_str().unwrap(),
        "6900",
        "--frame-time",
        "300",
    ]);

    assert!(output.status.success());
    let text = stdout_of(&output);
    assert!(text.contains("units_per_day\t2.88"));
    assert!(text.contains("bonus_multiplier\t"));
}

#[test]
fn test_unknown_format_fails() {
    let input = create_file(SUMMARY, ".json");
    let output = run_proteins(&[
        "convert",
        "-i",
        input.path().to_str().unwrap(),
        "--from",
        "xml",
    ]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown format"));
}
