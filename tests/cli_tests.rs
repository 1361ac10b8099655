use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn krscore(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_krscore"))
        .args(args)
        .output()
        .expect("Failed to execute krscore")
}

#[test]
fn test_score_json_output() {
    let output = krscore(&[
        "score",
        "Increase NPS score from 40 to 65 by Q2 2024",
        "--objective",
        "Improve customer satisfaction and NPS score across all touchpoints",
        "--json",
    ]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["overall"], 88);
    assert_eq!(value["grade"], "B+");
    assert_eq!(value["breakdown"]["timeBound"], 100);
    assert_eq!(value["breakdown"]["specificity"], 50);
}

#[test]
fn test_score_table_output() {
    let output = krscore(&["score", "Improve team morale"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Time-Bound"));
    assert!(stdout.contains("Feedback:"));
}

#[test]
fn test_batch_preserves_input_order() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("krs.csv");
    fs::write(
        &csv_path,
        "key_result,objective\n\
         Improve team morale,\n\
         Increase revenue from $100K to $800K by Q4 2024,Grow the business\n\
         Increase NPS score from 40 to 65 by Q2 2024,Improve customer satisfaction and NPS score across all touchpoints\n",
    )
    .unwrap();

    let output = krscore(&["batch", csv_path.to_str().unwrap(), "--json"]);
    assert!(output.status.success());

    let rows: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["key_result"], "Improve team morale");
    assert_eq!(rows[0]["overall"], 26);
    assert_eq!(rows[1]["breakdown"]["achievability"], 0);
    assert_eq!(rows[2]["grade"], "B+");
}

#[test]
fn test_report_exit_status() {
    let dir = TempDir::new().unwrap();
    let results = dir.path().join("results");
    fs::create_dir(&results).unwrap();
    fs::write(
        results.join("unit_tests.json"),
        r#"[{"passed": true}, {"passed": false}, {"passed": false}]"#,
    )
    .unwrap();
    let summary = dir.path().join("summary.json");

    let failing = krscore(&[
        "report",
        "--results-dir",
        results.to_str().unwrap(),
        "--output",
        summary.to_str().unwrap(),
    ]);
    assert!(!failing.status.success());
    assert!(summary.exists());

    let passing = krscore(&[
        "report",
        "--results-dir",
        results.to_str().unwrap(),
        "--output",
        summary.to_str().unwrap(),
        "--pass-threshold",
        "30",
    ]);
    assert!(passing.status.success());
}

#[test]
fn test_batch_rejects_empty_file() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("empty.csv");
    fs::write(&csv_path, "key_result,objective\n").unwrap();

    let output = krscore(&["batch", csv_path.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no key results"));
}
