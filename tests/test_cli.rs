/// Command-line contract: JSON on stdout on success, `{"error"}` on stderr and
/// exit status 1 on failure.
///
/// Each test points HOME at a temporary directory so no user parameter file or
/// log directory is touched.
///
/// Run with: cargo test --test test_cli
use geneticrace::experiment::Experiment;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const FIRST_STAGE: &str =
    r#"{"xList": [120, 3.5, 4.2, 2, 1, 1.8, 2.1, 3.0, 4.5, "Так", "Ні", "Так"]}"#;
const SECOND_STAGE: &str = r#"{"xList": [1, 2, 1, 1, 2, 1, 2, 1, 2]}"#;

fn scratch_home() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

fn geneticrace(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_geneticrace"))
        .env("HOME", home)
        .args(args)
        .output()
        .expect("failed to launch geneticrace")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

fn stderr_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stderr).expect("stderr is not JSON")
}

#[test]
fn test_cli_first_stage_success() {
    let dir = scratch_home();
    let home = dir.path();
    let output = geneticrace(home, &["first-stage", "--input", FIRST_STAGE, "--seed", "42"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let body = stdout_json(&output);
    let treatments = body["treatments"].as_array().unwrap();
    assert_eq!(treatments.len(), 5);
    assert!(treatments.iter().all(|t| t.as_array().unwrap().len() == 9));
    let complications = body["complications"].as_array().unwrap();
    assert_eq!(complications.len(), 9);
    assert!(complications.iter().all(|c| c == 1 || c == 2));

    // Logs go to the rotating file, never to stdout
    assert!(home.join(".geneticrace").join("logs").exists());
}

#[test]
fn test_cli_output_is_reproducible() {
    let dir = scratch_home();
    let home = dir.path();
    let args = ["conservative", "--input", SECOND_STAGE, "--seed", "7"];
    let first = geneticrace(home, &args);
    let second = geneticrace(home, &args);
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_cli_rejects_wrong_length() {
    let dir = scratch_home();
    let home = dir.path();
    let input = r#"{"xList": [120, 3.5, 4.2, 2, 1, 1.8, 2.1, 3.0, 4.5, 1, 2]}"#;
    let output = geneticrace(home, &["first-stage", "--input", input]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert_eq!(
        stderr_json(&output)["error"],
        "Expected 12 input values, got 11"
    );
}

#[test]
fn test_cli_rejects_malformed_input() {
    let dir = scratch_home();
    let home = dir.path();
    for input in ["not json", r#"{"xList": [1, 2, "maybe", 1, 2, 1, 2, 1, 2]}"#] {
        let output = geneticrace(home, &["second-stage", "--input", input]);
        assert_eq!(output.status.code(), Some(1), "input {}", input);
        assert!(stderr_json(&output)["error"].is_string());
    }
}

#[test]
fn test_cli_reads_param_file_and_saves_experiment() {
    let dir = scratch_home();
    let home = dir.path();
    let param_path = home.join("param.yaml");
    std::fs::write(&param_path, "general:\n  log_to_file: false\nga:\n  runs: 2\n").unwrap();
    let save_path = home.join("exp.json");

    let output = geneticrace(
        home,
        &[
            "second-stage",
            "--input",
            SECOND_STAGE,
            "--param",
            param_path.to_str().unwrap(),
            "--save",
            save_path.to_str().unwrap(),
        ],
    );
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(stdout_json(&output)["treatments"].as_array().unwrap().len(), 2);

    let exp = Experiment::load_auto(&save_path).unwrap();
    assert_eq!(exp.runs.len(), 2);
    assert_eq!(exp.parameters.ga.runs, 2);
    assert!(!home.join(".geneticrace").join("logs").exists());
}

#[test]
fn test_cli_invalid_param_file_fails() {
    let dir = scratch_home();
    let home = dir.path();
    let param_path = home.join("param.yaml");
    std::fs::write(&param_path, "ga:\n  runs: 0\n").unwrap();

    let output = geneticrace(
        home,
        &["first-stage", "--input", FIRST_STAGE, "--param", param_path.to_str().unwrap()],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_json(&output)["error"]
        .as_str()
        .unwrap()
        .contains("runs"));
}
