/// End-to-End Integration Test for the conservative (second) stage
///
/// This test validates the complete workflow on the reversed yes/no encoding
/// and the label-valued ideal model, then saves and reloads the experiment record.
///
/// Run with: cargo test --test test_ga_e2e_second_stage -- --nocapture
use geneticrace::experiment::Experiment;
use geneticrace::ga::Termination;
use geneticrace::individual::Individual;
use geneticrace::input::parse_request;
use geneticrace::logging::NoopObserver;
use geneticrace::param::Param;
use geneticrace::run;
use geneticrace::stage::Stage;

const REQUEST: &str =
    r#"{"xList": ["Ні", "Так", "Ні", "Ні", "Так", "Ні", "Так", "Ні", "Так"]}"#;

/// Helper function to create parameters for the conservative stage
fn create_second_stage_params() -> Param {
    let mut param = Param::default();
    param.general.seed = 4815162342;
    param.general.log_to_file = false;
    param
}

#[test]
fn test_second_stage_full_invocation() {
    let param = create_second_stage_params();
    let condition = parse_request(Stage::Conservative, REQUEST).unwrap();
    assert_eq!(condition.values(), &[1.0, 2.0, 1.0, 1.0, 2.0, 1.0, 2.0, 1.0, 2.0]);

    let exp = run(&condition, &param, &NoopObserver).unwrap();

    // Every ideal criterion is class 1 for this patient
    assert_eq!(exp.perfect_value, -1.0);
    assert_eq!(exp.runs.len(), 20);
    assert_eq!(exp.result.treatments.len(), 5);
    assert!(exp.result.treatments.iter().all(|t| t.len() == 9));
    assert_eq!(exp.result.complications.len(), 9);

    for result in &exp.runs {
        assert!(Individual::new(result.treatment).is_within(Stage::Conservative));
        if result.termination == Termination::Converged {
            assert_eq!(result.criteria, [1; 9]);
            assert_eq!(result.fit, exp.perfect_value);
        }
    }
}

#[test]
fn test_second_stage_is_reproducible_and_seed_sensitive() {
    let mut param = create_second_stage_params();
    param.ga.runs = 5;
    let condition = parse_request(Stage::Conservative, REQUEST).unwrap();

    let first = run(&condition, &param, &NoopObserver).unwrap();
    let second = run(&condition, &param, &NoopObserver).unwrap();
    assert_eq!(first.runs, second.runs);
    assert_eq!(first.result, second.result);

    param.general.seed = 7;
    let other = run(&condition, &param, &NoopObserver).unwrap();
    assert_ne!(
        first.result.treatments, other.result.treatments,
        "a different seed should explore different treatments"
    );
}

#[test]
fn test_second_stage_experiment_record_round_trip() {
    let mut param = create_second_stage_params();
    param.ga.runs = 4;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("second_stage.yaml");
    param.general.save_exp = path.to_string_lossy().to_string();

    let condition = parse_request(Stage::Conservative, REQUEST).unwrap();
    let exp = run(&condition, &param, &NoopObserver).unwrap();
    assert!(exp.id.starts_with("second_stage_conservative_"), "unexpected id {}", exp.id);

    exp.save_auto(&path).unwrap();
    let loaded = Experiment::load_auto(&path).unwrap();

    assert_eq!(loaded.id, exp.id);
    assert_eq!(loaded.stage, Stage::Conservative);
    assert_eq!(loaded.condition, exp.condition);
    assert_eq!(loaded.result, exp.result);
    assert_eq!(loaded.parameters, param);
    assert_eq!(loaded.runs.len(), 4);
}

#[test]
fn test_second_stage_rejects_first_stage_length() {
    let request = r#"{"xList": [120, 3.5, 4.2, 2, 1, 1.8, 2.1, 3.0, 4.5, 1, 2, 1]}"#;
    let err = parse_request(Stage::Conservative, request).unwrap_err();
    assert_eq!(err.to_string(), "Expected 9 input values, got 12");
}
