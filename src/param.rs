use crate::error::{GaError, Result};
use crate::utils::app_dir;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Parameter file looked up in the application directory when none is given
pub const DEFAULT_PARAM_FILE: &str = "param.yaml";

// Field definitions and associated default values

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Param {
    #[serde(default)]
    pub general: General,
    #[serde(default)]
    pub ga: GA,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct General {
    #[serde(default = "seed_default")]
    pub seed: u64,
    #[serde(default = "log_level_default")]
    pub log_level: String,
    /// Empty means `~/.geneticrace/logs`
    #[serde(default = "empty_string")]
    pub log_dir: String,
    #[serde(default = "log_base_default")]
    pub log_base: String,
    #[serde(default = "log_suffix_default")]
    pub log_suffix: String,
    #[serde(default = "log_max_bytes_default")]
    pub log_max_bytes: u64,
    #[serde(default = "log_keep_files_default")]
    pub log_keep_files: usize,
    #[serde(default = "true_default")]
    pub log_to_file: bool,
    /// Experiment record path (.json, .yaml or .yml); empty disables saving
    #[serde(default = "empty_string")]
    pub save_exp: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GA {
    #[serde(default = "population_size_default")]
    pub population_size: usize,
    #[serde(default = "max_generations_default")]
    pub max_generations: usize,
    #[serde(default = "runs_default")]
    pub runs: usize,
    #[serde(default = "kept_treatments_default")]
    pub kept_treatments: usize,
}

impl Default for General {
    fn default() -> Self {
        General {
            seed: seed_default(),
            log_level: log_level_default(),
            log_dir: empty_string(),
            log_base: log_base_default(),
            log_suffix: log_suffix_default(),
            log_max_bytes: log_max_bytes_default(),
            log_keep_files: log_keep_files_default(),
            log_to_file: true_default(),
            save_exp: empty_string(),
        }
    }
}

impl Default for GA {
    fn default() -> Self {
        GA {
            population_size: population_size_default(),
            max_generations: max_generations_default(),
            runs: runs_default(),
            kept_treatments: kept_treatments_default(),
        }
    }
}

impl Param {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Read and validate a YAML parameter file
pub fn get(param_file: &Path) -> Result<Param> {
    let param_file_reader = File::open(param_file).map_err(|e| {
        GaError::Configuration(format!("cannot open {}: {}", param_file.display(), e))
    })?;
    let param_reader = BufReader::new(param_file_reader);

    let mut config: Param = serde_yaml::from_reader(param_reader)?;

    validate(&mut config)?;

    Ok(config)
}

/// `~/.geneticrace/param.yaml`
pub fn default_param_file() -> Option<PathBuf> {
    app_dir().map(|dir| dir.join(DEFAULT_PARAM_FILE))
}

/// Built-in defaults, overlaid by the explicit file, else by the default file when present
pub fn load(explicit: Option<&Path>) -> Result<Param> {
    match explicit {
        Some(path) => get(path),
        None => match default_param_file().filter(|path| path.is_file()) {
            Some(path) => get(&path),
            None => {
                let mut param = Param::default();
                validate(&mut param)?;
                Ok(param)
            }
        },
    }
}

pub fn validate(param: &mut Param) -> Result<()> {
    if param.ga.population_size < 2 {
        return Err(GaError::Configuration(format!(
            "Invalid population_size={}. Mating needs at least 2 candidates.",
            param.ga.population_size
        )));
    }

    if param.ga.max_generations == 0 {
        return Err(GaError::Configuration(
            "Invalid max_generations=0. Must be >= 1.".to_string(),
        ));
    }

    if param.ga.runs == 0 {
        return Err(GaError::Configuration("Invalid runs=0. Must be >= 1.".to_string()));
    }

    if param.ga.kept_treatments == 0 {
        return Err(GaError::Configuration(
            "Invalid kept_treatments=0. Must be >= 1.".to_string(),
        ));
    }

    if param.ga.max_generations < 3 {
        warn!(
            "max_generations={} leaves no room for stagnation detection (needs 3 generations).",
            param.ga.max_generations
        );
    }

    if param.ga.population_size % 16 != 0 {
        warn!(
            "population_size={} is not a multiple of 16: the last crossover block is incomplete.",
            param.ga.population_size
        );
    }

    if param.ga.kept_treatments > param.ga.runs {
        warn!(
            "kept_treatments={} exceeds runs={}: at most {} treatments will be returned.",
            param.ga.kept_treatments, param.ga.runs, param.ga.runs
        );
    }

    if param.general.log_keep_files == 0 {
        warn!("log_keep_files=0: rotated log files are deleted immediately.");
    }

    Ok(())
}

// Default value definitions

fn seed_default() -> u64 {
    4815162342
}
fn empty_string() -> String {
    "".to_string()
}
fn log_level_default() -> String {
    "info".to_string()
}
fn log_base_default() -> String {
    "ga".to_string()
}
fn log_suffix_default() -> String {
    "log".to_string()
}
fn log_max_bytes_default() -> u64 {
    1_000_000
}
fn log_keep_files_default() -> usize {
    3
}
fn true_default() -> bool {
    true
}
fn population_size_default() -> usize {
    32
}
fn max_generations_default() -> usize {
    500
}
fn runs_default() -> usize {
    20
}
fn kept_treatments_default() -> usize {
    5
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_temp(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("param.yaml");
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let param = Param::default();
        assert_eq!(param.general.seed, 4815162342);
        assert_eq!(param.general.log_level, "info");
        assert_eq!(param.general.log_base, "ga");
        assert_eq!(param.general.log_max_bytes, 1_000_000);
        assert_eq!(param.general.log_keep_files, 3);
        assert!(param.general.log_to_file);
        assert!(param.general.save_exp.is_empty());
        assert_eq!(param.ga.population_size, 32);
        assert_eq!(param.ga.max_generations, 500);
        assert_eq!(param.ga.runs, 20);
        assert_eq!(param.ga.kept_treatments, 5);
    }

    #[test]
    fn test_empty_yaml_gives_defaults() {
        let param: Param = serde_yaml::from_str("{}").unwrap();
        assert_eq!(param, Param::default());
    }

    #[test]
    fn test_sample_file_matches_defaults() {
        let param = get(Path::new("samples/param.yaml")).unwrap();
        assert_eq!(param, Param::default());
    }

    #[test]
    fn test_partial_file_overrides_only_given_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "general:\n  seed: 7\nga:\n  runs: 3\n");
        let param = get(&path).unwrap();

        assert_eq!(param.general.seed, 7);
        assert_eq!(param.ga.runs, 3);
        assert_eq!(param.ga.population_size, 32);
        assert_eq!(param.general.log_suffix, "log");
    }

    #[test]
    fn test_invalid_file_content_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "ga:\n  population_size: 1\n");
        let err = get(&path).unwrap_err();
        assert!(matches!(err, GaError::Configuration(_)), "{:?}", err);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.yaml");
        assert!(matches!(
            load(Some(&missing)),
            Err(GaError::Configuration(_))
        ));
    }

    #[test]
    fn test_validate_bounds() {
        let mut param = Param::default();
        param.ga.max_generations = 0;
        assert!(validate(&mut param).is_err());

        let mut param = Param::default();
        param.ga.runs = 0;
        assert!(validate(&mut param).is_err());

        let mut param = Param::default();
        param.ga.kept_treatments = 0;
        assert!(validate(&mut param).is_err());

        let mut param = Param::default();
        param.ga.population_size = 2;
        param.ga.max_generations = 1;
        assert!(validate(&mut param).is_ok());
    }
}
