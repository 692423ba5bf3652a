use crate::ahp::Weights;
use crate::error::{GaError, Result};
use crate::ga::{ga, RunResult, SearchContext};
use crate::individual::Genes;
use crate::param::Param;
use crate::stage::Stage;
use crate::utils::display_genes;
use log::warn;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Answer of an invocation: the kept treatments and the complications of the first run
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct InvocationResult {
    pub treatments: Vec<Genes>,
    /// Criteria of the first run only, empty when no run produced a result
    pub complications: Vec<u8>,
}

/// Keep the treatments of the first `kept` runs and the criteria of the very first one
pub fn aggregate(runs: &[RunResult], kept: usize) -> InvocationResult {
    InvocationResult {
        treatments: runs.iter().take(kept).map(|run| run.treatment).collect(),
        complications: runs
            .first()
            .map(|run| run.criteria.to_vec())
            .unwrap_or_default(),
    }
}

/// Run the search `runs` times in sequence, each from a fresh population
///
/// # Arguments
///
/// * `context` - Oracle, weights, perfect value and parameters shared by every run.
/// * `runs` - Number of independent runs.
/// * `rng` - Random number generator, consumed sequentially by all runs.
pub fn run_all(context: &SearchContext, runs: usize, rng: &mut ChaCha8Rng) -> Result<Vec<RunResult>> {
    context.observer.invocation_started(context.stage, runs);
    let results = (0..runs)
        .map(|run| ga(context, run, rng))
        .collect::<Result<Vec<RunResult>>>()?;
    context
        .observer
        .invocation_finished(context.stage, results.len());
    Ok(results)
}

/// Full record of one invocation
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Experiment {
    /// Experiment ID, i.e., record name, stage and timestamp
    pub id: String,
    pub timestamp: String,
    /// Crate version and git hash used
    pub geneticrace_version: String,
    pub parameters: Param,

    pub stage: Stage,
    /// Decoded patient condition
    pub condition: Vec<f64>,
    pub weights: Weights,
    pub perfect_value: f64,

    /// Every run, in execution order
    pub runs: Vec<RunResult>,
    pub result: InvocationResult,

    /// Execution time in seconds
    pub execution_time: f64,
}

impl Experiment {
    /// Saves the experiment, choosing the format from the file extension.
    ///
    /// `.json`, `.yaml` and `.yml` are supported; anything else is saved as JSON
    /// next to the requested path.
    pub fn save_auto<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        match extension(path).as_str() {
            "json" => self.save_json(path),
            "yaml" | "yml" => self.save_yaml(path),
            _ => {
                warn!("Unknown format. Saving experiment in json.");
                self.save_json(path.with_extension("json"))
            }
        }
    }

    fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    fn save_yaml<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Loads an experiment, detecting the format from the file extension
    pub fn load_auto<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        match extension(path).as_str() {
            "json" => Ok(serde_json::from_str(&content)?),
            "yaml" | "yml" => Ok(serde_yaml::from_str(&content)?),
            _ => serde_json::from_str(&content).or_else(|json_err| {
                serde_yaml::from_str(&content).map_err(|_| GaError::Json(json_err))
            }),
        }
    }
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase()
}

impl fmt::Display for Experiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} ({}, {}) perfect value {:.6}",
            self.id, self.stage, self.geneticrace_version, self.perfect_value
        )?;
        for (i, run) in self.runs.iter().enumerate() {
            writeln!(
                f,
                "#{:<3} {:<10} gen {:>4} mut {:>3} fit {:>10.6} [{}]",
                i + 1,
                run.termination,
                run.generations,
                run.mutations,
                run.fit,
                display_genes(&run.treatment)
            )?;
        }
        write!(f, "Completed in {:.3}s", self.execution_time)
    }
}
