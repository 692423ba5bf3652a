pub mod ahp;
pub mod coefficients;
pub mod error;
pub mod experiment;
pub mod fitness;
pub mod ga;
pub mod gmdh;
pub mod individual;
pub mod input;
pub mod logging;
pub mod oracle;
pub mod param;
pub mod population;
pub mod stage;
pub mod utils;

use crate::ahp::priority_vector;
use crate::error::Result;
use crate::experiment::{aggregate, run_all, Experiment};
use crate::ga::SearchContext;
use crate::logging::SearchObserver;
use crate::oracle::GmdhOracle;
use crate::param::Param;
use crate::stage::Condition;
use chrono::Local;
use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::Path;

/// Crate version with the git revision it was built from
pub fn version() -> String {
    format!(
        "{}#{}",
        env!("CARGO_PKG_VERSION"),
        env!("GENETICRACE_GIT_SHA")
    )
}

/// Search treatments for one patient condition.
///
/// Weights and the perfect value are computed once, then `param.ga.runs`
/// independent runs share a single RNG seeded with `param.general.seed`.
pub fn run(condition: &Condition, param: &Param, observer: &dyn SearchObserver) -> Result<Experiment> {
    let start = std::time::Instant::now();
    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S").to_string();
    let stage = condition.stage();

    let oracle = GmdhOracle::new(condition);
    let weights = priority_vector();
    let perfect_value = fitness::perfect_value(&oracle, &weights)?;
    debug!(
        target: stage.name(),
        "Weights {:?}, perfect value {}",
        weights,
        perfect_value
    );

    let context = SearchContext {
        stage,
        oracle: &oracle,
        weights,
        perfect_value,
        ga: &param.ga,
        observer,
    };
    let mut rng = ChaCha8Rng::seed_from_u64(param.general.seed);
    let runs = run_all(&context, param.ga.runs, &mut rng)?;
    let result = aggregate(&runs, param.ga.kept_treatments);

    let record_name = Path::new(&param.general.save_exp)
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("geneticrace");

    Ok(Experiment {
        id: format!("{}_{}_{}", record_name, stage, timestamp),
        timestamp,
        geneticrace_version: version(),
        parameters: param.clone(),

        stage,
        condition: condition.values().to_vec(),
        weights,
        perfect_value,

        runs,
        result,

        execution_time: start.elapsed().as_secs_f64(),
    })
}
