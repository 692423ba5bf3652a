//! Diagnostic events of a search and the file logger the binary installs.
//!
//! The core never talks to a logger directly about run outcomes: it reports
//! them to a [`SearchObserver`]. [`LogObserver`] forwards them to the `log`
//! facade, [`NoopObserver`] drops them.

use crate::ga::RunResult;
use crate::param::General;
use crate::stage::Stage;
use crate::utils::{app_dir, display_named};
use flexi_logger::{
    Cleanup, Criterion, DeferredNow, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming,
    WriteMode,
};
use log::{debug, info, warn, Record};
use std::path::PathBuf;

/// Receives the lifecycle events of an invocation. Every method defaults to doing nothing.
pub trait SearchObserver {
    fn invocation_started(&self, _stage: Stage, _runs: usize) {}

    fn generation_limit_reached(&self, _stage: Stage, _run: usize, _generations: usize) {}

    fn run_finished(&self, _stage: Stage, _run: usize, _result: &RunResult) {}

    fn invocation_finished(&self, _stage: Stage, _solutions: usize) {}
}

pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// Forwards events to `log`, targeted at the stage name
pub struct LogObserver;

impl SearchObserver for LogObserver {
    fn invocation_started(&self, stage: Stage, runs: usize) {
        info!(target: stage.name(), "Starting genetic algorithm with {} runs", runs);
    }

    fn generation_limit_reached(&self, stage: Stage, run: usize, generations: usize) {
        warn!(
            target: stage.name(),
            "Run {}: genetic algorithm reached max generations ({}) without convergence",
            run + 1,
            generations
        );
    }

    fn run_finished(&self, stage: Stage, run: usize, result: &RunResult) {
        info!(
            target: stage.name(),
            "Run {}: {} after {} generations ({} mutations), fit {:.6} [{}]",
            run + 1,
            result.termination,
            result.generations,
            result.mutations,
            result.fit,
            display_named(stage.treatment_names(), &result.treatment)
        );
        debug!(
            target: stage.name(),
            "Run {} complications [{}]",
            run + 1,
            display_named(stage.criteria_names(), &result.criteria)
        );
    }

    fn invocation_finished(&self, stage: Stage, solutions: usize) {
        info!(
            target: stage.name(),
            "Genetic algorithm completed. Found {} solutions",
            solutions
        );
    }
}

/// `2024-01-31 12:00:00,123 [FirstStage] INFO message`
pub fn log_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "{} [{}] {} {}",
        now.format("%Y-%m-%d %H:%M:%S,%3f"),
        record.target(),
        record.level(),
        record.args()
    )
}

/// Directory the log files go to: `log_dir` when set, else `~/.geneticrace/logs`
pub fn log_directory(general: &General) -> Option<PathBuf> {
    if general.log_dir.is_empty() {
        app_dir().map(|dir| dir.join("logs"))
    } else {
        Some(PathBuf::from(&general.log_dir))
    }
}

fn start_file_logger(general: &General, directory: PathBuf) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_str(&general.log_level)?
        .log_to_file(
            FileSpec::default()
                .directory(directory)
                .basename(&general.log_base)
                .suffix(&general.log_suffix)
                .suppress_timestamp(),
        )
        .rotate(
            Criterion::Size(general.log_max_bytes),
            Naming::Numbers,
            Cleanup::KeepLogFiles(general.log_keep_files),
        )
        .append()
        .format(log_format)
        .write_mode(WriteMode::Direct)
        .start()
}

/// Install the rotating file logger.
///
/// Returns `None`, leaving logging disabled, when file logging is off or the
/// logger cannot be started. The handle must be kept alive for the logger to flush.
pub fn init_logger(general: &General) -> Option<LoggerHandle> {
    if !general.log_to_file {
        return None;
    }
    let directory = log_directory(general)?;
    if std::fs::create_dir_all(&directory).is_err() {
        return None;
    }
    start_file_logger(general, directory).ok()
}
