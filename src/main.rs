use clap::{Args, Parser, Subcommand};
use geneticrace::error::{GaError, Result};
use geneticrace::experiment::InvocationResult;
use geneticrace::input::{parse_request, ErrorResponse};
use geneticrace::logging::{init_logger, LogObserver};
use geneticrace::param::{self, Param};
use geneticrace::stage::Stage;
use log::{error, info};
use std::io::Read;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "geneticrace", version = geneticrace_version(), about = "Genetic search of postoperative treatments", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Parameter file (YAML), defaults to ~/.geneticrace/param.yaml when present
    #[arg(global = true, short, long)]
    param: Option<PathBuf>,

    /// Overrides general.seed
    #[arg(global = true, long)]
    seed: Option<u64>,

    /// Overrides general.log_level
    #[arg(global = true, long)]
    log_level: Option<String>,

    /// Overrides general.save_exp
    #[arg(global = true, long)]
    save: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Operational treatment (12 condition values)
    #[command(alias = "operational")]
    FirstStage(InputArgs),
    /// Conservative treatment (9 condition values)
    #[command(alias = "conservative")]
    SecondStage(InputArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Request body, e.g. '{"xList": [...]}'; read from stdin when omitted
    #[arg(short, long)]
    input: Option<String>,
}

fn geneticrace_version() -> &'static str {
    concat!(env!("CARGO_PKG_VERSION"), "#", env!("GENETICRACE_GIT_SHA"))
}

impl Cli {
    fn stage_and_input(&self) -> (Stage, &InputArgs) {
        match &self.command {
            Commands::FirstStage(args) => (Stage::Operational, args),
            Commands::SecondStage(args) => (Stage::Conservative, args),
        }
    }

    /// Parameter file and defaults, overlaid by the command line
    fn load_param(&self) -> Result<Param> {
        let mut param = param::load(self.param.as_deref())?;
        if let Some(seed) = self.seed {
            param.general.seed = seed;
        }
        if let Some(level) = &self.log_level {
            param.general.log_level = level.clone();
        }
        if let Some(save) = &self.save {
            param.general.save_exp = save.clone();
        }
        param::validate(&mut param)?;
        Ok(param)
    }
}

fn read_body(args: &InputArgs) -> Result<String> {
    match &args.input {
        Some(body) => Ok(body.clone()),
        None => {
            let mut body = String::new();
            std::io::stdin().read_to_string(&mut body)?;
            Ok(body)
        }
    }
}

fn execute(cli: &Cli, param: &Param) -> Result<InvocationResult> {
    let (stage, args) = cli.stage_and_input();
    let condition = parse_request(stage, &read_body(args)?)?;

    let exp = geneticrace::run(&condition, param, &LogObserver)?;
    info!(target: stage.name(), "{} completed in {:.3}s", exp.id, exp.execution_time);

    if !param.general.save_exp.is_empty() {
        exp.save_auto(&param.general.save_exp)?;
        info!(target: stage.name(), "Experiment saved to {}", param.general.save_exp);
    }

    Ok(exp.result)
}

fn fail(err: &GaError) -> ! {
    error!("{}", err);
    let body = serde_json::to_string(&ErrorResponse::from(err))
        .unwrap_or_else(|_| format!("{{\"error\": \"{}\"}}", err).replace('\n', " "));
    eprintln!("{}", body);
    process::exit(1);
}

fn main() {
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        if !e.use_stderr() {
            // --help and --version
            e.exit();
        }
        fail(&GaError::Validation(e.to_string().trim().to_string()))
    });

    let param = cli.load_param().unwrap_or_else(|e| fail(&e));
    let _logger = init_logger(&param.general);

    match execute(&cli, &param) {
        Ok(result) => match serde_json::to_string(&result) {
            Ok(body) => println!("{}", body),
            Err(e) => fail(&GaError::from(e)),
        },
        Err(e) => fail(&e),
    }
}
