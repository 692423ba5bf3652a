use crate::ahp::Weights;
use crate::error::{GaError, Result};
use crate::fitness;
use crate::individual::{Criteria, Genes};
use crate::logging::SearchObserver;
use crate::oracle::Oracle;
use crate::param::GA;
use crate::population::{self, Population};
use crate::stage::Stage;
use crate::utils::{argmin, distinct_count, mean};
use log::debug;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

//-----------------------------------------------------------------------------
// Run outcome
//-----------------------------------------------------------------------------

/// How a run ended
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Termination {
    /// A candidate reached the perfect value
    Converged,
    /// Parent selection collapsed onto a single candidate
    Dominated,
    /// The generation cap was hit
    Exhausted,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::Converged => write!(f, "CONVERGED"),
            Termination::Dominated => write!(f, "DOMINATED"),
            Termination::Exhausted => write!(f, "EXHAUSTED"),
        }
    }
}

/// Best candidate of one run, with the criteria it was scored on
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    pub treatment: Genes,
    pub criteria: Criteria,
    pub fit: f64,
    pub termination: Termination,
    /// Generations evaluated, the last one included
    pub generations: usize,
    pub mutations: usize,
}

//-----------------------------------------------------------------------------
// Search state machine
//-----------------------------------------------------------------------------

/// State of a run. Terminal states carry the slot of the returned candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Init,
    Evaluating,
    Stagnating,
    Converged(usize),
    Dominated(usize),
    Exhausted(usize),
}

impl State {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            State::Converged(_) | State::Dominated(_) | State::Exhausted(_)
        )
    }
}

/// Read-only inputs shared by every run of an invocation
pub struct SearchContext<'a> {
    pub stage: Stage,
    pub oracle: &'a dyn Oracle,
    pub weights: Weights,
    pub perfect_value: f64,
    pub ga: &'a GA,
    pub observer: &'a dyn SearchObserver,
}

/// Mean discrepancies seen so far in a run
#[derive(Debug, Default)]
pub struct StagnationTracker {
    means: Vec<f64>,
}

impl StagnationTracker {
    pub fn new() -> StagnationTracker {
        StagnationTracker { means: Vec::new() }
    }

    /// Record a generation's mean; true when it repeats the previous one exactly,
    /// from the third recorded generation on.
    pub fn record(&mut self, mean: f64) -> bool {
        self.means.push(mean);
        let n = self.means.len();
        n >= 3 && self.means[n - 1] == self.means[n - 2]
    }
}

/// Outcome of parent selection and crossover on an evaluated population
#[derive(Debug, PartialEq)]
pub enum Reproduction {
    /// Every father drawn is this one slot
    Dominated(usize),
    Offspring(Population),
}

/// Select fathers and mothers, then cross them over into a new population.
///
/// # Arguments
///
/// * `population` - Evaluated generation, read as the crossover snapshot.
/// * `probabilities` - Selection probability per slot.
/// * `rng` - Random number generator.
///
/// # Returns
///
/// `Reproduction::Dominated` when the drawn fathers hold fewer than two distinct slots.
pub fn reproduce(
    population: &Population,
    probabilities: &[f64],
    rng: &mut ChaCha8Rng,
) -> Result<Reproduction> {
    let fathers = population::select_fathers(probabilities, population.individuals.len(), rng)?;
    if distinct_count(&fathers) <= 1 {
        let dominant = fathers
            .first()
            .copied()
            .ok_or_else(|| GaError::Numeric("cannot reproduce an empty population".to_string()))?;
        return Ok(Reproduction::Dominated(dominant));
    }
    let mothers = population::select_mothers(&fathers, probabilities, rng)?;

    let mut children = population.clone();
    children.cross_over(population, &fathers, &mothers);
    Ok(Reproduction::Offspring(children))
}

/// One run of the genetic algorithm
pub struct Search<'a> {
    context: &'a SearchContext<'a>,
    run: usize,
    rng: &'a mut ChaCha8Rng,
    state: State,
    population: Population,
    generation: usize,
    mutations: usize,
    stagnation: StagnationTracker,
}

impl<'a> Search<'a> {
    pub fn new(context: &'a SearchContext<'a>, run: usize, rng: &'a mut ChaCha8Rng) -> Search<'a> {
        Search {
            context,
            run,
            rng,
            state: State::Init,
            population: Population::new(),
            generation: 0,
            mutations: 0,
            stagnation: StagnationTracker::new(),
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Perform one transition. Terminal states are absorbing.
    pub fn step(&mut self) -> Result<State> {
        self.state = match self.state {
            State::Init => {
                self.population = Population::generate(
                    self.context.ga.population_size,
                    self.context.stage,
                    &mut *self.rng,
                );
                self.generation = 0;
                State::Evaluating
            }
            State::Evaluating => self.evaluate()?,
            State::Stagnating => {
                self.population.mutate(self.context.stage, &mut *self.rng);
                self.mutations += 1;
                self.generation += 1;
                State::Evaluating
            }
            terminal => terminal,
        };
        Ok(self.state)
    }

    fn evaluate(&mut self) -> Result<State> {
        let context = self.context;
        self.population.fit(context.oracle, &context.weights)?;
        let fits = self.population.fits()?;
        let discrepancies = fitness::discrepancies(context.perfect_value, &fits);

        if let Some(i) = discrepancies.iter().position(|&d| d <= 0.0) {
            debug!(
                target: context.stage.name(),
                "Run {} generation {}: candidate {} reached the perfect value {}",
                self.run + 1,
                self.generation,
                i,
                context.perfect_value
            );
            return Ok(State::Converged(i));
        }

        let mean_discrepancy = mean(&discrepancies);
        debug!(
            target: context.stage.name(),
            "Run {} generation {}: mean discrepancy {:.6}, best fit {:.6}",
            self.run + 1,
            self.generation,
            mean_discrepancy,
            fits.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
        );

        let last_generation = self.generation + 1 >= context.ga.max_generations;
        if self.stagnation.record(mean_discrepancy) {
            if last_generation {
                return self.exhausted(&discrepancies);
            }
            debug!(target: context.stage.name(), "Mean discrepancy repeated, mutating");
            return Ok(State::Stagnating);
        }

        let probabilities = population::selection_probabilities(&discrepancies)?;
        match reproduce(&self.population, &probabilities, self.rng)? {
            Reproduction::Dominated(i) => Ok(State::Dominated(i)),
            Reproduction::Offspring(_) if last_generation => self.exhausted(&discrepancies),
            Reproduction::Offspring(children) => {
                self.population = children;
                self.generation += 1;
                Ok(State::Evaluating)
            }
        }
    }

    /// Keep the evaluated generation and return its least-discrepant candidate
    fn exhausted(&self, discrepancies: &[f64]) -> Result<State> {
        let best = argmin(discrepancies)
            .ok_or_else(|| GaError::Numeric("no candidate to return".to_string()))?;
        self.context.observer.generation_limit_reached(
            self.context.stage,
            self.run,
            self.context.ga.max_generations,
        );
        Ok(State::Exhausted(best))
    }

    /// Step until a terminal state and report the returned candidate
    pub fn run(mut self) -> Result<RunResult> {
        loop {
            let (index, termination) = match self.step()? {
                State::Converged(i) => (i, Termination::Converged),
                State::Dominated(i) => (i, Termination::Dominated),
                State::Exhausted(i) => (i, Termination::Exhausted),
                _ => continue,
            };
            return self.result(index, termination);
        }
    }

    fn result(&self, index: usize, termination: Termination) -> Result<RunResult> {
        let individual = self.population.individuals.get(index).ok_or_else(|| {
            GaError::Numeric(format!("candidate {} is outside the population", index))
        })?;
        let evaluation = individual
            .evaluation
            .ok_or_else(|| GaError::Numeric(format!("candidate {} was not fitted", index)))?;
        Ok(RunResult {
            treatment: individual.genes,
            criteria: evaluation.criteria,
            fit: evaluation.fit,
            termination,
            generations: self.generation + 1,
            mutations: self.mutations,
        })
    }
}

/// Run the genetic algorithm once from a fresh population
///
/// # Arguments
///
/// * `context` - Oracle, weights, perfect value and parameters of the invocation.
/// * `run` - Zero-based run index, used for reporting.
/// * `rng` - Random number generator, shared across runs.
///
/// # Returns
///
/// The candidate the run terminated on.
pub fn ga(context: &SearchContext, run: usize, rng: &mut ChaCha8Rng) -> Result<RunResult> {
    let result = Search::new(context, run, rng).run()?;
    context.observer.run_finished(context.stage, run, &result);
    Ok(result)
}
