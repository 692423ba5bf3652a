use crate::error::Result;
use crate::gmdh::Equation;
use crate::individual::{Criteria, Genes, CRITERIA_COUNT, NO_COMPLICATION, TREATMENT_SIZE};
use crate::population::Population;
use crate::stage::{Condition, Stage};

/// Maps a candidate treatment to complication classes for a fixed patient
pub trait Oracle {
    /// Classes predicted for one candidate
    fn classify(&self, genes: &Genes) -> Result<Criteria>;

    /// Best attainable classes for the patient, independent of any treatment
    fn ideal(&self) -> Result<Criteria>;

    /// Classes for every candidate of a population, in population order
    fn evaluate(&self, population: &Population) -> Result<Vec<Criteria>> {
        population
            .individuals
            .iter()
            .map(|individual| self.classify(&individual.genes))
            .collect()
    }
}

/// Oracle backed by the frozen GMDH models of a stage
pub struct GmdhOracle<'a> {
    condition: &'a Condition,
}

impl<'a> GmdhOracle<'a> {
    pub fn new(condition: &'a Condition) -> GmdhOracle<'a> {
        GmdhOracle { condition }
    }

    pub fn stage(&self) -> Stage {
        self.condition.stage()
    }

    fn apply(&self, models: &[Equation; CRITERIA_COUNT], treatment: &[f64]) -> Result<Criteria> {
        let mut criteria = [NO_COMPLICATION; CRITERIA_COUNT];
        for (class, model) in criteria.iter_mut().zip(models.iter()) {
            *class = model.classify(self.condition.values(), treatment)?;
        }
        Ok(criteria)
    }
}

impl Oracle for GmdhOracle<'_> {
    fn classify(&self, genes: &Genes) -> Result<Criteria> {
        self.apply(self.stage().observed_models(), genes)
    }

    fn ideal(&self) -> Result<Criteria> {
        // Ideal models never read treatment features
        self.apply(self.stage().ideal_models(), &[0.0; TREATMENT_SIZE])
    }
}
