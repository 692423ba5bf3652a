use crate::coefficients::{
    CONSERVATIVE_IDEAL, CONSERVATIVE_OBSERVED, OPERATIONAL_IDEAL, OPERATIONAL_OBSERVED,
};
use crate::error::{GaError, Result};
use crate::gmdh::{self, Equation};
use crate::individual::{CRITERIA_COUNT, TREATMENT_SIZE};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Treatment stage. Both stages share the search engine and differ only in data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Operational treatment for the early postoperative period
    Operational,
    /// Conservative (medication) treatment for the late postoperative period
    Conservative,
}

/// Inclusive integer range a treatment coordinate is drawn from, then divided by `divisor`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeneRange {
    pub low: i64,
    pub high: i64,
    pub divisor: f64,
}

impl GeneRange {
    pub const fn new(low: i64, high: i64) -> GeneRange {
        GeneRange {
            low,
            high,
            divisor: 1.0,
        }
    }

    /// Range with two-decimal resolution
    pub const fn hundredths(low: i64, high: i64) -> GeneRange {
        GeneRange {
            low,
            high,
            divisor: 100.0,
        }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.gen_range(self.low..=self.high) as f64 / self.divisor
    }

    pub fn min(&self) -> f64 {
        self.low as f64 / self.divisor
    }

    pub fn max(&self) -> f64 {
        self.high as f64 / self.divisor
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min() && value <= self.max()
    }
}

static OPERATIONAL_RANGES: [GeneRange; TREATMENT_SIZE] = [
    GeneRange::hundredths(1, 10000),
    GeneRange::hundredths(1, 25000),
    GeneRange::new(5, 60),
    GeneRange::new(1, 5),
    GeneRange::new(1, 2),
    GeneRange::new(1, 2),
    GeneRange::new(1, 2),
    GeneRange::new(1, 2),
    GeneRange::new(1, 2),
];

static CONSERVATIVE_RANGES: [GeneRange; TREATMENT_SIZE] = [
    GeneRange::hundredths(1, 4200),
    GeneRange::new(1, 81),
    GeneRange::hundredths(0, 100),
    GeneRange::new(1, 25),
    GeneRange::new(1, 7),
    GeneRange::new(1, 4),
    GeneRange::new(1, 3),
    GeneRange::new(1, 2),
    GeneRange::new(1, 2),
];

static OPERATIONAL_CONDITION_NAMES: [&str; 12] = [
    "x101", "x102", "x103", "x104", "x105", "x106", "x107", "x108", "x109", "x110", "x111",
    "x112",
];

static CONSERVATIVE_CONDITION_NAMES: [&str; 9] = [
    "pe",
    "vab",
    "pEarly",
    "plicat",
    "stroke",
    "thrombosis",
    "chyle",
    "avb",
    "snd",
];

static OPERATIONAL_TREATMENT_NAMES: [&str; TREATMENT_SIZE] = [
    "x201", "x202", "x203", "x204", "x205", "x206", "x207", "x208", "x209",
];

static CONSERVATIVE_TREATMENT_NAMES: [&str; TREATMENT_SIZE] = [
    "x401", "x402", "x403", "x404", "x405", "x406", "x407", "x408", "x409",
];

static OPERATIONAL_CRITERIA_NAMES: [&str; CRITERIA_COUNT] = [
    "x301", "x302", "x303", "x304", "x305", "x306", "x307", "x308", "x309",
];

static CONSERVATIVE_CRITERIA_NAMES: [&str; CRITERIA_COUNT] = [
    "x501", "x502", "x503", "x504", "x505", "x506", "x507", "x508", "x509",
];

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Operational => "FirstStage",
            Stage::Conservative => "SecondStage",
        }
    }

    pub fn condition_len(&self) -> usize {
        self.condition_names().len()
    }

    pub fn condition_names(&self) -> &'static [&'static str] {
        match self {
            Stage::Operational => &OPERATIONAL_CONDITION_NAMES,
            Stage::Conservative => &CONSERVATIVE_CONDITION_NAMES,
        }
    }

    pub fn treatment_names(&self) -> &'static [&'static str; TREATMENT_SIZE] {
        match self {
            Stage::Operational => &OPERATIONAL_TREATMENT_NAMES,
            Stage::Conservative => &CONSERVATIVE_TREATMENT_NAMES,
        }
    }

    pub fn criteria_names(&self) -> &'static [&'static str; CRITERIA_COUNT] {
        match self {
            Stage::Operational => &OPERATIONAL_CRITERIA_NAMES,
            Stage::Conservative => &CONSERVATIVE_CRITERIA_NAMES,
        }
    }

    pub fn gene_ranges(&self) -> &'static [GeneRange; TREATMENT_SIZE] {
        match self {
            Stage::Operational => &OPERATIONAL_RANGES,
            Stage::Conservative => &CONSERVATIVE_RANGES,
        }
    }

    /// Models evaluated against a candidate treatment
    pub fn observed_models(&self) -> &'static [Equation; CRITERIA_COUNT] {
        match self {
            Stage::Operational => &OPERATIONAL_OBSERVED,
            Stage::Conservative => &CONSERVATIVE_OBSERVED,
        }
    }

    /// Models of the best attainable outcome for the condition alone
    pub fn ideal_models(&self) -> &'static [Equation; CRITERIA_COUNT] {
        match self {
            Stage::Operational => &OPERATIONAL_IDEAL,
            Stage::Conservative => &CONSERVATIVE_IDEAL,
        }
    }

    /// Numeric encoding of (yes, no) answers used when the models were trained.
    /// The conservative stage was trained with the opposite convention.
    pub fn yes_no_encoding(&self) -> (f64, f64) {
        match self {
            Stage::Operational => (1.0, 2.0),
            Stage::Conservative => (2.0, 1.0),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Operational => write!(f, "operational"),
            Stage::Conservative => write!(f, "conservative"),
        }
    }
}

/// Validated patient condition vector for one stage
#[derive(Clone, Debug, PartialEq)]
pub struct Condition {
    stage: Stage,
    values: Vec<f64>,
}

impl Condition {
    /// Check length, finiteness and non-zero reciprocal features
    pub fn new(stage: Stage, values: Vec<f64>) -> Result<Condition> {
        if values.len() != stage.condition_len() {
            return Err(GaError::InputLength {
                expected: stage.condition_len(),
                actual: values.len(),
            });
        }

        let names = stage.condition_names();
        for (value, name) in values.iter().zip(names.iter()) {
            if !value.is_finite() {
                return Err(GaError::InvalidValue {
                    feature: name.to_string(),
                    reason: format!("{} is not a finite number", value),
                });
            }
        }

        let reciprocal = gmdh::reciprocal_conditions(stage.observed_models())
            .into_iter()
            .chain(gmdh::reciprocal_conditions(stage.ideal_models()));
        for i in reciprocal {
            if values[i] == 0.0 {
                return Err(GaError::InvalidValue {
                    feature: names[i].to_string(),
                    reason: "must be non-zero".to_string(),
                });
            }
        }

        Ok(Condition { stage, values })
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}
