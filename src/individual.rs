use crate::stage::Stage;
use crate::utils::display_genes;
use rand::Rng;
use std::fmt;

/// Number of treatment parameters in a candidate
pub const TREATMENT_SIZE: usize = 9;
/// Number of complication criteria predicted per candidate
pub const CRITERIA_COUNT: usize = 9;

/// Class of a criterion without complication
pub const NO_COMPLICATION: u8 = 1;
/// Class of a criterion with complication
pub const COMPLICATION: u8 = 2;

/// Treatment parameter vector
pub type Genes = [f64; TREATMENT_SIZE];
/// Complication classes, each in {NO_COMPLICATION, COMPLICATION}
pub type Criteria = [u8; CRITERIA_COUNT];

/// Outcome of the last fitting of an individual
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Evaluation {
    pub criteria: Criteria,
    /// Negative weighted sum of the criteria, larger is better
    pub fit: f64,
}

/// Candidate treatment
#[derive(Clone, PartialEq)]
pub struct Individual {
    pub genes: Genes,
    /// Set by `Population::fit`, cleared whenever the genes change
    pub evaluation: Option<Evaluation>,
}

impl Individual {
    pub fn new(genes: Genes) -> Individual {
        Individual {
            genes,
            evaluation: None,
        }
    }

    /// Draw every coordinate independently and uniformly from its stage range
    pub fn random<R: Rng + ?Sized>(stage: Stage, rng: &mut R) -> Individual {
        let ranges = stage.gene_ranges();
        let mut genes = [0.0; TREATMENT_SIZE];
        for (gene, range) in genes.iter_mut().zip(ranges.iter()) {
            *gene = range.sample(rng);
        }
        Individual::new(genes)
    }

    /// Child taking its first `split` genes from `first` and the rest from `second`
    pub fn child(first: &Individual, second: &Individual, split: usize) -> Individual {
        let mut genes = second.genes;
        genes[..split].copy_from_slice(&first.genes[..split]);
        Individual::new(genes)
    }

    pub fn fit(&self) -> Option<f64> {
        self.evaluation.map(|e| e.fit)
    }

    pub fn criteria(&self) -> Option<Criteria> {
        self.evaluation.map(|e| e.criteria)
    }

    pub fn is_within(&self, stage: Stage) -> bool {
        self.genes
            .iter()
            .zip(stage.gene_ranges().iter())
            .all(|(gene, range)| range.contains(*gene))
    }
}

impl fmt::Debug for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.evaluation {
            Some(e) => write!(
                f,
                "[{}] fit {:.6} criteria {:?}",
                display_genes(&self.genes),
                e.fit,
                e.criteria
            ),
            None => write!(f, "[{}] (not fitted)", display_genes(&self.genes)),
        }
    }
}
