use crate::ahp::Weights;
use crate::error::{GaError, Result};
use crate::fitness;
use crate::individual::{Evaluation, Individual};
use crate::oracle::Oracle;
use crate::stage::Stage;
use crate::utils::display_genes;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use std::fmt;

/// Crossover splits cycle over this many slots
pub const SPLIT_CYCLE: usize = 8;

/// Fixed-size set of candidate treatments evolved across generations
#[derive(Clone, PartialEq)]
pub struct Population {
    pub individuals: Vec<Individual>,
}

impl Population {
    pub fn new() -> Population {
        Population {
            individuals: Vec::new(),
        }
    }

    /// Fresh population of `size` candidates drawn uniformly from the stage ranges
    pub fn generate<R: Rng + ?Sized>(size: usize, stage: Stage, rng: &mut R) -> Population {
        Population {
            individuals: (0..size).map(|_| Individual::random(stage, rng)).collect(),
        }
    }

    /// Classify and score every candidate, replacing previous evaluations
    pub fn fit(&mut self, oracle: &dyn Oracle, weights: &Weights) -> Result<()> {
        let all_criteria = oracle.evaluate(self)?;
        for (individual, criteria) in self.individuals.iter_mut().zip(all_criteria) {
            individual.evaluation = Some(Evaluation {
                criteria,
                fit: fitness::score(&criteria, weights),
            });
        }
        Ok(())
    }

    /// Fitness of every candidate, in slot order. Fails if a candidate was never fitted.
    pub fn fits(&self) -> Result<Vec<f64>> {
        self.individuals
            .iter()
            .enumerate()
            .map(|(i, individual)| {
                individual
                    .fit()
                    .ok_or_else(|| GaError::Numeric(format!("candidate {} was not fitted", i)))
            })
            .collect()
    }

    /// Rebuild every slot from `snapshot`.
    ///
    /// Slot `i` takes its first `(i mod 8) + 1` genes from the father when
    /// `i mod 16 < 8` and from the mother otherwise; the other parent
    /// provides the remaining genes.
    ///
    /// # Arguments
    ///
    /// * `snapshot` - Previous generation, never modified while children are built.
    /// * `fathers` - Father index per slot.
    /// * `mothers` - Mother index per slot.
    pub fn cross_over(&mut self, snapshot: &Population, fathers: &[usize], mothers: &[usize]) {
        self.individuals = fathers
            .iter()
            .zip(mothers.iter())
            .enumerate()
            .map(|(i, (&father, &mother))| {
                let split = i % SPLIT_CYCLE + 1;
                let father = &snapshot.individuals[father];
                let mother = &snapshot.individuals[mother];
                if i % (2 * SPLIT_CYCLE) < SPLIT_CYCLE {
                    Individual::child(father, mother, split)
                } else {
                    Individual::child(mother, father, split)
                }
            })
            .collect();
    }

    /// Replace every candidate but slot 0 with a fresh random one
    pub fn mutate<R: Rng + ?Sized>(&mut self, stage: Stage, rng: &mut R) {
        for individual in self.individuals.iter_mut().skip(1) {
            *individual = Individual::random(stage, rng);
        }
    }
}

impl Default for Population {
    fn default() -> Self {
        Population::new()
    }
}

/// Selection probability per candidate, proportional to the inverse discrepancy
pub fn selection_probabilities(discrepancies: &[f64]) -> Result<Vec<f64>> {
    if let Some(d) = discrepancies.iter().find(|d| !(d.is_finite() && **d > 0.0)) {
        return Err(GaError::Numeric(format!(
            "cannot derive a selection probability from discrepancy {}",
            d
        )));
    }
    let inverses: Vec<f64> = discrepancies.iter().map(|d| 1.0 / d).collect();
    let total: f64 = inverses.iter().sum();
    Ok(inverses.iter().map(|v| v / total).collect())
}

/// Draw `n` father indices with replacement
pub fn select_fathers<R: Rng + ?Sized>(
    probabilities: &[f64],
    n: usize,
    rng: &mut R,
) -> Result<Vec<usize>> {
    let distribution = weighted_index(probabilities)?;
    Ok((0..n).map(|_| distribution.sample(rng)).collect())
}

/// Draw a mate for every father, redrawing until it is a different slot
pub fn select_mothers<R: Rng + ?Sized>(
    fathers: &[usize],
    probabilities: &[f64],
    rng: &mut R,
) -> Result<Vec<usize>> {
    let distribution = weighted_index(probabilities)?;
    let mut mothers = Vec::with_capacity(fathers.len());
    for &father in fathers {
        let has_other = probabilities
            .iter()
            .enumerate()
            .any(|(i, &p)| i != father && p > 0.0);
        if !has_other {
            return Err(GaError::Numeric(format!(
                "no candidate other than {} can be selected as a mate",
                father
            )));
        }
        let mut mother = distribution.sample(rng);
        while mother == father {
            mother = distribution.sample(rng);
        }
        mothers.push(mother);
    }
    Ok(mothers)
}

fn weighted_index(probabilities: &[f64]) -> Result<WeightedIndex<f64>> {
    WeightedIndex::new(probabilities)
        .map_err(|e| GaError::Numeric(format!("invalid selection weights: {}", e)))
}

impl fmt::Debug for Population {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, individual) in self.individuals.iter().enumerate() {
            match individual.fit() {
                Some(fit) => writeln!(f, "#{:<3} {:>10.6} [{}]", i, fit, display_genes(&individual.genes))?,
                None => writeln!(f, "#{:<3} {:>10} [{}]", i, "-", display_genes(&individual.genes))?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::individual::{Criteria, Genes, CRITERIA_COUNT, TREATMENT_SIZE};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Candidate `k` has every gene equal to `k`
    fn numbered_population(size: usize) -> Population {
        Population {
            individuals: (0..size)
                .map(|k| Individual::new([k as f64; TREATMENT_SIZE]))
                .collect(),
        }
    }

    struct FirstGeneOracle;

    impl Oracle for FirstGeneOracle {
        fn classify(&self, genes: &Genes) -> Result<Criteria> {
            let mut criteria = [1; CRITERIA_COUNT];
            if genes[0] > 1.0 {
                criteria[0] = 2;
            }
            Ok(criteria)
        }

        fn ideal(&self) -> Result<Criteria> {
            Ok([1; CRITERIA_COUNT])
        }
    }

    #[test]
    fn test_generate_respects_size_and_ranges() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let pop = Population::generate(32, Stage::Conservative, &mut rng);
        assert_eq!(pop.individuals.len(), 32);
        assert!(pop.individuals.iter().all(|i| i.is_within(Stage::Conservative)));
        assert!(pop.individuals.iter().all(|i| i.evaluation.is_none()));
    }

    #[test]
    fn test_fit_sets_evaluation_per_slot() {
        let weights = crate::ahp::priority_vector();
        let mut pop = numbered_population(3);
        assert!(pop.fits().is_err());

        pop.fit(&FirstGeneOracle, &weights).unwrap();
        let fits = pop.fits().unwrap();
        assert_eq!(fits[0], fits[1]);
        assert!(fits[2] < fits[1]);
        assert_eq!(pop.individuals[2].criteria().unwrap()[0], 2);
    }

    #[test]
    fn test_selection_probabilities_are_inverse_discrepancies() {
        let p = selection_probabilities(&[1.0, 2.0, 4.0]).unwrap();
        let total: f64 = p.iter().sum();
        assert!((total - 1.0).abs() < 1e-12);
        assert!((p[0] - 4.0 / 7.0).abs() < 1e-12);
        assert!((p[2] - 1.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_selection_probabilities_reject_non_positive_discrepancy() {
        assert!(matches!(
            selection_probabilities(&[1.0, 0.0]),
            Err(GaError::Numeric(_))
        ));
        assert!(selection_probabilities(&[1.0, -0.5]).is_err());
    }

    #[test]
    fn test_select_fathers_draws_with_replacement() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let fathers = select_fathers(&[0.5, 0.5], 32, &mut rng).unwrap();
        assert_eq!(fathers.len(), 32);
        assert!(fathers.iter().all(|&f| f < 2));
        assert!(fathers.contains(&0) && fathers.contains(&1));
    }

    #[test]
    fn test_select_fathers_follows_weights() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let fathers = select_fathers(&[0.0, 1.0, 0.0], 50, &mut rng).unwrap();
        assert!(fathers.iter().all(|&f| f == 1));
    }

    #[test]
    fn test_select_mothers_never_pairs_a_slot_with_itself() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let probabilities = selection_probabilities(&[0.1, 5.0, 5.0, 5.0]).unwrap();
        let fathers = select_fathers(&probabilities, 64, &mut rng).unwrap();
        let mothers = select_mothers(&fathers, &probabilities, &mut rng).unwrap();
        assert_eq!(mothers.len(), fathers.len());
        for (f, m) in fathers.iter().zip(mothers.iter()) {
            assert_ne!(f, m);
        }
    }

    #[test]
    fn test_select_mothers_fails_without_alternative() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let err = select_mothers(&[1], &[0.0, 1.0], &mut rng).unwrap_err();
        assert!(matches!(err, GaError::Numeric(_)));
    }

    #[test]
    fn test_cross_over_split_law() {
        let snapshot = numbered_population(32);
        let fathers: Vec<usize> = vec![1; 32];
        let mothers: Vec<usize> = vec![2; 32];
        let mut pop = snapshot.clone();
        pop.cross_over(&snapshot, &fathers, &mothers);

        for (i, child) in pop.individuals.iter().enumerate() {
            let split = i % 8 + 1;
            let (first, second) = if i % 16 < 8 { (1.0, 2.0) } else { (2.0, 1.0) };
            let inherited = child.genes.iter().filter(|&&g| g == first).count();
            assert_eq!(inherited, split, "slot {} inherited {:?}", i, child.genes);
            assert!(child.genes[..split].iter().all(|&g| g == first));
            assert!(child.genes[split..].iter().all(|&g| g == second));
        }
    }

    #[test]
    fn test_cross_over_first_parent_flips_at_slot_eight() {
        let snapshot = numbered_population(16);
        let mut pop = snapshot.clone();
        pop.cross_over(&snapshot, &[3; 16], &[5; 16]);
        assert_eq!(pop.individuals[7].genes[0], 3.0);
        assert_eq!(pop.individuals[8].genes[0], 5.0);
        // Split 8 leaves exactly one gene from the second parent
        assert_eq!(pop.individuals[15].genes[8], 3.0);
        assert_eq!(pop.individuals[15].genes[7], 5.0);
    }

    #[test]
    fn test_cross_over_reads_only_from_snapshot() {
        // Slot 0 is rewritten first; later slots must still see its old genes
        let snapshot = numbered_population(4);
        let mut pop = snapshot.clone();
        pop.cross_over(&snapshot, &[1, 0, 0, 0], &[2, 1, 1, 1]);
        assert_eq!(pop.individuals[0].genes[0], 1.0);
        assert_eq!(pop.individuals[1].genes[0], 0.0);
        assert_eq!(pop.individuals[1].genes[8], 1.0);
        assert_eq!(snapshot, numbered_population(4));
    }

    #[test]
    fn test_cross_over_is_deterministic() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let snapshot = Population::generate(32, Stage::Operational, &mut rng);
        let fathers: Vec<usize> = (0..32).map(|i| (i * 7) % 32).collect();
        let mothers: Vec<usize> = (0..32).map(|i| (i * 7 + 1) % 32).collect();

        let mut a = snapshot.clone();
        let mut b = snapshot.clone();
        a.cross_over(&snapshot, &fathers, &mothers);
        b.cross_over(&snapshot, &fathers, &mothers);
        assert_eq!(a, b);
        assert!(a.individuals.iter().all(|i| i.is_within(Stage::Operational)));
    }

    #[test]
    fn test_mutate_keeps_slot_zero() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut pop = Population::generate(32, Stage::Operational, &mut rng);
        let before = pop.clone();
        pop.mutate(Stage::Operational, &mut rng);

        assert_eq!(pop.individuals.len(), 32);
        assert_eq!(pop.individuals[0].genes, before.individuals[0].genes);
        let changed = pop
            .individuals
            .iter()
            .zip(before.individuals.iter())
            .skip(1)
            .filter(|(a, b)| a.genes != b.genes)
            .count();
        assert_eq!(changed, 31);
        assert!(pop.individuals.iter().all(|i| i.is_within(Stage::Operational)));
    }
}
