use crate::ahp::Weights;
use crate::error::Result;
use crate::individual::Criteria;
use crate::oracle::Oracle;
use crate::utils::round_decimals;

/// Decimal places kept on a fitness value before it is compared
pub const FIT_DECIMALS: i32 = 15;

/// Negative weighted sum of the criteria, criterion i paired with weight i
pub fn score(criteria: &Criteria, weights: &Weights) -> f64 {
    let sum = criteria
        .iter()
        .zip(weights.iter())
        .fold(0.0, |acc, (&c, &w)| acc + -(c as f64) * w);
    round_decimals(sum, FIT_DECIMALS)
}

/// Fitness of the best attainable outcome for the oracle's patient
pub fn perfect_value(oracle: &dyn Oracle, weights: &Weights) -> Result<f64> {
    Ok(score(&oracle.ideal()?, weights))
}

/// Gap between the perfect value and each fitness
pub fn discrepancies(perfect_value: f64, fits: &[f64]) -> Vec<f64> {
    fits.iter().map(|fit| perfect_value - fit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ahp::priority_vector;
    use crate::individual::{COMPLICATION, CRITERIA_COUNT, NO_COMPLICATION};
    use crate::oracle::GmdhOracle;
    use crate::stage::{Condition, Stage};

    #[test]
    fn test_score_all_classes() {
        let w = priority_vector();
        assert!((score(&[NO_COMPLICATION; CRITERIA_COUNT], &w) + 1.0).abs() < 1e-12);
        assert!((score(&[COMPLICATION; CRITERIA_COUNT], &w) + 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_score_pairs_criteria_positionally() {
        let w = priority_vector();
        let mut first = [NO_COMPLICATION; CRITERIA_COUNT];
        first[0] = COMPLICATION;
        let mut last = [NO_COMPLICATION; CRITERIA_COUNT];
        last[8] = COMPLICATION;
        // A complication on the top-priority criterion costs the most
        assert!(score(&first, &w) < score(&last, &w));
        assert!((score(&first, &w) - (-1.0 - w[0])).abs() < 1e-12);
    }

    #[test]
    fn test_no_criteria_vector_beats_all_no_complication() {
        let w = priority_vector();
        let best = score(&[NO_COMPLICATION; CRITERIA_COUNT], &w);
        for mask in 0u32..(1 << CRITERIA_COUNT) {
            let mut criteria = [NO_COMPLICATION; CRITERIA_COUNT];
            for (i, c) in criteria.iter_mut().enumerate() {
                if mask & (1 << i) != 0 {
                    *c = COMPLICATION;
                }
            }
            assert!(score(&criteria, &w) <= best);
        }
    }

    #[test]
    fn test_perfect_value_operational_sample() {
        let condition = Condition::new(
            Stage::Operational,
            vec![120.0, 3.5, 4.2, 2.0, 1.0, 1.8, 2.1, 3.0, 4.5, 1.0, 2.0, 1.0],
        )
        .unwrap();
        let w = priority_vector();
        let perfect = perfect_value(&GmdhOracle::new(&condition), &w).unwrap();
        assert!((perfect - (-1.351942768971805)).abs() < 1e-12);
    }

    #[test]
    fn test_all_no_complication_ideal_reproduces_maximum() {
        let condition = Condition::new(
            Stage::Conservative,
            vec![1.0, 2.0, 1.0, 1.0, 2.0, 1.0, 2.0, 1.0, 2.0],
        )
        .unwrap();
        let w = priority_vector();
        let perfect = perfect_value(&GmdhOracle::new(&condition), &w).unwrap();
        assert_eq!(perfect, score(&[NO_COMPLICATION; CRITERIA_COUNT], &w));
    }

    #[test]
    fn test_discrepancies() {
        assert_eq!(discrepancies(-1.0, &[-1.5, -1.0, -2.0]), vec![0.5, 0.0, 1.0]);
    }
}
