//! Analytic hierarchy process (Saaty) priority weights for the complication criteria.
//!
//! The comparison table encodes a strict ranking: criterion 1 matters most and
//! each next criterion proportionally less.

use crate::individual::CRITERIA_COUNT;
use statrs::statistics::Statistics;

/// Priority weight per criterion, positional
pub type Weights = [f64; CRITERIA_COUNT];

/// Pairwise comparison table: row 1 is [1, 2, .., 9], row i is row 1 divided by i
pub fn comparison_matrix() -> [[f64; CRITERIA_COUNT]; CRITERIA_COUNT] {
    let mut matrix = [[0.0; CRITERIA_COUNT]; CRITERIA_COUNT];
    for (i, row) in matrix.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            let first_row_value = (j + 1) as f64;
            *cell = if i == 0 {
                first_row_value
            } else {
                first_row_value / (i + 1) as f64
            };
        }
    }
    matrix
}

/// Normalised geometric means of the comparison rows
pub fn priority_vector() -> Weights {
    let matrix = comparison_matrix();
    let mut weights = [0.0; CRITERIA_COUNT];
    for (weight, row) in weights.iter_mut().zip(matrix.iter()) {
        *weight = row.iter().geometric_mean();
    }
    let total: f64 = weights.iter().sum();
    for weight in weights.iter_mut() {
        *weight /= total;
    }
    weights
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_matrix_rows() {
        let m = comparison_matrix();
        assert_eq!(m[0], [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(m[1][1], 1.0);
        assert_eq!(m[8][8], 1.0);
        assert_eq!(m[3][1], 0.5);
    }

    #[test]
    fn test_priority_vector_sums_to_one() {
        let w = priority_vector();
        let total: f64 = w.iter().sum();
        assert!((total - 1.0).abs() < 1e-12, "weights sum to {}", total);
    }

    #[test]
    fn test_priority_vector_is_positive_and_strictly_decreasing() {
        let w = priority_vector();
        assert!(w.iter().all(|&x| x > 0.0));
        for pair in w.windows(2) {
            assert!(pair[0] > pair[1], "{:?} is not strictly decreasing", w);
        }
    }

    #[test]
    fn test_priority_vector_known_values() {
        // Row i is row 1 scaled by 1/i, so w_i = (1/i) / H_9
        let harmonic: f64 = (1..=CRITERIA_COUNT).map(|i| 1.0 / i as f64).sum();
        let w = priority_vector();
        for (i, weight) in w.iter().enumerate() {
            let expected = 1.0 / (i + 1) as f64 / harmonic;
            assert!((weight - expected).abs() < 1e-12);
        }
        assert!((w[0] - 0.3534857623790153).abs() < 1e-12);
        assert!((w[8] - 0.039276195819890586).abs() < 1e-12);
    }
}
