use std::fmt;
use std::path::PathBuf;

/// Round to a fixed number of decimal places
pub fn round_decimals(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Index of the first minimal value
pub fn argmin(values: &[f64]) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (i, &v)| match best {
            Some((_, b)) if b <= v => best,
            _ => Some((i, v)),
        })
        .map(|(i, _)| i)
}

/// Number of distinct indices in a selection
pub fn distinct_count(indices: &[usize]) -> usize {
    let mut sorted = indices.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    sorted.len()
}

pub fn display_genes(genes: &[f64]) -> String {
    genes
        .iter()
        .map(|g| format!("{}", g))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `name=value` pairs, positionally
pub fn display_named<T: fmt::Display>(names: &[&str], values: &[T]) -> String {
    names
        .iter()
        .zip(values.iter())
        .map(|(name, value)| format!("{}={}", name, value))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Application directory (~/.geneticrace), when a home directory is known
pub fn app_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .filter(|home| !home.is_empty())
        .map(|home| PathBuf::from(home).join(".geneticrace"))
}
