//! Polynomial models produced by the Group Method of Data Handling.
//!
//! Each model is a constant plus a sum of weighted products of condition and
//! treatment features, where a feature may enter as its reciprocal or square.
//! Models are plain data (see `coefficients`) so a single evaluator serves
//! every stage.

use crate::error::{GaError, Result};
use crate::individual::{COMPLICATION, NO_COMPLICATION};
use std::collections::BTreeSet;

/// Where a factor reads its value from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Var {
    Condition(usize),
    Treatment(usize),
}

/// One feature raised to a small integer power (-1, 1 or 2 in the frozen models)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Factor {
    pub var: Var,
    pub power: i8,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Term {
    pub coefficient: f64,
    pub factors: &'static [Factor],
}

/// How a rounded model output maps to a complication class
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Output {
    /// 0 means no complication, any other integer means complication
    Indicator,
    /// The rounded value is the class label itself, clamped into {1,2}
    Class,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Equation {
    pub intercept: f64,
    pub output: Output,
    pub terms: &'static [Term],
}

/// Zero model: always evaluates to 0, hence always "no complication".
pub const AVOIDABLE: Equation = Equation {
    intercept: 0.0,
    output: Output::Indicator,
    terms: &[],
};

pub const fn c(index: usize, power: i8) -> Factor {
    Factor {
        var: Var::Condition(index),
        power,
    }
}

pub const fn t(index: usize, power: i8) -> Factor {
    Factor {
        var: Var::Treatment(index),
        power,
    }
}

impl Factor {
    #[inline]
    fn value(&self, condition: &[f64], treatment: &[f64]) -> f64 {
        let x = match self.var {
            Var::Condition(i) => condition[i],
            Var::Treatment(i) => treatment[i],
        };
        match self.power {
            1 => x,
            -1 => 1.0 / x,
            2 => x * x,
            p => x.powi(p as i32),
        }
    }
}

impl Term {
    #[inline]
    fn value(&self, condition: &[f64], treatment: &[f64]) -> f64 {
        self.factors
            .iter()
            .fold(1.0, |acc, f| acc * f.value(condition, treatment))
            * self.coefficient
    }
}

impl Equation {
    /// Raw model output, summed left to right from the intercept
    pub fn evaluate(&self, condition: &[f64], treatment: &[f64]) -> f64 {
        self.terms
            .iter()
            .fold(self.intercept, |acc, term| acc + term.value(condition, treatment))
    }

    /// Evaluate and round to a complication class
    ///
    /// # Errors
    ///
    /// Returns `GaError::Numeric` when the model output is not finite, which
    /// happens when a reciprocal feature is zero.
    pub fn classify(&self, condition: &[f64], treatment: &[f64]) -> Result<u8> {
        let value = self.evaluate(condition, treatment);
        if !value.is_finite() {
            return Err(GaError::Numeric(format!(
                "model output is not finite ({})",
                value
            )));
        }
        Ok(class_of(value, self.output))
    }

    /// Features entering this model as a reciprocal
    pub fn reciprocal_vars(&self) -> impl Iterator<Item = Var> + '_ {
        self.terms
            .iter()
            .flat_map(|term| term.factors.iter())
            .filter(|f| f.power < 0)
            .map(|f| f.var)
    }
}

/// Round half to even, then map to a class
pub fn class_of(value: f64, output: Output) -> u8 {
    let rounded = value.round_ties_even();
    match output {
        Output::Indicator => {
            if rounded == 0.0 {
                NO_COMPLICATION
            } else {
                COMPLICATION
            }
        }
        Output::Class => {
            if rounded <= NO_COMPLICATION as f64 {
                NO_COMPLICATION
            } else {
                COMPLICATION
            }
        }
    }
}

/// Condition indices that must not be zero for a table to stay finite
pub fn reciprocal_conditions(table: &[Equation]) -> BTreeSet<usize> {
    table
        .iter()
        .flat_map(|eq| eq.reciprocal_vars())
        .filter_map(|var| match var {
            Var::Condition(i) => Some(i),
            Var::Treatment(_) => None,
        })
        .collect()
}
