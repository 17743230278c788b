use serde::{Deserialize, Serialize};

use super::DistanceMatrix;

/// rounds to one decimal place, resolving ties to the even neighbor.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

/// a two-branch elementwise rescaling. values strictly greater than
/// `threshold` are multiplied by `high_factor`, all other values by
/// `low_factor`, and the product is rounded to one decimal place.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ScaleRule {
    pub threshold: f64,
    pub low_factor: f64,
    pub high_factor: f64,
}

impl Default for ScaleRule {
    fn default() -> Self {
        Self {
            threshold: 20.0,
            low_factor: 1.25,
            high_factor: 0.75,
        }
    }
}

impl ScaleRule {
    pub fn new(threshold: f64, low_factor: f64, high_factor: f64) -> Self {
        Self {
            threshold,
            low_factor,
            high_factor,
        }
    }

    /// the factor selected for this value.
    pub fn factor(&self, value: f64) -> f64 {
        if value > self.threshold {
            self.high_factor
        } else {
            self.low_factor
        }
    }

    pub fn apply(&self, value: f64) -> f64 {
        round_to_tenth(value * self.factor(value))
    }
}

/// values that a [`ScaleRule`] can be applied to elementwise.
pub trait Scale {
    fn scale(&self, rule: &ScaleRule) -> Self;
}

impl Scale for f64 {
    fn scale(&self, rule: &ScaleRule) -> Self {
        rule.apply(*self)
    }
}

impl Scale for DistanceMatrix {
    fn scale(&self, rule: &ScaleRule) -> Self {
        self.map_values(|v| rule.apply(v))
    }
}

impl<T: Scale> Scale for Vec<T> {
    fn scale(&self, rule: &ScaleRule) -> Self {
        self.iter().map(|v| v.scale(rule)).collect()
    }
}

/// rescales every cell of a distance matrix.
pub fn scale_matrix(matrix: &DistanceMatrix, rule: &ScaleRule) -> DistanceMatrix {
    matrix.scale(rule)
}
