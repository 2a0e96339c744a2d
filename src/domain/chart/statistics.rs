use serde::Serialize;

use super::errors::{ChartError, ChartResult};
use super::operations::{mean, population_std_dev};

/// Descriptive statistics shown next to a chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl Statistics {
    /// Summarizes `values`
    ///
    /// # Returns
    /// * `Err(ChartError::NoNumbers)` - If `values` is empty
    pub fn from_values(values: &[f64]) -> ChartResult<Self> {
        if values.is_empty() {
            return Err(ChartError::NoNumbers);
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let mid = sorted.len() / 2;
        let median = if sorted.len() % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        };

        Ok(Self {
            mean: mean(values),
            median,
            std_dev: population_std_dev(values),
            min: sorted[0],
            max: sorted[sorted.len() - 1],
        })
    }
}
