use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::{ChartError, ChartResult};

/// Parses free-form numeric input
///
/// Entries may be separated by newlines or commas. Blank entries are
/// skipped; anything else must parse as a number.
///
/// # Example
/// ```
/// use stomp_counter::domain::chart::parse_numbers;
///
/// assert_eq!(parse_numbers("1\n2, 3.5\n\n").unwrap(), vec![1.0, 2.0, 3.5]);
/// assert!(parse_numbers("  \n ").is_err());
/// ```
pub fn parse_numbers(input: &str) -> ChartResult<Vec<f64>> {
    let numbers = input
        .split(['\n', ','])
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry
                .parse::<f64>()
                .map_err(|_| ChartError::InvalidNumber(entry.to_string()))
        })
        .collect::<ChartResult<Vec<f64>>>()?;

    if numbers.is_empty() {
        return Err(ChartError::NoNumbers);
    }
    Ok(numbers)
}

/// Aggregate operation offered by the chart maker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Sum,
    Average,
    Product,
    StandardDeviation,
    CumulativeSum,
}

/// Either a single number or one value per input
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OperationResult {
    Scalar(f64),
    Series(Vec<f64>),
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::Sum,
        Operation::Average,
        Operation::Product,
        Operation::StandardDeviation,
        Operation::CumulativeSum,
    ];

    /// Runs the operation over `values`
    ///
    /// # Returns
    /// * `Err(ChartError::NoNumbers)` - If `values` is empty
    pub fn apply(self, values: &[f64]) -> ChartResult<OperationResult> {
        if values.is_empty() {
            return Err(ChartError::NoNumbers);
        }

        let result = match self {
            Operation::Sum => OperationResult::Scalar(values.iter().sum()),
            Operation::Average => OperationResult::Scalar(mean(values)),
            Operation::Product => OperationResult::Scalar(values.iter().product()),
            Operation::StandardDeviation => OperationResult::Scalar(population_std_dev(values)),
            Operation::CumulativeSum => OperationResult::Series(
                values
                    .iter()
                    .scan(0.0, |acc, v| {
                        *acc += v;
                        Some(*acc)
                    })
                    .collect(),
            ),
        };
        Ok(result)
    }

    /// Label shown in the operation picker
    pub fn label(self) -> &'static str {
        match self {
            Operation::Sum => "Sum",
            Operation::Average => "Average",
            Operation::Product => "Product",
            Operation::StandardDeviation => "Standard Deviation",
            Operation::CumulativeSum => "Cumulative Sum",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Operation {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ChartError::UnknownOperation(s.to_string()))
    }
}

/// Element-wise arithmetic with a constant operand
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", content = "value", rename_all = "snake_case")]
pub enum Transform {
    Add(f64),
    Subtract(f64),
    Multiply(f64),
    Divide(f64),
}

impl Transform {
    /// Applies the transform to every value
    ///
    /// # Returns
    /// * `Err(ChartError::NoNumbers)` - If `values` is empty
    /// * `Err(ChartError::DivisionByZero)` - For `Divide(0.0)`
    pub fn apply(self, values: &[f64]) -> ChartResult<Vec<f64>> {
        if values.is_empty() {
            return Err(ChartError::NoNumbers);
        }

        let mapped: Vec<f64> = match self {
            Transform::Add(x) => values.iter().map(|v| v + x).collect(),
            Transform::Subtract(x) => values.iter().map(|v| v - x).collect(),
            Transform::Multiply(x) => values.iter().map(|v| v * x).collect(),
            Transform::Divide(x) => {
                if x == 0.0 {
                    return Err(ChartError::DivisionByZero);
                }
                values.iter().map(|v| v / x).collect()
            }
        };
        Ok(mapped)
    }
}

pub(crate) fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

pub(crate) fn population_std_dev(values: &[f64]) -> f64 {
    let mean = mean(values);
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}
