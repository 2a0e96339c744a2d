use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::errors::ChartError;

/// How a series should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Bar,
    Scatter,
}

impl FromStr for ChartKind {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "line" | "line chart" => Ok(ChartKind::Line),
            "bar" | "bar chart" => Ok(ChartKind::Bar),
            "scatter" | "scatter plot" => Ok(ChartKind::Scatter),
            _ => Err(ChartError::UnknownChartKind(s.to_string())),
        }
    }
}

/// A single (x, y) point
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Plot-ready data; drawing it is up to the caller
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub title: String,
    pub kind: ChartKind,
    pub points: Vec<Point>,
}

impl ChartSeries {
    /// Plots `values` against their zero-based position
    pub fn indexed(title: impl Into<String>, kind: ChartKind, values: &[f64]) -> Self {
        Self {
            title: title.into(),
            kind,
            points: values
                .iter()
                .enumerate()
                .map(|(i, y)| Point { x: i as f64, y: *y })
                .collect(),
        }
    }
}
