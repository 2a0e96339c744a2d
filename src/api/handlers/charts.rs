use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::middleware::ApiJson;
use crate::domain::chart::{
    parse_numbers, ChartKind, ChartSeries, Operation, OperationResult, Statistics, Transform,
};

/// Request body for the chart maker
#[derive(Debug, Deserialize)]
pub struct ChartRequest {
    /// Numbers separated by newlines or commas
    pub input: String,
    /// Operation label, e.g. "Sum" or "Standard Deviation"
    pub operation: String,
    /// Chart label, e.g. "Bar Chart"; defaults to a line chart
    pub chart: Option<String>,
    /// Applied to every number before the operation runs
    pub transform: Option<Transform>,
}

#[derive(Debug, Serialize)]
pub struct ChartResponse {
    pub operation: Operation,
    pub result: OperationResult,
    pub statistics: Statistics,
    pub series: ChartSeries,
}

/// Run a chart maker calculation
///
/// POST /api/charts
pub async fn calculate(
    ApiJson(req): ApiJson<ChartRequest>,
) -> Result<Json<ChartResponse>, ApiError> {
    let operation: Operation = req.operation.parse()?;
    let kind = match req.chart.as_deref() {
        Some(label) => label.parse()?,
        None => ChartKind::Line,
    };

    let mut values = parse_numbers(&req.input)?;
    if let Some(transform) = req.transform {
        values = transform.apply(&values)?;
    }

    let result = operation.apply(&values)?;
    let statistics = Statistics::from_values(&values)?;
    let series = ChartSeries::indexed(format!("{} Visualization", operation), kind, &values);

    tracing::debug!("Calculated {} over {} value(s)", operation, values.len());
    Ok(Json(ChartResponse {
        operation,
        result,
        statistics,
        series,
    }))
}
