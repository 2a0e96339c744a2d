use thiserror::Error;

/// Errors raised while turning chart maker input into results
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("Please enter some numbers")]
    NoNumbers,

    #[error("Please enter valid numbers (could not read '{0}')")]
    InvalidNumber(String),

    #[error("Division by zero is not allowed")]
    DivisionByZero,

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Unknown chart type: {0}")]
    UnknownChartKind(String),
}

pub type ChartResult<T> = Result<T, ChartError>;
