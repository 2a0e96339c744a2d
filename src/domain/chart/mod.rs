// Chart maker domain module
// Number parsing, aggregate operations and plot-ready series

pub mod errors;
pub mod operations;
pub mod series;
pub mod statistics;

pub use errors::{ChartError, ChartResult};
pub use operations::{parse_numbers, Operation, OperationResult, Transform};
pub use series::{ChartKind, ChartSeries, Point};
pub use statistics::Statistics;
