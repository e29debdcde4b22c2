use crate::domain::{AggregateResult, ThrowMeasurement};
use std::time::Duration;

/// Destination for report lines.
///
/// Every call carries one complete line (or one response body) and must be
/// written in a single operation so lines from concurrent hammers never
/// tear, even though their order may interleave.
pub trait ReportSink: Send + Sync {
    fn emit(&self, line: &str);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl ReportSink for StdoutSink {
    fn emit(&self, line: &str) {
        println!("{}", line);
    }
}

#[must_use]
pub fn throw_line(measurement: &ThrowMeasurement) -> String {
    format!(
        "Hammer: {:>2}, Throw:{:>4}, Elapsed Time: {:>2.2}",
        measurement.hammer_id,
        measurement.throw_index,
        measurement.elapsed.as_secs_f64()
    )
}

#[must_use]
pub fn hammer_average_line(hammer_id: usize, average: Duration) -> String {
    format!(
        "Hammer: {:>2}, AVERAGE   , Elapsed Time: {:>2.2}",
        hammer_id,
        average.as_secs_f64()
    )
}

#[must_use]
pub fn total_average_line(aggregate: &AggregateResult) -> String {
    format!(
        "TOTAL AVERAGE ELAPSED TIME: {:>2.2}",
        aggregate.total_average.as_secs_f64()
    )
}
