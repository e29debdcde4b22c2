use std::time::Duration;

use tracing::debug;

use crate::domain::{HammerResult, RunConfig, ThrowMeasurement};
use crate::error::HttpError;
use crate::http::{ThrowExecutor, ThrowRequest};

use super::report::{ReportSink, hammer_average_line, throw_line};
use super::summary::mean;

/// Runs `config.throws` sequential throws and reports their average.
///
/// Each throw is reported as soon as it completes (the body first, in
/// verbose runs). The first failed throw ends the hammer: nothing after it
/// is attempted and no average is reported.
///
/// # Errors
///
/// Returns the `HttpError` of the first throw that fails.
pub async fn run_hammer(
    executor: &dyn ThrowExecutor,
    sink: &dyn ReportSink,
    config: &RunConfig,
    hammer_id: usize,
) -> Result<HammerResult, HttpError> {
    let throws = config.throws.as_non_zero();
    debug!(hammer = hammer_id, throws = throws.get(), "hammer started");

    let mut total = Duration::ZERO;
    for throw_index in 0..throws.get() {
        let throw = executor
            .throw(ThrowRequest {
                target: &config.target,
                hammer_id,
                throw_index,
                keep_body: config.verbose,
            })
            .await?;
        total = total.saturating_add(throw.elapsed);

        let measurement = ThrowMeasurement {
            hammer_id,
            throw_index,
            elapsed: throw.elapsed,
            body: throw.body,
        };
        if let Some(body) = measurement.body.as_deref() {
            sink.emit(body);
        }
        sink.emit(&throw_line(&measurement));
    }

    let average = mean(total, throws);
    sink.emit(&hammer_average_line(hammer_id, average));
    debug!(hammer = hammer_id, ?average, "hammer finished");

    Ok(HammerResult { hammer_id, average })
}
