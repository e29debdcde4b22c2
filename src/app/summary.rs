use std::num::NonZeroUsize;
use std::time::Duration;

use crate::args::PositiveUsize;
use crate::domain::{AggregateResult, HammerResult};

/// Mean of the per-hammer means.
///
/// The divisor is the configured hammer count, not the number of throws.
/// This equals the throw-weighted mean only because every hammer runs the
/// same number of throws.
#[must_use]
pub fn aggregate(results: &[HammerResult], hammers: PositiveUsize) -> AggregateResult {
    let total = results
        .iter()
        .fold(Duration::ZERO, |acc, result| acc.saturating_add(result.average));
    AggregateResult {
        total_average: mean(total, hammers.as_non_zero()),
    }
}

/// `total / count`, truncated to whole nanoseconds.
pub(crate) fn mean(total: Duration, count: NonZeroUsize) -> Duration {
    let divisor = u128::try_from(count.get()).unwrap_or(u128::MAX);
    let nanos = total.as_nanos().checked_div(divisor).unwrap_or_default();
    Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
}
