use std::sync::Arc;

use tokio::runtime::Builder;
use tracing::debug;

use crate::domain::{AggregateResult, HammerResult, RunConfig};
use crate::error::{AppResult, PoolError};
use crate::http::ThrowExecutor;

use super::hammer::run_hammer;
use super::pool::HammerPool;
use super::report::{ReportSink, total_average_line};
use super::summary::aggregate;

/// Runs every hammer of `config`, then reports and returns the total
/// average.
///
/// A single hammer runs inline on a current-thread runtime; more than one
/// runs on a `HammerPool`. Either way the results are ordered by hammer id.
///
/// # Errors
///
/// Returns `AppError::Pool` when the runtime cannot be built, or the first
/// hammer failure (`AppError::Http` / `AppError::Join`). No total is
/// reported in that case.
pub fn coordinate(
    config: &RunConfig,
    executor: &Arc<dyn ThrowExecutor>,
    sink: &Arc<dyn ReportSink>,
) -> AppResult<AggregateResult> {
    debug!(
        hammers = config.hammers.get(),
        throws = config.throws.get(),
        target = config.target.as_str(),
        "starting run"
    );

    let results = if config.hammers.get() == 1 {
        run_inline(config, executor.as_ref(), sink.as_ref())?
    } else {
        let pool = HammerPool::new(config.hammers.get())?;
        pool.run(&Arc::new(config.clone()), executor, sink)?
    };

    let total = aggregate(&results, config.hammers);
    sink.emit(&total_average_line(&total));
    Ok(total)
}

pub(crate) fn run_inline(
    config: &RunConfig,
    executor: &dyn ThrowExecutor,
    sink: &dyn ReportSink,
) -> AppResult<Vec<HammerResult>> {
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| PoolError::Runtime { source: err })?;
    let result = runtime.block_on(run_hammer(executor, sink, config, 0))?;
    Ok(vec![result])
}
