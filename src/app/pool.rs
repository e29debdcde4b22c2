use std::num::NonZeroUsize;
use std::sync::Arc;

use tokio::runtime::{Builder, Runtime};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::domain::{HammerResult, RunConfig};
use crate::error::{AppError, AppResult, HttpError, PoolError};
use crate::http::ThrowExecutor;

use super::hammer::run_hammer;
use super::report::ReportSink;

type HammerHandle = JoinHandle<Result<HammerResult, HttpError>>;

/// Fixed-size pool with one runtime worker thread per hammer.
pub(crate) struct HammerPool {
    runtime: Runtime,
    size: NonZeroUsize,
}

impl HammerPool {
    pub(crate) fn new(size: usize) -> Result<Self, PoolError> {
        let size = NonZeroUsize::new(size).ok_or(PoolError::NoWorkers)?;
        let runtime = Builder::new_multi_thread()
            .worker_threads(size.get())
            .thread_name("thor-hammer")
            .enable_all()
            .build()
            .map_err(|err| PoolError::Runtime { source: err })?;
        debug!(workers = size.get(), "hammer pool started");
        Ok(Self { runtime, size })
    }

    /// Launches one hammer per worker and returns their results ordered by
    /// hammer id, whatever order they finish in.
    ///
    /// A failed hammer does not cancel its siblings: every launched hammer
    /// is awaited, then the first failure in hammer-id order is returned.
    pub(crate) fn run(
        &self,
        config: &Arc<RunConfig>,
        executor: &Arc<dyn ThrowExecutor>,
        sink: &Arc<dyn ReportSink>,
    ) -> AppResult<Vec<HammerResult>> {
        self.runtime.block_on(async {
            let mut handles: Vec<HammerHandle> = Vec::with_capacity(self.size.get());
            for hammer_id in 0..self.size.get() {
                let config = Arc::clone(config);
                let executor = Arc::clone(executor);
                let sink = Arc::clone(sink);
                handles.push(tokio::spawn(async move {
                    run_hammer(executor.as_ref(), sink.as_ref(), &config, hammer_id).await
                }));
            }
            collect_in_order(handles).await
        })
    }
}

async fn collect_in_order(handles: Vec<HammerHandle>) -> AppResult<Vec<HammerResult>> {
    let mut results = Vec::with_capacity(handles.len());
    let mut first_error: Option<AppError> = None;

    for (hammer_id, handle) in handles.into_iter().enumerate() {
        let err = match handle.await {
            Ok(Ok(result)) => {
                results.push(result);
                continue;
            }
            Ok(Err(err)) => AppError::from(err),
            Err(err) => AppError::from(err),
        };
        warn!(hammer = hammer_id, "hammer failed: {}", err);
        if first_error.is_none() {
            first_error = Some(err);
        }
    }

    first_error.map_or(Ok(results), Err)
}
