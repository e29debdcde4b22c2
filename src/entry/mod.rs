mod plan;


use std::ffi::OsString;
use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, warn};

use crate::app::{ReportSink, StdoutSink};
use crate::args::{program_name, usage_text};
use crate::error::{AppError, HttpError};
use crate::http::{ReqwestExecutor, ThrowExecutor};
use crate::system::logger::{init_logging, no_color_requested};
use plan::{build_plan, execute_plan};

/// Process entry: parse `std::env::args_os`, run, and map the outcome to an
/// exit code.
#[must_use]
pub fn run() -> ExitCode {
    init_logging(no_color_requested());

    let sink: Arc<dyn ReportSink> = Arc::new(StdoutSink);
    run_with(std::env::args_os(), &sink, || {
        let executor: Arc<dyn ThrowExecutor> = Arc::new(ReqwestExecutor::new()?);
        Ok(executor)
    })
}

/// Runs one invocation against an explicit argument vector.
///
/// The executor is only built once the arguments describe an actual run, so
/// `-p` and usage errors never touch the network.
pub(crate) fn run_with<I, T, F>(
    raw_args: I,
    sink: &Arc<dyn ReportSink>,
    build_executor: F,
) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    F: FnOnce() -> Result<Arc<dyn ThrowExecutor>, HttpError>,
{
    let raw_args: Vec<OsString> = raw_args.into_iter().map(Into::into).collect();
    let program = program_name(raw_args.first().map(OsString::as_os_str));

    let outcome =
        build_plan(raw_args).and_then(|plan| execute_plan(plan, sink, build_executor));
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report_failure(&program, &err, sink.as_ref()),
    }
}

fn report_failure(program: &str, err: &AppError, sink: &dyn ReportSink) -> ExitCode {
    if let AppError::Usage(reason) = err {
        warn!("{}", reason);
    } else {
        error!("Run failed: {}", err);
        sink.emit(&err.to_string());
    }
    if err.shows_usage() {
        sink.emit(&usage_text(program));
    }
    err.exit_code()
}
