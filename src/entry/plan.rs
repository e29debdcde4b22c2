use std::ffi::OsString;
use std::sync::Arc;

use crate::app::{ReportSink, coordinate};
use crate::args::{ThorArgs, program_name, usage_text};
use crate::domain::RunConfig;
use crate::error::{AppResult, HttpError};
use crate::http::ThrowExecutor;

pub(super) enum RunPlan {
    PrintUsage { program: String },
    Hammer(RunConfig),
}

pub(super) fn build_plan(raw_args: Vec<OsString>) -> AppResult<RunPlan> {
    let program = program_name(raw_args.first().map(OsString::as_os_str));
    let args = ThorArgs::parse_from_iter(raw_args)?;

    if args.print_usage {
        return Ok(RunPlan::PrintUsage { program });
    }

    Ok(RunPlan::Hammer(RunConfig::from_args(&args)?))
}

pub(super) fn execute_plan<F>(
    plan: RunPlan,
    sink: &Arc<dyn ReportSink>,
    build_executor: F,
) -> AppResult<()>
where
    F: FnOnce() -> Result<Arc<dyn ThrowExecutor>, HttpError>,
{
    match plan {
        RunPlan::PrintUsage { program } => {
            sink.emit(&usage_text(&program));
            Ok(())
        }
        RunPlan::Hammer(config) => {
            let executor = build_executor()?;
            coordinate(&config, &executor, sink)?;
            Ok(())
        }
    }
}
