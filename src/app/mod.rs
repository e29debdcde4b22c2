//! Run orchestration: hammers, the pool that drives them, and the
//! aggregate report.
mod hammer;
mod pool;
mod report;
mod runner;
mod summary;

#[cfg(test)]
pub(crate) mod test_support;

pub use hammer::run_hammer;
pub use report::{ReportSink, StdoutSink, hammer_average_line, throw_line, total_average_line};
pub use runner::coordinate;
pub use summary::aggregate;
