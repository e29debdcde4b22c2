mod app;
mod http;
mod pool;
mod usage;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use http::HttpError;
pub use pool::PoolError;
pub use usage::UsageError;
