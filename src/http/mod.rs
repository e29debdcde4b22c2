//! Throw execution: one timed HTTP request against the run target.
mod executor;


pub use executor::{ReqwestExecutor, Throw, ThrowExecutor, ThrowRequest};
