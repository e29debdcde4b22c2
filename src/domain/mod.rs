//! Values that flow through a run: the target, the immutable run
//! configuration, and the per-throw / per-hammer / aggregate results.
mod run;


pub use run::{AggregateResult, HammerResult, RunConfig, Target, ThrowMeasurement};
