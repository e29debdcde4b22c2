//! Core library for the `thor` CLI.
//!
//! `thor` drives a number of concurrent hammers against one URL. Each hammer
//! issues a fixed number of sequential throws (GET requests), reports the
//! elapsed time of every throw and its own average, and the run ends with
//! the mean of the per-hammer averages.
pub mod app;
pub mod args;
pub mod domain;
pub mod entry;
pub mod error;
pub mod http;
mod system;
