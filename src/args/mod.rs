//! CLI argument types and parsing helpers.
mod cli;
pub(crate) mod parsers;
mod types;
mod usage;

#[cfg(test)]
mod test_support;
#[cfg(test)]
mod tests;

pub use cli::ThorArgs;
pub use types::PositiveUsize;
pub use usage::{program_name, usage_text};

pub(crate) use parsers::normalize_url;
