use std::time::Duration;

use url::Url;

use crate::args::{PositiveUsize, ThorArgs, normalize_url};
use crate::error::UsageError;

/// Normalized request destination shared by every hammer in a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    raw: String,
    url: Url,
}

impl Target {
    /// Normalizes `raw` and checks that the result is an absolute URL.
    ///
    /// # Errors
    ///
    /// Returns `UsageError::InvalidUrl` when the normalized URL does not parse.
    pub fn parse(raw: &str) -> Result<Self, UsageError> {
        let normalized = normalize_url(raw);
        let url = Url::parse(&normalized).map_err(|err| UsageError::InvalidUrl {
            url: normalized.clone(),
            source: err,
        })?;
        Ok(Self {
            raw: normalized,
            url,
        })
    }

    /// The normalized URL exactly as requested.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub hammers: PositiveUsize,
    pub throws: PositiveUsize,
    pub verbose: bool,
    pub target: Target,
}

impl RunConfig {
    /// Builds the run configuration from parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns `UsageError::MissingUrl` when no URL was given, or
    /// `UsageError::InvalidUrl` when it cannot be normalized into one.
    pub fn from_args(args: &ThorArgs) -> Result<Self, UsageError> {
        let raw = args.url.as_deref().ok_or(UsageError::MissingUrl)?;
        Ok(Self {
            hammers: args.hammers,
            throws: args.throws,
            verbose: args.verbose,
            target: Target::parse(raw)?,
        })
    }
}

/// One throw as seen by its hammer.
#[derive(Debug, Clone)]
pub struct ThrowMeasurement {
    pub hammer_id: usize,
    pub throw_index: usize,
    pub elapsed: Duration,
    /// Only materialized in verbose runs.
    pub body: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HammerResult {
    pub hammer_id: usize,
    pub average: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregateResult {
    pub total_average: Duration,
}
