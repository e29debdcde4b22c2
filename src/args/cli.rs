use std::ffi::OsString;

use clap::Parser;

use crate::error::UsageError;

use super::parsers::{command_line_end, parse_bool_env, parse_positive_usize};
use super::types::PositiveUsize;

/// Command line surface: `thor [-h HAMMERS] [-t THROWS] [-v] [-p] URL`.
///
/// `-h` is taken by the hammer count, so clap's built-in help and version
/// flags are disabled; `-p` prints the usage text instead.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "thor",
    about = "Hammer a URL with concurrent workers and report average latency.",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct ThorArgs {
    /// Number of hammers to utilize
    #[arg(
        short = 'h',
        value_name = "HAMMERS",
        env = "THOR_HAMMERS",
        default_value = "1",
        value_parser = parse_positive_usize
    )]
    pub hammers: PositiveUsize,

    /// Number of throws per hammer
    #[arg(
        short = 't',
        value_name = "THROWS",
        env = "THOR_THROWS",
        default_value = "1",
        value_parser = parse_positive_usize
    )]
    pub throws: PositiveUsize,

    /// Display verbose output (response bodies)
    #[arg(short = 'v', env = "THOR_VERBOSE", value_parser = parse_bool_env)]
    pub verbose: bool,

    /// Print usage and exit
    #[arg(short = 'p')]
    pub print_usage: bool,

    /// Target URL; `https://` is prefixed unless it starts with `http`
    #[arg(value_name = "URL")]
    pub url: Option<String>,
}

impl ThorArgs {
    /// Parses an explicit argument vector (program name first).
    ///
    /// # Errors
    ///
    /// Returns a `UsageError` for unknown flags, malformed counts, or any
    /// other argument clap rejects. Tokens after the URL, or after `-p`, are
    /// ignored.
    pub fn parse_from_iter<I, T>(args: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let end = command_line_end(&args)?;
        Self::try_parse_from(args.into_iter().take(end)).map_err(UsageError::from)
    }
}
