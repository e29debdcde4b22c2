use std::ffi::OsString;

use super::types::PositiveUsize;
use crate::error::UsageError;

const DEFAULT_SCHEME_PREFIX: &str = "https://";

pub(super) fn parse_positive_usize(s: &str) -> Result<PositiveUsize, UsageError> {
    s.parse::<PositiveUsize>()
}

pub(crate) fn parse_bool_env(s: &str) -> Result<bool, UsageError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => Ok(true),
        "0" | "false" | "no" | "n" | "off" => Ok(false),
        _ => Err(UsageError::InvalidBoolean {
            value: s.to_owned(),
        }),
    }
}

/// Prefixes `https://` unless the raw URL already starts with `http`.
///
/// The prefix check is literal and case-sensitive, so `http://` and
/// `https://` URLs pass through untouched.
pub(crate) fn normalize_url(raw: &str) -> String {
    if raw.starts_with("http") {
        return raw.to_owned();
    }
    format!("{}{}", DEFAULT_SCHEME_PREFIX, raw)
}

/// Returns how many tokens of `args` (program name first) belong to the
/// command line proper.
///
/// Flags are read left to right and reading stops at the first non-flag
/// token, the URL; anything after it is ignored. A `-p` cuts the line right
/// after itself, so flags that follow it are never inspected. A malformed
/// `-h`/`-t` value keeps the whole line so the clap parser reports it.
///
/// # Errors
///
/// Returns `UsageError::UnexpectedArgument` for a leading flag thor does not
/// know.
pub(super) fn command_line_end(args: &[OsString]) -> Result<usize, UsageError> {
    let mut idx = 1;
    while let Some(token) = args.get(idx) {
        let token = token.to_string_lossy();
        match &*token {
            "-p" => return Ok(idx.saturating_add(1)),
            "-v" => idx = idx.saturating_add(1),
            "-h" | "-t" => {
                let value_ok = args
                    .get(idx.saturating_add(1))
                    .and_then(|value| value.to_str())
                    .is_some_and(|value| parse_positive_usize(value).is_ok());
                if !value_ok {
                    return Ok(args.len());
                }
                idx = idx.saturating_add(2);
            }
            flag if flag.starts_with('-') => {
                return Err(UsageError::UnexpectedArgument {
                    arg: flag.to_owned(),
                });
            }
            _ => return Ok(idx.saturating_add(1)),
        }
    }
    Ok(args.len())
}
