use super::test_support::parse_test_args;
use super::*;
use crate::error::{AppError, AppResult, UsageError};
use std::ffi::OsStr;

#[test]
fn parse_args_defaults() -> AppResult<()> {
    let args = parse_test_args(["thor", "example.com"])?;

    let checks = [
        (args.hammers.get() == 1, "Unexpected hammers"),
        (args.throws.get() == 1, "Unexpected throws"),
        (!args.verbose, "Expected verbose to be false"),
        (!args.print_usage, "Expected print_usage to be false"),
        (args.url.as_deref() == Some("example.com"), "Unexpected url"),
    ];
    for (ok, message) in checks {
        if !ok {
            return Err(AppError::from(message));
        }
    }
    Ok(())
}

#[test]
fn parse_args_flags_in_any_order() -> AppResult<()> {
    let args = parse_test_args(["thor", "-v", "-t", "3", "-h", "4", "http://localhost"])?;

    if args.hammers.get() != 4 {
        return Err(AppError::from(format!("hammers = {}", args.hammers.get())));
    }
    if args.throws.get() != 3 {
        return Err(AppError::from(format!("throws = {}", args.throws.get())));
    }
    if !args.verbose {
        return Err(AppError::from("Expected verbose to be true"));
    }
    Ok(())
}

#[test]
fn parse_args_print_usage_without_url() -> AppResult<()> {
    let args = parse_test_args(["thor", "-p"])?;
    if args.print_usage && args.url.is_none() {
        Ok(())
    } else {
        Err(AppError::from("Expected -p to parse without a URL"))
    }
}

#[test]
fn parse_args_unknown_flag_is_usage_error() -> AppResult<()> {
    match ThorArgs::parse_from_iter(["thor", "-z", "example.com"]) {
        Err(UsageError::UnexpectedArgument { arg }) if arg == "-z" => Ok(()),
        Err(err) => Err(AppError::from(format!("Unexpected error: {}", err))),
        Ok(_) => Err(AppError::from("Expected Err for unknown flag")),
    }
}

#[test]
fn parse_args_rejects_zero_hammers() -> AppResult<()> {
    match ThorArgs::parse_from_iter(["thor", "-h", "0", "example.com"]) {
        Err(UsageError::Cli { .. }) => Ok(()),
        Err(err) => Err(AppError::from(format!("Unexpected error: {}", err))),
        Ok(_) => Err(AppError::from("Expected Err for zero hammers")),
    }
}

#[test]
fn parse_args_rejects_non_numeric_throws() -> AppResult<()> {
    if ThorArgs::parse_from_iter(["thor", "-t", "many", "example.com"]).is_err() {
        Ok(())
    } else {
        Err(AppError::from("Expected Err for non-numeric throws"))
    }
}

#[test]
fn positive_usize_rejects_zero() -> AppResult<()> {
    match "0".parse::<PositiveUsize>() {
        Err(UsageError::ValueTooSmall { min: 1 }) => Ok(()),
        Err(err) => Err(AppError::from(format!("Unexpected error: {}", err))),
        Ok(_) => Err(AppError::from("Expected Err for zero")),
    }
}

#[test]
fn normalize_url_prefixes_https() -> AppResult<()> {
    let normalized = normalize_url("example.com");
    if normalized == "https://example.com" {
        Ok(())
    } else {
        Err(AppError::from(normalized))
    }
}

#[test]
fn normalize_url_passes_http_through() -> AppResult<()> {
    for raw in ["http://example.com", "https://example.com/path?q=1"] {
        let normalized = normalize_url(raw);
        if normalized != raw {
            return Err(AppError::from(normalized));
        }
    }
    Ok(())
}

#[test]
fn parse_bool_env_accepts_common_values() -> AppResult<()> {
    for (value, expected) in [("yes", true), ("ON", true), ("0", false), ("off", false)] {
        if parsers::parse_bool_env(value)? != expected {
            return Err(AppError::from(format!("Unexpected parse for {}", value)));
        }
    }
    if parsers::parse_bool_env("maybe").is_ok() {
        return Err(AppError::from("Expected Err for invalid boolean"));
    }
    Ok(())
}

#[test]
fn program_name_uses_basename() -> AppResult<()> {
    let name = program_name(Some(OsStr::new("/usr/local/bin/thor-dev")));
    if name != "thor-dev" {
        return Err(AppError::from(name));
    }
    let fallback = program_name(None);
    if fallback != "thor" {
        return Err(AppError::from(fallback));
    }
    Ok(())
}

#[test]
fn usage_text_lists_every_flag() -> AppResult<()> {
    let text = usage_text("thor");
    for flag in ["-h  HAMMERS", "-t  THROWS", "-v ", "-p "] {
        if !text.contains(flag) {
            return Err(AppError::from(format!("Missing flag {}", flag)));
        }
    }
    if text.starts_with("Usage: thor [-h HAMMERS -t THROWS] URL") {
        Ok(())
    } else {
        Err(AppError::from(text))
    }
}

#[test]
fn parse_args_ignores_tokens_after_url() -> AppResult<()> {
    for extra in ["extra", "-z", "-h"] {
        let args = parse_test_args(["thor", "example.com", extra])?;
        if args.url.as_deref() != Some("example.com") {
            return Err(AppError::from(format!("Unexpected url after {}", extra)));
        }
    }
    Ok(())
}

#[test]
fn parse_args_trailing_verbose_flag_is_ignored() -> AppResult<()> {
    let args = parse_test_args(["thor", "-t", "2", "example.com", "-v"])?;
    if args.verbose {
        return Err(AppError::from("Trailing -v enabled verbose output"));
    }
    if args.throws.get() != 2 {
        return Err(AppError::from(format!("throws = {}", args.throws.get())));
    }
    Ok(())
}

#[test]
fn parse_args_print_usage_stops_flag_reading() -> AppResult<()> {
    for rest in [&["-z"][..], &["-h", "abc"], &["-t", "0", "example.com"]] {
        let argv = ["thor", "-p"].iter().chain(rest.iter()).copied();
        let args = parse_test_args(argv)?;
        if !args.print_usage {
            return Err(AppError::from(format!("Expected -p before {:?}", rest)));
        }
    }
    Ok(())
}

#[test]
fn parse_args_unknown_flag_before_print_usage_is_error() -> AppResult<()> {
    match ThorArgs::parse_from_iter(["thor", "-z", "-p"]) {
        Err(UsageError::UnexpectedArgument { arg }) if arg == "-z" => Ok(()),
        Err(err) => Err(AppError::from(format!("Unexpected error: {}", err))),
        Ok(_) => Err(AppError::from("Expected Err for -z before -p")),
    }
}

#[test]
fn parse_args_bad_count_before_print_usage_is_error() -> AppResult<()> {
    if ThorArgs::parse_from_iter(["thor", "-h", "abc", "-p"]).is_err() {
        Ok(())
    } else {
        Err(AppError::from("Expected Err for -h abc before -p"))
    }
}
