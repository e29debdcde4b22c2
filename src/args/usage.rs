use std::ffi::OsStr;
use std::path::Path;

const FALLBACK_PROGRAM_NAME: &str = "thor";

/// Base name of `argv[0]`, falling back to `thor`.
#[must_use]
pub fn program_name(argv0: Option<&OsStr>) -> String {
    argv0
        .and_then(|arg| Path::new(arg).file_name())
        .map_or_else(
            || FALLBACK_PROGRAM_NAME.to_owned(),
            |name| name.to_string_lossy().into_owned(),
        )
}

#[must_use]
pub fn usage_text(program: &str) -> String {
    format!(
        "Usage: {program} [-h HAMMERS -t THROWS] URL
    -h  HAMMERS     Number of hammers to utilize (1)
    -t  THROWS      Number of throws per hammer  (1)
    -v              Display verbose output
    -p              Print this usage and exit
"
    )
}
