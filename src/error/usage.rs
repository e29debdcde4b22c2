use clap::error::{ContextKind, ErrorKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UsageError {
    #[error("Unexpected argument '{arg}'.")]
    UnexpectedArgument { arg: String },
    #[error("Missing URL.")]
    MissingUrl,
    #[error("Value must be >= {min}.")]
    ValueTooSmall { min: u64 },
    #[error("Invalid value: {source}")]
    InvalidNumber {
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Invalid boolean '{value}'. Expected true/false, yes/no, on/off, or 1/0.")]
    InvalidBoolean { value: String },
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("{source}")]
    Cli {
        #[source]
        source: clap::Error,
    },
}

impl From<clap::Error> for UsageError {
    fn from(source: clap::Error) -> Self {
        if source.kind() != ErrorKind::UnknownArgument {
            return UsageError::Cli { source };
        }
        let arg = source
            .get(ContextKind::InvalidArg)
            .map(ToString::to_string)
            .unwrap_or_default();
        UsageError::UnexpectedArgument { arg }
    }
}
