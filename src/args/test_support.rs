use crate::error::{AppError, AppResult};

use super::ThorArgs;

pub(crate) fn parse_test_args<I, T>(args: I) -> AppResult<ThorArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    ThorArgs::parse_from_iter(args).map_err(AppError::from)
}
