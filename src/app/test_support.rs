use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::args::PositiveUsize;
use crate::domain::{RunConfig, Target};
use crate::error::{AppError, AppResult, HttpError};
use crate::http::{Throw, ThrowExecutor, ThrowRequest};

use super::report::ReportSink;

type Script = dyn Fn(usize, usize) -> Result<Throw, HttpError> + Send + Sync;

/// Executor that answers from a script keyed by (hammer id, throw index).
pub(crate) struct ScriptedExecutor {
    script: Box<Script>,
    delay: Option<Box<dyn Fn(usize) -> Duration + Send + Sync>>,
    calls: AtomicUsize,
}

impl ScriptedExecutor {
    pub(crate) fn new<F>(script: F) -> Self
    where
        F: Fn(usize, usize) -> Result<Throw, HttpError> + Send + Sync + 'static,
    {
        Self {
            script: Box::new(script),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn fixed(elapsed: Duration) -> Self {
        Self::new(move |_, _| {
            Ok(Throw {
                elapsed,
                body: Some("scripted body".to_owned()),
            })
        })
    }

    /// Sleeps for `delay(hammer_id)` of wall time before answering.
    pub(crate) fn with_delay<F>(mut self, delay: F) -> Self
    where
        F: Fn(usize) -> Duration + Send + Sync + 'static,
    {
        self.delay = Some(Box::new(delay));
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ThrowExecutor for ScriptedExecutor {
    async fn throw(&self, request: ThrowRequest<'_>) -> Result<Throw, HttpError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay.as_ref() {
            tokio::time::sleep(delay(request.hammer_id)).await;
        }
        let mut throw = (self.script)(request.hammer_id, request.throw_index)?;
        if !request.keep_body {
            throw.body = None;
        }
        Ok(throw)
    }
}

pub(crate) fn refused(url: &str) -> HttpError {
    HttpError::connection(
        url,
        std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused"),
    )
}

#[derive(Debug, Default)]
pub(crate) struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub(crate) fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }
}

impl ReportSink for MemorySink {
    fn emit(&self, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line.to_owned());
        }
    }
}

pub(crate) fn test_config(hammers: usize, throws: usize, verbose: bool) -> AppResult<RunConfig> {
    Ok(RunConfig {
        hammers: PositiveUsize::try_from(hammers)?,
        throws: PositiveUsize::try_from(throws)?,
        verbose,
        target: Target::parse("example.com")?,
    })
}

pub(crate) fn expect_line(lines: &[String], expected: &str) -> AppResult<()> {
    if lines.iter().any(|line| line == expected) {
        Ok(())
    } else {
        Err(AppError::from(format!(
            "missing line {:?} in {:?}",
            expected, lines
        )))
    }
}
