use std::fmt::Debug;
use thiserror::Error;
use tracing::metadata::LevelFilter;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("init logging error: `{0}`")]
    TryInitError(String),
}

pub struct Logging;

impl Logging {
    /// Installs the global subscriber on stderr. Stdout carries parameter values and service
    /// messages for the build agent.
    pub fn try_init() -> Result<(), LoggingError> {
        build_log_subscriber(std::io::stderr)
            .try_init()
            .map_err(|_| {
                LoggingError::TryInitError(
                    "unable to set build parameters global logging subscriber".to_string(),
                )
            })
    }
}

// One plain line per event: the agent timestamps build log lines itself and the
// `build_properties{path=..}` span tells which file the event is about.
fn build_log_subscriber<W>(make_writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_writer(make_writer)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .compact()
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .finish()
}
