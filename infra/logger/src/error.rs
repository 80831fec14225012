use std::borrow::Cow;

/// Errors that can occur during logger initialization.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Failure when configuring the rolling file appender (e.g., invalid path).
    #[error("rolling file appender error: {0}")]
    Appender(#[from] tracing_appender::rolling::InitError),

    /// A global tracing subscriber has already been initialized in this process.
    #[error("tracing subscriber error: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),

    /// Failure creating the log directory.
    #[error("failed to create log path: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration supplied to the logger builder.
    #[error("invalid logger configuration: {message}")]
    InvalidConfiguration { message: Cow<'static, str> },
}
