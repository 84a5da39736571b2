use thiserror::Error;

/// Errors generated by the logs library.
#[derive(Debug, Error)]
pub enum Error {
    /// Errors generated installing the global subscriber.
    #[error(transparent)]
    InitSubscriber(#[from] tracing_subscriber::util::TryInitError),

    /// Errors generated by the IO module.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
