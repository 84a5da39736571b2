use rustyline::error::ReadlineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("number of passwords must be greater than zero")]
    ZeroCount,

    #[error(transparent)]
    Password(#[from] wordpass_password::Error),

    #[error(transparent)]
    Logs(#[from] wordpass_logs::Error),

    #[error(transparent)]
    Readline(#[from] ReadlineError),

    #[error(transparent)]
    TomlDeserialize(#[from] toml::de::Error),

    #[error(transparent)]
    TomlSerialize(#[from] toml::ser::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Ctrlc(#[from] ctrlc::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the user cancelled a prompt.
    pub fn is_interrupted(&self) -> bool {
        matches!(
            self,
            Error::Readline(ReadlineError::Interrupted)
                | Error::Readline(ReadlineError::Eof)
        )
    }
}
