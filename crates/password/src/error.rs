use thiserror::Error;

/// Errors generated by the password library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when a random integer is requested
    /// for an empty range.
    #[error("invalid random range, min ({min}) must be less than max ({max})")]
    InvalidRange {
        /// Inclusive lower bound.
        min: usize,
        /// Exclusive upper bound.
        max: usize,
    },

    /// Error generated when the word resource does not contain
    /// enough words for the configuration.
    #[error(
        "not enough words in word resource (read {read}, required {required})"
    )]
    InsufficientCorpus {
        /// Number of words read.
        read: usize,
        /// Number of words required.
        required: usize,
    },

    /// Error generated when a password is requested before
    /// the word list has been loaded.
    #[error("word list not loaded, load words before generating passwords")]
    CorpusNotLoaded,

    /// Error generated when a separated password is requested
    /// without any words.
    #[error("at least one word is required for a separated password")]
    EmptySelection,

    /// Error generated when the configuration is not usable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Errors generated by the random number generator.
    #[error(transparent)]
    Random(#[from] rand::Error),

    /// Errors generated by the IO module.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
