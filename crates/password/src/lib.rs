#![deny(missing_docs)]
#![forbid(unsafe_code)]
//! Memorable password generation.
//!
//! Passwords are composed from randomly chosen dictionary words mixed
//! with random digits and an optional special character. Two
//! composition strategies are available, see [`Mode`].
//!
//! ```no_run
//! use wordpass_password::{
//!     CorpusSource, GeneratorConfig, Mode, PasswordGenerator,
//! };
//!
//! # fn main() -> wordpass_password::Result<()> {
//! let mut generator = PasswordGenerator::new(GeneratorConfig::default());
//! generator.load(&CorpusSource::Embedded)?;
//! println!("{}", generator.generate(Mode::Interleaved)?);
//! # Ok(())
//! # }
//! ```

mod composer;
mod config;
mod corpus;
mod error;
mod random;
mod token;

pub use composer::{compose, Mode, PasswordGenerator};
pub use config::{
    GeneratorConfig, DEFAULT_SPECIAL_CHARACTERS, MAX_COMPLEXITY,
    MAX_CORPUS_LINES,
};
pub use corpus::{CorpusSource, WordCorpus, EMBEDDED_WORDS};
pub use error::Error;
pub use random::{RandomSource, SecureRandom};
pub use token::Token;

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Numerical digits.
#[doc(hidden)]
pub const DIGITS: &[char] =
    &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
