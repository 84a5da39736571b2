use crate::Result;
use clap::Args;
use std::path::{Path, PathBuf};
use wordpass_password::{CorpusSource, GeneratorConfig, Mode};

pub mod config;
pub mod generate;
pub mod logs;
pub mod shell;

pub use config::Command as ConfigCommand;
pub use logs::Command as LogsCommand;

/// Options that override the generator configuration.
#[derive(Args, Debug, Default)]
pub struct GeneratorOptions {
    /// Composition mode (interleaved or separated).
    #[clap(short, long)]
    pub mode: Option<Mode>,

    /// Number of words in each password.
    #[clap(short, long)]
    pub words: Option<usize>,

    /// Number of random digits in each password.
    #[clap(short, long)]
    pub numbers: Option<usize>,

    /// Do not separate words and numbers with spaces.
    #[clap(long)]
    pub no_spaces: bool,

    /// Do not include a special character.
    #[clap(long)]
    pub no_special: bool,

    /// Pool of special characters to choose from.
    #[clap(long)]
    pub special: Option<String>,

    /// Do not uppercase the first letter of a word.
    #[clap(long)]
    pub no_uppercase: bool,

    /// Complexity of the words used (1 least complex, 18 most).
    #[clap(long)]
    pub complexity: Option<usize>,

    /// Maximum number of lines to read from the word list.
    #[clap(long, conflicts_with = "complexity")]
    pub max_lines: Option<usize>,
}

impl GeneratorOptions {
    /// Apply the options on top of a configuration.
    pub fn apply(&self, mut config: GeneratorConfig) -> GeneratorConfig {
        if let Some(level) = self.complexity {
            config.max_read_lines =
                GeneratorConfig::lines_for_complexity(level);
        }
        if let Some(max_lines) = self.max_lines {
            config.max_read_lines = max_lines;
        }
        if let Some(words) = self.words {
            config.number_of_words = words;
        }
        if let Some(numbers) = self.numbers {
            config.number_of_numbers = numbers;
        }
        if self.no_spaces {
            config.allow_spaces = false;
        }
        if let Some(special) = &self.special {
            config.special_characters = special.chars().collect();
            config.include_special_character = true;
        }
        if self.no_special {
            config.include_special_character = false;
        }
        if self.no_uppercase {
            config.uppercase_first_letter_of_one_word = false;
        }
        config
    }
}

/// Load a configuration file, when no file is given
/// the default configuration is used.
pub fn load_config(path: Option<&Path>) -> Result<GeneratorConfig> {
    let config = if let Some(path) = path {
        let contents = std::fs::read_to_string(path)?;
        let config: GeneratorConfig = toml::from_str(&contents)?;
        tracing::debug!(path = %path.display(), "config::load");
        config
    } else {
        GeneratorConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Word list location from an optional file path.
pub fn corpus_source(corpus: Option<PathBuf>) -> CorpusSource {
    corpus.map(CorpusSource::File).unwrap_or_default()
}
