use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Upper bound on the number of lines read from a word resource.
pub const MAX_CORPUS_LINES: usize = 172_681;

/// Highest complexity level.
///
/// Each level unlocks another ten thousand lines of the
/// word resource.
pub const MAX_COMPLEXITY: usize = 18;

const LINES_PER_COMPLEXITY: usize = 10_000;
const DEFAULT_COMPLEXITY: usize = 2;

/// Special characters used when none are configured.
pub const DEFAULT_SPECIAL_CHARACTERS: &[char] =
    &['~', '!', '@', '#', '$', '%', '^', '&', '*'];

/// Options that control how passwords are composed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GeneratorConfig {
    /// Maximum number of lines to read from the word resource.
    pub max_read_lines: usize,
    /// Number of words in each password.
    pub number_of_words: usize,
    /// Number of random digits in each password.
    pub number_of_numbers: usize,
    /// Separate the parts of an interleaved password with spaces.
    pub allow_spaces: bool,
    /// Include one special character.
    pub include_special_character: bool,
    /// Pool of special characters to choose from.
    pub special_characters: Vec<char>,
    /// Uppercase the first letter of one of the words.
    pub uppercase_first_letter_of_one_word: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_read_lines: Self::lines_for_complexity(DEFAULT_COMPLEXITY),
            number_of_words: 3,
            number_of_numbers: 2,
            allow_spaces: true,
            include_special_character: true,
            special_characters: DEFAULT_SPECIAL_CHARACTERS.to_vec(),
            uppercase_first_letter_of_one_word: true,
        }
    }
}

impl GeneratorConfig {
    /// Default configuration reading the number of lines
    /// unlocked by a complexity level.
    pub fn from_complexity(level: usize) -> Self {
        Self {
            max_read_lines: Self::lines_for_complexity(level),
            ..Default::default()
        }
    }

    /// Number of word resource lines for a complexity level.
    ///
    /// Levels are clamped to `1..=MAX_COMPLEXITY`.
    pub fn lines_for_complexity(level: usize) -> usize {
        let level = level.clamp(1, MAX_COMPLEXITY);
        MAX_CORPUS_LINES.min(level * LINES_PER_COMPLEXITY)
    }

    /// Whether a special character can be drawn.
    pub fn uses_special_character(&self) -> bool {
        self.include_special_character && !self.special_characters.is_empty()
    }

    /// Check the configuration can be used to load a corpus.
    pub fn validate(&self) -> Result<()> {
        if self.max_read_lines == 0 {
            return Err(Error::InvalidConfig(
                "max-read-lines must be greater than zero".to_owned(),
            ));
        }
        Ok(())
    }
}
