//! Password composition strategies.
use crate::{
    CorpusSource, Error, GeneratorConfig, RandomSource, Result,
    SecureRandom, Token, WordCorpus, DIGITS,
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Composition strategy.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Digits and the special character are inserted between
    /// the words at random positions, never at the start.
    Interleaved,
    /// Words are joined by separators made of one special
    /// character or a run of one or two digits.
    #[default]
    Separated,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Interleaved => "interleaved",
                Self::Separated => "separated",
            }
        )
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "a" | "interleaved" => Ok(Self::Interleaved),
            "2" | "b" | "separated" => Ok(Self::Separated),
            _ => Err(format!("unknown mode '{}'", s)),
        }
    }
}

/// Compose a single password.
///
/// The corpus must have been loaded, an empty corpus is treated
/// as not loaded.
pub fn compose<R: RandomSource + ?Sized>(
    mode: Mode,
    config: &GeneratorConfig,
    corpus: &WordCorpus,
    rng: &R,
) -> Result<String> {
    if corpus.is_empty() {
        return Err(Error::CorpusNotLoaded);
    }
    match mode {
        Mode::Interleaved => interleaved(config, corpus, rng),
        Mode::Separated => separated(config, corpus, rng),
    }
}

fn interleaved<R: RandomSource + ?Sized>(
    config: &GeneratorConfig,
    corpus: &WordCorpus,
    rng: &R,
) -> Result<String> {
    let words = select_words(config, corpus, rng)?;

    let capacity = words.len()
        + config.number_of_numbers
        + usize::from(config.uses_special_character());
    let mut tokens = Vec::with_capacity(capacity);
    tokens.extend(words.into_iter().map(Token::Word));

    for _ in 0..config.number_of_numbers {
        let digit = random_digit(rng)?;
        let position = rng.next_int(1, tokens.len() + 1)?;
        tokens.insert(position, Token::Digit(digit));
    }

    if config.uses_special_character() {
        let special = random_special(config, rng)?;
        let position = rng.next_int(1, tokens.len() + 1)?;
        tokens.insert(position, Token::Special(special));
    }

    Ok(Token::render(&tokens, config.allow_spaces))
}

fn separated<R: RandomSource + ?Sized>(
    config: &GeneratorConfig,
    corpus: &WordCorpus,
    rng: &R,
) -> Result<String> {
    if config.number_of_words == 0 {
        return Err(Error::EmptySelection);
    }

    let words = select_words(config, corpus, rng)?;
    let mut words = words.into_iter();
    let mut password = words.next().ok_or(Error::EmptySelection)?;

    for word in words {
        let use_special = config.uses_special_character()
            && rng.next_int(0, 2)? == 0;
        if use_special {
            password.push(random_special(config, rng)?);
        } else {
            // one or two digits
            for _ in 0..rng.next_int(1, 3)? {
                password.push(random_digit(rng)?);
            }
        }
        password.push_str(&word);
    }

    Ok(password)
}

/// Draw the configured number of words with replacement and
/// apply the uppercase rule.
fn select_words<R: RandomSource + ?Sized>(
    config: &GeneratorConfig,
    corpus: &WordCorpus,
    rng: &R,
) -> Result<Vec<String>> {
    let mut words = Vec::with_capacity(config.number_of_words);
    for _ in 0..config.number_of_words {
        let index = rng.next_int(0, corpus.len())?;
        let word = corpus.get(index).ok_or(Error::CorpusNotLoaded)?;
        words.push(word.to_owned());
    }

    if config.uppercase_first_letter_of_one_word && !words.is_empty() {
        let index = rng.next_int(0, words.len())?;
        words[index] = uppercase_first(&words[index]);
    }

    Ok(words)
}

/// Uppercase the first character of a word.
///
/// Only one-to-one mappings are applied; a first character whose
/// uppercase form is several characters (`ß`, `ﬁ`) is kept as is.
fn uppercase_first(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut upper = first.to_uppercase();
    let first = match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => first,
    };
    std::iter::once(first).chain(chars).collect()
}

fn random_digit<R: RandomSource + ?Sized>(rng: &R) -> Result<char> {
    Ok(DIGITS[rng.next_int(0, DIGITS.len())?])
}

fn random_special<R: RandomSource + ?Sized>(
    config: &GeneratorConfig,
    rng: &R,
) -> Result<char> {
    let pool = &config.special_characters;
    Ok(pool[rng.next_int(0, pool.len())?])
}

/// Password generator that owns the loaded word list.
///
/// Load the corpus once with [`PasswordGenerator::load`] then
/// call [`PasswordGenerator::generate`] as many times as needed.
#[derive(Debug)]
pub struct PasswordGenerator<R: RandomSource = SecureRandom> {
    config: GeneratorConfig,
    corpus: Option<WordCorpus>,
    rng: R,
}

impl PasswordGenerator<SecureRandom> {
    /// Create a generator using the operating system random source.
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_random(config, SecureRandom)
    }
}

impl<R: RandomSource> PasswordGenerator<R> {
    /// Create a generator using a specific random source.
    pub fn with_random(config: GeneratorConfig, rng: R) -> Self {
        tracing::debug!(
            number_of_words = config.number_of_words,
            number_of_numbers = config.number_of_numbers,
            max_read_lines = config.max_read_lines,
            "generator::new"
        );
        Self {
            config,
            corpus: None,
            rng,
        }
    }

    /// Generator configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Loaded word list, if any.
    pub fn corpus(&self) -> Option<&WordCorpus> {
        self.corpus.as_ref()
    }

    /// Whether a word list has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.corpus.is_some()
    }

    /// Load the word list replacing any previously loaded words.
    ///
    /// Returns the number of words read. When loading fails the
    /// generator is left without a word list.
    pub fn load(&mut self, source: &CorpusSource) -> Result<usize> {
        self.corpus = None;
        let corpus = WordCorpus::load(&self.config, source)?;
        let len = corpus.len();
        self.corpus = Some(corpus);
        Ok(len)
    }

    /// Use words already in memory.
    pub fn set_corpus(&mut self, corpus: WordCorpus) -> Result<()> {
        self.corpus = None;
        if corpus.len() < self.config.number_of_words {
            return Err(Error::InsufficientCorpus {
                read: corpus.len(),
                required: self.config.number_of_words,
            });
        }
        self.corpus = Some(corpus);
        Ok(())
    }

    /// Generate one password.
    pub fn generate(&self, mode: Mode) -> Result<String> {
        let corpus = self.corpus.as_ref().ok_or(Error::CorpusNotLoaded)?;
        compose(mode, &self.config, corpus, &self.rng)
    }

    /// Generate a number of passwords.
    pub fn many(&self, mode: Mode, count: usize) -> Result<Vec<String>> {
        let mut passwords = Vec::with_capacity(count);
        for _ in 0..count {
            passwords.push(self.generate(mode)?);
        }
        Ok(passwords)
    }
}
