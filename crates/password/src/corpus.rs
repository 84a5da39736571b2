//! Word list loading.
use crate::{Error, GeneratorConfig, Result};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::PathBuf,
};

/// Word list compiled into the library, one word per line.
pub const EMBEDDED_WORDS: &str = include_str!("words.txt");

/// Location of a line oriented word resource.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum CorpusSource {
    /// Word list compiled into the library.
    #[default]
    Embedded,
    /// Plain text file with one word per line.
    File(PathBuf),
}

/// Ordered list of candidate words.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordCorpus {
    words: Vec<String>,
}

impl WordCorpus {
    /// Create a corpus from words already in memory.
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Load words from a source bounded by the configured
    /// maximum number of lines.
    ///
    /// Fails when fewer words are read than the configuration
    /// requires for each password.
    pub fn load(
        config: &GeneratorConfig,
        source: &CorpusSource,
    ) -> Result<Self> {
        config.validate()?;
        let corpus = match source {
            CorpusSource::Embedded => Self::from_reader(
                EMBEDDED_WORDS.as_bytes(),
                config.max_read_lines,
            )?,
            CorpusSource::File(path) => {
                let file = File::open(path)?;
                Self::from_reader(
                    BufReader::new(file),
                    config.max_read_lines,
                )?
            }
        };

        tracing::debug!(
            source = ?source,
            max_read_lines = config.max_read_lines,
            words = corpus.len(),
            "corpus::load",
        );

        if corpus.len() < config.number_of_words {
            return Err(Error::InsufficientCorpus {
                read: corpus.len(),
                required: config.number_of_words,
            });
        }
        Ok(corpus)
    }

    /// Read at most `max_lines` lines from a reader.
    ///
    /// Words are kept in source order and are not
    /// otherwise validated.
    pub fn from_reader(
        reader: impl BufRead,
        max_lines: usize,
    ) -> Result<Self> {
        let mut words = Vec::new();
        for line in reader.lines().take(max_lines) {
            words.push(line?);
        }
        Ok(Self { words })
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the corpus is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word at a position.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(|s| s.as_str())
    }

    /// Iterator over the words.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|s| s.as_str())
    }
}

impl From<Vec<String>> for WordCorpus {
    fn from(value: Vec<String>) -> Self {
        Self::new(value)
    }
}

impl From<&[&str]> for WordCorpus {
    fn from(value: &[&str]) -> Self {
        Self::new(value.iter().map(|s| s.to_string()).collect())
    }
}
