use std::fmt;

/// One rendered unit of an interleaved password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Dictionary word.
    Word(String),
    /// Single decimal digit.
    Digit(char),
    /// Special character.
    Special(char),
}

impl Token {
    /// Whether this token is a digit.
    pub fn is_digit(&self) -> bool {
        matches!(self, Token::Digit(_))
    }

    /// Concatenate tokens left to right.
    ///
    /// When `spaces` is set a single space separates neighbouring
    /// tokens, except between two digits which always form one run.
    pub fn render(tokens: &[Token], spaces: bool) -> String {
        let mut password = String::new();
        let mut previous: Option<&Token> = None;
        for token in tokens {
            if let Some(previous) = previous {
                if spaces && !(previous.is_digit() && token.is_digit()) {
                    password.push(' ');
                }
            }
            password.push_str(&token.to_string());
            previous = Some(token);
        }
        password
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(word) => write!(f, "{}", word),
            Token::Digit(c) | Token::Special(c) => write!(f, "{}", c),
        }
    }
}
