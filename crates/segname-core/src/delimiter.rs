use crate::codec::{DEFAULT_DELIMITER, ESCAPE_CHARACTER};
use crate::error::ArgumentError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated delimiter: exactly one character, never the escape character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Delimiter(char);

impl Delimiter {
    /// The canonical delimiter used by data strings
    pub const DEFAULT: Delimiter = Delimiter(DEFAULT_DELIMITER);

    pub fn new(c: char) -> Result<Self, ArgumentError> {
        if c == ESCAPE_CHARACTER {
            return Err(ArgumentError::EscapeAsDelimiter);
        }
        Ok(Self(c))
    }

    pub fn as_char(self) -> char {
        self.0
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<char> for Delimiter {
    type Error = ArgumentError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c)
    }
}

impl TryFrom<&str> for Delimiter {
    type Error = ArgumentError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(ArgumentError::EmptyDelimiter),
            (Some(c), None) => Self::new(c),
            (Some(_), Some(_)) => Err(ArgumentError::MultiCharDelimiter(s.to_string())),
        }
    }
}

impl TryFrom<String> for Delimiter {
    type Error = ArgumentError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}

impl From<Delimiter> for String {
    fn from(d: Delimiter) -> String {
        d.0.to_string()
    }
}

impl From<Delimiter> for char {
    fn from(d: Delimiter) -> char {
        d.0
    }
}

impl FromStr for Delimiter {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}
