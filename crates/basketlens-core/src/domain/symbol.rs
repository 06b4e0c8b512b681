use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

const MAX_SYMBOL_LEN: usize = 15;

/// Normalized equity ticker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Parse and normalize a ticker to uppercase.
    ///
    /// Listed tickers start with a letter and otherwise use letters,
    /// digits, `.` (share classes) and `-` (some preferred listings).
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();

        let mut normalized = String::with_capacity(trimmed.len());
        for (index, ch) in trimmed.chars().enumerate() {
            let ch = ch.to_ascii_uppercase();
            match ch {
                'A'..='Z' => {}
                '0'..='9' | '.' | '-' if index > 0 => {}
                _ if index == 0 => {
                    return Err(ValidationError::SymbolInvalidStart { ch });
                }
                _ => return Err(ValidationError::SymbolInvalidChar { ch, index }),
            }
            normalized.push(ch);
        }

        match normalized.len() {
            0 => Err(ValidationError::EmptySymbol),
            len if len > MAX_SYMBOL_LEN => Err(ValidationError::SymbolTooLong {
                len,
                max: MAX_SYMBOL_LEN,
            }),
            _ => Ok(Self(normalized)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Symbol {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Symbol {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Symbol> for String {
    fn from(value: Symbol) -> Self {
        value.0
    }
}
