use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::model::PhonemeEntry;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown question mode: {raw} (expected name-to-symbol or symbol-to-name)")]
pub struct ModeParseError {
    pub raw: String,
}

/// Direction of a quiz question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum QuestionMode {
    /// Show the category name, ask for the IPA symbol.
    #[default]
    NameToSymbol,
    /// Show the IPA symbol, ask for the category name.
    SymbolToName,
}

impl QuestionMode {
    pub const ALL: [Self; 2] = [Self::NameToSymbol, Self::SymbolToName];

    /// Text shown as the question for `entry`.
    #[must_use]
    pub fn prompt_for(self, entry: &PhonemeEntry) -> &str {
        match self {
            Self::NameToSymbol => entry.name(),
            Self::SymbolToName => entry.symbol(),
        }
    }

    /// The option that counts as correct for `entry`.
    #[must_use]
    pub fn answer_for(self, entry: &PhonemeEntry) -> &str {
        match self {
            Self::NameToSymbol => entry.symbol(),
            Self::SymbolToName => entry.name(),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NameToSymbol => "name-to-symbol",
            Self::SymbolToName => "symbol-to-name",
        }
    }

    /// Short human-readable label for mode toggles.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::NameToSymbol => "Name → IPA",
            Self::SymbolToName => "IPA → Name",
        }
    }
}

impl fmt::Display for QuestionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionMode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "name-to-symbol" | "nameToIpa" => Ok(Self::NameToSymbol),
            "symbol-to-name" | "ipaToName" => Ok(Self::SymbolToName),
            other => Err(ModeParseError {
                raw: other.to_string(),
            }),
        }
    }
}
