use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PosGameError;

/// Unicode block a non-Latin language is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptBlock {
    pub name: &'static str,
    pub first: char,
    pub last: char,
}

impl ScriptBlock {
    pub fn contains(&self, c: char) -> bool {
        (self.first..=self.last).contains(&c)
    }
}

const THAI_BLOCK: ScriptBlock = ScriptBlock {
    name: "Thai",
    first: '\u{0E00}',
    last: '\u{0E7F}',
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "th")]
    Thai,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Thai];

    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Thai => "th",
        }
    }

    /// Full language name, used in generator prompts
    pub fn name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Thai => "Thai",
        }
    }

    pub fn from_code(code: &str) -> Result<Self, PosGameError> {
        match code.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "th" | "thai" => Ok(Self::Thai),
            other => Err(PosGameError::UnknownLanguage(other.to_string())),
        }
    }

    /// Script block for non-Latin languages; `None` means Latin script
    pub fn script(&self) -> Option<ScriptBlock> {
        match self {
            Self::English => None,
            Self::Thai => Some(THAI_BLOCK),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = PosGameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = PosGameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(PosGameError::UnknownDifficulty(other.to_string())),
        }
    }
}
