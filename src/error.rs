use thiserror::Error;

use crate::language::{Difficulty, Language};

#[derive(Error, Debug)]
pub enum PosGameError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Generator timed out, could not be reached, or answered with nothing usable
    #[error("External service unavailable: {0}")]
    ExternalServiceUnavailable(String),

    #[error("Text failed {language} script validation: {text:?}")]
    ValidationFailure { language: Language, text: String },

    #[error("No lexicon entries matched for {language}")]
    LexiconMiss { language: Language },

    #[error("Tagging unavailable: {0}")]
    TaggingUnavailable(String),

    #[error("Corpus has no {difficulty} sentences for {language}")]
    EmptyCorpus {
        language: Language,
        difficulty: Difficulty,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown language code: {0}")]
    UnknownLanguage(String),

    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),
}

pub type Result<T> = std::result::Result<T, PosGameError>;
