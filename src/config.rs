use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::error::{PosGameError, Result};

// Default values for optional configuration keys
fn default_timeout_secs() -> u64 {
    75
}

fn default_history_cap() -> usize {
    32
}

fn default_tiers() -> Vec<TranslationTier> {
    vec![
        TranslationTier::Generator,
        TranslationTier::Lexicon,
        TranslationTier::Corpus,
    ]
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub memory: MemoryConfig,
    #[serde(default)]
    pub tagging: TaggingConfig,
    #[serde(default)]
    pub translate: TranslateConfig,
    #[serde(default)]
    pub corpus: CorpusConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Try the generator before falling back to the corpus
    pub enabled: bool,
    /// Ollama endpoint URL
    pub endpoint: String,
    /// Model used for sentence generation and translation
    pub model: String,
    /// Upper bound for a single generator call, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Number of recently served sentences remembered per bucket.
    ///
    /// A bucket is fully served before any sentence repeats only while the cap
    /// is at least the bucket size; a smaller cap only guarantees that the
    /// last `history_cap` picks are avoided.
    #[serde(default = "default_history_cap")]
    pub history_cap: usize,
    /// How long served sentences are remembered
    pub scope: MemoryScope,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemoryScope {
    /// Process: remember for the lifetime of the engine
    Process,
    /// Session: forget at the start of every session
    Session,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TaggingConfig {
    /// Use the built-in taggers; when false every sentence is analyzed in degraded mode
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslateConfig {
    /// Ordered translator tiers, attempted until one succeeds
    #[serde(default = "default_tiers")]
    pub tiers: Vec<TranslationTier>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationTier {
    /// Generator: ask the model to translate, keep the target-script run
    Generator,
    /// Lexicon: word-by-word substitution through the built-in lexicon
    Lexicon,
    /// Corpus: a native sentence of the same difficulty
    Corpus,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// TOML file replacing the built-in corpus
    pub path: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: "http://localhost:11434".to_string(),
            model: "llama3.2:3b".to_string(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            history_cap: default_history_cap(),
            scope: MemoryScope::Process,
        }
    }
}

impl Default for TaggingConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            tiers: default_tiers(),
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PosGameError::Config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| PosGameError::Config(format!("Failed to parse config file: {}", e)))
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PosGameError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| PosGameError::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }
}
