// Generator capability
//
// The generator is an opaque text-in/text-out model service. Any failure
// (connection, timeout, empty or malformed output) is reported as
// ExternalServiceUnavailable so callers can fall through to the next tier.
//
// To add a new backend, implement `Generator` and extend `GeneratorFactory`.

pub mod ollama;

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

pub use ollama::{OllamaGenerator, check_generator_availability};
use crate::config::GeneratorConfig;
use crate::error::{PosGameError, Result};
use crate::language::Language;

/// Main trait for text generation
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Generator: Send + Sync {
    /// Complete `prompt`, returning the raw model output
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Factory for creating generator instances
pub struct GeneratorFactory;

impl GeneratorFactory {
    /// Create the configured generator, or `None` when generation is disabled
    pub fn create_generator(config: &GeneratorConfig) -> Option<Arc<dyn Generator>> {
        if !config.enabled {
            return None;
        }
        Some(Arc::new(OllamaGenerator::new(config.clone())))
    }
}

/// Run one generator call bounded by `timeout`
pub async fn generate_with_timeout(
    generator: &dyn Generator,
    prompt: &str,
    timeout: Duration,
) -> Result<String> {
    match tokio::time::timeout(timeout, generator.generate(prompt)).await {
        Ok(result) => result,
        Err(_) => Err(PosGameError::ExternalServiceUnavailable(format!(
            "generator timed out after {}s",
            timeout.as_secs_f64()
        ))),
    }
}

pub fn build_sentence_prompt() -> String {
    "Write one interesting English sentence for a grammar exercise.\n\
     Return ONLY the sentence, with no explanation, numbering, or quotes.\n"
        .to_string()
}

pub fn build_translation_prompt(sentence: &str, target: Language) -> String {
    format!(
        "You are a professional translator.\n\
         \n\
         Translate this English sentence to {}: '{}'\n\
         Return ONLY the {} translation. Do not include explanations, \
         transliterations, or text in other languages.\n",
        target.name(),
        sentence,
        target.name()
    )
}

/// Reduce raw generator output to a single English sentence.
///
/// Drops an echoed prompt, keeps the first non-empty sentence and makes sure
/// it ends with a period. Output without any letters counts as malformed.
pub fn clean_sentence(raw: &str, prompt: &str) -> Result<String> {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix(prompt.trim()) {
        text = rest.trim();
    }

    let first_line = text
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default()
        .trim_matches(|c| c == '"' || c == '\'');

    let first_sentence = first_line
        .split('.')
        .map(str::trim)
        .find(|s| !s.is_empty())
        .unwrap_or_default();

    if !first_sentence.chars().any(char::is_alphabetic) {
        debug!("Rejected generator output: {:?}", raw);
        return Err(PosGameError::ExternalServiceUnavailable(
            "generator returned no usable sentence".to_string(),
        ));
    }

    let ends_with_terminal = first_sentence.ends_with(['!', '?']);
    Ok(if ends_with_terminal {
        first_sentence.to_string()
    } else {
        format!("{}.", first_sentence)
    })
}
