// Tiered translation of English sentences
//
// Tiers are attempted in configured order until one produces text that passes
// script validation:
// - Generator: model translation, reduced to the longest target-script run
// - Lexicon: word-by-word substitution through a built-in table
// - Corpus: a native sentence of the same difficulty
// When every tier fails the emergency sentence for the target is returned.

pub mod lexicon;

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

pub use lexicon::TranslationLexicon;
use crate::config::TranslationTier;
use crate::corpus::emergency_sentence;
use crate::error::{PosGameError, Result};
use crate::generator::{Generator, build_translation_prompt, generate_with_timeout};
use crate::language::{Difficulty, Language};
use crate::script::{extract_script_run, is_valid, script_ratio};
use crate::source::{CorpusFallback, Provenance};

/// Ordered fallback chain from English into a target language
pub struct TranslatorChain {
    tiers: Vec<TranslationTier>,
    generator: Option<Arc<dyn Generator>>,
    timeout: Duration,
    lexicons: Vec<TranslationLexicon>,
    fallback: Arc<CorpusFallback>,
}

impl TranslatorChain {
    pub fn new(
        tiers: Vec<TranslationTier>,
        generator: Option<Arc<dyn Generator>>,
        timeout: Duration,
        lexicons: Vec<TranslationLexicon>,
        fallback: Arc<CorpusFallback>,
    ) -> Self {
        Self {
            tiers,
            generator,
            timeout,
            lexicons,
            fallback,
        }
    }

    /// Translate `english` into `target`; never fails.
    ///
    /// `difficulty` is the one computed from `english` and picks the corpus
    /// bucket for the corpus tier.
    pub async fn translate(
        &self,
        english: &str,
        target: Language,
        difficulty: Difficulty,
    ) -> (String, Provenance) {
        for tier in &self.tiers {
            match self.attempt(*tier, english, target, difficulty).await {
                Ok(result) => return result,
                Err(e) => warn!("Translation tier {:?} failed for {}: {}", tier, target, e),
            }
        }

        warn!("All translation tiers failed for {}, using emergency sentence", target);
        (emergency_sentence(target).to_string(), Provenance::Emergency)
    }

    async fn attempt(
        &self,
        tier: TranslationTier,
        english: &str,
        target: Language,
        difficulty: Difficulty,
    ) -> Result<(String, Provenance)> {
        match tier {
            TranslationTier::Generator => self
                .translate_with_generator(english, target)
                .await
                .map(|text| (text, Provenance::Translated)),
            TranslationTier::Lexicon => self
                .translate_with_lexicon(english, target)
                .map(|text| (text, Provenance::Lexicon)),
            TranslationTier::Corpus => self
                .fallback
                .pick(target, difficulty)
                .map(|text| (text, Provenance::CorpusFallback)),
        }
    }

    async fn translate_with_generator(&self, english: &str, target: Language) -> Result<String> {
        let generator = self.generator.as_deref().ok_or_else(|| {
            PosGameError::ExternalServiceUnavailable("no generator configured".to_string())
        })?;

        let prompt = build_translation_prompt(english, target);
        let raw = generate_with_timeout(generator, &prompt, self.timeout).await?;

        let candidate = match target.script() {
            Some(_) => extract_script_run(&raw, target).unwrap_or_default(),
            None => raw.trim().to_string(),
        };
        validated(candidate, target)
    }

    fn translate_with_lexicon(&self, english: &str, target: Language) -> Result<String> {
        let lexicon = self
            .lexicons
            .iter()
            .find(|lexicon| lexicon.target() == target)
            .ok_or(PosGameError::LexiconMiss { language: target })?;

        validated(lexicon.substitute(english)?, target)
    }
}

fn validated(text: String, language: Language) -> Result<String> {
    if let Some(block) = language.script() {
        debug!(
            "{} script ratio {:.2} for {:?}",
            block.name,
            script_ratio(&text, &block),
            text
        );
    }

    if text.is_empty() || !is_valid(&text, language) {
        return Err(PosGameError::ValidationFailure { language, text });
    }
    Ok(text)
}
