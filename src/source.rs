//! Sentence acquisition: generator first, static corpus as fallback.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{info, warn};

use crate::corpus::{Corpus, emergency_sentence};
use crate::difficulty::classify;
use crate::error::{PosGameError, Result};
use crate::generator::{Generator, build_sentence_prompt, clean_sentence, generate_with_timeout};
use crate::language::{Difficulty, Language};
use crate::memory::UsageMemoryStore;
use crate::translate::TranslatorChain;

/// Which tier produced a sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Generator wrote the English sentence
    Generated,
    /// Generator translated the English sentence
    Translated,
    /// Word-by-word lexicon substitution
    Lexicon,
    /// Static corpus through usage memory
    CorpusFallback,
    /// Fixed last-resort sentence
    Emergency,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Generated => "generated",
            Self::Translated => "translated",
            Self::Lexicon => "lexicon",
            Self::CorpusFallback => "corpus_fallback",
            Self::Emergency => "emergency",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentenceRequest {
    pub language: Language,
    /// Preferred corpus bucket; advisory, never overrides the computed difficulty
    pub requested_difficulty: Option<Difficulty>,
}

impl SentenceRequest {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            requested_difficulty: None,
        }
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.requested_difficulty = Some(difficulty);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedSentence {
    pub text: String,
    pub language: Language,
    pub difficulty: Difficulty,
    pub provenance: Provenance,
    /// English form the difficulty was computed from
    pub english: String,
}

/// Corpus picks routed through usage memory
pub struct CorpusFallback {
    corpus: Arc<Corpus>,
    memory: Arc<UsageMemoryStore>,
    rng: Mutex<StdRng>,
}

impl CorpusFallback {
    pub fn new(corpus: Arc<Corpus>, memory: Arc<UsageMemoryStore>) -> Self {
        Self::with_rng(corpus, memory, StdRng::from_entropy())
    }

    pub fn with_rng(corpus: Arc<Corpus>, memory: Arc<UsageMemoryStore>, rng: StdRng) -> Self {
        Self {
            corpus,
            memory,
            rng: Mutex::new(rng),
        }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn memory(&self) -> &UsageMemoryStore {
        &self.memory
    }

    pub fn pick(&self, language: Language, difficulty: Difficulty) -> Result<String> {
        let sentences = self.corpus.sentences(language, difficulty);
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        self.memory
            .pick(language, difficulty, sentences, &mut *rng)
            .ok_or(PosGameError::EmptyCorpus {
                language,
                difficulty,
            })
    }

    pub fn random_difficulty(&self) -> Difficulty {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        *Difficulty::ALL.choose(&mut *rng).unwrap_or(&Difficulty::Easy)
    }
}

/// Resolves a request into a sentence; never fails
pub struct SentenceSourceResolver {
    generator: Option<Arc<dyn Generator>>,
    timeout: Duration,
    fallback: Arc<CorpusFallback>,
    translator: TranslatorChain,
}

impl SentenceSourceResolver {
    pub fn new(
        generator: Option<Arc<dyn Generator>>,
        timeout: Duration,
        fallback: Arc<CorpusFallback>,
        translator: TranslatorChain,
    ) -> Self {
        Self {
            generator,
            timeout,
            fallback,
            translator,
        }
    }

    pub async fn resolve(&self, request: SentenceRequest) -> GeneratedSentence {
        let (english, english_provenance) = self.english_sentence(request.requested_difficulty).await;
        // Difficulty always comes from the English form, even for translated output
        let difficulty = classify(&english);

        let (text, provenance) = match request.language {
            Language::English => (english.clone(), english_provenance),
            target => self.translator.translate(&english, target, difficulty).await,
        };

        info!(
            "Resolved {} sentence ({}, {}): {}",
            request.language, difficulty, provenance, text
        );

        GeneratedSentence {
            text,
            language: request.language,
            difficulty,
            provenance,
            english,
        }
    }

    async fn english_sentence(&self, requested: Option<Difficulty>) -> (String, Provenance) {
        match self.generate_english().await {
            Ok(sentence) => return (sentence, Provenance::Generated),
            Err(e) => warn!("Sentence generation unavailable: {}", e),
        }

        let bucket = requested.unwrap_or_else(|| self.fallback.random_difficulty());
        match self.fallback.pick(Language::English, bucket) {
            Ok(sentence) => (sentence, Provenance::CorpusFallback),
            Err(e) => {
                warn!("English corpus fallback failed: {}", e);
                (
                    emergency_sentence(Language::English).to_string(),
                    Provenance::Emergency,
                )
            }
        }
    }

    async fn generate_english(&self) -> Result<String> {
        let generator = self.generator.as_deref().ok_or_else(|| {
            PosGameError::ExternalServiceUnavailable("no generator configured".to_string())
        })?;
        let prompt = build_sentence_prompt();
        let raw = generate_with_timeout(generator, &prompt, self.timeout).await?;
        clean_sentence(&raw, &prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TranslationTier;
    use crate::generator::MockGenerator;
    use crate::translate::TranslationLexicon;

    fn fallback(corpus: Corpus, seed: u64) -> Arc<CorpusFallback> {
        Arc::new(CorpusFallback::with_rng(
            Arc::new(corpus),
            Arc::new(UsageMemoryStore::new(16)),
            StdRng::seed_from_u64(seed),
        ))
    }

    fn resolver(generator: Option<Arc<dyn Generator>>, fallback: Arc<CorpusFallback>) -> SentenceSourceResolver {
        let translator = TranslatorChain::new(
            vec![TranslationTier::Generator, TranslationTier::Lexicon, TranslationTier::Corpus],
            generator.clone(),
            Duration::from_secs(1),
            TranslationLexicon::builtin(Language::Thai).into_iter().collect(),
            Arc::clone(&fallback),
        );
        SentenceSourceResolver::new(generator, Duration::from_secs(1), fallback, translator)
    }

    #[tokio::test]
    async fn test_english_without_generator_comes_from_corpus() {
        let fallback = fallback(Corpus::builtin(), 11);
        let resolver = resolver(None, Arc::clone(&fallback));

        for difficulty in Difficulty::ALL {
            let request = SentenceRequest::new(Language::English).with_difficulty(difficulty);
            let sentence = resolver.resolve(request).await;
            assert_eq!(sentence.provenance, Provenance::CorpusFallback);
            assert!(fallback.corpus().contains(Language::English, &sentence.text));
            assert!(fallback
                .corpus()
                .sentences(Language::English, difficulty)
                .contains(&sentence.text));
            assert_eq!(sentence.difficulty, difficulty);
            assert_eq!(sentence.text, sentence.english);
        }
    }

    #[tokio::test]
    async fn test_generated_sentence_is_used_and_classified() {
        let mut mock = MockGenerator::new();
        mock.expect_generate()
            .times(1)
            .returning(|_| Ok("Small birds sing.".to_string()));
        let resolver = resolver(Some(Arc::new(mock)), fallback(Corpus::builtin(), 1));

        let sentence = resolver.resolve(SentenceRequest::new(Language::English)).await;
        assert_eq!(sentence.text, "Small birds sing.");
        assert_eq!(sentence.provenance, Provenance::Generated);
        assert_eq!(sentence.difficulty, Difficulty::Easy);
    }

    #[tokio::test]
    async fn test_generator_failure_falls_back_to_corpus() {
        let mut mock = MockGenerator::new();
        mock.expect_generate().returning(|_| {
            Err(PosGameError::ExternalServiceUnavailable("connection refused".to_string()))
        });
        let resolver = resolver(Some(Arc::new(mock)), fallback(Corpus::builtin(), 2));

        let request = SentenceRequest::new(Language::English).with_difficulty(Difficulty::Medium);
        let sentence = resolver.resolve(request).await;
        assert_eq!(sentence.provenance, Provenance::CorpusFallback);
        assert_eq!(sentence.difficulty, Difficulty::Medium);
    }

    #[tokio::test]
    async fn test_empty_corpus_yields_emergency_sentence() {
        let resolver = resolver(None, fallback(Corpus::default(), 3));

        let sentence = resolver.resolve(SentenceRequest::new(Language::English)).await;
        assert_eq!(sentence.provenance, Provenance::Emergency);
        assert_eq!(sentence.text, "The quick brown fox jumps.");
        assert_eq!(sentence.difficulty, Difficulty::Easy);
    }

    #[tokio::test]
    async fn test_thai_difficulty_follows_english_form() {
        let mut corpus = Corpus::default();
        corpus.insert(
            Language::English,
            Difficulty::Hard,
            vec![Corpus::builtin().sentences(Language::English, Difficulty::Hard)[0].clone()],
        );
        corpus.insert(Language::Thai, Difficulty::Hard, vec!["นกบินสูงขึ้น".to_string()]);
        let resolver = resolver(None, fallback(corpus, 4));

        let request = SentenceRequest::new(Language::Thai).with_difficulty(Difficulty::Hard);
        let sentence = resolver.resolve(request).await;
        // A short Thai sentence still carries the English form's difficulty
        assert_eq!(sentence.difficulty, Difficulty::Hard);
        assert_eq!(sentence.text, "นกบินสูงขึ้น");
        assert_eq!(sentence.provenance, Provenance::CorpusFallback);
    }

    #[tokio::test]
    async fn test_consecutive_fallbacks_do_not_repeat() {
        let mut corpus = Corpus::default();
        corpus.insert(
            Language::English,
            Difficulty::Easy,
            vec!["Cats nap.".to_string(), "Dogs run.".to_string(), "Birds sing.".to_string()],
        );
        let resolver = resolver(None, fallback(corpus, 5));
        let request = SentenceRequest::new(Language::English).with_difficulty(Difficulty::Easy);

        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(resolver.resolve(request).await.text);
        }
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 3);
    }
}
