use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::answer_key::AnswerKey;
use crate::config::{Config, MemoryScope};
use crate::corpus::Corpus;
use crate::error::Result;
use crate::generator::{Generator, GeneratorFactory};
use crate::language::Language;
use crate::memory::UsageMemoryStore;
use crate::normalize::analyze;
use crate::pos::PosVocabulary;
use crate::source::{CorpusFallback, SentenceRequest, SentenceSourceResolver};
use crate::tagging::{TaggerFactory, Tagger, scheme_for};
use crate::translate::{TranslationLexicon, TranslatorChain};

/// Runs generation events: resolve a sentence, tag it, build the answer key
pub struct ContentEngine {
    config: Config,
    resolver: SentenceSourceResolver,
    taggers: HashMap<Language, Box<dyn Tagger>>,
    memory: Arc<UsageMemoryStore>,
}

impl ContentEngine {
    pub fn new(config: Config, generator: Option<Arc<dyn Generator>>) -> Result<Self> {
        let corpus = match &config.corpus.path {
            Some(path) => {
                info!("Loading corpus from {}", path.display());
                Corpus::from_file(path)?
            }
            None => Corpus::builtin(),
        };

        let memory = Arc::new(UsageMemoryStore::new(config.memory.history_cap));
        let fallback = Arc::new(CorpusFallback::new(Arc::new(corpus), Arc::clone(&memory)));
        let timeout = Duration::from_secs(config.generator.timeout_secs);

        let lexicons = Language::ALL
            .iter()
            .filter_map(|language| TranslationLexicon::builtin(*language))
            .collect();
        let translator = TranslatorChain::new(
            config.translate.tiers.clone(),
            generator.clone(),
            timeout,
            lexicons,
            Arc::clone(&fallback),
        );
        let resolver = SentenceSourceResolver::new(generator, timeout, fallback, translator);

        let taggers = if config.tagging.enabled {
            Language::ALL
                .iter()
                .map(|language| (*language, TaggerFactory::create_tagger(*language)))
                .collect()
        } else {
            warn!("Tagging disabled, answer keys will be built in degraded mode");
            HashMap::new()
        };

        Ok(Self {
            config,
            resolver,
            taggers,
            memory,
        })
    }

    /// Engine with the generator described by `config`, if enabled
    pub fn from_config(config: Config) -> Result<Self> {
        let generator = GeneratorFactory::create_generator(&config.generator);
        Self::new(config, generator)
    }

    pub fn memory(&self) -> &UsageMemoryStore {
        &self.memory
    }

    /// Begin a new game session
    pub fn start_session(&self) {
        if self.config.memory.scope == MemoryScope::Session {
            debug!("Clearing usage memory for new session");
            self.memory.clear();
        }
    }

    /// Run one generation event; always yields a playable answer key
    pub async fn generate(&self, request: SentenceRequest) -> AnswerKey {
        let sentence = self.resolver.resolve(request).await;

        let tagger = self.taggers.get(&sentence.language).map(|t| t.as_ref());
        let records = analyze(&sentence.text, tagger, scheme_for(sentence.language));
        let vocabulary = PosVocabulary::for_language(sentence.language);

        let key = AnswerKey::build(sentence, request.requested_difficulty, records, &vocabulary);
        info!(
            "Generated answer key {} ({} words, {}, {})",
            key.id,
            key.words.len(),
            key.difficulty,
            key.provenance
        );
        if let Some((requested, actual)) = key.difficulty_mismatch() {
            info!("Requested {} sentence but got {}", requested, actual);
        }
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TranslationTier;
    use crate::generator::MockGenerator;
    use crate::language::Difficulty;
    use crate::pos::Pos;
    use crate::source::Provenance;

    fn offline_config() -> Config {
        let mut config = Config::default();
        config.generator.enabled = false;
        config
    }

    #[tokio::test]
    async fn test_offline_english_event() {
        let engine = ContentEngine::new(offline_config(), None).unwrap();
        let request = SentenceRequest::new(Language::English).with_difficulty(Difficulty::Easy);
        let key = engine.generate(request).await;

        assert_eq!(key.provenance, Provenance::CorpusFallback);
        assert_eq!(key.difficulty, Difficulty::Easy);
        assert!(key.difficulty_mismatch().is_none());
        assert!(!key.words.is_empty());
        for (i, entry) in key.words.iter().enumerate() {
            assert_eq!(entry.record.index, i);
            assert_eq!(entry.display_name, entry.record.pos.display_name(Language::English));
        }
    }

    #[tokio::test]
    async fn test_offline_thai_event() {
        let engine = ContentEngine::new(offline_config(), None).unwrap();
        let key = engine.generate(SentenceRequest::new(Language::Thai)).await;

        assert_eq!(key.language, Language::Thai);
        assert!(crate::script::is_valid(&key.sentence, Language::Thai));
        assert!(!key.words.is_empty());
    }

    #[tokio::test]
    async fn test_generated_sentence_is_tagged() {
        let mut mock = MockGenerator::new();
        mock.expect_generate()
            .returning(|_| Ok("The cat sleeps peacefully.".to_string()));
        let engine = ContentEngine::new(Config::default(), Some(Arc::new(mock))).unwrap();

        let request = SentenceRequest::new(Language::English).with_difficulty(Difficulty::Hard);
        let key = engine.generate(request).await;

        assert_eq!(key.provenance, Provenance::Generated);
        assert_eq!(key.difficulty_mismatch(), Some((Difficulty::Hard, Difficulty::Easy)));
        let tags: Vec<Pos> = key.records().map(|r| r.pos).collect();
        assert_eq!(tags, vec![Pos::Noun, Pos::Noun, Pos::Verb, Pos::Adverb]);
    }

    #[tokio::test]
    async fn test_tagging_disabled_uses_degraded_mode() {
        let mut config = offline_config();
        config.tagging.enabled = false;
        let engine = ContentEngine::new(config, None).unwrap();

        let key = engine.generate(SentenceRequest::new(Language::English)).await;
        assert!(key.records().all(|r| r.pos == Pos::Noun));
    }

    #[tokio::test]
    async fn test_translated_event_uses_generator_tier() {
        let mut mock = MockGenerator::new();
        mock.expect_generate().returning(|prompt| {
            if prompt.contains("Translate this English sentence") {
                Ok("แมวนอนหลับ".to_string())
            } else {
                Ok("The cat sleeps.".to_string())
            }
        });
        let mut config = Config::default();
        config.translate.tiers = vec![TranslationTier::Generator];
        let engine = ContentEngine::new(config, Some(Arc::new(mock))).unwrap();

        let key = engine.generate(SentenceRequest::new(Language::Thai)).await;
        assert_eq!(key.sentence, "แมวนอนหลับ");
        assert_eq!(key.provenance, Provenance::Translated);
        let words: Vec<&str> = key.records().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["แมว", "นอนหลับ"]);
    }

    #[tokio::test]
    async fn test_session_scope_clears_memory() {
        let mut config = offline_config();
        config.memory.scope = MemoryScope::Session;
        let engine = ContentEngine::new(config, None).unwrap();

        let request = SentenceRequest::new(Language::English).with_difficulty(Difficulty::Medium);
        engine.generate(request).await;
        assert!(engine.memory().snapshot(Language::English, Difficulty::Medium).is_some());

        engine.start_session();
        assert!(engine.memory().snapshot(Language::English, Difficulty::Medium).is_none());
    }

    #[tokio::test]
    async fn test_process_scope_keeps_memory() {
        let engine = ContentEngine::new(offline_config(), None).unwrap();

        let request = SentenceRequest::new(Language::English).with_difficulty(Difficulty::Medium);
        engine.generate(request).await;
        engine.start_session();
        assert!(engine.memory().snapshot(Language::English, Difficulty::Medium).is_some());
    }

    #[test]
    fn test_missing_corpus_file_is_an_error() {
        let mut config = offline_config();
        config.corpus.path = Some("/nonexistent/corpus.toml".into());
        assert!(ContentEngine::new(config, None).is_err());
    }
}
