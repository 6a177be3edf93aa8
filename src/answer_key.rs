//! Answer key handed to the presentation layer for one generation event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::language::{Difficulty, Language};
use crate::normalize::WordRecord;
use crate::pos::{Pos, PosVocabulary};
use crate::source::{GeneratedSentence, Provenance};

/// A word record together with its display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerEntry {
    #[serde(flatten)]
    pub record: WordRecord,
    pub display_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerKey {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub sentence: String,
    pub language: Language,
    pub difficulty: Difficulty,
    pub requested_difficulty: Option<Difficulty>,
    pub provenance: Provenance,
    pub words: Vec<AnswerEntry>,
}

impl AnswerKey {
    pub fn build(
        sentence: GeneratedSentence,
        requested_difficulty: Option<Difficulty>,
        records: Vec<WordRecord>,
        vocabulary: &PosVocabulary,
    ) -> Self {
        let words = records
            .into_iter()
            .map(|record| AnswerEntry {
                display_name: vocabulary.display_name(record.pos).to_string(),
                record,
            })
            .collect();

        Self {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            sentence: sentence.text,
            language: sentence.language,
            difficulty: sentence.difficulty,
            requested_difficulty,
            provenance: sentence.provenance,
            words,
        }
    }

    /// Requested and actual difficulty, when they differ
    pub fn difficulty_mismatch(&self) -> Option<(Difficulty, Difficulty)> {
        self.requested_difficulty
            .filter(|requested| *requested != self.difficulty)
            .map(|requested| (requested, self.difficulty))
    }

    pub fn records(&self) -> impl Iterator<Item = &WordRecord> {
        self.words.iter().map(|entry| &entry.record)
    }

    /// Apply the player's answer to the word at `index`.
    ///
    /// Returns whether it was correct, or `None` for an index outside the key.
    pub fn answer(&mut self, index: usize, answer: Pos) -> Option<bool> {
        let entry = self.words.iter_mut().find(|entry| entry.record.index == index)?;
        entry.record.answer(answer);
        Some(entry.record.is_correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(difficulty: Difficulty) -> GeneratedSentence {
        GeneratedSentence {
            text: "Birds fly.".to_string(),
            language: Language::English,
            difficulty,
            provenance: Provenance::CorpusFallback,
            english: "Birds fly.".to_string(),
        }
    }

    fn records() -> Vec<WordRecord> {
        vec![
            WordRecord::new("Birds".to_string(), Pos::Noun, 0),
            WordRecord::new("fly".to_string(), Pos::Verb, 1),
        ]
    }

    #[test]
    fn test_build_zips_display_names() {
        let vocabulary = PosVocabulary::for_language(Language::English);
        let key = AnswerKey::build(sentence(Difficulty::Easy), None, records(), &vocabulary);

        assert_eq!(key.words.len(), 2);
        assert_eq!(key.words[0].display_name, Pos::Noun.display_name(Language::English));
        assert_eq!(key.words[1].display_name, Pos::Verb.display_name(Language::English));
        assert_eq!(key.sentence, "Birds fly.");
        assert!(key.difficulty_mismatch().is_none());
    }

    #[test]
    fn test_mismatch_is_reported() {
        let vocabulary = PosVocabulary::for_language(Language::English);
        let key = AnswerKey::build(
            sentence(Difficulty::Easy),
            Some(Difficulty::Hard),
            records(),
            &vocabulary,
        );
        assert_eq!(key.difficulty_mismatch(), Some((Difficulty::Hard, Difficulty::Easy)));
    }

    #[test]
    fn test_answer_by_index() {
        let vocabulary = PosVocabulary::for_language(Language::English);
        let mut key = AnswerKey::build(sentence(Difficulty::Easy), None, records(), &vocabulary);

        assert_eq!(key.answer(1, Pos::Verb), Some(true));
        assert_eq!(key.answer(0, Pos::Adjective), Some(false));
        assert_eq!(key.answer(5, Pos::Noun), None);
        assert_eq!(key.records().filter(|r| r.is_correct).count(), 1);
    }

    #[test]
    fn test_serializes_flat_word_entries() {
        let vocabulary = PosVocabulary::for_language(Language::English);
        let key = AnswerKey::build(sentence(Difficulty::Easy), None, records(), &vocabulary);
        let json = serde_json::to_value(&key).unwrap();

        assert_eq!(json["provenance"], "corpus_fallback");
        assert_eq!(json["language"], "en");
        assert_eq!(json["words"][1]["pos"], "VERB");
        assert_eq!(json["words"][1]["index"], 1);
    }
}
