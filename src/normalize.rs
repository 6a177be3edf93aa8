//! Turns tagger output into the canonical answer-key records.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{PosGameError, Result};
use crate::pos::Pos;
use crate::tagging::{TagScheme, Tagger};

/// One playable word of the sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub word: String,
    pub pos: Pos,
    /// Dense, zero-based position among playable words
    pub index: usize,
    pub user_answer: Option<Pos>,
    pub is_correct: bool,
}

impl WordRecord {
    pub fn new(word: String, pos: Pos, index: usize) -> Self {
        Self {
            word,
            pos,
            index,
            user_answer: None,
            is_correct: false,
        }
    }

    /// Record the player's answer and whether it matches
    pub fn answer(&mut self, answer: Pos) {
        self.user_answer = Some(answer);
        self.is_correct = is_correct(self, answer);
    }
}

pub fn is_correct(record: &WordRecord, answer: Pos) -> bool {
    answer == record.pos
}

/// Normalize (token, raw tag) pairs through `scheme`.
///
/// Tokens the scheme does not keep are dropped, unknown tags become nouns
/// and indices are assigned in surviving order.
pub fn normalize(tagged: &[(String, String)], scheme: &dyn TagScheme) -> Vec<WordRecord> {
    tagged
        .iter()
        .filter(|(token, _)| !token.trim().is_empty() && scheme.keeps(token))
        .enumerate()
        .map(|(index, (token, raw_tag))| {
            let pos = scheme.canonical(raw_tag).unwrap_or(Pos::Noun);
            WordRecord::new(token.clone(), pos, index)
        })
        .collect()
}

/// Whitespace tokenization with every word a noun, for when no tagger works.
///
/// Only surrounding punctuation is trimmed; contractions, hyphenated words and
/// numbers stay playable.
pub fn normalize_degraded(sentence: &str) -> Vec<WordRecord> {
    sentence
        .split_whitespace()
        .map(|word| word.trim_matches(is_edge_punctuation))
        .filter(|word| !word.is_empty())
        .enumerate()
        .map(|(index, word)| WordRecord::new(word.to_string(), Pos::Noun, index))
        .collect()
}

fn is_edge_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || matches!(c, '‘' | '’' | '“' | '”' | '…')
}

/// Analyze `sentence` with `tagger`, switching to degraded mode when it is
/// missing, fails, or leaves no playable word
pub fn analyze(sentence: &str, tagger: Option<&dyn Tagger>, scheme: &dyn TagScheme) -> Vec<WordRecord> {
    let tagged = tagger
        .ok_or_else(|| PosGameError::TaggingUnavailable(format!("no tagger for {}", scheme.language())))
        .and_then(|tagger| tag_sentence(tagger, sentence));

    match tagged {
        Ok(tagged) => {
            let records = normalize(&tagged, scheme);
            if !records.is_empty() {
                return records;
            }
            warn!("Tagger produced no playable words for {:?}, using degraded mode", sentence);
        }
        Err(e) => warn!("{}; using degraded mode", e),
    }

    let records = normalize_degraded(sentence);
    if records.is_empty() {
        // Keep at least one record so the game always has something to play
        return vec![WordRecord::new(sentence.trim().to_string(), Pos::Noun, 0)];
    }
    records
}

fn tag_sentence(tagger: &dyn Tagger, sentence: &str) -> Result<Vec<(String, String)>> {
    let tokens = tagger
        .tokenize(sentence)
        .map_err(|e| PosGameError::TaggingUnavailable(format!("tokenizer failed: {}", e)))?;
    tagger
        .tag(&tokens)
        .map_err(|e| PosGameError::TaggingUnavailable(format!("tagger failed: {}", e)))
}
