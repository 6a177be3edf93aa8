use std::collections::HashMap;

use crate::error::{PosGameError, Result};
use crate::language::Language;

const EN_TH_PAIRS: &[(&str, &str)] = &[
    ("cat", "แมว"),
    ("dog", "หมา"),
    ("bird", "นก"),
    ("run", "วิ่ง"),
    ("eat", "กิน"),
    ("sleep", "นอน"),
    ("read", "อ่าน"),
    ("write", "เขียน"),
    ("book", "หนังสือ"),
    ("food", "อาหาร"),
    ("house", "บ้าน"),
    ("school", "โรงเรียน"),
    ("teacher", "ครู"),
    ("student", "นักเรียน"),
    ("friend", "เพื่อน"),
    ("family", "ครอบครัว"),
    ("water", "น้ำ"),
    ("sun", "พระอาทิตย์"),
    ("moon", "พระจันทร์"),
    ("star", "ดาว"),
    ("tree", "ต้นไม้"),
    ("flower", "ดอกไม้"),
    ("beautiful", "สวย"),
    ("happy", "มีความสุข"),
    ("sad", "เศร้า"),
    ("big", "ใหญ่"),
    ("small", "เล็ก"),
    ("fast", "เร็ว"),
    ("slow", "ช้า"),
    ("good", "ดี"),
    ("bad", "แย่"),
    ("hot", "ร้อน"),
    ("cold", "หนาว"),
];

const STRIPPED_PUNCTUATION: &[char] = &[',', '.', '!', '?', ';', ':'];

/// English to target-language word table for degraded translation
#[derive(Debug, Clone)]
pub struct TranslationLexicon {
    target: Language,
    entries: HashMap<String, String>,
}

impl TranslationLexicon {
    pub fn new(target: Language, entries: HashMap<String, String>) -> Self {
        Self { target, entries }
    }

    /// Built-in lexicon for `target`, if there is one
    pub fn builtin(target: Language) -> Option<Self> {
        match target {
            Language::Thai => Some(Self::new(
                target,
                EN_TH_PAIRS
                    .iter()
                    .map(|(en, th)| (en.to_string(), th.to_string()))
                    .collect(),
            )),
            Language::English => None,
        }
    }

    pub fn target(&self) -> Language {
        self.target
    }

    /// Word-by-word substitution.
    ///
    /// Lowercases, strips punctuation, drops words without an entry and joins
    /// the rest with single spaces. Fails with `LexiconMiss` when nothing matched.
    pub fn substitute(&self, english: &str) -> Result<String> {
        let lowered: String = english
            .to_lowercase()
            .chars()
            .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
            .collect();

        let words: Vec<&str> = lowered
            .split_whitespace()
            .filter_map(|word| self.entries.get(word).map(String::as_str))
            .collect();

        if words.is_empty() {
            return Err(PosGameError::LexiconMiss {
                language: self.target,
            });
        }
        Ok(words.join(" "))
    }
}
