// Tagging capability
//
// A `Tagger` tokenizes and tags a sentence in its own raw tag vocabulary.
// A `TagScheme` knows how to read that vocabulary: it maps raw tags into the
// canonical `Pos` set and decides which tokens take part in the game.
// Both are selected by language so normalization never branches on it.

pub mod english;
pub mod thai;

use crate::error::Result;
use crate::language::Language;
use crate::pos::Pos;

/// Per-language tokenizer and tagger
pub trait Tagger: Send + Sync {
    fn tokenize(&self, sentence: &str) -> Result<Vec<String>>;

    /// Tag tokens in order, returning (token, raw tag) pairs
    fn tag(&self, tokens: &[String]) -> Result<Vec<(String, String)>>;
}

/// Raw tag vocabulary of one language's tagger
pub trait TagScheme: Send + Sync {
    fn language(&self) -> Language;

    /// Map a raw tag into the canonical set; `None` for unknown tags
    fn canonical(&self, raw_tag: &str) -> Option<Pos>;

    /// Whether a token is a playable word
    fn keeps(&self, token: &str) -> bool;
}

/// Universal Dependencies tags as emitted by English taggers
pub struct UniversalScheme;

impl TagScheme for UniversalScheme {
    fn language(&self) -> Language {
        Language::English
    }

    fn canonical(&self, raw_tag: &str) -> Option<Pos> {
        match raw_tag {
            "NOUN" | "PROPN" => Some(Pos::Noun),
            "PRON" => Some(Pos::Pronoun),
            "VERB" | "AUX" => Some(Pos::Verb),
            "ADJ" => Some(Pos::Adjective),
            "ADV" => Some(Pos::Adverb),
            "ADP" => Some(Pos::Adposition),
            "CONJ" | "CCONJ" | "SCONJ" => Some(Pos::Conjunction),
            "INTJ" => Some(Pos::Interjection),
            _ => None,
        }
    }

    fn keeps(&self, token: &str) -> bool {
        !token.is_empty() && token.chars().all(char::is_alphabetic)
    }
}

/// ORCHID corpus tags as emitted by Thai taggers
pub struct OrchidScheme;

impl TagScheme for OrchidScheme {
    fn language(&self) -> Language {
        Language::Thai
    }

    fn canonical(&self, raw_tag: &str) -> Option<Pos> {
        match raw_tag {
            "NOUN" | "NCMN" | "NPRP" => Some(Pos::Noun),
            "PRON" | "PPRS" => Some(Pos::Pronoun),
            "VERB" | "VACT" | "VSTA" => Some(Pos::Verb),
            "ADJ" | "ADJV" => Some(Pos::Adjective),
            "ADV" | "ADVN" => Some(Pos::Adverb),
            "PREP" => Some(Pos::Adposition),
            "CONJ" | "CCONJ" => Some(Pos::Conjunction),
            "INTJ" => Some(Pos::Interjection),
            _ => None,
        }
    }

    fn keeps(&self, token: &str) -> bool {
        !token.trim().is_empty()
    }
}

pub fn scheme_for(language: Language) -> &'static dyn TagScheme {
    match language {
        Language::English => &UniversalScheme,
        Language::Thai => &OrchidScheme,
    }
}

/// Factory for the built-in taggers
pub struct TaggerFactory;

impl TaggerFactory {
    pub fn create_tagger(language: Language) -> Box<dyn Tagger> {
        match language {
            Language::English => Box::new(english::EnglishTagger::new()),
            Language::Thai => Box::new(thai::ThaiTagger::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_universal_scheme_mapping() {
        let scheme = scheme_for(Language::English);
        assert_eq!(scheme.canonical("PROPN"), Some(Pos::Noun));
        assert_eq!(scheme.canonical("AUX"), Some(Pos::Verb));
        assert_eq!(scheme.canonical("SCONJ"), Some(Pos::Conjunction));
        assert_eq!(scheme.canonical("DET"), None);
        assert_eq!(scheme.canonical("VACT"), None);
    }

    #[test]
    fn test_orchid_scheme_mapping() {
        let scheme = scheme_for(Language::Thai);
        assert_eq!(scheme.canonical("NCMN"), Some(Pos::Noun));
        assert_eq!(scheme.canonical("PPRS"), Some(Pos::Pronoun));
        assert_eq!(scheme.canonical("VSTA"), Some(Pos::Verb));
        assert_eq!(scheme.canonical("PREP"), Some(Pos::Adposition));
        assert_eq!(scheme.canonical("ADP"), None);
    }

    #[test]
    fn test_keep_rules() {
        let english = scheme_for(Language::English);
        assert!(english.keeps("cat"));
        assert!(!english.keeps("."));
        assert!(!english.keeps("n't"));
        assert!(!english.keeps("42"));

        let thai = scheme_for(Language::Thai);
        assert!(thai.keeps("แมว"));
        assert!(thai.keeps("42"));
        assert!(!thai.keeps(" "));
    }

    #[test]
    fn test_factory_selects_by_language() {
        for language in Language::ALL {
            let tagger = TaggerFactory::create_tagger(language);
            assert!(!tagger.tokenize("แมว cat").unwrap().is_empty());
        }
    }
}
