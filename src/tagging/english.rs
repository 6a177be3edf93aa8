//! Built-in English tagger emitting Universal Dependencies tags.
//!
//! Closed word classes come from lists, open classes from a small lexicon,
//! suffix rules and a couple of context rules. Good enough for short
//! exercise sentences; unknown words end up as nouns.

use std::collections::HashMap;
use unicode_segmentation::UnicodeSegmentation;

use super::Tagger;
use crate::error::Result;

const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my",
    "your", "his", "its", "our", "their", "mine", "yours", "hers", "ours", "theirs", "myself",
    "yourself", "himself", "herself", "itself", "ourselves", "themselves", "who", "whom",
    "whose", "what", "everyone", "everybody", "someone", "somebody", "anyone", "nobody",
    "nothing", "something", "everything",
];

/// Pronouns that usually start a clause; the next unknown word is read as a verb
const SUBJECT_PRONOUNS: &[&str] = &["i", "you", "he", "she", "it", "we", "they"];

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "every", "each", "some", "any", "no",
    "all", "both", "either", "neither", "another",
];

const ADPOSITIONS: &[&str] = &[
    "in", "on", "at", "with", "by", "for", "from", "to", "of", "about", "above", "after",
    "before", "during", "between", "through", "throughout", "under", "over", "into", "near",
    "among", "around", "across", "against", "behind", "below", "beside", "beyond", "inside",
    "onto", "toward", "towards", "upon", "within", "without",
];

const COORDINATING: &[&str] = &["and", "but", "or", "nor", "yet", "so"];

const SUBORDINATING: &[&str] = &[
    "because", "although", "though", "while", "if", "unless", "whereas", "whether", "until",
    "how",
];

const INTERJECTIONS: &[&str] = &[
    "wow", "oh", "ah", "ouch", "hey", "hello", "hi", "oops", "hooray", "alas", "yes", "hmm",
    "yay",
];

const AUXILIARIES: &[&str] = &[
    "is", "am", "are", "was", "were", "be", "been", "being", "can", "could", "will", "would",
    "shall", "should", "may", "might", "must", "do", "does", "did", "has", "have", "had",
];

const PARTICLES: &[&str] = &["not", "n't", "n’t", "'s", "’s"];

/// Negation clitics split off the preceding verb
const NEGATION_CLITICS: &[&str] = &["n't", "n’t"];

const APOSTROPHES: &[char] = &['\'', '’'];

const ADVERBS: &[&str] = &[
    "very", "quite", "too", "also", "always", "never", "often", "sometimes", "today",
    "yesterday", "tomorrow", "now", "then", "here", "there", "high", "well", "together",
    "outside", "inside", "fast", "hard", "daily", "soon", "again", "almost", "already",
    "still", "just", "even", "ever", "once", "away", "finally", "patiently", "perfectly",
    "fundamentally", "later",
];

const ADJECTIVES: &[&str] = &[
    "delicious", "beautiful", "important", "interesting", "ancient", "various", "strict",
    "mysterious", "famous", "magnificent", "prestigious", "old", "complex", "distant", "deep",
    "extraordinary", "political", "turbulent", "unprecedented", "fragile", "coastal",
    "extensive", "innovative", "revolutionary", "annual", "professional", "remarkable",
    "quiet", "long", "renowned", "groundbreaking", "theoretical", "international", "multiple",
    "tense", "talented", "young", "sustainable", "natural", "medical", "effective",
    "incurable", "careful", "patient", "quick", "brown", "intense", "happy", "sad", "big",
    "small", "good", "bad", "hot", "cold", "new", "many", "several", "green", "smart",
    "summer", "spring", "first", "last",
];

const VERBS: &[&str] = &[
    "sleeps", "sleep", "runs", "run", "fly", "flies", "eat", "eats", "plays", "play", "dance",
    "dances", "read", "reads", "laugh", "laughs", "bark", "barks", "explain", "explains",
    "bloom", "blooms", "study", "studies", "tells", "tell", "won", "win", "exhibits",
    "visit", "visits", "analyze", "understand", "demonstrate", "harmonize", "jumps", "jump",
    "go", "goes", "went", "come", "comes", "came", "see", "sees", "saw", "make", "makes",
    "made", "take", "takes", "took", "sing", "sings", "sang", "swim", "swims", "write",
    "writes", "wrote", "like", "likes", "love", "loves", "think", "thinks", "know", "knows",
    "want", "wants", "give", "gives", "gave", "comes", "walk", "walks", "ran", "ate",
    "slept", "gets", "get", "got",
];

/// Words ending in -ly that are not adverbs
const LY_NON_ADVERBS: &[&str] = &["family", "only", "early", "ugly", "holy", "friendly", "lovely", "july", "italy"];

const ADJECTIVE_SUFFIXES: &[&str] = &["ful", "ous", "ive", "able", "ible", "less", "ical"];

/// Lexicon-driven English tagger
pub struct EnglishTagger {
    lexicon: HashMap<&'static str, &'static str>,
}

impl EnglishTagger {
    pub fn new() -> Self {
        let mut lexicon = HashMap::new();
        // Later classes win for words listed twice
        for (words, tag) in [
            (VERBS, "VERB"),
            (ADJECTIVES, "ADJ"),
            (ADVERBS, "ADV"),
            (AUXILIARIES, "AUX"),
            (PARTICLES, "PART"),
            (ADPOSITIONS, "ADP"),
            (SUBORDINATING, "SCONJ"),
            (COORDINATING, "CCONJ"),
            (INTERJECTIONS, "INTJ"),
            (DETERMINERS, "DET"),
            (PRONOUNS, "PRON"),
        ] {
            for word in words {
                lexicon.insert(*word, tag);
            }
        }
        Self { lexicon }
    }

    fn base_tag(&self, token: &str, position: usize) -> &'static str {
        if !token.chars().any(char::is_alphanumeric) {
            return "PUNCT";
        }
        if token.chars().all(|c| c.is_ascii_digit()) {
            return "NUM";
        }

        let lower = token.to_lowercase();
        if let Some(tag) = self.lexicon.get(lower.as_str()) {
            return *tag;
        }

        if position > 0 && token.chars().next().is_some_and(char::is_uppercase) {
            return "PROPN";
        }
        if lower.ends_with("ly") && !LY_NON_ADVERBS.contains(&lower.as_str()) {
            return "ADV";
        }
        if lower.len() > 4 && (lower.ends_with("ed") || lower.ends_with("ing")) {
            return "VERB";
        }
        if lower.len() > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
            return "ADJ";
        }
        "NOUN"
    }
}

impl Default for EnglishTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl Tagger for EnglishTagger {
    fn tokenize(&self, sentence: &str) -> Result<Vec<String>> {
        let mut tokens = Vec::new();
        for segment in sentence.split_word_bounds() {
            if segment.trim().is_empty() {
                continue;
            }
            push_segment(segment, &mut tokens);
        }
        Ok(tokens)
    }

    fn tag(&self, tokens: &[String]) -> Result<Vec<(String, String)>> {
        let mut tagged: Vec<(String, String)> = Vec::with_capacity(tokens.len());
        let mut previous_word: Option<(String, &'static str)> = None;

        for (position, token) in tokens.iter().enumerate() {
            let mut tag = self.base_tag(token, position);

            if let Some((prev_lower, prev_tag)) = &previous_word {
                let after_subject = SUBJECT_PRONOUNS.contains(&prev_lower.as_str());
                if after_subject && tag == "NOUN" {
                    tag = "VERB";
                }
                // Participles between a determiner and its noun: "the crowded hall"
                if *prev_tag == "DET" && tag == "VERB" && !self.lexicon.contains_key(token.to_lowercase().as_str()) {
                    tag = "ADJ";
                }
            }

            if tag != "PUNCT" {
                previous_word = Some((token.to_lowercase(), tag));
            }
            tagged.push((token.clone(), tag.to_string()));
        }

        Ok(tagged)
    }
}

/// Push a word segment, splitting off English clitics ("don't" -> "do", "n't")
fn push_segment(segment: &str, tokens: &mut Vec<String>) {
    for clitic in NEGATION_CLITICS {
        let split = segment.len().saturating_sub(clitic.len());
        if split > 0
            && segment.is_char_boundary(split)
            && segment[split..].eq_ignore_ascii_case(clitic)
        {
            tokens.push(segment[..split].to_string());
            tokens.push(segment[split..].to_string());
            return;
        }
    }

    match segment.find(APOSTROPHES) {
        Some(idx) if idx > 0 => {
            tokens.push(segment[..idx].to_string());
            tokens.push(segment[idx..].to_string());
        }
        _ => tokens.push(segment.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_sentence(sentence: &str) -> Vec<(String, String)> {
        let tagger = EnglishTagger::new();
        let tokens = tagger.tokenize(sentence).unwrap();
        tagger.tag(&tokens).unwrap()
    }

    fn tags(sentence: &str) -> Vec<String> {
        tag_sentence(sentence).into_iter().map(|(_, t)| t).collect()
    }

    #[test]
    fn test_tokenize_separates_punctuation() {
        let tagger = EnglishTagger::new();
        assert_eq!(
            tagger.tokenize("Wow, cats sleep.").unwrap(),
            vec!["Wow", ",", "cats", "sleep", "."]
        );
    }

    #[test]
    fn test_tokenize_splits_clitics() {
        let tagger = EnglishTagger::new();
        assert_eq!(
            tagger.tokenize("I don't like John's dog").unwrap(),
            vec!["I", "do", "n't", "like", "John", "'s", "dog"]
        );
    }

    #[test]
    fn test_tokenize_splits_typographic_clitics() {
        let tagger = EnglishTagger::new();
        assert_eq!(
            tagger.tokenize("I don\u{2019}t know. It\u{2019}s fine").unwrap(),
            vec!["I", "do", "n\u{2019}t", "know", ".", "It", "\u{2019}s", "fine"]
        );
    }

    #[test]
    fn test_typographic_negation_is_tagged_as_particle() {
        assert_eq!(
            tags("I don\u{2019}t know."),
            vec!["PRON", "AUX", "PART", "VERB", "PUNCT"]
        );
    }

    #[test]
    fn test_tokenize_keeps_hyphenated_parts_apart() {
        let tagger = EnglishTagger::new();
        assert_eq!(
            tagger.tokenize("a well-known fact").unwrap(),
            vec!["a", "well", "-", "known", "fact"]
        );
    }

    #[test]
    fn test_simple_sentence() {
        assert_eq!(
            tags("The cat sleeps peacefully."),
            vec!["DET", "NOUN", "VERB", "ADV", "PUNCT"]
        );
    }

    #[test]
    fn test_closed_classes() {
        assert_eq!(
            tags("She walked with her friend and laughed"),
            vec!["PRON", "VERB", "ADP", "PRON", "NOUN", "CCONJ", "VERB"]
        );
    }

    #[test]
    fn test_unknown_word_after_subject_is_verb() {
        assert_eq!(tags("They juggle"), vec!["PRON", "VERB"]);
    }

    #[test]
    fn test_participle_after_determiner_is_adjective() {
        assert_eq!(
            tags("the crowded hall"),
            vec!["DET", "ADJ", "NOUN"]
        );
    }

    #[test]
    fn test_proper_noun_and_number() {
        assert_eq!(
            tags("We met Anna 2 times"),
            vec!["PRON", "VERB", "PROPN", "NUM", "NOUN"]
        );
    }
}
