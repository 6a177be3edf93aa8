use crate::language::Difficulty;

const EASY_MAX_WORDS: usize = 6;
const HARD_MIN_WORDS: usize = 15;

/// Classify a sentence by its whitespace word count
pub fn classify(sentence: &str) -> Difficulty {
    classify_word_count(sentence.split_whitespace().count())
}

pub fn classify_word_count(word_count: usize) -> Difficulty {
    if word_count <= EASY_MAX_WORDS {
        Difficulty::Easy
    } else if word_count >= HARD_MIN_WORDS {
        Difficulty::Hard
    } else {
        Difficulty::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_word_count_boundaries() {
        assert_eq!(classify_word_count(3), Difficulty::Easy);
        assert_eq!(classify_word_count(6), Difficulty::Easy);
        assert_eq!(classify_word_count(7), Difficulty::Medium);
        assert_eq!(classify_word_count(10), Difficulty::Medium);
        assert_eq!(classify_word_count(14), Difficulty::Medium);
        assert_eq!(classify_word_count(15), Difficulty::Hard);
    }

    #[test]
    fn test_classify_sentence() {
        assert_eq!(classify("The cat sleeps peacefully."), Difficulty::Easy);
        assert_eq!(
            classify("The beautiful flowers bloom in   the spring garden."),
            Difficulty::Medium
        );
        assert_eq!(classify(""), Difficulty::Easy);
    }
}
