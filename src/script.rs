//! Script-based validation of localized text.
//!
//! Generated and substituted text for a non-Latin language is only accepted
//! when most of it is actually written in that language's Unicode block.

use crate::language::{Language, ScriptBlock};

const MIN_CHARS: usize = 3;
const MIN_SCRIPT_RATIO: f64 = 0.5;

/// Punctuation allowed to join script runs
const RUN_PUNCTUATION: &[char] = &[',', '.', ';', ':', '!', '?'];

/// Check that `text` plausibly belongs to `language`.
///
/// Latin-script languages always pass.
pub fn is_valid(text: &str, language: Language) -> bool {
    let Some(block) = language.script() else {
        return true;
    };

    let total = text.chars().count();
    if total < MIN_CHARS {
        return false;
    }

    script_ratio(text, &block) > MIN_SCRIPT_RATIO
}

/// Extract the longest contiguous run of `language` script from raw generator output.
///
/// Whitespace and sentence punctuation inside a run keep it going; any other
/// character ends it. Returns `None` for Latin languages or when no script
/// character is present.
pub fn extract_script_run(raw: &str, language: Language) -> Option<String> {
    let block = language.script()?;

    let mut best: Option<(usize, String)> = None;
    let mut current = String::new();
    let mut current_script_chars = 0usize;

    for c in raw.chars() {
        if block.contains(c) {
            current.push(c);
            current_script_chars += 1;
        } else if current_script_chars > 0 && joins_run(c) {
            current.push(c);
        } else {
            keep_longer(&mut best, &current, current_script_chars);
            current.clear();
            current_script_chars = 0;
        }
    }
    keep_longer(&mut best, &current, current_script_chars);

    best.map(|(_, run)| run)
}

fn joins_run(c: char) -> bool {
    c.is_whitespace() || RUN_PUNCTUATION.contains(&c)
}

fn keep_longer(best: &mut Option<(usize, String)>, candidate: &str, script_chars: usize) {
    if script_chars == 0 {
        return;
    }
    let trimmed = candidate.trim();
    let len = trimmed.chars().count();
    if best.as_ref().map_or(true, |(best_len, _)| len > *best_len) {
        *best = Some((len, trimmed.to_string()));
    }
}

/// Fraction of characters in `text` that fall inside `block`
pub fn script_ratio(text: &str, block: &ScriptBlock) -> f64 {
    let total = text.chars().count();
    if total == 0 {
        return 0.0;
    }
    text.chars().filter(|c| block.contains(*c)).count() as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_invalid() {
        assert!(!is_valid("ab", Language::Thai));
        assert!(!is_valid("แม", Language::Thai));
    }

    #[test]
    fn test_script_ratio_threshold() {
        // 6 of 10 characters are Thai
        assert!(is_valid("แมวนอนabcd", Language::Thai));
        // 4 of 10
        assert!(!is_valid("แมวนabcdef", Language::Thai));
        // exactly half is not enough
        assert!(!is_valid("แมวนอabcde", Language::Thai));
    }

    #[test]
    fn test_validation_agrees_with_script_ratio() {
        let block = Language::Thai.script().unwrap();
        for text in ["แมวนอนabcd", "แมวนabcdef", "แมวนอabcde", "นกบินสูง"] {
            assert_eq!(
                is_valid(text, Language::Thai),
                script_ratio(text, &block) > MIN_SCRIPT_RATIO
            );
        }
    }

    #[test]
    fn test_latin_languages_skip_the_check() {
        assert!(is_valid("", Language::English));
        assert!(is_valid("ok", Language::English));
    }

    #[test]
    fn test_extract_script_run_discards_surrounding_text() {
        let raw = "Translate this English sentence to Thai: 'The cat sleeps.' แมวนอนหลับ. Hope this helps!";
        assert_eq!(
            extract_script_run(raw, Language::Thai).as_deref(),
            Some("แมวนอนหลับ.")
        );
    }

    #[test]
    fn test_extract_script_run_picks_longest_run() {
        let raw = "แมว (cat) means แมวนอนหลับสบาย, indeed";
        assert_eq!(
            extract_script_run(raw, Language::Thai).as_deref(),
            Some("แมวนอนหลับสบาย,")
        );
    }

    #[test]
    fn test_extract_script_run_keeps_inner_spaces() {
        assert_eq!(
            extract_script_run("-> แมว นอน <-", Language::Thai).as_deref(),
            Some("แมว นอน")
        );
    }

    #[test]
    fn test_extract_script_run_none_without_script() {
        assert!(extract_script_run("no thai here", Language::Thai).is_none());
        assert!(extract_script_run("แมว", Language::English).is_none());
    }

    #[test]
    fn test_script_ratio() {
        let block = Language::Thai.script().unwrap();
        assert_eq!(script_ratio("", &block), 0.0);
        assert!((script_ratio("แมวab", &block) - 0.6).abs() < 1e-9);
    }
}
