//! Spending-action gate.
//!
//! Matching is plain substring containment on the lower-cased text, so
//! "pay" also fires inside "payment" and "bill" inside "billing".

use kharcha_core::ACTION_WORDS;

/// First action word contained in `text`, if any.
pub fn matched_action(text: &str) -> Option<&'static str> {
    let lower = text.to_lowercase();
    ACTION_WORDS.iter().copied().find(|w| lower.contains(w))
}

/// True when the text mentions any spending action.
pub fn detect(text: &str) -> bool {
    matched_action(text).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_hindi_and_english() {
        assert!(detect("Maine 500 rupees khana pe kharch kiye"));
        assert!(detect("SPENT 20 on chai"));
        assert!(detect("Transport mein 200 rupees gaye"));
    }

    #[test]
    fn test_no_action() {
        assert!(!detect("I like pizza"));
        assert!(!detect(""));
        assert!(!detect("500 rupees"));
    }

    #[test]
    fn test_substring_matches_inside_words() {
        // "payment" contains "pay"
        assert_eq!(matched_action("monthly payment"), Some("pay"));
        // "kharcha" is listed after "kharch", which already matches
        assert_eq!(matched_action("kharcha hua"), Some("kharch"));
    }
}
