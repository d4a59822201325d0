//! Description cleanup.
//!
//! Strips pronouns, action words, currency words and bare numbers from the
//! original phrase. Whatever is left becomes the description unless it is
//! shorter than [`MIN_DESCRIPTION_CHARS`], in which case the category's
//! template is used instead.

use kharcha_core::{Category, is_stopword};
use tracing::debug;

use crate::amount::is_plain_number;

pub const MIN_DESCRIPTION_CHARS: usize = 5;

const EDGE_PUNCTUATION: &[char] = &['.', ',', '!', '?'];

fn is_noise(token: &str) -> bool {
    let stripped = token.trim_matches(EDGE_PUNCTUATION);
    is_stopword(&stripped.to_lowercase()) || is_plain_number(stripped)
}

/// Build a description for an extracted expense.
///
/// `_amount` is accepted so callers can pass the whole extraction; it does
/// not affect the text.
pub fn generate(original_text: &str, category: Category, _amount: f64) -> String {
    let cleaned = original_text
        .split_whitespace()
        .filter(|token| !is_noise(token))
        .collect::<Vec<_>>()
        .join(" ");

    if cleaned.chars().count() < MIN_DESCRIPTION_CHARS {
        debug!(%category, residual = %cleaned, "using category template");
        return category.fallback_description().to_string();
    }

    cleaned
}
