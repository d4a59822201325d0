//! Keyword category rules.
//!
//! Categories are checked in declaration order and the first keyword found
//! anywhere in the phrase decides. Precedence beats specificity: "Medical
//! bill" lands in bills and "Movie ticket" in transport.

use kharcha_core::{CATEGORY_KEYWORDS, Category};
use tracing::debug;

/// Category plus the keyword that selected it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classified {
    pub category: Category,
    pub keyword: Option<&'static str>,
}

pub fn classify_with_keyword(text: &str) -> Classified {
    let lower = text.to_lowercase();

    for (category, keywords) in CATEGORY_KEYWORDS {
        if let Some(keyword) = keywords.iter().copied().find(|k| lower.contains(k)) {
            debug!(%category, keyword, "category matched");
            return Classified {
                category: *category,
                keyword: Some(keyword),
            };
        }
    }

    Classified {
        category: Category::Other,
        keyword: None,
    }
}

/// Category for a phrase, `Other` when no keyword matches.
pub fn classify(text: &str) -> Category {
    classify_with_keyword(text).category
}
