//! kharcha-core: expense record types and the static lexicons the
//! extraction pipeline reads from

pub mod expense;
pub mod lexicon;

pub use expense::{Category, ExpenseRecord, UnknownCategory};
pub use lexicon::{
    ACTION_WORDS, CATEGORY_KEYWORDS, CategoryCatalog, CategoryKeywords, EXAMPLE_PHRASES,
    STOPWORDS, is_stopword, keywords_for,
};
