//! kharcha-pipeline: action detection, amount extraction, keyword
//! categorization and description cleanup for short expense phrases

pub mod action;
pub mod amount;
pub mod category_rules;
pub mod description;
pub mod error;
pub mod pipeline;

pub use action::{detect, matched_action};
pub use amount::{AmountGrammar, AmountMatch, AmountRule};
pub use category_rules::{Classified, classify, classify_with_keyword};
pub use description::{MIN_DESCRIPTION_CHARS, generate};
pub use error::{KharchaError, ParseFailure, Result};
pub use pipeline::ExpenseParser;
