//! The full extraction pipeline: action gate, amount, category, description.

use kharcha_core::ExpenseRecord;
use tracing::{debug, info};

use crate::action::matched_action;
use crate::amount::AmountGrammar;
use crate::category_rules::classify;
use crate::description::generate;
use crate::error::{ParseFailure, Result};

/// Turns free-form phrases into [`ExpenseRecord`]s.
///
/// Holds only the compiled amount grammar, so a single parser can be
/// shared by reference across threads.
#[derive(Debug, Clone)]
pub struct ExpenseParser {
    grammar: AmountGrammar,
}

impl ExpenseParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            grammar: AmountGrammar::new()?,
        })
    }

    /// Run the pipeline on one phrase.
    ///
    /// Either every field of the record is produced or a single
    /// [`ParseFailure`] is returned.
    pub fn parse(&self, text: &str) -> std::result::Result<ExpenseRecord, ParseFailure> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ParseFailure::EmptyInput);
        }

        let Some(action) = matched_action(text) else {
            debug!(text, "no action word");
            return Err(ParseFailure::NoActionDetected);
        };
        debug!(text, action, "action word found");

        let Some(found) = self.grammar.extract_match(text) else {
            debug!(text, "no positive amount");
            return Err(ParseFailure::NoAmountFound);
        };
        let amount = found.value;
        debug!(rule = ?found.rule, amount, "amount extracted");

        let category = classify(text);
        let description = generate(text, category, amount);

        info!(amount, %category, description = %description, "extracted expense");
        Ok(ExpenseRecord::new(amount, category, description))
    }
}
