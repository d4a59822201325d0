//! Request/response shapes rendered around the pipeline

use kharcha_core::{EXAMPLE_PHRASES, ExpenseRecord};
use kharcha_pipeline::{ExpenseParser, ParseFailure};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseTextRequest {
    pub text: String,
    /// Accepted for compatibility; extraction is language-agnostic
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "mixed".to_string()
}

impl ExpenseTextRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: default_language(),
        }
    }

    /// A JSON request object, or the whole line as raw text.
    pub fn from_line(line: &str) -> Self {
        serde_json::from_str(line).unwrap_or_else(|_| Self::new(line))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseResponse {
    pub success: bool,
    pub expense: Option<ExpenseRecord>,
    pub error: Option<String>,
}

impl ExpenseResponse {
    pub fn from_outcome(outcome: Result<ExpenseRecord, ParseFailure>) -> Self {
        match outcome {
            Ok(expense) => Self {
                success: true,
                expense: Some(expense),
                error: None,
            },
            Err(failure) => Self {
                success: false,
                expense: None,
                error: Some(failure.to_string()),
            },
        }
    }

    pub fn internal(err: &anyhow::Error) -> Self {
        Self {
            success: false,
            expense: None,
            error: Some(format!("Internal error: {err:#}")),
        }
    }
}

pub fn process(parser: &ExpenseParser, request: &ExpenseTextRequest) -> ExpenseResponse {
    info!(text = %request.text.trim(), language = %request.language, "processing text");
    let outcome = parser.parse(&request.text);
    if let Err(failure) = &outcome {
        warn!(code = failure.code(), "{failure}");
    }
    ExpenseResponse::from_outcome(outcome)
}

#[derive(Debug, Clone, Serialize)]
pub struct ExampleList {
    pub examples: &'static [&'static str],
}

impl ExampleList {
    pub fn all() -> Self {
        Self {
            examples: EXAMPLE_PHRASES,
        }
    }
}
