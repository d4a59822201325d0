//! Expense record types produced by the extraction pipeline

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Spending categories, in classification precedence order
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Entertainment,
    Bills,
    Medical,
    Education,
    #[default]
    Other,
}

impl Category {
    /// Every category, `Other` last
    pub const ALL: [Category; 8] = [
        Category::Food,
        Category::Transport,
        Category::Shopping,
        Category::Entertainment,
        Category::Bills,
        Category::Medical,
        Category::Education,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Transport => "transport",
            Category::Shopping => "shopping",
            Category::Entertainment => "entertainment",
            Category::Bills => "bills",
            Category::Medical => "medical",
            Category::Education => "education",
            Category::Other => "other",
        }
    }

    /// Description used when nothing meaningful survives cleanup
    pub fn fallback_description(&self) -> &'static str {
        match self {
            Category::Food => "Food expense",
            Category::Transport => "Transportation expense",
            Category::Shopping => "Shopping expense",
            Category::Entertainment => "Entertainment expense",
            Category::Bills => "Bill payment",
            Category::Medical => "Medical expense",
            Category::Education => "Education expense",
            Category::Other => "General expense",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// One expense pulled out of a free-form phrase
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseRecord {
    /// Always strictly positive
    pub amount: f64,
    pub category: Category,
    /// Never empty; at least five characters
    pub description: String,
}

impl ExpenseRecord {
    pub fn new(amount: f64, category: Category, description: impl Into<String>) -> Self {
        Self {
            amount,
            category,
            description: description.into(),
        }
    }
}
