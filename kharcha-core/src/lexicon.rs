//! Static reference tables: category keywords, action words, stopwords,
//! and the example phrases shown to users.
//!
//! All entries are lowercase. Order is significant: classification walks
//! categories and keywords top to bottom and stops at the first hit.

use serde::{Deserialize, Serialize};

use crate::expense::Category;

/// Category keywords in classification order. `Other` has no keywords.
pub const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Food,
        &[
            "khana", "food", "restaurant", "meal", "breakfast", "lunch", "dinner", "snacks",
            "coffee", "tea", "chai", "nashta", "khane", "pizza", "burger", "biryani", "dal",
            "rice", "roti", "sabzi", "sweets", "mithai", "khaana",
        ],
    ),
    (
        Category::Transport,
        &[
            "transport", "taxi", "uber", "ola", "bus", "metro", "train", "petrol", "diesel",
            "fuel", "auto", "rickshaw", "bike", "car", "travel", "safar", "yatra", "ticket",
            "parking", "gaadi",
        ],
    ),
    (
        Category::Shopping,
        &[
            "shopping", "clothes", "kapde", "shirt", "pant", "shoes", "jute", "market", "mall",
            "online", "amazon", "flipkart", "dress", "saree", "kurta", "accessories", "bag",
            "purse", "kharidari",
        ],
    ),
    (
        Category::Entertainment,
        &[
            "movie", "cinema", "film", "entertainment", "game", "party", "club", "concert",
            "music", "book", "magazine", "netflix", "subscription", "youtube", "spotify",
            "manoranjan", "masti",
        ],
    ),
    (
        Category::Bills,
        &[
            "bill", "electricity", "bijli", "water", "pani", "gas", "internet", "wifi", "mobile",
            "phone", "recharge", "rent", "kiraya", "maintenance", "society", "utility",
        ],
    ),
    (
        Category::Medical,
        &[
            "medical", "doctor", "hospital", "medicine", "dawa", "dawai", "clinic", "checkup",
            "treatment", "ilaj", "pharmacy", "health", "sehat", "dentist", "eye", "test", "lab",
            "x-ray", "scan",
        ],
    ),
    (
        Category::Education,
        &[
            "education", "school", "college", "university", "course", "book", "kitab", "fees",
            "tuition", "coaching", "class", "study", "padhai", "exam", "stationery", "pen",
            "pencil", "notebook",
        ],
    ),
];

/// Words signalling that money changed hands
pub const ACTION_WORDS: &[&str] = &[
    "spent", "spend", "kharch", "kharcha", "kiye", "kiya", "gaye", "gaya", "paid", "pay", "diye",
    "diya", "bought", "buy", "kharida", "kharide", "liya", "liye", "cost", "costed", "lagaye",
    "laga", "bill", "expense",
];

/// Tokens dropped when turning a phrase into a description
pub const STOPWORDS: &[&str] = &[
    "maine", "main", "ne", "mein", "me", "i", "spent", "spend", "paid", "pay", "kiye", "kiya",
    "gaye", "gaya", "diye", "diya", "kharch", "kharcha", "rupees", "rupaye", "rupaiye", "rs", "₹",
];

pub const EXAMPLE_PHRASES: &[&str] = &[
    "Maine 500 rupees khana pe kharch kiye",
    "Transport mein 200 rupees gaye",
    "Shopping ke liye 1500 spend kiye",
    "Medical bill 800 rupees ka tha",
    "Petrol mein 2000 rupees bharwaye",
    "Movie ticket ke liye 300 paid kiye",
    "Electricity bill 1200 rupees ka aaya",
    "Books ke liye 800 rupees kharche",
];

/// Keywords for a single category; empty for `Other`.
pub fn keywords_for(category: Category) -> &'static [&'static str] {
    CATEGORY_KEYWORDS
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, kws)| *kws)
        .unwrap_or(&[])
}

pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}

/// Keyword list for one category, as listed by the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryKeywords {
    pub category: Category,
    pub keywords: Vec<String>,
}

/// Read-only snapshot of the category enumeration and its keywords
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryCatalog {
    pub categories: Vec<Category>,
    pub keywords: Vec<CategoryKeywords>,
}

impl CategoryKeywords {
    pub fn of(category: Category) -> Self {
        Self {
            category,
            keywords: keywords_for(category).iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl CategoryCatalog {
    pub fn snapshot() -> Self {
        Self {
            categories: Category::ALL.to_vec(),
            keywords: CATEGORY_KEYWORDS
                .iter()
                .map(|(category, _)| CategoryKeywords::of(*category))
                .collect(),
        }
    }
}
