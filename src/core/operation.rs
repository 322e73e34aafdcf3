//! Operation classification
//!
//! Queries are matched against a fixed, ordered keyword table. Matching is
//! plain substring containment on the lower-cased query, and the first entry
//! that matches wins regardless of where the keyword sits in the text.

use serde::{Deserialize, Serialize};

/// Arithmetic or logical action requested by a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    PrimeCheck,
    Addition,
    Subtraction,
    Multiplication,
    Exponent,
    Unknown,
}

/// Keyword table in priority order
pub const OPERATION_KEYWORDS: &[(&str, Operation)] = &[
    ("prime", Operation::PrimeCheck),
    ("multiplied by", Operation::Multiplication),
    ("minus", Operation::Subtraction),
    ("plus", Operation::Addition),
    ("power of", Operation::Exponent),
];

impl Operation {
    /// Wire name used in the JSON payload
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::PrimeCheck => "prime_check",
            Operation::Addition => "addition",
            Operation::Subtraction => "subtraction",
            Operation::Multiplication => "multiplication",
            Operation::Exponent => "exponent",
            Operation::Unknown => "unknown",
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Operation::Unknown)
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify the query by the first keyword it contains
pub fn classify(query: &str) -> Operation {
    let lower = query.to_lowercase();

    OPERATION_KEYWORDS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, operation)| *operation)
        .unwrap_or(Operation::Unknown)
}
