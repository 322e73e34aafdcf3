//! Top-level query dispatch
//!
//! A query passes through three stages and the first one that applies
//! produces the answer:
//!
//! 1. canned keyword responses
//! 2. numeric dispatch (operation keyword plus at least one number)
//! 3. the fallback sentence
//!
//! Numeric dispatch yields a [`Calculation`] payload rather than a computed
//! answer; [`Calculation::evaluate`] is the downstream step that renders it.

use crate::core::canned::canned_response;
use crate::core::evaluate::evaluate;
use crate::core::extract::extract_numbers;
use crate::core::operation::{Operation, classify};
use crate::utils::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const FALLBACK_RESPONSE: &str = "I’m not sure how to handle that query.";

/// Structured payload for a numeric query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calculation {
    pub operation: Operation,
    pub numbers: Vec<i64>,
}

impl Calculation {
    pub fn new(operation: Operation, numbers: Vec<i64>) -> Self {
        Self { operation, numbers }
    }

    /// Serialize as a compact JSON object
    pub fn to_json(&self) -> AppResult<String> {
        serde_json::to_string(self)
            .map_err(|e| AppError::Payload(format!("Failed to serialize calculation: {}", e)))
    }

    pub fn to_json_pretty(&self) -> AppResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AppError::Payload(format!("Failed to serialize calculation: {}", e)))
    }

    /// Parse a payload produced by [`process_query`]
    pub fn from_json(payload: &str) -> AppResult<Self> {
        serde_json::from_str(payload)
            .map_err(|e| AppError::Payload(format!("Failed to parse calculation payload: {}", e)))
    }

    /// Compute the prose answer for this payload
    pub fn evaluate(&self) -> String {
        evaluate(self.operation, &self.numbers)
    }
}

/// Outcome of routing a single query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Canned(&'static str),
    Calculation(Calculation),
    Fallback,
}

impl Response {
    /// Router output as the single string handed back to callers
    pub fn render(&self) -> String {
        match self {
            Response::Canned(text) => text.to_string(),
            Response::Calculation(calculation) => match calculation.to_json() {
                Ok(json) => json,
                Err(err) => {
                    warn!(%err, "payload serialization failed, using fallback");
                    FALLBACK_RESPONSE.to_string()
                }
            },
            Response::Fallback => FALLBACK_RESPONSE.to_string(),
        }
    }

    /// Like [`render`](Self::render), but numeric payloads are evaluated to prose
    pub fn answer(&self) -> String {
        match self {
            Response::Calculation(calculation) => calculation.evaluate(),
            other => other.render(),
        }
    }
}

/// Decide how a query should be answered
pub fn route(query: &str) -> Response {
    if let Some(text) = canned_response(query) {
        debug!("query matched a canned response");
        return Response::Canned(text);
    }

    let numbers = extract_numbers(query);
    let operation = classify(query);
    debug!(%operation, count = numbers.len(), "classified query");

    if !operation.is_unknown() && !numbers.is_empty() {
        return Response::Calculation(Calculation::new(operation, numbers));
    }

    debug!("no branch applied, using fallback");
    Response::Fallback
}

/// Route a query and return the answer string
///
/// Never fails: canned text, a JSON `{"operation", "numbers"}` payload, or
/// the fallback sentence.
pub fn process_query(query: &str) -> String {
    route(query).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::canned::SHAKESPEARE_BIOGRAPHY;
    use crate::core::evaluate::EXPONENT_NEEDS_TWO;

    fn payload(query: &str) -> Calculation {
        Calculation::from_json(&process_query(query)).unwrap()
    }

    #[test]
    fn test_canned_wins_over_arithmetic() {
        assert_eq!(process_query("What's your name? Also 3 plus 4"), "Rohan");
        assert_eq!(
            route("Shakespeare wrote 154 sonnets plus 39 plays"),
            Response::Canned(SHAKESPEARE_BIOGRAPHY)
        );
    }

    #[test]
    fn test_prime_payload() {
        let calc = payload("Which of the following are primes: 94, 16, 78, 89, 19?");
        assert_eq!(calc.operation, Operation::PrimeCheck);
        assert_eq!(calc.numbers, vec![94, 16, 78, 89, 19]);
    }

    #[test]
    fn test_payload_shape() {
        assert_eq!(
            process_query("What is 59 multiplied by 22?"),
            r#"{"operation":"multiplication","numbers":[59,22]}"#
        );

        let value: serde_json::Value =
            serde_json::from_str(&process_query("What is 11 minus 37?")).unwrap();
        assert_eq!(value["operation"], "subtraction");
        assert_eq!(value["numbers"], serde_json::json!([11, 37]));
    }

    #[test]
    fn test_exponent_payload_and_evaluation() {
        let calc = payload("What is 3 to the power of 4?");
        assert_eq!(calc, Calculation::new(Operation::Exponent, vec![3, 4]));
        assert_eq!(calc.evaluate(), "3 ^ 4 = 81");
    }

    #[test]
    fn test_fallback() {
        assert_eq!(process_query("Can you decipher this cryptic message?!"), FALLBACK_RESPONSE);
        assert_eq!(process_query(""), FALLBACK_RESPONSE);
    }

    #[test]
    fn test_numbers_without_operation_fall_back() {
        assert_eq!(route("You have 42"), Response::Fallback);
    }

    #[test]
    fn test_operation_without_numbers_falls_back() {
        assert_eq!(route("What is seven plus eight?"), Response::Fallback);
    }

    #[test]
    fn test_answer_evaluates_payloads() {
        assert_eq!(route("What is 2 plus 3 plus 4?").answer(), "2 + 3 + 4 = 9");
        assert_eq!(route("What's your name?").answer(), "Rohan");
        assert_eq!(route("hmm").answer(), FALLBACK_RESPONSE);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(Calculation::from_json("Rohan").is_err());
        assert!(Calculation::from_json(r#"{"operation":"division","numbers":[1]}"#).is_err());
    }

    #[test]
    fn test_pretty_json_round_trips() {
        let calc = Calculation::new(Operation::Addition, vec![-1, 2]);
        assert_eq!(Calculation::from_json(&calc.to_json_pretty().unwrap()).unwrap(), calc);
    }

    #[test]
    fn test_exponent_with_one_number_routes_then_explains() {
        let calc = payload("2 to the power of");
        assert_eq!(calc, Calculation::new(Operation::Exponent, vec![2]));
        assert_eq!(calc.evaluate(), EXPONENT_NEEDS_TWO);
    }

    #[test]
    fn test_compact_json_matches_render() {
        let calc = Calculation::new(Operation::PrimeCheck, vec![7, -3]);
        assert_eq!(
            calc.to_json().unwrap(),
            r#"{"operation":"prime_check","numbers":[7,-3]}"#
        );
        assert_eq!(Response::Calculation(calc.clone()).render(), calc.to_json().unwrap());
    }

    #[test]
    fn test_idempotent() {
        let query = "Which of the following are primes: 94, 16, 78, 89, 19?";
        assert_eq!(process_query(query), process_query(query));
    }
}
