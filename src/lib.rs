//! Quipster - a keyword query router
//!
//! A query is answered by a fixed canned response, by a structured
//! arithmetic payload, or by a fallback sentence. Payloads can be evaluated
//! into prose with [`Calculation::evaluate`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod logger;
pub mod utils;

// Re-export core types for easier use
pub use crate::core::{
    evaluate::{Number, evaluate, is_prime},
    extract::extract_numbers,
    operation::{OPERATION_KEYWORDS, Operation, classify},
    processor::{Calculation, FALLBACK_RESPONSE, Response, process_query, route},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
