//! Core query routing
//!
//! Extraction, classification, canned answers, evaluation and the dispatch
//! that ties them together.

pub mod canned;
pub mod evaluate;
pub mod extract;
pub mod operation;
pub mod processor;
