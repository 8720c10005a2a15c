//! essaygrade-core — Text normalization and lexical-overlap scoring.
//!
//! This crate turns free text into token sets and grades a student answer
//! against a reference answer by Jaccard similarity. Everything here is pure
//! and total: no I/O, no shared state, no error paths.

pub mod grade;
pub mod normalize;
pub mod similarity;

pub use grade::{grade_answer, score, FeedbackCategory, GradeResult};
pub use normalize::{clean_text, normalize, TokenSet};
pub use similarity::jaccard;
