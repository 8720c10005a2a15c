//! Grade and feedback derivation.
//!
//! A similarity in `[0.0, 1.0]` becomes an integer grade in `[0, 100]` and
//! two feedback lines: the similarity itself, then one qualitative verdict
//! picked from a fixed threshold ladder.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::normalize::{normalize, TokenSet};
use crate::similarity::jaccard;

/// Qualitative verdict, ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackCategory {
    /// Similarity of at least 0.8.
    Excellent,
    /// Similarity in `[0.5, 0.8)`.
    Good,
    /// Similarity in `(0.0, 0.5)`.
    Insufficient,
    /// No shared tokens at all.
    NoOverlap,
}

impl FeedbackCategory {
    /// Pick the category for a similarity value. First matching rung wins.
    pub fn from_similarity(similarity: f64) -> Self {
        if similarity >= 0.8 {
            FeedbackCategory::Excellent
        } else if similarity >= 0.5 {
            FeedbackCategory::Good
        } else if similarity > 0.0 {
            FeedbackCategory::Insufficient
        } else {
            FeedbackCategory::NoOverlap
        }
    }

    /// The feedback line shown to the student.
    pub fn message(&self) -> &'static str {
        match self {
            FeedbackCategory::Excellent => {
                "Jawaban sangat baik dan sangat relevan dengan kunci jawaban."
            }
            FeedbackCategory::Good => {
                "Jawaban cukup baik dan relevan, namun ada ruang untuk detail lebih lanjut."
            }
            FeedbackCategory::Insufficient => {
                "Jawaban kurang relevan atau tidak lengkap dibandingkan kunci jawaban."
            }
            FeedbackCategory::NoOverlap => "Jawaban tidak memiliki kemiripan dengan kunci jawaban.",
        }
    }
}

impl fmt::Display for FeedbackCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedbackCategory::Excellent => write!(f, "excellent"),
            FeedbackCategory::Good => write!(f, "good"),
            FeedbackCategory::Insufficient => write!(f, "insufficient"),
            FeedbackCategory::NoOverlap => write!(f, "no_overlap"),
        }
    }
}

/// Outcome of grading one answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeResult {
    /// Rounded percentage, 0-100.
    pub grade: u8,
    /// Jaccard similarity the grade was derived from.
    pub similarity: f64,
    /// Which rung of the feedback ladder matched.
    pub category: FeedbackCategory,
    /// Quantitative line, then the qualitative line.
    pub feedback: Vec<String>,
}

/// Grade a student token set against a reference token set.
///
/// The percentage is rounded half away from zero, so a similarity of
/// exactly 0.125 grades as 13.
pub fn score(student: &TokenSet, key: &TokenSet) -> GradeResult {
    let similarity = jaccard(student, key);
    let grade = (similarity * 100.0).round() as u8;
    let category = FeedbackCategory::from_similarity(similarity);

    let feedback = vec![
        format!("Tingkat kemiripan (Jaccard Similarity): {similarity:.2}"),
        category.message().to_string(),
    ];

    GradeResult {
        grade,
        similarity,
        category,
        feedback,
    }
}

/// Normalize both texts and grade the student answer against the key.
pub fn grade_answer(student_answer: &str, answer_key: &str) -> GradeResult {
    let student = normalize(student_answer);
    let key = normalize(answer_key);
    let result = score(&student, &key);
    tracing::debug!(
        student_tokens = student.len(),
        key_tokens = key.len(),
        shared = student.intersection_len(&key),
        grade = result.grade,
        "graded answer"
    );
    result
}
