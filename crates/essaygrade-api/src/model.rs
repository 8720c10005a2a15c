//! Wire types for the grading endpoint.
//!
//! Field names on the wire keep the original Indonesian JSON keys so
//! existing clients keep working; the Rust field names are English.

use serde::{Deserialize, Serialize};

pub const STUDENT_ANSWER_FIELD: &str = "jawaban_siswa";
pub const ANSWER_KEY_FIELD: &str = "kunci_jawaban";
pub const QUESTION_ID_FIELD: &str = "id_soal";

/// An incoming grading request.
///
/// Required fields are optional here so that a missing field can be
/// reported with a descriptive message instead of a deserialization error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeRequest {
    /// The student's free-text answer.
    #[serde(rename = "jawaban_siswa", default)]
    pub student_answer: Option<String>,
    /// The reference answer paragraph.
    #[serde(rename = "kunci_jawaban", default)]
    pub answer_key: Option<String>,
    /// Optional question identifier, echoed back.
    #[serde(rename = "id_soal", default, skip_serializing_if = "Option::is_none")]
    pub question_id: Option<String>,
}

impl GradeRequest {
    pub fn new(student_answer: impl Into<String>, answer_key: impl Into<String>) -> Self {
        Self {
            student_answer: Some(student_answer.into()),
            answer_key: Some(answer_key.into()),
            question_id: None,
        }
    }

    pub fn with_question_id(mut self, question_id: impl Into<String>) -> Self {
        self.question_id = Some(question_id.into());
        self
    }
}

/// A graded request. Both answers are echoed verbatim, not normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeResponse {
    #[serde(rename = "id_soal")]
    pub question_id: String,
    #[serde(rename = "jawaban_siswa")]
    pub student_answer: String,
    #[serde(rename = "kunci_jawaban")]
    pub answer_key: String,
    /// Integer grade, 0-100.
    #[serde(rename = "nilai")]
    pub grade: u8,
    /// Similarity line followed by the qualitative verdict.
    pub feedback: Vec<String>,
}

/// Body of a rejected request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReplyBody {
    Graded(GradeResponse),
    Rejected(ErrorBody),
}

/// Transport-neutral reply: a status code and a JSON body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub status: u16,
    pub body: ReplyBody,
}

impl Reply {
    pub fn is_success(&self) -> bool {
        matches!(self.body, ReplyBody::Graded(_))
    }
}
