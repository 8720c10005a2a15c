//! Request rejection errors.
//!
//! Every variant is a client error. The `Display` text is what ends up in
//! the `error` field of the response body.

use thiserror::Error;

/// Status code for a graded request.
pub const STATUS_OK: u16 = 200;
/// Status code for a rejected request.
pub const STATUS_BAD_REQUEST: u16 = 400;

/// Reasons a request is rejected before it reaches the scorer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The body is not a JSON object.
    #[error("Request body must be JSON")]
    MalformedBody,

    /// A required answer field is absent, null, not a string, or empty.
    #[error("Missing 'jawaban_siswa' or 'kunci_jawaban' in request")]
    MissingField,

    /// The question id is neither a string nor a number.
    #[error("'id_soal' must be a string or a number")]
    InvalidQuestionId,

    /// An answer is longer than the configured limit.
    #[error("'{field}' exceeds {limit} characters")]
    AnswerTooLong { field: &'static str, limit: usize },
}

impl ApiError {
    /// Status code to report for this error.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::MalformedBody
            | ApiError::MissingField
            | ApiError::InvalidQuestionId
            | ApiError::AnswerTooLong { .. } => STATUS_BAD_REQUEST,
        }
    }
}
