//! The grading handler.

use serde_json::{Map, Value};

use essaygrade_core::grade_answer;

use crate::config::EssaygradeConfig;
use crate::error::{ApiError, STATUS_OK};
use crate::model::{
    ErrorBody, GradeRequest, GradeResponse, Reply, ReplyBody, ANSWER_KEY_FIELD,
    QUESTION_ID_FIELD, STUDENT_ANSWER_FIELD,
};

/// Validate a typed request and grade it.
pub fn handle(
    request: &GradeRequest,
    config: &EssaygradeConfig,
) -> Result<GradeResponse, ApiError> {
    let student_answer = required(request.student_answer.as_deref())?;
    let answer_key = required(request.answer_key.as_deref())?;

    check_length(STUDENT_ANSWER_FIELD, student_answer, config.max_answer_chars)?;
    check_length(ANSWER_KEY_FIELD, answer_key, config.max_answer_chars)?;

    let question_id = request
        .question_id
        .clone()
        .unwrap_or_else(|| config.default_question_id.clone());

    let result = grade_answer(student_answer, answer_key);
    tracing::info!(
        question_id = %question_id,
        grade = result.grade,
        category = %result.category,
        "graded submission"
    );

    Ok(GradeResponse {
        question_id,
        student_answer: student_answer.to_string(),
        answer_key: answer_key.to_string(),
        grade: result.grade,
        feedback: result.feedback,
    })
}

/// Handle a raw JSON request body.
///
/// Never fails: every problem with the body is turned into a client-error
/// [`Reply`].
pub fn handle_body(body: &str, config: &EssaygradeConfig) -> Reply {
    match parse_request(body).and_then(|request| handle(&request, config)) {
        Ok(response) => Reply {
            status: STATUS_OK,
            body: ReplyBody::Graded(response),
        },
        Err(e) => {
            tracing::warn!("rejected request: {e}");
            Reply {
                status: e.status(),
                body: ReplyBody::Rejected(ErrorBody {
                    error: e.to_string(),
                }),
            }
        }
    }
}

/// Parse a body leniently: non-string answers count as missing, numeric
/// question ids are accepted as text.
fn parse_request(body: &str) -> Result<GradeRequest, ApiError> {
    let value: Value = serde_json::from_str(body).map_err(|_| ApiError::MalformedBody)?;
    let Value::Object(object) = value else {
        return Err(ApiError::MalformedBody);
    };

    let question_id = match object.get(QUESTION_ID_FIELD) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(_) => return Err(ApiError::InvalidQuestionId),
    };

    Ok(GradeRequest {
        student_answer: string_field(&object, STUDENT_ANSWER_FIELD),
        answer_key: string_field(&object, ANSWER_KEY_FIELD),
        question_id,
    })
}

fn string_field(object: &Map<String, Value>, name: &str) -> Option<String> {
    object.get(name).and_then(Value::as_str).map(str::to_owned)
}

fn required(field: Option<&str>) -> Result<&str, ApiError> {
    match field {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(ApiError::MissingField),
    }
}

fn check_length(field: &'static str, text: &str, limit: usize) -> Result<(), ApiError> {
    if limit > 0 && text.chars().count() > limit {
        return Err(ApiError::AnswerTooLong { field, limit });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> EssaygradeConfig {
        EssaygradeConfig::default()
    }

    fn graded(reply: Reply) -> GradeResponse {
        match reply.body {
            ReplyBody::Graded(response) => response,
            ReplyBody::Rejected(e) => panic!("expected a graded reply, got: {}", e.error),
        }
    }

    fn rejected(reply: Reply) -> String {
        assert_eq!(reply.status, 400);
        match reply.body {
            ReplyBody::Rejected(e) => e.error,
            ReplyBody::Graded(r) => panic!("expected a rejection, got grade {}", r.grade),
        }
    }

    #[test]
    fn grades_valid_request() {
        let request = GradeRequest::new("Mesin uap, pabrik!", "mesin uap dan pabrik")
            .with_question_id("RI-1");
        let response = handle(&request, &config()).unwrap();
        assert_eq!(response.question_id, "RI-1");
        assert_eq!(response.grade, 75);
        assert_eq!(response.feedback.len(), 2);
        assert_eq!(response.feedback[0], "Tingkat kemiripan (Jaccard Similarity): 0.75");
    }

    #[test]
    fn echoes_inputs_verbatim() {
        let request = GradeRequest::new("  Saya TIDAK tahu!  ", "Kunci, 123.");
        let response = handle(&request, &config()).unwrap();
        assert_eq!(response.student_answer, "  Saya TIDAK tahu!  ");
        assert_eq!(response.answer_key, "Kunci, 123.");
    }

    #[test]
    fn missing_question_id_uses_configured_default() {
        let request = GradeRequest::new("a", "b");
        assert_eq!(handle(&request, &config()).unwrap().question_id, "unspecified");

        let custom = EssaygradeConfig {
            default_question_id: "Tidak Spesifik".into(),
            ..EssaygradeConfig::default()
        };
        assert_eq!(handle(&request, &custom).unwrap().question_id, "Tidak Spesifik");
    }

    #[test]
    fn rejects_missing_or_empty_answers() {
        let cases = [
            GradeRequest::default(),
            GradeRequest {
                answer_key: Some("kunci".into()),
                ..GradeRequest::default()
            },
            GradeRequest::new("", "kunci"),
            GradeRequest::new("jawaban", ""),
        ];
        for request in cases {
            assert_eq!(handle(&request, &config()), Err(ApiError::MissingField));
        }
    }

    #[test]
    fn symbol_only_answer_is_graded_not_rejected() {
        let response = handle(&GradeRequest::new("?!", "kunci jawaban"), &config()).unwrap();
        assert_eq!(response.grade, 0);
    }

    #[test]
    fn enforces_length_limit() {
        let limited = EssaygradeConfig {
            max_answer_chars: 5,
            ..EssaygradeConfig::default()
        };
        assert_eq!(
            handle(&GradeRequest::new("enam..", "abc"), &limited),
            Err(ApiError::AnswerTooLong {
                field: STUDENT_ANSWER_FIELD,
                limit: 5
            })
        );
        assert_eq!(
            handle(&GradeRequest::new("abc", "panjang"), &limited),
            Err(ApiError::AnswerTooLong {
                field: ANSWER_KEY_FIELD,
                limit: 5
            })
        );
        // Characters, not bytes.
        assert!(handle(&GradeRequest::new("éééé", "abc"), &limited).is_ok());

        let unlimited = EssaygradeConfig {
            max_answer_chars: 0,
            ..EssaygradeConfig::default()
        };
        let long = "kata ".repeat(10_000);
        assert!(handle(&GradeRequest::new(long.clone(), long), &unlimited).is_ok());
    }

    #[test]
    fn body_success_reply() {
        let reply = handle_body(
            r#"{"jawaban_siswa": "Saya tidak tahu jawabannya.", "kunci_jawaban": "Fotosintesis adalah proses biokimia."}"#,
            &config(),
        );
        assert_eq!(reply.status, 200);
        let response = graded(reply);
        assert_eq!(response.grade, 0);
        assert_eq!(
            response.feedback,
            vec![
                "Tingkat kemiripan (Jaccard Similarity): 0.00".to_string(),
                "Jawaban tidak memiliki kemiripan dengan kunci jawaban.".to_string(),
            ]
        );
    }

    #[test]
    fn body_identical_answers_get_full_marks() {
        let reply = handle_body(
            r#"{"jawaban_siswa": "Air dan cahaya.", "kunci_jawaban": "Air dan cahaya.", "id_soal": 7}"#,
            &config(),
        );
        let response = graded(reply);
        assert_eq!(response.grade, 100);
        assert_eq!(response.question_id, "7");
    }

    #[test]
    fn body_malformed_json() {
        assert_eq!(rejected(handle_body("not json", &config())), "Request body must be JSON");
        assert_eq!(rejected(handle_body("", &config())), "Request body must be JSON");
        assert_eq!(rejected(handle_body("[1, 2]", &config())), "Request body must be JSON");
        assert_eq!(rejected(handle_body("null", &config())), "Request body must be JSON");
    }

    #[test]
    fn body_missing_fields() {
        let message = "Missing 'jawaban_siswa' or 'kunci_jawaban' in request";
        assert_eq!(rejected(handle_body("{}", &config())), message);
        assert_eq!(
            rejected(handle_body(r#"{"jawaban_siswa": "x", "kunci_jawaban": null}"#, &config())),
            message
        );
        assert_eq!(
            rejected(handle_body(r#"{"jawaban_siswa": 5, "kunci_jawaban": "x"}"#, &config())),
            message
        );
    }

    #[test]
    fn body_invalid_question_id() {
        let reply = handle_body(
            r#"{"jawaban_siswa": "a", "kunci_jawaban": "b", "id_soal": ["x"]}"#,
            &config(),
        );
        assert_eq!(rejected(reply), "'id_soal' must be a string or a number");
    }
}
