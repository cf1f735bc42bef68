//! Quiz data model types.
//!
//! Wire field names are camelCase to stay compatible with the JSON the
//! applications have always kept under the `quizzes` namespace.

use serde::{Deserialize, Serialize};

/// A single multiple-choice question. Immutable once its quiz is
/// published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Unique identifier within the quiz.
    pub id: String,
    /// The question text shown to the taker.
    pub question_text: String,
    /// Ordered answer options. Duplicates are not forbidden.
    pub options: Vec<String>,
    /// The correct option string. Authoring guarantees it equals one of
    /// `options`; the data model itself does not enforce it.
    pub correct_answer: String,
    /// Optional explanation shown during review.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// A quiz: an ordered list of questions with an optional time limit.
/// Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    /// Unique identifier.
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Question order defines the taking sequence.
    pub questions: Vec<Question>,
    /// Time limit in minutes; `None` means untimed.
    #[serde(default)]
    pub time_limit: Option<u32>,
}

/// The option a taker selected for one question. At most one per
/// question per session; a later selection replaces the earlier one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAnswer {
    pub question_id: String,
    pub selected_answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_wire_format_uses_legacy_names() {
        let quiz = Quiz {
            id: "quiz-1".into(),
            title: "Sample".into(),
            description: String::new(),
            questions: vec![Question {
                id: "q1".into(),
                question_text: "2 + 2?".into(),
                options: vec!["3".into(), "4".into()],
                correct_answer: "4".into(),
                explanation: None,
            }],
            time_limit: Some(5),
        };
        let json = serde_json::to_value(&quiz).unwrap();
        assert_eq!(json["timeLimit"], 5);
        assert_eq!(json["questions"][0]["questionText"], "2 + 2?");
        assert_eq!(json["questions"][0]["correctAnswer"], "4");
    }

    #[test]
    fn untimed_quiz_roundtrips_null_limit() {
        let json = r#"{"id":"q","title":"T","description":"","questions":[],"timeLimit":null}"#;
        let quiz: Quiz = serde_json::from_str(json).unwrap();
        assert!(quiz.time_limit.is_none());
        let back = serde_json::to_value(&quiz).unwrap();
        assert!(back["timeLimit"].is_null());
    }
}
