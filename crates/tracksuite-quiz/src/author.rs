//! TOML quiz authoring.
//!
//! Quizzes are authored as TOML files (a `[quiz]` header plus
//! `[[questions]]` tables) and validated hard before they enter the
//! collection: an invalid file is rejected outright, never published
//! with warnings.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

use crate::model::{Question, Quiz};

/// A rejected quiz submission. Indices are zero-based question positions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthorError {
    #[error("quiz title must not be empty")]
    EmptyTitle,

    #[error("a quiz needs at least one question")]
    NoQuestions,

    #[error("question {index} is missing its text")]
    EmptyQuestionText { index: usize },

    #[error("question {index} needs at least two options")]
    TooFewOptions { index: usize },

    #[error("question {index} has an empty option")]
    EmptyOption { index: usize },

    #[error("question {index} is missing a correct answer")]
    MissingCorrectAnswer { index: usize },

    #[error("question {index}: correct answer does not match any option")]
    CorrectAnswerNotAnOption { index: usize },

    #[error("duplicate question id: {0}")]
    DuplicateQuestionId(String),

    #[error("time limit must be a positive number of minutes")]
    ZeroTimeLimit,
}

/// Intermediate TOML structure for quiz files.
#[derive(Debug, Deserialize)]
struct TomlQuizFile {
    quiz: TomlQuizHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlQuizHeader {
    title: String,
    #[serde(default)]
    description: String,
    /// Minutes; omit for an untimed quiz.
    #[serde(default)]
    time_limit: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    #[serde(default)]
    id: Option<String>,
    text: String,
    #[serde(default)]
    options: Vec<String>,
    #[serde(default)]
    correct: String,
    #[serde(default)]
    explanation: Option<String>,
}

/// Parse and validate a quiz from a TOML file.
pub fn parse_quiz_file(path: &Path) -> Result<Quiz> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read quiz file: {}", path.display()))?;
    parse_quiz_str(&content, path)
}

/// Parse and validate a quiz from a TOML string (useful for testing).
pub fn parse_quiz_str(content: &str, source_path: &Path) -> Result<Quiz> {
    let parsed: TomlQuizFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| Question {
            id: q.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            question_text: q.text,
            options: q.options,
            correct_answer: q.correct,
            explanation: q.explanation.filter(|e| !e.trim().is_empty()),
        })
        .collect();

    let quiz = Quiz {
        id: Uuid::new_v4().to_string(),
        title: parsed.quiz.title,
        description: parsed.quiz.description,
        questions,
        time_limit: parsed.quiz.time_limit,
    };

    validate_quiz(&quiz)?;
    Ok(quiz)
}

/// Validate a quiz before publication.
pub fn validate_quiz(quiz: &Quiz) -> Result<(), AuthorError> {
    if quiz.title.trim().is_empty() {
        return Err(AuthorError::EmptyTitle);
    }
    if quiz.questions.is_empty() {
        return Err(AuthorError::NoQuestions);
    }
    if quiz.time_limit == Some(0) {
        return Err(AuthorError::ZeroTimeLimit);
    }

    let mut seen_ids = std::collections::HashSet::new();
    for (index, question) in quiz.questions.iter().enumerate() {
        if !seen_ids.insert(question.id.as_str()) {
            return Err(AuthorError::DuplicateQuestionId(question.id.clone()));
        }
        if question.question_text.trim().is_empty() {
            return Err(AuthorError::EmptyQuestionText { index });
        }
        if question.options.len() < 2 {
            return Err(AuthorError::TooFewOptions { index });
        }
        if question.options.iter().any(|o| o.trim().is_empty()) {
            return Err(AuthorError::EmptyOption { index });
        }
        if question.correct_answer.trim().is_empty() {
            return Err(AuthorError::MissingCorrectAnswer { index });
        }
        if !question.options.contains(&question.correct_answer) {
            return Err(AuthorError::CorrectAnswerNotAnOption { index });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const VALID_TOML: &str = r#"
[quiz]
title = "Capitals of Europe"
description = "Test your geography"
time_limit = 5

[[questions]]
text = "What is the capital of France?"
options = ["Lyon", "Paris", "Marseille", "Nice"]
correct = "Paris"
explanation = "Paris has been the capital since 987."

[[questions]]
text = "What is the capital of Spain?"
options = ["Madrid", "Barcelona", "Seville", "Valencia"]
correct = "Madrid"
"#;

    #[test]
    fn parse_valid_quiz() {
        let quiz = parse_quiz_str(VALID_TOML, &PathBuf::from("quiz.toml")).unwrap();
        assert_eq!(quiz.title, "Capitals of Europe");
        assert_eq!(quiz.time_limit, Some(5));
        assert_eq!(quiz.questions.len(), 2);
        assert_eq!(quiz.questions[0].correct_answer, "Paris");
        assert!(quiz.questions[0].explanation.is_some());
        assert!(quiz.questions[1].explanation.is_none());
        // Generated ids are unique.
        assert_ne!(quiz.questions[0].id, quiz.questions[1].id);
    }

    #[test]
    fn untimed_quiz_parses_without_limit() {
        let toml = r#"
[quiz]
title = "Untimed"

[[questions]]
text = "Pick one"
options = ["a", "b"]
correct = "a"
"#;
        let quiz = parse_quiz_str(toml, &PathBuf::from("quiz.toml")).unwrap();
        assert!(quiz.time_limit.is_none());
    }

    #[test]
    fn no_questions_rejected() {
        let toml = r#"
[quiz]
title = "Empty"
"#;
        let err = parse_quiz_str(toml, &PathBuf::from("quiz.toml")).unwrap_err();
        assert!(err.to_string().contains("at least one question"));
    }

    #[test]
    fn correct_answer_must_be_an_option() {
        let toml = r#"
[quiz]
title = "Broken"

[[questions]]
text = "Pick one"
options = ["a", "b"]
correct = "c"
"#;
        let err = parse_quiz_str(toml, &PathBuf::from("quiz.toml")).unwrap_err();
        assert!(err.to_string().contains("does not match any option"));
    }

    #[test]
    fn empty_option_rejected() {
        let toml = r#"
[quiz]
title = "Broken"

[[questions]]
text = "Pick one"
options = ["a", "  "]
correct = "a"
"#;
        assert!(parse_quiz_str(toml, &PathBuf::from("quiz.toml")).is_err());
    }

    #[test]
    fn zero_time_limit_rejected() {
        let toml = r#"
[quiz]
title = "Broken"
time_limit = 0

[[questions]]
text = "Pick one"
options = ["a", "b"]
correct = "a"
"#;
        let err = parse_quiz_str(toml, &PathBuf::from("quiz.toml")).unwrap_err();
        assert!(err.to_string().contains("time limit"));
    }

    #[test]
    fn duplicate_explicit_ids_rejected() {
        let toml = r#"
[quiz]
title = "Broken"

[[questions]]
id = "same"
text = "First"
options = ["a", "b"]
correct = "a"

[[questions]]
id = "same"
text = "Second"
options = ["a", "b"]
correct = "b"
"#;
        let err = parse_quiz_str(toml, &PathBuf::from("quiz.toml")).unwrap_err();
        assert!(err.to_string().contains("duplicate question id"));
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(parse_quiz_str("not [valid toml }{", &PathBuf::from("bad.toml")).is_err());
    }

    #[test]
    fn parse_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz.toml");
        std::fs::write(&path, VALID_TOML).unwrap();
        let quiz = parse_quiz_file(&path).unwrap();
        assert_eq!(quiz.questions.len(), 2);
    }
}
