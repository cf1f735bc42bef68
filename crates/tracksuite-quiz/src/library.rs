//! The quiz collection controller.
//!
//! Owns the `Vec<Quiz>` loaded from the store (samples as fallback) and
//! persists the whole namespace on every mutation. Quizzes are append-
//! only; edit-in-place is not part of the design.

use thiserror::Error;

use tracksuite_store::{JsonStore, StoreError};

use crate::author::{validate_quiz, AuthorError};
use crate::model::Quiz;
use crate::samples;

/// Store namespace for the quiz collection.
pub const QUIZZES_KEY: &str = "quizzes";

/// Errors surfaced by library operations.
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error(transparent)]
    Invalid(#[from] AuthorError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Owns the quiz collection and its persistence.
#[derive(Debug)]
pub struct QuizLibrary {
    store: JsonStore,
    quizzes: Vec<Quiz>,
}

impl QuizLibrary {
    /// Load the collection, falling back to the built-in sample quizzes
    /// when the namespace is absent or malformed.
    pub fn load(store: JsonStore) -> Self {
        let quizzes = store.load_or_else(QUIZZES_KEY, samples::sample_quizzes);
        tracing::debug!(quizzes = quizzes.len(), "quiz library loaded");
        Self { store, quizzes }
    }

    pub fn quizzes(&self) -> &[Quiz] {
        &self.quizzes
    }

    pub fn find(&self, id: &str) -> Option<&Quiz> {
        self.quizzes.iter().find(|q| q.id == id)
    }

    /// Validate and append a quiz, persisting the whole collection.
    pub fn add(&mut self, quiz: Quiz) -> Result<(), LibraryError> {
        validate_quiz(&quiz)?;
        let mut next = self.quizzes.clone();
        next.push(quiz);
        self.store.save(QUIZZES_KEY, &next)?;
        self.quizzes = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Question;

    fn store() -> (tempfile::TempDir, JsonStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        (dir, store)
    }

    fn minimal_quiz(id: &str) -> Quiz {
        Quiz {
            id: id.into(),
            title: "Minimal".into(),
            description: String::new(),
            questions: vec![Question {
                id: "q1".into(),
                question_text: "Pick one".into(),
                options: vec!["a".into(), "b".into()],
                correct_answer: "a".into(),
                explanation: None,
            }],
            time_limit: None,
        }
    }

    #[test]
    fn empty_store_loads_two_samples() {
        let (_dir, store) = store();
        let library = QuizLibrary::load(store);
        assert_eq!(library.quizzes().len(), 2);
        assert!(library.find("sample-general").is_some());
    }

    #[test]
    fn add_persists_and_survives_reload() {
        let (_dir, store) = store();
        let mut library = QuizLibrary::load(store.clone());
        library.add(minimal_quiz("custom-1")).unwrap();

        let reloaded = QuizLibrary::load(store);
        assert_eq!(reloaded.quizzes().len(), 3);
        assert!(reloaded.find("custom-1").is_some());
    }

    #[test]
    fn invalid_quiz_is_rejected_and_not_persisted() {
        let (_dir, store) = store();
        let mut library = QuizLibrary::load(store.clone());
        let mut bad = minimal_quiz("bad");
        bad.questions.clear();
        assert!(matches!(
            library.add(bad),
            Err(LibraryError::Invalid(AuthorError::NoQuestions))
        ));
        assert_eq!(library.quizzes().len(), 2);
        assert!(store.get_raw(QUIZZES_KEY).unwrap().is_none());
    }
}
