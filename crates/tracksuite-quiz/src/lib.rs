//! tracksuite-quiz — quiz domain: authoring, sessions, scoring, timing.
//!
//! The quiz-taking control flow is an explicit state machine
//! ([`session::QuizSession`]) driven by [`session::SessionEvent`]s,
//! independent of any rendering layer. Scoring and the countdown are
//! pure and separately testable.

pub mod author;
pub mod library;
pub mod model;
pub mod samples;
pub mod scoring;
pub mod session;
pub mod timer;

pub use author::{parse_quiz_file, parse_quiz_str, validate_quiz, AuthorError};
pub use library::{LibraryError, QuizLibrary, QUIZZES_KEY};
pub use model::{Question, Quiz, UserAnswer};
pub use scoring::{review, score, QuestionOutcome, ScoreSummary};
pub use session::{QuizSession, SessionEvent, View};
pub use timer::{Countdown, CountdownGuard, TimerSignal};
