//! The quiz session state machine.
//!
//! One session drives the whole quiz-taking flow: which view is shown,
//! which quiz and question are active, the accumulated answers, and the
//! submitted flag. Transitions are applied synchronously through
//! [`QuizSession::apply`]; an event that is not valid in the current
//! view is a no-op, never an error. Rendering is entirely the caller's
//! concern.

use crate::library::QuizLibrary;
use crate::model::{Question, Quiz, UserAnswer};
use crate::scoring::{score, ScoreSummary};

/// The views the application can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    /// Actively taking a quiz; answers are mutable until submission.
    Taking,
    Results,
    /// Question-by-question breakdown; answers are locked.
    Review,
    Create,
}

/// Events that drive the session.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// Start taking the quiz with this id. Unknown ids stay on the
    /// dashboard with no error surfaced.
    Start(String),
    /// Select an option for the current question (insert or replace).
    Select(String),
    Next,
    Previous,
    Submit,
    /// Fired by the countdown; identical effect to an explicit submit.
    TimeUp,
    Review,
    BackToResults,
    /// Abandon the active quiz and return to the dashboard.
    ReturnHome,
    BeginCreate,
    /// A finished authoring flow: append the quiz to the collection.
    Created(Quiz),
    CancelCreate,
}

/// State carried while a quiz is active (taking, results, or review).
#[derive(Debug)]
struct ActiveQuiz {
    quiz: Quiz,
    question_index: usize,
    answers: Vec<UserAnswer>,
    submitted: bool,
    score: Option<ScoreSummary>,
}

impl ActiveQuiz {
    fn new(quiz: Quiz) -> Self {
        Self {
            quiz,
            question_index: 0,
            answers: Vec::new(),
            submitted: false,
            score: None,
        }
    }
}

/// The single active session of the quiz application.
#[derive(Debug)]
pub struct QuizSession {
    library: QuizLibrary,
    view: View,
    active: Option<ActiveQuiz>,
}

impl QuizSession {
    pub fn new(library: QuizLibrary) -> Self {
        Self {
            library,
            view: View::Dashboard,
            active: None,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn library(&self) -> &QuizLibrary {
        &self.library
    }

    /// The quiz being taken, if a session is active.
    pub fn active_quiz(&self) -> Option<&Quiz> {
        self.active.as_ref().map(|a| &a.quiz)
    }

    pub fn current_question(&self) -> Option<&Question> {
        let active = self.active.as_ref()?;
        active.quiz.questions.get(active.question_index)
    }

    /// The taker's selection for the current question, if any.
    pub fn selected_answer(&self) -> Option<&str> {
        let active = self.active.as_ref()?;
        let question = active.quiz.questions.get(active.question_index)?;
        active
            .answers
            .iter()
            .find(|a| a.question_id == question.id)
            .map(|a| a.selected_answer.as_str())
    }

    pub fn answers(&self) -> &[UserAnswer] {
        self.active.as_ref().map_or(&[], |a| a.answers.as_slice())
    }

    pub fn is_submitted(&self) -> bool {
        self.active.as_ref().is_some_and(|a| a.submitted)
    }

    /// Zero-based question index and total question count.
    pub fn progress(&self) -> Option<(usize, usize)> {
        let active = self.active.as_ref()?;
        Some((active.question_index, active.quiz.questions.len()))
    }

    pub fn score(&self) -> Option<ScoreSummary> {
        self.active.as_ref().and_then(|a| a.score)
    }

    /// Apply one event to the session. Events that are invalid in the
    /// current view, out of bounds, or arrive after submission are
    /// silently ignored.
    pub fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Start(quiz_id) => {
                if self.view != View::Dashboard {
                    return;
                }
                match self.library.find(&quiz_id) {
                    Some(quiz) => {
                        self.active = Some(ActiveQuiz::new(quiz.clone()));
                        self.view = View::Taking;
                    }
                    None => {
                        tracing::debug!(quiz_id, "start ignored: no such quiz");
                    }
                }
            }

            SessionEvent::Select(option) => {
                if self.view != View::Taking {
                    return;
                }
                let Some(active) = self.active.as_mut() else {
                    return;
                };
                if active.submitted {
                    return;
                }
                let Some(question) = active.quiz.questions.get(active.question_index) else {
                    return;
                };
                let question_id = question.id.clone();
                match active
                    .answers
                    .iter_mut()
                    .find(|a| a.question_id == question_id)
                {
                    Some(existing) => existing.selected_answer = option,
                    None => active.answers.push(UserAnswer {
                        question_id,
                        selected_answer: option,
                    }),
                }
            }

            SessionEvent::Next => {
                if !matches!(self.view, View::Taking | View::Review) {
                    return;
                }
                if let Some(active) = self.active.as_mut() {
                    let last = active.quiz.questions.len().saturating_sub(1);
                    if active.question_index < last {
                        active.question_index += 1;
                    }
                }
            }

            SessionEvent::Previous => {
                if !matches!(self.view, View::Taking | View::Review) {
                    return;
                }
                if let Some(active) = self.active.as_mut() {
                    active.question_index = active.question_index.saturating_sub(1);
                }
            }

            SessionEvent::Submit | SessionEvent::TimeUp => {
                if self.view != View::Taking {
                    return;
                }
                if let Some(active) = self.active.as_mut() {
                    active.submitted = true;
                    active.score = Some(score(&active.quiz, &active.answers));
                    self.view = View::Results;
                }
            }

            SessionEvent::Review => {
                // Keeps the current question index for the breakdown.
                if self.view == View::Results {
                    self.view = View::Review;
                }
            }

            SessionEvent::BackToResults => {
                if self.view == View::Review {
                    self.view = View::Results;
                }
            }

            SessionEvent::ReturnHome => {
                if matches!(self.view, View::Taking | View::Results | View::Review) {
                    self.active = None;
                    self.view = View::Dashboard;
                }
            }

            SessionEvent::BeginCreate => {
                if self.view == View::Dashboard {
                    self.view = View::Create;
                }
            }

            SessionEvent::Created(quiz) => {
                if self.view != View::Create {
                    return;
                }
                match self.library.add(quiz) {
                    Ok(()) => self.view = View::Dashboard,
                    Err(e) => {
                        // Submission aborted, authoring state unchanged.
                        tracing::warn!(error = %e, "quiz rejected");
                    }
                }
            }

            SessionEvent::CancelCreate => {
                if self.view == View::Create {
                    self.view = View::Dashboard;
                }
            }
        }
    }
}
