//! The scoring engine.
//!
//! A single linear scan over the quiz's ordered questions: a question is
//! correct iff an answer exists for its id and the selected option string
//! equals the correct answer exactly (case-sensitive).

use serde::{Deserialize, Serialize};

use crate::model::{Question, Quiz, UserAnswer};

/// The outcome of scoring one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub correct: u32,
    pub total: u32,
    /// `round(100 * correct / total)`; 0 for a zero-question quiz.
    pub percent: u32,
}

impl ScoreSummary {
    /// The grade message band for this score.
    pub fn verdict(&self) -> &'static str {
        match self.percent {
            90..=100 => "Excellent work! You've mastered this topic!",
            70..=89 => "Good job! You have a solid understanding of this material.",
            50..=69 => "You passed, but there's room for improvement.",
            _ => "You might need to review this topic again.",
        }
    }
}

/// Score a submission against a quiz.
///
/// A zero-question quiz scores 0 by policy; authoring already rejects
/// such quizzes, this guard only keeps the division total.
pub fn score(quiz: &Quiz, answers: &[UserAnswer]) -> ScoreSummary {
    let total = quiz.questions.len() as u32;
    let correct = quiz
        .questions
        .iter()
        .filter(|q| {
            answers
                .iter()
                .find(|a| a.question_id == q.id)
                .is_some_and(|a| a.selected_answer == q.correct_answer)
        })
        .count() as u32;

    let percent = if total == 0 {
        0
    } else {
        (100.0 * f64::from(correct) / f64::from(total)).round() as u32
    };

    ScoreSummary {
        correct,
        total,
        percent,
    }
}

/// Per-question breakdown for the review view.
#[derive(Debug, Clone)]
pub struct QuestionOutcome<'a> {
    pub question: &'a Question,
    /// The option the taker selected, if any.
    pub selected: Option<&'a str>,
    pub is_correct: bool,
}

/// Build the question-by-question breakdown, in quiz order.
pub fn review<'a>(quiz: &'a Quiz, answers: &'a [UserAnswer]) -> Vec<QuestionOutcome<'a>> {
    quiz.questions
        .iter()
        .map(|q| {
            let selected = answers
                .iter()
                .find(|a| a.question_id == q.id)
                .map(|a| a.selected_answer.as_str());
            QuestionOutcome {
                question: q,
                selected,
                is_correct: selected == Some(q.correct_answer.as_str()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: &str, correct: &str) -> Question {
        Question {
            id: id.into(),
            question_text: format!("Question {id}"),
            options: vec!["a".into(), "b".into(), correct.into()],
            correct_answer: correct.into(),
            explanation: None,
        }
    }

    fn quiz(questions: Vec<Question>) -> Quiz {
        Quiz {
            id: "quiz".into(),
            title: "Test".into(),
            description: String::new(),
            questions,
            time_limit: None,
        }
    }

    fn answer(question_id: &str, selected: &str) -> UserAnswer {
        UserAnswer {
            question_id: question_id.into(),
            selected_answer: selected.into(),
        }
    }

    #[test]
    fn two_of_three_rounds_to_67() {
        let q = quiz(vec![question("1", "x"), question("2", "y"), question("3", "z")]);
        let answers = vec![answer("1", "x"), answer("2", "y"), answer("3", "a")];
        let summary = score(&q, &answers);
        assert_eq!(summary.correct, 2);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.percent, 67);
    }

    #[test]
    fn unanswered_questions_count_as_incorrect() {
        let q = quiz(vec![question("1", "x"), question("2", "y")]);
        let summary = score(&q, &[answer("1", "x")]);
        assert_eq!(summary.correct, 1);
        assert_eq!(summary.percent, 50);
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let q = quiz(vec![question("1", "Paris")]);
        let summary = score(&q, &[answer("1", "paris")]);
        assert_eq!(summary.correct, 0);
    }

    #[test]
    fn answers_for_unknown_questions_are_ignored() {
        let q = quiz(vec![question("1", "x")]);
        let summary = score(&q, &[answer("ghost", "x"), answer("1", "x")]);
        assert_eq!(summary.correct, 1);
        assert_eq!(summary.percent, 100);
    }

    #[test]
    fn zero_question_quiz_scores_zero() {
        let q = quiz(vec![]);
        let summary = score(&q, &[]);
        assert_eq!(summary.percent, 0);
        assert_eq!(summary.total, 0);
    }

    #[test]
    fn scoring_is_idempotent() {
        let q = quiz(vec![question("1", "x"), question("2", "y")]);
        let answers = vec![answer("1", "x")];
        assert_eq!(score(&q, &answers), score(&q, &answers));
    }

    #[test]
    fn verdict_bands() {
        let bands = [
            (95, "Excellent work! You've mastered this topic!"),
            (70, "Good job! You have a solid understanding of this material."),
            (50, "You passed, but there's room for improvement."),
            (49, "You might need to review this topic again."),
        ];
        for (percent, expected) in bands {
            let summary = ScoreSummary {
                correct: 0,
                total: 0,
                percent,
            };
            assert_eq!(summary.verdict(), expected);
        }
    }

    #[test]
    fn review_breakdown_in_quiz_order() {
        let q = quiz(vec![question("1", "x"), question("2", "y")]);
        let answers = vec![answer("2", "b")];
        let breakdown = review(&q, &answers);
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].selected, None);
        assert!(!breakdown[0].is_correct);
        assert_eq!(breakdown[1].selected, Some("b"));
        assert!(!breakdown[1].is_correct);
    }
}
