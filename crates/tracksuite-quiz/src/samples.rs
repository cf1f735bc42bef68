//! Built-in sample quizzes, substituted when the store has no usable
//! `quizzes` entry.

use crate::model::{Question, Quiz};

fn question(
    id: &str,
    text: &str,
    options: &[&str],
    correct: &str,
    explanation: &str,
) -> Question {
    Question {
        id: id.into(),
        question_text: text.into(),
        options: options.iter().map(|o| (*o).to_string()).collect(),
        correct_answer: correct.into(),
        explanation: Some(explanation.into()),
    }
}

/// Two sample quizzes: one timed general-knowledge quiz and one untimed
/// science quiz, three questions each.
pub fn sample_quizzes() -> Vec<Quiz> {
    vec![
        Quiz {
            id: "sample-general".into(),
            title: "General Knowledge Essentials".into(),
            description: "A quick warm-up across geography, art, and numbers.".into(),
            questions: vec![
                question(
                    "gk-1",
                    "What is the capital of Australia?",
                    &["Sydney", "Melbourne", "Canberra", "Perth"],
                    "Canberra",
                    "Canberra was purpose-built as the capital in 1913 as a compromise between Sydney and Melbourne.",
                ),
                question(
                    "gk-2",
                    "Who painted the Mona Lisa?",
                    &["Michelangelo", "Leonardo da Vinci", "Raphael", "Donatello"],
                    "Leonardo da Vinci",
                    "Leonardo painted it in the early 1500s; it hangs in the Louvre.",
                ),
                question(
                    "gk-3",
                    "How many continents are there?",
                    &["Five", "Six", "Seven", "Eight"],
                    "Seven",
                    "Africa, Antarctica, Asia, Europe, North America, Oceania, and South America.",
                ),
            ],
            time_limit: Some(5),
        },
        Quiz {
            id: "sample-science".into(),
            title: "Science Basics".into(),
            description: "Fundamental science facts, no timer.".into(),
            questions: vec![
                question(
                    "sci-1",
                    "What is the chemical symbol for water?",
                    &["O2", "H2O", "CO2", "NaCl"],
                    "H2O",
                    "Two hydrogen atoms bonded to one oxygen atom.",
                ),
                question(
                    "sci-2",
                    "Which planet is closest to the Sun?",
                    &["Venus", "Earth", "Mercury", "Mars"],
                    "Mercury",
                    "Mercury orbits at about 58 million kilometres from the Sun.",
                ),
                question(
                    "sci-3",
                    "What force keeps the planets in orbit?",
                    &["Magnetism", "Friction", "Gravity", "Inertia"],
                    "Gravity",
                    "Gravity pulls each planet toward the Sun, curving its path into an orbit.",
                ),
            ],
            time_limit: None,
        },
    ]
}
