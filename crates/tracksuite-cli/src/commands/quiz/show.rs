//! The `quizdeck show` command: an authoring aid, so correct answers
//! are marked.

use std::path::PathBuf;

use anyhow::{Context, Result};

use tracksuite_quiz::QuizLibrary;

pub fn execute(data_dir: Option<PathBuf>, id: String) -> Result<()> {
    let store = crate::open_store(data_dir);
    let library = QuizLibrary::load(store);

    let quiz = library
        .find(&id)
        .with_context(|| format!("no quiz with id '{id}'"))?;

    println!("{} — {}", quiz.title, quiz.description);
    match quiz.time_limit {
        Some(mins) => println!("Time limit: {mins} minutes\n"),
        None => println!("Untimed\n"),
    }

    for (number, question) in quiz.questions.iter().enumerate() {
        println!("{}. {}", number + 1, question.question_text);
        for option in &question.options {
            let marker = if *option == question.correct_answer {
                "*"
            } else {
                " "
            };
            println!("   {marker} {option}");
        }
        if let Some(explanation) = &question.explanation {
            println!("   ({explanation})");
        }
        println!();
    }

    Ok(())
}
