//! The `quizdeck list` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use tracksuite_quiz::QuizLibrary;

pub fn execute(data_dir: Option<PathBuf>) -> Result<()> {
    let store = crate::open_store(data_dir);
    let library = QuizLibrary::load(store);

    let mut table = Table::new();
    table.set_header(vec!["Id", "Title", "Questions", "Time limit"]);

    for quiz in library.quizzes() {
        let limit = match quiz.time_limit {
            Some(mins) => format!("{mins} min"),
            None => "untimed".to_string(),
        };
        table.add_row(vec![
            Cell::new(&quiz.id),
            Cell::new(&quiz.title),
            Cell::new(quiz.questions.len()),
            Cell::new(limit),
        ]);
    }

    println!("{table}");
    println!("{} quizzes", library.quizzes().len());
    Ok(())
}
