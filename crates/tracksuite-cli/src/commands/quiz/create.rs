//! The `quizdeck create` command.

use std::path::PathBuf;

use anyhow::Result;

use tracksuite_quiz::{parse_quiz_file, QuizLibrary};

pub fn execute(data_dir: Option<PathBuf>, file: PathBuf) -> Result<()> {
    let store = crate::open_store(data_dir);
    let mut library = QuizLibrary::load(store);

    let quiz = parse_quiz_file(&file)?;
    let id = quiz.id.clone();
    let title = quiz.title.clone();
    let questions = quiz.questions.len();

    library.add(quiz)?;
    println!("Created quiz '{title}' ({questions} questions) with id {id}");
    Ok(())
}
