//! The `quizdeck take` command: the interactive quiz session.
//!
//! Drives the session state machine from stdin input, with the
//! countdown running as a separate task when the quiz is timed. The
//! timer guard is dropped at every exit from the taking view so a late
//! tick can never touch a finished session.

use std::path::PathBuf;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use tracksuite_quiz::{
    review, timer, QuizLibrary, QuizSession, SessionEvent, TimerSignal, View,
};

pub async fn execute(data_dir: Option<PathBuf>, id: String) -> Result<()> {
    let store = crate::open_store(data_dir);
    let library = QuizLibrary::load(store);
    anyhow::ensure!(
        library.find(&id).is_some(),
        "no quiz with id '{id}' (see `quizdeck list`)"
    );

    let mut session = QuizSession::new(library);
    session.apply(SessionEvent::Start(id));

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut timer_guard = None;
    let mut _tx_keepalive = None;
    match session.active_quiz().and_then(|q| q.time_limit) {
        Some(mins) => {
            println!("Time limit: {mins} minutes. Good luck!");
            timer_guard = Some(timer::spawn(mins * 60, tx));
        }
        // Keep the channel open so recv() stays pending on untimed
        // quizzes instead of closing immediately.
        None => _tx_keepalive = Some(tx),
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut warned = false;

    print_question(&session);

    while session.view() == View::Taking {
        tokio::select! {
            signal = rx.recv() => match signal {
                Some(TimerSignal::Expired) => {
                    println!("\nTime is up!");
                    session.apply(SessionEvent::TimeUp);
                }
                Some(TimerSignal::Warning) if !warned => {
                    warned = true;
                    println!("(time is running low)");
                }
                Some(_) | None => {}
            },
            line = lines.next_line() => match line? {
                Some(input) => handle_input(&mut session, input.trim()),
                None => {
                    // stdin closed without a submit: abandon the session.
                    session.apply(SessionEvent::ReturnHome);
                }
            },
        }
    }
    drop(timer_guard.take());

    if session.view() != View::Results {
        println!("Quiz abandoned.");
        return Ok(());
    }

    print_results(&session);

    println!("\nType r to review your answers, anything else to finish.");
    if let Some(input) = lines.next_line().await? {
        if input.trim().eq_ignore_ascii_case("r") {
            session.apply(SessionEvent::Review);
            print_review(&session);
            session.apply(SessionEvent::BackToResults);
        }
    }
    session.apply(SessionEvent::ReturnHome);
    Ok(())
}

fn handle_input(session: &mut QuizSession, input: &str) {
    match input {
        "" => {}
        "n" | "next" => {
            session.apply(SessionEvent::Next);
            print_question(session);
        }
        "p" | "prev" | "previous" => {
            session.apply(SessionEvent::Previous);
            print_question(session);
        }
        "s" | "submit" => session.apply(SessionEvent::Submit),
        "q" | "quit" => session.apply(SessionEvent::ReturnHome),
        other => match other.parse::<usize>() {
            Ok(number) if number >= 1 => {
                let option = session
                    .current_question()
                    .and_then(|q| q.options.get(number - 1))
                    .cloned();
                match option {
                    Some(option) => {
                        println!("Selected: {option}");
                        session.apply(SessionEvent::Select(option));
                    }
                    None => println!("No option {number} on this question."),
                }
            }
            _ => println!("Commands: 1..9 select, n(ext), p(revious), s(ubmit), q(uit)"),
        },
    }
}

fn print_question(session: &QuizSession) {
    let Some(question) = session.current_question() else {
        return;
    };
    let Some((index, total)) = session.progress() else {
        return;
    };
    println!("\nQuestion {} of {}: {}", index + 1, total, question.question_text);
    for (number, option) in question.options.iter().enumerate() {
        let marker = if session.selected_answer() == Some(option.as_str()) {
            ">"
        } else {
            " "
        };
        println!("  {marker} {}) {option}", number + 1);
    }
}

fn print_results(session: &QuizSession) {
    let Some(summary) = session.score() else {
        return;
    };
    println!(
        "\nScore: {}% ({} of {} correct)",
        summary.percent, summary.correct, summary.total
    );
    println!("{}", summary.verdict());
    println!(
        "Correct {} | Incorrect {} | Total {}",
        summary.correct,
        summary.total - summary.correct,
        summary.total
    );
}

fn print_review(session: &QuizSession) {
    let Some(quiz) = session.active_quiz() else {
        return;
    };
    for (number, outcome) in review(quiz, session.answers()).iter().enumerate() {
        let mark = if outcome.is_correct { "correct" } else { "incorrect" };
        println!("\n{}. {} [{mark}]", number + 1, outcome.question.question_text);
        println!("   your answer:    {}", outcome.selected.unwrap_or("(no answer)"));
        println!("   correct answer: {}", outcome.question.correct_answer);
        if let Some(explanation) = &outcome.question.explanation {
            println!("   {explanation}");
        }
    }
}
