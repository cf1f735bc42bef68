//! fitdeck — personal fitness activity tracker.

use std::path::PathBuf;
use std::process;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use tracksuite_cli::commands::fitness as commands;
use tracksuite_fitness::{GoalKind, GoalPeriod};

#[derive(Parser)]
#[command(name = "fitdeck", version, about = "Log workouts, set goals, view your dashboard")]
struct Cli {
    /// Data directory (defaults to $TRACKSUITE_DATA, then ./.tracksuite)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log a new activity
    Log {
        /// Activity type, e.g. "Running"
        #[arg(long)]
        kind: String,

        /// Duration in minutes
        #[arg(long)]
        duration: u32,

        /// Calories burned
        #[arg(long)]
        calories: u32,

        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Free-text notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Edit an existing activity (unspecified fields keep their value)
    Edit {
        id: String,

        #[arg(long)]
        kind: Option<String>,

        #[arg(long)]
        duration: Option<u32>,

        #[arg(long)]
        calories: Option<u32>,

        #[arg(long)]
        date: Option<NaiveDate>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete an activity by id
    Delete { id: String },

    /// List activities, newest first
    List {
        /// Restrict to a window: day, week, or month
        #[arg(long)]
        period: Option<GoalPeriod>,

        /// Restrict to one activity type
        #[arg(long)]
        kind: Option<String>,
    },

    /// Manage fitness goals
    Goal {
        #[command(subcommand)]
        action: GoalAction,
    },

    /// Totals, weekly chart, and goal progress
    Dashboard,

    /// Export the activity collection as pretty-printed JSON
    Export {
        /// Directory to write the export file into
        #[arg(long, default_value = ".")]
        output: PathBuf,
    },
}

#[derive(Subcommand)]
enum GoalAction {
    /// Set a new goal
    Add {
        /// What to measure: calories or duration
        #[arg(long)]
        kind: GoalKind,

        /// Target value (calories or minutes)
        #[arg(long)]
        target: u32,

        /// Evaluation window: daily, weekly, or monthly
        #[arg(long)]
        period: GoalPeriod,
    },

    /// List goals with live progress
    List,

    /// Delete a goal by id
    Delete { id: String },
}

fn main() {
    tracksuite_cli::init_tracing();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Log {
            kind,
            duration,
            calories,
            date,
            notes,
        } => commands::log::execute(cli.data_dir, kind, duration, calories, date, notes),
        Commands::Edit {
            id,
            kind,
            duration,
            calories,
            date,
            notes,
        } => commands::edit::execute(cli.data_dir, id, kind, duration, calories, date, notes),
        Commands::Delete { id } => commands::delete::execute(cli.data_dir, id),
        Commands::List { period, kind } => commands::list::execute(cli.data_dir, period, kind),
        Commands::Goal { action } => match action {
            GoalAction::Add {
                kind,
                target,
                period,
            } => commands::goal::add(cli.data_dir, kind, target, period),
            GoalAction::List => commands::goal::list(cli.data_dir),
            GoalAction::Delete { id } => commands::goal::delete(cli.data_dir, id),
        },
        Commands::Dashboard => commands::dashboard::execute(cli.data_dir),
        Commands::Export { output } => commands::export::execute(cli.data_dir, output),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
