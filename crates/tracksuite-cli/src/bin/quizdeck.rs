//! quizdeck — author and take multiple-choice quizzes.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use tracksuite_cli::commands::quiz as commands;

#[derive(Parser)]
#[command(name = "quizdeck", version, about = "Author quizzes, take them, review your answers")]
struct Cli {
    /// Data directory (defaults to $TRACKSUITE_DATA, then ./.tracksuite)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the quiz collection
    List,

    /// Show one quiz, including its questions
    Show { id: String },

    /// Create a quiz from a TOML file
    Create {
        /// Path to the quiz TOML file
        #[arg(long)]
        file: PathBuf,
    },

    /// Take a quiz interactively
    Take { id: String },
}

#[tokio::main]
async fn main() {
    tracksuite_cli::init_tracing();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List => commands::list::execute(cli.data_dir),
        Commands::Show { id } => commands::show::execute(cli.data_dir, id),
        Commands::Create { file } => commands::create::execute(cli.data_dir, file),
        Commands::Take { id } => commands::take::execute(cli.data_dir, id).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
