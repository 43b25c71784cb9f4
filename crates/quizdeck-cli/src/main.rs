//! quizdeck CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

use commands::GlobalOpts;

#[derive(Parser)]
#[command(name = "quizdeck", version, about = "Author and host timed quizzes")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Data file holding questions and host state
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter quizdeck.toml
    Init,

    /// List questions
    List {
        /// Print the raw JSON array instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Add a question (host only)
    Add {
        #[arg(long, short)]
        question: String,

        #[arg(long, short)]
        answer: String,

        #[arg(long, short)]
        points: String,
    },

    /// Edit a question in place (host only)
    Edit {
        /// Question id, as shown by `list`
        id: String,

        #[arg(long, short)]
        question: Option<String>,

        #[arg(long, short)]
        answer: Option<String>,

        #[arg(long, short)]
        points: Option<String>,
    },

    /// Remove a question (host only)
    Remove {
        /// Question id, as shown by `list`
        id: String,
    },

    /// Move a question to another position (host only)
    Move {
        /// Current 1-based position
        from: usize,

        /// New 1-based position
        to: usize,
    },

    /// Shuffle the question order (host only)
    Shuffle,

    /// Delete every question (host only)
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Replace all questions from a JSON file (host only)
    Import {
        /// JSON file holding an array of questions
        file: PathBuf,
    },

    /// Export questions as JSON
    Export {
        /// Output file, or `-` for stdout
        #[arg(long, short, default_value = "quiz_questions.json")]
        output: PathBuf,
    },

    /// Write a printable question report
    Report {
        /// Output file (defaults to quiz_questions.<ext>)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Output format: html, text
        #[arg(long, default_value = "html")]
        format: String,
    },

    /// Enter or leave host mode
    Host {
        #[command(subcommand)]
        action: HostAction,
    },

    /// Show the effective settings
    Settings,

    /// Play the quiz interactively
    Play {
        /// Reveal answers automatically this many seconds after the think time
        #[arg(long)]
        auto_reveal: Option<u32>,

        /// Advance this many seconds after the answer is shown
        #[arg(long)]
        auto_next: Option<u32>,

        /// Length of the think time before the reveal countdown
        #[arg(long)]
        think_time: Option<u32>,
    },
}

#[derive(Subcommand)]
enum HostAction {
    /// Enter host mode with the shared code
    Unlock { code: String },
    /// Leave host mode
    Lock,
    /// Print whether host mode is on
    Status,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizdeck=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let opts = GlobalOpts {
        config: cli.config,
        data: cli.data,
    };

    let result = match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::List { json } => commands::list::execute(&opts, json),
        Commands::Add {
            question,
            answer,
            points,
        } => commands::edit::add(&opts, question, answer, points),
        Commands::Edit {
            id,
            question,
            answer,
            points,
        } => commands::edit::edit(&opts, &id, question, answer, points),
        Commands::Remove { id } => commands::edit::remove(&opts, &id),
        Commands::Move { from, to } => commands::edit::move_question(&opts, from, to),
        Commands::Shuffle => commands::edit::shuffle(&opts),
        Commands::Clear { yes } => commands::edit::clear(&opts, yes),
        Commands::Import { file } => commands::transfer::import(&opts, file),
        Commands::Export { output } => commands::transfer::export(&opts, output),
        Commands::Report { output, format } => commands::transfer::report(&opts, output, format),
        Commands::Host { action } => match action {
            HostAction::Unlock { code } => commands::host::unlock(&opts, code),
            HostAction::Lock => commands::host::lock(&opts),
            HostAction::Status => commands::host::status(&opts),
        },
        Commands::Settings => commands::settings::execute(&opts),
        Commands::Play {
            auto_reveal,
            auto_next,
            think_time,
        } => commands::play::execute(&opts, auto_reveal, auto_next, think_time).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
