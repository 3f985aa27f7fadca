//! quizgate CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

use commands::OutputFormat;

#[derive(Parser)]
#[command(
    name = "quizgate",
    version,
    about = "Deterministic quiz assignment and answer scoring"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the quiz over HTTP
    Serve {
        /// Question bank (.toml or .txt)
        #[arg(long)]
        questions: Option<PathBuf>,

        /// Address to listen on
        #[arg(long)]
        bind: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show which question a learner gets
    Assign {
        /// Learner name
        #[arg(long)]
        name: String,

        /// Learner email
        #[arg(long)]
        email: String,

        /// Question bank (.toml or .txt)
        #[arg(long)]
        questions: Option<PathBuf>,

        /// Seed-to-index algorithm: mersenne, modulo
        #[arg(long)]
        algorithm: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Score an answer (from --text, --file, or stdin)
    Score {
        /// Answer text
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,

        /// File containing the answer
        #[arg(long)]
        file: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Validate a question bank
    Validate {
        /// Question bank (.toml or .txt)
        #[arg(long)]
        questions: PathBuf,
    },

    /// Create starter config and question bank
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizgate=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve {
            questions,
            bind,
            config,
        } => commands::serve::execute(questions, bind, config).await,
        Commands::Assign {
            name,
            email,
            questions,
            algorithm,
            config,
            format,
        } => commands::assign::execute(name, email, questions, algorithm, config, format),
        Commands::Score {
            text,
            file,
            config,
            format,
        } => commands::score::execute(text, file, config, format),
        Commands::Validate { questions } => commands::validate::execute(questions),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
