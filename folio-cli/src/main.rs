//! Folio CLI - Command-line interface for game book records

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use folio_core::{InputFormat, OutputFormat};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a book to another representation
    Convert {
        /// Input file path ("-" for stdin)
        input: String,

        /// Output file path ("-" for stdout)
        #[arg(short, long)]
        output: String,

        /// Input format (binary, json, markup); guessed from the extension if omitted
        #[arg(long)]
        from: Option<InputFormat>,

        /// Output format (binary, json, markup, text); guessed from the extension if omitted
        #[arg(long)]
        to: Option<OutputFormat>,
    },

    /// Display information about a book
    Info {
        /// Input file path ("-" for stdin)
        input: String,

        /// Input format (binary, json, markup)
        #[arg(long)]
        from: Option<InputFormat>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a book file
    Validate {
        /// Input file path ("-" for stdin)
        input: String,

        /// Input format (binary, json, markup)
        #[arg(long)]
        from: Option<InputFormat>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "folio_cli=debug,folio_core=debug"
    } else {
        "folio_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Convert {
            input,
            output,
            from,
            to,
        } => commands::convert(&input, &output, from, to),

        Commands::Info { input, from, json } => commands::info(&input, from, json),

        Commands::Validate { input, from } => commands::validate(&input, from),
    }
}
