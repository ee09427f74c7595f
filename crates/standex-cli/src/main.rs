mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "standex",
    version,
    about = "Extract ANSI standards listings from PDF into spreadsheet rows"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline: extract, parse, and export a spreadsheet
    Extract {
        /// Path to the standards-listing PDF
        input_file: PathBuf,

        /// Directory for the exported spreadsheet
        #[arg(short = 'd', long = "out-dir", default_value = "data/output")]
        out_dir: PathBuf,

        /// File name of the exported spreadsheet
        #[arg(short = 'n', long = "name", default_value = "ansi_standards.csv")]
        name: String,
    },
    /// Parse a PDF into structured records (without exporting)
    Parse {
        /// Path to the standards-listing PDF
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write parsed records to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Inspect the organization table
    Orgs {
        #[command(subcommand)]
        action: OrgsAction,
    },
}

#[derive(Subcommand)]
enum OrgsAction {
    /// List known standards developers
    List,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            input_file,
            out_dir,
            name,
        } => commands::extract::run(input_file, out_dir, &name),
        Commands::Parse {
            input_file,
            output,
            out,
        } => commands::parse::run(input_file, &output, out),
        Commands::Orgs { action } => match action {
            OrgsAction::List => commands::orgs::list(),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
