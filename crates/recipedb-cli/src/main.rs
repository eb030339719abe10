//! RecipeDB CLI
//!
//! Command-line interface for RecipeDB

use clap::{Parser, Subcommand};
use recipedb_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "recipedb")]
#[command(about = "RecipeDB - recipe database conversion and comparison", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Read a database and print its canonical form
    Read(commands::read::ReadArgs),
    /// Convert a database between the two supported encodings
    Convert(commands::convert::ConvertArgs),
    /// Compare two database snapshots and print a change report
    Compare(commands::compare::CompareArgs),
}

fn main() {
    logging_facility::init(Profile::Development);

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Read(args) => commands::read::execute(args),
        Commands::Convert(args) => commands::convert::execute(args),
        Commands::Compare(args) => commands::compare::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
