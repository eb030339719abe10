//! Read command: parse a database and print its canonical form

use clap::Args;
use recipedb_core::{parse_database, Variant};

#[derive(Debug, Args)]
pub struct ReadArgs {
    /// Path to the database file (.json or .xml)
    #[arg(long)]
    pub file: String,
}

pub fn execute(args: ReadArgs) -> Result<(), Box<dyn std::error::Error>> {
    let variant = Variant::from_path(&args.file)?;
    let bytes = std::fs::read(&args.file)?;
    let db = parse_database(&bytes, variant)?;

    println!("{}", serde_json::to_string_pretty(&db)?);
    Ok(())
}
