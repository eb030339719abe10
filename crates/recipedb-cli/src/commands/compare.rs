//! Compare command: diff two database snapshots and print the change report

use clap::Args;
use recipedb_core::{diff_databases, parse_database, render_change_report, Variant};

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Path to the old database snapshot (.json or .xml)
    #[arg(long)]
    pub old: String,

    /// Path to the new database snapshot (.json or .xml)
    #[arg(long)]
    pub new: String,
}

pub fn execute(args: CompareArgs) -> Result<(), Box<dyn std::error::Error>> {
    let old_db = parse_database(&std::fs::read(&args.old)?, Variant::from_path(&args.old)?)?;
    let new_db = parse_database(&std::fs::read(&args.new)?, Variant::from_path(&args.new)?)?;

    let records = diff_databases(&old_db, &new_db);
    print!("{}", render_change_report(&records));
    Ok(())
}
