//! Convert command: re-encode a database in the other (or a chosen) variant

use clap::Args;
use recipedb_core::{convert_database, parse_database, Variant};

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Path to the database file (.json or .xml)
    #[arg(long)]
    pub file: String,

    /// Target encoding: "json" or "xml" (defaults to the other encoding)
    #[arg(long)]
    pub to: Option<String>,
}

pub fn execute(args: ConvertArgs) -> Result<(), Box<dyn std::error::Error>> {
    let source = Variant::from_path(&args.file)?;
    let target = match args.to.as_deref() {
        None => source.other(),
        Some(s) if s.eq_ignore_ascii_case("json") => Variant::Json,
        Some(s) if s.eq_ignore_ascii_case("xml") => Variant::Xml,
        Some(s) => return Err(format!("unsupported target format: {}", s).into()),
    };

    let bytes = std::fs::read(&args.file)?;
    let db = parse_database(&bytes, source)?;
    let converted = convert_database(&db, target)?;

    println!("{}", String::from_utf8(converted)?);
    Ok(())
}
