//! RecipeDB Core - canonical recipe database model, codecs and diff engine
//!
//! This crate provides the foundational data structures and operations for
//! RecipeDB, including:
//! - The canonical `Database`/`Recipe`/`Ingredient` value model
//! - Object-notation (JSON) and markup (XML) codecs over format-native trees
//! - Canonicalization mapping either vocabulary onto the canonical model
//! - Lossless cross-format conversion through the canonical model
//! - A deterministic diff engine with a human-readable change report
//!
//! File I/O and encoding selection belong to the caller: the core consumes
//! byte buffers plus an explicit [`Variant`] and returns owned values.

pub mod codec;
pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;

// Re-export commonly used types
pub use codec::{convert_database, parse_database, Variant};
pub use diff::{diff_databases, render_change_report, ChangeRecord};
pub use errors::{RecipeDbError, Result};
pub use model::{Database, Ingredient, Recipe};
