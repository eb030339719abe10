//! Database diff engine.
//!
//! Compares two canonical databases and produces an ordered sequence of
//! change records suitable for human-readable rendering and machine
//! consumption.
//!
//! ## Entry point
//!
//! ```ignore
//! use recipedb_core::diff::{diff_databases, render_change_report};
//!
//! let records = diff_databases(&old, &new);
//! let report = render_change_report(&records);
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce identical record sequences.
//!   Traversal is lexical: recipes added in `new` first, then every recipe
//!   of `old`; within a recipe, added ingredients first, then every
//!   ingredient of `old`.
//! - **Unit asymmetry**: unit records are only emitted when the old
//!   ingredient carried a unit. A unit appearing where none existed is
//!   never reported.
//! - **Infallibility**: diffing never errors; equal databases yield an
//!   empty sequence.

pub mod engine;
pub mod model;
pub mod report;

pub use engine::diff_databases;
pub use model::ChangeRecord;
pub use report::render_change_report;
