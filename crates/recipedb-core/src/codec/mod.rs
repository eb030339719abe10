//! Database codecs.
//!
//! Decodes raw bytes of either supported encoding into a format-native
//! intermediate tree, and serializes native trees back to bytes. The native
//! trees mirror each format's own field vocabulary; translating that
//! vocabulary into the canonical model is the job of [`canonical`], never of
//! the decoders or the diff engine.
//!
//! ## Entry points
//!
//! ```ignore
//! use recipedb_core::codec::{parse_database, convert_database, Variant};
//!
//! let db = parse_database(&bytes, Variant::from_path("old.json")?)?;
//! let xml = convert_database(&db, Variant::Xml)?;
//! ```
//!
//! ## Guarantees
//!
//! - **Round-trip idempotence**: `parse_database(convert_database(db, v), v)`
//!   yields a database equal to `db` for either variant.
//! - **Cross-format fidelity**: conversion always re-expands the canonical
//!   model into the target variant's native field names; a source-native
//!   tree is never serialized with the other variant's syntax.
//! - **No partial results**: malformed input or a missing required field
//!   fails the whole operation.

pub mod canonical;
pub mod json;
pub mod xml;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{RecipeDbError, Result};
use crate::model::Database;

/// One of the two supported database encodings.
///
/// Selection is always the caller's responsibility (conventionally via
/// [`Variant::from_path`]); the codecs never sniff content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    /// Object-notation encoding (`.json`)
    Json,
    /// Markup encoding (`.xml`)
    Xml,
}

impl Variant {
    /// Derive the variant from a file name suffix.
    ///
    /// The match is ASCII case-insensitive (`db.JSON` selects [`Variant::Json`]).
    ///
    /// # Errors
    ///
    /// `UnsupportedVariant` — the path has no suffix or a suffix that maps
    /// to no supported encoding
    pub fn from_path(path: &str) -> Result<Variant> {
        let suffix = std::path::Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");
        if suffix.eq_ignore_ascii_case("json") {
            Ok(Variant::Json)
        } else if suffix.eq_ignore_ascii_case("xml") {
            Ok(Variant::Xml)
        } else {
            Err(RecipeDbError::UnsupportedVariant {
                path: path.to_string(),
            })
        }
    }

    /// The other supported variant
    pub fn other(self) -> Variant {
        match self {
            Variant::Json => Variant::Xml,
            Variant::Xml => Variant::Json,
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Json => write!(f, "json"),
            Variant::Xml => write!(f, "xml"),
        }
    }
}

/// A decoder's direct, format-specific representation prior to
/// canonicalization. The tag doubles as the variant the tree was decoded
/// from (or expanded for).
#[derive(Debug, Clone, PartialEq)]
pub enum NativeTree {
    Json(json::JsonDatabase),
    Xml(xml::XmlDatabase),
}

impl NativeTree {
    /// The variant this tree belongs to
    pub fn variant(&self) -> Variant {
        match self {
            NativeTree::Json(_) => Variant::Json,
            NativeTree::Xml(_) => Variant::Xml,
        }
    }
}

/// Decode raw bytes into the selected variant's native tree.
///
/// # Errors
///
/// `Decode` — the bytes are not well-formed for the selected variant
pub fn decode(bytes: &[u8], variant: Variant) -> Result<NativeTree> {
    match variant {
        Variant::Json => json::decode_json(bytes).map(NativeTree::Json),
        Variant::Xml => xml::decode_xml(bytes).map(NativeTree::Xml),
    }
}

/// Serialize a native tree back into its own variant's bytes.
///
/// # Errors
///
/// `Emit` — serialization failed (signals an internal defect)
pub fn emit(tree: &NativeTree) -> Result<Vec<u8>> {
    match tree {
        NativeTree::Json(db) => json::emit_json(db),
        NativeTree::Xml(db) => xml::emit_xml(db),
    }
}

/// Parse an encoded database into the canonical model.
///
/// Decodes the bytes with the selected variant's decoder and canonicalizes
/// the resulting native tree.
///
/// # Errors
///
/// - `Decode` — the bytes are not well-formed for the selected variant
/// - schema errors — a syntactically valid recipe or ingredient is missing
///   a required field (the error names the offender)
pub fn parse_database(bytes: &[u8], variant: Variant) -> Result<Database> {
    debug!(%variant, len = bytes.len(), "parsing database");
    let tree = decode(bytes, variant)?;
    let db = canonical::canonicalize(tree)?;
    debug!(recipes = db.len(), "parsed database");
    Ok(db)
}

/// Serialize a canonical database into the target variant's bytes.
///
/// The canonical model is re-expanded into the target variant's native
/// field names first, so the same database converts losslessly to either
/// encoding.
///
/// # Errors
///
/// `Emit` — serialization failed (signals an internal defect)
pub fn convert_database(db: &Database, target: Variant) -> Result<Vec<u8>> {
    debug!(%target, recipes = db.len(), "converting database");
    let tree = canonical::expand(db, target);
    emit(&tree)
}
