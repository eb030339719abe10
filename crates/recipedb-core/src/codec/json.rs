//! Object-notation (JSON) codec.
//!
//! The native tree mirrors the object-notation field vocabulary exactly
//! (`cake`, `time`, `ingredient_name`, `ingredient_count`,
//! `ingredient_unit`). Required fields are `Option`s so that their absence
//! survives decoding as a syntactically valid tree; the canonicalizer is
//! the single place that rejects it.

use serde::{Deserialize, Serialize};

use crate::codec::Variant;
use crate::errors::{RecipeDbError, Result};

/// Top-level object-notation document: a `cake` array of recipes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JsonDatabase {
    #[serde(default)]
    pub cake: Vec<JsonRecipe>,
}

/// One recipe entry of the `cake` array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JsonRecipe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    #[serde(default)]
    pub ingredients: Vec<JsonIngredient>,
}

/// One ingredient entry. An absent `ingredient_unit` decodes to `""` and
/// an empty unit is omitted again on emit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JsonIngredient {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredient_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredient_count: Option<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ingredient_unit: String,
}

/// Decode object-notation bytes into the native tree.
///
/// # Errors
///
/// `Decode` — the bytes are not well-formed JSON for this schema
pub fn decode_json(bytes: &[u8]) -> Result<JsonDatabase> {
    serde_json::from_slice(bytes).map_err(|e| RecipeDbError::Decode {
        variant: Variant::Json,
        message: e.to_string(),
    })
}

/// Serialize the native tree as pretty-printed object-notation bytes.
///
/// # Errors
///
/// `Emit` — serialization failed (signals an internal defect)
pub fn emit_json(tree: &JsonDatabase) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(tree).map_err(|e| RecipeDbError::Emit {
        variant: Variant::Json,
        message: e.to_string(),
    })
}
