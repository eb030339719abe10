//! Markup (XML) codec.
//!
//! The native tree mirrors the markup field vocabulary exactly
//! (`<recipes>`, `<cake>`, `<stovetime>`, `<ingredients>`/`<item>`,
//! `<itemname>`, `<itemcount>`, `<itemunit>`). Required fields are
//! `Option`s so that their absence survives decoding as a syntactically
//! valid tree; the canonicalizer is the single place that rejects it.

use serde::{Deserialize, Serialize};

use crate::codec::Variant;
use crate::errors::{RecipeDbError, Result};

/// Root `<recipes>` element: a list of `<cake>` recipes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "recipes")]
pub struct XmlDatabase {
    #[serde(default, rename = "cake")]
    pub cakes: Vec<XmlRecipe>,
}

/// One `<cake>` element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct XmlRecipe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stovetime: Option<String>,

    #[serde(default)]
    pub ingredients: XmlIngredients,
}

/// The `<ingredients>` wrapper element around `<item>`s.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct XmlIngredients {
    #[serde(default, rename = "item")]
    pub items: Vec<XmlItem>,
}

/// One `<item>` element. An absent `<itemunit>` decodes to `""` and an
/// empty unit is omitted again on emit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct XmlItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub itemname: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub itemcount: Option<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub itemunit: String,
}

/// Decode markup bytes into the native tree.
///
/// # Errors
///
/// `Decode` — the bytes are not valid UTF-8 or not well-formed XML for
/// this schema
pub fn decode_xml(bytes: &[u8]) -> Result<XmlDatabase> {
    let text = std::str::from_utf8(bytes).map_err(|e| RecipeDbError::Decode {
        variant: Variant::Xml,
        message: format!("input is not valid UTF-8: {e}"),
    })?;
    quick_xml::de::from_str(text).map_err(|e| RecipeDbError::Decode {
        variant: Variant::Xml,
        message: e.to_string(),
    })
}

/// Serialize the native tree as indented markup bytes.
///
/// # Errors
///
/// `Emit` — serialization failed (signals an internal defect)
pub fn emit_xml(tree: &XmlDatabase) -> Result<Vec<u8>> {
    let mut out = String::new();
    let mut ser = quick_xml::se::Serializer::new(&mut out);
    ser.indent(' ', 2);
    tree.serialize(ser).map_err(|e| RecipeDbError::Emit {
        variant: Variant::Xml,
        message: e.to_string(),
    })?;
    Ok(out.into_bytes())
}
