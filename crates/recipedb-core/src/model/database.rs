use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::recipe::Recipe;

/// The canonical recipe database model.
///
/// This is the only representation the diff engine and the cross-format
/// emitter operate on. It carries no format-specific metadata (no tag
/// names, no namespace info) and is never mutated after canonicalization:
/// each parse produces a fresh value owned by exactly one call chain.
///
/// Recipe names are unique by construction; `BTreeMap` additionally makes
/// iteration lexical, which keeps every derived output deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Database {
    /// Recipes keyed by recipe name
    pub recipes: BTreeMap<String, Recipe>,
}

impl Database {
    /// Create an empty database
    pub fn new() -> Self {
        Self {
            recipes: BTreeMap::new(),
        }
    }

    /// Look up a recipe by name
    pub fn recipe(&self, name: &str) -> Option<&Recipe> {
        self.recipes.get(name)
    }

    /// Number of recipes in the database
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Check whether the database contains no recipes
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}
