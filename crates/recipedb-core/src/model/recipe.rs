use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single ingredient of a recipe.
///
/// The ingredient's name is the key of the owning [`Recipe`]'s ingredient
/// map, so the value only carries quantity and unit. `count` is kept as an
/// opaque string: source data mixes plain numbers, fractions and ranges, and
/// no arithmetic is ever performed on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Quantity, verbatim from the source (e.g. "2", "1/2", "3-4")
    pub count: String,

    /// Measurement unit; the empty string is the canonical encoding of
    /// "no unit specified"
    pub unit: String,
}

impl Ingredient {
    /// Create an ingredient from a count and an optional unit
    pub fn new(count: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            count: count.into(),
            unit: unit.into(),
        }
    }

    /// Check whether a unit was specified for this ingredient
    pub fn has_unit(&self) -> bool {
        !self.unit.is_empty()
    }
}

/// A recipe: a cooking time plus a set of ingredients keyed by name.
///
/// Ingredient names are unique within a recipe by construction. The map is
/// a `BTreeMap` so iteration is lexical, which the diff engine's ordering
/// contract relies on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Cooking time, verbatim from the source (e.g. "45 min")
    pub cook_time: String,

    /// Ingredients keyed by ingredient name
    pub ingredients: BTreeMap<String, Ingredient>,
}

impl Recipe {
    /// Create a recipe with the given cooking time and no ingredients
    pub fn new(cook_time: impl Into<String>) -> Self {
        Self {
            cook_time: cook_time.into(),
            ingredients: BTreeMap::new(),
        }
    }

    /// Look up an ingredient by name
    pub fn ingredient(&self, name: &str) -> Option<&Ingredient> {
        self.ingredients.get(name)
    }
}
