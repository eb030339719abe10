//! Diff output types.
//!
//! A [`ChangeRecord`] is one atomic structural difference between two
//! canonical databases. Records serialize with a `kind` tag so structured
//! consumers can dispatch without string-matching the rendered report.

use serde::{Deserialize, Serialize};

/// One atomic structural difference between two databases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ChangeRecord {
    /// Recipe present in `new`, absent in `old`
    RecipeAdded { name: String },

    /// Recipe present in `old`, absent in `new`
    RecipeRemoved { name: String },

    /// Recipe present in both with differing cooking time
    CookTimeChanged {
        recipe: String,
        old_time: String,
        new_time: String,
    },

    /// Ingredient present in `new`'s recipe, absent in `old`'s
    IngredientAdded { recipe: String, ingredient: String },

    /// Ingredient present in `old`'s recipe, absent in `new`'s
    IngredientRemoved { recipe: String, ingredient: String },

    /// Ingredient present in both with differing count
    IngredientCountChanged {
        recipe: String,
        ingredient: String,
        old_count: String,
        new_count: String,
    },

    /// `old` carried a unit, `new` carries none
    UnitRemoved {
        recipe: String,
        ingredient: String,
        old_unit: String,
    },

    /// Both sides carry a unit and they differ
    UnitChanged {
        recipe: String,
        ingredient: String,
        old_unit: String,
        new_unit: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_serialize_with_kind_tag() {
        let record = ChangeRecord::UnitRemoved {
            recipe: "Muffin".to_string(),
            ingredient: "Flour".to_string(),
            old_unit: "g".to_string(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["kind"], "UnitRemoved");
        assert_eq!(json["recipe"], "Muffin");
        assert_eq!(json["old_unit"], "g");
    }
}
