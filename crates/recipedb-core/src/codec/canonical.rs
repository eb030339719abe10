//! Canonicalization: native trees ⇄ canonical model.
//!
//! One field-name mapping rule per variant, in both directions. This is the
//! only module that knows both vocabularies; the diff engine and the
//! emitters see the canonical model exclusively.
//!
//! Source ordering is not preserved: the canonical maps are keyed by name,
//! and a name that appears twice in one source file resolves to its last
//! occurrence. Absent optional units map to the empty string.

use std::collections::BTreeMap;

use crate::codec::json::{JsonDatabase, JsonIngredient, JsonRecipe};
use crate::codec::xml::{XmlDatabase, XmlIngredients, XmlItem, XmlRecipe};
use crate::codec::{NativeTree, Variant};
use crate::errors::{RecipeDbError, Result};
use crate::model::{Database, Ingredient, Recipe};

/// Map a format-native tree onto the canonical model.
///
/// # Errors
///
/// - `UnnamedRecipe` / `UnnamedIngredient` — an entry carries no name
/// - `MissingRecipeField` / `MissingIngredientField` — a required field is
///   absent; the error names the offending recipe/ingredient and the
///   field in the variant's own vocabulary
pub fn canonicalize(tree: NativeTree) -> Result<Database> {
    match tree {
        NativeTree::Json(native) => canonicalize_json(native),
        NativeTree::Xml(native) => canonicalize_xml(native),
    }
}

fn canonicalize_json(native: JsonDatabase) -> Result<Database> {
    let mut recipes = BTreeMap::new();
    for (index, cake) in native.cake.into_iter().enumerate() {
        let name = cake.name.ok_or(RecipeDbError::UnnamedRecipe { index })?;
        let cook_time = cake.time.ok_or_else(|| RecipeDbError::MissingRecipeField {
            recipe: name.clone(),
            field: "time".to_string(),
        })?;

        let mut ingredients = BTreeMap::new();
        for (index, item) in cake.ingredients.into_iter().enumerate() {
            let ingredient_name =
                item.ingredient_name
                    .ok_or_else(|| RecipeDbError::UnnamedIngredient {
                        recipe: name.clone(),
                        index,
                    })?;
            let count =
                item.ingredient_count
                    .ok_or_else(|| RecipeDbError::MissingIngredientField {
                        recipe: name.clone(),
                        ingredient: ingredient_name.clone(),
                        field: "ingredient_count".to_string(),
                    })?;
            ingredients.insert(
                ingredient_name,
                Ingredient {
                    count,
                    unit: item.ingredient_unit,
                },
            );
        }

        recipes.insert(
            name,
            Recipe {
                cook_time,
                ingredients,
            },
        );
    }
    Ok(Database { recipes })
}

fn canonicalize_xml(native: XmlDatabase) -> Result<Database> {
    let mut recipes = BTreeMap::new();
    for (index, cake) in native.cakes.into_iter().enumerate() {
        let name = cake.name.ok_or(RecipeDbError::UnnamedRecipe { index })?;
        let cook_time = cake
            .stovetime
            .ok_or_else(|| RecipeDbError::MissingRecipeField {
                recipe: name.clone(),
                field: "stovetime".to_string(),
            })?;

        let mut ingredients = BTreeMap::new();
        for (index, item) in cake.ingredients.items.into_iter().enumerate() {
            let ingredient_name = item.itemname.ok_or_else(|| RecipeDbError::UnnamedIngredient {
                recipe: name.clone(),
                index,
            })?;
            let count = item
                .itemcount
                .ok_or_else(|| RecipeDbError::MissingIngredientField {
                    recipe: name.clone(),
                    ingredient: ingredient_name.clone(),
                    field: "itemcount".to_string(),
                })?;
            ingredients.insert(
                ingredient_name,
                Ingredient {
                    count,
                    unit: item.itemunit,
                },
            );
        }

        recipes.insert(
            name,
            Recipe {
                cook_time,
                ingredients,
            },
        );
    }
    Ok(Database { recipes })
}

/// Re-expand the canonical model into the target variant's native tree.
///
/// Inverse of [`canonicalize`]: `canonicalize(expand(db, v))` yields a
/// database equal to `db` for either variant.
pub fn expand(db: &Database, target: Variant) -> NativeTree {
    match target {
        Variant::Json => NativeTree::Json(expand_json(db)),
        Variant::Xml => NativeTree::Xml(expand_xml(db)),
    }
}

fn expand_json(db: &Database) -> JsonDatabase {
    JsonDatabase {
        cake: db
            .recipes
            .iter()
            .map(|(name, recipe)| JsonRecipe {
                name: Some(name.clone()),
                time: Some(recipe.cook_time.clone()),
                ingredients: recipe
                    .ingredients
                    .iter()
                    .map(|(ingredient_name, ingredient)| JsonIngredient {
                        ingredient_name: Some(ingredient_name.clone()),
                        ingredient_count: Some(ingredient.count.clone()),
                        ingredient_unit: ingredient.unit.clone(),
                    })
                    .collect(),
            })
            .collect(),
    }
}

fn expand_xml(db: &Database) -> XmlDatabase {
    XmlDatabase {
        cakes: db
            .recipes
            .iter()
            .map(|(name, recipe)| XmlRecipe {
                name: Some(name.clone()),
                stovetime: Some(recipe.cook_time.clone()),
                ingredients: XmlIngredients {
                    items: recipe
                        .ingredients
                        .iter()
                        .map(|(ingredient_name, ingredient)| XmlItem {
                            itemname: Some(ingredient_name.clone()),
                            itemcount: Some(ingredient.count.clone()),
                            itemunit: ingredient.unit.clone(),
                        })
                        .collect(),
                },
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json_native() -> JsonDatabase {
        JsonDatabase {
            cake: vec![JsonRecipe {
                name: Some("Muffin".to_string()),
                time: Some("25".to_string()),
                ingredients: vec![
                    JsonIngredient {
                        ingredient_name: Some("Flour".to_string()),
                        ingredient_count: Some("250".to_string()),
                        ingredient_unit: "g".to_string(),
                    },
                    JsonIngredient {
                        ingredient_name: Some("Blueberries".to_string()),
                        ingredient_count: Some("1/2".to_string()),
                        ingredient_unit: String::new(),
                    },
                ],
            }],
        }
    }

    fn xml_native() -> XmlDatabase {
        XmlDatabase {
            cakes: vec![XmlRecipe {
                name: Some("Muffin".to_string()),
                stovetime: Some("25".to_string()),
                ingredients: XmlIngredients {
                    items: vec![
                        XmlItem {
                            itemname: Some("Flour".to_string()),
                            itemcount: Some("250".to_string()),
                            itemunit: "g".to_string(),
                        },
                        XmlItem {
                            itemname: Some("Blueberries".to_string()),
                            itemcount: Some("1/2".to_string()),
                            itemunit: String::new(),
                        },
                    ],
                },
            }],
        }
    }

    #[test]
    fn test_both_vocabularies_map_to_the_same_model() {
        let from_json = canonicalize(NativeTree::Json(json_native())).unwrap();
        let from_xml = canonicalize(NativeTree::Xml(xml_native())).unwrap();
        assert_eq!(from_json, from_xml);

        let muffin = from_json.recipe("Muffin").unwrap();
        assert_eq!(muffin.cook_time, "25");
        assert_eq!(muffin.ingredient("Flour").unwrap().unit, "g");
        assert_eq!(muffin.ingredient("Blueberries").unwrap().unit, "");
    }

    #[test]
    fn test_missing_recipe_name() {
        let mut native = json_native();
        native.cake[0].name = None;
        let err = canonicalize(NativeTree::Json(native)).unwrap_err();
        assert_eq!(err, RecipeDbError::UnnamedRecipe { index: 0 });
    }

    #[test]
    fn test_missing_time_names_the_recipe() {
        let mut native = json_native();
        native.cake[0].time = None;
        let err = canonicalize(NativeTree::Json(native)).unwrap_err();
        assert_eq!(
            err,
            RecipeDbError::MissingRecipeField {
                recipe: "Muffin".to_string(),
                field: "time".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_stovetime_uses_markup_vocabulary() {
        let mut native = xml_native();
        native.cakes[0].stovetime = None;
        let err = canonicalize(NativeTree::Xml(native)).unwrap_err();
        assert_eq!(
            err,
            RecipeDbError::MissingRecipeField {
                recipe: "Muffin".to_string(),
                field: "stovetime".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_count_names_the_ingredient() {
        let mut native = xml_native();
        native.cakes[0].ingredients.items[1].itemcount = None;
        let err = canonicalize(NativeTree::Xml(native)).unwrap_err();
        assert_eq!(
            err,
            RecipeDbError::MissingIngredientField {
                recipe: "Muffin".to_string(),
                ingredient: "Blueberries".to_string(),
                field: "itemcount".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_ingredient_name() {
        let mut native = json_native();
        native.cake[0].ingredients[1].ingredient_name = None;
        let err = canonicalize(NativeTree::Json(native)).unwrap_err();
        assert_eq!(
            err,
            RecipeDbError::UnnamedIngredient {
                recipe: "Muffin".to_string(),
                index: 1,
            }
        );
    }

    #[test]
    fn test_duplicate_names_last_occurrence_wins() {
        let mut native = json_native();
        native.cake.push(JsonRecipe {
            name: Some("Muffin".to_string()),
            time: Some("40".to_string()),
            ingredients: Vec::new(),
        });
        let db = canonicalize(NativeTree::Json(native)).unwrap();
        assert_eq!(db.len(), 1);
        assert_eq!(db.recipe("Muffin").unwrap().cook_time, "40");
        assert!(db.recipe("Muffin").unwrap().ingredients.is_empty());
    }

    #[test]
    fn test_expand_then_canonicalize_is_identity() {
        let db = canonicalize(NativeTree::Json(json_native())).unwrap();
        for variant in [Variant::Json, Variant::Xml] {
            let round = canonicalize(expand(&db, variant)).unwrap();
            assert_eq!(round, db);
        }
    }

    #[test]
    fn test_expand_targets_requested_vocabulary() {
        let db = canonicalize(NativeTree::Json(json_native())).unwrap();
        assert_eq!(expand(&db, Variant::Xml).variant(), Variant::Xml);
        assert_eq!(expand(&db, Variant::Json).variant(), Variant::Json);
    }
}
