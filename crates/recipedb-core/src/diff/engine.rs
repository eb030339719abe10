//! Diff computation over two canonical databases.

use tracing::debug;

use crate::diff::model::ChangeRecord;
use crate::model::{Database, Recipe};

/// Compute the ordered change records between two database snapshots.
///
/// Traversal order: recipe names present in `new` but not `old` (lexical),
/// then every recipe name present in `old` (lexical) — removed recipes as a
/// single record, surviving recipes expanded into cook-time and ingredient
/// records. Within a recipe the same pattern applies to ingredient names,
/// with a count record preceding any unit record for the same ingredient.
///
/// Unit policy: unit records are only evaluated when the old ingredient's
/// unit is non-empty. An old empty unit emits nothing regardless of the new
/// side; old non-empty and new empty is a removal; both non-empty and
/// differing is a change.
pub fn diff_databases(old: &Database, new: &Database) -> Vec<ChangeRecord> {
    let mut records = Vec::new();

    for name in new.recipes.keys() {
        if !old.recipes.contains_key(name) {
            records.push(ChangeRecord::RecipeAdded { name: name.clone() });
        }
    }

    for (name, old_recipe) in &old.recipes {
        match new.recipes.get(name) {
            None => records.push(ChangeRecord::RecipeRemoved { name: name.clone() }),
            Some(new_recipe) => diff_recipe(name, old_recipe, new_recipe, &mut records),
        }
    }

    debug!(changes = records.len(), "diffed databases");
    records
}

fn diff_recipe(name: &str, old: &Recipe, new: &Recipe, records: &mut Vec<ChangeRecord>) {
    if old.cook_time != new.cook_time {
        records.push(ChangeRecord::CookTimeChanged {
            recipe: name.to_string(),
            old_time: old.cook_time.clone(),
            new_time: new.cook_time.clone(),
        });
    }

    for ingredient in new.ingredients.keys() {
        if !old.ingredients.contains_key(ingredient) {
            records.push(ChangeRecord::IngredientAdded {
                recipe: name.to_string(),
                ingredient: ingredient.clone(),
            });
        }
    }

    for (ingredient, old_ing) in &old.ingredients {
        let Some(new_ing) = new.ingredients.get(ingredient) else {
            records.push(ChangeRecord::IngredientRemoved {
                recipe: name.to_string(),
                ingredient: ingredient.clone(),
            });
            continue;
        };

        if old_ing.count != new_ing.count {
            records.push(ChangeRecord::IngredientCountChanged {
                recipe: name.to_string(),
                ingredient: ingredient.clone(),
                old_count: old_ing.count.clone(),
                new_count: new_ing.count.clone(),
            });
        }

        // Unit records only exist relative to an old unit.
        if old_ing.has_unit() {
            if !new_ing.has_unit() {
                records.push(ChangeRecord::UnitRemoved {
                    recipe: name.to_string(),
                    ingredient: ingredient.clone(),
                    old_unit: old_ing.unit.clone(),
                });
            } else if old_ing.unit != new_ing.unit {
                records.push(ChangeRecord::UnitChanged {
                    recipe: name.to_string(),
                    ingredient: ingredient.clone(),
                    old_unit: old_ing.unit.clone(),
                    new_unit: new_ing.unit.clone(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Ingredient;

    fn recipe(cook_time: &str, ingredients: &[(&str, &str, &str)]) -> Recipe {
        let mut r = Recipe::new(cook_time);
        for (name, count, unit) in ingredients {
            r.ingredients
                .insert(name.to_string(), Ingredient::new(*count, *unit));
        }
        r
    }

    fn database(recipes: Vec<(&str, Recipe)>) -> Database {
        let mut db = Database::new();
        for (name, r) in recipes {
            db.recipes.insert(name.to_string(), r);
        }
        db
    }

    #[test]
    fn test_identical_databases_yield_no_records() {
        let db = database(vec![(
            "CakeA",
            recipe("10", &[("Flour", "200", "g"), ("Sugar", "100", "g")]),
        )]);
        assert_eq!(diff_databases(&db, &db), Vec::new());
    }

    #[test]
    fn test_recipe_added() {
        let old = database(vec![("CakeA", recipe("10", &[("Flour", "200", "g")]))]);
        let new = database(vec![
            ("CakeA", recipe("10", &[("Flour", "200", "g")])),
            ("CakeB", recipe("5", &[])),
        ]);
        assert_eq!(
            diff_databases(&old, &new),
            vec![ChangeRecord::RecipeAdded {
                name: "CakeB".to_string()
            }]
        );
    }

    #[test]
    fn test_recipe_removed() {
        let old = database(vec![
            ("CakeA", recipe("10", &[])),
            ("CakeB", recipe("5", &[])),
        ]);
        let new = database(vec![("CakeA", recipe("10", &[]))]);
        assert_eq!(
            diff_databases(&old, &new),
            vec![ChangeRecord::RecipeRemoved {
                name: "CakeB".to_string()
            }]
        );
    }

    #[test]
    fn test_cook_time_changed() {
        let old = database(vec![("CakeA", recipe("10", &[]))]);
        let new = database(vec![("CakeA", recipe("12", &[]))]);
        assert_eq!(
            diff_databases(&old, &new),
            vec![ChangeRecord::CookTimeChanged {
                recipe: "CakeA".to_string(),
                old_time: "10".to_string(),
                new_time: "12".to_string(),
            }]
        );
    }

    #[test]
    fn test_ingredient_added_and_removed() {
        let old = database(vec![("CakeA", recipe("10", &[("Flour", "200", "g")]))]);
        let new = database(vec![("CakeA", recipe("10", &[("Sugar", "100", "g")]))]);
        assert_eq!(
            diff_databases(&old, &new),
            vec![
                ChangeRecord::IngredientAdded {
                    recipe: "CakeA".to_string(),
                    ingredient: "Sugar".to_string(),
                },
                ChangeRecord::IngredientRemoved {
                    recipe: "CakeA".to_string(),
                    ingredient: "Flour".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_ingredient_count_changed() {
        let old = database(vec![("CakeA", recipe("10", &[("Flour", "200", "g")]))]);
        let new = database(vec![("CakeA", recipe("10", &[("Flour", "250", "g")]))]);
        assert_eq!(
            diff_databases(&old, &new),
            vec![ChangeRecord::IngredientCountChanged {
                recipe: "CakeA".to_string(),
                ingredient: "Flour".to_string(),
                old_count: "200".to_string(),
                new_count: "250".to_string(),
            }]
        );
    }

    #[test]
    fn test_unit_added_is_never_reported() {
        let old = database(vec![("CakeA", recipe("10", &[("Flour", "200", "")]))]);
        let new = database(vec![("CakeA", recipe("10", &[("Flour", "200", "g")]))]);
        assert_eq!(diff_databases(&old, &new), Vec::new());
    }

    #[test]
    fn test_unit_removed() {
        let old = database(vec![("CakeA", recipe("10", &[("Flour", "200", "g")]))]);
        let new = database(vec![("CakeA", recipe("10", &[("Flour", "200", "")]))]);
        assert_eq!(
            diff_databases(&old, &new),
            vec![ChangeRecord::UnitRemoved {
                recipe: "CakeA".to_string(),
                ingredient: "Flour".to_string(),
                old_unit: "g".to_string(),
            }]
        );
    }

    #[test]
    fn test_unit_changed_excludes_removal() {
        let old = database(vec![("CakeA", recipe("10", &[("Flour", "200", "g")]))]);
        let new = database(vec![("CakeA", recipe("10", &[("Flour", "200", "kg")]))]);
        assert_eq!(
            diff_databases(&old, &new),
            vec![ChangeRecord::UnitChanged {
                recipe: "CakeA".to_string(),
                ingredient: "Flour".to_string(),
                old_unit: "g".to_string(),
                new_unit: "kg".to_string(),
            }]
        );
    }

    #[test]
    fn test_count_record_precedes_unit_record() {
        let old = database(vec![("CakeA", recipe("10", &[("Flour", "200", "g")]))]);
        let new = database(vec![("CakeA", recipe("10", &[("Flour", "250", "kg")]))]);
        assert_eq!(
            diff_databases(&old, &new),
            vec![
                ChangeRecord::IngredientCountChanged {
                    recipe: "CakeA".to_string(),
                    ingredient: "Flour".to_string(),
                    old_count: "200".to_string(),
                    new_count: "250".to_string(),
                },
                ChangeRecord::UnitChanged {
                    recipe: "CakeA".to_string(),
                    ingredient: "Flour".to_string(),
                    old_unit: "g".to_string(),
                    new_unit: "kg".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_traversal_order_is_lexical() {
        // Added recipes first (lexical), then old recipes (lexical); within
        // a surviving recipe: cook time, added ingredients, old ingredients.
        let old = database(vec![
            ("Waffles", recipe("8", &[])),
            ("Muffin", recipe("25", &[("Flour", "250", "g"), ("Salt", "1", "tsp")])),
        ]);
        let new = database(vec![
            ("Brownie", recipe("35", &[])),
            ("Apple pie", recipe("60", &[])),
            (
                "Muffin",
                recipe("30", &[("Flour", "300", "g"), ("Zest", "1", "")]),
            ),
        ]);

        assert_eq!(
            diff_databases(&old, &new),
            vec![
                ChangeRecord::RecipeAdded {
                    name: "Apple pie".to_string()
                },
                ChangeRecord::RecipeAdded {
                    name: "Brownie".to_string()
                },
                ChangeRecord::CookTimeChanged {
                    recipe: "Muffin".to_string(),
                    old_time: "25".to_string(),
                    new_time: "30".to_string(),
                },
                ChangeRecord::IngredientAdded {
                    recipe: "Muffin".to_string(),
                    ingredient: "Zest".to_string(),
                },
                ChangeRecord::IngredientCountChanged {
                    recipe: "Muffin".to_string(),
                    ingredient: "Flour".to_string(),
                    old_count: "250".to_string(),
                    new_count: "300".to_string(),
                },
                ChangeRecord::IngredientRemoved {
                    recipe: "Muffin".to_string(),
                    ingredient: "Salt".to_string(),
                },
                ChangeRecord::RecipeRemoved {
                    name: "Waffles".to_string()
                },
            ]
        );
    }
}
