//! Human-readable renderer for change records.
//!
//! One line per record, newline-terminated. The line templates are a stable
//! output format consumed verbatim by downstream tooling; the double space
//! before the cake name in the `REMOVED ingredient` and `CHANGED unit
//! count` lines is part of that format.

use crate::diff::model::ChangeRecord;

/// Render a change report, one line per record.
///
/// An empty record sequence renders to an empty string. The rendering is
/// informational only and never affects the structured records.
pub fn render_change_report(records: &[ChangeRecord]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&render_change_record(record));
        out.push('\n');
    }
    out
}

/// Render a single change record as its report line (no trailing newline).
pub fn render_change_record(record: &ChangeRecord) -> String {
    match record {
        ChangeRecord::RecipeAdded { name } => format!("ADDED cake \"{name}\""),
        ChangeRecord::RecipeRemoved { name } => format!("REMOVED cake \"{name}\""),
        ChangeRecord::CookTimeChanged {
            recipe,
            old_time,
            new_time,
        } => format!(
            "CHANGED cooking time for cake \"{recipe}\" - \"{new_time}\" instead of \"{old_time}\""
        ),
        ChangeRecord::IngredientAdded { recipe, ingredient } => {
            format!("ADDED ingredient \"{ingredient}\" for cake \"{recipe}\"")
        }
        ChangeRecord::IngredientRemoved { recipe, ingredient } => {
            format!("REMOVED ingredient \"{ingredient}\" for cake  \"{recipe}\"")
        }
        ChangeRecord::IngredientCountChanged {
            recipe,
            ingredient,
            old_count,
            new_count,
        } => format!(
            "CHANGED unit count for ingredient \"{ingredient}\" for cake  \"{recipe}\" - \"{new_count}\" instead of \"{old_count}\""
        ),
        ChangeRecord::UnitRemoved {
            recipe,
            ingredient,
            old_unit,
        } => format!(
            "REMOVED unit \"{old_unit}\" for ingredient \"{ingredient}\" for cake \"{recipe}\""
        ),
        ChangeRecord::UnitChanged {
            recipe,
            ingredient,
            old_unit,
            new_unit,
        } => format!(
            "CHANGED unit for ingredient \"{ingredient}\" for cake \"{recipe}\" - \"{new_unit}\" instead of \"{old_unit}\""
        ),
    }
}
