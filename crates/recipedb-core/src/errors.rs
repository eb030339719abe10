use crate::codec::Variant;
use thiserror::Error;

/// Result type alias using RecipeDbError
pub type Result<T> = std::result::Result<T, RecipeDbError>;

/// Comprehensive error taxonomy for recipe database operations
///
/// Decode errors abort the parse of the offending input; schema errors name
/// the recipe (and ingredient, where one is identifiable) that is missing a
/// required field. No error is ever recovered from partially: a malformed
/// recipe aborts the whole parse.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecipeDbError {
    // ===== Decode Errors =====
    /// Source bytes are not well-formed for the selected variant
    #[error("malformed {variant} input: {message}")]
    Decode { variant: Variant, message: String },

    // ===== Schema Errors =====
    /// A recipe entry carries no name (positions are zero-based source order)
    #[error("recipe at position {index} has no name")]
    UnnamedRecipe { index: usize },

    /// A named recipe is missing a required field
    #[error("recipe \"{recipe}\" is missing required field `{field}`")]
    MissingRecipeField { recipe: String, field: String },

    /// An ingredient entry carries no name (positions are zero-based source order)
    #[error("ingredient at position {index} in recipe \"{recipe}\" has no name")]
    UnnamedIngredient { recipe: String, index: usize },

    /// A named ingredient is missing a required field
    #[error("ingredient \"{ingredient}\" in recipe \"{recipe}\" is missing required field `{field}`")]
    MissingIngredientField {
        recipe: String,
        ingredient: String,
        field: String,
    },

    // ===== Dispatch Errors =====
    /// The file name suffix maps to no supported encoding
    #[error("unsupported database format: {path}")]
    UnsupportedVariant { path: String },

    // ===== Emit Errors =====
    /// Serialization of the in-memory model failed; unreachable while the
    /// model invariants hold, so raising it signals an internal defect
    #[error("failed to emit {variant} output: {message}")]
    Emit { variant: Variant, message: String },
}
