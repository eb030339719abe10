pub mod database;
pub mod recipe;

pub use database::Database;
pub use recipe::{Ingredient, Recipe};
