pub mod recipe;

pub use recipe::{ErrorResponse, RecipeRequest, RecipeResponse};
