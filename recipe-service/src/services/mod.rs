pub mod prompt;
pub mod providers;

pub use prompt::build_recipe_prompt;
