//! HTTP handlers for the recipe service.

pub mod fallback;
pub mod recipes;

pub use fallback::not_found;
pub use recipes::generate_recipe;
