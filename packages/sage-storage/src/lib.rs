pub mod ingredients;
pub mod models;
pub mod recipes;

mod error;

pub use error::Error;
pub use models::RecipeRecord;
pub use recipes::RecipeStore;

pub type Result<T, E = Error> = std::result::Result<T, E>;
