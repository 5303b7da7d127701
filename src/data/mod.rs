mod bank;
mod catalog;
mod loader;

pub use catalog::{Catalog, CatalogError, DRAWN_TIME_LIMIT};
pub use loader::{LoadError, load_quizzes_from_json, parse_quizzes};
