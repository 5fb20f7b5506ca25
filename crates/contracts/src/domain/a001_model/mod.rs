pub mod aggregate;
pub mod catalog;

pub use aggregate::{Catalog, Model};
pub use catalog::{load_catalog, DEFAULT_MODEL_ID};
