pub mod store;
pub mod ui;

pub use store::{use_catalog, CatalogStore};
