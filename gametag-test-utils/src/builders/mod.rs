//! Test data builders for creating catalogs

mod catalog;

pub use catalog::{CatalogBuilder, ranked_catalog};
