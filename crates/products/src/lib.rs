//! Products catalog module.
//!
//! This crate contains the product model, the catalog provider seam, and the
//! read-only queries run over a catalog. Everything here is deterministic
//! domain logic (no IO, no HTTP, no storage).

pub mod product;
pub mod provider;
pub mod query;

pub use product::{Category, Product};
pub use provider::{CatalogProvider, InMemoryCatalog, SampleCatalog};
pub use query::{CategoryGroup, ProductQueries};
