//! Catalog sources.
//!
//! A [`CatalogProvider`] hands out the full product list on every call. Queries
//! never cache what they receive, so a provider backed by real storage can be
//! dropped in without touching the query layer.

use storefront_core::{DomainError, DomainResult, Money};

use crate::product::{Category, Product};

/// Source of the full product catalog.
pub trait CatalogProvider {
    /// Returns a fresh copy of every product, in catalog order.
    fn all_products(&self) -> Vec<Product>;
}

impl<P: CatalogProvider + ?Sized> CatalogProvider for &P {
    fn all_products(&self) -> Vec<Product> {
        (**self).all_products()
    }
}

/// Fixed demonstration catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleCatalog;

impl CatalogProvider for SampleCatalog {
    fn all_products(&self) -> Vec<Product> {
        vec![
            Product::new("Laptop", Money::from_cents(120_000), Category::Electronics),
            Product::new("Smartphone", Money::from_cents(80_000), Category::Electronics),
            Product::new("T-shirt", Money::from_cents(2_500), Category::Clothing),
            Product::new("Book", Money::from_cents(4_500), Category::Books),
            Product::new("Table", Money::from_cents(15_000), Category::Furniture),
            Product::new("Apple", Money::from_cents(200), Category::Food),
        ]
    }
}

/// Catalog over a product list supplied up front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Load a catalog from a JSON array of `{ "name", "price", "category" }`
    /// records, with `price` in cents.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let products: Vec<Product> = serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("catalog json: {e}")))?;

        tracing::debug!(products = products.len(), "loaded catalog from json");
        Ok(Self::new(products))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl CatalogProvider for InMemoryCatalog {
    fn all_products(&self) -> Vec<Product> {
        self.products.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_catalog_is_fresh_on_every_call() {
        let catalog = SampleCatalog;
        let mut first = catalog.all_products();
        first.clear();

        let second = catalog.all_products();
        assert_eq!(second.len(), 6);
        assert_eq!(second[0].name(), "Laptop");
        assert_eq!(second[5].name(), "Apple");
    }

    #[test]
    fn in_memory_catalog_preserves_order() {
        let products = vec![
            Product::new("b", Money::from_major(2).unwrap(), Category::Books),
            Product::new("a", Money::from_major(1).unwrap(), Category::Food),
        ];
        let catalog = InMemoryCatalog::new(products.clone());
        assert_eq!(catalog.all_products(), products);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn from_json_loads_records() {
        let catalog = InMemoryCatalog::from_json(
            r#"[
                { "name": "Chair", "price": 4999, "category": "Furniture" },
                { "name": "Scarf", "price": 1250, "category": "Clothing" }
            ]"#,
        )
        .unwrap();

        let products = catalog.all_products();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name(), "Chair");
        assert_eq!(products[0].price(), Money::from_cents(4999));
        assert_eq!(products[1].category(), Category::Clothing);
    }

    #[test]
    fn from_json_rejects_unknown_category() {
        let err = InMemoryCatalog::from_json(
            r#"[{ "name": "Gizmo", "price": 100, "category": "Toys" }]"#,
        )
        .unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.starts_with("catalog json:") => {}
            _ => panic!("Expected Validation error for unknown category"),
        }
    }

    #[test]
    fn from_json_rejects_negative_price() {
        let err = InMemoryCatalog::from_json(
            r#"[{ "name": "Refund", "price": -5, "category": "Food" }]"#,
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn providers_work_through_references() {
        fn count<P: CatalogProvider>(provider: P) -> usize {
            provider.all_products().len()
        }

        let catalog = InMemoryCatalog::empty();
        let by_ref: &dyn CatalogProvider = &catalog;
        assert_eq!(count(by_ref), 0);
        assert_eq!(count(&SampleCatalog), 6);
    }
}
