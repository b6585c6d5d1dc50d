//! Read-only queries over a catalog.
//!
//! Every query pulls the full catalog from the provider on each call and keeps
//! no state between calls.

use serde::{Deserialize, Serialize};

use storefront_core::{DomainResult, Money};

use crate::product::{Category, Product};
use crate::provider::CatalogProvider;

/// Products sharing one category, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub category: Category,
    pub products: Vec<Product>,
}

/// Query engine over a [`CatalogProvider`].
#[derive(Debug, Clone)]
pub struct ProductQueries<P> {
    provider: P,
}

impl<P: CatalogProvider> ProductQueries<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Products in `category`, in catalog order.
    pub fn by_category(&self, category: Category) -> Vec<Product> {
        let products = self.provider.all_products();
        let total = products.len();

        let matched: Vec<Product> = products
            .into_iter()
            .filter(|p| p.category() == category)
            .collect();

        tracing::debug!(%category, total, matched = matched.len(), "filtered products by category");
        matched
    }

    /// The highest-priced product; the first one in catalog order wins a tie.
    ///
    /// Returns `None` for an empty catalog.
    pub fn most_expensive(&self) -> Option<Product> {
        let products = self.provider.all_products();
        let total = products.len();

        let top = products.into_iter().fold(None, |best: Option<Product>, p| match best {
            Some(b) if b.price() >= p.price() => Some(b),
            _ => Some(p),
        });

        tracing::debug!(
            total,
            product = top.as_ref().map(Product::name),
            "selected most expensive product"
        );
        top
    }

    /// Sum of every price; zero for an empty catalog.
    pub fn total_price(&self) -> DomainResult<Money> {
        let products = self.provider.all_products();
        let total = Money::sum(products.iter().map(Product::price))?;

        tracing::debug!(products = products.len(), total = %total, "summed product prices");
        Ok(total)
    }

    /// Partition of the catalog by category.
    ///
    /// Groups appear in the order their category is first seen in the catalog;
    /// members keep catalog order. Categories without products are omitted.
    pub fn grouped_by_category(&self) -> Vec<CategoryGroup> {
        let products = self.provider.all_products();
        let total = products.len();

        let mut groups: Vec<CategoryGroup> = Vec::new();
        for product in products {
            let category = product.category();
            match groups.iter_mut().find(|g| g.category == category) {
                Some(group) => group.products.push(product),
                None => groups.push(CategoryGroup {
                    category,
                    products: vec![product],
                }),
            }
        }

        tracing::debug!(total, groups = groups.len(), "grouped products by category");
        groups
    }

    /// Mean of every price, rounded half-up to the cent (not the exact mean).
    ///
    /// Fails with [`DomainError::DivisionByZero`](storefront_core::DomainError::DivisionByZero)
    /// when the catalog is empty.
    pub fn average_price(&self) -> DomainResult<Money> {
        let products = self.provider.all_products();
        let total = Money::sum(products.iter().map(Product::price))?;
        let average = Money::average(total, products.len())?;

        tracing::debug!(products = products.len(), average = %average, "averaged product prices");
        Ok(average)
    }
}
