use serde::{Deserialize, Serialize};

use storefront_core::{Money, ValueObject};

/// Closed classification of catalog products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Clothing,
    Books,
    Food,
    Furniture,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 5] = [
        Category::Electronics,
        Category::Clothing,
        Category::Books,
        Category::Food,
        Category::Furniture,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Books => "Books",
            Category::Food => "Food",
            Category::Furniture => "Furniture",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog entry (immutable once constructed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    /// Price in smallest currency unit (e.g., cents).
    price: Money,
    category: Category,
}

impl ValueObject for Product {}

impl Product {
    pub fn new(name: impl Into<String>, price: Money, category: Category) -> Self {
        Self {
            name: name.into(),
            price,
            category,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn category(&self) -> Category {
        self.category
    }
}
