//! Console rendering of the catalog queries.

use storefront_core::{DomainError, DomainResult};
use storefront_products::{CatalogProvider, Category, ProductQueries};

/// Render the five query sections, separated by blank lines.
///
/// An empty catalog fails the whole report: there is no most expensive product
/// to show and no average to compute.
pub fn render_report<P: CatalogProvider>(queries: &ProductQueries<P>) -> DomainResult<String> {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("Products in {} category:", Category::Electronics));
    for product in queries.by_category(Category::Electronics) {
        lines.push(format!("- {}: ${}", product.name(), product.price()));
    }

    let top = queries.most_expensive().ok_or_else(DomainError::empty_catalog)?;
    lines.push(String::new());
    lines.push(format!("Most expensive product: {} - ${}", top.name(), top.price()));

    lines.push(String::new());
    lines.push(format!("Total price of all products: ${}", queries.total_price()?));

    lines.push(String::new());
    lines.push("Products grouped by category:".to_string());
    for group in queries.grouped_by_category() {
        lines.push(format!("{}:", group.category));
        for product in &group.products {
            lines.push(format!("  - {} - ${}", product.name(), product.price()));
        }
    }

    lines.push(String::new());
    lines.push(format!("Average price of all products: ${}", queries.average_price()?));

    tracing::debug!(lines = lines.len(), "rendered catalog report");

    let mut out = lines.join("\n");
    out.push('\n');
    Ok(out)
}
