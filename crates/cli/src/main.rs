use anyhow::Context;

use storefront_cli::render_report;
use storefront_products::{ProductQueries, SampleCatalog};

fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    let queries = ProductQueries::new(SampleCatalog);
    let report = render_report(&queries).context("failed to build catalog report")?;

    print!("{report}");
    tracing::info!(bytes = report.len(), "catalog report written");
    Ok(())
}
