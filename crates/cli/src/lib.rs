//! `storefront` command: runs the canned catalog queries and renders them for
//! the console.

pub mod report;

pub use report::render_report;
