//! Product catalog data and the pure search/sort query over it.

mod product;
mod query;

pub use product::{Product, PRODUCTS};
pub use query::{filter_products, query_products, SortIndicator, SortKey};
