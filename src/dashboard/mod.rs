//! Dashboard module
//!
//! Provides the page that summarizes the transactions: totals, charts, a
//! filter form and a paginated table. Filters and the page number travel in
//! the query string.

mod aggregation;
mod cards;
mod charts;
mod filter_form;
mod handlers;
mod model;
mod query;
mod table;

pub use handlers::get_dashboard_page;
