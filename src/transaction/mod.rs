//! The transaction records and the first stages of the dashboard pipeline.
//!
//! This module contains:
//! - The raw [TransactionRecord] as supplied by the record source
//! - Loading records from the bundled JSON fixture
//! - Normalizing records into [Transaction]s with amounts in major units
//! - The [TransactionFilter] predicate and the filter stage

mod filter;
mod fixture;
mod normalize;
mod record;

pub use filter::{TransactionFilter, filter_transactions};
pub use fixture::{load_transactions, parse_transactions};
pub use normalize::{Transaction, normalize_transactions};
pub use record::{TransactionRecord, TransactionType};
