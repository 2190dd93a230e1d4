//! Runs the dashboard pipeline and collects every derived view.

use time_tz::Tz;

use crate::{
    dashboard::aggregation::{
        FilterOptions, MonthlyTotal, StateBreakdown, Totals, breakdown_by_state, filter_options,
        monthly_totals, summarize_totals,
    },
    pagination::{
        PaginationConfig, PaginationIndicator, create_pagination_indicators, page_count,
        page_slice,
    },
    transaction::{Transaction, TransactionFilter, filter_transactions},
};

/// Everything the dashboard page displays, computed from the transactions,
/// the active filter and the requested page.
#[derive(Debug, PartialEq)]
pub(crate) struct DashboardModel<'a> {
    /// The number of transactions that match the filter.
    pub filtered_count: usize,
    /// The totals over every matching transaction.
    pub totals: Totals,
    /// Deposit and withdrawal sums per state over every matching transaction.
    pub breakdown: Vec<StateBreakdown>,
    /// The amount moved per month over every matching transaction.
    pub monthly: Vec<MonthlyTotal>,
    /// The choices for the filter form, taken from all transactions.
    pub options: FilterOptions,
    /// The page being displayed, starting from 1.
    pub page: u64,
    /// The number of pages of matching transactions.
    pub page_count: u64,
    /// The matching transactions on the current page.
    pub page_transactions: Vec<&'a Transaction>,
    /// The page links to display under the table.
    pub indicators: Vec<PaginationIndicator>,
}

impl<'a> DashboardModel<'a> {
    /// Filter `transactions` and derive the summaries, charts data and the
    /// current page.
    ///
    /// Totals, breakdown and monthly series cover every matching transaction,
    /// not just the current page. A `page` of 0 is treated as page 1.
    pub(crate) fn build(
        transactions: &'a [Transaction],
        filter: &TransactionFilter,
        page: u64,
        config: &PaginationConfig,
        local_timezone: &Tz,
    ) -> Self {
        let page = page.max(1);
        let filtered = filter_transactions(transactions, filter);
        let page_count = page_count(filtered.len(), config.page_size);

        Self {
            filtered_count: filtered.len(),
            totals: summarize_totals(&filtered),
            breakdown: breakdown_by_state(&filtered),
            monthly: monthly_totals(&filtered, local_timezone),
            options: filter_options(transactions),
            page,
            page_count,
            page_transactions: page_slice(&filtered, page, config.page_size).to_vec(),
            indicators: create_pagination_indicators(page, page_count, config),
        }
    }

    /// Whether no transaction matches the filter.
    pub(crate) fn is_empty(&self) -> bool {
        self.filtered_count == 0
    }
}
