//! The table of transactions on the current page and the page navigation
//! underneath it.

use maud::{Markup, html};
use time_tz::Tz;

use crate::{
    dashboard::{model::DashboardModel, query::DashboardQuery},
    endpoints,
    html::{TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, format_currency},
    pagination::PaginationIndicator,
    timezone::local_date,
    transaction::{Transaction, TransactionType},
};

const EMPTY_MESSAGE: &str = "No transactions match the current filters.";

/// Renders the transactions table for the current page of `model`.
///
/// Page links keep the filters in `query`.
pub(super) fn transactions_table_view(
    model: &DashboardModel,
    query: &DashboardQuery,
    local_timezone: &Tz,
) -> Markup {
    if model.is_empty() {
        return html! {
            section id="transactions" class="w-full mb-8"
            {
                p class="py-8 text-center text-gray-600 dark:text-gray-400" { (EMPTY_MESSAGE) }
            }
        };
    }

    let caption = format!(
        "Showing {} of {} transactions",
        model.page_transactions.len(),
        model.filtered_count
    );

    html! {
        section id="transactions" class="w-full mb-8"
        {
            div class="relative overflow-x-auto shadow-md rounded"
            {
                table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
                {
                    caption class="p-4 text-sm text-left text-gray-600 dark:text-gray-400 bg-white dark:bg-gray-800"
                    {
                        (caption)
                    }

                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Type" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Account" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Industry" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "State" }
                            th scope="col" class={ (TABLE_CELL_STYLE) " text-right" } { "Amount" }
                        }
                    }

                    tbody
                    {
                        @for transaction in &model.page_transactions {
                            (transaction_row_view(transaction, local_timezone))
                        }

                        @if model.page_transactions.is_empty() {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                td colspan="6" class={ (TABLE_CELL_STYLE) " text-center" }
                                {
                                    "There are no transactions on page " (model.page) "."
                                }
                            }
                        }
                    }
                }
            }

            @if model.page_count > 1 || model.page > model.page_count {
                (pagination_view(&model.indicators, query))
            }
        }
    }
}

fn transaction_row_view(transaction: &Transaction, local_timezone: &Tz) -> Markup {
    let date = local_date(transaction.date, local_timezone).to_string();
    let (amount, amount_class) = match transaction.transaction_type {
        TransactionType::Deposit => (
            format_currency(transaction.amount),
            "text-green-600 dark:text-green-400",
        ),
        TransactionType::Withdraw => (
            format_currency(-transaction.amount),
            "text-red-600 dark:text-red-400",
        ),
    };

    html! {
        tr class=(TABLE_ROW_STYLE) data-transaction-row="true"
        {
            td class=(TABLE_CELL_STYLE) { time datetime=(date) { (date) } }
            td class=(TABLE_CELL_STYLE) { (transaction.transaction_type.label()) }
            td class=(TABLE_CELL_STYLE) { (transaction.account) }
            td class=(TABLE_CELL_STYLE) { (transaction.industry) }
            td class=(TABLE_CELL_STYLE) { (transaction.state) }
            td class={ (TABLE_CELL_STYLE) " text-right font-medium " (amount_class) } { (amount) }
        }
    }
}

fn pagination_view(indicators: &[PaginationIndicator], query: &DashboardQuery) -> Markup {
    html! {
        nav class="pagination flex justify-center" aria-label="Pagination"
        {
            ul class="pagination flex items-center gap-1 px-2 py-4"
            {
                @for indicator in indicators {
                    li
                    {
                        @match indicator {
                            PaginationIndicator::Page(page) => {
                                a
                                    href=(query.with_page(*page).to_url(endpoints::DASHBOARD_VIEW))
                                    role="button"
                                    class="block px-3 py-2 rounded-sm text-blue-600 hover:underline"
                                { (page) }
                            }
                            PaginationIndicator::CurrPage(page) => {
                                span
                                    aria-current="page"
                                    class="block px-3 py-2 rounded-sm font-bold text-black dark:text-white"
                                { (page) }
                            }
                            PaginationIndicator::Ellipsis => {
                                span
                                    aria-disabled="true"
                                    class="block px-3 py-2 text-gray-400 dark:text-gray-500 cursor-default"
                                { "..." }
                            }
                        }
                    }
                }
            }
        }
    }
}
