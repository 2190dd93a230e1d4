//! Dashboard HTTP handler and page layout.
//!
//! This module contains:
//! - The route handler for displaying the dashboard
//! - The view function that lays out the cards, charts, filter form and table
//! - The state used by the handler

use std::sync::Arc;

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time_tz::Tz;

use crate::{
    AppState, Error,
    dashboard::{
        cards::summary_cards_view,
        charts::{build_dashboard_charts, charts_head_elements, charts_view},
        filter_form::filter_form_view,
        model::DashboardModel,
        query::DashboardQuery,
        table::transactions_table_view,
    },
    endpoints,
    html::base,
    navigation::NavBar,
    pagination::PaginationConfig,
    timezone::get_local_timezone,
    transaction::Transaction,
};

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The normalized transactions shared by every request.
    pub transactions: Arc<[Transaction]>,
    /// The local timezone as a canonical timezone name, e.g. "America/Sao_Paulo".
    pub local_timezone: String,
    /// The config that controls how to display pages of transactions.
    pub pagination_config: PaginationConfig,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transactions: state.transactions.clone(),
            local_timezone: state.local_timezone.clone(),
            pagination_config: state.pagination_config.clone(),
        }
    }
}

/// Display the dashboard for the filters and page in the query string.
///
/// # Errors
///
/// Returns [Error::InvalidTimezoneError] if the configured timezone is not a
/// canonical timezone name.
pub async fn get_dashboard_page(
    State(state): State<DashboardState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Response, Error> {
    let local_timezone = get_local_timezone(&state.local_timezone).ok_or_else(|| {
        tracing::error!("Invalid timezone {}", state.local_timezone);
        Error::InvalidTimezoneError(state.local_timezone.clone())
    })?;

    let filter = query.to_filter();
    let page = query.page(state.pagination_config.default_page);
    let model = DashboardModel::build(
        &state.transactions,
        &filter,
        page,
        &state.pagination_config,
        local_timezone,
    );
    tracing::debug!(
        "Dashboard page {} of {} with {} matching transactions",
        model.page,
        model.page_count,
        model.filtered_count
    );

    Ok(dashboard_view(
        NavBar::new(endpoints::DASHBOARD_VIEW),
        &model,
        &query,
        local_timezone,
    )
    .into_response())
}

/// Renders the dashboard page.
///
/// The charts are left out when no transaction matches the filters, the
/// table then shows the empty state instead.
fn dashboard_view(
    nav_bar: NavBar,
    model: &DashboardModel,
    query: &DashboardQuery,
    local_timezone: &Tz,
) -> Markup {
    let nav_bar = nav_bar.into_html();
    let charts = build_dashboard_charts(&model.breakdown, &model.monthly);

    let content = html!(
        (nav_bar)

        div
            id="dashboard-content"
            class="flex flex-col items-center px-2 lg:px-6 lg:py-8 pb-24 mx-auto
                max-w-screen-xl text-gray-900 dark:text-white"
        {
            h1 class="w-full text-2xl font-bold mb-4" { "Dashboard" }

            (filter_form_view(&model.options, query))

            (summary_cards_view(&model.totals))

            @if !model.is_empty() {
                (charts_view(&charts))
            }

            (transactions_table_view(model, query, local_timezone))
        }
    );

    if model.is_empty() {
        base("Dashboard", &[], &content)
    } else {
        base("Dashboard", &charts_head_elements(&charts), &content)
    }
}
