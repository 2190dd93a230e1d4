//! The form for narrowing down the transactions shown on the dashboard.
//!
//! The form submits with GET so the active filters live in the URL and
//! survive reloads, bookmarks and pagination links.

use maud::{Markup, html};

use crate::{
    dashboard::{aggregation::FilterOptions, query::DashboardQuery},
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
    transaction::TransactionType,
};

/// Renders the filter form with the controls preset from `query`.
///
/// Submitting the form starts again from the first page.
pub(super) fn filter_form_view(options: &FilterOptions, query: &DashboardQuery) -> Markup {
    let type_options: Vec<(&str, &str)> = [TransactionType::Deposit, TransactionType::Withdraw]
        .iter()
        .map(|transaction_type| (transaction_type.as_str(), transaction_type.label()))
        .collect();
    let states = as_choices(&options.states);
    let industries = as_choices(&options.industries);
    let accounts = as_choices(&options.accounts);

    html! {
        form
            id="filter-form"
            method="get"
            action=(endpoints::DASHBOARD_VIEW)
            class="w-full mb-4 p-4 rounded-lg bg-gray-50 dark:bg-gray-800"
        {
            div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-6 gap-4"
            {
                (select_input(
                    "type",
                    "Type",
                    "All types",
                    &type_options,
                    DashboardQuery::value_of(&query.transaction_type),
                ))
                (select_input(
                    "state",
                    "State",
                    "All states",
                    &states,
                    DashboardQuery::value_of(&query.state),
                ))
                (select_input(
                    "industry",
                    "Industry",
                    "All industries",
                    &industries,
                    DashboardQuery::value_of(&query.industry),
                ))
                (select_input(
                    "account",
                    "Account",
                    "All accounts",
                    &accounts,
                    DashboardQuery::value_of(&query.account),
                ))
                (date_input("start_date", "From", DashboardQuery::value_of(&query.start_date)))
                (date_input("end_date", "To", DashboardQuery::value_of(&query.end_date)))
            }

            div class="flex gap-4 mt-4 items-center"
            {
                div class="w-40"
                {
                    button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Apply filters" }
                }

                a
                    href=(endpoints::DASHBOARD_VIEW)
                    role="button"
                    class=(BUTTON_SECONDARY_STYLE)
                {
                    "Clear"
                }
            }
        }
    }
}

fn as_choices(values: &[String]) -> Vec<(&str, &str)> {
    values
        .iter()
        .map(|value| (value.as_str(), value.as_str()))
        .collect()
}

/// A select with an empty "all" choice first, followed by `choices` as
/// (value, label) pairs.
fn select_input(
    name: &str,
    label: &str,
    all_label: &str,
    choices: &[(&str, &str)],
    selected: &str,
) -> Markup {
    html! {
        div
        {
            label for=(name) class=(FORM_LABEL_STYLE) { (label) }

            select id=(name) name=(name) class=(FORM_TEXT_INPUT_STYLE)
            {
                option value="" selected[selected.is_empty()] { (all_label) }

                @for (value, text) in choices {
                    option value=(value) selected[*value == selected] { (text) }
                }
            }
        }
    }
}

fn date_input(name: &str, label: &str, value: &str) -> Markup {
    html! {
        div
        {
            label for=(name) class=(FORM_LABEL_STYLE) { (label) }

            input
                type="date"
                id=(name)
                name=(name)
                value=(value)
                class=(FORM_TEXT_INPUT_STYLE);
        }
    }
}
