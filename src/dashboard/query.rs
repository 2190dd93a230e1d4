//! The dashboard's query string: the active filter and the requested page.

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};

use crate::transaction::{TransactionFilter, TransactionType};

/// The date format used by the date inputs in the filter form, e.g. "2024-01-31".
const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// The raw query parameters of the dashboard page.
///
/// Every field is kept as the string the browser sent. Empty strings come
/// from untouched form controls and mean "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardQuery {
    /// "deposit" or "withdraw".
    #[serde(rename = "type", default, skip_serializing_if = "is_blank")]
    pub transaction_type: Option<String>,
    /// The state to show.
    #[serde(default, skip_serializing_if = "is_blank")]
    pub state: Option<String>,
    /// The industry to show.
    #[serde(default, skip_serializing_if = "is_blank")]
    pub industry: Option<String>,
    /// The account to show.
    #[serde(default, skip_serializing_if = "is_blank")]
    pub account: Option<String>,
    /// The earliest date to show, "YYYY-MM-DD".
    #[serde(default, skip_serializing_if = "is_blank")]
    pub start_date: Option<String>,
    /// The latest date to show, "YYYY-MM-DD".
    #[serde(default, skip_serializing_if = "is_blank")]
    pub end_date: Option<String>,
    /// The page number, starting from 1.
    #[serde(default, skip_serializing_if = "is_blank")]
    pub page: Option<String>,
}

fn is_blank(value: &Option<String>) -> bool {
    non_blank(value).is_none()
}

/// The value as sent, unless it is missing or only whitespace.
///
/// Categorical values are matched exactly, so they are not trimmed here.
fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.trim().is_empty())
}

impl DashboardQuery {
    /// Convert the query into a [TransactionFilter].
    ///
    /// Values that cannot be parsed are logged and ignored, so the
    /// corresponding constraint is left unset. Dates are interpreted as
    /// midnight UTC.
    pub fn to_filter(&self) -> TransactionFilter {
        let transaction_type = non_blank(&self.transaction_type).and_then(|value| {
            match TransactionType::parse(value.trim()) {
                Some(transaction_type) => Some(transaction_type),
                None => {
                    tracing::warn!("Ignoring invalid transaction type filter \"{value}\"");
                    None
                }
            }
        });

        TransactionFilter {
            transaction_type,
            state: non_blank(&self.state).map(str::to_owned),
            industry: non_blank(&self.industry).map(str::to_owned),
            account: non_blank(&self.account).map(str::to_owned),
            start_date: non_blank(&self.start_date)
                .and_then(|value| parse_date(value.trim(), "start")),
            end_date: non_blank(&self.end_date)
                .and_then(|value| parse_date(value.trim(), "end")),
        }
    }

    /// The requested page, or `default_page` if it is missing or invalid.
    pub fn page(&self, default_page: u64) -> u64 {
        match non_blank(&self.page) {
            Some(value) => value.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid page number \"{value}\"");
                default_page
            }),
            None => default_page,
        }
    }

    /// Copy the query with `page` as the requested page.
    pub fn with_page(&self, page: u64) -> Self {
        Self {
            page: Some(page.to_string()),
            ..self.clone()
        }
    }

    /// Build a URL to `route` with this query, leaving out blank values.
    pub fn to_url(&self, route: &str) -> String {
        match serde_urlencoded::to_string(self) {
            Ok(query) if query.is_empty() => route.to_owned(),
            Ok(query) => format!("{route}?{query}"),
            Err(error) => {
                tracing::error!("Could not encode dashboard query {self:?}: {error}");
                route.to_owned()
            }
        }
    }

    /// The value to show in a form control, or an empty string.
    pub fn value_of(value: &Option<String>) -> &str {
        non_blank(value).unwrap_or_default()
    }
}

fn parse_date(value: &str, bound: &str) -> Option<OffsetDateTime> {
    match Date::parse(value, DATE_FORMAT) {
        Ok(date) => Some(date.midnight().assume_utc()),
        Err(error) => {
            tracing::warn!("Ignoring invalid {bound} date \"{value}\": {error}");
            None
        }
    }
}
