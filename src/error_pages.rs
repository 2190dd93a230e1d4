//! The full-page responses for missing pages and internal faults.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

/// A page explaining what went wrong and what the user can do about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorPage<'a> {
    /// The status code of the response, also shown as the page heading.
    pub status: StatusCode,
    /// What went wrong.
    pub description: &'a str,
    /// What the user can do about it.
    pub fix: &'a str,
}

impl ErrorPage<'_> {
    /// The page for an unexpected fault on the server.
    pub fn internal_server_error() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            description: "Sorry, something went wrong.",
            fix: "Try again later or check the server logs.",
        }
    }

    /// The page for a route that does not exist.
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            description: "Something's missing.",
            fix: "Sorry, we can't find that page. You'll find lots to explore on the home page.",
        }
    }
}

impl<'a> ErrorPage<'a> {
    /// Replace the description and fix shown on the page.
    pub fn with_message(self, description: &'a str, fix: &'a str) -> Self {
        Self {
            description,
            fix,
            ..self
        }
    }
}

impl IntoResponse for ErrorPage<'_> {
    fn into_response(self) -> Response {
        let title = self.status.canonical_reason().unwrap_or("Error");
        let header = self.status.as_str();

        (
            self.status,
            Html(error_view(title, header, self.description, self.fix).into_string()),
        )
            .into_response()
    }
}

/// Route handler for the internal server error page.
pub async fn get_internal_server_error_page() -> Response {
    ErrorPage::internal_server_error().into_response()
}

/// Fallback route handler for paths that match no route.
pub async fn get_404_not_found() -> Response {
    ErrorPage::not_found().into_response()
}
