//! The public landing page.

use axum::response::{IntoResponse, Response};
use maud::html;

use crate::{
    endpoints,
    html::{BUTTON_SECONDARY_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, base},
};

/// Display the welcome message and a link to the dashboard.
pub async fn get_home_page() -> Response {
    let content = html!(
        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="max-w-xl mt-16 text-center space-y-6"
            {
                h1 class="text-4xl font-bold tracking-tight" { "Finance Dashboard" }

                p class="text-lg text-gray-600 dark:text-gray-400"
                {
                    "Track money coming in and going out across accounts, industries and states."
                }

                a
                    href=(endpoints::DASHBOARD_VIEW)
                    role="button"
                    class=(BUTTON_SECONDARY_STYLE)
                {
                    "Go to the dashboard"
                }

                p class="text-sm text-gray-500 dark:text-gray-400"
                {
                    "You will be asked to "
                    a href=(endpoints::LOG_IN_VIEW) class=(LINK_STYLE) { "log in" }
                    " first."
                }
            }
        }
    );

    base("Home", &[], &content).into_response()
}

#[cfg(test)]
mod home_tests {
    use scraper::Selector;

    use crate::{
        endpoints,
        home::get_home_page,
        test_utils::{assert_status_ok, assert_valid_html, parse_html_document},
    };

    #[tokio::test]
    async fn home_page_links_to_dashboard() {
        let response = get_home_page().await;

        assert_status_ok(&response);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let selector = Selector::parse("a[role='button']").unwrap();
        let buttons: Vec<_> = html
            .select(&selector)
            .map(|button| button.value().attr("href").unwrap())
            .collect();
        assert_eq!(buttons, [endpoints::DASHBOARD_VIEW]);
    }
}
