//! Session handling: the log-in and log-out routes, the auth cookie and the
//! middleware that guards protected pages.

mod cookie;
mod credentials;
mod log_in;
mod log_out;
mod middleware;
mod redirect;

pub(crate) use cookie::DEFAULT_COOKIE_DURATION;
pub use credentials::{Credentials, DEMO_EMAIL, DEMO_PASSWORD};
pub use log_in::{get_log_in_page, post_log_in};
pub use log_out::get_log_out;
pub use middleware::auth_guard;

#[cfg(test)]
pub(crate) use cookie::COOKIE_AUTH;
