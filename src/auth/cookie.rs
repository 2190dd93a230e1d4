//! Defines functions for handling the session cookie.

use axum_extra::extract::{
    PrivateCookieJar,
    cookie::{Cookie, SameSite},
};
use time::{Duration, OffsetDateTime};

use crate::Error;

/// The name of the cookie that marks a session as logged in.
pub(crate) const COOKIE_AUTH: &str = "auth";
const AUTH_COOKIE_VALUE: &str = "true";
/// The default duration for which auth cookies are valid.
pub(crate) const DEFAULT_COOKIE_DURATION: Duration = Duration::minutes(30);

fn build_auth_cookie(value: &str, expiry: OffsetDateTime) -> Cookie<'static> {
    Cookie::build((COOKIE_AUTH, value.to_owned()))
        .path("/")
        .expires(expiry)
        .http_only(true)
        .same_site(SameSite::Strict)
        .secure(true)
        .build()
}

/// Add the auth cookie to the cookie jar, marking the session as logged in.
///
/// The cookie expires `duration` from now.
pub(crate) fn set_auth_cookie(jar: PrivateCookieJar, duration: Duration) -> PrivateCookieJar {
    let expiry = OffsetDateTime::now_utc().saturating_add(duration);

    jar.add(build_auth_cookie(AUTH_COOKIE_VALUE, expiry))
}

/// Set the auth cookie to an invalid value and set its max age to zero, which should delete the cookie on the client side.
pub(crate) fn invalidate_auth_cookie(jar: PrivateCookieJar) -> PrivateCookieJar {
    let mut cookie = build_auth_cookie("deleted", OffsetDateTime::UNIX_EPOCH);
    cookie.set_max_age(Duration::ZERO);

    jar.add(cookie)
}

/// Whether `jar` holds a valid auth cookie.
///
/// Private cookies that were tampered with or encrypted with another key
/// never reach this point, since the jar drops cookies it cannot decrypt.
pub(crate) fn is_authenticated(jar: &PrivateCookieJar) -> bool {
    jar.get(COOKIE_AUTH)
        .is_some_and(|cookie| cookie.value_trimmed() == AUTH_COOKIE_VALUE)
}

/// Push the expiry of the auth cookie in `jar` out to `duration` from now.
///
/// # Errors
///
/// Returns [Error::CookieMissing] if there is no valid auth cookie in `jar`.
/// The cookie jar is not modified if an error is returned.
pub(crate) fn extend_auth_cookie(
    jar: PrivateCookieJar,
    duration: Duration,
) -> Result<PrivateCookieJar, Error> {
    if !is_authenticated(&jar) {
        return Err(Error::CookieMissing);
    }

    Ok(set_auth_cookie(jar, duration))
}
