//! Session-cookie builders.
//!
//! All cookie attributes match the legacy server exactly: HTTP-only,
//! SameSite=Strict, Path=/, Secure only in production. Login sets a Max-Age;
//! refresh deliberately does not (the legacy server rewrote the cookie as a
//! browser-session cookie on refresh, and clients depend on that).

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

/// Cookie name for the session token.
pub const SESSION_COOKIE: &str = "token";

/// Set the session cookie with a Max-Age. Used by login.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use storefront_session::cookie::{SESSION_COOKIE, set_session_cookie};
///
/// let jar = set_session_cookie(CookieJar::new(), "token_value".to_string(), 3600, true);
/// let cookie = jar.get(SESSION_COOKIE).unwrap();
/// assert_eq!(cookie.path(), Some("/"));
/// assert_eq!(cookie.max_age(), Some(time::Duration::seconds(3600)));
/// assert!(cookie.http_only().unwrap_or(false));
/// assert!(cookie.secure().unwrap_or(false));
/// ```
pub fn set_session_cookie(jar: CookieJar, value: String, ttl_secs: u64, secure: bool) -> CookieJar {
    let cookie = Cookie::build((SESSION_COOKIE, value))
        .path("/")
        .max_age(Duration::seconds(ttl_secs as i64))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Strict)
        .build();
    jar.add(cookie)
}

/// Overwrite the session cookie without a Max-Age. Used by refresh.
///
/// The token inside carries a fresh `exp` claim; only the cookie lifetime
/// attribute differs from [`set_session_cookie`].
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use storefront_session::cookie::{SESSION_COOKIE, refresh_session_cookie};
///
/// let jar = refresh_session_cookie(CookieJar::new(), "new_value".to_string(), false);
/// let cookie = jar.get(SESSION_COOKIE).unwrap();
/// assert_eq!(cookie.path(), Some("/"));
/// assert_eq!(cookie.max_age(), None);
/// assert!(cookie.http_only().unwrap_or(false));
/// ```
pub fn refresh_session_cookie(jar: CookieJar, value: String, secure: bool) -> CookieJar {
    let cookie = Cookie::build((SESSION_COOKIE, value))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Strict)
        .build();
    jar.add(cookie)
}

/// Clear the session cookie by setting Max-Age to 0. Used by logout.
///
/// Only removes the client's copy; an already-issued token stays verifiable
/// until its `exp` elapses.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use storefront_session::cookie::{SESSION_COOKIE, clear_session_cookie, set_session_cookie};
///
/// let jar = set_session_cookie(CookieJar::new(), "t".to_string(), 3600, false);
/// let jar = clear_session_cookie(jar, false);
/// let cookie = jar.get(SESSION_COOKIE).unwrap();
/// assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
/// ```
pub fn clear_session_cookie(jar: CookieJar, secure: bool) -> CookieJar {
    let cookie = Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .max_age(Duration::ZERO)
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Strict)
        .build();
    jar.add(cookie)
}
