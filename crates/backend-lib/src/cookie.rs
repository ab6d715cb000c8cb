// ============================
// crates/backend-lib/src/cookie.rs
// ============================
//! Session cookie building and parsing.
//!
//! The session token travels in a single named cookie. Outbound values are
//! assembled here so every handler sets the same attributes; inbound parsing
//! tolerates whatever else the browser sends alongside.

use axum::http::{header, HeaderMap};
use std::fmt;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "session_id";

/// `SameSite` cookie attribute values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SameSite::Strict => write!(f, "Strict"),
            SameSite::Lax => write!(f, "Lax"),
            SameSite::None => write!(f, "None"),
        }
    }
}

/// Attributes applied to the session cookie.
#[derive(Debug, Clone)]
pub struct CookieOptions {
    pub path: &'static str,
    pub http_only: bool,
    pub same_site: SameSite,
    /// Off by default; the dev setup has no TLS termination.
    pub secure: bool,
    pub max_age: u64,
}

impl Default for CookieOptions {
    fn default() -> Self {
        Self {
            path: "/",
            http_only: true,
            same_site: SameSite::Lax,
            secure: false,
            max_age: 0,
        }
    }
}

fn build(name: &str, value: &str, opts: &CookieOptions) -> String {
    let mut cookie = format!("{name}={value}; Path={}", opts.path);
    if opts.http_only {
        cookie.push_str("; HttpOnly");
    }
    cookie.push_str(&format!("; SameSite={}", opts.same_site));
    if opts.secure {
        cookie.push_str("; Secure");
    }
    cookie.push_str(&format!("; Max-Age={}", opts.max_age));
    cookie
}

/// `Set-Cookie` value carrying a freshly issued session token.
pub fn session_cookie(token: &str, max_age: u64) -> String {
    build(
        SESSION_COOKIE,
        token,
        &CookieOptions {
            max_age,
            ..CookieOptions::default()
        },
    )
}

/// `Set-Cookie` value that clears the session cookie.
pub fn clear_session_cookie() -> String {
    build(SESSION_COOKIE, "", &CookieOptions::default())
}

/// Extract the session token from the inbound `Cookie` header(s).
pub fn extract_session_id(headers: &HeaderMap) -> Option<String> {
    for header_value in headers.get_all(header::COOKIE) {
        let Ok(raw) = header_value.to_str() else {
            continue;
        };
        for pair in raw.split(';') {
            if let Some((name, value)) = pair.trim().split_once('=') {
                if name == SESSION_COOKIE && !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("abc-123", 3600);
        assert!(cookie.starts_with("session_id=abc-123"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Max-Age=3600"));
        assert!(!cookie.contains("Secure"));
    }

    #[test]
    fn test_clear_cookie_expires_immediately() {
        let cookie = clear_session_cookie();
        assert!(cookie.starts_with("session_id=;"));
        assert!(cookie.contains("Max-Age=0"));
    }

    #[test]
    fn test_extract_finds_token_among_other_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; session_id=tok-42; lang=en"),
        );
        assert_eq!(extract_session_id(&headers).as_deref(), Some("tok-42"));
    }

    #[test]
    fn test_extract_absent_or_empty() {
        let headers = HeaderMap::new();
        assert!(extract_session_id(&headers).is_none());

        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("session_id="));
        assert!(extract_session_id(&headers).is_none());

        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("theme=dark"));
        assert!(extract_session_id(&headers).is_none());
    }

    #[test]
    fn test_extract_scans_multiple_cookie_headers() {
        let mut headers = HeaderMap::new();
        headers.append(header::COOKIE, HeaderValue::from_static("theme=dark"));
        headers.append(
            header::COOKIE,
            HeaderValue::from_static("session_id=tok-7"),
        );
        assert_eq!(extract_session_id(&headers).as_deref(), Some("tok-7"));
    }

    #[test]
    fn test_same_site_display() {
        assert_eq!(SameSite::Strict.to_string(), "Strict");
        assert_eq!(SameSite::Lax.to_string(), "Lax");
        assert_eq!(SameSite::None.to_string(), "None");
    }
}
