// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Request-cookie access for the token cookies.
//!
//! The cookie names are a deployment contract shared with the frontend:
//! the login flow sets `accessToken`, the wallet-linking flow sets
//! `walletToken`. Only request-cookie parsing lives here; this service
//! never sets cookies.

use axum::http::{header::COOKIE, HeaderMap};

/// Cookie carrying the session token.
pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";

/// Cookie carrying the linked-wallet token.
pub const WALLET_TOKEN_COOKIE: &str = "walletToken";

/// Look up a cookie value by name across all `Cookie` headers.
///
/// Returns the first match. Cookie values are returned as-is; token
/// cookies are base64url JWT segments and need no unescaping.
pub fn get_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            Some((key.trim(), value.trim()))
        })
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn finds_cookie_by_name() {
        let headers = headers_with_cookie("accessToken=abc.def.ghi");
        assert_eq!(get_cookie(&headers, ACCESS_TOKEN_COOKIE), Some("abc.def.ghi"));
    }

    #[test]
    fn finds_cookie_among_others() {
        let headers = headers_with_cookie("theme=dark; accessToken=t1; walletToken=t2");
        assert_eq!(get_cookie(&headers, ACCESS_TOKEN_COOKIE), Some("t1"));
        assert_eq!(get_cookie(&headers, WALLET_TOKEN_COOKIE), Some("t2"));
    }

    #[test]
    fn missing_cookie_returns_none() {
        let headers = headers_with_cookie("theme=dark");
        assert_eq!(get_cookie(&headers, ACCESS_TOKEN_COOKIE), None);

        assert_eq!(get_cookie(&HeaderMap::new(), ACCESS_TOKEN_COOKIE), None);
    }

    #[test]
    fn name_match_is_exact() {
        let headers = headers_with_cookie("accesstoken=t1; xaccessToken=t2");
        assert_eq!(get_cookie(&headers, ACCESS_TOKEN_COOKIE), None);
    }

    #[test]
    fn value_may_contain_equals_signs() {
        // Padded base64 segments carry '=' in the value.
        let headers = headers_with_cookie("accessToken=abc==");
        assert_eq!(get_cookie(&headers, ACCESS_TOKEN_COOKIE), Some("abc=="));
    }

    #[test]
    fn searches_across_multiple_cookie_headers() {
        let mut headers = HeaderMap::new();
        headers.append(COOKIE, HeaderValue::from_static("theme=dark"));
        headers.append(COOKIE, HeaderValue::from_static("accessToken=t1"));
        assert_eq!(get_cookie(&headers, ACCESS_TOKEN_COOKIE), Some("t1"));
    }
}
