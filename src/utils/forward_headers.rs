//! Allow-listed header forwarding for backend calls.

use axum::http::{
    HeaderMap, HeaderName, HeaderValue,
    header::{CONTENT_TYPE, COOKIE},
};

/// Inbound headers copied verbatim onto backend requests when present.
pub const FORWARDED_HEADERS: &[&str] = &[
    "authorization",
    "x-vercel-protection-bypass",
    "x-vercel-auth",
];

/// One `name=value` pair from the inbound `Cookie` header(s).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestCookie {
    pub name: String,
    pub value: String,
}

impl RequestCookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Parses every `Cookie` header into name/value pairs.
///
/// Fragments without `=` or with an empty name are skipped.
pub fn parse_cookies(headers: &HeaderMap) -> Vec<RequestCookie> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|raw| raw.split(';'))
        .filter_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            let name = name.trim();
            (!name.is_empty()).then(|| RequestCookie::new(name, value.trim()))
        })
        .collect()
}

/// Builds the outbound header map for a backend call.
///
/// Always sets `Content-Type: application/json`. The `cookie` header is
/// rebuilt from `cookies` joined with `"; "`; when `cookies` is empty the raw
/// inbound header is passed through instead.
pub fn forward_headers(inbound: &HeaderMap, cookies: &[RequestCookie]) -> HeaderMap {
    let mut outbound = HeaderMap::new();
    outbound.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    for name in FORWARDED_HEADERS {
        if let Some(value) = inbound.get(*name) {
            outbound.insert(HeaderName::from_static(*name), value.clone());
        }
    }

    let cookie = if cookies.is_empty() {
        inbound.get(COOKIE).cloned()
    } else {
        let joined = cookies
            .iter()
            .map(|c| format!("{}={}", c.name, c.value))
            .collect::<Vec<_>>()
            .join("; ");

        HeaderValue::from_str(&joined)
            .ok()
            .or_else(|| inbound.get(COOKIE).cloned())
    };

    if let Some(cookie) = cookie {
        outbound.insert(COOKIE, cookie);
    }

    outbound
}

/// [`forward_headers`] with cookies parsed from `inbound` itself.
pub fn forwarded_headers(inbound: &HeaderMap) -> HeaderMap {
    forward_headers(inbound, &parse_cookies(inbound))
}
