// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Session cookie summary built from `Set-Cookie` response headers
//!
//! Cookie values are never stored: the summary names which cookies a session
//! establishes, not their secrets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A cookie established by a response in the capture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCookie {
    /// Cookie name
    pub name: String,
    /// Domain the cookie belongs to
    pub domain: String,
    /// Path the cookie is valid for
    pub path: String,
    /// Expiration time from the `Expires` attribute
    pub expires: Option<DateTime<Utc>>,
    /// Lifetime in seconds from the `Max-Age` attribute
    pub max_age: Option<i64>,
    /// Secure flag (HTTPS only)
    pub secure: bool,
    /// HttpOnly flag (not accessible via JavaScript)
    pub http_only: bool,
    /// SameSite attribute
    pub same_site: SameSite,
}

/// SameSite cookie attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SameSite {
    /// Attribute absent
    #[default]
    Unspecified,
    /// Cookie sent with all requests
    None,
    /// Cookie sent with same-site and top-level navigations
    Lax,
    /// Cookie only sent with same-site requests
    Strict,
}

impl SessionCookie {
    /// Parse one `Set-Cookie` value. `host` is the request host and is used
    /// when the cookie has no `Domain` attribute.
    pub fn parse(header: &str, host: &str) -> Option<Self> {
        let mut parts = header.split(';');
        let first = parts.next()?.trim();

        let (name, _) = first.split_once('=')?;
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let mut cookie = SessionCookie {
            name: name.to_string(),
            domain: host.to_string(),
            path: "/".to_string(),
            expires: None,
            max_age: None,
            secure: false,
            http_only: false,
            same_site: SameSite::default(),
        };

        for part in parts {
            let part = part.trim();
            if let Some((attr, val)) = part.split_once('=') {
                let attr = attr.trim().to_lowercase();
                let val = val.trim();
                match attr.as_str() {
                    "domain" => cookie.domain = val.trim_start_matches('.').to_lowercase(),
                    "path" => cookie.path = val.to_string(),
                    "expires" => {
                        if let Ok(dt) = DateTime::parse_from_rfc2822(val) {
                            cookie.expires = Some(dt.with_timezone(&Utc));
                        }
                    }
                    "max-age" => cookie.max_age = val.parse::<i64>().ok(),
                    "samesite" => {
                        cookie.same_site = match val.to_lowercase().as_str() {
                            "strict" => SameSite::Strict,
                            "lax" => SameSite::Lax,
                            "none" => SameSite::None,
                            _ => SameSite::Unspecified,
                        };
                    }
                    _ => {}
                }
            } else {
                match part.to_lowercase().as_str() {
                    "secure" => cookie.secure = true,
                    "httponly" => cookie.http_only = true,
                    _ => {}
                }
            }
        }

        Some(cookie)
    }

    /// Parse a header value that may fold several cookies onto separate
    /// lines, as Chromium-based capture tools do
    pub fn parse_all(header: &str, host: &str) -> Vec<Self> {
        header
            .lines()
            .filter_map(|line| Self::parse(line, host))
            .collect()
    }

    /// Session cookies have neither `Expires` nor `Max-Age`
    pub fn is_session(&self) -> bool {
        self.expires.is_none() && self.max_age.is_none()
    }
}

/// Ordered set of cookies keyed by (name, domain, path); a later cookie
/// replaces an earlier one with the same key
#[derive(Debug, Clone, Default)]
pub struct SessionCookies {
    cookies: Vec<SessionCookie>,
}

impl SessionCookies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cookie
    pub fn add(&mut self, cookie: SessionCookie) {
        self.cookies.retain(|c| {
            c.name != cookie.name || c.domain != cookie.domain || c.path != cookie.path
        });
        self.cookies.push(cookie);
    }

    /// Add every cookie of a `Set-Cookie` header value
    pub fn add_from_header(&mut self, header: &str, host: &str) {
        for cookie in SessionCookie::parse_all(header, host) {
            self.add(cookie);
        }
    }

    pub fn into_vec(self) -> Vec<SessionCookie> {
        self.cookies
    }
}
