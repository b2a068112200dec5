// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP vocabulary shared by the filter
//!
//! Header names and `Set-Cookie` parsing for the session summary.

mod cookie;

pub use cookie::{SameSite, SessionCookie, SessionCookies};

/// Common HTTP headers, lowercase
pub mod headers {
    pub const CONTENT_TYPE: &str = "content-type";
    pub const SET_COOKIE: &str = "set-cookie";
    pub const LOCATION: &str = "location";
    pub const COOKIE: &str = "cookie";
    pub const AUTHORIZATION: &str = "authorization";
}
