// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # harsift - Traffic Reduction for Browser Captures
//!
//! Takes a full HAR capture of a browser session and keeps only what matters
//! for understanding the site's backend: requests to the session's primary
//! domain, minus styling, scripts, fonts and images, with every
//! cookie-setting exchange preserved so authentication flows stay intact.
//!
//! ## Pipeline
//!
//! - Domain inference: first page title URL, else a scored vote over request
//!   hosts, else the first record
//! - Pass 1: drop off-domain and noise records unless they set a cookie
//! - Pass 2: keep request headers in full, keep only `content-type`,
//!   `set-cookie` and `location` response headers, truncate large bodies
//!
//! ## Example
//!
//! ```rust,no_run
//! use harsift::{Capture, TrafficFilter};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let capture = Capture::from_path("session.har")?;
//!     let outcome = TrafficFilter::new().filter(&capture)?;
//!
//!     println!("{}", outcome.report.summary());
//!     outcome.capture.write_to_path("session_filtered.har")?;
//!
//!     Ok(())
//! }
//! ```

pub mod capture;
pub mod domain;
pub mod error;
pub mod filter;
pub mod http;

// Re-exports for convenience

// Capture model
pub use capture::{clip_strings, Capture, HeaderEntry, Page, Record, RequestInfo, ResponseInfo};

// Domain inference
pub use domain::{coarse_domain, DomainInference, DomainInferencer, DomainSource, ScoreWeights};

// Errors
pub use error::{Error, Result};

// Filtering
pub use filter::{
    filter_json, FilterConfig, FilterOutcome, FilterReport, MimeClassifier, TextTruncator,
    TrafficFilter,
};

// HTTP
pub use http::{SessionCookie, SessionCookies};
