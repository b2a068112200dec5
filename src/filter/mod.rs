// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Traffic classification, selection and trimming

mod config;
mod mime;
mod report;
mod traffic;
mod truncate;

pub use config::{FilterConfig, DEFAULT_RESPONSE_HEADER_ALLOWLIST};
pub use mime::{is_noise, MimeClassifier, DEFAULT_NOISE_MIME_PREFIXES};
pub use report::{DropReason, FilterReport};
pub use traffic::{FilterOutcome, Selection, TrafficFilter};
pub use truncate::{truncate, TextTruncator, DEFAULT_KEEP, DEFAULT_THRESHOLD, TRUNCATION_MARKER};

use crate::capture::Capture;
use crate::error::Result;

/// Filter HAR JSON text with the default configuration and return the
/// reduced capture as indented JSON
pub fn filter_json(json: &str) -> Result<String> {
    let capture = Capture::from_json(json)?;
    TrafficFilter::new().filter(&capture)?.capture.to_json_pretty()
}
