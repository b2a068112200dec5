// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Noise MIME type classification

use serde::{Deserialize, Serialize};

/// Content types dropped unless the response sets a cookie.
/// `text/html` is here on purpose: pages are markup, not API traffic.
pub const DEFAULT_NOISE_MIME_PREFIXES: &[&str] = &[
    "text/css",
    "text/html",
    "application/javascript",
    "application/x-javascript",
    "font/woff",
    "font/woff2",
    "image/",
    "text/plain",
];

/// Prefix matcher over declared response MIME types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MimeClassifier {
    prefixes: Vec<String>,
}

impl Default for MimeClassifier {
    fn default() -> Self {
        Self::with_prefixes(DEFAULT_NOISE_MIME_PREFIXES.iter().copied())
    }
}

impl MimeClassifier {
    /// Classifier over the default noise set
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifier over a custom prefix set
    pub fn with_prefixes<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether a declared MIME type is noise. Empty is never noise.
    pub fn is_noise(&self, mime_type: &str) -> bool {
        if mime_type.is_empty() {
            return false;
        }
        self.prefixes.iter().any(|p| mime_type.starts_with(p.as_str()))
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }
}

/// [`MimeClassifier::is_noise`] over the default prefix set
pub fn is_noise(mime_type: &str) -> bool {
    !mime_type.is_empty()
        && DEFAULT_NOISE_MIME_PREFIXES
            .iter()
            .any(|p| mime_type.starts_with(p))
}
