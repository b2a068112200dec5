// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Filter configuration

use crate::domain::{DomainInferencer, ScoreWeights, DEFAULT_SCAN_LIMIT};
use crate::error::{Error, Result};
use crate::http::headers;

use super::mime::MimeClassifier;
use super::truncate::TextTruncator;

/// Response headers kept in the output, matched case-insensitively
pub const DEFAULT_RESPONSE_HEADER_ALLOWLIST: &[&str] =
    &[headers::CONTENT_TYPE, headers::SET_COOKIE, headers::LOCATION];

/// Filter configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    /// Noise MIME classification
    pub mime: MimeClassifier,
    /// Response headers to keep
    pub response_header_allowlist: Vec<String>,
    /// Body text truncation
    pub truncator: TextTruncator,
    /// Domain score weights
    pub weights: ScoreWeights,
    /// Records scanned for domain scoring
    pub scan_limit: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            mime: MimeClassifier::default(),
            response_header_allowlist: DEFAULT_RESPONSE_HEADER_ALLOWLIST
                .iter()
                .map(|h| h.to_string())
                .collect(),
            truncator: TextTruncator::default(),
            weights: ScoreWeights::default(),
            scan_limit: DEFAULT_SCAN_LIMIT,
        }
    }
}

impl FilterConfig {
    /// Create a new filter config
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the noise MIME prefixes
    pub fn noise_mime_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mime = MimeClassifier::with_prefixes(prefixes);
        self
    }

    /// Replace the response header allow-list
    pub fn response_headers<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.response_header_allowlist = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set truncation limits
    pub fn truncation(mut self, threshold: usize, keep: usize) -> Self {
        self.truncator = TextTruncator::new(threshold, keep);
        self
    }

    /// Set domain score weights
    pub fn weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Set how many leading records are scored
    pub fn scan_limit(mut self, limit: usize) -> Self {
        self.scan_limit = limit;
        self
    }

    /// Check the config can be applied
    pub fn validate(&self) -> Result<()> {
        if self.truncator.keep > self.truncator.threshold {
            return Err(Error::invalid_config(format!(
                "truncation keep ({}) exceeds threshold ({})",
                self.truncator.keep, self.truncator.threshold
            )));
        }
        Ok(())
    }

    /// Whether a response header survives projection
    pub fn keeps_response_header(&self, name: &str) -> bool {
        self.response_header_allowlist
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(name))
    }

    /// Domain inferencer bound to this config
    pub fn inferencer(&self) -> DomainInferencer {
        DomainInferencer::new()
            .weights(self.weights)
            .scan_limit(self.scan_limit)
    }
}
