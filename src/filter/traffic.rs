// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Two-pass traffic filter
//!
//! Pass 1 selects records: off-domain and noise records are dropped, unless
//! the response sets a cookie. Pass 2 projects each survivor down to the
//! fields worth keeping and truncates oversized body text. Request headers
//! are always copied in full since they are what a replay needs.

use serde_json::{Map, Value};

use super::config::FilterConfig;
use super::report::{DropReason, FilterReport};
use crate::capture::{Capture, Content, PostData, Record, RequestInfo, ResponseInfo};
use crate::domain::{self, DomainInference};
use crate::error::Result;
use crate::http::{headers, SessionCookies};

/// Pass 1 verdict for a single record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Record is on-domain and not noise
    Keep,
    /// Record would have been dropped but its response sets a cookie
    KeepForCookie(DropReason),
    /// Record is dropped
    Drop(DropReason),
}

/// Result of filtering a capture
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    /// The reduced capture
    pub capture: Capture,
    /// What happened along the way
    pub report: FilterReport,
}

/// Reduces a capture to the traffic that matters for its primary domain
#[derive(Debug, Clone, Default)]
pub struct TrafficFilter {
    config: FilterConfig,
}

impl TrafficFilter {
    /// Create a filter with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filter bound to a configuration
    pub fn with_config(config: FilterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Infer the primary domain, then filter
    pub fn filter(&self, capture: &Capture) -> Result<FilterOutcome> {
        capture.entries()?;

        let inference = self.config.inferencer().infer(capture);
        if inference.is_determined() {
            tracing::info!(
                primary_domain = %inference.domain,
                source = ?inference.source,
                "Identified primary domain"
            );
        } else {
            tracing::warn!("Could not determine primary domain; filtering by content type only");
        }

        self.filter_with_domain(capture, &inference)
    }

    /// Filter against an already known primary domain
    pub fn filter_with_domain(
        &self,
        capture: &Capture,
        inference: &DomainInference,
    ) -> Result<FilterOutcome> {
        let records = capture.entries()?;
        let mut report = FilterReport::new(inference, records.len());
        let mut cookies = SessionCookies::new();
        let mut kept = Vec::new();

        for record in records {
            let selection = self.select(record, &inference.domain);
            match selection {
                Selection::Drop(reason) => {
                    tracing::debug!(
                        url = record.request.url.as_deref().unwrap_or(""),
                        reason = ?reason,
                        "Dropped record"
                    );
                    report.record_drop(reason);
                    continue;
                }
                Selection::KeepForCookie(_) => report.kept_for_cookie += 1,
                Selection::Keep => {}
            }

            let (projected, truncated) = self.project(record);
            report.truncated_fields += truncated;
            report.record_started(record.started());
            if record
                .request
                .headers
                .iter()
                .any(|h| h.is(headers::COOKIE) || h.is(headers::AUTHORIZATION))
            {
                report.authenticated_requests += 1;
            }
            let host = record.host();
            for value in record.response.header_values(headers::SET_COOKIE) {
                cookies.add_from_header(value, &host);
            }

            kept.push(projected);
        }

        report.kept_records = kept.len();
        report.cookies = cookies.into_vec();
        tracing::info!(
            kept = report.kept_records,
            total = report.total_records,
            "Filtering complete"
        );

        Ok(FilterOutcome {
            capture: capture.with_entries(kept),
            report,
        })
    }

    /// Pass 1: decide whether a record survives.
    ///
    /// The domain check runs on the URL authority as written, so a port or
    /// upper-case letters after the primary domain make the record off-domain.
    /// An empty primary domain disables the check.
    pub fn select(&self, record: &Record, primary_domain: &str) -> Selection {
        let reason = if !primary_domain.is_empty()
            && !domain::host_matches(record.netloc(), primary_domain)
        {
            Some(DropReason::OffDomain)
        } else if self.config.mime.is_noise(record.response.mime_type()) {
            Some(DropReason::NoiseMime)
        } else {
            None
        };

        match reason {
            None => Selection::Keep,
            Some(reason) if record.sets_cookie() => Selection::KeepForCookie(reason),
            Some(reason) => Selection::Drop(reason),
        }
    }

    /// Pass 2: build the trimmed copy of a record. Returns the copy and the
    /// number of body texts that were truncated.
    pub fn project(&self, record: &Record) -> (Record, usize) {
        let truncator = &self.config.truncator;
        let mut truncated = 0;

        let post_data = record.request.post_data.clone().map(|post_data| match post_data {
            PostData::Structured(mut body) => {
                if let Some(text) = body.text.as_mut() {
                    truncated += usize::from(truncator.truncate_value(text));
                }
                PostData::Structured(body)
            }
            raw => raw,
        });

        let mut content: Content = record.response.content.clone();
        let text = content
            .text
            .get_or_insert_with(|| Value::String(String::new()));
        truncated += usize::from(truncator.truncate_value(text));

        let projected = Record {
            started_date_time: record.started_date_time.clone(),
            request: RequestInfo {
                method: record.request.method.clone(),
                url: record.request.url.clone(),
                headers: record.request.headers.clone(),
                post_data,
                extra: Map::new(),
            },
            response: ResponseInfo {
                status: record.response.status.clone(),
                status_text: record.response.status_text.clone(),
                headers: record
                    .response
                    .headers
                    .iter()
                    .filter(|h| self.config.keeps_response_header(&h.name))
                    .cloned()
                    .collect(),
                content,
                extra: Map::new(),
            },
            extra: Map::new(),
        };

        (projected, truncated)
    }
}
