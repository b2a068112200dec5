// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Per-run filter report

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::domain::{DomainInference, DomainSource};
use crate::http::SessionCookie;

/// Why pass 1 dropped a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    /// Request host does not end with the primary domain
    OffDomain,
    /// Response content type is noise
    NoiseMime,
}

/// Summary of one filter run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterReport {
    /// Primary domain the run pivoted on, empty if undetermined
    pub primary_domain: String,
    /// Where the primary domain came from
    pub domain_source: DomainSource,
    /// Records in the input
    pub total_records: usize,
    /// Records in the output
    pub kept_records: usize,
    /// Records dropped for their host
    pub dropped_off_domain: usize,
    /// Records dropped for their content type
    pub dropped_noise: usize,
    /// Records that would have been dropped but set a cookie
    pub kept_for_cookie: usize,
    /// Body texts shortened in the output
    pub truncated_fields: usize,
    /// Kept requests carrying `Cookie` or `Authorization`
    pub authenticated_requests: usize,
    /// Cookies established by kept responses
    pub cookies: Vec<SessionCookie>,
    /// Earliest start time among kept records
    pub first_started: Option<DateTime<FixedOffset>>,
    /// Latest start time among kept records
    pub last_started: Option<DateTime<FixedOffset>>,
}

impl FilterReport {
    pub(crate) fn new(inference: &DomainInference, total_records: usize) -> Self {
        Self {
            primary_domain: inference.domain.clone(),
            domain_source: inference.source,
            total_records,
            kept_records: 0,
            dropped_off_domain: 0,
            dropped_noise: 0,
            kept_for_cookie: 0,
            truncated_fields: 0,
            authenticated_requests: 0,
            cookies: Vec::new(),
            first_started: None,
            last_started: None,
        }
    }

    pub(crate) fn record_drop(&mut self, reason: DropReason) {
        match reason {
            DropReason::OffDomain => self.dropped_off_domain += 1,
            DropReason::NoiseMime => self.dropped_noise += 1,
        }
    }

    pub(crate) fn record_started(&mut self, started: Option<&str>) {
        let Some(started) = started.and_then(|s| DateTime::parse_from_rfc3339(s).ok()) else {
            return;
        };
        if self.first_started.map_or(true, |first| started < first) {
            self.first_started = Some(started);
        }
        if self.last_started.map_or(true, |last| started > last) {
            self.last_started = Some(started);
        }
    }

    /// Records removed in pass 1
    pub fn dropped_records(&self) -> usize {
        self.dropped_off_domain + self.dropped_noise
    }

    /// Milliseconds between the first and last kept record
    pub fn session_span_ms(&self) -> Option<i64> {
        match (self.first_started, self.last_started) {
            (Some(first), Some(last)) => Some((last - first).num_milliseconds()),
            _ => None,
        }
    }

    /// One-line human summary
    pub fn summary(&self) -> String {
        let domain = if self.primary_domain.is_empty() {
            "<none>"
        } else {
            self.primary_domain.as_str()
        };
        format!(
            "Kept {} out of {} records (primary domain: {}, {} off-domain, {} noise, {} kept for cookies)",
            self.kept_records,
            self.total_records,
            domain,
            self.dropped_off_domain,
            self.dropped_noise,
            self.kept_for_cookie
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> FilterReport {
        let inference = DomainInference {
            domain: "example.com".to_string(),
            source: DomainSource::PageTitle,
        };
        FilterReport::new(&inference, 4)
    }

    #[test]
    fn test_drop_counts() {
        let mut report = report();
        report.record_drop(DropReason::OffDomain);
        report.record_drop(DropReason::NoiseMime);
        report.record_drop(DropReason::NoiseMime);

        assert_eq!(report.dropped_off_domain, 1);
        assert_eq!(report.dropped_noise, 2);
        assert_eq!(report.dropped_records(), 3);
    }

    #[test]
    fn test_session_window() {
        let mut report = report();
        report.record_started(Some("2024-05-01T10:00:01.500Z"));
        report.record_started(Some("2024-05-01T10:00:00.000Z"));
        report.record_started(Some("not a date"));
        report.record_started(None);

        assert_eq!(report.session_span_ms(), Some(1500));
    }

    #[test]
    fn test_summary() {
        let mut report = report();
        report.kept_records = 2;
        assert!(report.summary().starts_with("Kept 2 out of 4 records (primary domain: example.com"));
    }
}
