// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Primary domain inference
//!
//! The page title is the strongest signal: capture tools title the first
//! page with the navigated URL. Without it, request hosts are scored and the
//! best scoring coarse domain wins, earliest seen on ties.

use serde::{Deserialize, Serialize};

use super::{coarse_domain, netloc_of};
use crate::capture::{Capture, Record};

/// Default number of records scanned when scoring
pub const DEFAULT_SCAN_LIMIT: usize = 500;

/// Points added to a domain for each record that requests it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Every record
    pub base: i64,
    /// Response declares `text/html`
    pub html: i64,
    /// Response carries `Set-Cookie`
    pub set_cookie: i64,
    /// Request method is exactly `GET`
    pub get: i64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            base: 1,
            html: 5,
            set_cookie: 4,
            get: 1,
        }
    }
}

impl ScoreWeights {
    /// Score of a single record
    pub fn score(&self, record: &Record) -> i64 {
        let mut score = self.base;
        if record.response.mime_type().starts_with("text/html") {
            score += self.html;
        }
        if record.sets_cookie() {
            score += self.set_cookie;
        }
        if record.request.is_get() {
            score += self.get;
        }
        score
    }
}

/// Where the primary domain came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainSource {
    /// First page title was a URL
    PageTitle,
    /// Highest scoring request domain
    Scored,
    /// Domain of the first record
    FirstRecord,
    /// Nothing usable; domain filtering is disabled
    Undetermined,
}

/// Inferred primary domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainInference {
    /// Coarse domain, empty when undetermined
    pub domain: String,
    /// How the domain was found
    pub source: DomainSource,
}

impl DomainInference {
    fn new(domain: impl Into<String>, source: DomainSource) -> Self {
        Self {
            domain: domain.into(),
            source,
        }
    }

    fn undetermined() -> Self {
        Self::new(String::new(), DomainSource::Undetermined)
    }

    /// Whether domain-based filtering applies
    pub fn is_determined(&self) -> bool {
        !self.domain.is_empty()
    }
}

/// Per-domain score totals in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainScores {
    scores: Vec<(String, i64)>,
}

impl DomainScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add points to a domain, appending it if unseen
    pub fn add(&mut self, domain: &str, points: i64) {
        match self.scores.iter_mut().find(|(d, _)| d == domain) {
            Some((_, total)) => *total += points,
            None => self.scores.push((domain.to_string(), points)),
        }
    }

    /// Highest total; the earliest seen domain wins ties
    pub fn leader(&self) -> Option<(&str, i64)> {
        let mut best: Option<(&str, i64)> = None;
        for (domain, total) in &self.scores {
            match best {
                Some((_, best_total)) if *total <= best_total => {}
                _ => best = Some((domain.as_str(), *total)),
            }
        }
        best
    }

    /// Total for a domain
    pub fn get(&self, domain: &str) -> Option<i64> {
        self.scores
            .iter()
            .find(|(d, _)| d == domain)
            .map(|(_, total)| *total)
    }

}

/// Decides which domain a capture is about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainInferencer {
    weights: ScoreWeights,
    scan_limit: usize,
}

impl Default for DomainInferencer {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            scan_limit: DEFAULT_SCAN_LIMIT,
        }
    }
}

impl DomainInferencer {
    /// Create an inferencer with default weights and scan limit
    pub fn new() -> Self {
        Self::default()
    }

    /// Set score weights
    pub fn weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Set how many leading records are scored
    pub fn scan_limit(mut self, limit: usize) -> Self {
        self.scan_limit = limit;
        self
    }

    /// Infer the primary domain of a capture. Never fails: a capture without
    /// records yields an undetermined domain.
    pub fn infer(&self, capture: &Capture) -> DomainInference {
        if let Some(title) = capture.first_page_title() {
            if title.starts_with("http") {
                return DomainInference::new(
                    coarse_domain(netloc_of(title)),
                    DomainSource::PageTitle,
                );
            }
        }

        let records = capture.entries().unwrap_or(&[]);

        if let Some((domain, _)) = self.scores(records).leader() {
            return DomainInference::new(domain, DomainSource::Scored);
        }

        match records.first() {
            Some(first) => {
                let domain = first.coarse_domain();
                if domain.is_empty() {
                    DomainInference::undetermined()
                } else {
                    DomainInference::new(domain, DomainSource::FirstRecord)
                }
            }
            None => DomainInference::undetermined(),
        }
    }

    /// Score the leading records of a capture
    pub fn scores(&self, records: &[Record]) -> DomainScores {
        let mut scores = DomainScores::new();
        for record in records.iter().take(self.scan_limit) {
            let domain = record.coarse_domain();
            if domain.is_empty() {
                continue;
            }
            scores.add(&domain, self.weights.score(record));
        }
        scores
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::{Page, ResponseInfo};

    fn json_get(url: &str) -> Record {
        Record::new("GET", url)
            .with_response(ResponseInfo::new(200, "OK").with_mime_type("application/json"))
    }

    #[test]
    fn test_page_title_wins() {
        let capture = Capture::new(
            vec![Page::titled("https://shop.example.com/")],
            vec![json_get("https://other.org/a"), json_get("https://other.org/b")],
        );

        let inference = DomainInferencer::new().infer(&capture);
        assert_eq!(inference.domain, "example.com");
        assert_eq!(inference.source, DomainSource::PageTitle);
    }

    #[test]
    fn test_non_url_title_falls_through_to_scoring() {
        let capture = Capture::new(
            vec![Page::titled("Shop - Home")],
            vec![json_get("https://api.other.org/a")],
        );

        let inference = DomainInferencer::new().infer(&capture);
        assert_eq!(inference.domain, "other.org");
        assert_eq!(inference.source, DomainSource::Scored);
    }

    #[test]
    fn test_html_and_cookie_outweigh_volume() {
        let login = Record::new("POST", "https://x.com/login").with_response(
            ResponseInfo::new(200, "OK")
                .with_mime_type("text/html; charset=utf-8")
                .with_header("Set-Cookie", "sid=1"),
        );
        let capture = Capture::new(
            Vec::new(),
            vec![
                json_get("https://api.y.com/1"),
                login,
                json_get("https://api.y.com/2"),
                json_get("https://api.y.com/3"),
            ],
        );

        let inferencer = DomainInferencer::new();
        let scores = inferencer.scores(capture.entries().unwrap());
        assert_eq!(scores.get("x.com"), Some(10));
        assert_eq!(scores.get("y.com"), Some(6));

        let inference = inferencer.infer(&capture);
        assert_eq!(inference.domain, "x.com");
        assert_eq!(inference.source, DomainSource::Scored);
    }

    #[test]
    fn test_tie_goes_to_first_seen() {
        let capture = Capture::new(
            Vec::new(),
            vec![
                json_get("https://b.net/1"),
                json_get("https://a.net/1"),
                json_get("https://a.net/2"),
                json_get("https://b.net/2"),
            ],
        );

        let inference = DomainInferencer::new().infer(&capture);
        assert_eq!(inference.domain, "b.net");
    }

    #[test]
    fn test_scan_limit_ignores_later_records() {
        let mut records = vec![json_get("https://early.com/")];
        records.extend((0..5).map(|i| json_get(&format!("https://late.com/{i}"))));
        let capture = Capture::new(Vec::new(), records);

        let inference = DomainInferencer::new().scan_limit(1).infer(&capture);
        assert_eq!(inference.domain, "early.com");
    }

    #[test]
    fn test_first_record_fallback() {
        let capture = Capture::new(
            Vec::new(),
            vec![json_get("https://cdn.first.io/a"), json_get("https://second.io/")],
        );
        let inference = DomainInferencer::new().scan_limit(0).infer(&capture);
        assert_eq!(inference.domain, "first.io");
        assert_eq!(inference.source, DomainSource::FirstRecord);
    }

    #[test]
    fn test_undetermined() {
        let empty = Capture::new(Vec::new(), Vec::new());
        let inference = DomainInferencer::new().infer(&empty);
        assert_eq!(inference.source, DomainSource::Undetermined);
        assert!(!inference.is_determined());

        let hostless = Capture::new(Vec::new(), vec![json_get("about:blank")]);
        let inference = DomainInferencer::new().infer(&hostless);
        assert_eq!(inference.domain, "");
        assert_eq!(inference.source, DomainSource::Undetermined);
    }

    #[test]
    fn test_unparseable_url_title() {
        let capture = Capture::new(
            vec![Page::titled("http stuff")],
            vec![json_get("https://example.com/")],
        );
        let inference = DomainInferencer::new().infer(&capture);
        assert_eq!(inference.domain, "");
        assert_eq!(inference.source, DomainSource::PageTitle);
        assert!(!inference.is_determined());
    }

    #[test]
    fn test_scores_group_ports_but_keep_case() {
        let capture = Capture::new(
            Vec::new(),
            vec![
                json_get("https://app.example.com:8443/a"),
                json_get("https://example.com/b"),
                json_get("https://CDN.Example.com/c"),
            ],
        );

        let scores = DomainInferencer::new().scores(capture.entries().unwrap());
        assert_eq!(scores.get("example.com"), Some(4));
        assert_eq!(scores.get("Example.com"), Some(2));
    }

    #[test]
    fn test_leader_of_empty_scores() {
        assert!(DomainScores::new().leader().is_none());
    }
}
