// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Top-level capture document

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::record::Record;
use crate::error::{Error, Result};

/// A full browser session capture (HAR document)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Capture {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log: Option<Log>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The `log` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Log {
    /// Pages, in capture order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<Vec<Page>>,
    /// Records, in chronological order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<Record>>,
    /// version, creator, browser, ...
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A page of the capture
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Page title; capture tools often put the navigated URL here
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Page {
    /// Create a page with a string title
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(Value::String(title.into())),
            extra: Map::new(),
        }
    }

    /// Title, if it is a string
    pub fn title_str(&self) -> Option<&str> {
        self.title.as_ref().and_then(Value::as_str)
    }
}

impl Capture {
    /// Build a capture from pages and records
    pub fn new(pages: Vec<Page>, entries: Vec<Record>) -> Self {
        Self {
            log: Some(Log {
                pages: Some(pages),
                entries: Some(entries),
                extra: Map::new(),
            }),
            extra: Map::new(),
        }
    }

    /// Parse a capture from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let capture: Capture = serde_json::from_str(json)?;
        capture.entries()?;
        Ok(capture)
    }

    /// Build a capture from an already parsed JSON value
    pub fn from_value(value: Value) -> Result<Self> {
        let capture: Capture = serde_json::from_value(value)?;
        capture.entries()?;
        Ok(capture)
    }

    /// Parse a capture from a reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let capture: Capture = serde_json::from_reader(reader)?;
        capture.entries()?;
        Ok(capture)
    }

    /// Load a capture from a file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Records of the capture. Absent `log` or `log.entries` is fatal.
    pub fn entries(&self) -> Result<&[Record]> {
        let log = self.log.as_ref().ok_or(Error::MissingField("log"))?;
        log.entries
            .as_deref()
            .ok_or(Error::MissingField("log.entries"))
    }

    /// Pages of the capture, empty when absent
    pub fn pages(&self) -> &[Page] {
        self.log
            .as_ref()
            .and_then(|log| log.pages.as_deref())
            .unwrap_or(&[])
    }

    /// Title of the first page, if it is a string
    pub fn first_page_title(&self) -> Option<&str> {
        self.pages().first().and_then(Page::title_str)
    }

    /// A new capture with the same pages and surrounding fields, but the
    /// given records in place of the original ones
    pub fn with_entries(&self, entries: Vec<Record>) -> Self {
        let log = self.log.as_ref();
        Self {
            log: Some(Log {
                pages: log.and_then(|l| l.pages.clone()),
                entries: Some(entries),
                extra: log.map(|l| l.extra.clone()).unwrap_or_default(),
            }),
            extra: self.extra.clone(),
        }
    }

    /// Serialize to compact JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write indented JSON to a file
    pub fn write_to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_missing_entries_is_fatal() {
        let err = Capture::from_json(r#"{"log": {"pages": []}}"#).unwrap_err();
        assert!(matches!(err, Error::MissingField("log.entries")));

        let err = Capture::from_json(r#"{"other": 1}"#).unwrap_err();
        assert!(matches!(err, Error::MissingField("log")));
    }

    #[test]
    fn test_invalid_json_is_fatal() {
        let err = Capture::from_json("not a har").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.is_structural());
    }

    #[test]
    fn test_first_page_title() {
        let capture = Capture::from_value(json!({
            "log": { "pages": [{ "id": "page_1", "title": "https://shop.example.com/" }], "entries": [] }
        }))
        .unwrap();
        assert_eq!(capture.first_page_title(), Some("https://shop.example.com/"));

        let numeric = Capture::from_value(json!({
            "log": { "pages": [{ "title": 42 }], "entries": [] }
        }))
        .unwrap();
        assert_eq!(numeric.first_page_title(), None);
    }

    #[test]
    fn test_with_entries_keeps_surroundings() {
        let capture = Capture::from_value(json!({
            "log": {
                "version": "1.2",
                "creator": { "name": "Playwright", "version": "1.40" },
                "pages": [{ "title": "Home" }],
                "entries": [{ "request": { "url": "https://example.com/" } }]
            }
        }))
        .unwrap();

        let replaced = capture.with_entries(Vec::new());
        assert_eq!(replaced.pages(), capture.pages());
        assert!(replaced.entries().unwrap().is_empty());

        let value = serde_json::to_value(&replaced).unwrap();
        assert_eq!(value["log"]["version"], json!("1.2"));
        assert_eq!(value["log"]["creator"]["name"], json!("Playwright"));
        assert_eq!(capture.entries().unwrap().len(), 1);
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"log": {{"entries": [{{"request": {{"method": "GET"}}}}]}}}}"#).unwrap();

        let capture = Capture::from_path(file.path()).unwrap();
        assert_eq!(capture.entries().unwrap().len(), 1);
        assert!(capture.pages().is_empty());
    }
}
