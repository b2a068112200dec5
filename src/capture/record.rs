// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request/response record types

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::domain;
use crate::http::headers;

/// One request/response exchange of a capture (a HAR `entry`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Start time as recorded (ISO 8601), copied verbatim
    #[serde(default, deserialize_with = "present")]
    pub started_date_time: Option<Value>,
    /// Request information
    #[serde(default)]
    pub request: RequestInfo,
    /// Response information
    #[serde(default)]
    pub response: ResponseInfo,
    /// Timings, cache, server address and other untouched fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Request information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestInfo {
    /// HTTP method
    #[serde(default)]
    pub method: Option<String>,
    /// Request URL
    #[serde(default)]
    pub url: Option<String>,
    /// Request headers, in capture order
    #[serde(default)]
    pub headers: Vec<HeaderEntry>,
    /// Request body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_data: Option<PostData>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseInfo {
    /// Status code, copied verbatim
    #[serde(default, deserialize_with = "present")]
    pub status: Option<Value>,
    /// Status text, copied verbatim
    #[serde(default, deserialize_with = "present")]
    pub status_text: Option<Value>,
    /// Response headers, in capture order
    #[serde(default)]
    pub headers: Vec<HeaderEntry>,
    /// Response body
    #[serde(default)]
    pub content: Content,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    /// Declared MIME type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Body text; any JSON value is accepted and kept as-is, `null` included
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub text: Option<Value>,
    /// size, compression, encoding, ...
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Request body as found in the capture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostData {
    /// The usual HAR object form
    Structured(PostDataBody),
    /// Anything else, kept verbatim
    Raw(Value),
}

/// Structured request body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDataBody {
    /// Body text, `null` included
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub text: Option<Value>,
    /// mimeType, params, ...
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single name/value header
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderEntry {
    #[serde(default)]
    pub name: String,
    /// Copied verbatim; only `Set-Cookie` values are read, and only as strings
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Field deserializer that keeps an explicit `null` as `Some(Value::Null)`.
/// Paired with `#[serde(default)]`, only a missing key reads as `None`.
fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl HeaderEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(Value::String(value.into())),
            extra: Map::new(),
        }
    }

    /// Case-insensitive name comparison
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

impl Record {
    /// Create a record for the given method and URL
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            request: RequestInfo::new(method, url),
            ..Default::default()
        }
    }

    /// Set response
    pub fn with_response(mut self, response: ResponseInfo) -> Self {
        self.response = response;
        self
    }

    /// Set start time
    pub fn with_started(mut self, started: impl Into<String>) -> Self {
        self.started_date_time = Some(Value::String(started.into()));
        self
    }

    /// Start time, when recorded as a string
    pub fn started(&self) -> Option<&str> {
        self.started_date_time.as_ref().and_then(Value::as_str)
    }

    /// Authority of the request URL as written, port included
    pub fn netloc(&self) -> &str {
        self.request.url.as_deref().map(domain::netloc_of).unwrap_or("")
    }

    /// Normalized host of the request URL, without port. Empty if the URL is
    /// unusable.
    pub fn host(&self) -> String {
        self.request
            .url
            .as_deref()
            .map(domain::host_of)
            .unwrap_or_default()
    }

    /// Coarse registered domain of the request URL
    pub fn coarse_domain(&self) -> String {
        domain::coarse_domain(self.netloc())
    }

    /// Whether the response carries any `Set-Cookie` header
    pub fn sets_cookie(&self) -> bool {
        self.response.has_header(headers::SET_COOKIE)
    }
}

impl RequestInfo {
    /// Create a new request info
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: Some(method.into()),
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Add header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push(HeaderEntry::new(name, value));
        self
    }

    /// Add a structured body
    pub fn with_body(mut self, text: impl Into<String>) -> Self {
        self.post_data = Some(PostData::Structured(PostDataBody {
            text: Some(Value::String(text.into())),
            extra: Map::new(),
        }));
        self
    }

    /// Check the method, case-sensitively
    pub fn is_get(&self) -> bool {
        self.method.as_deref() == Some("GET")
    }
}

impl ResponseInfo {
    /// Create a new response info
    pub fn new(status: i64, status_text: impl Into<String>) -> Self {
        Self {
            status: Some(Value::from(status)),
            status_text: Some(Value::String(status_text.into())),
            ..Default::default()
        }
    }

    /// Add header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push(HeaderEntry::new(name, value));
        self
    }

    /// Set declared MIME type
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.content.mime_type = Some(mime_type.into());
        self
    }

    /// Set body text
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.content.text = Some(Value::String(text.into()));
        self
    }

    /// Declared MIME type, empty when absent
    pub fn mime_type(&self) -> &str {
        self.content.mime_type.as_deref().unwrap_or("")
    }

    /// Check for a header, case-insensitively
    pub fn has_header(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h.is(name))
    }

    /// All values of a header, case-insensitively
    pub fn header_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.headers
            .iter()
            .filter(move |h| h.is(name))
            .filter_map(|h| h.value.as_ref().and_then(Value::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_defaults_for_missing_fields() {
        let record: Record = serde_json::from_value(json!({
            "request": { "url": "https://api.example.com/v1" },
            "response": {}
        }))
        .unwrap();

        assert!(record.request.headers.is_empty());
        assert!(record.response.headers.is_empty());
        assert_eq!(record.response.mime_type(), "");
        assert_eq!(record.host(), "api.example.com");
        assert_eq!(record.coarse_domain(), "example.com");
        assert!(!record.sets_cookie());
    }

    #[test]
    fn test_set_cookie_any_case() {
        let response = ResponseInfo::new(200, "OK").with_header("SET-COOKIE", "sid=1");
        let record = Record::new("GET", "https://example.com/").with_response(response);
        assert!(record.sets_cookie());
    }

    #[test]
    fn test_post_data_forms() {
        let structured: PostData =
            serde_json::from_value(json!({ "mimeType": "application/json", "text": "{}" })).unwrap();
        assert!(matches!(structured, PostData::Structured(ref b) if b.text == Some(json!("{}"))));

        let raw: PostData = serde_json::from_value(json!("a=1")).unwrap();
        assert_eq!(raw, PostData::Raw(json!("a=1")));
    }

    #[test]
    fn test_unknown_fields_survive() {
        let input = json!({
            "startedDateTime": "2024-01-01T00:00:00.000Z",
            "time": 12.5,
            "request": { "method": "GET", "url": "https://example.com/", "headers": [], "httpVersion": "HTTP/2" },
            "response": { "status": 200, "statusText": "OK", "headers": [], "content": { "mimeType": "application/json", "size": 2 } }
        });
        let record: Record = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(record.extra.get("time"), Some(&json!(12.5)));
        assert_eq!(serde_json::to_value(&record).unwrap(), input);
    }

    #[test]
    fn test_netloc_and_host() {
        let record = Record::new("GET", "https://API.Example.com:8443/v1");
        assert_eq!(record.netloc(), "API.Example.com:8443");
        assert_eq!(record.host(), "api.example.com");
        assert_eq!(record.coarse_domain(), "Example.com");
    }

    #[test]
    fn test_null_text_is_not_absent() {
        let input = json!({
            "request": { "postData": { "mimeType": "x", "text": null } },
            "response": { "content": { "mimeType": "application/json", "text": null } }
        });
        let record: Record = serde_json::from_value(input).unwrap();

        assert!(matches!(
            record.request.post_data,
            Some(PostData::Structured(ref b)) if b.text == Some(Value::Null)
        ));
        assert_eq!(record.response.content.text, Some(Value::Null));

        let output = serde_json::to_value(&record).unwrap();
        assert_eq!(output["request"]["postData"], json!({ "mimeType": "x", "text": null }));
        assert_eq!(output["response"]["content"]["text"], Value::Null);
    }

    #[test]
    fn test_copied_scalars_accept_any_type() {
        let input = json!({
            "startedDateTime": 1714557600,
            "request": { "method": "GET", "url": "https://example.com/", "headers": [{ "name": "X-Count", "value": 5 }] },
            "response": { "status": "200", "statusText": null, "headers": [{ "name": "Set-Cookie", "value": ["a=1"] }], "content": {} }
        });
        let record: Record = serde_json::from_value(input.clone()).unwrap();

        assert_eq!(record.response.status, Some(json!("200")));
        assert_eq!(record.response.status_text, Some(Value::Null));
        assert_eq!(record.started(), None);
        assert!(record.sets_cookie());
        assert_eq!(record.response.header_values("set-cookie").count(), 0);
        assert_eq!(serde_json::to_value(&record).unwrap(), input);
    }

    #[test]
    fn test_header_without_value_stays_without_value() {
        let header: HeaderEntry = serde_json::from_value(json!({ "name": "DNT" })).unwrap();
        assert_eq!(header.value, None);
        assert_eq!(serde_json::to_value(&header).unwrap(), json!({ "name": "DNT" }));
    }
}
