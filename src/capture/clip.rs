// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Raw document string clipping
//!
//! Cuts every string value of a JSON document to a maximum number of
//! characters, without a marker. Object keys are left alone. Meant to run on
//! the raw document before it is parsed as a capture, so it also touches
//! request headers.

use serde_json::Value;

/// Recursively clip every string value to at most `max_len` characters
pub fn clip_strings(value: Value, max_len: usize) -> Value {
    match value {
        Value::String(s) => {
            if s.chars().count() > max_len {
                Value::String(s.chars().take(max_len).collect())
            } else {
                Value::String(s)
            }
        }
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| clip_strings(item, max_len))
                .collect(),
        ),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k, clip_strings(v, max_len)))
                .collect(),
        ),
        other => other,
    }
}
