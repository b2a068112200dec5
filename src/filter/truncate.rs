// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Body text truncation

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Appended after the kept prefix of an oversized text
pub const TRUNCATION_MARKER: &str = " *TRUNCATED*";

pub const DEFAULT_THRESHOLD: usize = 2000;
pub const DEFAULT_KEEP: usize = 1000;

/// Cuts texts longer than `threshold` characters down to `keep` characters
/// plus [`TRUNCATION_MARKER`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextTruncator {
    pub threshold: usize,
    pub keep: usize,
}

impl Default for TextTruncator {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            keep: DEFAULT_KEEP,
        }
    }
}

impl TextTruncator {
    pub fn new(threshold: usize, keep: usize) -> Self {
        Self { threshold, keep }
    }

    /// Truncate a string. Lengths are counted in characters.
    pub fn truncate<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if text.char_indices().nth(self.threshold).is_none() {
            return Cow::Borrowed(text);
        }

        let cut = text
            .char_indices()
            .nth(self.keep)
            .map(|(i, _)| i)
            .unwrap_or(text.len());

        let mut out = String::with_capacity(cut + TRUNCATION_MARKER.len());
        out.push_str(&text[..cut]);
        out.push_str(TRUNCATION_MARKER);
        Cow::Owned(out)
    }

    /// Truncate a JSON value in place. Non-strings are left alone.
    /// Returns whether the value was cut.
    pub fn truncate_value(&self, value: &mut Value) -> bool {
        let Value::String(text) = value else {
            return false;
        };

        let cut = match self.truncate(text) {
            Cow::Borrowed(_) => return false,
            Cow::Owned(cut) => cut,
        };
        *text = cut;
        true
    }
}

/// [`TextTruncator::truncate`] with explicit limits
pub fn truncate(text: &str, threshold: usize, keep: usize) -> Cow<'_, str> {
    TextTruncator::new(threshold, keep).truncate(text)
}
