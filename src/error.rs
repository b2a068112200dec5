// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for harsift
//!
//! Only structural problems with a capture are errors. Missing fields inside
//! a single record are resolved with defaults, and a primary domain that
//! cannot be inferred is reported through the filter report instead.

use thiserror::Error;

/// Result type alias for harsift operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for harsift
#[derive(Error, Debug)]
pub enum Error {
    /// Input is not JSON, or does not fit the capture schema
    #[error("Capture parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required top-level section is absent
    #[error("Malformed capture: missing `{0}`")]
    MissingField(&'static str),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Filter configuration that cannot be applied
    #[error("Invalid filter configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Create an invalid configuration error
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Error::InvalidConfig(msg.into())
    }

    /// Check if the capture itself was unusable
    pub fn is_structural(&self) -> bool {
        matches!(self, Error::Json(_) | Error::MissingField(_))
    }
}
