// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HAR capture model
//!
//! Typed view of the parts of an HTTP Archive the engine reads. Fields the
//! engine copies without looking at are kept in `extra` maps so they survive
//! a load/save round trip unchanged.

mod clip;
mod document;
mod record;

pub use clip::clip_strings;
pub use document::{Capture, Log, Page};
pub use record::{Content, HeaderEntry, PostData, PostDataBody, Record, RequestInfo, ResponseInfo};
