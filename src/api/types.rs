//! API Data Types
//!
//! Response bodies returned by the lookup endpoint, and the per-search settings
//! the router hands to its handlers.

use serde::Serialize;
use std::time::Duration;

/// Path of the lookup endpoint; `:value` is the integer to look up.
pub const ENDPOINT_INDEX: &str = "/endpoint/:value";

pub const MSG_INVALID_VALUE: &str = "invalid value passed";
pub const MSG_INDEX_NOT_FOUND: &str = "index not found";
pub const MSG_SEARCH_CANCELED: &str = "search canceled";
pub const MSG_UNKNOWN: &str = "unexpected error happened";

/// Body of every lookup response.
///
/// Serialized untagged: a hit renders as `{"index":..,"value":..}`, anything
/// else as `{"message":..}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum IndexResponse {
    Found { index: usize, value: i64 },
    Error { message: String },
}

impl IndexResponse {
    pub fn error(message: &str) -> Self {
        IndexResponse::Error {
            message: message.to_string(),
        }
    }
}

/// Limits applied to every search started by a request.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchSettings {
    /// Deadline for a single search. `None` lets it run to completion.
    pub timeout: Option<Duration>,
}

impl SearchSettings {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }
}
