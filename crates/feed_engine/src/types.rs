use serde::Deserialize;
use thiserror::Error;

/// Monotonically increasing identifier assigned to each dispatched poll.
pub type PollSeq = u64;

/// Wire-shaped event record as served by the collector endpoint.
///
/// Structural parsing only: field contents are not validated here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EventRecord {
    pub hostname: String,
    pub timestamp: String,
    pub event_type: String,
    pub details: String,
}

/// Completion of one dispatched poll, tagged with its sequence number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollEvent {
    pub seq: PollSeq,
    pub result: Result<Vec<EventRecord>, FetchError>,
}

/// Classified failure of a single poll. The detail string is for
/// diagnostics; the display layer collapses all kinds into one message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The collector answered with a non-success HTTP status.
    #[error("collector answered with http status {0}")]
    BadStatus(u16),
    /// Transport-level failure: DNS, connection refused, timeout.
    #[error("collector unreachable: {0}")]
    Unreachable(String),
    /// The response body did not parse as a JSON event array.
    #[error("malformed response body: {0}")]
    MalformedResponse(String),
}
