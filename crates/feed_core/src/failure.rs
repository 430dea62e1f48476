use std::fmt;

/// Classified poll failure. The app layer mirrors the engine taxonomy into
/// this core-owned enum so the state machine stays free of IO types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchFailure {
    /// The collector answered with a non-success HTTP status.
    BadStatus(u16),
    /// Transport-level failure: DNS, connection refused, timeout.
    Unreachable,
    /// The response body did not parse as an event list.
    MalformedResponse,
}

/// The single operator-facing message shared by every failure kind.
/// Kinds stay distinct for diagnostics but the display does not differentiate.
pub const BACKEND_UNREACHABLE_MESSAGE: &str =
    "Failed to connect to the collector backend. Is the API server running?";

impl FetchFailure {
    /// Message shown to the operator while this failure is active.
    pub fn user_message(&self) -> &'static str {
        BACKEND_UNREACHABLE_MESSAGE
    }
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchFailure::BadStatus(code) => write!(f, "http status {code}"),
            FetchFailure::Unreachable => write!(f, "collector unreachable"),
            FetchFailure::MalformedResponse => write!(f, "malformed response body"),
        }
    }
}
