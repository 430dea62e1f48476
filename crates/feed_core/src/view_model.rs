use chrono::{DateTime, Local};

use crate::Event;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedViewModel {
    pub mode: FeedMode,
}

/// Exactly one mode is presented at any observation point.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FeedMode {
    /// Healthy feed with no events yet.
    #[default]
    Empty,
    /// Rows in server-provided order.
    List(Vec<EventRowView>),
    /// Operator-facing message; always shown when a failure is active.
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRowView {
    pub hostname: String,
    pub timestamp: String,
    pub event_type: String,
    pub details: String,
}

impl EventRowView {
    pub(crate) fn from_event(event: &Event) -> Self {
        Self {
            hostname: event.hostname.clone(),
            timestamp: format_local_timestamp(&event.timestamp),
            event_type: event.event_type.clone(),
            details: event.details.clone(),
        }
    }
}

/// Renders an ISO-8601 timestamp in local time.
/// Input that does not parse is passed through verbatim.
pub fn format_local_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(instant) => instant
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}
