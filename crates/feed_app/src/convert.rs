//! Engine-to-core conversion: wire records and classified errors become the
//! core's IO-free message types.

use feed_core::{Event, FetchFailure, Msg};
use feed_engine::{EventRecord, FetchError, PollEvent};

pub(crate) fn record_to_event(record: EventRecord) -> Event {
    Event {
        hostname: record.hostname,
        timestamp: record.timestamp,
        event_type: record.event_type,
        details: record.details,
    }
}

pub(crate) fn failure_kind(error: &FetchError) -> FetchFailure {
    match error {
        FetchError::BadStatus(code) => FetchFailure::BadStatus(*code),
        FetchError::Unreachable(_) => FetchFailure::Unreachable,
        FetchError::MalformedResponse(_) => FetchFailure::MalformedResponse,
    }
}

pub(crate) fn poll_event_to_msg(event: PollEvent) -> Msg {
    let result = match event.result {
        Ok(records) => Ok(records.into_iter().map(record_to_event).collect()),
        Err(error) => Err(failure_kind(&error)),
    };
    Msg::PollCompleted {
        seq: event.seq,
        result,
    }
}
