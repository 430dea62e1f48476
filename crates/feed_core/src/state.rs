use crate::view_model::{EventRowView, FeedMode, FeedViewModel};
use crate::{Event, FetchFailure};

/// Monotonically increasing identifier assigned to each dispatched poll.
pub type PollSeq = u64;

/// Single-writer snapshot of the feed: the latest known event list plus the
/// current error status. Mutated only through [`crate::update`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedState {
    events: Vec<Event>,
    error: Option<FetchFailure>,
    last_applied_seq: PollSeq,
    closed: bool,
}

impl FeedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives the presentation-ready view model.
    ///
    /// Precedence invariant: an active error always wins over events, even
    /// when a last-known-good list is still held; the empty mode holds only
    /// when the feed is healthy and has no events.
    pub fn view(&self) -> FeedViewModel {
        let mode = if let Some(failure) = self.error {
            FeedMode::Error(failure.user_message().to_string())
        } else if !self.events.is_empty() {
            FeedMode::List(self.events.iter().map(EventRowView::from_event).collect())
        } else {
            FeedMode::Empty
        };
        FeedViewModel { mode }
    }

    /// The retained event list, in server order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// The active failure, if any.
    pub fn error(&self) -> Option<FetchFailure> {
        self.error
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn last_applied_seq(&self) -> PollSeq {
        self.last_applied_seq
    }

    /// A completion is applied only when the store is open and its sequence
    /// number is newer than the last applied one, so a slow response from an
    /// earlier poll can never overwrite fresher data.
    pub(crate) fn accepts(&self, seq: PollSeq) -> bool {
        !self.closed && seq > self.last_applied_seq
    }

    pub(crate) fn apply_events(&mut self, seq: PollSeq, events: Vec<Event>) {
        self.events = events;
        self.error = None;
        self.last_applied_seq = seq;
    }

    pub(crate) fn apply_failure(&mut self, seq: PollSeq, failure: FetchFailure) {
        // Stale data is retained but hidden by the view precedence.
        self.error = Some(failure);
        self.last_applied_seq = seq;
    }

    pub(crate) fn close(&mut self) {
        self.closed = true;
    }
}
