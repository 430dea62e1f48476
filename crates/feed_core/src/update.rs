use crate::{FeedState, Msg};

/// Pure update function: applies a message to the feed snapshot.
///
/// The scheduler's callback is the sole caller, which keeps the snapshot
/// single-writer without resorting to ambient globals.
pub fn update(mut state: FeedState, msg: Msg) -> FeedState {
    match msg {
        Msg::PollCompleted { seq, result } => {
            if !state.accepts(seq) {
                return state;
            }
            match result {
                Ok(events) => state.apply_events(seq, events),
                Err(failure) => state.apply_failure(seq, failure),
            }
        }
        Msg::Teardown => state.close(),
    }

    state
}
