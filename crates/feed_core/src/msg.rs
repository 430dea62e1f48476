use crate::{Event, FetchFailure, PollSeq};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// A dispatched poll completed, successfully or not.
    PollCompleted {
        seq: PollSeq,
        result: Result<Vec<Event>, FetchFailure>,
    },
    /// The viewer is shutting down; any later completion must be rejected.
    Teardown,
}
