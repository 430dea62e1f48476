//! Feed core: pure state machine and view-model helpers.
mod event;
mod failure;
mod msg;
mod state;
mod update;
mod view_model;

pub use event::Event;
pub use failure::{FetchFailure, BACKEND_UNREACHABLE_MESSAGE};
pub use msg::Msg;
pub use state::{FeedState, PollSeq};
pub use update::update;
pub use view_model::{format_local_timestamp, EventRowView, FeedMode, FeedViewModel};
