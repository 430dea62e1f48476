//! Feed engine: collector polling and IO execution.
mod client;
mod poller;
mod types;

pub use client::{ClientSettings, EventSource, ReqwestEventSource};
pub use poller::{PollerHandle, DEFAULT_POLL_INTERVAL};
pub use types::{EventRecord, FetchError, PollEvent, PollSeq};
