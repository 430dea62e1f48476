//! Plain-text view renderer: the collaborator fed by the presentation
//! mapper. Pure formatting only; it never re-fetches and never re-orders.

use feed_core::{FeedMode, FeedViewModel};

const HEADER: &str = "Sentinel Feed :: Latest Events";
const EMPTY_MESSAGE: &str = "Awaiting new events from the agents...";

/// Formats one frame of the dashboard.
///
/// Error mode is rendered as a `!!` banner so it is always visually
/// distinct from event rows.
pub(crate) fn format_frame(view: &FeedViewModel) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');
    out.push_str(&"-".repeat(HEADER.len()));
    out.push('\n');

    match &view.mode {
        FeedMode::Error(message) => {
            out.push_str("!! ");
            out.push_str(message);
            out.push('\n');
        }
        FeedMode::List(rows) => {
            for row in rows {
                out.push_str(&format!(
                    "[{}] {}  {}  {}\n",
                    row.timestamp, row.hostname, row.event_type, row.details
                ));
            }
        }
        FeedMode::Empty => {
            out.push_str(EMPTY_MESSAGE);
            out.push('\n');
        }
    }

    out
}

pub(crate) fn print_frame(frame: &str) {
    print!("\n{frame}");
}
