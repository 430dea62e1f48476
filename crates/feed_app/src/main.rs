mod config;
mod convert;
mod logging;
mod render;

use std::env;
use std::path::PathBuf;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use feed_core::{update, FeedState, Msg};
use feed_engine::{ClientSettings, PollerHandle};
use feed_logging::feed_info;

fn main() {
    logging::initialize(logging::LogDestination::File);

    let config_path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_CONFIG_PATH));
    let config = config::load(&config_path);
    feed_info!(
        "Polling {} every {} ms",
        config.endpoint,
        config.poll_interval_ms
    );

    let settings = ClientSettings {
        endpoint: config.endpoint.clone(),
        ..ClientSettings::default()
    };
    let poller = PollerHandle::start(settings, config.poll_interval());

    let mut state = FeedState::new();
    let mut last_frame = render::format_frame(&state.view());
    render::print_frame(&last_frame);

    loop {
        match poller.recv_timeout(Duration::from_millis(500)) {
            Ok(event) => {
                state = update(state, convert::poll_event_to_msg(event));
                let frame = render::format_frame(&state.view());
                // Re-render only when the presentation actually changed.
                if frame != last_frame {
                    render::print_frame(&frame);
                    last_frame = frame;
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    poller.stop();
    let _ = update(state, Msg::Teardown);
    feed_info!("Viewer shut down");
}
