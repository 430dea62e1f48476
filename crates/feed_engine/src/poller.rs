use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use feed_logging::{feed_debug, feed_info, feed_warn, set_poll_seq};
use tokio::sync::watch;

use crate::client::{ClientSettings, EventSource, ReqwestEventSource};
use crate::{PollEvent, PollSeq};

/// Default refresh cadence of the viewer.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(3000);

/// Handle to the recurring poll task.
///
/// A dedicated thread owns a tokio runtime. The first tick fires
/// immediately; later ticks are wall-clock periodic, measured from the
/// schedule rather than from fetch completion, so a slow fetch overlaps the
/// next one. Completions are delivered over the channel in whichever order
/// they finish; the consumer orders them by sequence number.
pub struct PollerHandle {
    event_rx: mpsc::Receiver<PollEvent>,
    stop_tx: watch::Sender<bool>,
}

impl PollerHandle {
    /// Starts polling the configured collector endpoint.
    pub fn start(settings: ClientSettings, interval: Duration) -> Self {
        Self::start_with_source(Arc::new(ReqwestEventSource::new(settings)), interval)
    }

    /// Starts polling an arbitrary source; test fakes plug in here.
    pub fn start_with_source(source: Arc<dyn EventSource>, interval: Duration) -> Self {
        let (event_tx, event_rx) = mpsc::channel();
        let (stop_tx, stop_rx) = watch::channel(false);

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            runtime.block_on(poll_loop(source, interval, event_tx, stop_rx));
        });

        Self { event_rx, stop_tx }
    }

    /// Cancels the periodic timer: no further polls are dispatched once this
    /// returns. Safe to call any number of times, scheduled poll or not.
    /// An already-in-flight fetch is not waited for; its completion is
    /// discarded by the store's teardown and sequence guards.
    pub fn stop(&self) {
        let _ = self.stop_tx.send(true);
    }

    /// Non-blocking drain of completed polls.
    pub fn try_recv(&self) -> Option<PollEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks up to `timeout` for the next completed poll.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<PollEvent, RecvTimeoutError> {
        self.event_rx.recv_timeout(timeout)
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn poll_loop(
    source: Arc<dyn EventSource>,
    interval: Duration,
    event_tx: mpsc::Sender<PollEvent>,
    mut stop_rx: watch::Receiver<bool>,
) {
    let mut ticker = tokio::time::interval(interval);
    let mut seq: PollSeq = 0;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                seq += 1;
                dispatch(source.clone(), seq, event_tx.clone());
            }
            changed = stop_rx.changed() => {
                // A dropped sender counts as a stop request.
                if changed.is_err() || *stop_rx.borrow() {
                    feed_info!("poller stopped after {} dispatched polls", seq);
                    break;
                }
            }
        }
    }
}

fn dispatch(source: Arc<dyn EventSource>, seq: PollSeq, event_tx: mpsc::Sender<PollEvent>) {
    tokio::spawn(async move {
        set_poll_seq(seq);
        feed_debug!("poll {} dispatched", seq);
        let result = source.fetch_events().await;
        if let Err(err) = &result {
            feed_warn!("poll {} failed: {}", seq, err);
        }
        // The receiver may already be gone during teardown.
        let _ = event_tx.send(PollEvent { seq, result });
    });
}
