use std::sync::Once;

use feed_core::{update, Event, FeedMode, FeedState, FetchFailure, Msg};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(feed_logging::initialize_for_tests);
}

fn sample_events() -> Vec<Event> {
    vec![
        Event {
            hostname: "h1".to_string(),
            timestamp: "2024-01-01T00:00:00Z".to_string(),
            event_type: "LOGIN".to_string(),
            details: "ok".to_string(),
        },
        Event {
            hostname: "h2".to_string(),
            timestamp: "2024-01-01T00:00:05Z".to_string(),
            event_type: "PROCESS_CREATION".to_string(),
            details: "powershell.exe".to_string(),
        },
    ]
}

fn completed(seq: u64, result: Result<Vec<Event>, FetchFailure>) -> Msg {
    Msg::PollCompleted { seq, result }
}

#[test]
fn successful_poll_replaces_events_and_clears_error() {
    init_logging();
    let state = FeedState::new();

    let state = update(state, completed(1, Err(FetchFailure::Unreachable)));
    assert_eq!(state.error(), Some(FetchFailure::Unreachable));

    let state = update(state, completed(2, Ok(sample_events())));
    assert_eq!(state.events(), sample_events().as_slice());
    assert_eq!(state.error(), None);
}

#[test]
fn events_are_kept_in_server_order_without_mutation() {
    init_logging();
    let state = update(FeedState::new(), completed(1, Ok(sample_events())));

    // Exactly the server-provided array: same order, same field values.
    assert_eq!(state.events(), sample_events().as_slice());
}

#[test]
fn failed_poll_sets_error_and_retains_last_known_events() {
    init_logging();
    let state = update(FeedState::new(), completed(1, Ok(sample_events())));
    let state = update(state, completed(2, Err(FetchFailure::BadStatus(503))));

    assert_eq!(state.error(), Some(FetchFailure::BadStatus(503)));
    // Last-known-good data survives in memory even while hidden.
    assert_eq!(state.events(), sample_events().as_slice());
    assert!(matches!(state.view().mode, FeedMode::Error(_)));
}

#[test]
fn connection_failure_matches_bad_status_outcome() {
    init_logging();
    let state = update(FeedState::new(), completed(1, Ok(sample_events())));
    let state = update(state, completed(2, Err(FetchFailure::Unreachable)));

    assert_eq!(state.error(), Some(FetchFailure::Unreachable));
    assert_eq!(state.events(), sample_events().as_slice());
    assert_eq!(
        state.error().unwrap().user_message(),
        FetchFailure::BadStatus(503).user_message()
    );
}

#[test]
fn applying_the_same_result_twice_is_idempotent() {
    init_logging();
    let once = update(FeedState::new(), completed(1, Ok(sample_events())));
    let twice = update(once.clone(), completed(2, Ok(sample_events())));

    assert_eq!(once.events(), twice.events());
    assert_eq!(once.error(), twice.error());
    assert_eq!(once.view(), twice.view());
}

#[test]
fn stale_completion_is_discarded() {
    init_logging();
    let state = update(FeedState::new(), completed(2, Ok(sample_events())));

    // A slow response from poll 1 arrives after poll 2 was applied.
    let state = update(state, completed(1, Ok(Vec::new())));
    assert_eq!(state.events(), sample_events().as_slice());
    assert_eq!(state.last_applied_seq(), 2);

    // Same guard applies to late failures.
    let state = update(state, completed(1, Err(FetchFailure::Unreachable)));
    assert_eq!(state.error(), None);
}

#[test]
fn equal_sequence_number_is_not_reapplied() {
    init_logging();
    let state = update(FeedState::new(), completed(3, Ok(sample_events())));
    let state = update(state, completed(3, Ok(Vec::new())));

    assert_eq!(state.events(), sample_events().as_slice());
}

#[test]
fn closed_store_rejects_all_updates() {
    init_logging();
    let state = update(FeedState::new(), completed(1, Ok(sample_events())));
    let state = update(state, Msg::Teardown);
    assert!(state.is_closed());

    let state = update(state, completed(2, Ok(Vec::new())));
    assert_eq!(state.events(), sample_events().as_slice());

    let state = update(state, completed(3, Err(FetchFailure::MalformedResponse)));
    assert_eq!(state.error(), None);
}
