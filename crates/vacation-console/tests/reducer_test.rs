//! Pure-reducer tests for the console's resources: the three lifecycle
//! transitions, keyed-merge rebuild semantics, and targeted-mutation
//! isolation.

use fetch_store::{reduce, LifecycleEvent, ResourceState};
use std::collections::BTreeMap;
use vacation_console::acceptance_store::{Acceptances, AcceptancesResponse};
use vacation_console::model::{Acceptance, AcceptanceStatus, PresenceConfirmation, Worker};
use vacation_console::presence_store::{PresenceConfirmations, PresenceResponse};
use vacation_console::workers_store::{Workers, WorkersResponse};

fn sample_confirmation(date: &str, user_id: u64) -> PresenceConfirmation {
    PresenceConfirmation {
        date: date.to_string(),
        start_time: "08:00".to_string(),
        end_time: "16:00".to_string(),
        user_id,
    }
}

fn sample_worker(user_id: u64, name: &str, work_time: f32) -> Worker {
    Worker {
        user_id,
        name: name.to_string(),
        mail_address: format!("{}@example.com", name.to_lowercase()),
        work_time,
    }
}

#[test]
fn request_sets_fetching_and_resets_error() {
    let state = ResourceState {
        fetching: false,
        error: Some("Some error message".to_string()),
        data: BTreeMap::new(),
    };

    let next = reduce::<PresenceConfirmations>(&state, LifecycleEvent::Request);

    assert!(next.fetching);
    assert_eq!(next.error, None);
    assert_eq!(next.data, state.data);
}

#[test]
fn success_keys_confirmations_by_date() {
    let state = ResourceState {
        fetching: true,
        error: None,
        data: BTreeMap::new(),
    };

    let next = reduce::<PresenceConfirmations>(
        &state,
        LifecycleEvent::Success(PresenceResponse::Fetched(vec![
            sample_confirmation("2021-08-19", 1),
            sample_confirmation("2021-08-20", 1),
        ])),
    );

    assert!(!next.fetching);
    let mut expected = BTreeMap::new();
    expected.insert("2021-08-19".to_string(), sample_confirmation("2021-08-19", 1));
    expected.insert("2021-08-20".to_string(), sample_confirmation("2021-08-20", 1));
    assert_eq!(next.data, expected);
}

#[test]
fn failure_sets_error_and_keeps_last_good_data() {
    let mut data = BTreeMap::new();
    data.insert("2021-08-19".to_string(), sample_confirmation("2021-08-19", 1));
    let state = ResourceState {
        fetching: true,
        error: None,
        data: data.clone(),
    };

    let next = reduce::<PresenceConfirmations>(
        &state,
        LifecycleEvent::Failure("Some error message".to_string()),
    );

    assert!(!next.fetching);
    assert_eq!(next.error, Some("Some error message".to_string()));
    assert_eq!(next.data, data);
}

#[test]
fn keyed_rebuild_is_idempotent_and_drops_stale_dates() {
    let response = || {
        PresenceResponse::Fetched(vec![
            sample_confirmation("2021-08-19", 1),
            sample_confirmation("2021-08-20", 1),
        ])
    };
    let start = ResourceState {
        fetching: true,
        error: None,
        data: BTreeMap::new(),
    };

    // Reducing the same response twice from the same starting state yields
    // the same mapping: the rebuild never accumulates keys.
    let once = reduce::<PresenceConfirmations>(&start, LifecycleEvent::Success(response()));
    let twice = reduce::<PresenceConfirmations>(&once, LifecycleEvent::Success(response()));
    assert_eq!(once.data, twice.data);

    // A later response missing a date removes it from the mapping.
    let shrunk = reduce::<PresenceConfirmations>(
        &twice,
        LifecycleEvent::Success(PresenceResponse::Fetched(vec![sample_confirmation(
            "2021-08-20",
            1,
        )])),
    );
    assert_eq!(shrunk.data.len(), 1);
    assert!(!shrunk.data.contains_key("2021-08-19"));
}

#[test]
fn work_time_change_patches_only_the_target_worker() {
    let state = ResourceState {
        fetching: true,
        error: None,
        data: vec![
            sample_worker(1, "Alice", 8.0),
            sample_worker(2, "Bob", 8.0),
            sample_worker(3, "Carol", 8.0),
        ],
    };

    let next = reduce::<Workers>(
        &state,
        LifecycleEvent::Success(WorkersResponse::WorkTimeChanged {
            user_id: 2,
            work_time: 4.0,
        }),
    );

    assert!(!next.fetching);
    assert_eq!(next.data[0], sample_worker(1, "Alice", 8.0));
    assert_eq!(next.data[1].work_time, 4.0);
    assert_eq!(next.data[2], sample_worker(3, "Carol", 8.0));
    // Ordering is preserved.
    assert_eq!(
        next.data.iter().map(|w| w.user_id).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
}

#[test]
fn acceptance_decision_patches_only_the_target_request() {
    let pending = |id: u64, name: &str| Acceptance {
        id,
        requester_name: name.to_string(),
        start_date: "2021-09-01".to_string(),
        end_date: "2021-09-03".to_string(),
        status: AcceptanceStatus::Pending,
    };
    let state = ResourceState {
        fetching: true,
        error: None,
        data: vec![pending(7, "Alice"), pending(8, "Bob")],
    };

    let next = reduce::<Acceptances>(
        &state,
        LifecycleEvent::Success(AcceptancesResponse::Resolved {
            acceptance_id: 7,
            status: AcceptanceStatus::Accepted,
        }),
    );

    assert_eq!(next.data[0].status, AcceptanceStatus::Accepted);
    assert_eq!(next.data[1], pending(8, "Bob"));
}
