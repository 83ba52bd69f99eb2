use fetch_store::{
    FetchAction, GatewayCall, LifecycleEvent, ManualGateway, MockGateway, ResourceDispatcher,
    StateStore, StoreResource,
};
use serde_json::{json, Value};
use std::sync::Arc;

// --- Test Resource ---

#[derive(Debug, Clone, PartialEq, Eq)]
struct Tag {
    id: u64,
    label: String,
}

#[derive(Debug)]
enum TagsResponse {
    Listed(Vec<Tag>),
    Relabeled { id: u64, label: String },
}

struct Tags;

impl StoreResource for Tags {
    type Data = Vec<Tag>;
    type Response = TagsResponse;

    fn initial() -> Vec<Tag> {
        Vec::new()
    }

    fn merge(data: &Vec<Tag>, response: TagsResponse) -> Vec<Tag> {
        match response {
            TagsResponse::Listed(tags) => tags,
            TagsResponse::Relabeled { id, label } => {
                fetch_store::normalize::patch_entity(data, |t| t.id == id, |t| {
                    t.label = label.clone()
                })
            }
        }
    }
}

struct FetchTags;

impl FetchAction for FetchTags {
    type Resource = Tags;
    type Params = ();

    fn call(_: &()) -> GatewayCall {
        GatewayCall::get("/api/tags")
    }

    fn shape(_: &(), payload: Value) -> Result<TagsResponse, String> {
        let labels: Vec<(u64, String)> =
            serde_json::from_value(payload).map_err(|e| format!("malformed tags payload: {e}"))?;
        Ok(TagsResponse::Listed(
            labels
                .into_iter()
                .map(|(id, label)| Tag { id, label })
                .collect(),
        ))
    }
}

fn tag(id: u64, label: &str) -> Tag {
    Tag {
        id,
        label: label.to_string(),
    }
}

// --- Tests ---

#[tokio::test]
async fn test_store_reduces_full_lifecycle_in_order() {
    let (store, handle) = StateStore::<Tags>::new(16);
    let store_task = tokio::spawn(store.run());

    // Request flips fetching and clears any prior error.
    handle.dispatch(LifecycleEvent::Request).await.unwrap();
    let state = handle.snapshot().await.unwrap();
    assert!(state.fetching);
    assert_eq!(state.error, None);
    assert_eq!(state.data, Vec::<Tag>::new());

    // Success lands the merged data and ends the fetch.
    handle
        .dispatch(LifecycleEvent::Success(TagsResponse::Listed(vec![
            tag(1, "urgent"),
            tag(2, "later"),
        ])))
        .await
        .unwrap();
    let state = handle.snapshot().await.unwrap();
    assert!(!state.fetching);
    assert_eq!(state.data, vec![tag(1, "urgent"), tag(2, "later")]);

    // Failure keeps the last good data.
    handle.dispatch(LifecycleEvent::Request).await.unwrap();
    handle
        .dispatch(LifecycleEvent::Failure("boom".to_string()))
        .await
        .unwrap();
    let state = handle.snapshot().await.unwrap();
    assert!(!state.fetching);
    assert_eq!(state.error, Some("boom".to_string()));
    assert_eq!(state.data, vec![tag(1, "urgent"), tag(2, "later")]);

    // The next request clears the error again.
    handle.dispatch(LifecycleEvent::Request).await.unwrap();
    let state = handle.snapshot().await.unwrap();
    assert!(state.fetching);
    assert_eq!(state.error, None);

    // Dropping the last handle shuts the store down.
    drop(handle);
    store_task.await.unwrap();
}

#[tokio::test]
async fn test_targeted_mutation_leaves_other_entities_untouched() {
    let (store, handle) = StateStore::<Tags>::new(16);
    tokio::spawn(store.run());

    handle
        .dispatch(LifecycleEvent::Success(TagsResponse::Listed(vec![
            tag(1, "urgent"),
            tag(2, "later"),
            tag(3, "done"),
        ])))
        .await
        .unwrap();
    handle
        .dispatch(LifecycleEvent::Success(TagsResponse::Relabeled {
            id: 2,
            label: "soon".to_string(),
        }))
        .await
        .unwrap();

    let state = handle.snapshot().await.unwrap();
    assert_eq!(
        state.data,
        vec![tag(1, "urgent"), tag(2, "soon"), tag(3, "done")]
    );
}

#[tokio::test]
async fn test_dispatcher_runs_the_three_event_skeleton() {
    let gateway = Arc::new(MockGateway::new());
    gateway
        .expect(GatewayCall::get("/api/tags"))
        .return_ok(json!([[1, "urgent"]]));
    gateway
        .expect(GatewayCall::get("/api/tags"))
        .return_err("503 Service Unavailable");

    let (store, handle) = StateStore::<Tags>::new(16);
    tokio::spawn(store.run());
    let dispatcher = ResourceDispatcher::new(handle, gateway.clone());

    // Success cycle.
    dispatcher.run_fetch::<FetchTags>(()).await.unwrap();
    let state = dispatcher.handle().snapshot().await.unwrap();
    assert!(!state.fetching);
    assert_eq!(state.error, None);
    assert_eq!(state.data, vec![tag(1, "urgent")]);

    // Failure cycle: the rejection message lands in `error`, data survives.
    dispatcher.run_fetch::<FetchTags>(()).await.unwrap();
    let state = dispatcher.handle().snapshot().await.unwrap();
    assert!(!state.fetching);
    assert_eq!(state.error, Some("503 Service Unavailable".to_string()));
    assert_eq!(state.data, vec![tag(1, "urgent")]);

    gateway.verify();
}

#[tokio::test]
async fn test_malformed_payload_settles_as_failure() {
    let gateway = Arc::new(MockGateway::new());
    gateway
        .expect(GatewayCall::get("/api/tags"))
        .return_ok(json!({"unexpected": "shape"}));

    let (store, handle) = StateStore::<Tags>::new(16);
    tokio::spawn(store.run());
    let dispatcher = ResourceDispatcher::new(handle, gateway.clone());

    dispatcher.run_fetch::<FetchTags>(()).await.unwrap();
    let state = dispatcher.handle().snapshot().await.unwrap();
    assert!(!state.fetching);
    assert!(state
        .error
        .as_deref()
        .unwrap()
        .starts_with("malformed tags payload"));
    gateway.verify();
}

#[tokio::test]
async fn test_fire_and_forget_flips_fetching_before_settlement() {
    let (gateway, mut calls) = ManualGateway::new();
    let (store, handle) = StateStore::<Tags>::new(16);
    tokio::spawn(store.run());
    let dispatcher = ResourceDispatcher::new(handle.clone(), gateway);

    dispatcher.dispatch_fetch::<FetchTags>(());

    // The Request event was enqueued synchronously inside dispatch_fetch,
    // before the gateway could settle, so the snapshot sees fetching=true.
    let state = handle.snapshot().await.unwrap();
    assert!(state.fetching);

    let pending = calls.recv().await.unwrap();
    assert_eq!(pending.call, GatewayCall::get("/api/tags"));
    pending.resolve(json!([[7, "inbox"]]));

    // Wait for the settlement to be reduced and published.
    let mut watched = handle.subscribe();
    loop {
        let state = watched.borrow_and_update().clone();
        if !state.fetching {
            assert_eq!(state.data, vec![tag(7, "inbox")]);
            break;
        }
        watched.changed().await.unwrap();
    }
}
