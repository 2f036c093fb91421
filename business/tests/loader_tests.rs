//! Members loader tests against a mock server.

#![cfg(not(target_arch = "wasm32"))]

use std::time::Duration;

use adminui_business::{
    LOAD_ERROR_MESSAGE, LoadError, LoadMembersCommand, LoadStatus, UserTableState, fetch_members,
};
use adminui_states::Store;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MEMBERS_PATH: &str = "/adminui-problem/members.json";

fn members_body() -> serde_json::Value {
    json!([
        { "id": "1", "name": "Aaron Miles", "email": "aaron@mailinator.com", "role": "member" },
        { "id": "2", "name": "Aishwarya Naik", "email": "aishwarya@mailinator.com", "role": "member" },
        { "id": "3", "name": "Arvind Kumar", "email": "arvind@mailinator.com", "role": "admin" }
    ])
}

async fn mock_members(response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(MEMBERS_PATH))
        .respond_with(response)
        .mount(&server)
        .await;
    server
}

fn members_url(server: &MockServer) -> String {
    format!("{}{MEMBERS_PATH}", server.uri())
}

/// Syncs the store until the load leaves `Loading`.
async fn wait_for_load(store: &mut Store<UserTableState>) -> LoadStatus {
    for _ in 0..200 {
        store.sync();
        let status = store.state().load_status();
        if status != LoadStatus::Loading {
            return status;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    store.state().load_status()
}

#[tokio::test]
async fn test_fetch_members_decodes_records() {
    let server = mock_members(ResponseTemplate::new(200).set_body_json(members_body())).await;

    let records = fetch_members(&members_url(&server)).await.expect("members");

    assert_eq!(records.len(), 3);
    assert_eq!(records[2].name, "Arvind Kumar");
    assert_eq!(records[2].role, "admin");
}

#[tokio::test]
async fn test_fetch_members_reports_status() {
    let server = mock_members(ResponseTemplate::new(500)).await;

    let err = fetch_members(&members_url(&server))
        .await
        .expect_err("500 must fail");

    assert!(matches!(err, LoadError::Status(500)), "got {err:?}");
}

#[tokio::test]
async fn test_fetch_members_reports_malformed_body() {
    let server =
        mock_members(ResponseTemplate::new(200).set_body_string("<html>not json</html>")).await;

    let err = fetch_members(&members_url(&server))
        .await
        .expect_err("html must fail");

    assert!(matches!(err, LoadError::Malformed(_)), "got {err:?}");
}

#[tokio::test]
async fn test_fetch_members_reports_transport_error() {
    let err = fetch_members("http://127.0.0.1:1/members.json")
        .await
        .expect_err("nothing listens on port 1");

    assert!(matches!(err, LoadError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn test_load_command_fills_table() {
    let server = mock_members(ResponseTemplate::new(200).set_body_json(members_body())).await;
    let mut store = Store::new(UserTableState::default());

    let handle = LoadMembersCommand::new(members_url(&server))
        .spawn(&mut store)
        .expect("runtime available");
    assert!(handle.is_some());
    assert_eq!(store.state().load_status(), LoadStatus::Loading);

    assert_eq!(wait_for_load(&mut store).await, LoadStatus::Loaded);
    assert_eq!(store.state().records().len(), 3);
    assert_eq!(store.state().visible().len(), 3);
    assert!(store.state().error_message().is_none());
}

#[tokio::test]
async fn test_load_command_failure_shows_message() {
    let server = mock_members(ResponseTemplate::new(500)).await;
    let mut store = Store::new(UserTableState::default());

    LoadMembersCommand::new(members_url(&server))
        .spawn(&mut store)
        .expect("runtime available");

    assert_eq!(wait_for_load(&mut store).await, LoadStatus::Failed);
    assert!(store.state().records().is_empty());
    assert_eq!(store.state().error_message(), Some(LOAD_ERROR_MESSAGE));
}

#[tokio::test]
async fn test_load_command_runs_once() {
    let server = mock_members(ResponseTemplate::new(200).set_body_json(members_body())).await;
    let mut store = Store::new(UserTableState::default());

    let first = LoadMembersCommand::new(members_url(&server))
        .spawn(&mut store)
        .expect("runtime available");
    let second = LoadMembersCommand::new(members_url(&server))
        .spawn(&mut store)
        .expect("runtime available");

    assert!(first.is_some());
    assert!(second.is_none());
    assert_eq!(store.tasks().len(), 1);

    wait_for_load(&mut store).await;
    let third = LoadMembersCommand::new(members_url(&server))
        .spawn(&mut store)
        .expect("runtime available");
    assert!(third.is_none());
}

#[tokio::test]
async fn test_cancelled_load_dispatches_nothing() {
    let server = mock_members(
        ResponseTemplate::new(200)
            .set_body_json(members_body())
            .set_delay(Duration::from_millis(300)),
    )
    .await;
    let mut store = Store::new(UserTableState::default());

    let handle = LoadMembersCommand::new(members_url(&server))
        .spawn(&mut store)
        .expect("runtime available")
        .expect("first load starts");
    store.cancel_all();
    assert!(handle.is_cancelled());

    tokio::time::sleep(Duration::from_millis(600)).await;

    assert_eq!(store.sync(), 0);
    assert_eq!(store.state().load_status(), LoadStatus::Loading);
    assert!(store.state().records().is_empty());
}

#[test]
fn test_load_command_without_runtime_fails() {
    let mut store = Store::new(UserTableState::default());

    let result = LoadMembersCommand::new("http://127.0.0.1:1/members.json").spawn(&mut store);

    assert!(result.is_err());
    assert_eq!(store.state().load_status(), LoadStatus::Idle);
}
