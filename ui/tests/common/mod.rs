use std::time::Duration;

use adminui_business::LoadStatus;
use adminui_ui::AdminApp;
use adminui_ui::state::State;
use egui_kittest::Harness;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const MEMBERS_PATH: &str = "/adminui-problem/members.json";

/// Frames needed for a freshly opened modal to reach its final layout.
pub const SETTLE_STEPS: usize = 5;

/// Milliseconds to yield to the runtime so the mock server can answer.
pub const DEFAULT_NETWORK_WAIT_MS: u64 = 50;

pub struct TestCtx<'a, T = AdminApp> {
    _mock_server: MockServer,
    harness: Harness<'a, T>,
}

impl<'a, T> TestCtx<'a, T> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, T> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, T> {
        &self.harness
    }
}

impl TestCtx<'_, AdminApp> {
    /// App backed by a mock serving `members`.
    pub async fn new_app_with_members(members: Value) -> Self {
        Self::new_app_with_response(ResponseTemplate::new(200).set_body_json(members)).await
    }

    #[allow(unused)]
    pub async fn new_app_with_status(status_code: u16) -> Self {
        Self::new_app_with_response(ResponseTemplate::new(status_code)).await
    }

    pub async fn new_app_with_response(response: ResponseTemplate) -> Self {
        let (mock_server, state) = setup_test_state(response).await;
        let app = AdminApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            _mock_server: mock_server,
            harness,
        }
    }

    /// Steps the app until the members load has finished.
    pub async fn wait_for_load(&mut self) {
        for _ in 0..40 {
            self.harness.step();
            yield_wait_for_network(DEFAULT_NETWORK_WAIT_MS).await;
            self.harness.step();
            let status = self.harness.state().state().table().load_status();
            if status != LoadStatus::Loading {
                break;
            }
        }
        settle(&mut self.harness);
    }
}

async fn setup_test_state(response: ResponseTemplate) -> (MockServer, State) {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(MEMBERS_PATH))
        .respond_with(response)
        .mount(&mock_server)
        .await;

    let members_url = format!("{}{MEMBERS_PATH}", mock_server.uri());
    let state = State::test(members_url);

    (mock_server, state)
}

/// Steps until newly shown widgets sit at their final position.
///
/// A modal is laid out by a sizing pass first; clicking before that lands on its backdrop.
pub fn settle<T>(harness: &mut Harness<'_, T>) {
    for _ in 0..SETTLE_STEPS {
        harness.step();
    }
}

/// Yields to the Tokio runtime so spawned requests make progress.
pub async fn yield_wait_for_network(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

/// `count` members with ids `u1..`, names `Member N`, every third one an admin.
#[allow(unused)]
pub fn members(count: usize) -> Value {
    Value::Array(
        (1..=count)
            .map(|n| {
                json!({
                    "id": format!("u{n}"),
                    "name": format!("Member {n}"),
                    "email": format!("member{n}@mailinator.com"),
                    "role": if n % 3 == 0 { "admin" } else { "member" },
                })
            })
            .collect(),
    )
}
