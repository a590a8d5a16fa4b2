use std::time::Duration;

use egui::{Event, Modifiers, PointerButton, Pos2};
use egui_kittest::Harness;
use serde_json::{Value, json};
use useradmin_business::users::ViewerPermissions;
use useradmin_business::{ApiClient, UserAdminSession};
use useradmin_ui::{PrefsStore, UserAdminApp};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Upper bound on frames [`TestCtx::settle`] runs while waiting for the backend.
const MAX_SETTLE_FRAMES: usize = 200;
const SETTLE_WAIT_MS: u64 = 10;

pub struct TestCtx<'a> {
    mock_server: MockServer,
    harness: Harness<'a, UserAdminApp>,
}

impl<'a> TestCtx<'a> {
    /// App against a fresh mock backend serving reference data and `list` for every
    /// `/api/users` query. Extra mocks can be mounted through [`TestCtx::mock_server`]
    /// before the first frame.
    pub async fn new(permissions: ViewerPermissions, list: Value) -> Self {
        Self::with_store(permissions, list, PrefsStore::default()).await
    }

    pub async fn with_store(permissions: ViewerPermissions, list: Value, store: PrefsStore) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;
        mount_reference_data(&mock_server).await;
        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(list))
            .with_priority(10)
            .mount(&mock_server)
            .await;

        let session = UserAdminSession::new(ApiClient::new(mock_server.uri()), permissions);
        let app = UserAdminApp::new(session, store);
        let harness = Harness::new_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }

    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, UserAdminApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, UserAdminApp> {
        &self.harness
    }

    /// Step frames until no request is in flight, then render once more.
    pub async fn settle(&mut self) {
        for _ in 0..MAX_SETTLE_FRAMES {
            self.harness.step();
            if !self.harness.state().session().is_busy() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(SETTLE_WAIT_MS)).await;
        }
        self.harness.step();
    }

    /// Press and release the primary button at `pos` with real pointer events.
    ///
    /// Needed for buttons inside table rows: the accessibility click action is not
    /// routed through `TableBuilder` cells.
    #[allow(unused)]
    pub fn pointer_click(&mut self, pos: Pos2) {
        self.harness.event(Event::PointerMoved(pos));
        self.harness.event(pointer_button(pos, true));
        self.harness.step();
        self.harness.event(pointer_button(pos, false));
        self.harness.step();
    }

    /// Drag with the primary button from `from` to `to`, one frame per phase.
    #[allow(unused)]
    pub fn pointer_drag(&mut self, from: Pos2, to: Pos2) {
        self.harness.event(Event::PointerMoved(from));
        self.harness.step();
        self.harness.event(pointer_button(from, true));
        self.harness.step();
        self.harness.event(Event::PointerMoved(to));
        self.harness.step();
        self.harness.event(pointer_button(to, false));
        self.harness.step();
    }

    #[allow(unused)]
    pub async fn requests_to(&self, http_method: &str, request_path: &str) -> Vec<wiremock::Request> {
        self.mock_server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|r| r.method.as_str() == http_method && r.url.path() == request_path)
            .collect()
    }
}

#[allow(unused)]
pub fn all_permissions() -> ViewerPermissions {
    ViewerPermissions {
        can_edit: true,
        can_delete: true,
        can_disable: true,
        current_user_id: Some(1),
    }
}

#[allow(unused)]
pub fn user_json(id: u64, username: &str, status: i64) -> Value {
    json!({
        "id": id,
        "username": username,
        "real_name": format!("Real {username}"),
        "employee_id": format!("E{id:03}"),
        "department_id": 2,
        "department": "R&D",
        "position_id": 7,
        "position": "Engineer",
        "email": format!("{username}@example.com"),
        "phone": null,
        "role": "user",
        "status": status
    })
}

#[allow(unused)]
pub fn list_body(users: Vec<Value>, page: u32, total_pages: u32, total: u64) -> Value {
    json!({
        "success": true,
        "data": {
            "users": users,
            "pagination": {
                "page": page,
                "page_size": 20,
                "total_pages": total_pages,
                "total": total
            }
        }
    })
}

fn pointer_button(pos: Pos2, pressed: bool) -> Event {
    Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::NONE,
    }
}

async fn mount_reference_data(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/departments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{"id": 2, "name": "R&D"}]
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/positions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{"id": 7, "name": "Engineer", "role": "user"}]
        })))
        .mount(server)
        .await;
}
