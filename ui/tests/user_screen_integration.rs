//! Screen-level flows: the app against a mock backend, driven through the
//! accessibility tree.
//!
//! The accessibility click action does not reach buttons inside `TableBuilder` rows, so
//! row buttons and header resize handles are driven with raw pointer events in a
//! viewport wide enough for every column. Other flows feed row actions through the
//! session directly.

mod common;

use std::collections::HashMap;

use crate::common::{TestCtx, all_permissions, list_body, user_json};
use kittest::Queryable;
use serde_json::json;
use useradmin_business::prefs::{
    COLUMN_WIDTHS_KEY, ColumnWidths, DEFAULT_COLUMN_WIDTHS, GRADIENT_KEY, HeaderGradient,
    MIN_COLUMN_WIDTH, PreferenceStore,
};
use useradmin_business::users::{FormMode, RowAction, ViewerPermissions};
use useradmin_ui::PrefsStore;
use useradmin_ui::widgets::users::modals::{CANCEL_LABEL, CLOSE_LABEL};
use useradmin_ui::widgets::users::table::{EMPTY_LIST_MESSAGE, LIST_ERROR_MESSAGE};
use useradmin_ui::widgets::users::toolbar::ADD_USER_LABEL;
use useradmin_ui::widgets::{NEXT_LABEL, RESET_LABEL};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[derive(Default)]
struct FakeStorage(HashMap<String, String>);

impl eframe::Storage for FakeStorage {
    fn get_string(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.0.insert(key.to_owned(), value);
    }

    fn flush(&mut self) {}
}

#[tokio::test]
async fn loaded_users_are_rendered_in_the_table() {
    let body = list_body(
        vec![user_json(1, "alice", 1), user_json(2, "bob", 0)],
        1,
        1,
        2,
    );
    let mut ctx = TestCtx::new(all_permissions(), body).await;
    ctx.settle().await;

    let harness = ctx.harness_mut();
    assert!(harness.query_by_label("alice").is_some());
    assert!(harness.query_by_label("Real bob").is_some());
    assert!(harness.query_by_label("bob@example.com").is_some());
    assert!(harness.query_by_label(EMPTY_LIST_MESSAGE).is_none());
}

#[tokio::test]
async fn empty_page_shows_placeholder() {
    let mut ctx = TestCtx::new(all_permissions(), list_body(vec![], 1, 0, 0)).await;
    ctx.settle().await;

    assert!(ctx.harness_mut().query_by_label(EMPTY_LIST_MESSAGE).is_some());
}

#[tokio::test]
async fn rejected_list_shows_error_row_and_toast() {
    let body = json!({"success": false, "message": "database offline"});
    let mut ctx = TestCtx::new(all_permissions(), body).await;
    ctx.settle().await;

    let harness = ctx.harness_mut();
    assert!(harness.query_by_label(LIST_ERROR_MESSAGE).is_some());
    assert!(harness.query_by_label_contains("database offline").is_some());
}

#[tokio::test]
async fn next_page_button_loads_the_following_page() {
    let page_one = list_body(vec![user_json(1, "alice", 1)], 1, 3, 45);
    let mut ctx = TestCtx::new(all_permissions(), page_one).await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(list_body(vec![user_json(21, "carol", 1)], 2, 3, 45)),
        )
        .mount(ctx.mock_server())
        .await;
    ctx.settle().await;

    assert!(
        ctx.harness_mut()
            .query_by_label("Page 1 / 3 (45 total)")
            .is_some()
    );

    ctx.harness_mut().get_by_label(NEXT_LABEL).click();
    ctx.settle().await;

    let harness = ctx.harness_mut();
    assert!(harness.query_by_label("Page 2 / 3 (45 total)").is_some());
    assert!(harness.query_by_label("carol").is_some());
    assert_eq!(harness.state().session().current_page(), 2);
}

#[tokio::test]
async fn single_page_hides_pagination() {
    let body = list_body(vec![user_json(1, "alice", 1)], 1, 1, 1);
    let mut ctx = TestCtx::new(all_permissions(), body).await;
    ctx.settle().await;

    assert!(ctx.harness_mut().query_by_label(NEXT_LABEL).is_none());
}

#[tokio::test]
async fn add_button_requires_edit_permission() {
    let body = list_body(vec![user_json(1, "alice", 1)], 1, 1, 1);
    let mut ctx = TestCtx::new(ViewerPermissions::default(), body).await;
    ctx.settle().await;

    assert!(ctx.harness_mut().query_by_label(ADD_USER_LABEL).is_none());
}

#[tokio::test]
async fn add_button_opens_create_form_with_password() {
    let body = list_body(vec![user_json(1, "alice", 1)], 1, 1, 1);
    let mut ctx = TestCtx::new(all_permissions(), body).await;
    ctx.settle().await;

    ctx.harness_mut().get_by_label(ADD_USER_LABEL).click();
    ctx.settle().await;

    let harness = ctx.harness_mut();
    let mode = harness.state().session().modal().map(|m| m.form.mode());
    assert_eq!(mode, Some(FormMode::Create));
    assert!(harness.query_by_label("Password").is_some());

    harness.get_by_label(CANCEL_LABEL).click();
    harness.step();
    harness.step();
    assert!(harness.state().session().modal().is_none());
}

#[tokio::test]
async fn view_form_hides_password_row() {
    let body = list_body(vec![user_json(2, "bob", 1)], 1, 1, 1);
    let mut ctx = TestCtx::new(all_permissions(), body).await;
    Mock::given(method("GET"))
        .and(path("/api/users/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": user_json(2, "bob", 1)
        })))
        .mount(ctx.mock_server())
        .await;
    ctx.settle().await;

    ctx.harness_mut()
        .state_mut()
        .session_mut()
        .handle_row_action(RowAction::View, 2);
    ctx.settle().await;

    let harness = ctx.harness_mut();
    let modal = harness.state().session().modal();
    assert_eq!(modal.map(|m| m.form.username.as_str()), Some("bob"));
    assert!(harness.query_by_label(CLOSE_LABEL).is_some());
    assert!(harness.query_by_label("Password").is_none());
}

#[tokio::test]
async fn confirm_dialog_deletes_after_click() {
    let mut ctx = TestCtx::new(all_permissions(), list_body(vec![], 1, 0, 0)).await;
    Mock::given(method("DELETE"))
        .and(path("/api/users/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "User deleted"
        })))
        .expect(1)
        .mount(ctx.mock_server())
        .await;
    ctx.settle().await;

    ctx.harness_mut()
        .state_mut()
        .session_mut()
        .handle_row_action(RowAction::Delete, 5);
    ctx.harness_mut().step();
    ctx.harness_mut().step();

    let harness = ctx.harness_mut();
    assert!(harness.query_by_label_contains("\"#5\"").is_some());

    harness.get_by_label("Delete").click();
    ctx.settle().await;

    assert!(ctx.harness().state().session().pending_confirm().is_none());
    assert_eq!(ctx.requests_to("DELETE", "/api/users/5").await.len(), 1);
    assert!(ctx.harness_mut().query_by_label("User deleted").is_some());
}

#[tokio::test]
async fn cancelled_confirm_sends_nothing() {
    let body = list_body(vec![user_json(2, "bob", 1)], 1, 1, 1);
    let mut ctx = TestCtx::new(all_permissions(), body).await;
    ctx.settle().await;

    ctx.harness_mut()
        .state_mut()
        .session_mut()
        .handle_row_action(RowAction::Disable, 2);
    ctx.harness_mut().step();
    ctx.harness_mut().step();
    assert!(
        ctx.harness_mut()
            .query_by_label_contains("Disable user \"bob\"")
            .is_some()
    );

    ctx.harness_mut().get_by_label(CANCEL_LABEL).click();
    ctx.settle().await;

    assert!(ctx.harness().state().session().pending_confirm().is_none());
    assert!(ctx.requests_to("POST", "/api/users/2/disable").await.is_empty());
}

#[tokio::test]
async fn reset_layout_restores_defaults() {
    let mut storage = FakeStorage::default();
    let widths = [150.0_f64; 11];
    eframe::Storage::set_string(
        &mut storage,
        COLUMN_WIDTHS_KEY,
        serde_json::to_string(&widths).unwrap_or_default(),
    );
    eframe::Storage::set_string(
        &mut storage,
        GRADIENT_KEY,
        r##"{"start":"#000000","end":"#ffffff"}"##.to_owned(),
    );
    let store = PrefsStore::from_storage(Some(&storage));

    let body = list_body(vec![user_json(1, "alice", 1)], 1, 1, 1);
    let mut ctx = TestCtx::with_store(all_permissions(), body, store).await;
    ctx.settle().await;

    let prefs = ctx.harness().state().prefs();
    assert_eq!(prefs.columns.get(0), 150);
    assert!(prefs.columns.get(0) > MIN_COLUMN_WIDTH);
    assert_ne!(prefs.gradient, HeaderGradient::default());

    ctx.harness_mut().get_by_label(RESET_LABEL).click();
    ctx.settle().await;

    let state = ctx.harness().state();
    assert_eq!(state.prefs().columns, ColumnWidths::default());
    assert_eq!(state.prefs().gradient, HeaderGradient::default());
    assert!(state.store().is_dirty());
}

#[tokio::test]
async fn edit_button_in_row_opens_edit_form() {
    let body = list_body(vec![user_json(2, "bob", 1)], 1, 1, 1);
    let mut ctx = TestCtx::new(all_permissions(), body).await;
    Mock::given(method("GET"))
        .and(path("/api/users/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": user_json(2, "bob", 1)
        })))
        .mount(ctx.mock_server())
        .await;
    ctx.harness_mut().set_size(egui::vec2(2000.0, 1000.0));
    ctx.settle().await;

    let edit = ctx.harness_mut().get_by_label("Edit").rect().center();
    ctx.pointer_click(edit);
    ctx.settle().await;

    let session = ctx.harness().state().session();
    let modal = session.modal().map(|m| (m.form.mode(), m.form.username.as_str()));
    assert_eq!(modal, Some((FormMode::Edit(2), "bob")));
}

#[tokio::test]
async fn dragging_header_handle_resizes_and_persists_column() {
    let body = list_body(vec![user_json(2, "bob", 1)], 1, 1, 1);
    let mut ctx = TestCtx::new(all_permissions(), body).await;
    ctx.harness_mut().set_size(egui::vec2(2000.0, 1000.0));
    ctx.settle().await;

    // The header label fills its cell; the handle sits on the cell's right edge.
    let cell = ctx.harness_mut().get_by_label("Username").rect();
    let from = egui::pos2(cell.right() - 2.0, cell.center().y);
    let to = egui::pos2(from.x + 50.0, from.y);
    ctx.pointer_drag(from, to);
    ctx.harness_mut().step();

    let state = ctx.harness().state();
    let expected = DEFAULT_COLUMN_WIDTHS[1] + 50;
    assert_eq!(state.prefs().columns.get(1), expected);
    assert_eq!(state.prefs().resizing_column(), None);

    let stored = state.store().get_string(COLUMN_WIDTHS_KEY).unwrap_or_default();
    let stored: Vec<u32> = serde_json::from_str(&stored).unwrap_or_default();
    assert_eq!(stored.get(1), Some(&expected));
    assert_eq!(stored.first(), Some(&DEFAULT_COLUMN_WIDTHS[0]));
}
