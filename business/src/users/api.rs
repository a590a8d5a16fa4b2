//! Endpoint helpers for user administration.
//!
//! Each function performs one call through [`ApiClient`] and decodes the envelope.
//! They hold no state; the session decides what to do with the results.

use log::info;

use super::model::{Department, PAGE_SIZE, Position, User, UserListPage, UserPayload, UserStatus};
use crate::api::{ApiClient, ApiResult};

/// Filters and page for `GET /api/users`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserListQuery {
    pub page: u32,
    pub page_size: u32,
    pub keyword: String,
    pub status: Option<UserStatus>,
    pub department_id: Option<u64>,
}

impl Default for UserListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: PAGE_SIZE,
            keyword: String::new(),
            status: None,
            department_id: None,
        }
    }
}

impl UserListQuery {
    /// Path with query string. Empty filters are omitted.
    pub fn to_path(&self) -> String {
        let mut path = format!("/api/users?page={}&page_size={}", self.page, self.page_size);

        let keyword = self.keyword.trim();
        if !keyword.is_empty() {
            path.push_str("&keyword=");
            path.push_str(&urlencoding::encode(keyword));
        }
        if let Some(status) = self.status {
            path.push_str("&status=");
            path.push_str(status.as_param());
        }
        if let Some(department_id) = self.department_id {
            path.push_str(&format!("&department_id={department_id}"));
        }
        path
    }
}

/// GET `/api/users?...`
pub async fn list_users(client: &ApiClient, query: &UserListQuery) -> ApiResult<UserListPage> {
    client.get(&query.to_path()).await?.into_data()
}

/// GET `/api/users/{id}`
pub async fn get_user(client: &ApiClient, id: u64) -> ApiResult<User> {
    client.get(&format!("/api/users/{id}")).await?.into_data()
}

/// POST `/api/users`
pub async fn create_user(client: &ApiClient, payload: &UserPayload) -> ApiResult<Option<String>> {
    info!("Creating user {}", payload.username);
    client.post("/api/users", payload).await?.into_message()
}

/// PUT `/api/users/{id}`
pub async fn update_user(
    client: &ApiClient,
    id: u64,
    payload: &UserPayload,
) -> ApiResult<Option<String>> {
    info!("Updating user {id}");
    client
        .put(&format!("/api/users/{id}"), payload)
        .await?
        .into_message()
}

/// DELETE `/api/users/{id}`
pub async fn delete_user(client: &ApiClient, id: u64) -> ApiResult<Option<String>> {
    info!("Deleting user {id}");
    client
        .delete(&format!("/api/users/{id}"))
        .await?
        .into_message()
}

/// POST `/api/users/{id}/enable`
pub async fn enable_user(client: &ApiClient, id: u64) -> ApiResult<Option<String>> {
    info!("Enabling user {id}");
    client
        .post(&format!("/api/users/{id}/enable"), &serde_json::json!({}))
        .await?
        .into_message()
}

/// POST `/api/users/{id}/disable`
pub async fn disable_user(client: &ApiClient, id: u64) -> ApiResult<Option<String>> {
    info!("Disabling user {id}");
    client
        .post(&format!("/api/users/{id}/disable"), &serde_json::json!({}))
        .await?
        .into_message()
}

/// GET `/api/departments?status=1`
pub async fn list_departments(client: &ApiClient) -> ApiResult<Vec<Department>> {
    client.get("/api/departments?status=1").await?.into_data()
}

/// GET `/api/positions?status=1`
pub async fn list_positions(client: &ApiClient) -> ApiResult<Vec<Position>> {
    client.get("/api/positions?status=1").await?.into_data()
}
