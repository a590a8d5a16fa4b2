//! Wire types for `/api/users`, `/api/departments` and `/api/positions`.

use serde::{Deserialize, Serialize};

/// Fixed page size for the user list.
pub const PAGE_SIZE: u32 = 20;

/// Role of a user. Derived from the position on the backend, never set by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    Admin,
    #[default]
    #[serde(other)]
    User,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::Admin => "admin",
            Self::User => "user",
        }
    }

    /// Human readable badge label.
    pub fn label(self) -> &'static str {
        match self {
            Self::SuperAdmin => "Super admin",
            Self::Admin => "Admin",
            Self::User => "User",
        }
    }
}

/// Account status, `1` (active) or `0` (inactive) on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

impl UserStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    pub fn is_active(self) -> bool {
        self == Self::Active
    }

    /// Value used in the `status` query parameter.
    pub fn as_param(self) -> &'static str {
        match self {
            Self::Active => "1",
            Self::Inactive => "0",
        }
    }
}

impl TryFrom<i64> for UserStatus {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Active),
            0 => Ok(Self::Inactive),
            other => Err(format!("invalid user status: {other}")),
        }
    }
}

impl From<UserStatus> for i64 {
    fn from(status: UserStatus) -> Self {
        match status {
            UserStatus::Active => 1,
            UserStatus::Inactive => 0,
        }
    }
}

/// A user record as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub real_name: Option<String>,
    #[serde(default)]
    pub employee_id: Option<String>,
    #[serde(default)]
    pub department_id: Option<u64>,
    /// Department display name, joined by the backend.
    #[serde(default, rename = "department")]
    pub department_name: Option<String>,
    #[serde(default)]
    pub position_id: Option<u64>,
    /// Position display name, joined by the backend.
    #[serde(default, rename = "position")]
    pub position_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub status: UserStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub id: u64,
    pub name: String,
    /// Role granted to holders of this position.
    #[serde(default)]
    pub role: Role,
}

/// Pagination descriptor returned with every list page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    pub total_pages: u32,
    pub total: u64,
}

fn default_page_size() -> u32 {
    PAGE_SIZE
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: PAGE_SIZE,
            total_pages: 0,
            total: 0,
        }
    }
}

/// `data` of `GET /api/users`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserListPage {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// Body of `POST /api/users` and `PUT /api/users/{id}`.
///
/// There is no `role` field: the backend assigns it from `position_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserPayload {
    pub username: String,
    pub real_name: String,
    pub employee_id: String,
    pub department_id: Option<u64>,
    pub position_id: Option<u64>,
    pub email: String,
    pub phone: String,
    pub status: UserStatus,
    /// Omitted when empty so an edit leaves the stored password unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}
