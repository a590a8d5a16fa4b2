//! Network work dispatched by [`crate::UserAdminSession`].
//!
//! A [`Command`] is run off the UI thread and always resolves to exactly one
//! [`SessionEvent`]; the session applies that event on the next poll. Commands never
//! see the session itself.

use crate::api::{ApiClient, ApiResult};
use crate::users::api as users_api;
use crate::users::{
    Department, Position, RowAction, SaveRequest, User, UserListPage, UserListQuery,
};

/// A confirmed, state-changing row action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserMutation {
    Delete,
    Enable,
    Disable,
}

impl UserMutation {
    pub fn from_row_action(action: RowAction) -> Option<Self> {
        match action {
            RowAction::Delete => Some(Self::Delete),
            RowAction::Enable => Some(Self::Enable),
            RowAction::Disable => Some(Self::Disable),
            RowAction::View | RowAction::Edit => None,
        }
    }

    /// Used as `"{label} failed: ..."`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Delete => "Delete",
            Self::Enable => "Enable",
            Self::Disable => "Disable",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Self::Delete => "User deleted",
            Self::Enable => "User enabled",
            Self::Disable => "User disabled",
        }
    }

    pub fn prompt(self, username: &str) -> String {
        match self {
            Self::Delete => {
                format!("Delete user \"{username}\"? This cannot be undone.")
            }
            Self::Enable => format!("Enable user \"{username}\"?"),
            Self::Disable => format!("Disable user \"{username}\"? They will no longer be able to sign in."),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    LoadUsers { generation: u64, query: UserListQuery },
    LoadDepartments,
    LoadPositions,
    FetchUser { token: u64, id: u64 },
    Save { token: u64, request: SaveRequest },
    Mutate { mutation: UserMutation, id: u64 },
}

/// Result of a finished [`Command`].
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    UsersLoaded {
        generation: u64,
        result: ApiResult<UserListPage>,
    },
    DepartmentsLoaded(ApiResult<Vec<Department>>),
    PositionsLoaded(ApiResult<Vec<Position>>),
    /// `token` identifies the modal that asked; stale answers are dropped.
    UserFetched { token: u64, result: ApiResult<User> },
    /// `token` identifies the modal that submitted.
    Saved {
        token: u64,
        created: bool,
        result: ApiResult<Option<String>>,
    },
    Mutated {
        mutation: UserMutation,
        id: u64,
        result: ApiResult<Option<String>>,
    },
}

impl Command {
    pub async fn run(self, client: &ApiClient) -> SessionEvent {
        match self {
            Self::LoadUsers { generation, query } => SessionEvent::UsersLoaded {
                generation,
                result: users_api::list_users(client, &query).await,
            },
            Self::LoadDepartments => {
                SessionEvent::DepartmentsLoaded(users_api::list_departments(client).await)
            }
            Self::LoadPositions => {
                SessionEvent::PositionsLoaded(users_api::list_positions(client).await)
            }
            Self::FetchUser { token, id } => SessionEvent::UserFetched {
                token,
                result: users_api::get_user(client, id).await,
            },
            Self::Save {
                token,
                request: SaveRequest::Create(payload),
            } => SessionEvent::Saved {
                token,
                created: true,
                result: users_api::create_user(client, &payload).await,
            },
            Self::Save {
                token,
                request: SaveRequest::Update { id, payload },
            } => SessionEvent::Saved {
                token,
                created: false,
                result: users_api::update_user(client, id, &payload).await,
            },
            Self::Mutate { mutation, id } => {
                let result = match mutation {
                    UserMutation::Delete => users_api::delete_user(client, id).await,
                    UserMutation::Enable => users_api::enable_user(client, id).await,
                    UserMutation::Disable => users_api::disable_user(client, id).await,
                };
                SessionEvent::Mutated {
                    mutation,
                    id,
                    result,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_status_and_delete_actions_need_confirmation() {
        assert_eq!(
            UserMutation::from_row_action(RowAction::Delete),
            Some(UserMutation::Delete)
        );
        assert_eq!(
            UserMutation::from_row_action(RowAction::Enable),
            Some(UserMutation::Enable)
        );
        assert_eq!(
            UserMutation::from_row_action(RowAction::Disable),
            Some(UserMutation::Disable)
        );
        assert_eq!(UserMutation::from_row_action(RowAction::View), None);
        assert_eq!(UserMutation::from_row_action(RowAction::Edit), None);
    }

    #[test]
    fn prompt_names_the_user() {
        assert!(UserMutation::Delete.prompt("zhangsan").contains("\"zhangsan\""));
        assert!(UserMutation::Enable.prompt("lisi").starts_with("Enable"));
    }
}
