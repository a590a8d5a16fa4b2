//! Per-row action visibility.
//!
//! The hosting page hands over the viewer's permission flags; each table row gets the
//! action buttons those flags allow, minus status/delete actions on the viewer's own row.

use serde::{Deserialize, Serialize};

use super::model::User;

/// Permission flags of the signed-in viewer.
///
/// Field names follow the `userPermissions` object the web page exposes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerPermissions {
    #[serde(default)]
    pub can_edit: bool,
    #[serde(default)]
    pub can_delete: bool,
    #[serde(default)]
    pub can_disable: bool,
    #[serde(default)]
    pub current_user_id: Option<u64>,
}

impl ViewerPermissions {
    pub fn is_self(&self, user: &User) -> bool {
        self.current_user_id == Some(user.id)
    }
}

/// A button in a row's action cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowAction {
    View,
    Edit,
    Enable,
    Disable,
    Delete,
}

impl RowAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::View => "View",
            Self::Edit => "Edit",
            Self::Enable => "Enable",
            Self::Disable => "Disable",
            Self::Delete => "Delete",
        }
    }

    pub fn is_destructive(self) -> bool {
        matches!(self, Self::Disable | Self::Delete)
    }
}

/// Buttons shown for `user`, in display order.
///
/// Never empty: when nothing else applies the row gets a single [`RowAction::View`].
pub fn row_actions(permissions: &ViewerPermissions, user: &User) -> Vec<RowAction> {
    let is_self = permissions.is_self(user);
    let mut actions = Vec::with_capacity(3);

    if permissions.can_edit {
        actions.push(RowAction::Edit);
    }
    if permissions.can_disable && !is_self {
        actions.push(if user.status.is_active() {
            RowAction::Disable
        } else {
            RowAction::Enable
        });
    }
    if permissions.can_delete && !is_self {
        actions.push(RowAction::Delete);
    }

    if actions.is_empty() {
        actions.push(RowAction::View);
    }
    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::model::{Role, UserStatus};

    fn user(id: u64, status: UserStatus) -> User {
        User {
            id,
            username: format!("user{id}"),
            real_name: None,
            employee_id: None,
            department_id: None,
            department_name: None,
            position_id: None,
            position_name: None,
            email: None,
            phone: None,
            role: Role::User,
            status,
        }
    }

    fn perms(can_edit: bool, can_delete: bool, can_disable: bool) -> ViewerPermissions {
        ViewerPermissions {
            can_edit,
            can_delete,
            can_disable,
            current_user_id: Some(1),
        }
    }

    #[test]
    fn no_permissions_shows_only_view() {
        let actions = row_actions(&ViewerPermissions::default(), &user(5, UserStatus::Active));
        assert_eq!(actions, vec![RowAction::View]);
    }

    #[test]
    fn every_permission_combination_matches_flags() {
        for bits in 0..8u8 {
            let (edit, delete, disable) = (bits & 1 != 0, bits & 2 != 0, bits & 4 != 0);
            let permissions = perms(edit, delete, disable);

            for status in [UserStatus::Active, UserStatus::Inactive] {
                let other = row_actions(&permissions, &user(2, status));
                let own = row_actions(&permissions, &user(1, status));

                assert_eq!(other.contains(&RowAction::Edit), edit, "edit on {bits:03b}");
                assert_eq!(own.contains(&RowAction::Edit), edit, "own edit on {bits:03b}");
                assert_eq!(other.contains(&RowAction::Delete), delete, "delete on {bits:03b}");
                assert!(!own.contains(&RowAction::Delete), "own delete on {bits:03b}");

                let toggle = if status.is_active() {
                    RowAction::Disable
                } else {
                    RowAction::Enable
                };
                assert_eq!(other.contains(&toggle), disable, "toggle on {bits:03b}");
                assert!(!own.contains(&toggle), "own toggle on {bits:03b}");

                assert_eq!(
                    other == vec![RowAction::View],
                    !(edit || delete || disable),
                    "view fallback on {bits:03b}"
                );
            }
        }
    }

    #[test]
    fn own_row_without_edit_falls_back_to_view() {
        let permissions = perms(false, true, true);
        assert_eq!(
            row_actions(&permissions, &user(1, UserStatus::Active)),
            vec![RowAction::View]
        );
    }

    #[test]
    fn inactive_row_offers_enable() {
        let permissions = perms(true, true, true);
        assert_eq!(
            row_actions(&permissions, &user(3, UserStatus::Inactive)),
            vec![RowAction::Edit, RowAction::Enable, RowAction::Delete]
        );
    }

    #[test]
    fn permissions_parse_page_object() {
        let permissions: ViewerPermissions = serde_json::from_str(
            r#"{"canEdit": true, "canDelete": false, "canDisable": true, "currentUserId": 4}"#,
        )
        .unwrap();
        assert_eq!(permissions, ViewerPermissions {
            can_edit: true,
            can_delete: false,
            can_disable: true,
            current_user_id: Some(4),
        });

        let empty: ViewerPermissions = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, ViewerPermissions::default());
    }
}
