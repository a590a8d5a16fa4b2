//! The create / edit / view user form.
//!
//! One form model serves all three modes. The mode decides which inputs are enabled,
//! whether the submit controls show, and whether a password is mandatory.

use super::model::{Role, User, UserPayload, UserStatus};
use crate::reference::ReferenceData;

/// Client-side validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("A password is required when creating a user")]
    PasswordRequired,
    #[error("This form is read-only")]
    ReadOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(u64),
    View(u64),
}

impl FormMode {
    pub fn user_id(self) -> Option<u64> {
        match self {
            Self::Create => None,
            Self::Edit(id) | Self::View(id) => Some(id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Username,
    RealName,
    EmployeeId,
    Department,
    Position,
    Email,
    Phone,
    Password,
    Role,
    Status,
}

/// What a valid submit turns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveRequest {
    Create(UserPayload),
    Update { id: u64, payload: UserPayload },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserForm {
    mode: FormMode,
    pub username: String,
    pub real_name: String,
    pub employee_id: String,
    pub department_id: Option<u64>,
    pub position_id: Option<u64>,
    pub email: String,
    pub phone: String,
    /// Empty means "unchanged" when editing.
    pub password: String,
    pub status: UserStatus,
    /// Role the backend reported, shown when the position is not in the reference data.
    loaded_role: Role,
}

impl UserForm {
    /// A blank form in `mode`.
    pub fn new(mode: FormMode) -> Self {
        Self {
            mode,
            username: String::new(),
            real_name: String::new(),
            employee_id: String::new(),
            department_id: None,
            position_id: None,
            email: String::new(),
            phone: String::new(),
            password: String::new(),
            status: UserStatus::Active,
            loaded_role: Role::User,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Copy a fetched user into the form. The password stays empty.
    pub fn populate(&mut self, user: &User) {
        self.username.clone_from(&user.username);
        self.real_name = user.real_name.clone().unwrap_or_default();
        self.employee_id = user.employee_id.clone().unwrap_or_default();
        self.department_id = user.department_id;
        self.position_id = user.position_id;
        self.email = user.email.clone().unwrap_or_default();
        self.phone = user.phone.clone().unwrap_or_default();
        self.password.clear();
        self.status = user.status;
        self.loaded_role = user.role;
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add user",
            FormMode::Edit(_) => "Edit user",
            FormMode::View(_) => "View user",
        }
    }

    pub fn is_read_only(&self) -> bool {
        matches!(self.mode, FormMode::View(_))
    }

    pub fn shows_submit(&self) -> bool {
        !self.is_read_only()
    }

    pub fn password_required(&self) -> bool {
        self.mode == FormMode::Create
    }

    /// Role is always read-only; everything else follows the mode.
    pub fn field_enabled(&self, field: FormField) -> bool {
        field != FormField::Role && !self.is_read_only()
    }

    /// Role shown in the read-only role field, derived from the selected position.
    pub fn display_role(&self, reference: &ReferenceData) -> Role {
        reference.role_for(self.position_id, self.loaded_role)
    }

    /// Validate and build the request to send.
    pub fn to_request(&self) -> Result<SaveRequest, FormError> {
        let password = (!self.password.is_empty()).then(|| self.password.clone());

        let payload = |password| UserPayload {
            username: self.username.trim().to_owned(),
            real_name: self.real_name.trim().to_owned(),
            employee_id: self.employee_id.trim().to_owned(),
            department_id: self.department_id,
            position_id: self.position_id,
            email: self.email.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            status: self.status,
            password,
        };

        match self.mode {
            FormMode::View(_) => Err(FormError::ReadOnly),
            FormMode::Create => {
                let password = password.ok_or(FormError::PasswordRequired)?;
                Ok(SaveRequest::Create(payload(Some(password))))
            }
            FormMode::Edit(id) => Ok(SaveRequest::Update {
                id,
                payload: payload(password),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::model::{Department, Position};

    fn sample_user() -> User {
        User {
            id: 12,
            username: "wangwu".to_owned(),
            real_name: Some("Wang Wu".to_owned()),
            employee_id: Some("E012".to_owned()),
            department_id: Some(2),
            department_name: Some("Engineering".to_owned()),
            position_id: Some(7),
            position_name: Some("Architect".to_owned()),
            email: Some("wangwu@example.com".to_owned()),
            phone: None,
            role: Role::Admin,
            status: UserStatus::Inactive,
        }
    }

    fn reference() -> ReferenceData {
        ReferenceData::new(
            vec![Department {
                id: 2,
                name: "Engineering".to_owned(),
            }],
            vec![
                Position {
                    id: 1,
                    name: "General manager".to_owned(),
                    role: Role::SuperAdmin,
                },
                Position {
                    id: 3,
                    name: "Staff".to_owned(),
                    role: Role::User,
                },
            ],
        )
    }

    #[test]
    fn create_without_password_is_rejected() {
        let mut form = UserForm::new(FormMode::Create);
        form.username = "new".to_owned();
        assert_eq!(form.to_request(), Err(FormError::PasswordRequired));
    }

    #[test]
    fn create_with_password_sends_it() {
        let mut form = UserForm::new(FormMode::Create);
        form.username = " new ".to_owned();
        form.password = "secret".to_owned();
        form.position_id = Some(3);

        let Ok(SaveRequest::Create(payload)) = form.to_request() else {
            panic!("expected a create request");
        };
        assert_eq!(payload.username, "new");
        assert_eq!(payload.password.as_deref(), Some("secret"));
        assert_eq!(payload.position_id, Some(3));
    }

    #[test]
    fn edit_with_empty_password_leaves_it_unchanged() {
        let mut form = UserForm::new(FormMode::Edit(12));
        form.populate(&sample_user());

        let Ok(SaveRequest::Update { id, payload }) = form.to_request() else {
            panic!("expected an update request");
        };
        assert_eq!(id, 12);
        assert_eq!(payload.password, None);
        assert_eq!(payload.department_id, Some(2));
        assert_eq!(payload.status, UserStatus::Inactive);
    }

    #[test]
    fn view_mode_disables_everything() {
        let form = UserForm::new(FormMode::View(3));
        assert!(form.is_read_only());
        assert!(!form.shows_submit());
        assert!(!form.field_enabled(FormField::Username));
        assert!(!form.field_enabled(FormField::Status));
        assert_eq!(form.to_request(), Err(FormError::ReadOnly));
    }

    #[test]
    fn role_field_is_never_editable() {
        for mode in [FormMode::Create, FormMode::Edit(1), FormMode::View(1)] {
            let form = UserForm::new(mode);
            assert!(!form.field_enabled(FormField::Role), "{mode:?}");
        }
        let edit = UserForm::new(FormMode::Edit(1));
        assert!(edit.field_enabled(FormField::Password));
        assert!(!edit.password_required());
        assert!(UserForm::new(FormMode::Create).password_required());
    }

    #[test]
    fn display_role_follows_position_then_loaded_role() {
        let reference = reference();
        let mut form = UserForm::new(FormMode::Edit(12));
        form.populate(&sample_user());

        // Position 7 is not in the reference data, keep what the backend reported.
        assert_eq!(form.display_role(&reference), Role::Admin);

        form.position_id = Some(1);
        assert_eq!(form.display_role(&reference), Role::SuperAdmin);

        form.position_id = Some(3);
        assert_eq!(form.display_role(&reference), Role::User);
    }
}
