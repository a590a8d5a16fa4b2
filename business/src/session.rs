//! Page-session context for the user administration screen.
//!
//! [`UserAdminSession`] owns everything the screen shows: the current list page, filters,
//! reference data, the open modal, the pending confirmation and toasts. UI code reads it
//! and calls its methods; network work is dispatched as a [`Command`] whose
//! [`SessionEvent`] comes back over a `flume` channel and is applied by
//! [`UserAdminSession::poll_events`] (once per frame) or [`UserAdminSession::settle`]
//! (in tests).

use chrono::{DateTime, Utc};
use flume::{Receiver, Sender};
use log::{debug, info, warn};

use crate::api::ApiClient;
use crate::commands::{Command, SessionEvent, UserMutation};
use crate::config::BusinessConfig;
use crate::reference::ReferenceData;
use crate::spawn::spawn;
use crate::toast::{ToastKind, Toasts};
use crate::users::{
    FormError, FormMode, RowAction, User, UserForm, UserListPage, UserListQuery, UserStatus,
    ViewerPermissions, row_actions,
};

/// List filters. Edited in place by the toolbar; applied by [`UserAdminSession::search`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub keyword: String,
    pub status: Option<UserStatus>,
    pub department_id: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ListState {
    #[default]
    Idle,
    Loading,
    Loaded(UserListPage),
    /// The last load failed with this message.
    Error(String),
}

impl ListState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn page(&self) -> Option<&UserListPage> {
        match self {
            Self::Loaded(page) => Some(page),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// The create / edit / view modal.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalState {
    pub form: UserForm,
    /// Waiting for `GET /api/users/{id}`.
    pub loading: bool,
    /// Waiting for the save request.
    pub saving: bool,
    token: u64,
}

/// A destructive or status-changing action waiting for the viewer's confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingConfirm {
    pub mutation: UserMutation,
    pub user_id: u64,
    pub username: String,
}

impl PendingConfirm {
    pub fn prompt(&self) -> String {
        self.mutation.prompt(&self.username)
    }
}

pub struct UserAdminSession {
    client: ApiClient,
    permissions: ViewerPermissions,
    current_page: u32,
    pub filters: Filters,
    list: ListState,
    list_generation: u64,
    reference: ReferenceData,
    modal: Option<ModalState>,
    modal_token: u64,
    confirm: Option<PendingConfirm>,
    toasts: Toasts,
    in_flight: usize,
    events_tx: Sender<SessionEvent>,
    events_rx: Receiver<SessionEvent>,
}

impl UserAdminSession {
    pub fn new(client: ApiClient, permissions: ViewerPermissions) -> Self {
        let (events_tx, events_rx) = flume::unbounded();
        Self {
            client,
            permissions,
            current_page: 1,
            filters: Filters::default(),
            list: ListState::Idle,
            list_generation: 0,
            reference: ReferenceData::default(),
            modal: None,
            modal_token: 0,
            confirm: None,
            toasts: Toasts::default(),
            in_flight: 0,
            events_tx,
            events_rx,
        }
    }

    pub fn from_config(config: &BusinessConfig) -> Self {
        Self::new(ApiClient::new(config.api_base_url.clone()), config.permissions)
    }

    /// Page initialization: reference data, then the first page of users.
    pub fn start(&mut self) {
        info!("Starting user admin session against {:?}", self.client.base_url());
        self.load_reference_data();
        self.load_users();
    }

    pub fn permissions(&self) -> &ViewerPermissions {
        &self.permissions
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn list(&self) -> &ListState {
        &self.list
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn modal(&self) -> Option<&ModalState> {
        self.modal.as_ref()
    }

    /// Mutable access for form inputs.
    pub fn modal_mut(&mut self) -> Option<&mut ModalState> {
        self.modal.as_mut()
    }

    /// The open modal together with the reference data its selects need.
    pub fn modal_with_reference(&mut self) -> Option<(&mut ModalState, &ReferenceData)> {
        let reference = &self.reference;
        self.modal.as_mut().map(|modal| (modal, reference))
    }

    pub fn pending_confirm(&self) -> Option<&PendingConfirm> {
        self.confirm.as_ref()
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    pub fn prune_toasts(&mut self, now: DateTime<Utc>) {
        self.toasts.prune(now);
    }

    /// Whether any dispatched command has not reported back yet.
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    /// Action buttons for `user` given the viewer's permissions.
    pub fn actions_for(&self, user: &User) -> Vec<RowAction> {
        row_actions(&self.permissions, user)
    }

    pub fn query(&self) -> UserListQuery {
        UserListQuery {
            page: self.current_page,
            keyword: self.filters.keyword.clone(),
            status: self.filters.status,
            department_id: self.filters.department_id,
            ..UserListQuery::default()
        }
    }

    /// Reload the current page with the current filters.
    pub fn load_users(&mut self) {
        self.list_generation += 1;
        self.list = ListState::Loading;
        let query = self.query();
        debug!("Loading users: {}", query.to_path());
        self.dispatch(Command::LoadUsers {
            generation: self.list_generation,
            query,
        });
    }

    /// Apply the filters from page 1.
    pub fn search(&mut self) {
        self.current_page = 1;
        self.load_users();
    }

    pub fn go_to_page(&mut self, page: u32) {
        self.current_page = page.max(1);
        self.load_users();
    }

    pub fn load_reference_data(&mut self) {
        self.dispatch(Command::LoadDepartments);
        self.dispatch(Command::LoadPositions);
    }

    /// Open the modal in `mode`: blank form, fresh reference data, and for edit/view the
    /// target user.
    pub fn open_modal(&mut self, mode: FormMode) {
        self.modal_token += 1;
        let token = self.modal_token;
        self.modal = Some(ModalState {
            form: UserForm::new(mode),
            loading: mode.user_id().is_some(),
            saving: false,
            token,
        });
        self.load_reference_data();
        if let Some(id) = mode.user_id() {
            self.dispatch(Command::FetchUser { token, id });
        }
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Validate the form and send it. Create without a password never hits the network.
    pub fn save(&mut self) {
        let Some(modal) = self.modal.as_mut() else {
            return;
        };
        if modal.saving || modal.loading {
            return;
        }
        match modal.form.to_request() {
            Ok(request) => {
                modal.saving = true;
                let token = modal.token;
                self.dispatch(Command::Save { token, request });
            }
            Err(FormError::PasswordRequired) => {
                self.toasts
                    .push(ToastKind::Error, "Password is required for a new user");
            }
            Err(FormError::ReadOnly) => {
                debug!("Ignoring save on a read-only form");
            }
        }
    }

    /// Route a row button click.
    pub fn handle_row_action(&mut self, action: RowAction, user_id: u64) {
        match action {
            RowAction::View => self.open_modal(FormMode::View(user_id)),
            RowAction::Edit => self.open_modal(FormMode::Edit(user_id)),
            RowAction::Delete | RowAction::Enable | RowAction::Disable => {
                let Some(mutation) = UserMutation::from_row_action(action) else {
                    return;
                };
                let username = self
                    .list
                    .page()
                    .and_then(|page| page.users.iter().find(|u| u.id == user_id))
                    .map_or_else(|| format!("#{user_id}"), |u| u.username.clone());
                self.confirm = Some(PendingConfirm {
                    mutation,
                    user_id,
                    username,
                });
            }
        }
    }

    /// The viewer accepted the pending confirmation.
    pub fn confirm(&mut self) {
        if let Some(PendingConfirm {
            mutation, user_id, ..
        }) = self.confirm.take()
        {
            self.dispatch(Command::Mutate {
                mutation,
                id: user_id,
            });
        }
    }

    pub fn cancel_confirm(&mut self) {
        self.confirm = None;
    }

    /// Apply every event that has arrived. Returns whether anything was applied.
    pub fn poll_events(&mut self) -> bool {
        let mut applied = false;
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply(event);
            applied = true;
        }
        applied
    }

    /// Wait until every dispatched command (including follow-ups) has been applied.
    pub async fn settle(&mut self) {
        while self.in_flight > 0 {
            match self.events_rx.recv_async().await {
                Ok(event) => self.apply(event),
                Err(_) => break,
            }
        }
    }

    fn dispatch(&mut self, command: Command) {
        self.in_flight += 1;
        let client = self.client.clone();
        let tx = self.events_tx.clone();
        spawn(async move {
            let event = command.run(&client).await;
            // Receiver is gone only when the session was dropped.
            let _ = tx.send(event);
        });
    }

    pub fn apply(&mut self, event: SessionEvent) {
        self.in_flight = self.in_flight.saturating_sub(1);
        match event {
            SessionEvent::UsersLoaded { generation, result } => {
                if generation != self.list_generation {
                    debug!("Dropping stale user list #{generation}");
                    return;
                }
                match result {
                    Ok(page) => {
                        if page.pagination.page > 0 {
                            self.current_page = page.pagination.page;
                        }
                        self.list = ListState::Loaded(page);
                    }
                    Err(err) => {
                        warn!("Loading users failed: {err}");
                        let message = err.to_string();
                        self.toasts.push(ToastKind::Error, message.clone());
                        self.list = ListState::Error(message);
                    }
                }
            }
            SessionEvent::DepartmentsLoaded(result) => match result {
                Ok(departments) => self.reference.set_departments(departments),
                Err(err) => warn!("Loading departments failed: {err}"),
            },
            SessionEvent::PositionsLoaded(result) => match result {
                Ok(positions) => self.reference.set_positions(positions),
                Err(err) => warn!("Loading positions failed: {err}"),
            },
            SessionEvent::UserFetched { token, result } => {
                let Some(modal) = self.modal.as_mut().filter(|m| m.token == token) else {
                    debug!("Dropping user fetched for a closed modal");
                    return;
                };
                match result {
                    Ok(user) => {
                        modal.form.populate(&user);
                        modal.loading = false;
                    }
                    Err(err) => {
                        warn!("Fetching user failed: {err}");
                        self.toasts
                            .push(ToastKind::Error, format!("Load user failed: {err}"));
                        self.modal = None;
                    }
                }
            }
            SessionEvent::Saved {
                token,
                created,
                result,
            } => {
                // The submitting form may have been closed or replaced meanwhile.
                let submitter = self.modal.as_mut().filter(|m| m.token == token);
                match result {
                    Ok(message) => {
                        let fallback = if created { "User created" } else { "User updated" };
                        self.toasts.push(
                            ToastKind::Success,
                            message.unwrap_or_else(|| fallback.to_owned()),
                        );
                        if submitter.is_some() {
                            self.modal = None;
                        }
                        self.load_users();
                        self.load_reference_data();
                    }
                    Err(err) => {
                        warn!("Saving user failed: {err}");
                        if let Some(modal) = submitter {
                            modal.saving = false;
                        }
                        self.toasts
                            .push(ToastKind::Error, format!("Save failed: {err}"));
                    }
                }
            }
            SessionEvent::Mutated {
                mutation,
                id,
                result,
            } => match result {
                Ok(message) => {
                    info!("{} user {id} succeeded", mutation.label());
                    self.toasts.push(
                        ToastKind::Success,
                        message.unwrap_or_else(|| mutation.success_message().to_owned()),
                    );
                    self.load_users();
                }
                Err(err) => {
                    warn!("{} user {id} failed: {err}", mutation.label());
                    self.toasts.push(
                        ToastKind::Error,
                        format!("{} failed: {err}", mutation.label()),
                    );
                }
            },
        }
    }
}
