//! Business layer of the user administration client.
//!
//! Everything here is UI-framework agnostic: HTTP access, wire types, view rules
//! (row actions, pagination, form modes), persisted preferences and the
//! [`UserAdminSession`] that ties them together.

pub mod api;
pub mod commands;
mod config;
pub mod http;
mod pagination;
pub mod prefs;
mod reference;
mod session;
mod spawn;
mod toast;
pub mod users;

pub use api::{ApiClient, ApiError, ApiResult, Envelope, UNREACHABLE_MESSAGE};
pub use commands::{Command, SessionEvent, UserMutation};
pub use config::{BusinessConfig, ConfigError};
pub use pagination::{PageButton, PaginationControls};
pub use reference::ReferenceData;
pub use session::{Filters, ListState, ModalState, PendingConfirm, UserAdminSession};
pub use spawn::spawn;
pub use toast::{TOAST_DURATION_SECS, Toast, ToastKind, Toasts};
