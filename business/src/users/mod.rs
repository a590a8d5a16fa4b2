//! User administration domain module.
//!
//! - `model`: wire types for users, departments and positions
//! - `api`: one async helper per endpoint
//! - `form`: the create / edit / view form model
//! - `permissions`: which row actions a viewer gets
//! - `role`: role derivation from positions
//!
//! UI code should not talk to the endpoints directly; it goes through
//! [`crate::UserAdminSession`].

pub mod api;
pub mod form;
pub mod model;
pub mod permissions;
pub mod role;

pub use api::UserListQuery;
pub use form::{FormError, FormField, FormMode, SaveRequest, UserForm};
pub use model::{
    Department, PAGE_SIZE, Pagination, Position, Role, User, UserListPage, UserPayload, UserStatus,
};
pub use permissions::{RowAction, ViewerPermissions, row_actions};
pub use role::{role_for_position, role_for_position_id};
