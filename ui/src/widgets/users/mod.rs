//! User administration widgets.
//!
//! - `panel`: the screen, wiring everything to the session
//! - `toolbar`: filters and list buttons
//! - `table`: the resizable user table
//! - `modals`: user form and confirmation dialogs

pub mod modals;
mod panel;
pub mod table;
pub mod toolbar;

pub use panel::users_panel;
