#![warn(clippy::all, rust_2018_idioms)]
//! egui front end for the user administration screen.

pub mod app;
pub mod storage;
pub mod utils;
#[cfg(target_arch = "wasm32")]
pub mod web;
pub mod widgets;

pub use app::UserAdminApp;
pub use storage::PrefsStore;
