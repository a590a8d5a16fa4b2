//! User table.
//!
//! - `columns`: labels and widths
//! - `header`: gradient header with resize handles
//! - `row`: one row per user
//! - `cells`: per-column cell renderers

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use egui::{Align, Frame, Layout, Margin, ScrollArea, Stroke, Ui};
use egui_extras::TableBuilder;
use useradmin_business::prefs::{PreferenceStore, UiPreferences};
use useradmin_business::users::RowAction;
use useradmin_business::{ListState, UserAdminSession};

pub use cells::EMPTY_CELL;
use columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns, total_width};
use header::render_table_header;
use row::render_user_row;

use crate::utils::colors::TABLE_BORDER_COLOR;

pub const LOADING_MESSAGE: &str = "Loading...";
pub const LIST_ERROR_MESSAGE: &str = "Failed to load, refresh to retry";
pub const EMPTY_LIST_MESSAGE: &str = "No users found";

/// Renders the table. Returns the clicked row action and the user it belongs to.
pub fn users_table(
    ui: &mut Ui,
    session: &UserAdminSession,
    prefs: &mut UiPreferences,
    store: &mut dyn PreferenceStore,
) -> Option<(RowAction, u64)> {
    let mut clicked = None;
    let users = session.list().page().map_or(&[][..], |page| page.users.as_slice());
    let width = total_width(&prefs.columns);

    ScrollArea::horizontal()
        .id_salt("user_table_scroll")
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .id_salt("user_table")
                .striped(true)
                .vscroll(false)
                .cell_layout(Layout::left_to_right(Align::Center));
            for column in table_columns(&prefs.columns) {
                table = table.column(column);
            }

            table
                .header(HEADER_HEIGHT, |mut header| {
                    render_table_header(&mut header, prefs, store);
                })
                .body(|mut body| {
                    for user in users {
                        let actions = session.actions_for(user);
                        body.row(ROW_HEIGHT, |mut row| {
                            if let Some(action) = render_user_row(&mut row, user, &actions) {
                                clicked = Some((action, user.id));
                            }
                        });
                    }
                });

            if let Some(message) = placeholder_message(session.list()) {
                placeholder_row(ui, message, width);
            }
        });

    clicked
}

/// Single full-width row shown instead of user rows.
pub fn placeholder_message(list: &ListState) -> Option<&'static str> {
    match list {
        ListState::Idle | ListState::Loading => Some(LOADING_MESSAGE),
        ListState::Error(_) => Some(LIST_ERROR_MESSAGE),
        ListState::Loaded(page) if page.users.is_empty() => Some(EMPTY_LIST_MESSAGE),
        ListState::Loaded(_) => None,
    }
}

fn placeholder_row(ui: &mut Ui, message: &str, width: f32) {
    Frame::NONE
        .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
        .inner_margin(Margin::symmetric(8, 10))
        .show(ui, |ui| {
            ui.set_width(width);
            ui.vertical_centered(|ui| {
                if message == LOADING_MESSAGE {
                    ui.spinner();
                }
                ui.label(message);
            });
        });
}
