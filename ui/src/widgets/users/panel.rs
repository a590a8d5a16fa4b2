//! The user administration screen: toolbar, table, pagination and dialogs.

use egui::{Color32, Frame, Margin, Stroke, Ui};
use useradmin_business::UserAdminSession;
use useradmin_business::prefs::{PreferenceStore, UiPreferences};
use useradmin_business::users::FormMode;

use super::modals::{show_confirm_modal, show_user_form_modal};
use super::table::users_table;
use super::toolbar::{ToolbarIntent, render_toolbar};
use crate::utils::colors::TABLE_BORDER_COLOR;
use crate::widgets::{gradient_picker, pagination_bar, show_toasts};

/// Renders the whole screen and routes clicks into `session`.
///
/// The main area is disabled while a form or confirmation is open.
pub fn users_panel(
    ui: &mut Ui,
    session: &mut UserAdminSession,
    prefs: &mut UiPreferences,
    store: &mut dyn PreferenceStore,
) {
    let blocked = session.modal().is_some() || session.pending_confirm().is_some();

    ui.add_enabled_ui(!blocked, |ui| {
        ui.heading("User management");
        ui.add_space(4.0);

        match render_toolbar(ui, session) {
            Some(ToolbarIntent::Search) => session.search(),
            Some(ToolbarIntent::Refresh) => session.load_users(),
            Some(ToolbarIntent::Create) => session.open_modal(FormMode::Create),
            None => {}
        }

        gradient_picker(ui, prefs, store);
        ui.add_space(8.0);

        let clicked = Frame::NONE
            .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
            .inner_margin(Margin::ZERO)
            .fill(Color32::TRANSPARENT)
            .show(ui, |ui| users_table(ui, session, prefs, store))
            .inner;
        if let Some((action, user_id)) = clicked {
            session.handle_row_action(action, user_id);
        }

        ui.add_space(8.0);
        let pagination = session.list().page().map(|page| page.pagination);
        if let Some(page) = pagination.and_then(|p| pagination_bar(ui, &p)) {
            session.go_to_page(page);
        }
    });

    show_user_form_modal(ui.ctx(), session);
    show_confirm_modal(ui.ctx(), session);
    show_toasts(ui.ctx(), session.toasts());
}
