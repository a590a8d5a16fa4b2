//! Filter bar above the table.

use egui::{ComboBox, Key, TextEdit, Ui};
use useradmin_business::UserAdminSession;
use useradmin_business::users::UserStatus;

pub const SEARCH_LABEL: &str = "Search";
pub const REFRESH_LABEL: &str = "Refresh";
pub const ADD_USER_LABEL: &str = "Add user";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarIntent {
    Search,
    Refresh,
    Create,
}

/// Keyword, status and department filters plus the list buttons.
pub fn render_toolbar(ui: &mut Ui, session: &mut UserAdminSession) -> Option<ToolbarIntent> {
    let departments: Vec<(u64, String)> = session
        .reference()
        .departments()
        .iter()
        .map(|d| (d.id, d.name.clone()))
        .collect();
    let can_create = session.permissions().can_edit;
    let loading = session.list().is_loading();
    let filters = &mut session.filters;
    let mut intent = None;

    ui.horizontal_wrapped(|ui| {
        let keyword = ui.add(
            TextEdit::singleline(&mut filters.keyword)
                .hint_text("Username, name or employee ID")
                .desired_width(220.0),
        );
        if keyword.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
            intent = Some(ToolbarIntent::Search);
        }

        let status_text = filters.status.map_or("All statuses", UserStatus::label);
        ComboBox::from_id_salt("user_status_filter")
            .selected_text(status_text)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut filters.status, None, "All statuses");
                for status in [UserStatus::Active, UserStatus::Inactive] {
                    ui.selectable_value(&mut filters.status, Some(status), status.label());
                }
            });

        let department_text = filters
            .department_id
            .and_then(|id| departments.iter().find(|(d, _)| *d == id))
            .map_or("All departments", |(_, name)| name.as_str());
        ComboBox::from_id_salt("user_department_filter")
            .selected_text(department_text)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut filters.department_id, None, "All departments");
                for (id, name) in &departments {
                    ui.selectable_value(&mut filters.department_id, Some(*id), name);
                }
            });

        if ui.button(SEARCH_LABEL).clicked() {
            intent = Some(ToolbarIntent::Search);
        }
        if ui.button(REFRESH_LABEL).clicked() {
            intent = Some(ToolbarIntent::Refresh);
        }
        if can_create && ui.button(ADD_USER_LABEL).clicked() {
            intent = Some(ToolbarIntent::Create);
        }
        if loading {
            ui.spinner();
        }
    });

    intent
}
