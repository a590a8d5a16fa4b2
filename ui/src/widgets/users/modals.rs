//! The create / edit / view form window and the action confirmation dialog.

use egui::{Align2, Button, ComboBox, Context, Grid, Id, RichText, TextEdit, Ui, Window};
use useradmin_business::users::{FormField, UserForm, UserStatus};
use useradmin_business::{ReferenceData, UserAdminSession};

use crate::utils::colors::{COLOR_AMBER, COLOR_RED};

pub const SAVE_LABEL: &str = "Save";
pub const CANCEL_LABEL: &str = "Cancel";
pub const CLOSE_LABEL: &str = "Close";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormIntent {
    Save,
    Close,
}

/// Shows the user form window while the session has one open.
pub fn show_user_form_modal(ctx: &Context, session: &mut UserAdminSession) {
    let Some((modal, reference)) = session.modal_with_reference() else {
        return;
    };
    let mut open = true;
    let mut intent = None;

    Window::new(modal.form.title())
        .id(Id::new("user_form_modal"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            if modal.loading {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading user...");
                });
                return;
            }

            render_form_fields(ui, &mut modal.form, reference);
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                if modal.form.shows_submit() {
                    let label = if modal.saving { "Saving..." } else { SAVE_LABEL };
                    if ui.add_enabled(!modal.saving, Button::new(label)).clicked() {
                        intent = Some(FormIntent::Save);
                    }
                }
                let close = if modal.form.is_read_only() {
                    CLOSE_LABEL
                } else {
                    CANCEL_LABEL
                };
                if ui.button(close).clicked() {
                    intent = Some(FormIntent::Close);
                }
            });
        });

    if !open {
        intent = Some(FormIntent::Close);
    }
    match intent {
        Some(FormIntent::Save) => session.save(),
        Some(FormIntent::Close) => session.close_modal(),
        None => {}
    }
}

fn render_form_fields(ui: &mut Ui, form: &mut UserForm, reference: &ReferenceData) {
    let departments: Vec<(u64, &str)> = reference
        .departments()
        .iter()
        .map(|d| (d.id, d.name.as_str()))
        .collect();
    let positions: Vec<(u64, &str)> = reference
        .positions()
        .iter()
        .map(|p| (p.id, p.name.as_str()))
        .collect();

    Grid::new("user_form_grid")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            let enabled = form.field_enabled(FormField::Username);
            text_row(ui, "Username", &mut form.username, enabled);
            let enabled = form.field_enabled(FormField::RealName);
            text_row(ui, "Name", &mut form.real_name, enabled);
            let enabled = form.field_enabled(FormField::EmployeeId);
            text_row(ui, "Employee ID", &mut form.employee_id, enabled);

            let enabled = form.field_enabled(FormField::Department);
            select_row(
                ui,
                "Department",
                "user_form_department",
                &mut form.department_id,
                &departments,
                enabled,
            );
            let enabled = form.field_enabled(FormField::Position);
            select_row(
                ui,
                "Position",
                "user_form_position",
                &mut form.position_id,
                &positions,
                enabled,
            );

            // Follows the selected position; the backend assigns it on save.
            let mut role = form.display_role(reference).label().to_owned();
            ui.label("Role");
            ui.add_enabled(
                form.field_enabled(FormField::Role),
                TextEdit::singleline(&mut role),
            );
            ui.end_row();

            let enabled = form.field_enabled(FormField::Email);
            text_row(ui, "Email", &mut form.email, enabled);
            let enabled = form.field_enabled(FormField::Phone);
            text_row(ui, "Phone", &mut form.phone, enabled);

            if !form.is_read_only() {
                let hint = if form.password_required() {
                    "Required"
                } else {
                    "Leave empty to keep unchanged"
                };
                let enabled = form.field_enabled(FormField::Password);
                ui.label("Password");
                ui.add_enabled(
                    enabled,
                    TextEdit::singleline(&mut form.password)
                        .password(true)
                        .hint_text(hint),
                );
                ui.end_row();
            }

            let enabled = form.field_enabled(FormField::Status);
            ui.label("Status");
            ui.add_enabled_ui(enabled, |ui| {
                ComboBox::from_id_salt("user_form_status")
                    .selected_text(form.status.label())
                    .show_ui(ui, |ui| {
                        for status in [UserStatus::Active, UserStatus::Inactive] {
                            ui.selectable_value(&mut form.status, status, status.label());
                        }
                    });
            });
            ui.end_row();
        });
}

fn text_row(ui: &mut Ui, label: &str, value: &mut String, enabled: bool) {
    ui.label(label);
    ui.add_enabled(enabled, TextEdit::singleline(value).desired_width(240.0));
    ui.end_row();
}

fn select_row(
    ui: &mut Ui,
    label: &str,
    id_salt: &str,
    selected: &mut Option<u64>,
    options: &[(u64, &str)],
    enabled: bool,
) {
    ui.label(label);
    let current = selected
        .and_then(|id| options.iter().find(|(option, _)| *option == id))
        .map_or("Select...", |(_, name)| *name);
    ui.add_enabled_ui(enabled, |ui| {
        ComboBox::from_id_salt(id_salt)
            .selected_text(current)
            .width(240.0)
            .show_ui(ui, |ui| {
                ui.selectable_value(selected, None, "Select...");
                for &(id, name) in options {
                    ui.selectable_value(selected, Some(id), name);
                }
            });
    });
    ui.end_row();
}

/// Shows the confirmation dialog for a pending delete / enable / disable.
pub fn show_confirm_modal(ctx: &Context, session: &mut UserAdminSession) {
    let Some(pending) = session.pending_confirm() else {
        return;
    };
    let mutation = pending.mutation;
    let prompt = pending.prompt();
    let mut open = true;
    let mut decision = None;

    Window::new(format!("{} user", mutation.label()))
        .id(Id::new("user_confirm_modal"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.colored_label(COLOR_AMBER, "⚠ Please confirm");
            ui.add_space(4.0);
            ui.label(prompt);
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                if ui
                    .button(RichText::new(mutation.label()).color(COLOR_RED))
                    .clicked()
                {
                    decision = Some(true);
                }
                if ui.button(CANCEL_LABEL).clicked() {
                    decision = Some(false);
                }
            });
        });

    if !open {
        decision = Some(false);
    }
    match decision {
        Some(true) => session.confirm(),
        Some(false) => session.cancel_confirm(),
        None => {}
    }
}
