//! Cell rendering functions for the user table.

use egui::{Color32, Frame, Margin, RichText, Stroke, Ui};
use useradmin_business::users::{Role, RowAction, UserStatus};

use crate::utils::colors::{COLOR_RED, role_color, status_color};

/// Placeholder for missing values.
pub const EMPTY_CELL: &str = "-";

#[inline]
pub fn render_id_cell(ui: &mut Ui, id: u64) {
    ui.label(RichText::new(id.to_string()).monospace());
}

/// Plain text cell; `None` and blank strings render as [`EMPTY_CELL`].
#[inline]
pub fn render_text_cell(ui: &mut Ui, text: Option<&str>) {
    let text = text.map(str::trim).filter(|t| !t.is_empty());
    match text {
        Some(text) => {
            ui.label(text).on_hover_text(text);
        }
        None => {
            ui.weak(EMPTY_CELL);
        }
    }
}

pub fn render_role_badge(ui: &mut Ui, role: Role) {
    badge(ui, role.label(), role_color(role));
}

pub fn render_status_badge(ui: &mut Ui, status: UserStatus) {
    badge(ui, status.label(), status_color(status));
}

fn badge(ui: &mut Ui, text: &str, color: Color32) {
    Frame::NONE
        .fill(color.gamma_multiply(0.15))
        .stroke(Stroke::new(1.0, color))
        .corner_radius(4.0)
        .inner_margin(Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small().color(color));
        });
}

/// Renders the row's action buttons. Returns the clicked one, if any.
pub fn render_action_buttons(ui: &mut Ui, actions: &[RowAction]) -> Option<RowAction> {
    let mut clicked = None;
    ui.horizontal(|ui| {
        for &action in actions {
            let mut text = RichText::new(action.label());
            if action.is_destructive() {
                text = text.color(COLOR_RED);
            }
            if ui.small_button(text).clicked() {
                clicked = Some(action);
            }
        }
    });
    clicked
}
