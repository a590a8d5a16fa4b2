//! Row rendering for the user table.

use egui::{Stroke, Ui};
use egui_extras::TableRow;
use useradmin_business::users::{RowAction, User};

use super::cells::{
    render_action_buttons, render_id_cell, render_role_badge, render_status_badge,
    render_text_cell,
};

/// Renders one user. Returns the action button clicked in this row, if any.
pub fn render_user_row(
    row: &mut TableRow<'_, '_>,
    user: &User,
    actions: &[RowAction],
) -> Option<RowAction> {
    let mut clicked = None;

    row.col(|ui| {
        render_id_cell(ui, user.id);
        draw_cell_bottom_border(ui);
    });
    row.col(|ui| {
        render_text_cell(ui, Some(&user.username));
        draw_cell_bottom_border(ui);
    });

    let optional_columns = [
        user.real_name.as_deref(),
        user.employee_id.as_deref(),
        user.department_name.as_deref(),
        user.position_name.as_deref(),
        user.email.as_deref(),
        user.phone.as_deref(),
    ];
    for text in optional_columns {
        row.col(|ui| {
            render_text_cell(ui, text);
            draw_cell_bottom_border(ui);
        });
    }

    row.col(|ui| {
        render_role_badge(ui, user.role);
        draw_cell_bottom_border(ui);
    });
    row.col(|ui| {
        render_status_badge(ui, user.status);
        draw_cell_bottom_border(ui);
    });
    row.col(|ui| {
        clicked = render_action_buttons(ui, actions);
        draw_cell_bottom_border(ui);
    });

    clicked
}

#[inline]
fn draw_cell_bottom_border(ui: &mut Ui) {
    let rect = ui.max_rect();
    let border_color = ui.visuals().widgets.noninteractive.bg_stroke.color;
    ui.painter().hline(
        rect.left()..=rect.right(),
        rect.bottom(),
        Stroke::new(1.0, border_color),
    );
}
