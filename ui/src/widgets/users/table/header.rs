//! Gradient table header with drag-to-resize handles.

use egui::{Color32, CursorIcon, Id, Mesh, Painter, Rect, RichText, Sense, Shape, Stroke, Ui, pos2};
use egui_extras::TableRow;
use useradmin_business::prefs::{PreferenceStore, UiPreferences};

use super::columns::{HEADERS, RESIZE_HANDLE_WIDTH, column_span};
use crate::utils::colors::hex_to_color32;

/// Renders every header cell: gradient slice, label, resize handle.
pub fn render_table_header(
    header: &mut TableRow<'_, '_>,
    prefs: &mut UiPreferences,
    store: &mut dyn PreferenceStore,
) {
    let start = hex_to_color32(prefs.gradient.start);
    let end = hex_to_color32(prefs.gradient.end);

    for (column, label) in HEADERS.iter().enumerate() {
        let (t0, t1) = column_span(&prefs.columns, column);
        header.col(|ui| {
            let rect = ui.max_rect();
            paint_horizontal_gradient(
                ui.painter(),
                rect,
                lerp_color(start, end, t0),
                lerp_color(start, end, t1),
            );
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new(*label).strong().color(Color32::WHITE));
            });
            resize_handle(ui, rect, column, prefs, store);
        });
    }
}

fn resize_handle(
    ui: &mut Ui,
    cell: Rect,
    column: usize,
    prefs: &mut UiPreferences,
    store: &mut dyn PreferenceStore,
) {
    let handle = Rect::from_min_max(
        pos2(cell.right() - RESIZE_HANDLE_WIDTH, cell.top()),
        cell.right_bottom(),
    );
    let response = ui.interact(handle, Id::new(("user_table_resize", column)), Sense::drag());

    if response.drag_started()
        && let Some(pos) = response.interact_pointer_pos()
    {
        prefs.begin_resize(column, pos.x);
    }
    if response.dragged()
        && let Some(pos) = response.interact_pointer_pos()
    {
        prefs.drag_resize(pos.x);
    }
    if response.drag_stopped() {
        prefs.end_resize(store);
    }

    let active = response.hovered() || prefs.resizing_column() == Some(column);
    if active {
        ui.ctx().set_cursor_icon(CursorIcon::ResizeColumn);
    }
    let alpha = if active { 255 } else { 90 };
    ui.painter().vline(
        handle.center().x,
        handle.y_range(),
        Stroke::new(1.0, Color32::from_white_alpha(alpha)),
    );
}

fn paint_horizontal_gradient(painter: &Painter, rect: Rect, left: Color32, right: Color32) {
    let mut mesh = Mesh::default();
    mesh.colored_vertex(rect.left_top(), left);
    mesh.colored_vertex(rect.right_top(), right);
    mesh.colored_vertex(rect.right_bottom(), right);
    mesh.colored_vertex(rect.left_bottom(), left);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(Shape::mesh(mesh));
}

/// Linear blend in sRGB space, which is what CSS `linear-gradient` does by default.
fn lerp_color(from: Color32, to: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let channel = |a: u8, b: u8| {
        let value = f32::from(a) + (f32::from(b) - f32::from(a)) * t;
        value.round().clamp(0.0, 255.0) as u8
    };
    Color32::from_rgb(
        channel(from.r(), to.r()),
        channel(from.g(), to.g()),
        channel(from.b(), to.b()),
    )
}
