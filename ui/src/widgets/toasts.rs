use egui::{Align2, Area, Color32, Context, Frame, Id, Margin, Order, RichText};
use useradmin_business::Toasts;

use crate::utils::colors::toast_color;

/// Stack of toasts in the bottom-right corner, oldest on top.
pub fn show_toasts(ctx: &Context, toasts: &Toasts) {
    if toasts.is_empty() {
        return;
    }

    Area::new(Id::new("toasts"))
        .anchor(Align2::RIGHT_BOTTOM, [-16.0, -16.0])
        .order(Order::Foreground)
        .interactable(false)
        .show(ctx, |ui| {
            for toast in toasts.iter() {
                Frame::NONE
                    .fill(toast_color(toast.kind))
                    .corner_radius(6.0)
                    .inner_margin(Margin::symmetric(12, 8))
                    .show(ui, |ui| {
                        ui.label(RichText::new(&toast.message).color(Color32::WHITE));
                    });
                ui.add_space(6.0);
            }
        });
}
